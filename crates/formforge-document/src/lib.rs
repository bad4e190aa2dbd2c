//! # formforge-document
//!
//! The document model: an ordered sequence of field instances that makes up
//! one form's layout, together with the operations a builder session needs
//! (add, remove, reorder, update attributes), the JSON wire codec, and
//! whole-submission validation.
//!
//! A document starts in `Draft` and can be published exactly once; after
//! that every mutating operation is rejected while serialization and
//! submission validation remain available.

pub mod document;
pub mod submission;

pub use document::{Document, Stage};
pub use formforge_core::error::SubmissionReport;
