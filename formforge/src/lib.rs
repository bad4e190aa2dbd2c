//! # formforge
//!
//! A form builder backend for Rust.
//!
//! This is the meta-crate that re-exports all sub-crates for convenient
//! access. Depend on `formforge` to get everything, or on individual crates
//! for finer-grained control.

/// Core types: errors, ids, settings, logging.
pub use formforge_core as core;

/// The field type registry: kinds, attribute records, instances.
pub use formforge_elements as elements;

/// The document model: ordered field sequences and submission validation.
pub use formforge_document as document;

/// Authentication: users and signed bearer tokens.
pub use formforge_auth as auth;

/// Persistence: the form store trait and its backends.
pub use formforge_store as store;

/// The axum REST API.
#[cfg(feature = "http")]
pub use formforge_http as http;

/// Management commands (CLI).
#[cfg(feature = "cli")]
pub use formforge_cli as cli;

/// Commonly used types, importable in one line.
pub mod prelude {
    pub use formforge_core::{FieldId, FormForgeError, FormForgeResult, Settings};
    pub use formforge_document::{Document, Stage};
    pub use formforge_elements::{FieldAttributes, FieldInstance, FieldKind};
    pub use formforge_store::{FormRecord, FormStats, FormStore, SubmissionRecord};
}
