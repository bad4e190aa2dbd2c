//! # formforge-core
//!
//! Foundation types shared by every formforge crate: the error taxonomy,
//! application settings, logging setup, and identifier generation.

pub mod error;
pub mod id;
pub mod logging;
pub mod settings;

pub use error::{FormForgeError, FormForgeResult};
pub use id::FieldId;
pub use settings::Settings;
