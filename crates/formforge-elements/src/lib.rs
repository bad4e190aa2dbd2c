//! # formforge-elements
//!
//! The field type registry: the closed set of field kinds a form can
//! contain, the typed attribute record each kind carries, default
//! construction, and per-kind submission validation.
//!
//! The kind set is fixed at compile time. Dispatch is an exhaustive `match`
//! on the [`FieldAttributes`] union, so there is no unknown-kind path at
//! runtime; adding a kind means adding an enum variant and letting the
//! compiler point at every match that needs a new arm.

pub mod attributes;
pub mod instance;
pub mod kinds;

pub use attributes::{
    CheckBoxAttributes, DateAttributes, FieldAttributes, NumberAttributes, ParagraphAttributes,
    SelectAttributes, SpacerAttributes, SubTitleAttributes, TextAreaAttributes, TextAttributes,
    TitleAttributes,
};
pub use instance::FieldInstance;
pub use kinds::FieldKind;
