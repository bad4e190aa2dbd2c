//! Field instances: one placed occurrence of a kind within a document.

use serde::{Deserialize, Serialize};

use formforge_core::{FieldId, FormForgeError, FormForgeResult};

use crate::attributes::FieldAttributes;
use crate::kinds::FieldKind;

/// One placed occurrence of a field kind, with its own id and attributes.
///
/// The id is assigned at construction and never reassigned; the attribute
/// bag can be replaced wholesale but only with a bag of the same kind.
/// Serializes as `{"id": ..., "kind": ..., "attributes": {...}}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldInstance {
    id: FieldId,
    #[serde(flatten)]
    attributes: FieldAttributes,
}

impl FieldKind {
    /// Constructs a new instance of this kind with its default attributes
    /// and the caller-supplied id.
    pub fn construct(self, id: FieldId) -> FieldInstance {
        FieldInstance {
            id,
            attributes: FieldAttributes::defaults_for(self),
        }
    }
}

impl FieldInstance {
    /// Creates an instance from an existing attribute bag.
    pub fn new(id: FieldId, attributes: FieldAttributes) -> Self {
        Self { id, attributes }
    }

    /// The instance's unique id.
    pub const fn id(&self) -> &FieldId {
        &self.id
    }

    /// The instance's kind, derived from its attribute bag.
    pub const fn kind(&self) -> FieldKind {
        self.attributes.kind()
    }

    /// The instance's attribute bag.
    pub const fn attributes(&self) -> &FieldAttributes {
        &self.attributes
    }

    /// Replaces the attribute bag wholesale.
    ///
    /// The new bag must belong to the instance's kind; the id is never
    /// touched.
    pub fn set_attributes(&mut self, attributes: FieldAttributes) -> FormForgeResult<()> {
        if attributes.kind() != self.kind() {
            return Err(FormForgeError::KindMismatch {
                expected: self.kind().wire_name().to_string(),
                got: attributes.kind().wire_name().to_string(),
            });
        }
        self.attributes = attributes;
        Ok(())
    }

    /// Checks a candidate submitted value against this instance.
    ///
    /// Input kinds with `required` set accept only a non-empty value (the
    /// checkbox requires the literal `"true"`); optional inputs and
    /// layout-only kinds accept anything, including the empty string.
    pub fn validate(&self, raw: &str) -> bool {
        match &self.attributes {
            FieldAttributes::Text(a) => !a.required || !raw.is_empty(),
            FieldAttributes::Number(a) => !a.required || !raw.is_empty(),
            FieldAttributes::TextArea(a) => !a.required || !raw.is_empty(),
            FieldAttributes::Date(a) => !a.required || !raw.is_empty(),
            FieldAttributes::Select(a) => !a.required || !raw.is_empty(),
            FieldAttributes::CheckBox(a) => !a.required || raw == "true",
            FieldAttributes::Title(_)
            | FieldAttributes::SubTitle(_)
            | FieldAttributes::Paragraph(_)
            | FieldAttributes::Separator
            | FieldAttributes::Spacer(_) => true,
        }
    }
}
