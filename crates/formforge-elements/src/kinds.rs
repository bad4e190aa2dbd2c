//! The closed enumeration of field kinds.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use formforge_core::FormForgeError;

/// The category of a form element.
///
/// The wire discriminants (`"TextField"`, `"NumberField"`, ...) are part of
/// the serialized document format and must never change for existing kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FieldKind {
    /// A single-line text input.
    #[serde(rename = "TextField")]
    Text,
    /// A large heading. Layout-only; collects no value.
    #[serde(rename = "TitleField")]
    Title,
    /// A secondary heading. Layout-only.
    #[serde(rename = "SubTitleField")]
    SubTitle,
    /// A block of static text. Layout-only.
    #[serde(rename = "ParagraphField")]
    Paragraph,
    /// A horizontal rule. Layout-only.
    #[serde(rename = "SeparatorField")]
    Separator,
    /// Vertical whitespace of configurable height. Layout-only.
    #[serde(rename = "SpacerField")]
    Spacer,
    /// A numeric input.
    #[serde(rename = "NumberField")]
    Number,
    /// A multi-line text input.
    #[serde(rename = "TextAreaField")]
    TextArea,
    /// A date picker.
    #[serde(rename = "DateField")]
    Date,
    /// A single-choice dropdown.
    #[serde(rename = "SelectField")]
    Select,
    /// A checkbox.
    #[serde(rename = "CheckBoxField")]
    CheckBox,
}

impl FieldKind {
    /// All kinds, in designer palette order.
    pub const ALL: [Self; 11] = [
        Self::Text,
        Self::Title,
        Self::SubTitle,
        Self::Paragraph,
        Self::Separator,
        Self::Spacer,
        Self::Number,
        Self::TextArea,
        Self::Date,
        Self::Select,
        Self::CheckBox,
    ];

    /// The discriminant used in the serialized document format.
    pub const fn wire_name(self) -> &'static str {
        match self {
            Self::Text => "TextField",
            Self::Title => "TitleField",
            Self::SubTitle => "SubTitleField",
            Self::Paragraph => "ParagraphField",
            Self::Separator => "SeparatorField",
            Self::Spacer => "SpacerField",
            Self::Number => "NumberField",
            Self::TextArea => "TextAreaField",
            Self::Date => "DateField",
            Self::Select => "SelectField",
            Self::CheckBox => "CheckBoxField",
        }
    }

    /// The label shown on the designer palette button for this kind.
    pub const fn palette_label(self) -> &'static str {
        match self {
            Self::Text => "Text Field",
            Self::Title => "Title Field",
            Self::SubTitle => "SubTitle Field",
            Self::Paragraph => "Paragraph Field",
            Self::Separator => "Separator Field",
            Self::Spacer => "Spacer Field",
            Self::Number => "Number Field",
            Self::TextArea => "TextArea Field",
            Self::Date => "Date Field",
            Self::Select => "Select Field",
            Self::CheckBox => "CheckBox Field",
        }
    }

    /// Whether this kind collects a submitted value.
    ///
    /// Layout-only kinds (titles, paragraphs, separators, spacers) never
    /// produce a value and always validate.
    pub const fn is_input(self) -> bool {
        match self {
            Self::Text | Self::Number | Self::TextArea | Self::Date | Self::Select | Self::CheckBox => {
                true
            }
            Self::Title | Self::SubTitle | Self::Paragraph | Self::Separator | Self::Spacer => false,
        }
    }
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.wire_name())
    }
}

impl FromStr for FieldKind {
    type Err = FormForgeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.wire_name() == s)
            .ok_or_else(|| FormForgeError::ParseError(format!("unknown field kind: {s}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_names_round_trip() {
        for kind in FieldKind::ALL {
            assert_eq!(kind.wire_name().parse::<FieldKind>().unwrap(), kind);
        }
    }

    #[test]
    fn test_unknown_kind_is_parse_error() {
        let err = "EmailField".parse::<FieldKind>().unwrap_err();
        assert_eq!(err.status_code(), 400);
        assert!(err.to_string().contains("EmailField"));
    }

    #[test]
    fn test_serde_uses_wire_names() {
        let json = serde_json::to_string(&FieldKind::CheckBox).unwrap();
        assert_eq!(json, "\"CheckBoxField\"");
        let back: FieldKind = serde_json::from_str("\"SubTitleField\"").unwrap();
        assert_eq!(back, FieldKind::SubTitle);
    }

    #[test]
    fn test_input_kinds() {
        let inputs: Vec<FieldKind> = FieldKind::ALL
            .into_iter()
            .filter(|k| k.is_input())
            .collect();
        assert_eq!(
            inputs,
            vec![
                FieldKind::Text,
                FieldKind::Number,
                FieldKind::TextArea,
                FieldKind::Date,
                FieldKind::Select,
                FieldKind::CheckBox,
            ]
        );
    }

    #[test]
    fn test_all_is_exhaustive() {
        assert_eq!(FieldKind::ALL.len(), 11);
    }
}
