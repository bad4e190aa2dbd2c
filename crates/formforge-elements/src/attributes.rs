//! Typed attribute records, one per field kind.
//!
//! The serialized attribute keys are camelCase to match the document wire
//! format (`helperText`, `placeHolder`, ...). Each record's `Default` yields
//! the attributes a freshly placed instance of that kind starts with.

use serde::{Deserialize, Serialize};

use crate::kinds::FieldKind;

/// Attributes of a single-line text input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextAttributes {
    /// Label displayed above the input.
    pub label: String,
    /// Secondary text displayed below the input.
    pub helper_text: String,
    /// Whether a submission must supply a non-empty value.
    pub required: bool,
    /// Placeholder shown in the empty input.
    pub place_holder: String,
}

impl Default for TextAttributes {
    fn default() -> Self {
        Self {
            label: "Text field".to_string(),
            helper_text: "Helper text".to_string(),
            required: false,
            place_holder: "Value here...".to_string(),
        }
    }
}

/// Attributes of a large heading.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TitleAttributes {
    /// The heading text.
    pub title: String,
}

impl Default for TitleAttributes {
    fn default() -> Self {
        Self {
            title: "Title field".to_string(),
        }
    }
}

/// Attributes of a secondary heading.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubTitleAttributes {
    /// The heading text.
    pub sub_title: String,
}

impl Default for SubTitleAttributes {
    fn default() -> Self {
        Self {
            sub_title: "SubTitle field".to_string(),
        }
    }
}

/// Attributes of a static paragraph.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParagraphAttributes {
    /// The paragraph body.
    pub text: String,
}

impl Default for ParagraphAttributes {
    fn default() -> Self {
        Self {
            text: "Text".to_string(),
        }
    }
}

/// Attributes of a vertical spacer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpacerAttributes {
    /// Height in pixels.
    pub height: u32,
}

impl Default for SpacerAttributes {
    fn default() -> Self {
        Self { height: 20 }
    }
}

/// Attributes of a numeric input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NumberAttributes {
    /// Label displayed above the input.
    pub label: String,
    /// Secondary text displayed below the input.
    pub helper_text: String,
    /// Whether a submission must supply a non-empty value.
    pub required: bool,
    /// Placeholder shown in the empty input.
    pub place_holder: String,
}

impl Default for NumberAttributes {
    fn default() -> Self {
        Self {
            label: "Number field".to_string(),
            helper_text: "Helper text".to_string(),
            required: false,
            place_holder: "0".to_string(),
        }
    }
}

/// Attributes of a multi-line text input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextAreaAttributes {
    /// Label displayed above the input.
    pub label: String,
    /// Secondary text displayed below the input.
    pub helper_text: String,
    /// Whether a submission must supply a non-empty value.
    pub required: bool,
    /// Placeholder shown in the empty input.
    pub place_holder: String,
    /// Visible row count.
    pub rows: u32,
}

impl Default for TextAreaAttributes {
    fn default() -> Self {
        Self {
            label: "Text Area field".to_string(),
            helper_text: "Helper text".to_string(),
            required: false,
            place_holder: "Value Here...".to_string(),
            rows: 3,
        }
    }
}

/// Attributes of a date picker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DateAttributes {
    /// Label displayed above the input.
    pub label: String,
    /// Secondary text displayed below the input.
    pub helper_text: String,
    /// Whether a submission must supply a non-empty value.
    pub required: bool,
}

impl Default for DateAttributes {
    fn default() -> Self {
        Self {
            label: "Date field".to_string(),
            helper_text: "Pick a date".to_string(),
            required: false,
        }
    }
}

/// Attributes of a single-choice dropdown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SelectAttributes {
    /// Label displayed above the input.
    pub label: String,
    /// Secondary text displayed below the input.
    pub helper_text: String,
    /// Whether a submission must supply a non-empty value.
    pub required: bool,
    /// Placeholder shown when nothing is selected.
    pub place_holder: String,
    /// Selectable options, in display order.
    pub options: Vec<String>,
}

impl Default for SelectAttributes {
    fn default() -> Self {
        Self {
            label: "Select field".to_string(),
            helper_text: "Helper text".to_string(),
            required: false,
            place_holder: "Value here...".to_string(),
            options: Vec::new(),
        }
    }
}

/// Attributes of a checkbox.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckBoxAttributes {
    /// Label displayed next to the checkbox.
    pub label: String,
    /// Secondary text displayed below the checkbox.
    pub helper_text: String,
    /// Whether a submission must check the box.
    pub required: bool,
}

impl Default for CheckBoxAttributes {
    fn default() -> Self {
        Self {
            label: "Checkbox field".to_string(),
            helper_text: "Helper text".to_string(),
            required: false,
        }
    }
}

/// The attribute bag of one field instance, tagged by kind.
///
/// Every instance carries exactly the record its kind defines, so a
/// wrong-shaped bag is unrepresentable. The serialized form is
/// `{"kind": "...", "attributes": {...}}`; the separator kind carries no
/// attributes and serializes without the `attributes` key.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "attributes")]
pub enum FieldAttributes {
    /// Single-line text input attributes.
    #[serde(rename = "TextField")]
    Text(TextAttributes),
    /// Heading attributes.
    #[serde(rename = "TitleField")]
    Title(TitleAttributes),
    /// Secondary heading attributes.
    #[serde(rename = "SubTitleField")]
    SubTitle(SubTitleAttributes),
    /// Static paragraph attributes.
    #[serde(rename = "ParagraphField")]
    Paragraph(ParagraphAttributes),
    /// Horizontal rule; carries no attributes.
    #[serde(rename = "SeparatorField")]
    Separator,
    /// Vertical spacer attributes.
    #[serde(rename = "SpacerField")]
    Spacer(SpacerAttributes),
    /// Numeric input attributes.
    #[serde(rename = "NumberField")]
    Number(NumberAttributes),
    /// Multi-line text input attributes.
    #[serde(rename = "TextAreaField")]
    TextArea(TextAreaAttributes),
    /// Date picker attributes.
    #[serde(rename = "DateField")]
    Date(DateAttributes),
    /// Dropdown attributes.
    #[serde(rename = "SelectField")]
    Select(SelectAttributes),
    /// Checkbox attributes.
    #[serde(rename = "CheckBoxField")]
    CheckBox(CheckBoxAttributes),
}

impl FieldAttributes {
    /// The default attribute bag for a kind, as used at construction time.
    pub fn defaults_for(kind: FieldKind) -> Self {
        match kind {
            FieldKind::Text => Self::Text(TextAttributes::default()),
            FieldKind::Title => Self::Title(TitleAttributes::default()),
            FieldKind::SubTitle => Self::SubTitle(SubTitleAttributes::default()),
            FieldKind::Paragraph => Self::Paragraph(ParagraphAttributes::default()),
            FieldKind::Separator => Self::Separator,
            FieldKind::Spacer => Self::Spacer(SpacerAttributes::default()),
            FieldKind::Number => Self::Number(NumberAttributes::default()),
            FieldKind::TextArea => Self::TextArea(TextAreaAttributes::default()),
            FieldKind::Date => Self::Date(DateAttributes::default()),
            FieldKind::Select => Self::Select(SelectAttributes::default()),
            FieldKind::CheckBox => Self::CheckBox(CheckBoxAttributes::default()),
        }
    }

    /// The kind this bag belongs to.
    pub const fn kind(&self) -> FieldKind {
        match self {
            Self::Text(_) => FieldKind::Text,
            Self::Title(_) => FieldKind::Title,
            Self::SubTitle(_) => FieldKind::SubTitle,
            Self::Paragraph(_) => FieldKind::Paragraph,
            Self::Separator => FieldKind::Separator,
            Self::Spacer(_) => FieldKind::Spacer,
            Self::Number(_) => FieldKind::Number,
            Self::TextArea(_) => FieldKind::TextArea,
            Self::Date(_) => FieldKind::Date,
            Self::Select(_) => FieldKind::Select,
            Self::CheckBox(_) => FieldKind::CheckBox,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_kind() {
        for kind in FieldKind::ALL {
            assert_eq!(FieldAttributes::defaults_for(kind).kind(), kind);
        }
    }

    #[test]
    fn test_number_defaults() {
        let attrs = NumberAttributes::default();
        assert_eq!(attrs.label, "Number field");
        assert_eq!(attrs.helper_text, "Helper text");
        assert!(!attrs.required);
        assert_eq!(attrs.place_holder, "0");
    }

    #[test]
    fn test_wire_keys_are_camel_case() {
        let json = serde_json::to_value(TextAttributes::default()).unwrap();
        let obj = json.as_object().unwrap();
        assert!(obj.contains_key("helperText"));
        assert!(obj.contains_key("placeHolder"));
        assert!(obj.contains_key("label"));
        assert!(obj.contains_key("required"));
    }

    #[test]
    fn test_sub_title_wire_key() {
        let json = serde_json::to_value(SubTitleAttributes::default()).unwrap();
        assert_eq!(json["subTitle"], "SubTitle field");
    }

    #[test]
    fn test_separator_serializes_without_attributes() {
        let json = serde_json::to_value(FieldAttributes::Separator).unwrap();
        assert_eq!(json["kind"], "SeparatorField");
        assert!(json.get("attributes").is_none());
    }

    #[test]
    fn test_tagged_round_trip() {
        let attrs = FieldAttributes::Select(SelectAttributes {
            options: vec!["a".into(), "b".into()],
            required: true,
            ..SelectAttributes::default()
        });
        let json = serde_json::to_string(&attrs).unwrap();
        let back: FieldAttributes = serde_json::from_str(&json).unwrap();
        assert_eq!(back, attrs);
    }

    #[test]
    fn test_unknown_kind_fails_deserialize() {
        let raw = r#"{"kind":"EmailField","attributes":{}}"#;
        assert!(serde_json::from_str::<FieldAttributes>(raw).is_err());
    }
}
