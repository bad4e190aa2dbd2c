//! Whole-submission validation.
//!
//! At submission time the document walks every instance, dispatching to its
//! validator, and reports one verdict per instance. The pass never
//! short-circuits so the caller can highlight every failing input at once.

use std::collections::{BTreeMap, HashMap};

use formforge_core::error::SubmissionReport;

use crate::document::Document;

impl Document {
    /// Validates a submission against every instance in the document.
    ///
    /// `values` maps instance ids to submitted strings. Ids absent from the
    /// document are ignored; instances absent from `values` are checked
    /// against the empty string. The report contains exactly one entry per
    /// instance.
    pub fn validate_submission(&self, values: &HashMap<String, String>) -> SubmissionReport {
        let mut results = BTreeMap::new();
        for instance in self.fields() {
            let raw = values
                .get(instance.id().as_str())
                .map_or("", String::as_str);
            results.insert(instance.id().to_string(), instance.validate(raw));
        }
        SubmissionReport::from_results(results)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use formforge_core::FieldId;
    use formforge_elements::{
        FieldAttributes, FieldInstance, FieldKind, NumberAttributes, TextAttributes,
    };

    fn values(entries: &[(&str, &str)]) -> HashMap<String, String> {
        entries
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect()
    }

    /// A document with one required Number field ("f1") and one optional
    /// Text field ("f2").
    fn number_and_text() -> Document {
        let json = serde_json::to_string(&[
            FieldInstance::new(
                FieldId::new("f1"),
                FieldAttributes::Number(NumberAttributes {
                    required: true,
                    ..NumberAttributes::default()
                }),
            ),
            FieldInstance::new(FieldId::new("f2"), FieldAttributes::Text(TextAttributes::default())),
        ])
        .unwrap();
        Document::from_json(&json).unwrap()
    }

    #[test]
    fn test_missing_required_field_fails() {
        let doc = number_and_text();
        let report = doc.validate_submission(&values(&[("f1", ""), ("f2", "hello")]));
        assert!(!report.valid);
        assert_eq!(report.field_results.get("f1"), Some(&false));
        assert_eq!(report.field_results.get("f2"), Some(&true));
    }

    #[test]
    fn test_valid_submission() {
        let doc = number_and_text();
        let report = doc.validate_submission(&values(&[("f1", "42")]));
        assert!(report.valid);
        // f2 is optional and missing from the input: treated as empty, valid.
        assert_eq!(report.field_results.get("f2"), Some(&true));
    }

    #[test]
    fn test_one_entry_per_instance() {
        let mut doc = Document::new();
        for kind in FieldKind::ALL {
            doc.add_instance(kind, None).unwrap();
        }
        let report = doc.validate_submission(&HashMap::new());
        assert_eq!(report.field_results.len(), doc.len());
    }

    #[test]
    fn test_no_short_circuit() {
        let json = serde_json::to_string(&[
            FieldInstance::new(
                FieldId::new("a"),
                FieldAttributes::Text(TextAttributes {
                    required: true,
                    ..TextAttributes::default()
                }),
            ),
            FieldInstance::new(
                FieldId::new("b"),
                FieldAttributes::Number(NumberAttributes {
                    required: true,
                    ..NumberAttributes::default()
                }),
            ),
        ])
        .unwrap();
        let doc = Document::from_json(&json).unwrap();
        let report = doc.validate_submission(&HashMap::new());
        // Both failures reported, not just the first.
        assert_eq!(report.failing_fields(), vec!["a", "b"]);
    }

    #[test]
    fn test_extraneous_ids_ignored() {
        let doc = number_and_text();
        let report = doc.validate_submission(&values(&[("f1", "1"), ("ghost", "boo")]));
        assert!(report.valid);
        assert!(!report.field_results.contains_key("ghost"));
    }

    #[test]
    fn test_empty_document_is_valid() {
        let doc = Document::new();
        let report = doc.validate_submission(&HashMap::new());
        assert!(report.valid);
        assert!(report.field_results.is_empty());
    }

    #[test]
    fn test_validation_available_after_publish() {
        let mut doc = number_and_text();
        doc.publish();
        let report = doc.validate_submission(&values(&[("f1", "7")]));
        assert!(report.valid);
    }
}
