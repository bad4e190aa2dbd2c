//! The ordered field-instance sequence and its builder operations.

use formforge_core::{FieldId, FormForgeError, FormForgeResult};
use formforge_elements::{FieldAttributes, FieldInstance, FieldKind};

/// The lifecycle stage of a document.
///
/// `Draft` documents accept every builder operation; `Published` documents
/// reject mutation permanently. There is no transition back to `Draft`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    /// Mutable: the owner is still arranging fields.
    Draft,
    /// Frozen: the layout is live and collecting submissions.
    Published,
}

/// One form's layout: an ordered sequence of field instances.
///
/// Order is meaningful (visual top-to-bottom) and is preserved through
/// every operation and through serialization round-trips. The document is
/// owned by a single editing session; there is no internal sharing.
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    fields: Vec<FieldInstance>,
    stage: Stage,
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

impl Document {
    /// Creates an empty draft document.
    pub const fn new() -> Self {
        Self {
            fields: Vec::new(),
            stage: Stage::Draft,
        }
    }

    /// The instances, in layout order.
    pub fn fields(&self) -> &[FieldInstance] {
        &self.fields
    }

    /// Number of instances in the document.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// `true` if the document has no instances.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// The document's lifecycle stage.
    pub const fn stage(&self) -> Stage {
        self.stage
    }

    /// `true` once the document has been published.
    pub const fn is_published(&self) -> bool {
        matches!(self.stage, Stage::Published)
    }

    /// Freezes the document. Irreversible; calling again is a no-op.
    pub fn publish(&mut self) {
        self.stage = Stage::Published;
    }

    /// Looks up an instance by id.
    pub fn get(&self, id: &FieldId) -> Option<&FieldInstance> {
        self.fields.iter().find(|f| f.id() == id)
    }

    fn position(&self, id: &FieldId) -> FormForgeResult<usize> {
        self.fields
            .iter()
            .position(|f| f.id() == id)
            .ok_or_else(|| FormForgeError::NotFound(format!("field instance {id}")))
    }

    fn ensure_draft(&self) -> FormForgeResult<()> {
        if self.is_published() {
            return Err(FormForgeError::PublishedImmutable);
        }
        Ok(())
    }

    /// Constructs a new instance of `kind` with default attributes and a
    /// fresh id, inserting it at `at` (clamped; default end). Returns the
    /// new instance's id.
    pub fn add_instance(&mut self, kind: FieldKind, at: Option<usize>) -> FormForgeResult<FieldId> {
        self.ensure_draft()?;

        let mut id = FieldId::generate();
        while self.get(&id).is_some() {
            id = FieldId::generate();
        }

        let index = at.unwrap_or(self.fields.len()).min(self.fields.len());
        self.fields.insert(index, kind.construct(id.clone()));
        Ok(id)
    }

    /// Removes the instance with the given id, returning it.
    pub fn remove_instance(&mut self, id: &FieldId) -> FormForgeResult<FieldInstance> {
        self.ensure_draft()?;
        let index = self.position(id)?;
        Ok(self.fields.remove(index))
    }

    /// Relocates one instance to `to_index` (clamped), preserving the
    /// relative order of all other instances.
    pub fn move_instance(&mut self, id: &FieldId, to_index: usize) -> FormForgeResult<()> {
        self.ensure_draft()?;
        let from = self.position(id)?;
        let instance = self.fields.remove(from);
        let to = to_index.min(self.fields.len());
        self.fields.insert(to, instance);
        Ok(())
    }

    /// Replaces the attribute bag of the named instance wholesale.
    ///
    /// Fails with `KindMismatch` if the bag belongs to a different kind;
    /// the instance's id and position are never touched.
    pub fn update_attributes(
        &mut self,
        id: &FieldId,
        attributes: FieldAttributes,
    ) -> FormForgeResult<()> {
        self.ensure_draft()?;
        let index = self.position(id)?;
        self.fields[index].set_attributes(attributes)
    }

    /// Serializes the ordered instance sequence to JSON.
    ///
    /// The stage is not part of the wire format; it lives on the owning
    /// form record.
    pub fn to_json(&self) -> FormForgeResult<String> {
        serde_json::to_string(&self.fields)
            .map_err(|e| FormForgeError::ParseError(e.to_string()))
    }

    /// Deserializes a draft document from JSON.
    ///
    /// Malformed text or an unknown kind fails with `ParseError`.
    pub fn from_json(raw: &str) -> FormForgeResult<Self> {
        let fields: Vec<FieldInstance> =
            serde_json::from_str(raw).map_err(|e| FormForgeError::ParseError(e.to_string()))?;
        Ok(Self {
            fields,
            stage: Stage::Draft,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(doc: &Document) -> Vec<String> {
        doc.fields().iter().map(|f| f.id().to_string()).collect()
    }

    fn doc_with(kinds: &[FieldKind]) -> Document {
        let mut doc = Document::new();
        for kind in kinds {
            doc.add_instance(*kind, None).unwrap();
        }
        doc
    }

    #[test]
    fn test_add_appends_by_default() {
        let mut doc = Document::new();
        let a = doc.add_instance(FieldKind::Title, None).unwrap();
        let b = doc.add_instance(FieldKind::Text, None).unwrap();
        assert_eq!(ids(&doc), vec![a.to_string(), b.to_string()]);
    }

    #[test]
    fn test_add_at_index_preserves_others() {
        let mut doc = doc_with(&[FieldKind::Title, FieldKind::Text, FieldKind::Number]);
        let before = ids(&doc);
        let inserted = doc.add_instance(FieldKind::Date, Some(1)).unwrap();
        let after = ids(&doc);
        assert_eq!(after.len(), 4);
        assert_eq!(after[1], inserted.to_string());
        // Relative order of the originals is untouched.
        assert_eq!(
            vec![after[0].clone(), after[2].clone(), after[3].clone()],
            before
        );
    }

    #[test]
    fn test_add_at_out_of_range_clamps_to_end() {
        let mut doc = doc_with(&[FieldKind::Title]);
        let id = doc.add_instance(FieldKind::Text, Some(99)).unwrap();
        assert_eq!(doc.fields()[1].id(), &id);
    }

    #[test]
    fn test_remove_missing_is_not_found() {
        let mut doc = Document::new();
        let err = doc.remove_instance(&FieldId::new("nope")).unwrap_err();
        assert!(matches!(err, FormForgeError::NotFound(_)));
    }

    #[test]
    fn test_remove_keeps_order() {
        let mut doc = doc_with(&[FieldKind::Title, FieldKind::Text, FieldKind::Number]);
        let all = ids(&doc);
        let middle = FieldId::new(all[1].clone());
        let removed = doc.remove_instance(&middle).unwrap();
        assert_eq!(removed.id(), &middle);
        assert_eq!(ids(&doc), vec![all[0].clone(), all[2].clone()]);
    }

    #[test]
    fn test_move_is_stable_reorder() {
        let mut doc = doc_with(&[
            FieldKind::Title,
            FieldKind::Text,
            FieldKind::Number,
            FieldKind::Date,
        ]);
        let all = ids(&doc);
        doc.move_instance(&FieldId::new(all[3].clone()), 0).unwrap();
        assert_eq!(
            ids(&doc),
            vec![
                all[3].clone(),
                all[0].clone(),
                all[1].clone(),
                all[2].clone()
            ]
        );
    }

    #[test]
    fn test_move_clamps_target() {
        let mut doc = doc_with(&[FieldKind::Title, FieldKind::Text]);
        let all = ids(&doc);
        doc.move_instance(&FieldId::new(all[0].clone()), 50).unwrap();
        assert_eq!(ids(&doc), vec![all[1].clone(), all[0].clone()]);
    }

    #[test]
    fn test_move_missing_is_not_found() {
        let mut doc = doc_with(&[FieldKind::Title]);
        assert!(doc.move_instance(&FieldId::new("nope"), 0).is_err());
    }

    #[test]
    fn test_update_attributes_same_kind() {
        use formforge_elements::{FieldAttributes, TextAttributes};
        let mut doc = doc_with(&[FieldKind::Text]);
        let id = FieldId::new(ids(&doc)[0].clone());
        doc.update_attributes(
            &id,
            FieldAttributes::Text(TextAttributes {
                label: "Your name".into(),
                required: true,
                ..TextAttributes::default()
            }),
        )
        .unwrap();
        let instance = doc.get(&id).unwrap();
        assert!(matches!(
            instance.attributes(),
            FieldAttributes::Text(a) if a.label == "Your name" && a.required
        ));
    }

    #[test]
    fn test_update_attributes_wrong_kind() {
        use formforge_elements::{FieldAttributes, NumberAttributes};
        let mut doc = doc_with(&[FieldKind::Text]);
        let id = FieldId::new(ids(&doc)[0].clone());
        let err = doc
            .update_attributes(&id, FieldAttributes::Number(NumberAttributes::default()))
            .unwrap_err();
        assert!(matches!(err, FormForgeError::KindMismatch { .. }));
    }

    #[test]
    fn test_published_rejects_mutation() {
        use formforge_elements::FieldAttributes;
        let mut doc = doc_with(&[FieldKind::Text]);
        let id = FieldId::new(ids(&doc)[0].clone());
        doc.publish();
        assert!(doc.is_published());

        assert!(matches!(
            doc.add_instance(FieldKind::Title, None).unwrap_err(),
            FormForgeError::PublishedImmutable
        ));
        assert!(doc.remove_instance(&id).is_err());
        assert!(doc.move_instance(&id, 0).is_err());
        assert!(matches!(
            doc.update_attributes(&id, FieldAttributes::defaults_for(FieldKind::Text))
                .unwrap_err(),
            FormForgeError::PublishedImmutable
        ));

        // Read paths stay available.
        assert_eq!(doc.len(), 1);
        assert!(doc.to_json().is_ok());
    }

    #[test]
    fn test_empty_round_trip() {
        let doc = Document::new();
        let json = doc.to_json().unwrap();
        assert_eq!(json, "[]");
        let back = Document::from_json(&json).unwrap();
        assert!(back.is_empty());
    }

    #[test]
    fn test_round_trip_preserves_everything() {
        let mut doc = doc_with(&[
            FieldKind::Title,
            FieldKind::Text,
            FieldKind::Separator,
            FieldKind::Select,
            FieldKind::CheckBox,
        ]);
        use formforge_elements::{FieldAttributes, SelectAttributes};
        let select_id = FieldId::new(ids(&doc)[3].clone());
        doc.update_attributes(
            &select_id,
            FieldAttributes::Select(SelectAttributes {
                options: vec!["red".into(), "blue".into()],
                ..SelectAttributes::default()
            }),
        )
        .unwrap();

        let back = Document::from_json(&doc.to_json().unwrap()).unwrap();
        assert_eq!(back.fields(), doc.fields());
    }

    #[test]
    fn test_default_number_field_round_trip() {
        use formforge_elements::{FieldAttributes, NumberAttributes};
        let mut doc = Document::new();
        doc.add_instance(FieldKind::Number, None).unwrap();
        let back = Document::from_json(&doc.to_json().unwrap()).unwrap();
        assert_eq!(back.len(), 1);
        let instance = &back.fields()[0];
        assert_eq!(instance.kind(), FieldKind::Number);
        assert_eq!(
            instance.attributes(),
            &FieldAttributes::Number(NumberAttributes::default())
        );
    }

    #[test]
    fn test_from_json_malformed() {
        assert!(matches!(
            Document::from_json("not json").unwrap_err(),
            FormForgeError::ParseError(_)
        ));
    }

    #[test]
    fn test_from_json_unknown_kind() {
        let raw = r#"[{"id":"f1","kind":"EmailField","attributes":{}}]"#;
        assert!(matches!(
            Document::from_json(raw).unwrap_err(),
            FormForgeError::ParseError(_)
        ));
    }
}
