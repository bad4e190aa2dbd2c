//! An in-process store for development and tests.

use std::collections::BTreeMap;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;

use formforge_core::{FormForgeError, FormForgeResult};

use crate::records::{validate_form_name, FormRecord, FormStats, SubmissionRecord};
use crate::FormStore;

#[derive(Default)]
struct State {
    forms: BTreeMap<i64, FormRecord>,
    submissions: Vec<SubmissionRecord>,
    next_form_id: i64,
    next_submission_id: i64,
}

/// A [`FormStore`] keeping everything in process memory.
///
/// Behaviorally identical to [`SqliteStore`](crate::SqliteStore); used in
/// tests and as the `"memory"` database engine.
#[derive(Default)]
pub struct MemoryStore {
    state: RwLock<State>,
}

impl MemoryStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

fn not_found(what: &str) -> FormForgeError {
    FormForgeError::NotFound(what.to_string())
}

impl State {
    fn owned_form(&self, owner_id: &str, form_id: i64) -> FormForgeResult<&FormRecord> {
        self.forms
            .get(&form_id)
            .filter(|f| f.owner_id == owner_id)
            .ok_or_else(|| not_found(&format!("form {form_id}")))
    }

    fn owned_form_mut(&mut self, owner_id: &str, form_id: i64) -> FormForgeResult<&mut FormRecord> {
        self.forms
            .get_mut(&form_id)
            .filter(|f| f.owner_id == owner_id)
            .ok_or_else(|| not_found(&format!("form {form_id}")))
    }
}

#[async_trait]
impl FormStore for MemoryStore {
    async fn create_form(
        &self,
        owner_id: &str,
        name: &str,
        description: &str,
    ) -> FormForgeResult<FormRecord> {
        validate_form_name(name)?;
        let mut state = self.state.write().await;
        state.next_form_id += 1;
        let record = FormRecord {
            id: state.next_form_id,
            owner_id: owner_id.to_string(),
            name: name.to_string(),
            description: description.to_string(),
            content: "[]".to_string(),
            published: false,
            share_url: uuid::Uuid::new_v4().to_string(),
            visits: 0,
            submissions: 0,
            created_at: Utc::now(),
        };
        state.forms.insert(record.id, record.clone());
        tracing::debug!(form_id = record.id, owner = owner_id, "created form");
        Ok(record)
    }

    async fn list_forms(&self, owner_id: &str) -> FormForgeResult<Vec<FormRecord>> {
        let state = self.state.read().await;
        let mut forms: Vec<FormRecord> = state
            .forms
            .values()
            .filter(|f| f.owner_id == owner_id)
            .cloned()
            .collect();
        forms.sort_by(|a, b| (b.created_at, b.id).cmp(&(a.created_at, a.id)));
        Ok(forms)
    }

    async fn get_form(&self, owner_id: &str, form_id: i64) -> FormForgeResult<FormRecord> {
        let state = self.state.read().await;
        state.owned_form(owner_id, form_id).cloned()
    }

    async fn update_content(
        &self,
        owner_id: &str,
        form_id: i64,
        content: &str,
    ) -> FormForgeResult<()> {
        let mut state = self.state.write().await;
        let form = state.owned_form_mut(owner_id, form_id)?;
        if form.published {
            return Err(FormForgeError::PublishedImmutable);
        }
        form.content = content.to_string();
        Ok(())
    }

    async fn publish(&self, owner_id: &str, form_id: i64) -> FormForgeResult<()> {
        let mut state = self.state.write().await;
        let form = state.owned_form_mut(owner_id, form_id)?;
        form.published = true;
        Ok(())
    }

    async fn content_by_share_url(&self, share_url: &str) -> FormForgeResult<String> {
        let mut state = self.state.write().await;
        let form = state
            .forms
            .values_mut()
            .find(|f| f.share_url == share_url)
            .ok_or_else(|| not_found("form for share url"))?;
        form.visits += 1;
        Ok(form.content.clone())
    }

    async fn published_content(&self, share_url: &str) -> FormForgeResult<String> {
        let state = self.state.read().await;
        state
            .forms
            .values()
            .find(|f| f.share_url == share_url && f.published)
            .map(|f| f.content.clone())
            .ok_or_else(|| not_found("published form for share url"))
    }

    async fn record_submission(&self, share_url: &str, content: &str) -> FormForgeResult<()> {
        let mut state = self.state.write().await;
        let form_id = {
            let form = state
                .forms
                .values_mut()
                .find(|f| f.share_url == share_url && f.published)
                .ok_or_else(|| not_found("published form for share url"))?;
            form.submissions += 1;
            form.id
        };
        state.next_submission_id += 1;
        let record = SubmissionRecord {
            id: state.next_submission_id,
            form_id,
            content: content.to_string(),
            created_at: Utc::now(),
        };
        state.submissions.push(record);
        Ok(())
    }

    async fn form_with_submissions(
        &self,
        owner_id: &str,
        form_id: i64,
    ) -> FormForgeResult<(FormRecord, Vec<SubmissionRecord>)> {
        let state = self.state.read().await;
        let form = state.owned_form(owner_id, form_id)?.clone();
        let submissions = state
            .submissions
            .iter()
            .filter(|s| s.form_id == form_id)
            .cloned()
            .collect();
        Ok((form, submissions))
    }

    async fn stats(&self, owner_id: &str) -> FormForgeResult<FormStats> {
        let state = self.state.read().await;
        let (visits, submissions) = state
            .forms
            .values()
            .filter(|f| f.owner_id == owner_id)
            .fold((0, 0), |(v, s), f| (v + f.visits, s + f.submissions));
        Ok(FormStats::from_totals(visits, submissions))
    }
}
