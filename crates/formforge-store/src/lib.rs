//! # formforge-store
//!
//! The persistence boundary. The [`FormStore`] trait exposes every data
//! access the application performs: form CRUD scoped by owner, the one-way
//! publish transition, public visit/submission recording keyed by share
//! URL, and aggregate statistics.
//!
//! Owner-scoped calls treat an ownership mismatch exactly like a missing
//! row (`NotFound`), so a caller cannot probe for other users' forms.
//! Counter increments are applied atomically by each backend; consistency
//! for concurrent content saves is last-write-wins.

pub mod memory;
pub mod records;
pub mod sqlite;

use async_trait::async_trait;

use formforge_core::FormForgeResult;

pub use memory::MemoryStore;
pub use records::{FormRecord, FormStats, SubmissionRecord, MIN_FORM_NAME_LEN};
pub use sqlite::SqliteStore;

/// The persistence operations backing the form builder.
#[async_trait]
pub trait FormStore: Send + Sync {
    /// Creates an empty, unpublished form with a fresh share URL.
    ///
    /// Fails with `BadRequest` if the name is shorter than
    /// [`MIN_FORM_NAME_LEN`] characters.
    async fn create_form(
        &self,
        owner_id: &str,
        name: &str,
        description: &str,
    ) -> FormForgeResult<FormRecord>;

    /// Lists the owner's forms, newest first.
    async fn list_forms(&self, owner_id: &str) -> FormForgeResult<Vec<FormRecord>>;

    /// Fetches one form by id, scoped to the owner.
    async fn get_form(&self, owner_id: &str, form_id: i64) -> FormForgeResult<FormRecord>;

    /// Replaces the form's serialized document content (last-write-wins).
    ///
    /// Fails with `PublishedImmutable` once the form is published.
    async fn update_content(
        &self,
        owner_id: &str,
        form_id: i64,
        content: &str,
    ) -> FormForgeResult<()>;

    /// Publishes the form. One-way; publishing twice is a no-op.
    async fn publish(&self, owner_id: &str, form_id: i64) -> FormForgeResult<()>;

    /// Returns the form content for the public submission page, atomically
    /// incrementing the visit counter. Not owner-scoped: anyone holding the
    /// share URL may call this.
    async fn content_by_share_url(&self, share_url: &str) -> FormForgeResult<String>;

    /// Returns a published form's content without touching any counter.
    /// Backs the server-side validation pass that precedes
    /// [`record_submission`](FormStore::record_submission).
    async fn published_content(&self, share_url: &str) -> FormForgeResult<String>;

    /// Records one submission for a published form, atomically incrementing
    /// the submission counter. Unpublished forms are indistinguishable from
    /// missing ones.
    async fn record_submission(&self, share_url: &str, content: &str) -> FormForgeResult<()>;

    /// Fetches a form together with all of its submissions, oldest first.
    async fn form_with_submissions(
        &self,
        owner_id: &str,
        form_id: i64,
    ) -> FormForgeResult<(FormRecord, Vec<SubmissionRecord>)>;

    /// Aggregates visit/submission totals over all the owner's forms.
    async fn stats(&self, owner_id: &str) -> FormForgeResult<FormStats>;
}
