//! Persisted records and aggregate statistics.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use formforge_core::{FormForgeError, FormForgeResult};

/// Minimum length of a form name.
pub const MIN_FORM_NAME_LEN: usize = 4;

/// One form, as persisted.
///
/// Owns exactly one serialized document (`content`), a one-way `published`
/// flag, and monotonically non-decreasing visit and submission counters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormRecord {
    /// Row id.
    pub id: i64,
    /// Id of the owning user. Every owner-scoped store call checks this.
    pub owner_id: String,
    /// Display name (at least [`MIN_FORM_NAME_LEN`] characters).
    pub name: String,
    /// Optional description.
    pub description: String,
    /// The serialized document, stored verbatim.
    pub content: String,
    /// Whether the form is live. Never reverts to `false`.
    pub published: bool,
    /// The public share key; the submission page is reached through it.
    pub share_url: String,
    /// Total visits to the public page.
    pub visits: i64,
    /// Total accepted submissions.
    pub submissions: i64,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
}

/// One end-user submission, immutable once created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmissionRecord {
    /// Row id.
    pub id: i64,
    /// The form this submission belongs to.
    pub form_id: i64,
    /// The submitted values, as a JSON object keyed by field instance id.
    pub content: String,
    /// Submission timestamp.
    pub created_at: DateTime<Utc>,
}

/// Aggregate statistics over all of one owner's forms.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormStats {
    /// Total visits across all forms.
    pub visits: i64,
    /// Total submissions across all forms.
    pub submissions: i64,
    /// Submissions as a percentage of visits (0 when there are no visits).
    pub submission_rate: f64,
    /// `100 - submission_rate`.
    pub bounce_rate: f64,
}

impl FormStats {
    /// Derives the rates from raw counter sums.
    pub fn from_totals(visits: i64, submissions: i64) -> Self {
        #[allow(clippy::cast_precision_loss)]
        let submission_rate = if visits > 0 {
            submissions as f64 / visits as f64 * 100.0
        } else {
            0.0
        };
        Self {
            visits,
            submissions,
            submission_rate,
            bounce_rate: 100.0 - submission_rate,
        }
    }
}

/// Checks a candidate form name.
pub fn validate_form_name(name: &str) -> FormForgeResult<()> {
    if name.chars().count() < MIN_FORM_NAME_LEN {
        return Err(FormForgeError::BadRequest(format!(
            "form name must be at least {MIN_FORM_NAME_LEN} characters"
        )));
    }
    Ok(())
}
