//! Core error types for formforge.
//!
//! This module provides the [`FormForgeError`] enum covering every error
//! category the system can surface: authentication, lookup failures,
//! submission validation, document parsing, attribute-kind mismatches,
//! persistence errors, and configuration errors. Each variant maps to an
//! HTTP status code via [`FormForgeError::status_code`].

use std::collections::BTreeMap;
use std::fmt;

use thiserror::Error;

/// The outcome of validating one submission against a document.
///
/// Contains exactly one entry per field instance in the document, keyed by
/// instance id, so a caller can highlight every failing input at once.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmissionReport {
    /// `true` iff every field instance accepted its submitted value.
    pub valid: bool,
    /// Per-instance verdicts, keyed by field instance id.
    pub field_results: BTreeMap<String, bool>,
}

impl SubmissionReport {
    /// Builds a report from per-field verdicts.
    pub fn from_results(field_results: BTreeMap<String, bool>) -> Self {
        let valid = field_results.values().all(|ok| *ok);
        Self {
            valid,
            field_results,
        }
    }

    /// Returns the ids of the fields that failed validation.
    pub fn failing_fields(&self) -> Vec<&str> {
        self.field_results
            .iter()
            .filter(|(_, ok)| !**ok)
            .map(|(id, _)| id.as_str())
            .collect()
    }
}

impl fmt::Display for SubmissionReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.valid {
            write!(f, "all fields valid")
        } else {
            write!(f, "invalid fields: {}", self.failing_fields().join(", "))
        }
    }
}

/// The primary error type for formforge.
///
/// Covers authentication, lookups, submission validation, document parsing,
/// attribute updates, persistence, and configuration.
#[derive(Error, Debug)]
pub enum FormForgeError {
    /// No authenticated user on a request that requires one. Recoverable:
    /// the caller decides whether to redirect or show a guest view.
    #[error("Not authenticated")]
    NotAuthenticated,

    /// A request carried invalid input (e.g. a form name that is too short).
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// A requested form or field instance is absent, or not owned by the
    /// current user. Ownership failures deliberately look identical to
    /// missing rows.
    #[error("Not found: {0}")]
    NotFound(String),

    /// A submission failed one or more field validators. Carries the full
    /// per-field report, never just the first failure.
    #[error("Submission validation failed: {0}")]
    Validation(SubmissionReport),

    /// A serialized document (or other payload) is malformed or references
    /// an unknown field kind.
    #[error("Parse error: {0}")]
    ParseError(String),

    /// An attribute bag of one kind was supplied for an instance of another.
    #[error("Attribute kind mismatch: instance is {expected}, got {got}")]
    KindMismatch {
        /// The kind of the target instance.
        expected: String,
        /// The kind of the supplied attribute bag.
        got: String,
    },

    /// A mutation was attempted on a published form or document. Publishing
    /// freezes the layout permanently.
    #[error("Form is published and can no longer be edited")]
    PublishedImmutable,

    /// A persistence-layer failure.
    #[error("Database error: {0}")]
    DatabaseError(String),

    /// A configuration value is missing or invalid.
    #[error("Configuration error: {0}")]
    ConfigurationError(String),
}

impl FormForgeError {
    /// Returns the HTTP status code associated with this error.
    ///
    /// - `NotAuthenticated` -> 401
    /// - `NotFound` -> 404
    /// - `BadRequest`, `Validation`, `ParseError`, `KindMismatch` -> 400
    /// - `PublishedImmutable` -> 409
    /// - `DatabaseError`, `ConfigurationError` -> 500
    pub const fn status_code(&self) -> u16 {
        match self {
            Self::NotAuthenticated => 401,
            Self::NotFound(_) => 404,
            Self::BadRequest(_)
            | Self::Validation(_)
            | Self::ParseError(_)
            | Self::KindMismatch { .. } => 400,
            Self::PublishedImmutable => 409,
            Self::DatabaseError(_) | Self::ConfigurationError(_) => 500,
        }
    }
}

/// A convenience type alias for `Result<T, FormForgeError>`.
pub type FormForgeResult<T> = Result<T, FormForgeError>;

#[cfg(test)]
mod tests {
    use super::*;

    fn report(entries: &[(&str, bool)]) -> SubmissionReport {
        SubmissionReport::from_results(
            entries
                .iter()
                .map(|(id, ok)| ((*id).to_string(), *ok))
                .collect(),
        )
    }

    #[test]
    fn test_report_valid_when_all_pass() {
        let r = report(&[("f1", true), ("f2", true)]);
        assert!(r.valid);
        assert!(r.failing_fields().is_empty());
    }

    #[test]
    fn test_report_invalid_when_any_fail() {
        let r = report(&[("f1", false), ("f2", true)]);
        assert!(!r.valid);
        assert_eq!(r.failing_fields(), vec!["f1"]);
    }

    #[test]
    fn test_report_display() {
        let r = report(&[("f1", false), ("f2", false)]);
        assert_eq!(r.to_string(), "invalid fields: f1, f2");
        let ok = report(&[("f1", true)]);
        assert_eq!(ok.to_string(), "all fields valid");
    }

    #[test]
    fn test_status_codes() {
        assert_eq!(FormForgeError::NotAuthenticated.status_code(), 401);
        assert_eq!(FormForgeError::NotFound("form 3".into()).status_code(), 404);
        assert_eq!(FormForgeError::BadRequest("x".into()).status_code(), 400);
        assert_eq!(
            FormForgeError::Validation(report(&[("f1", false)])).status_code(),
            400
        );
        assert_eq!(FormForgeError::ParseError("bad json".into()).status_code(), 400);
        assert_eq!(
            FormForgeError::KindMismatch {
                expected: "TextField".into(),
                got: "NumberField".into()
            }
            .status_code(),
            400
        );
        assert_eq!(FormForgeError::PublishedImmutable.status_code(), 409);
        assert_eq!(FormForgeError::DatabaseError("x".into()).status_code(), 500);
        assert_eq!(
            FormForgeError::ConfigurationError("x".into()).status_code(),
            500
        );
    }

    #[test]
    fn test_kind_mismatch_display() {
        let err = FormForgeError::KindMismatch {
            expected: "TextField".into(),
            got: "NumberField".into(),
        };
        assert_eq!(
            err.to_string(),
            "Attribute kind mismatch: instance is TextField, got NumberField"
        );
    }

    #[test]
    fn test_report_serde_round_trip() {
        let r = report(&[("f1", false), ("f2", true)]);
        let json = serde_json::to_string(&r).unwrap();
        let back: SubmissionReport = serde_json::from_str(&json).unwrap();
        assert_eq!(back, r);
    }
}
