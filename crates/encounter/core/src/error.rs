//! Error taxonomy for encounter-core.
//!
//! Each concern owns its own error type:
//! - [`ValidationError`] for malformed party input
//! - [`InvalidChallengeRating`] for CR strings outside the fixed set
//! - [`LookupError`] for a level or CR missing from a power table
//!
//! All of them are raised at the call that received the bad input and are
//! never coerced into a default value. [`EncounterError`] unifies them for
//! callers that drive a whole session.

use crate::challenge::ChallengeRating;

/// Severity level of an error, used for categorization and logging priority.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorSeverity {
    /// Invalid input, should not retry without changes.
    ///
    /// Examples: non-positive level, unknown challenge rating
    Validation,

    /// Unexpected inconsistency between validated input and the power tables.
    ///
    /// These indicate bugs and should be investigated.
    Internal,
}

impl ErrorSeverity {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Validation => "validation",
            Self::Internal => "internal",
        }
    }

    /// Returns true if this error indicates an internal bug.
    pub const fn is_internal(&self) -> bool {
        matches!(self, Self::Internal)
    }
}

/// Common trait for all encounter-core errors.
pub trait DomainError: core::fmt::Display + core::fmt::Debug {
    /// Returns the severity level of this error.
    fn severity(&self) -> ErrorSeverity;

    /// Returns a static string identifier for this error variant.
    fn error_code(&self) -> &'static str;
}

/// Malformed party input.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("invalid level {level}: level must be a positive integer")]
    NonPositiveLevel { level: i64 },

    #[error("invalid {field} '{input}': expected an integer")]
    NotAnInteger { field: &'static str, input: String },
}

impl DomainError for ValidationError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Validation
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::NonPositiveLevel { .. } => "VALIDATION_NON_POSITIVE_LEVEL",
            Self::NotAnInteger { .. } => "VALIDATION_NOT_AN_INTEGER",
        }
    }
}

/// A challenge rating string outside the 34-value closed set.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error(
    "invalid challenge rating '{input}': acceptable CRs are 0, 1/8, 1/4, 1/2 and whole numbers 1 through 30"
)]
pub struct InvalidChallengeRating {
    pub input: String,
}

impl InvalidChallengeRating {
    pub fn new(input: impl Into<String>) -> Self {
        Self {
            input: input.into(),
        }
    }
}

impl DomainError for InvalidChallengeRating {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Validation
    }

    fn error_code(&self) -> &'static str {
        "INVALID_CHALLENGE_RATING"
    }
}

/// A level or CR that is absent from the power tables.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum LookupError {
    #[error("no power entry for party level {level}")]
    Level { level: u32 },

    #[error("no power entry for challenge rating {cr}")]
    ChallengeRating { cr: ChallengeRating },

    #[error("ratio scale has no bands")]
    EmptyRatioScale,
}

impl DomainError for LookupError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Internal
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::Level { .. } => "LOOKUP_LEVEL",
            Self::ChallengeRating { .. } => "LOOKUP_CHALLENGE_RATING",
            Self::EmptyRatioScale => "LOOKUP_EMPTY_RATIO_SCALE",
        }
    }
}

/// Any failure raised while driving an encounter session.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum EncounterError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    ChallengeRating(#[from] InvalidChallengeRating),

    #[error(transparent)]
    Lookup(#[from] LookupError),
}

impl DomainError for EncounterError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::Validation(e) => e.severity(),
            Self::ChallengeRating(e) => e.severity(),
            Self::Lookup(e) => e.severity(),
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::Validation(e) => e.error_code(),
            Self::ChallengeRating(e) => e.error_code(),
            Self::Lookup(e) => e.error_code(),
        }
    }
}
