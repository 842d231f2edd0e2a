//! Error codes for parsing, replacing and rule loading.
//!
//! Every failure the crate can report is one `ErrorCode` variant with a
//! stable numeric code, so the CLI and library callers can match on numbers
//! as well as on variants.
//!
//! # Families
//!
//! - E1xx: JSON input
//! - E2xx: rule construction
//! - E3xx: replacer callback failures
//! - E4xx: configuration and I/O

use thiserror::Error;

/// All error codes raised by this crate.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Error)]
#[allow(non_camel_case_types)]
pub enum ErrorCode {
    /// E100_InvalidJSON (code 100)
    #[error("E100_InvalidJSON({0})")]
    E100_InvalidJSON(/* reason */ String),

    /// E200_InvalidPattern (code 200)
    #[error("E200_InvalidPattern({0})")]
    E200_InvalidPattern(/* reason */ String),

    /// E201_InvalidRuleAction (code 201)
    #[error("E201_InvalidRuleAction({0})")]
    E201_InvalidRuleAction(/* reason */ String),

    /// E300_ReplacerFailed (code 300)
    #[error("E300_ReplacerFailed({0})")]
    E300_ReplacerFailed(/* reason */ String),

    /// E400_ConfigUnreadable (code 400)
    #[error("E400_ConfigUnreadable({0})")]
    E400_ConfigUnreadable(/* reason */ String),

    /// E401_ConfigInvalid (code 401)
    #[error("E401_ConfigInvalid({0})")]
    E401_ConfigInvalid(/* reason */ String),

    /// E402_InputUnreadable (code 402)
    #[error("E402_InputUnreadable({0})")]
    E402_InputUnreadable(/* reason */ String),
}

impl ErrorCode {
    /// Get the numeric error code.
    pub fn code(&self) -> u32 {
        match self {
            ErrorCode::E100_InvalidJSON(..) => 100,
            ErrorCode::E200_InvalidPattern(..) => 200,
            ErrorCode::E201_InvalidRuleAction(..) => 201,
            ErrorCode::E300_ReplacerFailed(..) => 300,
            ErrorCode::E400_ConfigUnreadable(..) => 400,
            ErrorCode::E401_ConfigInvalid(..) => 401,
            ErrorCode::E402_InputUnreadable(..) => 402,
        }
    }

    /// Get the error name without parameters.
    pub fn name(&self) -> &'static str {
        match self {
            ErrorCode::E100_InvalidJSON(..) => "E100_InvalidJSON",
            ErrorCode::E200_InvalidPattern(..) => "E200_InvalidPattern",
            ErrorCode::E201_InvalidRuleAction(..) => "E201_InvalidRuleAction",
            ErrorCode::E300_ReplacerFailed(..) => "E300_ReplacerFailed",
            ErrorCode::E400_ConfigUnreadable(..) => "E400_ConfigUnreadable",
            ErrorCode::E401_ConfigInvalid(..) => "E401_ConfigInvalid",
            ErrorCode::E402_InputUnreadable(..) => "E402_InputUnreadable",
        }
    }

    /// Convenience constructor for failures raised inside replacer callbacks.
    pub fn replacer_failed(reason: impl Into<String>) -> Self {
        ErrorCode::E300_ReplacerFailed(reason.into())
    }
}

impl From<serde_json::Error> for ErrorCode {
    fn from(e: serde_json::Error) -> Self {
        ErrorCode::E100_InvalidJSON(e.to_string())
    }
}

/// Result type used throughout the crate.
pub type ReplacerResult<T> = Result<T, ErrorCode>;
