//! Error type shared by the download authorization value objects.

use thiserror::Error;

/// Smallest accepted `validDurationInSeconds`.
pub const MIN_VALID_DURATION_SECS: i64 = 1;
/// Largest accepted `validDurationInSeconds` (one week).
pub const MAX_VALID_DURATION_SECS: i64 = 604_800;

pub type Result<T> = std::result::Result<T, AuthError>;

#[derive(Debug, Error)]
pub enum AuthError {
    /// A required string argument was empty or whitespace-only.
    #[error("argument `{name}` can not be empty or consist only of white-space characters")]
    InvalidArgument { name: &'static str },

    /// `validDurationInSeconds` outside the accepted window.
    #[error("argument `{name}` is {value}; must be a minimum of 1 second and a maximum of 604800 seconds")]
    OutOfRange { name: &'static str, value: i64 },

    /// Stored Content-Disposition string is not a well-formed header value.
    #[error("invalid Content-Disposition value {value:?}: {reason}")]
    Parse { value: String, reason: String },

    /// A required wire field was absent or null.
    #[error("missing required field `{0}`")]
    MissingField(&'static str),

    /// Requested file lies outside the prefix the token was issued for.
    #[error("file name {file_name:?} is outside the authorized prefix {prefix:?}")]
    OutsidePrefix { file_name: String, prefix: String },

    /// Content-Disposition uses RFC 2231/5987 parameter continuations (`name*`).
    #[error("Content-Disposition parameter `{0}` uses a parameter continuation, which is not supported")]
    ParameterContinuation(String),

    #[error("invalid download URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("malformed JSON payload: {0}")]
    Json(#[from] serde_json::Error),
}

impl AuthError {
    pub(crate) fn parse(value: &str, reason: impl Into<String>) -> Self {
        AuthError::Parse {
            value: value.to_string(),
            reason: reason.into(),
        }
    }
}

/// Rejects empty or whitespace-only strings for the named argument.
pub(crate) fn require_non_blank(name: &'static str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(AuthError::InvalidArgument { name });
    }
    Ok(())
}

/// Checks `value` against `[MIN_VALID_DURATION_SECS, MAX_VALID_DURATION_SECS]`.
pub(crate) fn require_valid_duration(name: &'static str, value: i64) -> Result<u32> {
    if !(MIN_VALID_DURATION_SECS..=MAX_VALID_DURATION_SECS).contains(&value) {
        return Err(AuthError::OutOfRange { name, value });
    }
    // Lossless: bounded by MAX_VALID_DURATION_SECS.
    Ok(value as u32)
}
