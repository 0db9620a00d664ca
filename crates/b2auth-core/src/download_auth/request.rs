//! `b2_get_download_authorization` request body.

use serde::{Deserialize, Serialize};

use crate::content_disposition::ContentDisposition;
use crate::error::{require_non_blank, require_valid_duration, AuthError, Result};

/// Validity used when the caller does not pick one (one hour).
pub const DEFAULT_VALID_DURATION_SECS: i64 = 3600;

/// Describes which objects to authorize for download and for how long.
///
/// `bucket_id`, `file_name` and `valid_duration_in_seconds` are validated at
/// construction and never change afterwards. The Content-Disposition override
/// is kept in its raw wire form; [`content_disposition`](Self::content_disposition)
/// re-parses it on every read.
///
/// The override must not use RFC 2231/5987 parameter continuations (parameter
/// names containing `*`); the storage service rejects them. This is not
/// checked when the value is set, see
/// [`ContentDisposition::reject_parameter_continuations`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "RequestWire")]
pub struct DownloadAuthorizationRequest {
    bucket_id: String,
    file_name: String,
    valid_duration_in_seconds: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    b2_content_disposition: Option<String>,
}

impl DownloadAuthorizationRequest {
    /// Request valid for [`DEFAULT_VALID_DURATION_SECS`].
    pub fn new(bucket_id: impl Into<String>, file_name: impl Into<String>) -> Result<Self> {
        Self::with_valid_duration(bucket_id, file_name, DEFAULT_VALID_DURATION_SECS)
    }

    /// Request valid for `valid_duration_secs` seconds (1 to 604800 inclusive).
    pub fn with_valid_duration(
        bucket_id: impl Into<String>,
        file_name: impl Into<String>,
        valid_duration_secs: i64,
    ) -> Result<Self> {
        let bucket_id = bucket_id.into();
        let file_name = file_name.into();
        require_non_blank("bucketId", &bucket_id)?;
        require_non_blank("fileName", &file_name)?;
        let valid_duration_in_seconds =
            require_valid_duration("validDurationInSeconds", valid_duration_secs)?;

        Ok(Self {
            bucket_id,
            file_name,
            valid_duration_in_seconds,
            b2_content_disposition: None,
        })
    }

    pub fn bucket_id(&self) -> &str {
        &self.bucket_id
    }

    /// File name prefix the authorization will cover.
    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    pub fn valid_duration_in_seconds(&self) -> u32 {
        self.valid_duration_in_seconds
    }

    /// Parses the stored override. `Ok(None)` when none is set; `Err` when the
    /// stored string is malformed (only possible for values that arrived via
    /// deserialization).
    pub fn content_disposition(&self) -> Result<Option<ContentDisposition>> {
        self.b2_content_disposition
            .as_deref()
            .map(ContentDisposition::parse)
            .transpose()
    }

    /// Stores the canonical string form of `value`.
    pub fn set_content_disposition(&mut self, value: &ContentDisposition) {
        self.b2_content_disposition = Some(value.to_string());
    }

    pub fn with_content_disposition(mut self, value: &ContentDisposition) -> Self {
        self.set_content_disposition(value);
        self
    }

    pub fn clear_content_disposition(&mut self) {
        self.b2_content_disposition = None;
    }

    /// The wire value of `b2ContentDisposition`, exactly as stored.
    pub fn raw_content_disposition(&self) -> Option<&str> {
        self.b2_content_disposition.as_deref()
    }

    /// JSON request body.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}

/// Wire shape accepted on deserialization. The required fields are
/// re-validated; the raw disposition is stored as-is.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RequestWire {
    bucket_id: Option<String>,
    file_name: Option<String>,
    valid_duration_in_seconds: Option<i64>,
    b2_content_disposition: Option<String>,
}

impl TryFrom<RequestWire> for DownloadAuthorizationRequest {
    type Error = AuthError;

    fn try_from(wire: RequestWire) -> Result<Self> {
        let bucket_id = wire.bucket_id.ok_or(AuthError::MissingField("bucketId"))?;
        let file_name = wire.file_name.ok_or(AuthError::MissingField("fileName"))?;
        let duration = wire
            .valid_duration_in_seconds
            .ok_or(AuthError::MissingField("validDurationInSeconds"))?;

        let mut request = Self::with_valid_duration(bucket_id, file_name, duration)?;
        request.b2_content_disposition = wire.b2_content_disposition;
        Ok(request)
    }
}
