//! `b2_get_download_authorization` response body.

use std::io::Read;

use serde::{Deserialize, Serialize};

use crate::error::{AuthError, Result};

/// Credential issued for a file name prefix.
///
/// Only built by deserialization; every field is required on the wire and
/// the type exposes no setters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "ResponseWire")]
pub struct DownloadAuthorizationResponse {
    bucket_id: String,
    file_name: String,
    authorization_token: String,
    download_url: String,
}

impl DownloadAuthorizationResponse {
    pub fn from_json(payload: &str) -> Result<Self> {
        let wire: ResponseWire = serde_json::from_str(payload)?;
        wire.try_into()
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        let wire: ResponseWire = serde_json::from_reader(reader)?;
        wire.try_into()
    }

    pub fn bucket_id(&self) -> &str {
        &self.bucket_id
    }

    /// The file name prefix the token grants access to.
    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    /// Opaque token; pass as the `Authorization` header or query parameter.
    pub fn authorization_token(&self) -> &str {
        &self.authorization_token
    }

    pub fn download_url(&self) -> &str {
        &self.download_url
    }
}

/// Absent and `null` fields both land here as `None`.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct ResponseWire {
    bucket_id: Option<String>,
    file_name: Option<String>,
    authorization_token: Option<String>,
    download_url: Option<String>,
}

impl TryFrom<ResponseWire> for DownloadAuthorizationResponse {
    type Error = AuthError;

    fn try_from(wire: ResponseWire) -> Result<Self> {
        Ok(Self {
            bucket_id: wire.bucket_id.ok_or(AuthError::MissingField("bucketId"))?,
            file_name: wire.file_name.ok_or(AuthError::MissingField("fileName"))?,
            authorization_token: wire
                .authorization_token
                .ok_or(AuthError::MissingField("authorizationToken"))?,
            download_url: wire
                .download_url
                .ok_or(AuthError::MissingField("downloadUrl"))?,
        })
    }
}
