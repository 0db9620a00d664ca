//! Turns an issued authorization into something a download client can fetch.
//!
//! Files are served at `{downloadUrl}/file/{bucketName}/{fileName}`; the token
//! travels either as the `Authorization` query parameter or header.

use std::collections::HashMap;

use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};
use url::Url;

use super::DownloadAuthorizationResponse;
use crate::error::{require_non_blank, AuthError, Result};

pub const AUTHORIZATION: &str = "Authorization";

/// WHATWG path-segment set plus `+`, which the download path decodes as a space.
const FILE_SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'+')
    .add(b'/')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'`')
    .add(b'{')
    .add(b'}');

/// URL plus the minimal headers needed to GET an authorized file.
#[derive(Debug, Clone)]
pub struct ResolvedDownload {
    pub url: Url,
    pub headers: HashMap<String, String>,
}

impl DownloadAuthorizationResponse {
    /// `(name, value)` pair for header-based authorization.
    pub fn authorization_header(&self) -> (&'static str, &str) {
        (AUTHORIZATION, self.authorization_token())
    }

    /// Download URL for `file_name` with the token as a query parameter.
    ///
    /// `file_name` must start with the authorized prefix. Each `/`-separated
    /// segment is percent-encoded on its own.
    pub fn authorized_url(&self, bucket_name: &str, file_name: &str) -> Result<Url> {
        let mut url = self.file_url(bucket_name, file_name)?;
        url.query_pairs_mut()
            .append_pair(AUTHORIZATION, self.authorization_token());
        Ok(url)
    }

    /// Same target as [`authorized_url`](Self::authorized_url), with the token
    /// moved into an `Authorization` header.
    pub fn resolve(&self, bucket_name: &str, file_name: &str) -> Result<ResolvedDownload> {
        let url = self.file_url(bucket_name, file_name)?;
        let (name, value) = self.authorization_header();
        let mut headers = HashMap::new();
        headers.insert(name.to_string(), value.to_string());
        Ok(ResolvedDownload { url, headers })
    }

    fn file_url(&self, bucket_name: &str, file_name: &str) -> Result<Url> {
        require_non_blank("bucketName", bucket_name)?;
        require_non_blank("fileName", file_name)?;
        if !file_name.starts_with(self.file_name()) {
            return Err(AuthError::OutsidePrefix {
                file_name: file_name.to_string(),
                prefix: self.file_name().to_string(),
            });
        }

        let mut url = Url::parse(self.download_url())?;
        if url.cannot_be_a_base() {
            return Err(AuthError::InvalidUrl(
                url::ParseError::RelativeUrlWithCannotBeABaseBase,
            ));
        }

        let mut path = url.path().trim_end_matches('/').to_string();
        path.push_str("/file/");
        path.extend(utf8_percent_encode(bucket_name, FILE_SEGMENT));
        for segment in file_name.split('/') {
            path.push('/');
            path.extend(utf8_percent_encode(segment, FILE_SEGMENT));
        }
        url.set_path(&path);
        Ok(url)
    }
}
