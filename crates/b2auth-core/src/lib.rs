//! Download authorization model for B2-style object storage.
//!
//! [`DownloadAuthorizationRequest`] asks for a time-limited token on a file
//! name prefix; [`DownloadAuthorizationResponse`] carries the issued token and
//! download endpoint. Both are plain values; sending them is left to the
//! caller's HTTP transport.

pub mod config;
pub mod content_disposition;
pub mod download_auth;
pub mod error;
pub mod logging;

pub use content_disposition::{ContentDisposition, DispositionParam};
pub use download_auth::{
    DownloadAuthorizationRequest, DownloadAuthorizationResponse, ResolvedDownload,
    DEFAULT_VALID_DURATION_SECS,
};
pub use error::{AuthError, Result, MAX_VALID_DURATION_SECS, MIN_VALID_DURATION_SECS};
