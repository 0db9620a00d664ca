//! Download authorization: the request that asks the storage service for a
//! time-limited download token on a file name prefix, and the response that
//! carries it.
//!
//! Neither type performs I/O. A transport serializes the request, sends it,
//! and deserializes the reply into a [`DownloadAuthorizationResponse`].

mod request;
mod resolve;
mod response;

pub use request::{DownloadAuthorizationRequest, DEFAULT_VALID_DURATION_SECS};
pub use resolve::{ResolvedDownload, AUTHORIZATION};
pub use response::DownloadAuthorizationResponse;
