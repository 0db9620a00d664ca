//! `b2auth response <path>` – parse a download authorization response.

use anyhow::{Context, Result};
use b2auth_core::DownloadAuthorizationResponse;
use std::fs::File;
use std::io::{self, BufReader};
use std::path::Path;

/// Reads a response payload from `path`, or stdin when `path` is `-`.
pub fn load_response(path: &Path) -> Result<DownloadAuthorizationResponse> {
    if path == Path::new("-") {
        return DownloadAuthorizationResponse::from_reader(io::stdin().lock())
            .context("failed to parse response from stdin");
    }
    let file = File::open(path).with_context(|| format!("failed to open {}", path.display()))?;
    DownloadAuthorizationResponse::from_reader(BufReader::new(file))
        .with_context(|| format!("failed to parse response {}", path.display()))
}

/// Prints the response fields and, for `Some((bucket_name, file))`, the
/// authorized URL of that file.
pub fn run_response(path: &Path, target: Option<(&str, &str)>) -> Result<()> {
    let response = load_response(path)?;
    tracing::info!(
        bucket_id = response.bucket_id(),
        file_name = response.file_name(),
        "parsed download authorization"
    );

    println!("Bucket ID:      {}", response.bucket_id());
    println!("File prefix:    {}", response.file_name());
    println!("Download URL:   {}", response.download_url());
    println!("Token:          {}", response.authorization_token());

    if let Some((bucket_name, file)) = target {
        let url = response.authorized_url(bucket_name, file)?;
        println!("Authorized URL: {url}");
    }
    Ok(())
}
