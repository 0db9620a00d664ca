//! `b2auth request` – print a download authorization request body.

use anyhow::{Context, Result};
use b2auth_core::config::B2AuthConfig;
use b2auth_core::{ContentDisposition, DownloadAuthorizationRequest};

/// Raw command-line input for a request.
#[derive(Debug, Clone, Default)]
pub struct RequestArgs {
    pub bucket_id: String,
    pub file_name: String,
    pub duration: Option<i64>,
    pub disposition: Option<String>,
}

/// Applies config defaults and builds a validated request.
pub fn build_request(cfg: &B2AuthConfig, args: &RequestArgs) -> Result<DownloadAuthorizationRequest> {
    let duration = args.duration.unwrap_or(cfg.default_valid_duration_secs);
    let mut request =
        DownloadAuthorizationRequest::with_valid_duration(&args.bucket_id, &args.file_name, duration)?;

    let raw = args
        .disposition
        .as_deref()
        .or(cfg.default_content_disposition.as_deref());
    if let Some(raw) = raw {
        let cd = ContentDisposition::parse(raw).context("--disposition")?;
        if cfg.reject_parameter_continuations {
            cd.reject_parameter_continuations().context("--disposition")?;
        } else if cd.has_parameter_continuations() {
            tracing::warn!(
                "Content-Disposition {:?} uses parameter continuations; the service may reject it",
                raw
            );
        }
        request.set_content_disposition(&cd);
    }

    tracing::debug!(
        bucket_id = request.bucket_id(),
        file_name = request.file_name(),
        valid_duration_secs = request.valid_duration_in_seconds(),
        "built download authorization request"
    );
    Ok(request)
}

pub fn run_request(cfg: &B2AuthConfig, args: &RequestArgs, pretty: bool) -> Result<()> {
    let request = build_request(cfg, args)?;
    let body = if pretty {
        serde_json::to_string_pretty(&request)?
    } else {
        request.to_json()?
    };
    println!("{body}");
    Ok(())
}
