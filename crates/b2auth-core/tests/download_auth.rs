//! Integration tests: request construction and wire shape, response parsing,
//! and turning a response into a download URL.

mod common;

use b2auth_core::{
    AuthError, ContentDisposition, DownloadAuthorizationRequest, DownloadAuthorizationResponse,
};
use common::payloads::{self, BUCKET_ID};
use serde_json::json;

#[test]
fn request_fields_read_back_exactly() {
    let req =
        DownloadAuthorizationRequest::with_valid_duration(BUCKET_ID, "files/report.pdf", 7200)
            .unwrap();
    assert_eq!(req.bucket_id(), BUCKET_ID);
    assert_eq!(req.file_name(), "files/report.pdf");
    assert_eq!(req.valid_duration_in_seconds(), 7200);
}

#[test]
fn request_accepts_whole_duration_window() {
    for secs in [1, 2, 59, 3600, 86_400, 604_799, 604_800] {
        let req = DownloadAuthorizationRequest::with_valid_duration("b", "f", secs).unwrap();
        assert_eq!(i64::from(req.valid_duration_in_seconds()), secs);
    }
}

#[test]
fn request_rejects_durations_outside_window() {
    for secs in [i64::MIN, -1, 0, 604_801, i64::MAX] {
        match DownloadAuthorizationRequest::with_valid_duration("b", "f", secs) {
            Err(AuthError::OutOfRange { value, .. }) => assert_eq!(value, secs),
            other => panic!("{secs}: expected OutOfRange, got {other:?}"),
        }
    }
}

#[test]
fn request_rejects_blank_strings() {
    for blank in ["", " ", "\t\r\n"] {
        assert!(matches!(
            DownloadAuthorizationRequest::new(blank, "f"),
            Err(AuthError::InvalidArgument { name: "bucketId" })
        ));
        assert!(matches!(
            DownloadAuthorizationRequest::new("b", blank),
            Err(AuthError::InvalidArgument { name: "fileName" })
        ));
    }
}

#[test]
fn bucket_checked_before_duration() {
    assert!(matches!(
        DownloadAuthorizationRequest::with_valid_duration("", "f", 0),
        Err(AuthError::InvalidArgument { .. })
    ));
}

#[test]
fn content_disposition_round_trips_through_request() {
    let cd = ContentDisposition::attachment()
        .with_filename("Q3 report; draft.pdf")
        .unwrap();
    let mut req = DownloadAuthorizationRequest::new("b", "files/").unwrap();
    req.set_content_disposition(&cd);

    let read_back = req.content_disposition().unwrap().unwrap();
    assert_eq!(read_back.to_string(), cd.to_string());
    assert_eq!(read_back.filename().as_deref(), Some("Q3 report; draft.pdf"));
}

#[test]
fn request_wire_shape() {
    let req = DownloadAuthorizationRequest::with_valid_duration(BUCKET_ID, "files/", 600)
        .unwrap()
        .with_content_disposition(&ContentDisposition::inline());
    let value: serde_json::Value = serde_json::from_str(&req.to_json().unwrap()).unwrap();
    assert_eq!(
        value,
        json!({
            "bucketId": BUCKET_ID,
            "fileName": "files/",
            "validDurationInSeconds": 600,
            "b2ContentDisposition": "inline",
        })
    );

    let back: DownloadAuthorizationRequest = serde_json::from_value(value).unwrap();
    assert_eq!(back, req);
}

#[test]
fn response_parses_full_payload() {
    let payload = payloads::response("files/");
    let resp = DownloadAuthorizationResponse::from_json(&payload.to_string()).unwrap();
    assert_eq!(resp.bucket_id(), BUCKET_ID);
    assert_eq!(resp.file_name(), "files/");
    assert_eq!(
        resp.authorization_token(),
        "3_20201106170530_d1fc3aa7_auth_tok"
    );
    assert_eq!(resp.download_url(), payloads::DOWNLOAD_URL);
}

#[test]
fn response_from_reader() {
    let bytes = payloads::response("files/").to_string().into_bytes();
    let resp = DownloadAuthorizationResponse::from_reader(bytes.as_slice()).unwrap();
    assert_eq!(resp.file_name(), "files/");
}

#[test]
fn response_missing_any_field_fails() {
    for field in ["bucketId", "fileName", "authorizationToken", "downloadUrl"] {
        let payload = payloads::response_without("files/", field);
        match DownloadAuthorizationResponse::from_json(&payload.to_string()) {
            Err(AuthError::MissingField(name)) => assert_eq!(name, field),
            other => panic!("{field}: expected MissingField, got {other:?}"),
        }
    }
}

#[test]
fn response_to_authorized_url() {
    let resp =
        DownloadAuthorizationResponse::from_json(&payloads::response("files/").to_string())
            .unwrap();
    let url = resp.authorized_url("my-bucket", "files/report.pdf").unwrap();
    assert_eq!(
        url.as_str(),
        "https://f002.backblazeb2.com/file/my-bucket/files/report.pdf\
         ?Authorization=3_20201106170530_d1fc3aa7_auth_tok"
    );

    let resolved = resp.resolve("my-bucket", "files/report.pdf").unwrap();
    assert_eq!(
        resolved.url.as_str(),
        "https://f002.backblazeb2.com/file/my-bucket/files/report.pdf"
    );
    assert_eq!(resolved.headers.len(), 1);
}

#[test]
fn values_are_shareable_across_threads() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<DownloadAuthorizationRequest>();
    assert_send_sync::<DownloadAuthorizationResponse>();
    assert_send_sync::<ContentDisposition>();
}
