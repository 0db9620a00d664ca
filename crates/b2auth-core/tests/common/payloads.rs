//! JSON payloads shaped like `b2_get_download_authorization` traffic.

use serde_json::{json, Value};

pub const BUCKET_ID: &str = "4a48fe8875c6214145260818";
pub const DOWNLOAD_URL: &str = "https://f002.backblazeb2.com";

/// A complete response as the service returns it.
pub fn response(file_name_prefix: &str) -> Value {
    json!({
        "bucketId": BUCKET_ID,
        "fileName": file_name_prefix,
        "authorizationToken": "3_20201106170530_d1fc3aa7_auth_tok",
        "downloadUrl": DOWNLOAD_URL,
    })
}

/// `response` with one field removed.
pub fn response_without(file_name_prefix: &str, field: &str) -> Value {
    let mut value = response(file_name_prefix);
    value
        .as_object_mut()
        .expect("payload is an object")
        .remove(field);
    value
}
