//! Profile document loading.
//!
//! One GET for the JSON document at a fixed path relative to the page
//! origin; no retry, no caching, no timeout. Decoding is the shape
//! validation boundary for everything the renderers consume.

use crate::error::LoadError;
use crate::profile::ProfileDocument;

/// Fixed relative path of the profile document.
pub const DOCUMENT_PATH: &str = "db.json";

/// Decode a response body into a profile document.
pub fn decode_document(body: &str) -> Result<ProfileDocument, LoadError> {
    Ok(serde_json::from_str(body)?)
}

/// Fetch and decode the profile document.
#[cfg(target_arch = "wasm32")]
pub async fn fetch_document(path: &str) -> Result<ProfileDocument, LoadError> {
    log::debug!("fetching profile document from {path}");

    let response = gloo_net::http::Request::get(path)
        .send()
        .await
        .map_err(|e| LoadError::Network(e.to_string()))?;
    if !response.ok() {
        return Err(LoadError::Status {
            status: response.status(),
        });
    }

    let body = response
        .text()
        .await
        .map_err(|e| LoadError::Network(e.to_string()))?;
    decode_document(&body)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_rejects_non_json_bodies() {
        let err = decode_document("<html>404 not found</html>").unwrap_err();
        assert!(matches!(err, LoadError::Parse(_)));
    }

    #[test]
    fn test_decode_rejects_wrong_shape() {
        // Valid JSON, but not a profile document.
        let err = decode_document(r#"{"profiles": []}"#).unwrap_err();
        assert!(matches!(err, LoadError::Parse(_)));
    }
}
