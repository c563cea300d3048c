//! Base64 and data-URL encoding of raw media payloads.

use crate::error::{DecartError, Result};
use base64::Engine;

/// MIME type assumed for video payloads when the backend gives none.
pub const DEFAULT_VIDEO_MIME: &str = "video/mp4";

/// Encodes bytes as standard, padded base64. Empty input yields `""`.
pub fn encode_base64(data: &[u8]) -> String {
    base64::engine::general_purpose::STANDARD.encode(data)
}

/// Decodes standard base64 back into bytes.
pub fn decode_base64(encoded: &str) -> Result<Vec<u8>> {
    base64::engine::general_purpose::STANDARD
        .decode(encoded)
        .map_err(|e| DecartError::Decode(e.to_string()))
}

/// Wraps bytes in a `data:<mime>;base64,<payload>` URL.
///
/// A missing or empty MIME type falls back to [`DEFAULT_VIDEO_MIME`].
pub fn to_data_url(data: &[u8], mime_type: Option<&str>) -> String {
    let mime = mime_type
        .map(str::trim)
        .filter(|m| !m.is_empty())
        .unwrap_or(DEFAULT_VIDEO_MIME);
    format!("data:{};base64,{}", mime, encode_base64(data))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_payload_round_trip() {
        assert_eq!(encode_base64(&[]), "");
        assert!(decode_base64("").unwrap().is_empty());
    }

    #[test]
    fn test_known_encoding() {
        assert_eq!(encode_base64(b"fake-video-data"), "ZmFrZS12aWRlby1kYXRh");
        assert_eq!(encode_base64(&[0xff, 0x00, 0x10]), "/wAQ");
    }

    #[test]
    fn test_data_url_defaults_to_mp4() {
        let url = to_data_url(b"abc", None);
        assert_eq!(url, "data:video/mp4;base64,YWJj");
        assert_eq!(to_data_url(b"abc", Some("")), url);
    }

    #[test]
    fn test_data_url_keeps_supplied_mime() {
        assert_eq!(
            to_data_url(b"abc", Some("video/webm")),
            "data:video/webm;base64,YWJj"
        );
    }

    #[test]
    fn test_decode_rejects_garbage() {
        let err = decode_base64("not base64!").unwrap_err();
        assert!(matches!(err, DecartError::Decode(_)));
    }
}
