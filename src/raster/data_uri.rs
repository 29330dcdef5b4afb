//! Data URI encoding and prefix stripping for image payloads

use crate::io::error::{Result, invalid_parameter};
use base64::Engine as _;
use base64::engine::general_purpose::STANDARD as BASE64;

/// Render encoded image bytes as a `data:<mime>;base64,` URI
pub fn encode(bytes: &[u8], mime: &str) -> String {
    format!("data:{mime};base64,{}", BASE64.encode(bytes))
}

/// Strip a `data:<mime>;base64,` prefix, returning the bare payload
///
/// Input without a recognizable prefix passes through unchanged; the
/// transmission contract expects raw encoded bytes either way.
pub fn strip_prefix(uri: &str) -> &str {
    match uri.split_once(";base64,") {
        Some((head, payload)) if head.starts_with("data:") => payload,
        _ => uri,
    }
}

/// Decode a data URI or bare base64 payload into raw bytes
///
/// # Errors
///
/// Returns `InvalidParameter` when the payload is not valid base64
pub fn decode(uri: &str) -> Result<Vec<u8>> {
    BASE64
        .decode(strip_prefix(uri).as_bytes())
        .map_err(|e| invalid_parameter("data-uri", &"<payload>", &e))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_prefix_removes_png_header() {
        assert_eq!(strip_prefix("data:image/png;base64,QUJD"), "QUJD");
    }

    #[test]
    fn test_strip_prefix_removes_jpeg_header() {
        assert_eq!(strip_prefix("data:image/jpeg;base64,QUJD"), "QUJD");
    }

    #[test]
    fn test_strip_prefix_passes_bare_payload_through() {
        assert_eq!(strip_prefix("QUJD"), "QUJD");
    }

    #[test]
    fn test_encode_decode_roundtrip() {
        let bytes = vec![0u8, 1, 2, 250, 255];
        let uri = encode(&bytes, "image/png");

        assert!(uri.starts_with("data:image/png;base64,"));
        assert_eq!(decode(&uri).unwrap(), bytes);
    }

    #[test]
    fn test_decode_rejects_invalid_base64() {
        assert!(decode("data:image/png;base64,???").is_err());
    }
}
