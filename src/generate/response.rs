//! Typed response model and image payload extraction

use crate::io::error::{Result, SpriteError, malformed_response};
use crate::raster::{RasterImage, SpriteSheet};
use base64::Engine as _;
use base64::engine::general_purpose::STANDARD as BASE64;
use serde::Deserialize;

/// Top-level generateContent response
#[derive(Debug, Deserialize)]
pub struct GenerateResponse {
    /// Generated candidates, usually exactly one
    #[serde(default)]
    pub candidates: Vec<Candidate>,
}

/// One generated candidate
#[derive(Debug, Deserialize)]
pub struct Candidate {
    /// Candidate content; absent when generation was blocked
    pub content: Option<Content>,
}

/// Content of a candidate
#[derive(Debug, Deserialize)]
pub struct Content {
    /// Ordered content parts
    #[serde(default)]
    pub parts: Vec<Part>,
}

/// One content part, carrying either text or inline binary data
#[derive(Debug, Deserialize)]
pub struct Part {
    /// Text payload, if any
    pub text: Option<String>,
    /// Inline binary payload, if any
    #[serde(rename = "inlineData", alias = "inline_data")]
    pub inline_data: Option<InlineData>,
}

/// Base64-encoded inline binary payload
#[derive(Debug, Deserialize)]
pub struct InlineData {
    /// Declared MIME type of the payload
    #[serde(rename = "mimeType", alias = "mime_type")]
    pub mime_type: Option<String>,
    /// Base64-encoded bytes
    pub data: String,
}

/// Extract the first inline-image part of a response as a sprite sheet
///
/// Content parts are scanned in candidate and part order; parts without
/// image data are skipped regardless of how many precede the image.
///
/// # Errors
///
/// Returns `NoImageInResponse` when no part carries image data and
/// `MalformedResponse` when a payload is present but not valid base64
pub fn extract_sprite_sheet(response: GenerateResponse) -> Result<SpriteSheet> {
    for candidate in response.candidates {
        let Some(content) = candidate.content else {
            continue;
        };

        for part in content.parts {
            let Some(inline) = part.inline_data else {
                continue;
            };
            if inline.data.is_empty() {
                continue;
            }

            let bytes = BASE64.decode(inline.data.as_bytes()).map_err(|e| {
                malformed_response(&format!("image payload is not valid base64: {e}"))
            })?;
            return Ok(SpriteSheet::new(RasterImage::from_encoded_bytes(bytes)));
        }
    }

    Err(SpriteError::NoImageInResponse)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(raw: &str) -> GenerateResponse {
        serde_json::from_str(raw).expect("fixture must parse")
    }

    #[test]
    fn test_extract_skips_preceding_text_parts() {
        let payload = BASE64.encode(b"sheet bytes");
        let response = parse(&format!(
            r#"{{"candidates": [{{"content": {{"parts": [
                {{"text": "Here is your sprite sheet."}},
                {{"text": "Enjoy!"}},
                {{"inlineData": {{"mimeType": "image/png", "data": "{payload}"}}}}
            ]}}}}]}}"#
        ));

        let sheet = extract_sprite_sheet(response).unwrap();
        assert_eq!(sheet.image().as_bytes(), b"sheet bytes");
    }

    #[test]
    fn test_extract_accepts_snake_case_fields() {
        let payload = BASE64.encode(b"snake");
        let response = parse(&format!(
            r#"{{"candidates": [{{"content": {{"parts": [
                {{"inline_data": {{"mime_type": "image/png", "data": "{payload}"}}}}
            ]}}}}]}}"#
        ));

        let sheet = extract_sprite_sheet(response).unwrap();
        assert_eq!(sheet.image().as_bytes(), b"snake");
    }

    #[test]
    fn test_extract_fails_without_image_parts() {
        let response = parse(
            r#"{"candidates": [{"content": {"parts": [{"text": "no image today"}]}}]}"#,
        );

        let error = extract_sprite_sheet(response).unwrap_err();
        assert!(matches!(error, SpriteError::NoImageInResponse));
    }

    #[test]
    fn test_extract_fails_on_empty_response() {
        let response = parse(r"{}");

        let error = extract_sprite_sheet(response).unwrap_err();
        assert!(matches!(error, SpriteError::NoImageInResponse));
    }

    #[test]
    fn test_extract_rejects_invalid_base64() {
        let response = parse(
            r#"{"candidates": [{"content": {"parts": [
                {"inlineData": {"mimeType": "image/png", "data": "not base64!"}}
            ]}}]}"#,
        );

        let error = extract_sprite_sheet(response).unwrap_err();
        assert!(matches!(error, SpriteError::MalformedResponse { .. }));
    }
}
