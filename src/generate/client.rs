//! HTTP submission of generation requests
//!
//! Wraps the generateContent REST endpoint using [`reqwest`]. The client is
//! deliberately policy-free: no retries and no timeout, so a slow remote
//! call simply suspends the caller until the service answers.

use crate::generate::prompt::PromptTemplate;
use crate::generate::response::{GenerateResponse, extract_sprite_sheet};
use crate::io::configuration::{ASPECT_RATIO, IMAGE_SIZE_TIER};
use crate::io::error::{Result, SpriteError};
use crate::raster::{RasterImage, SpriteSheet};
use base64::Engine as _;
use base64::engine::general_purpose::STANDARD as BASE64;
use serde_json::json;

/// Client for the remote sprite sheet generation service
pub struct GenerationClient {
    http: reqwest::Client,
    api_base: String,
    model: String,
    template: PromptTemplate,
}

impl GenerationClient {
    /// Create a client for the given API base URL and model
    pub fn new(api_base: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            api_base: api_base.into(),
            model: model.into(),
            template: PromptTemplate::default(),
        }
    }

    /// Replace the default instruction template
    #[must_use]
    pub fn with_template(mut self, template: PromptTemplate) -> Self {
        self.template = template;
        self
    }

    /// Request a sprite sheet for a reference image and motion description
    ///
    /// Suspends for the full duration of the remote call, which can take
    /// tens of seconds for a large generation.
    ///
    /// # Errors
    ///
    /// Returns `Transport` when the request itself fails, `Service` for
    /// non-success statuses with the response body preserved verbatim, and
    /// `NoImageInResponse`/`MalformedResponse` when the response carries no
    /// usable image payload
    pub async fn generate(
        &self,
        api_key: &str,
        reference: &RasterImage,
        motion: &str,
    ) -> Result<SpriteSheet> {
        let endpoint = format!("{}/models/{}:generateContent", self.api_base, self.model);
        let body = build_request_body(&self.template, reference, motion);

        let response = self
            .http
            .post(&endpoint)
            .query(&[("key", api_key)])
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let message = response
                .text()
                .await
                .unwrap_or_else(|_| "<unreadable body>".to_string());
            return Err(SpriteError::Service {
                status: status.as_u16(),
                message,
            });
        }

        let parsed: GenerateResponse = response.json().await?;
        extract_sprite_sheet(parsed)
    }
}

/// Build the generateContent JSON body
///
/// The reference image travels as bare base64 bytes (no data-URI prefix);
/// the text part is the rendered instruction template plus motion text. The
/// generation config pins the square aspect ratio and resolution tier.
fn build_request_body(
    template: &PromptTemplate,
    reference: &RasterImage,
    motion: &str,
) -> serde_json::Value {
    json!({
        "contents": [{
            "role": "user",
            "parts": [
                { "text": template.render(motion) },
                {
                    "inlineData": {
                        "mimeType": "image/png",
                        "data": BASE64.encode(reference.as_bytes()),
                    }
                },
            ],
        }],
        "generationConfig": {
            "responseModalities": ["IMAGE"],
            "imageConfig": {
                "aspectRatio": ASPECT_RATIO,
                "imageSize": IMAGE_SIZE_TIER,
            },
        },
    })
}
