//! Gemini `generateContent` provider
//!
//! Sends a single-turn prompt with the Google Maps tool enabled and a lat/lng
//! retrieval bias, then reads `candidates[0].groundingMetadata.groundingChunks`.

use crate::{
    error::{AppError, AppResult},
    models::{Coordinates, GenerateContentRequest, GenerateContentResponse, GroundingChunk},
    services::providers::GroundingClient,
};
use reqwest::Client as HttpClient;

const API_KEY_HEADER: &str = "x-goog-api-key";

#[derive(Clone)]
pub struct GeminiClient {
    http_client: HttpClient,
    api_key: String,
    api_url: String,
    model: String,
}

impl GeminiClient {
    pub fn new(api_key: String, api_url: String, model: String) -> Self {
        Self {
            http_client: HttpClient::new(),
            api_key,
            api_url,
            model,
        }
    }

    fn endpoint(&self) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent",
            self.api_url.trim_end_matches('/'),
            self.model
        )
    }
}

#[async_trait::async_trait]
impl GroundingClient for GeminiClient {
    async fn grounded_places(
        &self,
        prompt: &str,
        coords: Coordinates,
    ) -> AppResult<Vec<GroundingChunk>> {
        let body = GenerateContentRequest::maps_grounded(prompt, coords);

        let response = self
            .http_client
            .post(self.endpoint())
            .header(API_KEY_HEADER, &self.api_key)
            .json(&body)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(AppError::UpstreamRequestFailed(format!(
                "Gemini API returned status {}: {}",
                status, body
            )));
        }

        let response_text = response.text().await?;
        tracing::debug!(bytes = response_text.len(), "Raw Gemini API response");

        let parsed: GenerateContentResponse =
            serde_json::from_str(&response_text).map_err(|e| {
                tracing::error!(error = %e, "Failed to deserialize Gemini response");
                AppError::UpstreamRequestFailed(format!("Failed to parse Gemini response: {}", e))
            })?;

        let chunks = parsed.into_grounding_chunks();

        tracing::info!(
            model = %self.model,
            chunks = chunks.len(),
            provider = "gemini",
            "Grounded generation completed"
        );

        Ok(chunks)
    }

    fn name(&self) -> &'static str {
        "gemini"
    }
}
