//! Generative API client for itinerary requests
//!
//! This module implements the live itinerary source: it builds the outbound
//! prompt, issues a single HTTP POST to the configured `generateContent`
//! endpoint, and turns the response text into a typed [`Itinerary`]. All
//! failure modes map onto the [`WayfarerError`] taxonomy; the orchestration
//! layer decides what to do with them.

use crate::config::ApiConfig;
use crate::error::{Result, WayfarerError};
use crate::extract;
use crate::itinerary::Itinerary;
use crate::prompts;

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

/// A source of itineraries for free-text trip requests
///
/// Implemented by [`GeminiClient`] for the live API; tests substitute
/// stub implementations to exercise the orchestration paths.
#[async_trait]
pub trait ItineraryProvider: Send + Sync {
    /// Request an itinerary for the given free-text trip description
    async fn request_itinerary(&self, request: &str) -> Result<Itinerary>;
}

/// Client for the Google generative-language API
///
/// Issues exactly one `generateContent` request per call: no retries, no
/// streaming, no timeout beyond the transport default. The credential is
/// checked before the request is built; a placeholder key never reaches
/// the network.
///
/// # Examples
///
/// ```no_run
/// use wayfarer::client::{GeminiClient, ItineraryProvider};
/// use wayfarer::config::ApiConfig;
///
/// # async fn example() -> wayfarer::error::Result<()> {
/// let mut api = ApiConfig::default();
/// api.api_key = "real-key".to_string();
/// let client = GeminiClient::new(api)?;
/// let plan = client.request_itinerary("5 days in Kyoto").await?;
/// println!("{}", plan.destination);
/// # Ok(())
/// # }
/// ```
pub struct GeminiClient {
    client: Client,
    config: ApiConfig,
}

/// Request body for the `generateContent` endpoint
#[derive(Debug, Serialize)]
struct GenerateContentRequest {
    contents: Vec<Content>,
    #[serde(rename = "generationConfig")]
    generation_config: GenerationConfig,
}

/// A single content block in the request
#[derive(Debug, Serialize)]
struct Content {
    parts: Vec<Part>,
}

/// One text part of a content block
#[derive(Debug, Serialize, Deserialize)]
struct Part {
    #[serde(default)]
    text: String,
}

/// Generation parameters sent with every request
#[derive(Debug, Serialize)]
struct GenerationConfig {
    temperature: f64,
    #[serde(rename = "topK")]
    top_k: u32,
    #[serde(rename = "topP")]
    top_p: f64,
    #[serde(rename = "maxOutputTokens")]
    max_output_tokens: u32,
}

/// Success envelope returned by the API
#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: CandidateContent,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<Part>,
}

impl GeminiClient {
    /// Create a new client for the given API configuration
    ///
    /// # Errors
    ///
    /// Returns an error if HTTP client initialization fails
    pub fn new(config: ApiConfig) -> Result<Self> {
        let client = Client::builder()
            .user_agent(concat!("wayfarer/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| WayfarerError::Config(format!("Failed to create HTTP client: {}", e)))?;

        tracing::info!("Initialized itinerary client: endpoint={}", config.endpoint);

        Ok(Self { client, config })
    }

    fn build_request(&self, request: &str) -> GenerateContentRequest {
        GenerateContentRequest {
            contents: vec![Content {
                parts: vec![Part {
                    text: prompts::itinerary_prompt(request),
                }],
            }],
            generation_config: GenerationConfig {
                temperature: self.config.temperature,
                top_k: self.config.top_k,
                top_p: self.config.top_p,
                max_output_tokens: self.config.max_output_tokens,
            },
        }
    }

    /// Pull the first candidate's text out of the response envelope
    fn candidate_text(raw_body: &str) -> std::result::Result<String, WayfarerError> {
        let envelope: GenerateContentResponse =
            serde_json::from_str(raw_body).map_err(|e| {
                tracing::warn!("Response envelope is not valid JSON: {}", e);
                WayfarerError::MalformedResponse {
                    raw: raw_body.to_string(),
                }
            })?;

        envelope
            .candidates
            .into_iter()
            .next()
            .and_then(|c| c.content.parts.into_iter().next())
            .map(|p| p.text.trim().to_string())
            .filter(|text| !text.is_empty())
            .ok_or_else(|| WayfarerError::MalformedResponse {
                raw: raw_body.to_string(),
            })
    }
}

#[async_trait]
impl ItineraryProvider for GeminiClient {
    async fn request_itinerary(&self, request: &str) -> Result<Itinerary> {
        if let Some(problem) = self.config.credential_problem() {
            tracing::warn!("Refusing to call the API: {}", problem);
            return Err(WayfarerError::Unconfigured(problem).into());
        }

        let body = self.build_request(request);
        tracing::debug!("Requesting itinerary for: {}", request);

        let response = self
            .client
            .post(&self.config.endpoint)
            .query(&[("key", self.config.api_key.as_str())])
            .json(&body)
            .send()
            .await
            .map_err(WayfarerError::Http)?;

        let status = response.status();
        let text = response.text().await.map_err(WayfarerError::Http)?;

        if !status.is_success() {
            tracing::error!("API returned {}: {}", status, text);
            return Err(WayfarerError::Transport {
                status: status.as_u16(),
                body: text,
            }
            .into());
        }

        let candidate = Self::candidate_text(&text)?;
        let itinerary = extract::parse_itinerary(&candidate)?;

        tracing::info!(
            "Received itinerary: destination={}, days={}",
            itinerary.destination,
            itinerary.itinerary.len()
        );

        Ok(itinerary)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_body_uses_wire_field_names() {
        let client = GeminiClient::new(ApiConfig::default()).unwrap();
        let body = client.build_request("a weekend in Rome");
        let value = serde_json::to_value(&body).unwrap();

        assert!(value.get("contents").is_some());
        let gen = value.get("generationConfig").unwrap();
        assert_eq!(gen.get("temperature").unwrap().as_f64().unwrap(), 0.7);
        assert_eq!(gen.get("topK").unwrap().as_u64().unwrap(), 40);
        assert_eq!(gen.get("topP").unwrap().as_f64().unwrap(), 0.95);
        assert_eq!(gen.get("maxOutputTokens").unwrap().as_u64().unwrap(), 8192);

        let prompt = value["contents"][0]["parts"][0]["text"].as_str().unwrap();
        assert!(prompt.contains("a weekend in Rome"));
    }

    #[test]
    fn test_candidate_text_extracts_first_part() {
        let body = r#"{
            "candidates": [
                {"content": {"parts": [{"text": "  hello  "}, {"text": "ignored"}]}},
                {"content": {"parts": [{"text": "also ignored"}]}}
            ]
        }"#;
        assert_eq!(GeminiClient::candidate_text(body).unwrap(), "hello");
    }

    #[test]
    fn test_candidate_text_rejects_empty_candidates() {
        let err = GeminiClient::candidate_text(r#"{"candidates": []}"#).unwrap_err();
        assert!(matches!(err, WayfarerError::MalformedResponse { .. }));
    }

    #[test]
    fn test_candidate_text_rejects_non_json_body() {
        let err = GeminiClient::candidate_text("<html>oops</html>").unwrap_err();
        match err {
            WayfarerError::MalformedResponse { raw } => assert!(raw.contains("oops")),
            other => panic!("expected MalformedResponse, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_placeholder_credential_short_circuits() {
        // Default config carries the placeholder; no server is running,
        // so reaching the network would fail with a different error.
        let client = GeminiClient::new(ApiConfig::default()).unwrap();
        let err = client.request_itinerary("5 days in Kyoto").await.unwrap_err();
        let err = err.downcast::<WayfarerError>().unwrap();
        assert!(matches!(err, WayfarerError::Unconfigured(_)));
    }
}
