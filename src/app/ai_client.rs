//! Blocking HTTP client for the text-generation API.
//!
//! The API follows the Gemini `generateContent` shape: one POST per request,
//! the prompt wrapped as a single content part, and the reply read from the
//! first candidate. Calls are made from background threads (see the Ask AI
//! and drafting windows), never from the egui frame loop.

use anyhow::{anyhow, Context, Result};
use serde::{Deserialize, Serialize};
use std::time::Duration;

const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";
pub const DEFAULT_MODEL: &str = "gemini-2.5-flash";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(120);

#[derive(Debug, Serialize)]
struct GenerateRequest {
    contents: Vec<RequestContent>,
}

#[derive(Debug, Serialize)]
struct RequestContent {
    parts: Vec<RequestPart>,
}

#[derive(Debug, Serialize)]
struct RequestPart {
    text: String,
}

#[derive(Debug, Deserialize)]
struct GenerateResponse {
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
    parts: Vec<CandidatePart>,
}

#[derive(Debug, Deserialize)]
struct CandidatePart {
    #[serde(default)]
    text: String,
}

/// Client for one model endpoint. Cheap to clone into worker threads.
#[derive(Debug, Clone)]
pub struct AiClient {
    base_url: String,
    api_key: String,
    model: String,
    http: reqwest::blocking::Client,
}

impl AiClient {
    pub fn new(base_url: String, api_key: String, model: String) -> Result<Self> {
        let http = reqwest::blocking::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .context("Failed to build HTTP client")?;
        Ok(Self {
            base_url,
            api_key,
            model,
            http,
        })
    }

    /// Build a client from the `GEMINI_API_KEY` environment variable, using
    /// the default endpoint and model.
    pub fn from_env() -> Result<Self> {
        let api_key = std::env::var("GEMINI_API_KEY")
            .context("GEMINI_API_KEY environment variable is not set")?;
        Self::new(
            DEFAULT_BASE_URL.to_string(),
            api_key,
            DEFAULT_MODEL.to_string(),
        )
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    /// Switch to a different model id on the same endpoint.
    pub fn with_model(mut self, model: String) -> Self {
        self.model = model;
        self
    }

    /// Send one prompt and return the reply text. Blocks until the API
    /// responds or the request times out.
    pub fn generate(&self, prompt: &str) -> Result<String> {
        let url = format!(
            "{}/models/{}:generateContent?key={}",
            self.base_url, self.model, self.api_key
        );
        let request = GenerateRequest {
            contents: vec![RequestContent {
                parts: vec![RequestPart {
                    text: prompt.to_string(),
                }],
            }],
        };

        tracing::debug!(model = %self.model, prompt_len = prompt.len(), "Sending generate request");
        let response = self
            .http
            .post(&url)
            .json(&request)
            .send()
            .context("Failed to reach the AI service")?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().unwrap_or_default();
            tracing::warn!(%status, "AI service returned an error");
            return Err(anyhow!("AI service returned {status}: {body}"));
        }

        let parsed: GenerateResponse = response
            .json()
            .context("Failed to parse the AI service response")?;
        let candidate = parsed
            .candidates
            .into_iter()
            .next()
            .ok_or_else(|| anyhow!("AI service returned no candidates"))?;
        let text: String = candidate
            .content
            .parts
            .into_iter()
            .map(|p| p.text)
            .collect();
        if text.is_empty() {
            return Err(anyhow!("AI service returned an empty reply"));
        }
        tracing::debug!(reply_len = text.len(), "Received generate response");
        Ok(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_body_matches_wire_format() {
        let request = GenerateRequest {
            contents: vec![RequestContent {
                parts: vec![RequestPart {
                    text: "hello".to_string(),
                }],
            }],
        };
        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value["contents"][0]["parts"][0]["text"], "hello");
    }

    #[test]
    fn response_text_is_concatenated_from_parts() {
        let raw = r#"{"candidates":[{"content":{"parts":[{"text":"foo"},{"text":"bar"}]}}]}"#;
        let parsed: GenerateResponse = serde_json::from_str(raw).unwrap();
        let text: String = parsed.candidates[0]
            .content
            .parts
            .iter()
            .map(|p| p.text.clone())
            .collect::<Vec<_>>()
            .join("");
        assert_eq!(text, "foobar");
    }
}
