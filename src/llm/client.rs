use crate::config::Config;
use anyhow::{anyhow, Context, Result};
use async_trait::async_trait;
use log::debug;
use reqwest::Client;
use serde::{Deserialize, Serialize};

/// Capability interface over the text-generation service. The review
/// pipeline only ever sees this single method, so tests can swap in a
/// deterministic stand-in instead of a live network call.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    async fn generate(&self, prompt: &str) -> Result<String>;
}

#[derive(Debug, Serialize)]
struct GenerateRequest {
    contents: Vec<Content>,
    #[serde(rename = "generationConfig")]
    generation_config: GenerationConfig,
}

#[derive(Debug, Serialize)]
struct Content {
    parts: Vec<Part>,
}

#[derive(Debug, Serialize)]
struct Part {
    text: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    temperature: f32,
    max_output_tokens: usize,
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
    text: String,
}

pub struct GeminiClient {
    client: Client,
    config: Config,
}

impl GeminiClient {
    pub fn new(config: &Config) -> Result<Self> {
        let client = Client::new();

        Ok(Self {
            client,
            config: config.clone(),
        })
    }
}

#[async_trait]
impl TextGenerator for GeminiClient {
    async fn generate(&self, prompt: &str) -> Result<String> {
        let request = GenerateRequest {
            contents: vec![Content {
                parts: vec![Part {
                    text: prompt.to_string(),
                }],
            }],
            generation_config: GenerationConfig {
                temperature: self.config.llm.temperature,
                max_output_tokens: self.config.llm.max_output_tokens,
            },
        };

        debug!(
            "Sending {} byte prompt to model {}",
            prompt.len(),
            self.config.llm.model
        );

        // API keys go in the query string, per the generativelanguage API.
        let url = format!(
            "{}/models/{}:generateContent?key={}",
            self.config.llm.api_url.trim_end_matches('/'),
            self.config.llm.model,
            self.config.llm.api_key,
        );
        let response = self
            .client
            .post(&url)
            .header("Content-Type", "application/json")
            .json(&request)
            .send()
            .await
            .context("Failed to send request to Gemini API")?;

        if !response.status().is_success() {
            let status = response.status();
            let text = response.text().await.unwrap_or_default();
            return Err(anyhow!("Gemini API error: {} - {}", status, text));
        }

        let generate_response: GenerateResponse = response
            .json()
            .await
            .context("Failed to parse Gemini API response")?;

        let text = generate_response
            .candidates
            .first()
            .and_then(|candidate| candidate.content.parts.first())
            .map(|part| part.text.clone())
            .unwrap_or_default();

        if text.is_empty() {
            return Err(anyhow!("Gemini returned an empty response"));
        }

        debug!("Received {} byte reply", text.len());
        Ok(text)
    }
}
