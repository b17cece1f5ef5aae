use serde::{Deserialize, Serialize};
use std::time::Duration;

const DEFAULT_ENDPOINT: &str = "https://generativelanguage.googleapis.com/v1beta/models";

/// Whether a description is long enough to be worth summarizing.
///
/// Callers must skip the RPC entirely below the threshold; the request is
/// never sent with short text.
pub fn meets_length_threshold(text: &str, min_chars: usize) -> bool {
    text.trim().chars().count() >= min_chars
}

/// Client for the hosted summarization API.
///
/// One request per description, no retries: a failure is returned verbatim
/// for the caller to surface.
pub struct Summarizer {
    http: reqwest::Client,
    endpoint: String,
    api_key: String,
    model: String,
}

#[derive(Serialize)]
struct GenerateRequest {
    contents: Vec<Content>,
    #[serde(rename = "generationConfig")]
    generation_config: GenerationConfig,
}

#[derive(Serialize, Deserialize)]
struct Content {
    parts: Vec<Part>,
}

#[derive(Serialize, Deserialize)]
struct Part {
    text: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    temperature: f32,
    max_output_tokens: u32,
    top_p: f32,
    top_k: u32,
}

#[derive(Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Deserialize)]
struct Candidate {
    content: Option<Content>,
}

impl Summarizer {
    /// Create a client for the given API key and model
    pub fn new(api_key: &str, model: &str) -> Self {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .unwrap_or_default();

        Self {
            http,
            endpoint: DEFAULT_ENDPOINT.to_string(),
            api_key: api_key.to_string(),
            model: model.to_string(),
        }
    }

    /// Override the API endpoint (used by tests against a local server)
    pub fn with_endpoint(mut self, endpoint: &str) -> Self {
        self.endpoint = endpoint.trim_end_matches('/').to_string();
        self
    }

    /// Request a summary for a description. Single attempt; the error
    /// string is surfaced verbatim on failure.
    pub async fn summarize(&self, description: &str) -> Result<String, String> {
        let prompt = format!(
            "Please provide a concise summary of this YouTube video description \
             in 2-3 sentences. Focus on the main topic, key points, and what \
             viewers can expect. Here's the description:\n\n{}\n\nSummary:",
            description
        );

        let request = GenerateRequest {
            contents: vec![Content {
                parts: vec![Part { text: prompt }],
            }],
            generation_config: GenerationConfig {
                temperature: 0.3,
                max_output_tokens: 1024,
                top_p: 0.8,
                top_k: 40,
            },
        };

        let url = format!(
            "{}/{}:generateContent?key={}",
            self.endpoint, self.model, self.api_key
        );

        let response = self
            .http
            .post(&url)
            .json(&request)
            .send()
            .await
            .map_err(|e| format!("API request failed: {}", e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(match status.as_u16() {
                400 => "Invalid API request. Please check your API key.".to_string(),
                403 => "API key invalid or quota exceeded.".to_string(),
                code => format!("API request failed: {}", code),
            });
        }

        let body: GenerateResponse = response
            .json()
            .await
            .map_err(|e| format!("Invalid response from summarization API: {}", e))?;

        let text = body
            .candidates
            .into_iter()
            .next()
            .and_then(|c| c.content)
            .and_then(|c| c.parts.into_iter().next())
            .map(|p| p.text)
            .ok_or_else(|| "Invalid response from summarization API".to_string())?;

        Ok(strip_summary_prefix(text.trim()).to_string())
    }
}

/// The model sometimes echoes the "Summary:" label from the prompt
fn strip_summary_prefix(text: &str) -> &str {
    let trimmed = text.trim_start();
    for prefix in ["Summary:", "**Summary**:", "**Summary:**", "**Summary**"] {
        if let Some(rest) = strip_prefix_ignore_case(trimmed, prefix) {
            return rest.trim_start();
        }
    }
    trimmed
}

fn strip_prefix_ignore_case<'a>(text: &'a str, prefix: &str) -> Option<&'a str> {
    let head = text.get(..prefix.len())?;
    if head.eq_ignore_ascii_case(prefix) {
        Some(&text[prefix.len()..])
    } else {
        None
    }
}
