//! The single outbound call: one Gemini `generateContent` request per
//! user-initiated generate action.
//!
//! The request embeds the user's free-text concept in a prompt that asks for
//! a JSON object matching a fixed schema, and constrains the response with
//! `responseMimeType`/`responseSchema`. Transport errors, non-OK statuses and
//! malformed JSON all surface through the same `AiError` path; the caller
//! treats any failure as a no-op.

use std::fmt;

use serde::Deserialize;
use serde_json::{Value, json};

use crate::ai::proposal::TokenomicsProposal;
use crate::config::{GEMINI_API_URL, GEMINI_ENV_KEY, GEMINI_MODEL};

#[cfg(debug_assertions)]
use crate::config::PRINT_AI_TRAFFIC;

/// Error types for the assist call
#[derive(Debug, Clone)]
pub enum AiError {
    /// No credential configured; the generate control should be disabled
    MissingApiKey,
    /// Transport-level failure (DNS, TLS, connect, body read)
    Request(String),
    /// The endpoint answered with a non-OK status
    Status(u16),
    /// The response body or the embedded proposal text was not valid JSON
    MalformedResponse(String),
}

impl fmt::Display for AiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AiError::MissingApiKey => write!(f, "No API key configured"),
            AiError::Request(msg) => write!(f, "Request failed: {}", msg),
            AiError::Status(code) => write!(f, "Endpoint returned status {}", code),
            AiError::MalformedResponse(msg) => write!(f, "Malformed response: {}", msg),
        }
    }
}

impl std::error::Error for AiError {}

/// Credential + endpoint configuration, resolved once at startup.
#[derive(Clone, Debug, Default)]
pub struct AiConfig {
    api_key: Option<String>,
}

impl AiConfig {
    /// Resolves the credential: an explicit override (CLI flag) wins over the
    /// `GEMINI_API_KEY` environment variable.
    pub fn from_env(override_key: Option<String>) -> Self {
        let api_key = override_key
            .filter(|k| !k.is_empty())
            .or_else(|| std::env::var(GEMINI_ENV_KEY).ok().filter(|k| !k.is_empty()));
        Self { api_key }
    }

    /// No credential (the wasm build has no process environment).
    pub fn without_key() -> Self {
        Self { api_key: None }
    }

    pub fn has_key(&self) -> bool {
        self.api_key.is_some()
    }

    fn endpoint(&self) -> Result<String, AiError> {
        let key = self.api_key.as_deref().ok_or(AiError::MissingApiKey)?;
        Ok(format!(
            "{}/{}:generateContent?key={}",
            GEMINI_API_URL, GEMINI_MODEL, key
        ))
    }
}

/// Assembles the natural-language prompt around the user's concept.
pub fn build_prompt(concept: &str) -> String {
    format!(
        "Generate a detailed tokenomics model in JSON format for this token concept: \"{}\". \
         Include name, symbol, a detailed description, total supply (realistic number, e.g., 100M-1B), \
         decimals (default 18), and a percentage allocation breakdown. Ensure total allocation sums to 100%.",
        concept
    )
}

/// The generateContent body: prompt plus the JSON schema the model must fill.
pub fn build_request_body(concept: &str) -> Value {
    json!({
        "contents": [{ "parts": [{ "text": build_prompt(concept) }] }],
        "generationConfig": {
            "responseMimeType": "application/json",
            "responseSchema": {
                "type": "OBJECT",
                "properties": {
                    "name": { "type": "STRING", "description": "Suggestive token name" },
                    "symbol": { "type": "STRING", "description": "Suggestive token symbol (2-10 uppercase chars)" },
                    "description": { "type": "STRING", "description": "Detailed token purpose and utility" },
                    "totalSupply": { "type": "NUMBER", "description": "Total supply of the token" },
                    "decimals": { "type": "NUMBER", "description": "Number of decimals, typically 18" },
                    "allocation": {
                        "type": "OBJECT",
                        "properties": {
                            "team": { "type": "NUMBER" },
                            "investors": { "type": "NUMBER" },
                            "ecosystem": { "type": "NUMBER" },
                            "treasury": { "type": "NUMBER" },
                            "marketing": { "type": "NUMBER" },
                            "liquidity": { "type": "NUMBER" }
                        },
                        "required": ["team", "investors", "ecosystem", "treasury", "marketing", "liquidity"]
                    },
                    "vestingRecommendations": {
                        "type": "OBJECT",
                        "properties": {
                            "team": { "type": "STRING" },
                            "investors": { "type": "STRING" }
                        }
                    },
                    "utilitySuggestions": {
                        "type": "ARRAY",
                        "items": { "type": "STRING" },
                        "description": "Key utility features"
                    }
                }
            }
        }
    })
}

// Response envelope: the proposal JSON arrives as text inside the first
// candidate part.
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
    parts: Vec<CandidatePart>,
}

#[derive(Debug, Deserialize)]
struct CandidatePart {
    #[serde(default)]
    text: String,
}

/// Extracts and parses the proposal from a raw response body.
pub fn parse_proposal(body: &str) -> Result<TokenomicsProposal, AiError> {
    let envelope: GenerateContentResponse =
        serde_json::from_str(body).map_err(|e| AiError::MalformedResponse(e.to_string()))?;

    let text = envelope
        .candidates
        .first()
        .and_then(|c| c.content.parts.first())
        .map(|p| p.text.as_str())
        .ok_or_else(|| AiError::MalformedResponse("no candidate text in response".to_string()))?;

    serde_json::from_str(text).map_err(|e| AiError::MalformedResponse(e.to_string()))
}

/// Blocking request, run inside the promise's worker thread on native.
#[cfg(not(target_arch = "wasm32"))]
pub fn fetch_proposal_blocking(
    config: &AiConfig,
    concept: &str,
) -> Result<TokenomicsProposal, AiError> {
    let endpoint = config.endpoint()?;

    #[cfg(debug_assertions)]
    if PRINT_AI_TRAFFIC {
        log::info!("[ai] prompt: {}", build_prompt(concept));
    }

    let client = reqwest::blocking::Client::new();
    let response = client
        .post(&endpoint)
        .json(&build_request_body(concept))
        .send()
        .map_err(|e| AiError::Request(e.to_string()))?;

    let status = response.status();
    if !status.is_success() {
        return Err(AiError::Status(status.as_u16()));
    }

    let body = response.text().map_err(|e| AiError::Request(e.to_string()))?;

    #[cfg(debug_assertions)]
    if PRINT_AI_TRAFFIC {
        log::info!("[ai] raw response: {}", body);
    }

    parse_proposal(&body)
}

/// Async request for the wasm build (runs as a browser future).
#[cfg(target_arch = "wasm32")]
pub async fn fetch_proposal(config: &AiConfig, concept: &str) -> Result<TokenomicsProposal, AiError> {
    let endpoint = config.endpoint()?;

    let client = reqwest::Client::new();
    let response = client
        .post(&endpoint)
        .json(&build_request_body(concept))
        .send()
        .await
        .map_err(|e| AiError::Request(e.to_string()))?;

    let status = response.status();
    if !status.is_success() {
        return Err(AiError::Status(status.as_u16()));
    }

    let body = response
        .text()
        .await
        .map_err(|e| AiError::Request(e.to_string()))?;

    parse_proposal(&body)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompt_embeds_concept() {
        let prompt = build_prompt("a decentralized storage network");
        assert!(prompt.contains("\"a decentralized storage network\""));
        assert!(prompt.contains("sums to 100%"));
    }

    #[test]
    fn test_request_body_constrains_response() {
        let body = build_request_body("x");
        assert_eq!(
            body["generationConfig"]["responseMimeType"],
            "application/json"
        );
        let required = &body["generationConfig"]["responseSchema"]["properties"]["allocation"]
            ["required"];
        assert_eq!(required.as_array().unwrap().len(), 6);
    }

    #[test]
    fn test_parse_proposal_from_envelope() {
        let body = r#"{
            "candidates": [{
                "content": { "parts": [{ "text": "{\"name\":\"FlowToken\",\"symbol\":\"FLW\",\"totalSupply\":500000000}" }] }
            }]
        }"#;
        let proposal = parse_proposal(body).unwrap();
        assert_eq!(proposal.name.as_deref(), Some("FlowToken"));
        assert_eq!(proposal.total_supply, Some(500_000_000.0));
    }

    #[test]
    fn test_parse_failures_share_one_path() {
        // Envelope not JSON
        assert!(matches!(
            parse_proposal("not json"),
            Err(AiError::MalformedResponse(_))
        ));
        // Envelope JSON but no candidates
        assert!(matches!(
            parse_proposal(r#"{"candidates": []}"#),
            Err(AiError::MalformedResponse(_))
        ));
        // Candidate text is not proposal JSON
        let body = r#"{"candidates":[{"content":{"parts":[{"text":"oops"}]}}]}"#;
        assert!(matches!(
            parse_proposal(body),
            Err(AiError::MalformedResponse(_))
        ));
    }

    #[test]
    fn test_missing_key_rejected_before_dispatch() {
        let config = AiConfig::without_key();
        assert!(!config.has_key());
        assert!(matches!(config.endpoint(), Err(AiError::MissingApiKey)));
    }
}
