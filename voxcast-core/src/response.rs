use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::config::Config;
use crate::error::HandlerError;
use crate::event::HttpResponse;

/// Body returned on a successful synthesis.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SuccessBody {
    pub audio_url: String,
    pub bucket: String,
    pub key: String,
    pub voice_id: String,
    pub format: String,
    pub content_type: String,
    pub ssml: bool,
}

pub fn success(body: &SuccessBody, config: &Config) -> Result<HttpResponse, HandlerError> {
    let body = serde_json::to_string(body)
        .map_err(|e| HandlerError::Unexpected(anyhow::anyhow!(e)))?;
    Ok(with_headers(200, body, config))
}

pub fn failure(error: &HandlerError, config: &Config) -> HttpResponse {
    let (status_code, body) = match error {
        HandlerError::Validation(message) => (400, serde_json::json!({ "error": message })),
        HandlerError::Provider(source) => (
            500,
            serde_json::json!({ "error": "provider error", "detail": source.to_string() }),
        ),
        HandlerError::Unexpected(source) => (
            500,
            serde_json::json!({ "error": "Unexpected error", "detail": source.to_string() }),
        ),
    };

    with_headers(status_code, body.to_string(), config)
}

/// Every response, success or failure, carries the same fixed headers so a
/// preflight-capable API endpoint works against any outcome.
fn with_headers(status_code: u16, body: String, config: &Config) -> HttpResponse {
    let headers = HashMap::from([
        ("Content-Type".to_string(), "application/json".to_string()),
        (
            "Access-Control-Allow-Origin".to_string(),
            config.allowed_origin.clone(),
        ),
        ("Access-Control-Allow-Headers".to_string(), "*".to_string()),
        (
            "Access-Control-Allow-Methods".to_string(),
            "OPTIONS,POST".to_string(),
        ),
    ]);

    HttpResponse {
        status_code,
        headers,
        body,
    }
}
