use anyhow::{anyhow, Result};
use base64::Engine;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Inbound HTTP-style proxy event, as delivered by the event-routing layer.
/// Unknown fields are ignored.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct HttpEvent {
    pub body: Option<String>,
    pub is_base64_encoded: bool,
    pub raw_path: Option<String>,
    pub request_context: Option<RequestContext>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RequestContext {
    pub request_id: Option<String>,
    pub http: Option<HttpContext>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct HttpContext {
    pub source_ip: Option<String>,
}

impl HttpEvent {
    /// The body bytes, base64-decoded when the event says so. A missing or
    /// empty body reads as an empty JSON object.
    pub fn raw_body(&self) -> Result<Vec<u8>> {
        let raw = match self.body.as_deref() {
            Some(body) if !body.is_empty() => body,
            _ => "{}",
        };

        if self.is_base64_encoded {
            base64::engine::general_purpose::STANDARD
                .decode(raw)
                .map_err(|e| anyhow!("Invalid base64-encoded body: {e}"))
        } else {
            Ok(raw.as_bytes().to_vec())
        }
    }

    pub fn request_id(&self) -> Option<&str> {
        self.request_context.as_ref()?.request_id.as_deref()
    }

    pub fn source_ip(&self) -> Option<&str> {
        self.request_context.as_ref()?.http.as_ref()?.source_ip.as_deref()
    }
}

/// Outbound HTTP-style proxy response.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HttpResponse {
    pub status_code: u16,
    pub headers: HashMap<String, String>,
    pub body: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_body_reads_as_empty_object() {
        let event = HttpEvent::default();
        assert_eq!(event.raw_body().unwrap(), b"{}");

        let event = HttpEvent {
            body: Some(String::new()),
            ..Default::default()
        };
        assert_eq!(event.raw_body().unwrap(), b"{}");
    }

    #[test]
    fn test_base64_body_is_decoded() {
        let event = HttpEvent {
            body: Some("eyJ0ZXh0IjoiaGkifQ==".to_string()),
            is_base64_encoded: true,
            ..Default::default()
        };
        assert_eq!(event.raw_body().unwrap(), br#"{"text":"hi"}"#);
    }

    #[test]
    fn test_invalid_base64_body_fails() {
        let event = HttpEvent {
            body: Some("not base64!".to_string()),
            is_base64_encoded: true,
            ..Default::default()
        };
        let error = event.raw_body().unwrap_err();
        assert!(error.to_string().contains("base64"));
    }

    #[test]
    fn test_request_metadata_accessors() {
        let event: HttpEvent = serde_json::from_str(
            r#"{
                "rawPath": "/synthesize",
                "requestContext": {
                    "requestId": "req-1",
                    "http": {"sourceIp": "198.51.100.7"}
                }
            }"#,
        )
        .unwrap();

        assert_eq!(event.raw_path.as_deref(), Some("/synthesize"));
        assert_eq!(event.request_id(), Some("req-1"));
        assert_eq!(event.source_ip(), Some("198.51.100.7"));

        let empty = HttpEvent::default();
        assert_eq!(empty.request_id(), None);
        assert_eq!(empty.source_ip(), None);
    }

    #[test]
    fn test_unknown_event_fields_ignored() {
        let event: HttpEvent = serde_json::from_str(
            r#"{"body": "{}", "version": "2.0", "routeKey": "POST /synthesize"}"#,
        )
        .unwrap();
        assert_eq!(event.body.as_deref(), Some("{}"));
    }
}
