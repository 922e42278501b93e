use serde_json::Value;

use crate::config::Config;
use crate::error::HandlerError;
use crate::event::HttpEvent;
use crate::format::AudioFormat;

/// Format used when the request does not name one.
pub const DEFAULT_FORMAT: AudioFormat = AudioFormat::Mp3;

/// A validated synthesis request, with defaults applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SynthesisRequest {
    pub text: String,
    pub voice_id: String,
    pub format: AudioFormat,
    pub use_ssml: bool,
}

impl SynthesisRequest {
    /// Extract and validate the request payload from an inbound event.
    /// No side effects.
    pub fn from_event(event: &HttpEvent, config: &Config) -> Result<Self, HandlerError> {
        let raw = event
            .raw_body()
            .map_err(|e| HandlerError::Validation(e.to_string()))?;
        let body: Value = serde_json::from_slice(&raw)
            .map_err(|_| HandlerError::Validation("Invalid JSON body".to_string()))?;

        let text = string_field(&body, "text").trim().to_string();
        if text.is_empty() {
            return Err(HandlerError::Validation(
                "Field 'text' is required".to_string(),
            ));
        }

        let chars = text.chars().count();
        if chars > config.max_chars {
            return Err(HandlerError::Validation(format!(
                "Text too long ({chars} chars). Limit is {}.",
                config.max_chars
            )));
        }

        let format = match string_field(&body, "format").trim() {
            "" => DEFAULT_FORMAT,
            token => AudioFormat::parse(token).ok_or_else(|| {
                HandlerError::Validation(format!(
                    "'format' must be one of: {}",
                    AudioFormat::supported_tokens()
                ))
            })?,
        };

        let voice_id = match string_field(&body, "voiceId").trim() {
            "" => config.default_voice_id.clone(),
            voice => voice.to_string(),
        };

        let use_ssml = body.get("useSsml").map(truthy).unwrap_or(false);

        Ok(Self {
            text,
            voice_id,
            format,
            use_ssml,
        })
    }
}

/// Read an optional string field. Non-string values count as absent.
fn string_field<'a>(body: &'a Value, key: &str) -> &'a str {
    body.get(key).and_then(Value::as_str).unwrap_or("")
}

/// JSON truthiness: null, false, 0, "", [] and {} are false, everything
/// else is true.
fn truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().map(|f| f != 0.0).unwrap_or(true),
        Value::String(s) => !s.is_empty(),
        Value::Array(a) => !a.is_empty(),
        Value::Object(o) => !o.is_empty(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> Config {
        Config {
            audio_bucket: "audio-bucket".to_string(),
            max_chars: 3000,
            url_expiry_seconds: 3600,
            allowed_origin: "*".to_string(),
            default_voice_id: "Joanna".to_string(),
        }
    }

    fn event(body: Value) -> HttpEvent {
        HttpEvent {
            body: Some(body.to_string()),
            ..Default::default()
        }
    }

    fn parse(body: Value) -> Result<SynthesisRequest, HandlerError> {
        SynthesisRequest::from_event(&event(body), &config())
    }

    #[test]
    fn test_defaults_applied() {
        let request = parse(serde_json::json!({"text": "Hello world"})).unwrap();

        assert_eq!(request.text, "Hello world");
        assert_eq!(request.voice_id, "Joanna");
        assert_eq!(request.format, AudioFormat::Mp3);
        assert!(!request.use_ssml);
    }

    #[test]
    fn test_explicit_fields_respected() {
        let request = parse(serde_json::json!({
            "text": "  Hello  ",
            "format": "OGG_VORBIS",
            "voiceId": " Matthew ",
            "useSsml": true
        }))
        .unwrap();

        assert_eq!(request.text, "Hello");
        assert_eq!(request.voice_id, "Matthew");
        assert_eq!(request.format, AudioFormat::OggVorbis);
        assert!(request.use_ssml);
    }

    #[test]
    fn test_missing_text_rejected() {
        for body in [
            serde_json::json!({}),
            serde_json::json!({"text": ""}),
            serde_json::json!({"text": "   "}),
            serde_json::json!({"text": 42}),
        ] {
            let error = parse(body).unwrap_err();
            match error {
                HandlerError::Validation(message) => {
                    assert_eq!(message, "Field 'text' is required");
                }
                other => panic!("expected validation error, got {other:?}"),
            }
        }
    }

    #[test]
    fn test_text_over_limit_reports_both_lengths() {
        let config = Config {
            max_chars: 10,
            ..config()
        };
        let event = event(serde_json::json!({"text": "a".repeat(11)}));
        let error = SynthesisRequest::from_event(&event, &config).unwrap_err();

        match error {
            HandlerError::Validation(message) => {
                assert!(message.contains("11"), "missing actual length: {message}");
                assert!(message.contains("10"), "missing limit: {message}");
            }
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[test]
    fn test_length_counts_characters_not_bytes() {
        let config = Config {
            max_chars: 3,
            ..config()
        };
        // Three multi-byte characters are within a three-character limit.
        let event = event(serde_json::json!({"text": "äöü"}));
        assert!(SynthesisRequest::from_event(&event, &config).is_ok());
    }

    #[test]
    fn test_unsupported_format_enumerates_supported_set() {
        let error = parse(serde_json::json!({"text": "hi", "format": "wav"})).unwrap_err();
        match error {
            HandlerError::Validation(message) => {
                assert_eq!(message, "'format' must be one of: mp3, ogg_vorbis, pcm");
            }
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[test]
    fn test_empty_format_falls_back_to_default() {
        let request = parse(serde_json::json!({"text": "hi", "format": ""})).unwrap();
        assert_eq!(request.format, AudioFormat::Mp3);
    }

    #[test]
    fn test_invalid_json_body_rejected() {
        let event = HttpEvent {
            body: Some("not json".to_string()),
            ..Default::default()
        };
        let error = SynthesisRequest::from_event(&event, &config()).unwrap_err();
        match error {
            HandlerError::Validation(message) => assert_eq!(message, "Invalid JSON body"),
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[test]
    fn test_use_ssml_coercion() {
        let truthy_values = [
            serde_json::json!(true),
            serde_json::json!(1),
            serde_json::json!("yes"),
            serde_json::json!([1]),
        ];
        for value in truthy_values {
            let request = parse(serde_json::json!({"text": "hi", "useSsml": value})).unwrap();
            assert!(request.use_ssml, "expected truthy: {value:?}");
        }

        let falsy_values = [
            serde_json::json!(false),
            serde_json::json!(0),
            serde_json::json!(""),
            serde_json::json!([]),
            serde_json::json!({}),
            serde_json::json!(null),
        ];
        for value in falsy_values {
            let request = parse(serde_json::json!({"text": "hi", "useSsml": value})).unwrap();
            assert!(!request.use_ssml, "expected falsy: {value:?}");
        }
    }
}
