use anyhow::{Context, Result};
use std::env;

pub const DEFAULT_MAX_CHARS: usize = 3000;
pub const DEFAULT_URL_EXPIRY_SECONDS: u64 = 3600;
pub const DEFAULT_ALLOWED_ORIGIN: &str = "*";
pub const DEFAULT_VOICE_ID: &str = "Joanna";

/// Process configuration, read once at startup and passed to the handler
/// rather than consulted as ambient global state.
#[derive(Debug, Clone)]
pub struct Config {
    /// Bucket the synthesized audio is written to. Required.
    pub audio_bucket: String,

    /// Maximum character count accepted for synthesis. Polly caps plain
    /// text at 3000 characters.
    pub max_chars: usize,

    /// Lifetime of the signed retrieval URL, in seconds.
    pub url_expiry_seconds: u64,

    /// Value of the Access-Control-Allow-Origin response header.
    pub allowed_origin: String,

    /// Voice used when the request does not name one.
    pub default_voice_id: String,
}

impl Config {
    /// Load configuration from the process environment. A missing
    /// `AUDIO_BUCKET` or an unparseable numeric variable is a startup
    /// failure.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let audio_bucket = lookup("AUDIO_BUCKET").context("AUDIO_BUCKET must be set")?;

        let max_chars = match lookup("MAX_CHARS") {
            Some(raw) => raw
                .parse()
                .with_context(|| format!("Failed to parse MAX_CHARS: {raw}"))?,
            None => DEFAULT_MAX_CHARS,
        };

        let url_expiry_seconds = match lookup("URL_EXPIRY_SECONDS") {
            Some(raw) => raw
                .parse()
                .with_context(|| format!("Failed to parse URL_EXPIRY_SECONDS: {raw}"))?,
            None => DEFAULT_URL_EXPIRY_SECONDS,
        };

        let allowed_origin =
            lookup("ALLOWED_ORIGIN").unwrap_or_else(|| DEFAULT_ALLOWED_ORIGIN.to_string());
        let default_voice_id =
            lookup("DEFAULT_VOICE_ID").unwrap_or_else(|| DEFAULT_VOICE_ID.to_string());

        Ok(Self {
            audio_bucket,
            max_chars,
            url_expiry_seconds,
            allowed_origin,
            default_voice_id,
        })
    }
}
