use serde::{Deserialize, Serialize};

/// Audio output formats the handler can produce.
///
/// Each variant carries its wire token, HTTP content type, and object key
/// extension together so the three facts cannot drift apart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AudioFormat {
    Mp3,
    OggVorbis,
    Pcm,
}

impl AudioFormat {
    pub const ALL: [AudioFormat; 3] = [AudioFormat::Mp3, AudioFormat::OggVorbis, AudioFormat::Pcm];

    /// Parse a user-supplied format token. Case-insensitive.
    pub fn parse(token: &str) -> Option<Self> {
        match token.trim().to_ascii_lowercase().as_str() {
            "mp3" => Some(Self::Mp3),
            "ogg_vorbis" => Some(Self::OggVorbis),
            "pcm" => Some(Self::Pcm),
            _ => None,
        }
    }

    /// The token echoed back to clients.
    pub fn token(&self) -> &'static str {
        match self {
            Self::Mp3 => "mp3",
            Self::OggVorbis => "ogg_vorbis",
            Self::Pcm => "pcm",
        }
    }

    /// Content type the stored object is tagged with.
    pub fn content_type(&self) -> &'static str {
        match self {
            Self::Mp3 => "audio/mpeg",
            Self::OggVorbis => "audio/ogg",
            Self::Pcm => "audio/wave",
        }
    }

    /// File extension used in the object key.
    pub fn extension(&self) -> &'static str {
        match self {
            Self::Mp3 => "mp3",
            Self::OggVorbis => "ogg",
            Self::Pcm => "pcm",
        }
    }

    /// Comma-separated list of supported tokens, for validation messages.
    pub fn supported_tokens() -> String {
        Self::ALL
            .iter()
            .map(AudioFormat::token)
            .collect::<Vec<_>>()
            .join(", ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!(AudioFormat::parse("mp3"), Some(AudioFormat::Mp3));
        assert_eq!(AudioFormat::parse("MP3"), Some(AudioFormat::Mp3));
        assert_eq!(AudioFormat::parse("OGG_Vorbis"), Some(AudioFormat::OggVorbis));
        assert_eq!(AudioFormat::parse(" pcm "), Some(AudioFormat::Pcm));
        assert_eq!(AudioFormat::parse("wav"), None);
        assert_eq!(AudioFormat::parse(""), None);
    }

    #[test]
    fn test_format_facts_stay_together() {
        assert_eq!(AudioFormat::Mp3.token(), "mp3");
        assert_eq!(AudioFormat::Mp3.content_type(), "audio/mpeg");
        assert_eq!(AudioFormat::Mp3.extension(), "mp3");

        assert_eq!(AudioFormat::OggVorbis.token(), "ogg_vorbis");
        assert_eq!(AudioFormat::OggVorbis.content_type(), "audio/ogg");
        assert_eq!(AudioFormat::OggVorbis.extension(), "ogg");

        assert_eq!(AudioFormat::Pcm.token(), "pcm");
        assert_eq!(AudioFormat::Pcm.content_type(), "audio/wave");
        assert_eq!(AudioFormat::Pcm.extension(), "pcm");
    }

    #[test]
    fn test_token_round_trips() {
        for format in AudioFormat::ALL {
            assert_eq!(AudioFormat::parse(format.token()), Some(format));
        }
    }

    #[test]
    fn test_supported_tokens_list() {
        assert_eq!(AudioFormat::supported_tokens(), "mp3, ogg_vorbis, pcm");
    }
}
