//! Amazon Polly speech synthesis implementation

use anyhow::{Context, Result};
use async_trait::async_trait;
use aws_sdk_polly::config::Region;
use aws_sdk_polly::types::{OutputFormat, TextType, VoiceId};
use aws_sdk_polly::Client;

use super::SpeechSynthesizer;
use crate::format::AudioFormat;
use crate::request::SynthesisRequest;

/// Configuration for Amazon Polly
#[derive(Debug, Clone)]
pub struct PollyConfig {
    pub profile: Option<String>,
    pub region: String,
}

impl Default for PollyConfig {
    fn default() -> Self {
        Self {
            profile: None,
            region: "us-east-1".to_string(),
        }
    }
}

/// Amazon Polly speech-synthesis provider
pub struct PollySynthesizer {
    client: Client,
}

impl PollySynthesizer {
    /// Create a new Polly client
    pub async fn new(config: PollyConfig) -> Result<Self> {
        let mut aws_config_loader = aws_config::defaults(aws_config::BehaviorVersion::latest());

        if let Some(profile) = &config.profile {
            aws_config_loader = aws_config_loader.profile_name(profile);
        }

        aws_config_loader = aws_config_loader.region(Region::new(config.region));

        let aws_config = aws_config_loader.load().await;
        let client = Client::new(&aws_config);

        Ok(Self { client })
    }

    fn output_format(format: AudioFormat) -> OutputFormat {
        match format {
            AudioFormat::Mp3 => OutputFormat::Mp3,
            AudioFormat::OggVorbis => OutputFormat::OggVorbis,
            AudioFormat::Pcm => OutputFormat::Pcm,
        }
    }
}

#[async_trait]
impl SpeechSynthesizer for PollySynthesizer {
    async fn synthesize(&self, request: &SynthesisRequest) -> Result<Vec<u8>> {
        let text_type = if request.use_ssml {
            TextType::Ssml
        } else {
            TextType::Text
        };

        // Voice ids are passed through verbatim; Polly rejects unknown ones.
        let response = self
            .client
            .synthesize_speech()
            .text(&request.text)
            .text_type(text_type)
            .voice_id(VoiceId::from(request.voice_id.as_str()))
            .output_format(Self::output_format(request.format))
            .send()
            .await
            .context("Failed to synthesize speech")?;

        let bytes = response
            .audio_stream
            .collect()
            .await
            .context("Failed to collect audio stream")?
            .into_bytes()
            .to_vec();

        Ok(bytes)
    }
}
