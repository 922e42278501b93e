//! Speech synthesis providers.

pub mod mock;
pub mod polly;

use anyhow::Result;
use async_trait::async_trait;

use crate::request::SynthesisRequest;

/// Trait for speech-synthesis providers.
#[async_trait]
pub trait SpeechSynthesizer: Send + Sync {
    /// Synthesize the request into a single in-memory audio byte sequence.
    async fn synthesize(&self, request: &SynthesisRequest) -> Result<Vec<u8>>;
}
