use std::sync::{Arc, Mutex};

use anyhow::Result;
use async_trait::async_trait;

use super::SpeechSynthesizer;
use crate::request::SynthesisRequest;

/// Mock behavior for the mock synthesizer
#[derive(Debug, Clone, Default)]
pub enum MockSynthesizerBehavior {
    /// Return a fixed non-empty audio payload
    #[default]
    Success,
    /// Return the provided bytes
    Audio(Vec<u8>),
    /// Return an empty byte sequence, as a provider with no audio stream would
    EmptyStream,
    /// Always fail
    AlwaysError,
}

/// Mock synthesizer for testing
#[derive(Clone, Default)]
pub struct MockSynthesizer {
    behavior: Arc<Mutex<MockSynthesizerBehavior>>,
    captured_requests: Arc<Mutex<Vec<SynthesisRequest>>>,
}

impl MockSynthesizer {
    pub fn new(behavior: MockSynthesizerBehavior) -> Self {
        Self {
            behavior: Arc::new(Mutex::new(behavior)),
            captured_requests: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn set_behavior(&self, behavior: MockSynthesizerBehavior) {
        *self.behavior.lock().unwrap() = behavior;
    }

    pub fn captured_requests(&self) -> Vec<SynthesisRequest> {
        self.captured_requests.lock().unwrap().clone()
    }

    pub fn last_captured_request(&self) -> Option<SynthesisRequest> {
        self.captured_requests.lock().unwrap().last().cloned()
    }
}

#[async_trait]
impl SpeechSynthesizer for MockSynthesizer {
    async fn synthesize(&self, request: &SynthesisRequest) -> Result<Vec<u8>> {
        self.captured_requests.lock().unwrap().push(request.clone());

        let behavior = self.behavior.lock().unwrap().clone();
        match behavior {
            MockSynthesizerBehavior::Success => Ok(b"mock audio".to_vec()),
            MockSynthesizerBehavior::Audio(bytes) => Ok(bytes),
            MockSynthesizerBehavior::EmptyStream => Ok(Vec::new()),
            MockSynthesizerBehavior::AlwaysError => {
                Err(anyhow::anyhow!("Mock synthesis failure"))
            }
        }
    }
}
