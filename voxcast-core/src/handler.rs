use std::sync::Arc;
use std::time::Duration;

use anyhow::anyhow;
use tracing::info;
use uuid::Uuid;

use crate::config::Config;
use crate::error::HandlerError;
use crate::event::{HttpEvent, HttpResponse};
use crate::request::SynthesisRequest;
use crate::response::{self, SuccessBody};
use crate::storage::AudioStore;
use crate::synthesis::SpeechSynthesizer;

/// Stateless text-to-speech request handler.
///
/// One invocation handles one event to completion: validate, synthesize,
/// store, sign, respond. The first failure short-circuits to the response;
/// nothing is retried and no written object is rolled back.
pub struct Handler {
    config: Config,
    synthesizer: Arc<dyn SpeechSynthesizer>,
    store: Arc<dyn AudioStore>,
}

impl Handler {
    pub fn new(
        config: Config,
        synthesizer: Arc<dyn SpeechSynthesizer>,
        store: Arc<dyn AudioStore>,
    ) -> Self {
        Self {
            config,
            synthesizer,
            store,
        }
    }

    /// Handle one inbound event. Total: every error is folded into the
    /// response it maps to.
    pub async fn handle(&self, event: &HttpEvent) -> HttpResponse {
        info!(
            request_id = event.request_id().unwrap_or_default(),
            source_ip = event.source_ip().unwrap_or_default(),
            route = event.raw_path.as_deref().unwrap_or_default(),
            "request received"
        );

        match self.run(event).await {
            Ok(response) => response,
            Err(error) => response::failure(&error, &self.config),
        }
    }

    async fn run(&self, event: &HttpEvent) -> Result<HttpResponse, HandlerError> {
        let request = SynthesisRequest::from_event(event, &self.config)?;

        let audio = self
            .synthesizer
            .synthesize(&request)
            .await
            .map_err(HandlerError::Provider)?;
        if audio.is_empty() {
            return Err(HandlerError::Provider(anyhow!(
                "Synthesizer returned no audio"
            )));
        }

        let key = format!("audio/{}.{}", Uuid::new_v4(), request.format.extension());
        let content_type = request.format.content_type();

        self.store
            .put(&key, audio, content_type)
            .await
            .map_err(HandlerError::Provider)?;

        let audio_url = self
            .store
            .presign_get(&key, Duration::from_secs(self.config.url_expiry_seconds))
            .await
            .map_err(HandlerError::Provider)?;

        response::success(
            &SuccessBody {
                audio_url,
                bucket: self.config.audio_bucket.clone(),
                key,
                voice_id: request.voice_id,
                format: request.format.token().to_string(),
                content_type: content_type.to_string(),
                ssml: request.use_ssml,
            },
            &self.config,
        )
    }
}
