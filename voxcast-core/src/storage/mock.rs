use std::sync::{Arc, Mutex};
use std::time::Duration;

use anyhow::Result;
use async_trait::async_trait;

use super::AudioStore;

/// Mock behavior for the mock store
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum MockStoreBehavior {
    #[default]
    Success,
    /// Fail the write call
    FailPut,
    /// Accept the write, then fail URL signing
    FailPresign,
}

/// A write recorded by the mock store
#[derive(Debug, Clone)]
pub struct StoredObject {
    pub key: String,
    pub bytes: Vec<u8>,
    pub content_type: String,
}

/// Mock audio store for testing
#[derive(Clone, Default)]
pub struct MockAudioStore {
    behavior: Arc<Mutex<MockStoreBehavior>>,
    objects: Arc<Mutex<Vec<StoredObject>>>,
}

impl MockAudioStore {
    pub fn new(behavior: MockStoreBehavior) -> Self {
        Self {
            behavior: Arc::new(Mutex::new(behavior)),
            objects: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn set_behavior(&self, behavior: MockStoreBehavior) {
        *self.behavior.lock().unwrap() = behavior;
    }

    pub fn stored_objects(&self) -> Vec<StoredObject> {
        self.objects.lock().unwrap().clone()
    }

    pub fn last_stored_object(&self) -> Option<StoredObject> {
        self.objects.lock().unwrap().last().cloned()
    }
}

#[async_trait]
impl AudioStore for MockAudioStore {
    async fn put(&self, key: &str, bytes: Vec<u8>, content_type: &str) -> Result<()> {
        if *self.behavior.lock().unwrap() == MockStoreBehavior::FailPut {
            return Err(anyhow::anyhow!("Mock storage write failure"));
        }

        self.objects.lock().unwrap().push(StoredObject {
            key: key.to_string(),
            bytes,
            content_type: content_type.to_string(),
        });

        Ok(())
    }

    async fn presign_get(&self, key: &str, expires_in: Duration) -> Result<String> {
        if *self.behavior.lock().unwrap() == MockStoreBehavior::FailPresign {
            return Err(anyhow::anyhow!("Mock URL signing failure"));
        }

        Ok(format!(
            "https://mock-store.example/{key}?expires={}",
            expires_in.as_secs()
        ))
    }
}
