//! Audio object storage.

pub mod mock;
pub mod s3;

use std::time::Duration;

use anyhow::Result;
use async_trait::async_trait;

/// Trait for audio object stores.
#[async_trait]
pub trait AudioStore: Send + Sync {
    /// Write the audio bytes under the given key, tagged with a content
    /// type. The write is durable once this returns.
    async fn put(&self, key: &str, bytes: Vec<u8>, content_type: &str) -> Result<()>;

    /// Produce a signed URL granting time-limited read access to the key.
    async fn presign_get(&self, key: &str, expires_in: Duration) -> Result<String>;
}
