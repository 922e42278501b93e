//! Amazon S3 audio storage implementation

use std::time::Duration;

use anyhow::{Context, Result};
use async_trait::async_trait;
use aws_sdk_s3::config::Region;
use aws_sdk_s3::presigning::PresigningConfig;
use aws_sdk_s3::primitives::ByteStream;
use aws_sdk_s3::Client;

use super::AudioStore;

/// Configuration for the S3 audio store
#[derive(Debug, Clone)]
pub struct S3StoreConfig {
    pub bucket: String,
    pub profile: Option<String>,
    pub region: String,
}

/// S3-backed audio store
pub struct S3AudioStore {
    client: Client,
    bucket: String,
}

impl S3AudioStore {
    /// Create a new S3 client for the configured bucket
    pub async fn new(config: S3StoreConfig) -> Result<Self> {
        let mut aws_config_loader = aws_config::defaults(aws_config::BehaviorVersion::latest());

        if let Some(profile) = &config.profile {
            aws_config_loader = aws_config_loader.profile_name(profile);
        }

        aws_config_loader = aws_config_loader.region(Region::new(config.region));

        let aws_config = aws_config_loader.load().await;
        let client = Client::new(&aws_config);

        Ok(Self {
            client,
            bucket: config.bucket,
        })
    }
}

#[async_trait]
impl AudioStore for S3AudioStore {
    async fn put(&self, key: &str, bytes: Vec<u8>, content_type: &str) -> Result<()> {
        self.client
            .put_object()
            .bucket(&self.bucket)
            .key(key)
            .content_type(content_type)
            .body(ByteStream::from(bytes))
            .send()
            .await
            .with_context(|| format!("Failed to store audio object {key}"))?;

        Ok(())
    }

    async fn presign_get(&self, key: &str, expires_in: Duration) -> Result<String> {
        let presigning =
            PresigningConfig::expires_in(expires_in).context("Invalid signed URL expiry")?;

        let request = self
            .client
            .get_object()
            .bucket(&self.bucket)
            .key(key)
            .presigned(presigning)
            .await
            .with_context(|| format!("Failed to sign URL for {key}"))?;

        Ok(request.uri().to_string())
    }
}
