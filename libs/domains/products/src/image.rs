//! Product image storage
//!
//! Uploads and deletes image bytes in the object store, handing back the URL
//! under which the image is retrievable. Keys are derived from the product
//! identifier, so an upload for an existing product replaces its image.

use async_trait::async_trait;
use aws_sdk_s3::primitives::ByteStream;
use bytes::Bytes;
use std::collections::HashMap;
use std::sync::Arc;
use storage::s3::S3Config;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::error::{ProductError, ProductResult};

/// Object storage interface for product images
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProductImageStore: Send + Sync {
    /// Store image bytes under the given key, returning the retrievable URL
    async fn put(&self, key: &str, data: Bytes, content_type: Option<String>)
        -> ProductResult<String>;

    /// Remove the object stored under the given key
    async fn delete(&self, key: &str) -> ProductResult<()>;
}

/// Object key for a product's image
pub fn image_key(product_id: Uuid) -> String {
    format!("products/{}", product_id)
}

/// S3-backed implementation of ProductImageStore
///
/// Holds a clone of the process-wide S3 client; the bucket and URL derivation
/// come from the storage configuration fixed at startup.
#[derive(Clone)]
pub struct S3ProductImageStore {
    client: aws_sdk_s3::Client,
    config: S3Config,
}

impl S3ProductImageStore {
    pub fn new(client: aws_sdk_s3::Client, config: S3Config) -> Self {
        Self { client, config }
    }

    pub fn bucket(&self) -> &str {
        &self.config.bucket
    }
}

#[async_trait]
impl ProductImageStore for S3ProductImageStore {
    async fn put(
        &self,
        key: &str,
        data: Bytes,
        content_type: Option<String>,
    ) -> ProductResult<String> {
        tracing::debug!(key = %key, bucket = %self.config.bucket, size = data.len(), "Uploading product image");

        self.client
            .put_object()
            .bucket(&self.config.bucket)
            .key(key)
            .body(ByteStream::from(data))
            .set_content_type(content_type)
            .send()
            .await
            .map_err(|e| {
                tracing::error!(key = %key, error = %e, "Failed to upload product image");
                ProductError::Storage(format!("put_object failed for key '{}': {}", key, e))
            })?;

        tracing::info!(key = %key, "Uploaded product image");
        Ok(self.config.object_url(key))
    }

    async fn delete(&self, key: &str) -> ProductResult<()> {
        tracing::debug!(key = %key, bucket = %self.config.bucket, "Deleting product image");

        self.client
            .delete_object()
            .bucket(&self.config.bucket)
            .key(key)
            .send()
            .await
            .map_err(|e| {
                tracing::error!(key = %key, error = %e, "Failed to delete product image");
                ProductError::Storage(format!("delete_object failed for key '{}': {}", key, e))
            })?;

        tracing::info!(key = %key, "Deleted product image");
        Ok(())
    }
}

/// In-memory implementation of ProductImageStore (for development/testing)
#[derive(Debug, Default, Clone)]
pub struct InMemoryImageStore {
    objects: Arc<RwLock<HashMap<String, Bytes>>>,
}

impl InMemoryImageStore {
    pub fn new() -> Self {
        Self {
            objects: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Number of stored objects
    pub async fn len(&self) -> usize {
        self.objects.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.objects.read().await.is_empty()
    }

    /// Fetch stored bytes back out (test helper)
    pub async fn get(&self, key: &str) -> Option<Bytes> {
        self.objects.read().await.get(key).cloned()
    }
}

#[async_trait]
impl ProductImageStore for InMemoryImageStore {
    async fn put(
        &self,
        key: &str,
        data: Bytes,
        _content_type: Option<String>,
    ) -> ProductResult<String> {
        let mut objects = self.objects.write().await;
        objects.insert(key.to_string(), data);
        Ok(format!("memory://{}", key))
    }

    async fn delete(&self, key: &str) -> ProductResult<()> {
        let mut objects = self.objects.write().await;
        objects.remove(key);
        Ok(())
    }
}
