//! Product image uploads to the public storage bucket.

use std::sync::Arc;
use std::time::{SystemTime, UNIX_EPOCH};

use rand::Rng;
use rand::distr::Alphanumeric;
use reqwest::Method;
use tracing::instrument;
use url::Url;
use witherstex_core::ImageUpload;

use super::{Backend, SupabaseError};
use crate::config::SupabaseConfig;

const SUFFIX_LEN: usize = 6;

/// Client for the product image bucket.
#[derive(Clone)]
pub struct StorageClient {
    inner: Arc<StorageClientInner>,
}

struct StorageClientInner {
    backend: Backend,
    bucket: String,
}

impl StorageClient {
    #[must_use]
    pub fn new(config: &SupabaseConfig) -> Self {
        Self {
            inner: Arc::new(StorageClientInner {
                backend: Backend::new(config),
                bucket: config.storage_bucket.clone(),
            }),
        }
    }

    /// Store `bytes` under a fresh `products/` path and return its public URL.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend rejects the upload.
    #[instrument(skip(self, upload, bytes, access_token), fields(size = bytes.len()))]
    pub async fn upload_image(
        &self,
        upload: &ImageUpload,
        bytes: Vec<u8>,
        access_token: &str,
    ) -> Result<String, SupabaseError> {
        let path = upload.storage_path(now_millis(), &random_suffix());
        let url = self.object_url(&path)?;

        let request = self
            .inner
            .backend
            .request(Method::POST, url, Some(access_token))
            .header("Content-Type", upload.content_type())
            .header("Cache-Control", "max-age=3600")
            .header("x-upsert", "false")
            .body(bytes);
        self.inner.backend.send(request).await?;

        tracing::info!(path = %path, "Product image uploaded");
        Ok(self.public_url(&path)?.to_string())
    }

    fn object_url(&self, path: &str) -> Result<Url, SupabaseError> {
        self.inner
            .backend
            .endpoint(&format!("storage/v1/object/{}/{path}", self.inner.bucket))
    }

    /// Address anyone can fetch the stored object from.
    fn public_url(&self, path: &str) -> Result<Url, SupabaseError> {
        self.inner
            .backend
            .endpoint(&format!("storage/v1/object/public/{}/{path}", self.inner.bucket))
    }
}

fn now_millis() -> u128 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_or(0, |elapsed| elapsed.as_millis())
}

fn random_suffix() -> String {
    rand::rng()
        .sample_iter(&Alphanumeric)
        .take(SUFFIX_LEN)
        .map(|c| char::from(c).to_ascii_lowercase())
        .collect()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::config::tests::test_config;

    #[test]
    fn test_public_url_points_at_bucket() {
        let client = StorageClient::new(&test_config().supabase);
        let url = client
            .public_url("products/1700000000000-k3j9x2.jpg")
            .unwrap();
        assert_eq!(
            url.as_str(),
            "https://witherstex.supabase.co/storage/v1/object/public/product-images/products/1700000000000-k3j9x2.jpg"
        );
    }

    #[test]
    fn test_object_url_for_upload() {
        let client = StorageClient::new(&test_config().supabase);
        let url = client.object_url("products/1-abc.png").unwrap();
        assert_eq!(
            url.as_str(),
            "https://witherstex.supabase.co/storage/v1/object/product-images/products/1-abc.png"
        );
    }

    #[test]
    fn test_random_suffix_shape() {
        let suffix = random_suffix();
        assert_eq!(suffix.len(), SUFFIX_LEN);
        assert!(
            suffix
                .chars()
                .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit())
        );
    }
}
