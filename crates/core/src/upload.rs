//! Product image upload rules.
//!
//! Checked before anything is sent to object storage.

/// Largest accepted image, in bytes (5 MiB).
pub const MAX_IMAGE_BYTES: u64 = 5 * 1024 * 1024;

/// Folder inside the bucket that holds product images.
pub const PRODUCT_IMAGE_FOLDER: &str = "products";

/// Why an upload was refused.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum UploadError {
    #[error("content type {0:?} is not an image")]
    NotAnImage(String),
    #[error("image is {size} bytes, limit is {max}")]
    TooLarge { size: u64, max: u64 },
}

impl UploadError {
    /// Notification shown to the admin.
    #[must_use]
    pub const fn toast_key(&self) -> &'static str {
        match self {
            Self::NotAnImage(_) => "toast.selectImage",
            Self::TooLarge { .. } => "toast.imageTooLarge",
        }
    }
}

/// An image file that passed validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageUpload {
    extension: String,
    content_type: String,
}

impl ImageUpload {
    /// Accept `file_name` when its content type is `image/*` and it is at
    /// most [`MAX_IMAGE_BYTES`] long.
    ///
    /// # Errors
    ///
    /// Returns [`UploadError`] naming the violated rule.
    pub fn validate(file_name: &str, content_type: &str, size: u64) -> Result<Self, UploadError> {
        if !content_type.starts_with("image/") {
            return Err(UploadError::NotAnImage(content_type.to_owned()));
        }
        if size > MAX_IMAGE_BYTES {
            return Err(UploadError::TooLarge {
                size,
                max: MAX_IMAGE_BYTES,
            });
        }

        let extension = file_name
            .rsplit_once('.')
            .map(|(_, ext)| ext)
            .filter(|ext| !ext.is_empty() && ext.chars().all(|c| c.is_ascii_alphanumeric()))
            .map_or_else(
                || content_type.trim_start_matches("image/").to_owned(),
                str::to_ascii_lowercase,
            );

        Ok(Self {
            extension,
            content_type: content_type.to_owned(),
        })
    }

    #[must_use]
    pub fn extension(&self) -> &str {
        &self.extension
    }

    #[must_use]
    pub fn content_type(&self) -> &str {
        &self.content_type
    }

    /// Object path for this upload: `products/{millis}-{suffix}.{ext}`.
    #[must_use]
    pub fn storage_path(&self, now_millis: u128, random_suffix: &str) -> String {
        format!(
            "{PRODUCT_IMAGE_FOLDER}/{now_millis}-{random_suffix}.{}",
            self.extension
        )
    }
}
