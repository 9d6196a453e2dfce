//! S3-backed template source.

use async_trait::async_trait;
use aws_sdk_s3::operation::get_object::GetObjectError;
use aws_sdk_s3::Client;

use todoboard_core::template::{Result, TemplateError, TemplateSource};

/// Fetches the page template from a fixed S3 bucket and key.
pub struct S3TemplateSource {
    client: Client,
    bucket: String,
    key: String,
}

impl S3TemplateSource {
    /// Creates a new source with the given S3 client, bucket, and object key.
    pub fn new(client: Client, bucket: impl Into<String>, key: impl Into<String>) -> Self {
        Self {
            client,
            bucket: bucket.into(),
            key: key.into(),
        }
    }
}

#[async_trait]
impl TemplateSource for S3TemplateSource {
    async fn fetch(&self) -> Result<String> {
        let result = self
            .client
            .get_object()
            .bucket(&self.bucket)
            .key(&self.key)
            .send()
            .await
            .map_err(|err| match err.into_service_error() {
                GetObjectError::NoSuchKey(_) => TemplateError::NotFound {
                    bucket: self.bucket.clone(),
                    key: self.key.clone(),
                },
                err => TemplateError::FetchFailed(format!("GetObject failed: {:?}", err)),
            })?;

        let bytes = result
            .body
            .collect()
            .await
            .map_err(|e| TemplateError::FetchFailed(e.to_string()))?
            .into_bytes();

        String::from_utf8(bytes.to_vec()).map_err(|e| TemplateError::InvalidEncoding(e.to_string()))
    }
}
