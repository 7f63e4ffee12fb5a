use crate::common::*;

use aws_config::{BehaviorVersion, Region};
use aws_sdk_s3::{
    error::{DisplayErrorContext, ProvideErrorMetadata},
    primitives::ByteStream,
};

use crate::enums::pipeline_error::*;
use crate::model::configs::{credentials::*, storage_config::*};
use crate::traits::repository_traits::object_store_repository::*;

/* S3 error codes meaning the access key pair itself is unusable */
const CREDENTIAL_ERROR_CODES: [&str; 4] = [
    "InvalidAccessKeyId",
    "SignatureDoesNotMatch",
    "AccessDenied",
    "ExpiredToken",
];

#[derive(Debug, Clone)]
pub struct S3RepositoryImpl {
    client: aws_sdk_s3::Client,
}

impl S3RepositoryImpl {
    #[doc = "Static-credential S3 client for the configured region and optional endpoint"]
    pub async fn new(storage_config: &StorageConfig, credentials: &Credentials) -> Self {
        let static_credentials = aws_sdk_s3::config::Credentials::new(
            credentials.aws_access_key(),
            credentials.aws_secret_key(),
            None,
            None,
            "repo-view-charts-static",
        );

        let mut loader = aws_config::defaults(BehaviorVersion::latest())
            .region(Region::new(storage_config.region().clone()))
            .credentials_provider(static_credentials);

        if let Some(endpoint_url) = storage_config.endpoint_url() {
            loader = loader.endpoint_url(endpoint_url);
        }

        let sdk_config = loader.load().await;

        S3RepositoryImpl {
            client: aws_sdk_s3::Client::new(&sdk_config),
        }
    }
}

#[doc = "Unusable keys abort the run; anything else fails only the current upload"]
pub fn storage_error(code: Option<&str>, detail: String) -> PipelineError {
    match code {
        Some(code) if CREDENTIAL_ERROR_CODES.contains(&code) => {
            PipelineError::Authentication(format!("S3 rejected the access keys ({}): {}", code, detail))
        }
        _ => PipelineError::Storage(detail),
    }
}

#[async_trait]
impl ObjectStoreRepository for S3RepositoryImpl {
    async fn put_object(
        &self,
        bucket: &str,
        key: &str,
        bytes: Vec<u8>,
        content_type: &str,
        cache_control: &str,
    ) -> anyhow::Result<()> {
        self.client
            .put_object()
            .bucket(bucket)
            .key(key)
            .body(ByteStream::from(bytes))
            .content_type(content_type)
            .cache_control(cache_control)
            .send()
            .await
            .map_err(|e| {
                let code: Option<&str> = e.as_service_error().and_then(|se| se.code());
                storage_error(
                    code,
                    format!(
                        "[S3RepositoryImpl->put_object] s3://{}/{} upload failed: {}",
                        bucket,
                        key,
                        DisplayErrorContext(&e)
                    ),
                )
            })?;

        info!("Uploaded s3://{}/{}", bucket, key);

        Ok(())
    }
}
