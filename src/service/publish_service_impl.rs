use crate::common::*;

use crate::model::{
    chart::chart_image::*, configs::storage_config::*, publish::published_artifact::*,
};
use crate::traits::{
    repository_traits::object_store_repository::*, service_traits::publish_service::*,
};

const PNG_CONTENT_TYPE: &str = "image/png";
const NO_CACHE: &str = "no-cache";

#[derive(Debug, new)]
pub struct PublishServiceImpl<O: ObjectStoreRepository> {
    object_store: O,
    storage_config: StorageConfig,
}

#[async_trait]
impl<O> PublishService for PublishServiceImpl<O>
where
    O: ObjectStoreRepository,
{
    #[doc = r#"
        Uploads a chart under its deterministic key with `Cache-Control: no-cache`
        and returns its public URL.
    "#]
    async fn publish(&self, chart_image: &ChartImage) -> anyhow::Result<PublishedArtifact> {
        let bucket: &str = self.storage_config.bucket();
        let key: String = self
            .storage_config
            .object_key(chart_image.repository_name(), *chart_image.theme());

        self.object_store
            .put_object(
                bucket,
                &key,
                chart_image.bytes().clone(),
                PNG_CONTENT_TYPE,
                NO_CACHE,
            )
            .await
            .with_context(|| {
                format!(
                    "[PublishServiceImpl->publish] Failed to publish s3://{}/{}",
                    bucket, key
                )
            })?;

        let public_url: String = self.storage_config.public_url(&key);

        Ok(PublishedArtifact::new(bucket.to_string(), key, public_url))
    }
}
