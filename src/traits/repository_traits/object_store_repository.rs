use crate::common::*;

#[async_trait]
pub trait ObjectStoreRepository: Send + Sync {
    #[doc = "Stores `bytes` under `bucket`/`key`, replacing any existing object"]
    async fn put_object(
        &self,
        bucket: &str,
        key: &str,
        bytes: Vec<u8>,
        content_type: &str,
        cache_control: &str,
    ) -> anyhow::Result<()>;
}
