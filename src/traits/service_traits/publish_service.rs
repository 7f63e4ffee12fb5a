use crate::common::*;

use crate::model::{chart::chart_image::*, publish::published_artifact::*};

#[async_trait]
pub trait PublishService: Send + Sync {
    async fn publish(&self, chart_image: &ChartImage) -> anyhow::Result<PublishedArtifact>;
}
