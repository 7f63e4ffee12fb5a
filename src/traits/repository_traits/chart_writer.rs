use crate::common::*;

use crate::model::chart::chart_image::*;

#[async_trait]
pub trait ChartWriter: Send + Sync {
    #[doc = "Stages a rendered chart locally and returns where it was written"]
    async fn write_chart(&self, chart_image: &ChartImage) -> anyhow::Result<PathBuf>;
}
