use crate::common::*;

use crate::enums::chart_theme::*;
use crate::model::{chart::chart_image::*, traffic::view_series::*};

#[async_trait]
pub trait ChartService: Send + Sync {
    #[doc = "
        Render the views chart of one repository as PNG bytes
        # Arguments
        * `repository_name` - shown in the title and used for the file name
        * `series` - the normalized 14-day view counts
        * `theme` - light or dark variant
    "]
    async fn render_views_chart(
        &self,
        repository_name: &str,
        series: &ViewSeries,
        theme: ChartTheme,
    ) -> anyhow::Result<ChartImage>;
}
