use crate::common::*;

use crate::model::chart::chart_image::*;
use crate::traits::repository_traits::chart_writer::*;

#[doc = "Writes charts to `{output_dir}/{name}_ViewsChart[_Dark].png`, overwriting older runs"]
#[derive(Debug, Clone, new)]
pub struct LocalChartWriterImpl {
    output_dir: PathBuf,
}

#[async_trait]
impl ChartWriter for LocalChartWriterImpl {
    async fn write_chart(&self, chart_image: &ChartImage) -> anyhow::Result<PathBuf> {
        tokio::fs::create_dir_all(&self.output_dir)
            .await
            .with_context(|| {
                format!(
                    "[LocalChartWriterImpl->write_chart] Failed to create '{}'",
                    self.output_dir.display()
                )
            })?;

        let chart_path: PathBuf = self.output_dir.join(chart_image.file_name());

        tokio::fs::write(&chart_path, chart_image.bytes())
            .await
            .with_context(|| {
                format!(
                    "[LocalChartWriterImpl->write_chart] Failed to write '{}'",
                    chart_path.display()
                )
            })?;

        Ok(chart_path)
    }
}
