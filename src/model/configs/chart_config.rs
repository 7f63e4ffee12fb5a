use crate::common::*;

use crate::enums::{chart_kind::*, chart_theme::*, pipeline_error::*};
use crate::model::chart::theme_config::*;

#[derive(Debug, Clone, Deserialize, Serialize, Getters)]
#[getset(get = "pub")]
#[serde(default)]
pub struct ChartConfig {
    pub themes: Vec<ChartTheme>,
    pub kind: ChartKind,
    pub media_dir: PathBuf,
    pub light_watermark: String,
    pub dark_watermark: String,
    pub save_local: bool,
    pub output_dir: PathBuf,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            themes: vec![ChartTheme::Light, ChartTheme::Dark],
            kind: ChartKind::Bar,
            media_dir: PathBuf::from("Media"),
            light_watermark: "auburn-logo-color.png".to_string(),
            dark_watermark: "auburn-logo-white.png".to_string(),
            save_local: true,
            output_dir: PathBuf::from("Charts"),
        }
    }
}

impl ChartConfig {
    pub fn theme_config(&self, theme: ChartTheme) -> ThemeConfig {
        match theme {
            ChartTheme::Light => ThemeConfig::light(self.media_dir.join(&self.light_watermark)),
            ChartTheme::Dark => ThemeConfig::dark(self.media_dir.join(&self.dark_watermark)),
        }
    }

    #[doc = "Configured themes in order, duplicates removed"]
    pub fn enabled_themes(&self) -> Vec<ChartTheme> {
        let mut themes: Vec<ChartTheme> = Vec::with_capacity(self.themes.len());
        for theme in &self.themes {
            if !themes.contains(theme) {
                themes.push(*theme);
            }
        }
        themes
    }

    pub fn validate(&self) -> Result<(), PipelineError> {
        if self.themes.is_empty() {
            return Err(PipelineError::Configuration(
                "[chart] themes must name at least one of \"light\", \"dark\"".to_string(),
            ));
        }
        Ok(())
    }
}
