use crate::common::*;

use crate::enums::chart_theme::*;

pub type Rgb = (u8, u8, u8);

#[doc = r#"
    Everything that differs between the light and dark chart variants.
    The renderer takes one of these instead of branching on the theme.
"#]
#[derive(Debug, Clone, PartialEq, Eq, Getters, new)]
#[getset(get = "pub")]
pub struct ThemeConfig {
    theme: ChartTheme,
    background_color: Rgb,
    text_color: Rgb,
    axis_color: Rgb,
    watermark_path: PathBuf,
}

impl ThemeConfig {
    pub fn light(watermark_path: PathBuf) -> Self {
        ThemeConfig::new(
            ChartTheme::Light,
            (255, 255, 255),
            (0, 0, 0),
            (0, 0, 0),
            watermark_path,
        )
    }

    pub fn dark(watermark_path: PathBuf) -> Self {
        ThemeConfig::new(
            ChartTheme::Dark,
            (13, 17, 23),
            (255, 255, 255),
            (255, 255, 255),
            watermark_path,
        )
    }
}
