pub mod chart_image;
pub mod theme_config;
