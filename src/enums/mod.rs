pub mod chart_kind;
pub mod chart_theme;
pub mod pipeline_error;
