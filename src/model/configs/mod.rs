pub mod chart_config;
pub mod credentials;
pub mod github_config;
pub mod storage_config;
pub mod total_config;
