use crate::common::*;

use crate::enums::pipeline_error::*;

#[derive(Debug, Clone, Deserialize, Serialize, Getters)]
#[getset(get = "pub")]
#[serde(default)]
pub struct GithubConfig {
    pub api_base_url: String,
    pub user_agent: String,
    pub timeout_secs: u64,
}

impl Default for GithubConfig {
    fn default() -> Self {
        Self {
            api_base_url: "https://api.github.com".to_string(),
            user_agent: "repo-view-charts".to_string(),
            timeout_secs: 30,
        }
    }
}

impl GithubConfig {
    pub fn validate(&self) -> Result<(), PipelineError> {
        if self.timeout_secs == 0 {
            return Err(PipelineError::Configuration(
                "[github] timeout_secs must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}
