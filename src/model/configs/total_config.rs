use crate::common::*;

use crate::model::configs::{
    chart_config::*, credentials::*, github_config::*, storage_config::*,
};

use crate::enums::pipeline_error::*;

use crate::utils_modules::io_utils::*;

use crate::env_configuration::env_config::*;

#[derive(Debug, Clone, Default, Deserialize, Getters)]
#[getset(get = "pub")]
#[serde(default)]
pub struct TotalConfig {
    pub github: GithubConfig,
    pub storage: StorageConfig,
    pub chart: ChartConfig,
    pub credentials: Option<CredentialsConfig>,
}

impl TotalConfig {
    #[doc = r#"
        Loads the settings file named by `SERVER_CONFIG_PATH`, or the default path.

        Every table is optional and falls back to built-in defaults, so a run with
        only the three secrets in the environment needs no file at all.
    "#]
    pub fn load() -> anyhow::Result<Self> {
        let (config_path, explicit) = server_config_path();
        Self::load_from(&config_path, explicit)
    }

    #[doc = r#"
        # Arguments
        * `config_path` - TOML settings file
        * `required`    - when true a missing file is an error, otherwise defaults are used

        # Errors
        `PipelineError::Configuration` for a missing required file, an unreadable file,
        invalid TOML, a zero GitHub timeout, or invalid chart settings.
    "#]
    pub fn load_from(config_path: &Path, required: bool) -> anyhow::Result<Self> {
        let total_config: TotalConfig = if config_path.exists() {
            read_toml_from_file::<TotalConfig>(config_path).map_err(|e| {
                PipelineError::Configuration(format!(
                    "Failed to load settings from '{}': {:#}",
                    config_path.display(),
                    e
                ))
            })?
        } else if required {
            return Err(PipelineError::Configuration(format!(
                "Settings file '{}' does not exist",
                config_path.display()
            ))
            .into());
        } else {
            info!(
                "[TotalConfig->load_from] '{}' not found, using built-in defaults",
                config_path.display()
            );
            TotalConfig::default()
        };

        total_config.github.validate()?;
        total_config.chart.validate()?;

        Ok(total_config)
    }
}
