use crate::common::*;

use crate::enums::pipeline_error::*;
use crate::env_configuration::env_config::*;

#[doc = "Optional `[credentials]` table of the settings file, consulted when the environment lacks a secret"]
#[derive(Clone, Default, Deserialize)]
#[serde(default)]
pub struct CredentialsConfig {
    pub github_token: Option<String>,
    pub aws_access_key: Option<String>,
    pub aws_secret_key: Option<String>,
}

impl fmt::Debug for CredentialsConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CredentialsConfig")
            .field("github_token", &self.github_token.as_ref().map(|_| "***"))
            .field("aws_access_key", &self.aws_access_key.as_ref().map(|_| "***"))
            .field("aws_secret_key", &self.aws_secret_key.as_ref().map(|_| "***"))
            .finish()
    }
}

#[derive(Clone, PartialEq, Eq, Getters)]
#[getset(get = "pub")]
pub struct Credentials {
    github_token: String,
    aws_access_key: String,
    aws_secret_key: String,
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("github_token", &"***")
            .field("aws_access_key", &"***")
            .field("aws_secret_key", &"***")
            .finish()
    }
}

impl Credentials {
    #[doc = r#"
        Loads the three secrets from the environment (`GitHubToken`, `AWSAccessKey`,
        `AWSSecretKey`), falling back to the settings file's `[credentials]` table.

        # Errors
        `PipelineError::Configuration` naming the first secret that is missing.
    "#]
    pub fn load(fallback: Option<&CredentialsConfig>) -> Result<Self, PipelineError> {
        Self::resolve(get_env_opt, fallback)
    }

    pub fn resolve<L>(lookup: L, fallback: Option<&CredentialsConfig>) -> Result<Self, PipelineError>
    where
        L: Fn(&str) -> Option<String>,
    {
        let pick = |key: &str, from_file: Option<&String>| -> Result<String, PipelineError> {
            lookup(key)
                .or_else(|| from_file.filter(|val| !val.trim().is_empty()).cloned())
                .ok_or_else(|| PipelineError::Configuration(format!("'{}' must be set", key)))
        };

        Ok(Self {
            github_token: pick(
                GITHUB_TOKEN_KEY,
                fallback.and_then(|c| c.github_token.as_ref()),
            )?,
            aws_access_key: pick(
                AWS_ACCESS_KEY_KEY,
                fallback.and_then(|c| c.aws_access_key.as_ref()),
            )?,
            aws_secret_key: pick(
                AWS_SECRET_KEY_KEY,
                fallback.and_then(|c| c.aws_secret_key.as_ref()),
            )?,
        })
    }
}
