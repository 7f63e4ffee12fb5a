use crate::common::*;

pub const GITHUB_TOKEN_KEY: &str = "GitHubToken";
pub const AWS_ACCESS_KEY_KEY: &str = "AWSAccessKey";
pub const AWS_SECRET_KEY_KEY: &str = "AWSSecretKey";

pub const DEFAULT_SERVER_CONFIG_PATH: &str = "./config/server_config.toml";

#[doc = r#"
    Settings file path taken from `SERVER_CONFIG_PATH`.

    `None` means the variable was not set and the default path is used; a missing
    default file is tolerated while a missing explicitly configured file is not.
"#]
pub static SERVER_CONFIG_PATH: once_lazy<Option<String>> =
    once_lazy::new(|| get_env_opt("SERVER_CONFIG_PATH"));

#[doc = "Reads an environment variable, treating an empty value as unset"]
pub fn get_env_opt(key: &str) -> Option<String> {
    env::var(key).ok().filter(|val| !val.trim().is_empty())
}

#[doc = "Resolved settings path and whether the operator asked for it explicitly"]
pub fn server_config_path() -> (PathBuf, bool) {
    match SERVER_CONFIG_PATH.as_deref() {
        Some(path) => (PathBuf::from(path), true),
        None => (PathBuf::from(DEFAULT_SERVER_CONFIG_PATH), false),
    }
}
