use crate::common::*;

use crate::enums::chart_theme::*;

#[derive(Debug, Clone, Deserialize, Serialize, Getters)]
#[getset(get = "pub")]
#[serde(default)]
pub struct StorageConfig {
    pub bucket: String,
    pub region: String,
    pub owner_scope: String,
    /* S3-compatible endpoint override, AWS when absent */
    pub endpoint_url: Option<String>,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            bucket: "repostatscharts".to_string(),
            region: "us-east-2".to_string(),
            owner_scope: "MatthewsRepos".to_string(),
            endpoint_url: None,
        }
    }
}

impl StorageConfig {
    #[doc = "`{owner_scope}/{repository_name}_ViewsChart[_Dark].png`"]
    pub fn object_key(&self, repository_name: &str, theme: ChartTheme) -> String {
        format!("{}/{}", self.owner_scope, theme.file_name(repository_name))
    }

    #[doc = "`https://{bucket}.s3.{region}.amazonaws.com/{key}`"]
    pub fn public_url(&self, key: &str) -> String {
        format!(
            "https://{}.s3.{}.amazonaws.com/{}",
            self.bucket, self.region, key
        )
    }
}
