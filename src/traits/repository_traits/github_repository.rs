use crate::common::*;

use crate::dto::github::{traffic_views_response::*, user_response::*};
use crate::model::github::repository::*;

#[doc = r#"
    Raw access to the GitHub REST API.

    Implementations report failures as `PipelineError` values inside the
    `anyhow::Error`: rejected credentials as `Authentication`, a missing repository
    as `NotFound`, everything else as `Network`.
"#]
#[async_trait]
pub trait GitHubRepository: Send + Sync {
    async fn get_current_user(&self) -> anyhow::Result<AuthenticatedUser>;
    async fn get_repositories_for_user(&self, login: &str) -> anyhow::Result<Vec<Repository>>;
    async fn get_daily_views(&self, repository_id: u64) -> anyhow::Result<TrafficViewsResponse>;
}
