use crate::common::*;

use crate::dto::github::traffic_views_response::*;
use crate::model::github::repository::*;

#[async_trait]
pub trait TrafficService: Send + Sync {
    #[doc = "Login of the account the token belongs to"]
    async fn resolve_login(&self) -> anyhow::Result<String>;

    #[doc = "Repositories owned by `login` that are not private, in listing order"]
    async fn list_public_repositories(&self, login: &str) -> anyhow::Result<Vec<Repository>>;

    #[doc = "Raw daily view buckets; empty when the repository had no traffic"]
    async fn get_daily_views(&self, repository_id: u64) -> anyhow::Result<Vec<DailyViewRecord>>;
}
