use crate::common::*;

use crate::dto::github::{traffic_views_response::*, user_response::*};
use crate::model::github::repository::*;
use crate::traits::{
    repository_traits::github_repository::*, service_traits::traffic_service::*,
};

#[derive(Debug, new)]
pub struct TrafficServiceImpl<G: GitHubRepository> {
    github_repository: G,
}

#[async_trait]
impl<G> TrafficService for TrafficServiceImpl<G>
where
    G: GitHubRepository,
{
    async fn resolve_login(&self) -> anyhow::Result<String> {
        let user: AuthenticatedUser = self
            .github_repository
            .get_current_user()
            .await
            .context("[TrafficServiceImpl->resolve_login] Failed to resolve the authenticated user")?;

        Ok(user.login)
    }

    async fn list_public_repositories(&self, login: &str) -> anyhow::Result<Vec<Repository>> {
        let repositories: Vec<Repository> = self
            .github_repository
            .get_repositories_for_user(login)
            .await
            .with_context(|| {
                format!(
                    "[TrafficServiceImpl->list_public_repositories] Failed to list repositories of '{}'",
                    login
                )
            })?;

        let public_repositories: Vec<Repository> = repositories
            .into_iter()
            .filter(|repository| !repository.is_private)
            .collect();

        Ok(public_repositories)
    }

    async fn get_daily_views(&self, repository_id: u64) -> anyhow::Result<Vec<DailyViewRecord>> {
        let response: TrafficViewsResponse = self
            .github_repository
            .get_daily_views(repository_id)
            .await
            .with_context(|| {
                format!(
                    "[TrafficServiceImpl->get_daily_views] Failed to fetch views of repository {}",
                    repository_id
                )
            })?;

        Ok(response.views)
    }
}
