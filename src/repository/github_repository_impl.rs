use crate::common::*;

use crate::dto::github::{traffic_views_response::*, user_response::*};
use crate::enums::pipeline_error::*;
use crate::model::{configs::github_config::*, github::repository::*};
use crate::traits::repository_traits::github_repository::*;

const GITHUB_API_VERSION: &str = "2022-11-28";
const RATE_LIMIT_REMAINING: &str = "x-ratelimit-remaining";

#[derive(Debug, Clone)]
pub struct GitHubRepositoryImpl {
    client: Client,
    api_base_url: String,
}

impl GitHubRepositoryImpl {
    #[doc = r#"
        Builds a client that sends the token, the API version and the configured
        `User-Agent` on every request.

        # Errors
        `PipelineError::Configuration` when the token cannot be used as a header value.
    "#]
    pub fn new(github_config: &GithubConfig, token: &str) -> anyhow::Result<Self> {
        let mut auth_value: HeaderValue = HeaderValue::from_str(&format!("Bearer {}", token))
            .map_err(|_| {
                PipelineError::Configuration(
                    "'GitHubToken' contains characters that are not valid in an HTTP header"
                        .to_string(),
                )
            })?;
        auth_value.set_sensitive(true);

        let mut headers: HeaderMap = HeaderMap::new();
        headers.insert(AUTHORIZATION, auth_value);
        headers.insert(
            ACCEPT,
            HeaderValue::from_static("application/vnd.github+json"),
        );
        headers.insert(
            "x-github-api-version",
            HeaderValue::from_static(GITHUB_API_VERSION),
        );

        let client: Client = Client::builder()
            .user_agent(github_config.user_agent())
            .default_headers(headers)
            .timeout(Duration::from_secs(*github_config.timeout_secs()))
            .build()
            .context("[GitHubRepositoryImpl->new] Failed to build the HTTP client")?;

        Ok(GitHubRepositoryImpl {
            client,
            api_base_url: github_config
                .api_base_url()
                .trim_end_matches('/')
                .to_string(),
        })
    }

    #[doc = "GET `{api_base_url}{path}` and decode the JSON body"]
    async fn get_json<T: DeserializeOwned>(&self, path: &str, resource: &str) -> anyhow::Result<T> {
        let url: String = format!("{}{}", self.api_base_url, path);

        let response: reqwest::Response = self.client.get(&url).send().await.map_err(|e| {
            PipelineError::Network(format!("GET {} failed for {}: {}", path, resource, e))
        })?;

        let status: StatusCode = response.status();

        if status.is_success() {
            let body: T = response.json::<T>().await.map_err(|e| {
                PipelineError::Network(format!(
                    "GET {} returned an unreadable body for {}: {}",
                    path, resource, e
                ))
            })?;
            return Ok(body);
        }

        let rate_limited: bool = is_rate_limited(response.headers());
        let error_body: String = response.text().await.unwrap_or_default();
        Err(status_error(status, rate_limited, resource, &error_body).into())
    }
}

#[doc = "True when GitHub reports the primary rate limit as used up"]
pub fn is_rate_limited(headers: &HeaderMap) -> bool {
    headers
        .get(RATE_LIMIT_REMAINING)
        .and_then(|value| value.to_str().ok())
        .is_some_and(|remaining| remaining.trim() == "0")
}

#[doc = r#"
    Maps a non-success GitHub status onto the failure kind the controller acts on.

    GitHub answers both rejected tokens and rate limits with 403. A 403 is only an
    authentication failure when neither the `x-ratelimit-remaining` header nor the
    message points at a rate limit.
"#]
pub fn status_error(
    status: StatusCode,
    rate_limited: bool,
    resource: &str,
    body: &str,
) -> PipelineError {
    let detail: String = format!("{} returned {}: {}", resource, status, body.trim());
    let rate_limit_message: bool = body.to_ascii_lowercase().contains("rate limit");

    match status {
        StatusCode::FORBIDDEN if rate_limited || rate_limit_message => {
            PipelineError::Network(detail)
        }
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => PipelineError::Authentication(detail),
        StatusCode::NOT_FOUND => PipelineError::NotFound(detail),
        _ => PipelineError::Network(detail),
    }
}

#[async_trait]
impl GitHubRepository for GitHubRepositoryImpl {
    async fn get_current_user(&self) -> anyhow::Result<AuthenticatedUser> {
        self.get_json::<AuthenticatedUser>("/user", "authenticated user")
            .await
    }

    async fn get_repositories_for_user(&self, login: &str) -> anyhow::Result<Vec<Repository>> {
        let path: String = format!("/users/{}/repos?type=owner&per_page=100", encode(login));
        self.get_json::<Vec<Repository>>(&path, &format!("repositories of '{}'", login))
            .await
    }

    async fn get_daily_views(&self, repository_id: u64) -> anyhow::Result<TrafficViewsResponse> {
        let path: String = format!("/repositories/{}/traffic/views?per=day", repository_id);
        self.get_json::<TrafficViewsResponse>(&path, &format!("repository {}", repository_id))
            .await
    }
}
