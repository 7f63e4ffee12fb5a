//! In-memory stand-ins for the GitHub, S3 and filesystem seams.

use std::sync::Mutex;

use crate::common::*;

use crate::dto::github::{traffic_views_response::*, user_response::*};
use crate::enums::{chart_theme::*, pipeline_error::*};
use crate::model::{
    chart::chart_image::*, github::repository::*, traffic::view_series::*,
};
use crate::traits::{
    repository_traits::{chart_writer::*, github_repository::*, object_store_repository::*},
    service_traits::chart_service::*,
};

#[derive(Debug, Clone)]
pub enum ViewsOutcome {
    Views(Vec<DailyViewRecord>),
    NotFound,
    Down,
}

#[derive(Debug, Clone, Default)]
pub struct FakeGitHubRepository {
    login: String,
    token_rejected: bool,
    repositories: Vec<Repository>,
    views: HashMap<u64, ViewsOutcome>,
    traffic_calls: Arc<Mutex<HashMap<u64, u32>>>,
}

impl FakeGitHubRepository {
    pub fn new(login: &str) -> Self {
        Self {
            login: login.to_string(),
            ..Default::default()
        }
    }

    pub fn with_repository(mut self, repository: Repository) -> Self {
        self.repositories.push(repository);
        self
    }

    pub fn with_views(mut self, repository_id: u64, outcome: ViewsOutcome) -> Self {
        self.views.insert(repository_id, outcome);
        self
    }

    pub fn rejecting_token(mut self) -> Self {
        self.token_rejected = true;
        self
    }

    pub fn traffic_calls(&self, repository_id: u64) -> u32 {
        self.traffic_calls
            .lock()
            .unwrap()
            .get(&repository_id)
            .copied()
            .unwrap_or(0)
    }

    fn check_token(&self) -> anyhow::Result<()> {
        if self.token_rejected {
            return Err(PipelineError::Authentication("401 Bad credentials".into()).into());
        }
        Ok(())
    }
}

fn traffic_response(views: Vec<DailyViewRecord>) -> TrafficViewsResponse {
    TrafficViewsResponse {
        count: views.iter().map(|view| view.count).sum(),
        uniques: 0,
        views,
    }
}

#[async_trait]
impl GitHubRepository for FakeGitHubRepository {
    async fn get_current_user(&self) -> anyhow::Result<AuthenticatedUser> {
        self.check_token()?;
        Ok(AuthenticatedUser::new(self.login.clone()))
    }

    async fn get_repositories_for_user(&self, _login: &str) -> anyhow::Result<Vec<Repository>> {
        self.check_token()?;
        Ok(self.repositories.clone())
    }

    async fn get_daily_views(&self, repository_id: u64) -> anyhow::Result<TrafficViewsResponse> {
        self.check_token()?;

        *self
            .traffic_calls
            .lock()
            .unwrap()
            .entry(repository_id)
            .or_insert(0) += 1;

        match self.views.get(&repository_id).cloned() {
            None => Ok(TrafficViewsResponse::default()),
            Some(ViewsOutcome::Views(views)) => Ok(traffic_response(views)),
            Some(ViewsOutcome::NotFound) => {
                Err(PipelineError::NotFound(format!("repository {} 404", repository_id)).into())
            }
            Some(ViewsOutcome::Down) => {
                Err(PipelineError::Network("502 Bad Gateway".into()).into())
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredObject {
    pub bucket: String,
    pub key: String,
    pub content_type: String,
    pub cache_control: String,
    pub bytes: Vec<u8>,
}

#[derive(Debug, Clone, Default)]
pub struct FakeObjectStore {
    stored: Arc<Mutex<Vec<StoredObject>>>,
    failing_keys: Vec<String>,
    credentials_rejected: bool,
}

impl FakeObjectStore {
    pub fn failing(mut self, key: &str) -> Self {
        self.failing_keys.push(key.to_string());
        self
    }

    pub fn rejecting_credentials(mut self) -> Self {
        self.credentials_rejected = true;
        self
    }

    pub fn stored(&self) -> Vec<StoredObject> {
        self.stored.lock().unwrap().clone()
    }

    pub fn stored_keys(&self) -> Vec<String> {
        self.stored().into_iter().map(|object| object.key).collect()
    }
}

#[async_trait]
impl ObjectStoreRepository for FakeObjectStore {
    async fn put_object(
        &self,
        bucket: &str,
        key: &str,
        bytes: Vec<u8>,
        content_type: &str,
        cache_control: &str,
    ) -> anyhow::Result<()> {
        if self.credentials_rejected {
            return Err(PipelineError::Authentication("InvalidAccessKeyId".into()).into());
        }

        if self.failing_keys.iter().any(|failing| failing == key) {
            return Err(PipelineError::Storage(format!("{} timed out", key)).into());
        }

        self.stored.lock().unwrap().push(StoredObject {
            bucket: bucket.to_string(),
            key: key.to_string(),
            content_type: content_type.to_string(),
            cache_control: cache_control.to_string(),
            bytes,
        });

        Ok(())
    }
}

#[derive(Debug, Clone, Default)]
pub struct FakeChartService {
    render_broken: bool,
    rendered: Arc<Mutex<Vec<(String, ChartTheme, Vec<u64>)>>>,
}

impl FakeChartService {
    pub fn broken() -> Self {
        Self {
            render_broken: true,
            ..Default::default()
        }
    }

    pub fn rendered(&self) -> Vec<(String, ChartTheme, Vec<u64>)> {
        self.rendered.lock().unwrap().clone()
    }
}

#[async_trait]
impl ChartService for FakeChartService {
    async fn render_views_chart(
        &self,
        repository_name: &str,
        series: &ViewSeries,
        theme: ChartTheme,
    ) -> anyhow::Result<ChartImage> {
        if self.render_broken {
            return Err(PipelineError::Render("watermark missing".into()).into());
        }

        self.rendered
            .lock()
            .unwrap()
            .push((repository_name.to_string(), theme, series.counts()));

        Ok(ChartImage::new(
            repository_name.to_string(),
            theme,
            format!("PNG:{}:{}", repository_name, theme).into_bytes(),
        ))
    }
}

#[derive(Debug, Clone, Default)]
pub struct FakeChartWriter {
    written: Arc<Mutex<Vec<String>>>,
}

impl FakeChartWriter {
    pub fn written(&self) -> Vec<String> {
        self.written.lock().unwrap().clone()
    }
}

#[async_trait]
impl ChartWriter for FakeChartWriter {
    async fn write_chart(&self, chart_image: &ChartImage) -> anyhow::Result<PathBuf> {
        let file_name: String = chart_image.file_name();
        self.written.lock().unwrap().push(file_name.clone());
        Ok(PathBuf::from("Charts").join(file_name))
    }
}
