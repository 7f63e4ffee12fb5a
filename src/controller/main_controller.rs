use crate::common::*;

use crate::dto::github::traffic_views_response::*;
use crate::enums::{chart_theme::*, pipeline_error::*};
use crate::model::{
    chart::chart_image::*, github::repository::*, publish::published_artifact::*,
    report::run_summary::*, traffic::view_series::*,
};
use crate::traits::{
    repository_traits::chart_writer::*,
    service_traits::{chart_service::*, publish_service::*, traffic_service::*},
};

#[derive(Debug, new)]
pub struct MainController<T: TrafficService, C: ChartService, P: PublishService, W: ChartWriter> {
    traffic_service: T,
    chart_service: C,
    publish_service: P,
    chart_writer: Option<W>,
    themes: Vec<ChartTheme>,
}

impl<T: TrafficService, C: ChartService, P: PublishService, W: ChartWriter>
    MainController<T, C, P, W>
{
    #[doc = r#"
        Runs the whole pipeline once, one repository at a time.

        1. Resolves the authenticated login and lists its public repositories
        2. For every repository: fetch daily views, normalize them to the 14 days
           ending at `today`, then render, stage and publish each enabled theme
        3. A repository whose fetch or publish fails is recorded in the summary and
           skipped; configuration, authentication and render failures abort the run

        # Arguments
        * `today` - last day of the chart window (UTC)

        # Returns
        * `anyhow::Result<RunSummary>` - published artifacts and skipped repositories
    "#]
    pub async fn run(&self, today: NaiveDate) -> anyhow::Result<RunSummary> {
        let login: String = self
            .traffic_service
            .resolve_login()
            .await
            .context("[MainController->run] Failed to resolve the authenticated user")?;

        info!("Authenticated User: {}", login);

        let repositories: Vec<Repository> = self
            .traffic_service
            .list_public_repositories(&login)
            .await
            .with_context(|| {
                format!(
                    "[MainController->run] Failed to list repositories of '{}'",
                    login
                )
            })?;

        info!("{} public repositories found.", repositories.len());
        for repository in &repositories {
            info!("{}", repository.name());
        }

        let mut run_summary: RunSummary = RunSummary::new(login, repositories.len());

        for repository in &repositories {
            match self
                .process_repository(repository, today, &mut run_summary)
                .await
            {
                Ok(()) => (),
                Err(e) if is_fatal_error(&e) => {
                    return Err(e.context(format!(
                        "[MainController->run] Run aborted while processing '{}'",
                        repository.name()
                    )));
                }
                Err(e) => {
                    error!(
                        "[MainController->run] Skipping '{}': {:?}",
                        repository.name(),
                        e
                    );
                    run_summary.record_failure(repository.name(), format!("{:#}", e));
                }
            }
        }

        if run_summary.is_success() {
            info!(
                "Published {} chart(s) for {} repositories.",
                run_summary.published().len(),
                run_summary.public_repository_count()
            );
        } else {
            warn!(
                "Published {} chart(s); {} of {} repositories failed.",
                run_summary.published().len(),
                run_summary.failures().len(),
                run_summary.public_repository_count()
            );
        }

        Ok(run_summary)
    }

    #[doc = "Fetch, normalize, render, stage and publish every enabled theme of one repository"]
    async fn process_repository(
        &self,
        repository: &Repository,
        today: NaiveDate,
        run_summary: &mut RunSummary,
    ) -> anyhow::Result<()> {
        let records: Vec<DailyViewRecord> = self
            .traffic_service
            .get_daily_views(*repository.id())
            .await
            .with_context(|| {
                format!(
                    "[MainController->process_repository] Failed to fetch views of '{}'",
                    repository.name()
                )
            })?;

        let series: ViewSeries = ViewSeries::normalize(&records, today);
        info!(
            "{}: {} view(s) in the last 14 days",
            repository.name(),
            series.total_views()
        );

        for theme in &self.themes {
            let chart_image: ChartImage = self
                .chart_service
                .render_views_chart(repository.name(), &series, *theme)
                .await?;

            if let Some(chart_writer) = &self.chart_writer {
                chart_writer.write_chart(&chart_image).await?;
            }

            let artifact: PublishedArtifact = self.publish_service.publish(&chart_image).await?;

            info!(
                "{} - {} ({})",
                repository.name(),
                artifact.public_url(),
                theme
            );

            run_summary.record_published(artifact);
        }

        Ok(())
    }
}
