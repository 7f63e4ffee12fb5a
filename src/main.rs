/*
Description : Renders the 14-day GitHub traffic views of every public repository
              as light/dark PNG charts and publishes them to S3.
*/

mod common;
mod external_deps;
mod prelude;
use common::*;

mod env_configuration;

mod enums;

mod dto;

mod model;
use model::{configs::credentials::*, configs::total_config::*, report::run_summary::*};

mod traits;

mod repository;
use repository::{github_repository_impl::*, local_chart_writer_impl::*, s3_repository_impl::*};

mod service;
use service::{chart_service_impl::*, publish_service_impl::*, traffic_service_impl::*};

mod controller;
use controller::main_controller::*;

mod utils_modules;
use utils_modules::{logger_utils::*, time_utils::*};

#[cfg(test)]
mod test_support;

#[tokio::main]
async fn main() {
    /* global logger */
    dotenv().ok();
    let _logger: LoggerHandle = set_global_logger().unwrap_or_else(|e| {
        eprintln!("[main] Failed to initialize the logger: {:?}", e);
        std::process::exit(1)
    });

    info!("Repository view chart program start!");

    match run().await {
        Ok(run_summary) if run_summary.is_success() => (),
        Ok(run_summary) => {
            for failure in run_summary.failures() {
                error!(
                    "[main] '{}' was not published: {}",
                    failure.repository_name(),
                    failure.reason()
                );
            }
            std::process::exit(1)
        }
        Err(e) => {
            error!("[main] {:?}", e);
            std::process::exit(1)
        }
    }
}

#[doc = "Loads settings and secrets, wires the dependencies and runs the pipeline once"]
async fn run() -> anyhow::Result<RunSummary> {
    let total_config: TotalConfig = TotalConfig::load()?;
    let credentials: Credentials = Credentials::load(total_config.credentials().as_ref())?;

    /* watermarks are checked before any network call */
    let chart_service: ChartServiceImpl = ChartServiceImpl::new(total_config.chart())?;

    let github_repository: GitHubRepositoryImpl =
        GitHubRepositoryImpl::new(total_config.github(), credentials.github_token())?;
    let s3_repository: S3RepositoryImpl =
        S3RepositoryImpl::new(total_config.storage(), &credentials).await;

    let chart_writer: Option<LocalChartWriterImpl> = total_config
        .chart()
        .save_local()
        .then(|| LocalChartWriterImpl::new(total_config.chart().output_dir().clone()));

    /* dependency injection */
    let traffic_service: TrafficServiceImpl<GitHubRepositoryImpl> =
        TrafficServiceImpl::new(github_repository);
    let publish_service: PublishServiceImpl<S3RepositoryImpl> =
        PublishServiceImpl::new(s3_repository, total_config.storage().clone());

    let main_controller: MainController<
        TrafficServiceImpl<GitHubRepositoryImpl>,
        ChartServiceImpl,
        PublishServiceImpl<S3RepositoryImpl>,
        LocalChartWriterImpl,
    > = MainController::new(
        traffic_service,
        chart_service,
        publish_service,
        chart_writer,
        total_config.chart().enabled_themes(),
    );

    main_controller.run(current_utc_date()).await
}
