use thiserror::Error;

#[doc = r#"
    Failure kinds of a chart run.

    Services return `anyhow::Result`; these variants travel inside the `anyhow::Error`
    and the controller recovers them with `downcast_ref` to decide whether the whole
    run aborts or only the current repository is skipped.
"#]
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PipelineError {
    #[error("[ConfigurationError] {0}")]
    Configuration(String),
    #[error("[AuthenticationError] {0}")]
    Authentication(String),
    #[error("[NotFoundError] {0}")]
    NotFound(String),
    #[error("[NetworkError] {0}")]
    Network(String),
    #[error("[StorageError] {0}")]
    Storage(String),
    #[error("[RenderError] {0}")]
    Render(String),
}

impl PipelineError {
    #[doc = "Errors that stop the whole run."]
    pub fn is_fatal(&self) -> bool {
        matches!(
            self,
            PipelineError::Configuration(_)
                | PipelineError::Authentication(_)
                | PipelineError::Render(_)
        )
    }
}

#[doc = "Returns the `PipelineError` carried by `err`, looking through any added context."]
pub fn pipeline_error_of(err: &anyhow::Error) -> Option<&PipelineError> {
    err.downcast_ref::<PipelineError>()
}

pub fn is_fatal_error(err: &anyhow::Error) -> bool {
    pipeline_error_of(err).is_some_and(PipelineError::is_fatal)
}
