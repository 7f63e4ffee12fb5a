use crate::common::*;

use crate::model::publish::published_artifact::*;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Getters, new)]
#[getset(get = "pub")]
pub struct RepositoryFailure {
    repository_name: String,
    reason: String,
}

#[doc = "Outcome of one run: what got published and which repositories were skipped"]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Getters)]
#[getset(get = "pub")]
pub struct RunSummary {
    login: String,
    public_repository_count: usize,
    published: Vec<PublishedArtifact>,
    failures: Vec<RepositoryFailure>,
}

impl RunSummary {
    pub fn new(login: String, public_repository_count: usize) -> Self {
        Self {
            login,
            public_repository_count,
            published: Vec::new(),
            failures: Vec::new(),
        }
    }

    pub fn record_published(&mut self, artifact: PublishedArtifact) {
        self.published.push(artifact);
    }

    pub fn record_failure(&mut self, repository_name: &str, reason: String) {
        self.failures
            .push(RepositoryFailure::new(repository_name.to_string(), reason));
    }

    pub fn is_success(&self) -> bool {
        self.failures.is_empty()
    }
}
