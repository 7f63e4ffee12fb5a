use crate::common::*;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Getters, new)]
#[getset(get = "pub")]
pub struct PublishedArtifact {
    bucket: String,
    key: String,
    public_url: String,
}
