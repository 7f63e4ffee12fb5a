pub mod published_artifact;
