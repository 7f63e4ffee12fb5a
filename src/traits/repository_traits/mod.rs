pub mod chart_writer;
pub mod github_repository;
pub mod object_store_repository;
