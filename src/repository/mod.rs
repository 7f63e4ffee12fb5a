pub mod github_repository_impl;
pub mod local_chart_writer_impl;
pub mod s3_repository_impl;
