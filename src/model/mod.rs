pub mod chart;
pub mod configs;
pub mod github;
pub mod publish;
pub mod report;
pub mod traffic;
