pub mod chart_service;
pub mod publish_service;
pub mod traffic_service;
