pub mod chart_service_impl;
pub mod publish_service_impl;
pub mod traffic_service_impl;
