pub mod traffic_views_response;
pub mod user_response;
