pub use chrono::{DateTime, NaiveDate, Utc};
pub use flexi_logger::{
    Age, Cleanup, Criterion, DeferredNow, Duplicate, FileSpec, Logger, LoggerHandle, Naming,
    Record,
};
pub use image::{ImageFormat, RgbImage, RgbaImage};
pub use once_cell::sync::Lazy as once_lazy;
pub use reqwest::{
    Client, StatusCode,
    header::{ACCEPT, AUTHORIZATION, HeaderMap, HeaderValue},
};
pub use urlencoding::encode;
