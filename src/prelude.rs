pub use std::{
    collections::HashMap,
    env, fmt,
    io::{Cursor, Write},
    path::{Path, PathBuf},
    sync::Arc,
};

pub use tokio::time::Duration;

pub use anyhow::{Context, anyhow};
pub use async_trait::async_trait;
pub use derive_new::new;
pub use dotenv::dotenv;
pub use getset::Getters;
pub use log::{error, info, warn};
pub use serde::{Deserialize, Serialize, de::DeserializeOwned};
