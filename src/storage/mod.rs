use async_trait::async_trait;
use std::path::PathBuf;

use crate::error::Result;
use crate::models::FilmographyReport;

mod json;
pub use json::JsonStorage;

#[async_trait]
pub trait Storage: Send + Sync {
    /// Persists `report` and returns where it went.
    async fn save(&self, report: &FilmographyReport) -> Result<PathBuf>;
}
