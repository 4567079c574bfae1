use async_trait::async_trait;
use chrono::{Local, NaiveDateTime};
use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tokio::fs::OpenOptions;
use tokio::io::AsyncWriteExt;
use tracing::info;

use crate::error::{Error, Result};
use crate::models::FilmographyReport;
use crate::storage::Storage;

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.6f";

/// Writes each report to a new `<actor>-<timestamp>.json` file.
pub struct JsonStorage {
    dir: PathBuf,
}

impl JsonStorage {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn file_name(actor: &str, timestamp: NaiveDateTime) -> String {
        format!("{}-{}.json", actor, timestamp.format(TIMESTAMP_FORMAT))
    }

    /// Like [`Storage::save`] with a fixed timestamp. An existing file of the
    /// same name is never overwritten.
    pub async fn save_at(
        &self,
        report: &FilmographyReport,
        timestamp: NaiveDateTime,
    ) -> Result<PathBuf> {
        let path = self.dir.join(Self::file_name(&report.actor, timestamp));

        let mut file = OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(&path)
            .await
            .map_err(|e| match e.kind() {
                ErrorKind::AlreadyExists => Error::FileAlreadyExists(path.clone()),
                _ => Error::Io(e),
            })?;

        file.write_all(&to_pretty_json(report)?).await?;
        file.flush().await?;

        info!("Saved {} movies to {}", report.movies.len(), path.display());
        Ok(path)
    }
}

#[async_trait]
impl Storage for JsonStorage {
    async fn save(&self, report: &FilmographyReport) -> Result<PathBuf> {
        self.save_at(report, Local::now().naive_local()).await
    }
}

fn to_pretty_json<T: Serialize>(value: &T) -> Result<Vec<u8>> {
    let mut buf = Vec::new();
    let mut serializer =
        serde_json::Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(b"    "));
    value.serialize(&mut serializer)?;
    Ok(buf)
}
