use config::{Environment, File};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::Result;

pub const DEFAULT_BASE_URL: &str = "https://www.imdb.com";
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/108.0.0.0 Safari/537.36";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub base_url: String,
    pub user_agent: String,
    pub timeout_seconds: u64,
    pub output_dir: PathBuf,
    pub log_json: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            timeout_seconds: 25,
            output_dir: PathBuf::from("."),
            log_json: false,
        }
    }
}

impl Config {
    /// Layers built-in defaults, an optional config file and `ACTOR_FILMS_*`
    /// environment variables, in that order.
    ///
    /// Without an explicit path, `actor_films.{toml,json,yaml}` in the working
    /// directory is picked up if present.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let defaults = Config::default();

        let mut builder = config::Config::builder()
            .set_default("base_url", defaults.base_url)?
            .set_default("user_agent", defaults.user_agent)?
            .set_default("timeout_seconds", defaults.timeout_seconds as i64)?
            .set_default("output_dir", defaults.output_dir.to_string_lossy().into_owned())?
            .set_default("log_json", defaults.log_json)?;

        builder = match path {
            Some(path) => builder.add_source(File::from(path).required(true)),
            None => builder.add_source(File::with_name("actor_films").required(false)),
        };

        let settings = builder
            .add_source(Environment::with_prefix("ACTOR_FILMS"))
            .build()?;

        Ok(settings.try_deserialize()?)
    }
}
