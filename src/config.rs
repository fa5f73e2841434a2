use anyhow::{Context, Result};
use serde::Deserialize;

/// Run configuration: defaults below, overridable via `INGEST_*` env vars
/// (e.g. `INGEST_DB_PATH`, `INGEST_DATASET`).
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub api_base_url: String,
    pub dataset: String,
    pub config: String,
    pub split: String,
    pub db_path: String,
}

impl Settings {
    pub fn load() -> Result<Self> {
        config::Config::builder()
            .set_default("api_base_url", "https://datasets-server.huggingface.co/rows")?
            .set_default("dataset", "newfacade/LeetCodeDataset")?
            .set_default("config", "default")?
            .set_default("split", "train")?
            .set_default("db_path", "data/questions.sqlite")?
            .add_source(config::Environment::with_prefix("INGEST"))
            .build()
            .context("Failed to build configuration")?
            .try_deserialize()
            .context("Invalid configuration")
    }
}
