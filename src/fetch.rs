use anyhow::{Context, Result};
use reqwest::blocking::Client;
use serde::Deserialize;

use crate::config::Settings;

/// One page of the datasets-server `/rows` response. A body without a
/// `rows` array deserializes to an empty page rather than failing.
#[derive(Debug, Default, Deserialize)]
pub struct RowsPage {
    #[serde(default)]
    pub rows: Vec<RowWrapper>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct RowWrapper {
    pub row: RawQuestion,
}

/// Upstream row as it arrives: every field optional, shapes loose.
/// Transient — discarded once extraction has produced a canonical record.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct RawQuestion {
    pub problem_description: Option<PromptText>,
    pub difficulty: Option<String>,
    pub tags: Option<Tags>,
    pub input_output: Option<Vec<RawIoPair>>,
    pub starter_code: Option<String>,
}

/// The description arrives either as one string or a list of fragments.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum PromptText {
    One(String),
    Many(Vec<String>),
}

/// Tags arrive as a list, a bare string, or some other scalar.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum Tags {
    List(Vec<String>),
    Scalar(String),
    Other(serde_json::Value),
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct RawIoPair {
    pub input: Option<String>,
    pub output: Option<String>,
}

/// Fetch one page of dataset rows. Any network or non-2xx failure is fatal
/// to the run; there is no retry.
pub fn fetch_rows_page(
    client: &Client,
    settings: &Settings,
    offset: u32,
    length: u32,
) -> Result<RowsPage> {
    let response = client
        .get(&settings.api_base_url)
        .query(&[
            ("dataset", settings.dataset.as_str()),
            ("config", settings.config.as_str()),
            ("split", settings.split.as_str()),
        ])
        .query(&[("offset", offset), ("length", length)])
        .send()
        .with_context(|| format!("API request to {} failed", settings.api_base_url))?
        .error_for_status()
        .context("API returned an error status")?;

    response.json().context("Failed to decode rows page")
}
