pub mod prompt;
pub mod starter;

use itertools::Itertools;
use thiserror::Error;
use tracing::{debug, warn};

use crate::fetch::{RawIoPair, RawQuestion, RowsPage, Tags};

/// Validated unit of work. Only exists once a function name was inferred;
/// every other field may be degenerate (empty prompt, empty topics) but is
/// always a typed value.
#[derive(Debug, Clone)]
pub struct CanonicalQuestion {
    pub prompt: String,
    pub difficulty: String,
    pub topics: String,
    pub function_name: String,
    pub starter_code: Option<String>,
    pub input_output_pairs: Vec<(String, String)>,
}

/// Why a raw row produced no canonical question.
#[derive(Debug, Error, PartialEq)]
pub enum RowError {
    #[error("missing required field `{0}`")]
    MissingField(&'static str),
    #[error("no function name inferable from starter code")]
    NoFunctionName,
}

/// Map one page of raw rows to canonical questions, preserving row order.
///
/// Unusable rows are skipped, never fatal: a missing required field is
/// logged and dropped, an uninferable function name drops the row quietly.
pub fn extract_questions(page: &RowsPage) -> Vec<CanonicalQuestion> {
    let mut questions = Vec::with_capacity(page.rows.len());
    for (idx, wrapper) in page.rows.iter().enumerate() {
        match extract_row(&wrapper.row) {
            Ok(question) => questions.push(question),
            Err(RowError::NoFunctionName) => {
                debug!(row = idx, "skipping row without inferable function name");
            }
            Err(err) => {
                warn!(row = idx, %err, "skipping malformed row");
            }
        }
    }
    questions
}

fn extract_row(raw: &RawQuestion) -> Result<CanonicalQuestion, RowError> {
    let description = raw
        .problem_description
        .as_ref()
        .ok_or(RowError::MissingField("problem_description"))?;

    let difficulty = raw
        .difficulty
        .as_deref()
        .ok_or(RowError::MissingField("difficulty"))?
        .to_uppercase();

    let entries = raw
        .input_output
        .as_ref()
        .ok_or(RowError::MissingField("input_output"))?;
    let mut input_output_pairs = Vec::with_capacity(entries.len());
    for entry in entries {
        input_output_pairs.push(io_pair(entry)?);
    }

    let function_name = starter::function_name(raw.starter_code.as_deref())
        .ok_or(RowError::NoFunctionName)?;

    Ok(CanonicalQuestion {
        prompt: prompt::clean_prompt(description),
        difficulty,
        topics: topics(raw.tags.as_ref()),
        function_name,
        starter_code: raw.starter_code.clone(),
        input_output_pairs,
    })
}

fn io_pair(entry: &RawIoPair) -> Result<(String, String), RowError> {
    let input = entry.input.clone().ok_or(RowError::MissingField("input"))?;
    let output = entry.output.clone().ok_or(RowError::MissingField("output"))?;
    Ok((input, output))
}

/// Pipe-join tag lists in source order; stringify stray scalars; absent
/// tags become the empty string.
fn topics(tags: Option<&Tags>) -> String {
    match tags {
        Some(Tags::List(list)) => list.iter().join("|"),
        Some(Tags::Scalar(value)) => value.clone(),
        Some(Tags::Other(value)) if !value.is_null() => value.to_string(),
        _ => String::new(),
    }
}
