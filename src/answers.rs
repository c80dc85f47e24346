//! Preloaded answers.
//! Answers are read from a config file or stdin and may be written as JSON or YAML.

use crate::error::{Error, Result};
use indexmap::IndexMap;
use log::debug;
use std::io::Read;
use std::path::PathBuf;

#[derive(Debug)]
pub enum AnswerSource {
    Stdin,
    File(PathBuf),
    None,
}

impl AnswerSource {
    /// Picks the answer source from command line flags. Stdin wins over a file.
    pub fn from_flags(take_from_stdin: bool, config_file: Option<PathBuf>) -> Self {
        match (take_from_stdin, config_file) {
            (true, _) => AnswerSource::Stdin,
            (false, Some(path)) => AnswerSource::File(path),
            (false, None) => AnswerSource::None,
        }
    }
}

/// Parses preloaded answers, trying JSON first and YAML second.
///
/// # Arguments
/// * `content` - Raw answers document
///
/// # Returns
/// * `Result<IndexMap<String, String>>` - Answers in document order
///
/// # Errors
/// * `Error::ConfigError` if the document is neither JSON nor YAML, is not a mapping,
///   or holds a non-scalar value
pub fn parse_answers(content: &str) -> Result<IndexMap<String, String>> {
    if content.trim().is_empty() {
        return Ok(IndexMap::new());
    }

    let raw: IndexMap<String, serde_json::Value> = match serde_json::from_str(content) {
        Ok(v) => v,
        Err(_) => serde_yaml::from_str(content)
            .map_err(|e| Error::ConfigError(format!("invalid answers format: {e}")))?,
    };

    let mut answers = IndexMap::new();
    for (key, value) in raw {
        let value = match value {
            serde_json::Value::Null => continue,
            serde_json::Value::String(s) => s,
            serde_json::Value::Bool(b) => if b { "yes" } else { "no" }.to_string(),
            serde_json::Value::Number(n) => n.to_string(),
            other => {
                return Err(Error::ConfigError(format!(
                    "answer '{key}' must be a scalar, got {other}"
                )))
            }
        };
        answers.insert(key, value);
    }
    Ok(answers)
}

/// Loads answers from the selected source. No source yields an empty set, so every
/// parameter takes its schema default.
pub fn load_answers(source: AnswerSource) -> Result<IndexMap<String, String>> {
    match source {
        AnswerSource::Stdin => {
            let mut buffer = String::new();
            std::io::stdin().read_to_string(&mut buffer)?;
            parse_answers(&buffer)
        }
        AnswerSource::File(path) => {
            debug!("Loading answers from {}", path.display());
            let content = std::fs::read_to_string(&path).map_err(|e| {
                Error::ConfigError(format!("cannot read config file {}: {e}", path.display()))
            })?;
            parse_answers(&content)
        }
        AnswerSource::None => Ok(IndexMap::new()),
    }
}
