//! Helpers for reading JSON documents into host values with useful errors.
//!
//! `serde_json`'s messages carry line/column but not the source; these
//! helpers add the input name so CLI users know which file failed.

use std::fs;
use std::io::{self, Read};
use std::path::Path;

use polyshim_value::{Value, ValueError};
use thiserror::Error;

/// Input name that selects standard input.
pub const STDIN_INPUT: &str = "-";

#[derive(Debug, Error)]
pub enum LoadError {
    /// The input could not be read.
    #[error("failed to read {input}: {source}")]
    Io {
        input: String,
        #[source]
        source: io::Error,
    },

    /// The input was read but is not valid JSON.
    #[error("{input}: {source}")]
    Value {
        input: String,
        #[source]
        source: ValueError,
    },
}

/// Parse JSON text into a host value.
pub fn load_json_str(s: &str) -> Result<Value, LoadError> {
    parse_named("<string>", s)
}

/// Read and parse a JSON file.
pub fn load_json_path(path: &Path) -> Result<Value, LoadError> {
    let input = path.display().to_string();
    let text = fs::read_to_string(path).map_err(|source| LoadError::Io {
        input: input.clone(),
        source,
    })?;
    parse_named(&input, &text)
}

/// Read and parse a JSON document from a path, or from stdin when `input`
/// is `-`.
pub fn load_json_input(input: &str) -> Result<Value, LoadError> {
    if input != STDIN_INPUT {
        return load_json_path(Path::new(input));
    }

    let mut text = String::new();
    io::stdin()
        .read_to_string(&mut text)
        .map_err(|source| LoadError::Io {
            input: "<stdin>".to_string(),
            source,
        })?;
    parse_named("<stdin>", &text)
}

fn parse_named(input: &str, text: &str) -> Result<Value, LoadError> {
    tracing::debug!(input, bytes = text.len(), "parsing JSON input");
    Value::from_json_str(text).map_err(|source| LoadError::Value {
        input: input.to_string(),
        source,
    })
}
