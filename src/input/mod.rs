use std::path::{Path, PathBuf};

use thiserror::Error;

pub mod marks;
pub mod reader;
pub mod sample;

use marks::parse_marks;
use sample::sample_table;

use crate::model::{RankingTable, TableError};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    Sample,
    File(PathBuf),
}

impl InputSource {
    pub fn label(&self) -> String {
        match self {
            InputSource::Sample => "sample".to_string(),
            InputSource::File(path) => path.display().to_string(),
        }
    }
}

#[derive(Debug, Error)]
pub enum InputError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("missing input: {0}")]
    MissingInput(String),
    #[error("parse error at line {line}: {msg}")]
    Parse { line: usize, msg: String },
    #[error("invalid table: {0}")]
    Table(#[from] TableError),
}

pub fn load_input(source: &InputSource) -> Result<RankingTable, InputError> {
    match source {
        InputSource::Sample => Ok(sample_table()?),
        InputSource::File(path) => load_marks_file(path),
    }
}

pub fn load_marks_file(path: &Path) -> Result<RankingTable, InputError> {
    if !path.is_file() {
        return Err(InputError::MissingInput(format!(
            "marks file not found: {}",
            path.display()
        )));
    }
    let reader = reader::open_maybe_gz(path)?;
    let entries = parse_marks(reader)?;
    Ok(RankingTable::new(entries)?)
}

#[cfg(test)]
#[path = "../../tests/src_inline/input/tests.rs"]
mod tests;
