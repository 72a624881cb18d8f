use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Could not read {path:?}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Could not write {path:?}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Could not parse {path:?} line {line}: {text:?} ({reason})")]
    Parse {
        path: PathBuf,
        line: usize,
        text: String,
        reason: String,
    },
    #[error("Invalid results payload: {0}")]
    Format(#[from] serde_json::Error),
    #[error("Not found: {0}")]
    NotFound(String),
    #[error("No summary for store {store} workload {workload}")]
    MissingEntry { store: String, workload: String },
    #[error("Invalid config: {0}")]
    Config(#[from] serde_yml::Error),
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

impl Error {
    pub fn read(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Read {
            path: path.into(),
            source,
        }
    }

    pub fn write(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Write {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
