use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum QuizError {
    #[error("Invalid {axis}: '{value}'")]
    InvalidChoice { axis: &'static str, value: String },

    #[error("{0}")]
    InvalidCommandLineUsage(String),

    #[error("Malformed shortcut data in '{}' (row {line}): {reason}", path.display())]
    DataFormat {
        path: PathBuf,
        line: u64,
        reason: String,
    },

    #[error("No {0} topic has any shortcuts")]
    NoShortcuts(String),

    #[error("IO Error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV Parsing Error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Fetch Error: {0}")]
    Fetch(String),

    #[error("Terminal Error: {0}")]
    Readline(String),
}

impl QuizError {
    pub fn invalid_choice(axis: &'static str, value: &str) -> Self {
        Self::InvalidChoice {
            axis,
            value: value.to_string(),
        }
    }

    pub fn data_format(path: impl Into<PathBuf>, line: u64, reason: impl Into<String>) -> Self {
        Self::DataFormat {
            path: path.into(),
            line,
            reason: reason.into(),
        }
    }

    /// Exit status for the binary: 2 for usage problems, 1 for everything else.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::InvalidChoice { .. } | Self::InvalidCommandLineUsage(_) => 2,
            _ => 1,
        }
    }
}

impl From<reqwest::Error> for QuizError {
    fn from(e: reqwest::Error) -> Self {
        Self::Fetch(e.to_string())
    }
}

pub type QuizResult<T> = Result<T, QuizError>;
