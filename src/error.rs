//! Error types for SYB

use std::io;
use thiserror::Error;

/// Main error type for SYB
#[derive(Error, Debug)]
pub enum SybError {
    /// The executable could not be started at all.
    #[error("failed to start {tool}: {source}")]
    Launch {
        tool: String,
        #[source]
        source: io::Error,
    },

    /// The executable ran but reported failure. `output` is its captured stdout and stderr.
    #[error("{tool} exited with {}", exit_code_text(.code))]
    Exit {
        tool: String,
        code: Option<i32>,
        output: String,
    },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

/// Result type alias for SYB operations
pub type Result<T> = std::result::Result<T, SybError>;

fn exit_code_text(code: &Option<i32>) -> String {
    match code {
        Some(code) => format!("exit code {}", code),
        None => "no exit code (terminated by signal)".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exit_error_mentions_code() {
        let err = SybError::Exit {
            tool: "sersend".into(),
            code: Some(2),
            output: String::new(),
        };
        assert_eq!(err.to_string(), "sersend exited with exit code 2");
    }

    #[test]
    fn exit_error_without_code() {
        let err = SybError::Exit {
            tool: "tx2al".into(),
            code: None,
            output: String::new(),
        };
        assert!(err.to_string().contains("terminated by signal"));
    }
}
