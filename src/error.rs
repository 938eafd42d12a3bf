// File: ./src/error.rs
//! Error taxonomy shared by the parser, the executor and the storage layer.
//!
//! Every variant renders as the message shown to the user, so shells can print
//! `err.to_string()` without further formatting.
use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, OkukeError>;

#[derive(Error, Debug)]
pub enum OkukeError {
    #[error("Invalid command! Please try again.")]
    InvalidCommand,

    #[error(
        "Incorrect format detected. Format is:\nevent <name> /from <date-time> /to <date-time>"
    )]
    MissingEventArguments,

    #[error("Your task cannot be found: there is no task {index} (the list has {len}).")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("Data file did not exist. A new one has been created at: {}", path.display())]
    DataFileMissing { path: PathBuf },

    #[error("Storage failure: {0:#}")]
    Persistence(#[from] anyhow::Error),
}

impl OkukeError {
    /// True for the startup notice that is not really a failure.
    pub fn is_first_run(&self) -> bool {
        matches!(self, OkukeError::DataFileMissing { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_are_user_facing() {
        let err = OkukeError::IndexOutOfRange { index: 4, len: 2 };
        assert_eq!(
            err.to_string(),
            "Your task cannot be found: there is no task 4 (the list has 2)."
        );

        let err = OkukeError::DataFileMissing {
            path: PathBuf::from("data/okuke.txt"),
        };
        assert!(err.is_first_run());
        assert!(err.to_string().ends_with("data/okuke.txt"));
    }

    #[test]
    fn test_persistence_keeps_context_chain() {
        let inner = anyhow::anyhow!("permission denied").context("Failed to write tasks");
        let err = OkukeError::from(inner);
        let msg = err.to_string();
        assert!(msg.contains("Failed to write tasks"));
        assert!(msg.contains("permission denied"));
        assert!(!err.is_first_run());
    }
}
