//! Error types for ChainForge

use std::path::PathBuf;

use thiserror::Error;

/// Main error type for ChainForge operations
#[derive(Debug, Error)]
pub enum ChainForgeError {
    /// A source file could not be opened or read
    #[error("Error opening file {}: {source}", path.display())]
    InputUnavailable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A token in a number file is not a positive integer
    #[error("Malformed input on line {line}: {token:?} is not a positive integer")]
    MalformedInput { line: usize, token: String },

    /// The declared action count does not match the listed actions
    #[error("Incorrect number of actions: declared {declared}, found {actual}")]
    CountMismatch { declared: usize, actual: usize },

    /// An action uses an addend that is not yet in the basis
    #[error("Action #{index} is invalid. Tried using {addend} which does not exist")]
    InvalidAddend { index: usize, addend: u64 },

    /// A target never appears in the replayed basis
    #[error("Target number {target} was missed")]
    MissedTarget { target: u64 },

    /// Committed an action with no matching pool entry (internal defect)
    #[error("Internal error: committed action with sum {sum} is not in the action pool")]
    EmptyPoolCommit { sum: u64 },

    /// The build was stopped by a termination before every target was reached
    #[error("Terminated after {steps} steps with {remaining} targets remaining")]
    Terminated { steps: u64, remaining: usize },

    /// Internal error (should not occur in normal operation)
    #[error("Internal error: {0}")]
    Internal(String),

    /// Error in configuration
    #[error("Configuration error: {0}")]
    Config(String),

    /// Interactive prompt failed
    #[error("Prompt error: {0}")]
    Prompt(String),

    /// Error writing an output file
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for ChainForge operations
pub type Result<T> = std::result::Result<T, ChainForgeError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_addend_message_is_one_based() {
        let err = ChainForgeError::InvalidAddend { index: 1, addend: 5 };
        assert_eq!(
            err.to_string(),
            "Action #1 is invalid. Tried using 5 which does not exist"
        );
    }

    #[test]
    fn test_count_mismatch_message() {
        let err = ChainForgeError::CountMismatch {
            declared: 2,
            actual: 1,
        };
        assert!(err.to_string().contains("declared 2, found 1"));
    }
}
