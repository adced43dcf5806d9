//! Target file parsing.
//!
//! The first token is the number of targets. It is informational only and is
//! never checked against the values that follow. Every other token must be a
//! positive integer; duplicates collapse.

use std::collections::BTreeSet;
use std::fs;
use std::path::Path;

use chainforge_core::{ChainForgeError, Result};

/// Parses the contents of a target file.
///
/// # Errors
///
/// Returns [`ChainForgeError::MalformedInput`] for a token that is not a
/// positive integer. Line numbers are 1-based.
pub fn parse_targets(text: &str) -> Result<BTreeSet<u64>> {
    let mut targets = BTreeSet::new();
    let mut tokens = text
        .lines()
        .enumerate()
        .flat_map(|(i, line)| line.split_whitespace().map(move |token| (i + 1, token)));

    // Declared count.
    tokens.next();

    for (line, token) in tokens {
        match token.parse::<u64>() {
            Ok(value) if value > 0 => {
                targets.insert(value);
            }
            _ => {
                return Err(ChainForgeError::MalformedInput {
                    line,
                    token: token.to_string(),
                })
            }
        }
    }
    Ok(targets)
}

/// Reads and parses the target file at `path`.
///
/// # Errors
///
/// Returns [`ChainForgeError::InputUnavailable`] if the file cannot be read,
/// or any error from [`parse_targets`].
pub fn read_targets(path: impl AsRef<Path>) -> Result<BTreeSet<u64>> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).map_err(|source| ChainForgeError::InputUnavailable {
        path: path.to_path_buf(),
        source,
    })?;
    parse_targets(&text)
}
