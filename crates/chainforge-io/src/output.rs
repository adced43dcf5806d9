//! Chain file reading and writing.
//!
//! A chain file starts with the number of actions, followed by one
//! `addend1 addend2` line per action in commit order.

use std::fmt::Write as _;
use std::fs;
use std::io::{self, Write};
use std::path::Path;

use chainforge_core::{Action, ChainForgeError, Result};

/// A parsed chain file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChainFile {
    /// Count from the first line.
    pub declared: usize,
    /// Actions in file order.
    pub actions: Vec<Action>,
}

/// Formats `actions` as chain file text.
pub fn format_chain(actions: &[Action]) -> String {
    let mut out = String::new();
    // Writing to a String cannot fail.
    let _ = writeln!(out, "{}", actions.len());
    for action in actions {
        let _ = writeln!(out, "{action}");
    }
    out
}

/// Writes `actions` as chain file text to `writer`.
pub fn write_chain<W: Write>(actions: &[Action], mut writer: W) -> io::Result<()> {
    writer.write_all(format_chain(actions).as_bytes())?;
    writer.flush()
}

/// Writes `actions` to the chain file at `path`, replacing it.
pub fn write_chain_file(path: impl AsRef<Path>, actions: &[Action]) -> Result<()> {
    fs::write(path, format_chain(actions))?;
    Ok(())
}

/// Parses chain file text.
///
/// The declared count is returned as read; comparing it with the listed
/// actions is left to [`verify`](crate::verify).
///
/// # Errors
///
/// Returns [`ChainForgeError::MalformedInput`] for a non-integer token, an
/// addend without a partner, or a pair whose sum overflows.
pub fn parse_chain(text: &str) -> Result<ChainFile> {
    let mut tokens = text
        .lines()
        .enumerate()
        .flat_map(|(i, line)| line.split_whitespace().map(move |token| (i + 1, token)));

    let declared = match tokens.next() {
        Some((line, token)) => token
            .parse::<usize>()
            .map_err(|_| malformed(line, token))?,
        None => 0,
    };

    let mut actions = Vec::new();
    while let Some((line, first)) = tokens.next() {
        let addend1 = parse_addend(line, first)?;
        let Some((line, second)) = tokens.next() else {
            return Err(malformed(line, ""));
        };
        let addend2 = parse_addend(line, second)?;
        if addend1.checked_add(addend2).is_none() {
            return Err(malformed(line, second));
        }
        actions.push(Action::new(addend1, addend2));
    }

    Ok(ChainFile { declared, actions })
}

/// Reads and parses the chain file at `path`.
///
/// # Errors
///
/// Returns [`ChainForgeError::InputUnavailable`] if the file cannot be read,
/// or any error from [`parse_chain`].
pub fn read_chain(path: impl AsRef<Path>) -> Result<ChainFile> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).map_err(|source| ChainForgeError::InputUnavailable {
        path: path.to_path_buf(),
        source,
    })?;
    parse_chain(&text)
}

fn parse_addend(line: usize, token: &str) -> Result<u64> {
    token.parse::<u64>().map_err(|_| malformed(line, token))
}

fn malformed(line: usize, token: &str) -> ChainForgeError {
    ChainForgeError::MalformedInput {
        line,
        token: token.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_single_doubling() {
        assert_eq!(format_chain(&[Action::new(1, 1)]), "1\n1 1\n");
    }

    #[test]
    fn test_format_empty_chain() {
        assert_eq!(format_chain(&[]), "0\n");
    }

    #[test]
    fn test_parse_keeps_declared_count_as_read() {
        let chain = parse_chain("2\n1 1\n").unwrap();

        assert_eq!(chain.declared, 2);
        assert_eq!(chain.actions, vec![Action::new(1, 1)]);
    }

    #[test]
    fn test_parse_computes_sums() {
        let chain = parse_chain("2\n1 1\n2 1\n").unwrap();
        let sums: Vec<u64> = chain.actions.iter().map(|a| a.sum).collect();
        assert_eq!(sums, vec![2, 3]);
    }

    #[test]
    fn test_parse_rejects_dangling_addend() {
        let err = parse_chain("1\n1\n").unwrap_err();
        assert!(matches!(err, ChainForgeError::MalformedInput { line: 2, .. }));
    }

    #[test]
    fn test_parse_rejects_garbage() {
        let err = parse_chain("1\n1 x\n").unwrap_err();
        match err {
            ChainForgeError::MalformedInput { line, token } => {
                assert_eq!(line, 2);
                assert_eq!(token, "x");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_parse_rejects_overflowing_sum() {
        let text = format!("1\n{} 1\n", u64::MAX);
        assert!(parse_chain(&text).is_err());
    }

    #[test]
    fn test_write_to_file_and_read_back() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("chain.txt");
        let actions = vec![Action::new(1, 1), Action::new(2, 1)];

        write_chain_file(&path, &actions).unwrap();
        let chain = read_chain(&path).unwrap();

        assert_eq!(chain.declared, 2);
        assert_eq!(chain.actions, actions);
    }

    #[test]
    fn test_write_to_writer() {
        let mut buf = Vec::new();
        write_chain(&[Action::new(1, 1)], &mut buf).unwrap();
        assert_eq!(buf, b"1\n1 1\n");
    }
}
