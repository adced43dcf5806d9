//! Random target file generation.
//!
//! Each value is `base` plus a random offset below the previous value, so a
//! file holds large, clustered targets. The first offset is drawn below a
//! small random bound.

use std::fmt::Write as _;
use std::fs;
use std::io::{self, Write};
use std::path::Path;

use chainforge_config::ChainConfig;
use chainforge_core::Result;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tracing::info;

/// Generates target files from an explicitly seeded RNG.
///
/// # Example
///
/// ```
/// use chainforge_io::InputGenerator;
///
/// let values = InputGenerator::new(5, 1_000, Some(42)).generate();
///
/// assert_eq!(values.len(), 5);
/// assert!(values.iter().all(|&v| v >= 1_000));
/// ```
#[derive(Debug, Clone)]
pub struct InputGenerator {
    count: usize,
    base: u64,
    rng: ChaCha8Rng,
}

impl InputGenerator {
    /// Creates a generator. Without a seed the RNG is seeded from the OS.
    pub fn new(count: usize, base: u64, seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed),
            None => ChaCha8Rng::from_os_rng(),
        };
        Self {
            count,
            base: base.max(1),
            rng,
        }
    }

    /// Creates a generator from the `generator` section and `random_seed`.
    pub fn from_config(config: &ChainConfig) -> Self {
        Self::new(
            config.generator.count,
            config.generator.base,
            config.random_seed,
        )
    }

    pub fn count(&self) -> usize {
        self.count
    }

    /// Draws the next `count` values.
    pub fn generate(&mut self) -> Vec<u64> {
        let mut bound = self.rng.random_range(1..10u64);
        let mut values = Vec::with_capacity(self.count);
        for _ in 0..self.count {
            let value = self.base.saturating_add(self.rng.random_range(0..bound));
            values.push(value);
            bound = value;
        }
        values
    }

    /// Formats freshly drawn values as target file text.
    pub fn generate_text(&mut self) -> String {
        let values = self.generate();
        let mut out = String::new();
        let _ = writeln!(out, "{}", values.len());
        for value in values {
            let _ = writeln!(out, "{value}");
        }
        out
    }

    /// Writes a target file to `writer`.
    pub fn write<W: Write>(&mut self, mut writer: W) -> io::Result<()> {
        writer.write_all(self.generate_text().as_bytes())?;
        writer.flush()
    }

    /// Writes a target file to `path`, replacing it.
    pub fn write_to_file(&mut self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        fs::write(path, self.generate_text())?;
        info!(
            event = "generated",
            count = self.count as u64,
            path = %path.display(),
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::parse_targets;

    #[test]
    fn test_same_seed_same_values() {
        let a = InputGenerator::new(50, 1_000_000, Some(7)).generate();
        let b = InputGenerator::new(50, 1_000_000, Some(7)).generate();
        assert_eq!(a, b);
    }

    #[test]
    fn test_values_stay_above_base() {
        let values = InputGenerator::new(200, 1_000_000, Some(3)).generate();
        assert!(values.iter().all(|&v| v >= 1_000_000));
    }

    #[test]
    fn test_first_value_is_close_to_base() {
        let values = InputGenerator::new(1, 500, Some(11)).generate();
        assert!(values[0] < 510);
    }

    #[test]
    fn test_offset_is_below_previous_value() {
        let base = 1_000;
        let values = InputGenerator::new(100, base, Some(5)).generate();
        for pair in values.windows(2) {
            assert!(pair[1] < base + pair[0]);
        }
    }

    #[test]
    fn test_text_starts_with_real_count() {
        let text = InputGenerator::new(4, 100, Some(1)).generate_text();

        let mut lines = text.lines();
        assert_eq!(lines.next(), Some("4"));
        assert_eq!(lines.count(), 4);
        assert!(!parse_targets(&text).unwrap().is_empty());
    }

    #[test]
    fn test_zero_count_writes_header_only() {
        let text = InputGenerator::new(0, 100, Some(1)).generate_text();
        assert_eq!(text, "0\n");
    }

    #[test]
    fn test_from_config() {
        let mut config = ChainConfig::new().with_random_seed(9);
        config.generator.count = 3;

        let generator = InputGenerator::from_config(&config);

        assert_eq!(generator.count(), 3);
    }

    #[test]
    fn test_write_to_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("inputs.txt");

        InputGenerator::new(10, 1_000_000, Some(2))
            .write_to_file(&path)
            .unwrap();

        let text = std::fs::read_to_string(&path).unwrap();
        assert!(text.starts_with("10\n"));
    }
}
