//! File-to-file pipelines used by the command line.

use std::path::Path;

use chainforge_config::ChainConfig;
use chainforge_core::Result;
use chainforge_io::{read_chain, read_targets, write_chain_file, InputGenerator, VerifySummary};
use chainforge_solver::{BuildResult, ChainBuilder};
use tracing::info;

/// Builds a chain for the target file at `input` and writes it to `output`.
///
/// The output file is only written once the build completes.
pub fn solve_file(
    input: impl AsRef<Path>,
    output: impl AsRef<Path>,
    config: &ChainConfig,
) -> Result<BuildResult> {
    #[cfg(feature = "console")]
    chainforge_console::init();

    let targets = read_targets(input)?;
    let result = ChainBuilder::from_config(config).build(targets)?;

    let output = output.as_ref();
    write_chain_file(output, result.chain.actions())?;
    info!(
        event = "chain_written",
        actions = result.chain.len() as u64,
        path = %output.display(),
    );
    Ok(result)
}

/// Replays the chain file at `output` against the target file at `input`.
pub fn verify_files(input: impl AsRef<Path>, output: impl AsRef<Path>) -> Result<VerifySummary> {
    let targets = read_targets(input)?;
    let chain = read_chain(output)?;
    chainforge_io::verify(&targets, &chain)
}

/// Writes a random target file to `path` using the `generator` settings.
pub fn generate_file(path: impl AsRef<Path>, config: &ChainConfig) -> Result<()> {
    InputGenerator::from_config(config).write_to_file(path)
}
