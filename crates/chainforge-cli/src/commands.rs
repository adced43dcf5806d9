//! Command execution.

use std::path::{Path, PathBuf};

use chainforge::{generate_file, solve_file, verify_files, ChainConfig, ChainForgeError, Result};
use dialoguer::Input;
use owo_colors::OwoColorize;

use crate::cli::{Cli, Commands};

pub fn run(cli: Cli) -> Result<()> {
    let mut config = load_config(&cli.config)?;

    match cli.command {
        Commands::Solve {
            input,
            output,
            max_expansions,
            time_limit,
            step_limit,
        } => {
            if let Some(max) = max_expansions {
                config = config.with_max_expansions(max);
            }
            if let Some(seconds) = time_limit {
                config = config.with_termination_seconds(seconds);
            }
            if let Some(steps) = step_limit {
                config = config.with_step_count_limit(steps);
            }
            let input = path_or_prompt(input, "Please enter an input file name")?;
            let output = path_or_prompt(output, "Please enter an output file name")?;

            let result = solve_file(&input, &output, &config)?;
            println!(
                "{} Wrote {} actions to {}",
                "✓".bright_green().bold(),
                result.chain.len(),
                output.display()
            );
        }
        Commands::Verify { input, output } => {
            let input = path_or_prompt(input, "Please enter an input file name")?;
            let output = path_or_prompt(output, "Please enter an output file name")?;

            let summary = verify_files(&input, &output)?;
            println!(
                "{} No problems occurred: {} actions reach all {} targets",
                "✓".bright_green().bold(),
                summary.actions,
                summary.targets
            );
        }
        Commands::Generate {
            output,
            count,
            base,
            seed,
        } => {
            if let Some(count) = count {
                config.generator.count = count;
            }
            if let Some(base) = base {
                config.generator.base = base;
            }
            if let Some(seed) = seed {
                config = config.with_random_seed(seed);
            }
            let output = path_or_prompt(output, "Please enter an output file name")?;

            generate_file(&output, &config)?;
            println!(
                "{} Wrote {} targets to {}",
                "✓".bright_green().bold(),
                config.generator.count,
                output.display()
            );
        }
    }
    Ok(())
}

// Loads the config file if present, otherwise the defaults.
fn load_config(path: &Path) -> Result<ChainConfig> {
    if path.exists() {
        Ok(ChainConfig::load(path)?)
    } else {
        Ok(ChainConfig::default())
    }
}

fn path_or_prompt(path: Option<PathBuf>, prompt: &str) -> Result<PathBuf> {
    if let Some(path) = path {
        return Ok(path);
    }
    Input::<String>::new()
        .with_prompt(prompt)
        .interact_text()
        .map(PathBuf::from)
        .map_err(|err| ChainForgeError::Prompt(err.to_string()))
}
