//! cmdgen - regenerates the CLI resource subcommand sources
//!
//! Takes no arguments. The output base path comes from `CLI_GEN_BASEPATH`
//! and defaults to the current working directory.

use anyhow::{Context, Result};
use cmdgen_generation::{
    builtin, GenerationDriver, GeneratorConfig, OutputWriter, TemplateEngine,
};

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .with_writer(std::io::stderr)
        .init();

    let config = GeneratorConfig::from_env();
    let registry = builtin().context("Invalid built-in command registry")?;

    let driver = GenerationDriver::new(
        registry,
        TemplateEngine::new(),
        OutputWriter::new(config.base_path),
    );
    let report = driver.run().context("Command generation failed")?;

    tracing::info!("{}", report.summary());
    Ok(())
}
