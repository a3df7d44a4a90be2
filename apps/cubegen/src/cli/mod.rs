//! Command-line interface

mod option_flags;

use crate::fs_sink::FilesystemSink;
use crate::manifest::Manifest;
use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use colored::Colorize;
use cubegen_config::{logging, GeneratorConfig};
use cubegen_core::{GeneratedDescriptor, Processor};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "cubegen")]
#[command(about = "Generates Sponge plugin wrappers for CubeEngine modules", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Write plugin wrapper sources and language stubs for every declaration
    Generate {
        #[command(flatten)]
        input: InputArgs,

        /// Output root for generated sources and resources
        #[arg(long)]
        out: PathBuf,
    },

    /// Print the resolved plugin descriptors as JSON without writing anything
    Describe {
        #[command(flatten)]
        input: InputArgs,
    },
}

#[derive(Args)]
struct InputArgs {
    /// Declaration manifest (TOML with [[module]] and [[core]] entries)
    #[arg(long)]
    manifest: PathBuf,

    /// Configuration file (default: ./cubegen.toml if present)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Processor option, e.g. -A cubeengine.module.version=1.0
    #[arg(short = 'A', value_name = "KEY=VALUE", value_parser = option_flags::parse_option)]
    options: Vec<(String, String)>,
}

impl InputArgs {
    /// Load config, apply `-A` overrides, start logging and read the manifest
    fn load(self) -> Result<(Processor, Manifest)> {
        let config = GeneratorConfig::load(self.config.as_deref())
            .context("Failed to load configuration")?
            .with_options(self.options);

        logging::initialize(&config.logging);
        tracing::debug!(
            config_file = ?self.config,
            options = config.options.len(),
            level = %config.logging.level,
            "Configuration loaded"
        );

        let options = config.processing_options();
        for key in options.unsupported_keys() {
            tracing::warn!(option = %key, "Unrecognized processor option");
        }

        let manifest = Manifest::load(&self.manifest)?;
        Ok((Processor::new(options), manifest))
    }
}

pub fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Command::Generate { input, out } => generate(input, out),
        Command::Describe { input } => describe(input),
    }
}

fn generate(input: InputArgs, out: PathBuf) -> Result<()> {
    let (processor, manifest) = input.load()?;
    let mut sink = FilesystemSink::new(&out);

    let report = processor
        .process(&manifest, &mut sink)
        .with_context(|| format!("Plugin generation failed in {}", out.display()))?;

    for artifact in &report.artifacts {
        println!(
            "{} {} ({})",
            "✓".green(),
            artifact.source,
            artifact.qualified_id.cyan()
        );
    }

    if report.is_empty() {
        println!("{}", "No module or core declarations found".yellow());
    } else {
        println!(
            "\n{} Generated {} plugin wrapper(s) in {}",
            "✓".green(),
            report.artifacts.len(),
            out.display()
        );
    }

    Ok(())
}

fn describe(input: InputArgs) -> Result<()> {
    let (processor, manifest) = input.load()?;

    let descriptors: Vec<GeneratedDescriptor> = manifest
        .declarations()
        .iter()
        .map(|declaration| processor.describe(declaration))
        .collect();

    println!("{}", serde_json::to_string_pretty(&descriptors)?);
    Ok(())
}
