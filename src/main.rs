use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;

use sassbatch::batch::FileMapping;
use sassbatch::config::{Config, DEFAULT_CONFIG_FILE};
use sassbatch::logging::init_tracing;
use sassbatch::process::{PathResolver, SystemInvoker};
use sassbatch::task::{run_task, TaskOutcome};

/// Compile Sass to CSS with as few sass invocations as possible.
#[derive(Debug, Parser)]
#[command(name = "sassbatch", version, about)]
struct Cli {
    /// Config file [default: sassbatch.toml, if present]
    #[arg(short, long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Only recompile files whose sources changed
    #[arg(long, num_args = 0..=1, require_equals = true, default_missing_value = "true", value_name = "BOOL")]
    update: Option<bool>,

    /// Run sass through `bundle exec`
    #[arg(long, num_args = 0..=1, require_equals = true, default_missing_value = "true", value_name = "BOOL")]
    bundle_exec: Option<bool>,

    /// Syntax-check sources instead of compiling
    #[arg(long, num_args = 0..=1, require_equals = true, default_missing_value = "true", value_name = "BOOL")]
    check: Option<bool>,

    /// Text prepended to every compiled file
    #[arg(long, value_name = "TEXT")]
    banner: Option<String>,

    /// Debug logging
    #[arg(short, long)]
    verbose: bool,

    /// Extra mappings, compiled after the configured ones
    #[arg(value_name = "SRC:DEST", value_parser = parse_mapping)]
    files: Vec<FileMapping>,
}

impl Cli {
    /// Command-line flags override the config file, `--flag=false` included.
    fn apply(self, config: &mut Config) {
        let options = &mut config.options;
        if let Some(update) = self.update {
            options.update = update;
        }
        if let Some(bundle_exec) = self.bundle_exec {
            options.bundle_exec = bundle_exec;
        }
        if let Some(check) = self.check {
            options.check = check;
        }
        if self.banner.is_some() {
            options.banner = self.banner;
        }
        config.files.extend(self.files);
    }
}

fn parse_mapping(raw: &str) -> Result<FileMapping, String> {
    FileMapping::parse(raw).ok_or_else(|| format!("expected SRC:DEST, got '{}'", raw))
}

fn load_config(path: Option<&Path>) -> Result<Config> {
    let config = match path {
        Some(path) => Config::load_from(path)?,
        None => Config::load_or_default(Path::new(DEFAULT_CONFIG_FILE))?,
    };
    Ok(config)
}

fn run(cli: Cli) -> Result<()> {
    let mut config = load_config(cli.config.as_deref()).context("Could not load configuration")?;
    cli.apply(&mut config);
    config.validate()?;

    if config.files.is_empty() && !config.options.check {
        tracing::warn!("No files to compile");
    }

    match run_task(&config, &PathResolver, &mut SystemInvoker)? {
        TaskOutcome::Compiled { summary, warnings } => {
            tracing::info!(
                "{} file(s) compiled in {} invocation(s)",
                summary.produced.len(),
                summary.invocations
            );
            if !warnings.is_empty() {
                tracing::info!("{} mapping(s) skipped", warnings.len());
            }
        }
        TaskOutcome::Checked { files } => {
            tracing::info!("{} file(s) checked", files);
        }
    }
    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {:#}", err);
            ExitCode::from(1)
        }
    }
}
