use std::io::{self, BufWriter, Write};

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser};

use splint_lib::analyzer;
use splint_lib::cli::Cli;
use splint_lib::config::{load_config_file, Config, ConfigFile};
use splint_lib::files::expand_paths;
use splint_lib::report::{JsonReporter, Reporter, TextReporter};

fn build_config(cli: &Cli) -> Result<Config> {
    let file_layer = match &cli.config {
        Some(path) => load_config_file(path)
            .with_context(|| format!("failed to load config {}", path.display()))?,
        None => ConfigFile::default(),
    };
    let config = file_layer.merge(cli.to_config_layer()).resolve()?;
    Ok(config)
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    if cli.paths.is_empty() {
        Cli::command().print_help()?;
        std::process::exit(1);
    }

    let config = build_config(&cli)?;
    log::debug!("running with {config:?}");

    let files = expand_paths(&cli.paths, config.ignore_test_files);
    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());

    let outcome = {
        let mut reporter: Box<dyn Reporter + '_> = if cli.json {
            Box::new(JsonReporter::new(&mut out))
        } else {
            Box::new(TextReporter::new(&mut out))
        };
        analyzer::execute(&files, &config, reporter.as_mut()).context("failed to write report")?
    };
    out.flush()?;

    if !outcome.failures.is_empty() {
        log::info!("{} file(s) could not be analyzed", outcome.failures.len());
    }
    Ok(())
}
