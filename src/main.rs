// wotmod-rs: World of Tanks mod packager
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Entry point.
//!
//! ```text
//! cli::parse() --> Config --> Logging --> Command Dispatch
//!   Version | Options | Inis | Build | OutputPath
//! ```

use std::process::ExitCode;

use wotmod_rs::cli::{self, Cli, Command};
use wotmod_rs::cmd::build::{run_build_command, run_output_path_command};
use wotmod_rs::cmd::config::{run_inis_command, run_options_command};
use wotmod_rs::config::loader::ConfigLoader;
use wotmod_rs::config::types::GlobalConfig;
use wotmod_rs::config::{Config, ENV_PREFIX, PROJECT_CONFIG_FILE};
use wotmod_rs::error::{Result, bail_out};
use wotmod_rs::logging::{LogConfig, init_logging};

use mimalloc::MiMalloc;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = cli::parse();

    if matches!(cli.command, Some(Command::Version)) {
        handle_version_command();
        return ExitCode::SUCCESS;
    }

    let (config, loaded_files) = match load_config(&cli) {
        Ok(loaded) => loaded,
        Err(e) => {
            eprintln!("Failed to load config: {e:#}");
            return ExitCode::FAILURE;
        }
    };

    let log_config = build_log_config(&config.global);
    let _log_guard = match init_logging(&log_config) {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("Failed to initialize logging: {e}");
            return ExitCode::FAILURE;
        }
    };

    dispatch_command(&cli, &config, &loaded_files).await
}

fn build_log_config(global: &GlobalConfig) -> LogConfig {
    LogConfig::builder()
        .with_console_level(global.output_log_level)
        .with_file_level(global.file_log_level)
        .maybe_with_log_file(global.log_file.clone())
        .build()
}

async fn dispatch_command(cli: &Cli, config: &Config, loaded_files: &[String]) -> ExitCode {
    let result = match &cli.command {
        Some(Command::Version) => {
            handle_version_command();
            Ok(())
        }
        Some(Command::Options) => {
            run_options_command(config);
            Ok(())
        }
        Some(Command::Inis) => {
            run_inis_command(loaded_files);
            Ok(())
        }
        Some(Command::Build(args)) => run_build_command(args, config).await,
        Some(Command::OutputPath(args)) => run_output_path_command(args, config),
        None => {
            eprintln!("No command specified. Use --help for usage information.");
            Err(bail_out("no command specified").into())
        }
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn handle_version_command() {
    println!("{}", env!("CARGO_PKG_VERSION"));
}

/// Layers every configuration source in precedence order.
fn build_config_loader(cli: &Cli) -> Result<ConfigLoader> {
    let mut loader = ConfigLoader::new();
    if !cli.global.no_default_config {
        let project_dir = cli
            .command
            .as_ref()
            .map_or_else(|| std::path::Path::new("."), Command::project_dir);
        loader = loader.add_toml_file_optional(project_dir.join(PROJECT_CONFIG_FILE));
    }
    for path in &cli.global.configs {
        loader = loader.add_toml_file(path);
    }
    loader = loader
        .with_env_prefix(ENV_PREFIX)
        .set_all(&cli.global.to_config_overrides())?;

    if let Some(args) = cli.command.as_ref().and_then(Command::build_args) {
        for (key, value) in args.to_config_overrides() {
            loader = loader.set(key, value)?;
        }
    }
    Ok(loader)
}

fn load_config(cli: &Cli) -> Result<(Config, Vec<String>)> {
    let loader = build_config_loader(cli)?;
    let loaded_files = loader.format_loaded_files();
    let config = loader.build()?;
    Ok((config, loaded_files))
}
