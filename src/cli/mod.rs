// wotmod-rs: World of Tanks mod packager
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! CLI module for wotmod-rs using clap derive.
//!
//! # Command Structure
//!
//! ```text
//! wotmod [global options] <command>
//! version
//! options
//! inis
//! build (bdist-wotmod) [build options]
//! output-path [build options]
//! ```

pub mod build;
pub mod global;

#[cfg(test)]
mod tests;

use std::path::Path;

use crate::cli::build::BuildArgs;
use crate::cli::global::GlobalOptions;
use clap::{Parser, Subcommand};

/// World of Tanks mod packager
///
/// Packages Python scripts and data files into a `.wotmod` archive.
#[derive(Debug, Parser)]
#[command(
    name = "wotmod",
    author,
    version,
    about = "World of Tanks mod packager",
    long_about = "wotmod-rs Copyright (C) 2026 Romeo Ahmed\n\
                  This program comes with ABSOLUTELY NO WARRANTY\n\
                  This is free software, and you are welcome to redistribute it\n\
                  under certain conditions; see LICENSE for details.\n\n\
                  Packages Python scripts and data files into a .wotmod archive.\n\n\
                  Invoking `wotmod build -p some/project` compiles the project's\n\
                  scripts and writes <author_id>.<name>_<version>.wotmod into the\n\
                  dist directory. See `wotmod <command> --help` for more\n\
                  information about a command.",
    after_help = "CONFIG FILES:\n\n\
                  By default, wotmod loads `wotmod.toml` from the project\n\
                  directory. Additional files can be given with --config; those\n\
                  are loaded afterwards and override it. WOTMOD_<SECTION>__<KEY>\n\
                  environment variables and --set come next. Use\n\
                  --no-default-config to only use --config files."
)]
pub struct Cli {
    /// Global options shared by all commands
    #[command(flatten)]
    pub global: GlobalOptions,

    /// Command to execute
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Shows the version.
    #[command(visible_alias = "-v")]
    Version,

    /// Lists all options and their values.
    Options,

    /// Lists the configuration files used.
    Inis,

    /// Builds the .wotmod archive.
    #[command(visible_alias = "bdist-wotmod")]
    Build(BuildArgs),

    /// Prints the archive path `build` would write.
    #[command(name = "output-path")]
    OutputPath(BuildArgs),
}

impl Command {
    /// Build arguments of commands that take them.
    #[must_use]
    pub const fn build_args(&self) -> Option<&BuildArgs> {
        match self {
            Self::Build(args) | Self::OutputPath(args) => Some(args),
            Self::Version | Self::Options | Self::Inis => None,
        }
    }

    /// Project directory the command operates on.
    #[must_use]
    pub fn project_dir(&self) -> &Path {
        self.build_args()
            .map_or_else(|| Path::new("."), BuildArgs::project_dir)
    }
}

/// Parses command-line arguments.
#[must_use]
pub fn parse() -> Cli {
    Cli::parse()
}

/// Parses command-line arguments from an iterator.
pub fn parse_from<I, T>(iter: I) -> Cli
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    Cli::parse_from(iter)
}

/// Tries to parse command-line arguments, returning an error on failure.
///
/// # Errors
///
/// Returns a `clap::Error` if the arguments are invalid or if help/version information
/// was requested.
pub fn try_parse() -> Result<Cli, clap::Error> {
    Cli::try_parse()
}
