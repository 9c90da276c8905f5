// wotmod-rs: World of Tanks mod packager
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Configuration management for wotmod-rs.
//!
//! # Configuration Hierarchy
//!
//! ```text
//! Priority (low → high)
//! 1. defaults
//! 2. wotmod.toml (project dir)
//! 3. --config FILE (in order)
//! 4. WOTMOD_* env vars
//! 5. --set section.key=value
//! 6. command flags
//! ```
//!
//! # Environment Variable Mapping
//!
//! ```text
//! WOTMOD_PACKAGE__NAME=foo            → package.name = "foo"
//! WOTMOD_PACKAGE__AUTHOR_ID=com.x     → package.author_id = "com.x"
//! WOTMOD_BUILD__TARGET_RUNTIME=2.7    → build.target_runtime = "2.7"
//! ```
//!
//! # Example
//!
//! ```toml
//! [package]
//! name = "foo"
//! version = "0.1"
//! author_id = "com.github.jhakonen"
//! description = "has cool stuff"
//!
//! [files]
//! scripts = ["foo.py"]
//! data_files = ["datafile"]
//! ```

pub mod loader;
pub mod types;

#[cfg(test)]
mod tests;

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use crate::error::Result;

use loader::ConfigLoader;
use types::{BuildConfig, FilesConfig, GlobalConfig, PackageConfig, normalize_archive_dir};

/// Project configuration file looked up in the project directory.
pub const PROJECT_CONFIG_FILE: &str = "wotmod.toml";

/// Prefix of configuration environment variables.
pub const ENV_PREFIX: &str = "WOTMOD";

/// Complete application configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub global: GlobalConfig,
    pub package: PackageConfig,
    pub build: BuildConfig,
    pub files: FilesConfig,
}

impl Config {
    /// Create a new configuration builder.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use wotmod_rs::config::Config;
    ///
    /// let config = Config::builder()
    ///     .add_toml_file_optional("wotmod.toml")
    ///     .with_env_prefix("WOTMOD")
    ///     .build()?;
    /// # Ok::<(), anyhow::Error>(())
    /// ```
    #[must_use]
    pub fn builder() -> ConfigLoader {
        ConfigLoader::new()
    }

    /// Load configuration from a single TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, contains invalid TOML, or
    /// does not match the `Config` structure.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::builder().add_toml_file(path).build()
    }

    /// Load configuration from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns an error if the content is not valid TOML or does not match the
    /// `Config` structure.
    pub fn parse(content: &str) -> Result<Self> {
        Self::builder().add_toml_str(content).build()
    }

    /// Normalize archive directories and validate values.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` if `build.install_lib` or a
    /// `files.data_dirs` key is absolute or escapes with `..`.
    pub fn resolve_and_validate(&mut self) -> Result<()> {
        self.build.install_lib =
            normalize_archive_dir("build", "install_lib", &self.build.install_lib)?;

        let mut data_dirs = BTreeMap::new();
        for (dir, files) in std::mem::take(&mut self.files.data_dirs) {
            let key = format!("data_dirs.{dir}");
            let dir = normalize_archive_dir("files", &key, &dir)?;
            data_dirs
                .entry(dir)
                .or_insert_with(Vec::new)
                .extend(files);
        }
        self.files.data_dirs = data_dirs;
        Ok(())
    }

    /// Format configuration options for display, sorted by key.
    #[must_use]
    pub fn format_options(&self) -> Vec<String> {
        let mut options = BTreeMap::new();
        self.format_global_options(&mut options);
        self.format_package_options(&mut options);
        self.format_build_options(&mut options);
        self.format_files_options(&mut options);

        let max_key_len = options.keys().map(String::len).max().unwrap_or(0);

        options
            .into_iter()
            .map(|(key, value)| format!("{key:<max_key_len$} = {value}"))
            .collect()
    }

    fn format_global_options(&self, options: &mut BTreeMap<String, String>) {
        options.insert(
            "global.output_log_level".into(),
            self.global.output_log_level.as_u8().to_string(),
        );
        options.insert(
            "global.file_log_level".into(),
            self.global.file_log_level.as_u8().to_string(),
        );
        options.insert("global.log_file".into(), fmt_path(self.global.log_file.as_ref()));
    }

    fn format_package_options(&self, options: &mut BTreeMap<String, String>) {
        options.insert("package.name".into(), self.package.name.clone());
        options.insert(
            "package.version".into(),
            self.package.version.clone().unwrap_or_default(),
        );
        options.insert("package.author".into(), self.package.author.clone());
        options.insert(
            "package.author_id".into(),
            self.package.effective_author_id().to_string(),
        );
        options.insert(
            "package.description".into(),
            self.package.description.clone(),
        );
    }

    fn format_build_options(&self, options: &mut BTreeMap<String, String>) {
        options.insert("build.install_lib".into(), self.build.install_lib.clone());
        options.insert(
            "build.dist_dir".into(),
            self.build.dist_dir.display().to_string(),
        );
        options.insert("build.interpreter".into(), self.build.interpreter.clone());
        options.insert(
            "build.target_runtime".into(),
            self.build.target_runtime.id().to_string(),
        );
    }

    fn format_files_options(&self, options: &mut BTreeMap<String, String>) {
        options.insert("files.scripts".into(), fmt_paths(&self.files.scripts));
        options.insert("files.packages".into(), fmt_paths(&self.files.packages));
        options.insert("files.data_files".into(), fmt_paths(&self.files.data_files));
        for (dir, files) in &self.files.data_dirs {
            options.insert(format!("files.data_dirs.{dir}"), fmt_paths(files));
        }
    }
}

fn fmt_path(path: Option<&PathBuf>) -> String {
    path.map_or_else(String::new, |p| p.display().to_string())
}

fn fmt_paths(paths: &[PathBuf]) -> String {
    paths
        .iter()
        .map(|p| p.display().to_string())
        .collect::<Vec<_>>()
        .join(", ")
}
