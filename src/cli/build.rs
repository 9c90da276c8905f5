// wotmod-rs: World of Tanks mod packager
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Build command arguments.
//!
//! ```text
//! -p DIR               project directory (config lookup, relative inputs)
//! -d DIR               build.dist_dir
//! --install-lib P      build.install_lib
//! --author-id ID       package.author_id
//! --interpreter PROG   build.interpreter ("none" disables compilation)
//! --target-runtime V   build.target_runtime
//! ```

use std::path::{Path, PathBuf};

use clap::Args;

/// Arguments shared by `build` and `output-path`.
#[derive(Debug, Clone, Default, Args)]
pub struct BuildArgs {
    /// Project directory holding wotmod.toml and the package inputs.
    #[arg(short = 'p', long = "project-dir", value_name = "DIR")]
    pub project_dir: Option<PathBuf>,

    /// Directory to put the final archive in.
    #[arg(short = 'd', long = "dist-dir", value_name = "DIR")]
    pub dist_dir: Option<PathBuf>,

    /// Archive directory for Python scripts.
    #[arg(long = "install-lib", value_name = "PATH")]
    pub install_lib: Option<String>,

    /// Author identifier prefixed to the package name.
    #[arg(long = "author-id", value_name = "ID")]
    pub author_id: Option<String>,

    /// Python interpreter used for compiling, or 'none'.
    #[arg(long = "interpreter", value_name = "PROGRAM")]
    pub interpreter: Option<String>,

    /// Python runtime of the game client (2.6 or 2.7).
    #[arg(long = "target-runtime", value_name = "VERSION")]
    pub target_runtime: Option<String>,
}

impl BuildArgs {
    #[must_use]
    pub fn project_dir(&self) -> &Path {
        self.project_dir.as_deref().unwrap_or_else(|| Path::new("."))
    }

    /// Config overrides set by flags, as `(key, value)` pairs.
    #[must_use]
    pub fn to_config_overrides(&self) -> Vec<(&'static str, String)> {
        let mut overrides = Vec::new();
        if let Some(ref dir) = self.dist_dir {
            overrides.push(("build.dist_dir", dir.display().to_string()));
        }
        if let Some(ref lib) = self.install_lib {
            overrides.push(("build.install_lib", lib.clone()));
        }
        if let Some(ref id) = self.author_id {
            overrides.push(("package.author_id", id.clone()));
        }
        if let Some(ref interpreter) = self.interpreter {
            overrides.push(("build.interpreter", interpreter.clone()));
        }
        if let Some(ref runtime) = self.target_runtime {
            overrides.push(("build.target_runtime", runtime.clone()));
        }
        overrides
    }
}
