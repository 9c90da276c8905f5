// wotmod-rs: World of Tanks mod packager
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! The `.wotmod` archive pipeline.
//!
//! ```text
//! BuildPlan (metadata, mappings, dirs, runtime)
//!     |
//!     v
//! PackageOrchestrator::run
//!   identity  --> version --> output path
//!   compiler  --> compile + validate each script
//!   layout    --> README/LICENSE/CHANGES, meta.xml,
//!                 <scripts root>/*.py + *.pyc,
//!                 res/mods/<identity>/<data>
//!   write     --> temp file + rename into dist dir
//! ```
//!
//! # Archive Layout
//!
//! ```text
//! meta.xml
//! README  LICENSE  CHANGES          (only if present)
//! res/scripts/common/foo.py
//! res/scripts/common/foo.pyc
//! res/mods/com.github.jhakonen.foo/datafile
//! ```

pub mod compiler;
pub mod identity;
pub mod layout;
pub mod meta;
pub mod orchestrator;
pub mod version;

use std::path::PathBuf;

use bon::Builder;

use compiler::TargetRuntime;

/// Default archive directory for compiled scripts.
pub const DEFAULT_SCRIPTS_ROOT: &str = "res/scripts/common";

/// Identity and description of the package being built.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PackageMetadata {
    pub name: String,
    pub author_id: String,
    /// Raw version string; normalized during the build.
    pub version: Option<String>,
    pub description: String,
}

/// A script source and its path below the scripts root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScriptMapping {
    pub source: PathBuf,
    /// Forward-slash path relative to the scripts root, e.g. `pkg/foo.py`.
    pub install_path: String,
}

impl ScriptMapping {
    pub fn new(source: impl Into<PathBuf>, install_path: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            install_path: install_path.into(),
        }
    }
}

/// A data file placed under `res/mods/<identity>/`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataFileMapping {
    pub source: PathBuf,
    /// Subdirectory below the identity root; empty for the root itself.
    pub target_dir: String,
}

impl DataFileMapping {
    pub fn new(source: impl Into<PathBuf>) -> Self {
        Self {
            source: source.into(),
            target_dir: String::new(),
        }
    }

    #[must_use]
    pub fn in_dir(mut self, target_dir: impl Into<String>) -> Self {
        self.target_dir = target_dir.into();
        self
    }
}

/// Everything one build needs. Immutable once built.
///
/// Relative `source` paths in mappings are resolved against `project_dir`.
#[derive(Debug, Clone, Builder)]
pub struct BuildPlan {
    metadata: PackageMetadata,
    #[builder(into)]
    project_dir: PathBuf,
    #[builder(into)]
    dist_dir: PathBuf,
    #[builder(into, default = DEFAULT_SCRIPTS_ROOT.to_string())]
    scripts_root: String,
    #[builder(default)]
    target_runtime: TargetRuntime,
    #[builder(default)]
    scripts: Vec<ScriptMapping>,
    #[builder(default)]
    data_files: Vec<DataFileMapping>,
}

impl BuildPlan {
    #[must_use]
    pub const fn metadata(&self) -> &PackageMetadata {
        &self.metadata
    }

    #[must_use]
    pub const fn project_dir(&self) -> &PathBuf {
        &self.project_dir
    }

    #[must_use]
    pub const fn dist_dir(&self) -> &PathBuf {
        &self.dist_dir
    }

    /// Scripts root without surrounding slashes.
    #[must_use]
    pub fn scripts_root(&self) -> &str {
        self.scripts_root.trim_matches('/')
    }

    #[must_use]
    pub const fn target_runtime(&self) -> TargetRuntime {
        self.target_runtime
    }

    #[must_use]
    pub fn scripts(&self) -> &[ScriptMapping] {
        &self.scripts
    }

    #[must_use]
    pub fn data_files(&self) -> &[DataFileMapping] {
        &self.data_files
    }

    /// Resolves a mapping source against the project directory.
    #[must_use]
    pub fn source_path(&self, source: &std::path::Path) -> PathBuf {
        self.project_dir.join(source)
    }
}
