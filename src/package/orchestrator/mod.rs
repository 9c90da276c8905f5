// wotmod-rs: World of Tanks mod packager
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Build sequencing.
//!
//! ```text
//! Initialized
//!   --> IdentityResolved   author_id + name
//!   --> VersionResolved    normalized version, output path
//!   --> ScriptsCompiled    compile + magic check per script
//!   --> LayoutAssembled    entries + meta.xml
//!   --> Written            temp file renamed over the output path
//!
//! any error --> Failed  (nothing written at the output path)
//! ```

use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::Context;
use tracing::{debug, error, info, warn};

use super::BuildPlan;
use super::compiler::{BytecodeCompiler, compile_checked, compiled_arcname};
use super::identity::{PackageIdentity, output_file_path};
use super::layout::{ArchiveLayout, PASS_THROUGH_FILES};
use super::meta::{META_ARCNAME, MetaDescriptor};
use super::version::NormalizedVersion;
use crate::error::{FsError, PackageError, Result};
use crate::utility::fs::atomic::write_atomic;

/// Pipeline position of a [`PackageOrchestrator`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BuildState {
    Initialized,
    IdentityResolved,
    VersionResolved,
    ScriptsCompiled,
    LayoutAssembled,
    Written,
    Failed,
}

impl BuildState {
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Written | Self::Failed)
    }
}

/// Outcome of a successful build.
#[derive(Debug, Clone)]
pub struct BuildReport {
    pub archive_path: PathBuf,
    pub identity: PackageIdentity,
    pub version: NormalizedVersion,
    /// Archive member names in write order.
    pub entries: Vec<String>,
}

struct CompiledScript {
    arcname: String,
    compiled_arcname: String,
    source: Vec<u8>,
    bytecode: Vec<u8>,
}

/// Runs one build of a [`BuildPlan`].
///
/// `compiler` is `None` when no compiler for the target runtime is
/// available; such a build fails as soon as it has scripts to compile.
pub struct PackageOrchestrator {
    plan: BuildPlan,
    compiler: Option<Arc<dyn BytecodeCompiler>>,
    state: BuildState,
}

impl PackageOrchestrator {
    #[must_use]
    pub fn new(plan: BuildPlan, compiler: Option<Arc<dyn BytecodeCompiler>>) -> Self {
        Self {
            plan,
            compiler,
            state: BuildState::Initialized,
        }
    }

    #[must_use]
    pub const fn state(&self) -> BuildState {
        self.state
    }

    #[must_use]
    pub const fn plan(&self) -> &BuildPlan {
        &self.plan
    }

    /// Runs every stage in order.
    ///
    /// # Errors
    ///
    /// Returns the first stage error; the state is then [`BuildState::Failed`].
    /// Running an orchestrator that already finished is also an error.
    pub async fn run(&mut self) -> Result<BuildReport> {
        if self.state.is_terminal() {
            anyhow::bail!("build already finished ({:?})", self.state);
        }

        match self.execute().await {
            Ok(report) => Ok(report),
            Err(e) => {
                error!(stage = ?self.state, error = %format!("{e:#}"), "build failed");
                self.transition(BuildState::Failed);
                Err(e)
            }
        }
    }

    fn transition(&mut self, next: BuildState) {
        debug!(from = ?self.state, to = ?next, "build state");
        self.state = next;
    }

    async fn execute(&mut self) -> Result<BuildReport> {
        let metadata = self.plan.metadata();
        let identity = PackageIdentity::resolve(&metadata.author_id, &metadata.name)?;
        self.transition(BuildState::IdentityResolved);

        let version = NormalizedVersion::parse(self.plan.metadata().version.as_deref());
        let archive_path = output_file_path(&self.resolved_dist_dir(), &identity, &version);
        self.transition(BuildState::VersionResolved);
        info!(identity = %identity, version = %version, archive = %archive_path.display(), "packaging");

        let scripts = self.compile_scripts().await?;
        self.transition(BuildState::ScriptsCompiled);

        let layout = self.assemble_layout(&identity, &version, scripts).await?;
        let bytes = layout.to_zip_bytes()?;
        let entries: Vec<String> = layout.entries().into_iter().map(|e| e.arcname).collect();
        self.transition(BuildState::LayoutAssembled);

        let target = archive_path.clone();
        tokio::task::spawn_blocking(move || write_atomic(&target, &bytes))
            .await
            .context("archive writer task panicked")??;
        self.transition(BuildState::Written);
        info!(archive = %archive_path.display(), entries = entries.len(), "archive written");

        Ok(BuildReport {
            archive_path,
            identity,
            version,
            entries,
        })
    }

    fn resolved_dist_dir(&self) -> PathBuf {
        self.plan.project_dir().join(self.plan.dist_dir())
    }

    async fn compile_scripts(&self) -> Result<Vec<CompiledScript>> {
        if self.plan.scripts().is_empty() {
            return Ok(Vec::new());
        }

        let runtime = self.plan.target_runtime();
        let Some(compiler) = self.compiler.as_deref() else {
            return Err(PackageError::CompilerUnavailable {
                runtime: runtime.display_name().to_string(),
            }
            .into());
        };
        if compiler.runtime() != runtime {
            anyhow::bail!(
                "compiler targets {} but the package targets {runtime}",
                compiler.runtime()
            );
        }

        let scripts_root = self.plan.scripts_root();
        let mut compiled = Vec::with_capacity(self.plan.scripts().len());
        for mapping in self.plan.scripts() {
            let arcname = join_arcname(scripts_root, &mapping.install_path);
            let source_path = self.plan.source_path(&mapping.source);
            let source = tokio::fs::read(&source_path)
                .await
                .map_err(|e| FsError::from_io(&source_path, e))?;
            let bytecode = compile_checked(compiler, &source_path, &arcname).await?;

            compiled.push(CompiledScript {
                compiled_arcname: compiled_arcname(&arcname, runtime),
                arcname,
                source,
                bytecode,
            });
        }
        Ok(compiled)
    }

    async fn assemble_layout(
        &self,
        identity: &PackageIdentity,
        version: &NormalizedVersion,
        scripts: Vec<CompiledScript>,
    ) -> Result<ArchiveLayout> {
        let mut layout = ArchiveLayout::new();
        let metadata = self.plan.metadata();

        for name in PASS_THROUGH_FILES {
            let path = self.plan.project_dir().join(name);
            match read_optional(&path).await? {
                Some(contents) => layout.add_file(name, contents)?,
                None => debug!(file = name, "not present, skipped"),
            }
        }

        let meta = MetaDescriptor::new(identity, version, &metadata.name, &metadata.description);
        layout.add_file(META_ARCNAME, meta.to_xml()?.into_bytes())?;

        for script in scripts {
            layout.add_file(script.arcname, script.source)?;
            layout.add_file(script.compiled_arcname, script.bytecode)?;
        }

        let data_root = identity.mod_data_root();
        for data in self.plan.data_files() {
            let path = self.plan.source_path(&data.source);
            let Some(file_name) = data.source.file_name() else {
                return Err(PackageError::InvalidArcname {
                    arcname: data.source.display().to_string(),
                    reason: "data file path has no file name".to_string(),
                }
                .into());
            };
            let Some(contents) = read_optional(&path).await? else {
                warn!(file = %path.display(), "data file not found, skipped");
                continue;
            };

            let file_name = file_name.to_string_lossy();
            let dir = data.target_dir.trim_matches('/');
            let arcname = if dir.is_empty() {
                format!("{data_root}{file_name}")
            } else {
                format!("{data_root}{dir}/{file_name}")
            };
            layout.add_file(arcname, contents)?;
        }

        Ok(layout)
    }
}

/// Resolves where a plan's archive would be written, without any I/O.
///
/// # Errors
///
/// Returns `PackageError::MissingName` if the package has no name.
pub fn planned_output_path(plan: &BuildPlan) -> std::result::Result<PathBuf, PackageError> {
    let metadata = plan.metadata();
    let identity = PackageIdentity::resolve(&metadata.author_id, &metadata.name)?;
    let version = NormalizedVersion::parse(metadata.version.as_deref());
    Ok(output_file_path(
        &plan.project_dir().join(plan.dist_dir()),
        &identity,
        &version,
    ))
}

/// Builds `plan` in one call.
///
/// # Errors
///
/// See [`PackageOrchestrator::run`].
pub async fn build_package(
    plan: BuildPlan,
    compiler: Option<Arc<dyn BytecodeCompiler>>,
) -> Result<BuildReport> {
    PackageOrchestrator::new(plan, compiler).run().await
}

fn join_arcname(root: &str, relative: &str) -> String {
    let relative = relative.trim_start_matches('/');
    if root.is_empty() {
        relative.to_string()
    } else {
        format!("{root}/{relative}")
    }
}

/// Reads a file that may legitimately be absent.
async fn read_optional(path: &Path) -> Result<Option<Vec<u8>>> {
    match tokio::fs::read(path).await {
        Ok(contents) => Ok(Some(contents)),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
        Err(e) => Err(FsError::from_io(path, e).into()),
    }
}
