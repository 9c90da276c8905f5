// wotmod-rs: World of Tanks mod packager
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Build and output-path command implementations.
//!
//! ```text
//! Config + project dir
//!   files.scripts     --> ScriptMapping(<file name>)
//!   files.packages    --> walk *.py --> ScriptMapping(<pkg>/<relative>)
//!   files.data_files  --> DataFileMapping
//!   files.data_dirs   --> DataFileMapping(in_dir)
//!        |
//!        v
//!   BuildPlan --> build_package --> <dist>/<identity>_<version>.wotmod
//! ```

use std::path::{Path, PathBuf};
use std::sync::Arc;

use tracing::{debug, info};

use crate::cli::build::BuildArgs;
use crate::config::Config;
use crate::error::{FsError, Result};
use crate::package::compiler::{BytecodeCompiler, InterpreterCompiler};
use crate::package::orchestrator::{build_package, planned_output_path};
use crate::package::{BuildPlan, DataFileMapping, PackageMetadata, ScriptMapping};
use crate::utility::fs::walk::{WalkOptions, find_files_with_extension};

/// Main handler for the build command.
///
/// # Errors
///
/// Returns an error if input discovery fails or the build fails.
pub async fn run_build_command(args: &BuildArgs, config: &Config) -> Result<()> {
    let plan = plan_from_config(config, args.project_dir())?;
    let compiler = create_compiler(config);

    let report = build_package(plan, compiler).await?;
    info!(
        identity = %report.identity,
        version = %report.version,
        entries = report.entries.len(),
        "Build completed successfully"
    );
    println!("{}", report.archive_path.display());
    Ok(())
}

/// Prints the archive path a build would write. Touches no files.
///
/// # Errors
///
/// Returns an error if the package has no name.
pub fn run_output_path_command(args: &BuildArgs, config: &Config) -> Result<()> {
    let plan = BuildPlan::builder()
        .metadata(metadata_from_config(config))
        .project_dir(args.project_dir())
        .dist_dir(config.build.dist_dir.clone())
        .build();
    println!("{}", planned_output_path(&plan)?.display());
    Ok(())
}

#[must_use]
pub fn metadata_from_config(config: &Config) -> PackageMetadata {
    PackageMetadata {
        name: config.package.name.clone(),
        author_id: config.package.effective_author_id().to_string(),
        version: config.package.version.clone(),
        description: config.package.description.clone(),
    }
}

/// Turns the configured inputs into a [`BuildPlan`].
///
/// # Errors
///
/// Returns `FsError::NotFound` if a configured package directory is missing.
pub fn plan_from_config(config: &Config, project_dir: &Path) -> Result<BuildPlan> {
    let mut scripts: Vec<ScriptMapping> = config
        .files
        .scripts
        .iter()
        .map(|source| ScriptMapping::new(source, file_name(source)))
        .collect();
    for package in &config.files.packages {
        scripts.extend(package_scripts(project_dir, package)?);
    }

    let mut data_files: Vec<DataFileMapping> = config
        .files
        .data_files
        .iter()
        .map(DataFileMapping::new)
        .collect();
    for (dir, files) in &config.files.data_dirs {
        data_files.extend(files.iter().map(|f| DataFileMapping::new(f).in_dir(dir.clone())));
    }

    debug!(
        scripts = scripts.len(),
        data_files = data_files.len(),
        "resolved package inputs"
    );

    Ok(BuildPlan::builder()
        .metadata(metadata_from_config(config))
        .project_dir(project_dir)
        .dist_dir(config.build.dist_dir.clone())
        .scripts_root(config.build.install_lib.clone())
        .target_runtime(config.build.target_runtime)
        .scripts(scripts)
        .data_files(data_files)
        .build())
}

/// `None` when compilation is disabled or no interpreter was found.
#[must_use]
pub fn create_compiler(config: &Config) -> Option<Arc<dyn BytecodeCompiler>> {
    let runtime = config.build.target_runtime;
    let compiler =
        InterpreterCompiler::from_setting(&config.build.interpreter_setting(), runtime)?;
    debug!(interpreter = %compiler.interpreter().display(), runtime = %runtime, "using interpreter");
    Some(Arc::new(compiler))
}

/// Every `*.py` below `package`, installed as `<package name>/<relative path>`.
fn package_scripts(project_dir: &Path, package: &Path) -> Result<Vec<ScriptMapping>> {
    let root = project_dir.join(package);
    if !root.is_dir() {
        return Err(FsError::NotFound(root.display().to_string()).into());
    }
    let package_name = file_name(package);

    let files = find_files_with_extension(&root, "py", &WalkOptions::for_script_sources())?;
    Ok(files
        .into_iter()
        .map(|file| {
            let relative = file
                .strip_prefix(&root)
                .map_or_else(|_| PathBuf::from(file_name(&file)), Path::to_path_buf);
            let relative = relative.to_string_lossy().replace('\\', "/");
            let install_path = if package_name.is_empty() {
                relative
            } else {
                format!("{package_name}/{relative}")
            };
            ScriptMapping::new(file, install_path)
        })
        .collect())
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default()
}
