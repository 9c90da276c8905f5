// wotmod-rs: World of Tanks mod packager
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Script compilation and bytecode validation.
//!
//! ```text
//! InterpreterSetting  "none" | "" | program/path
//!        | resolve()
//!        v
//! InterpreterCompiler  <python> -c py_compile <src> <tmp.pyc> <arcname>
//!        | compile()
//!        v
//! validate_bytecode()  bytes[..4] == TargetRuntime::magic()
//! ```
//!
//! The game client refuses bytecode from any other interpreter version, so a
//! mismatched header is a hard error rather than a warning.

mod runtime;

pub use runtime::TargetRuntime;

use std::path::{Path, PathBuf};

use anyhow::Context;
use futures_util::future::BoxFuture;
use tracing::debug;

use crate::core::process::builder::{ProcessBuilder, ProcessFlags};
use crate::error::{PackageError, Result};

/// Compiles with `py_compile`, embedding `argv[3]` as the code object's filename.
const PY_COMPILE_SNIPPET: &str =
    "import py_compile, sys; py_compile.compile(sys.argv[1], sys.argv[2], sys.argv[3], True)";

/// Turns one script source into the runtime's compiled form.
pub trait BytecodeCompiler: Send + Sync {
    /// Runtime the produced bytecode targets.
    fn runtime(&self) -> TargetRuntime;

    /// Compiles `source` and returns the artifact bytes.
    ///
    /// `arcname` is the script's path inside the archive.
    fn compile<'a>(&'a self, source: &'a Path, arcname: &'a str) -> BoxFuture<'a, Result<Vec<u8>>>;
}

/// How the interpreter for the target runtime is chosen.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum InterpreterSetting {
    /// Look up the runtime's default program on PATH.
    #[default]
    Default,
    /// Compilation explicitly switched off.
    Disabled,
    /// A program name or path.
    Program(String),
}

impl InterpreterSetting {
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        let raw = raw.trim();
        if raw.is_empty() {
            Self::Default
        } else if raw.eq_ignore_ascii_case("none") {
            Self::Disabled
        } else {
            Self::Program(raw.to_string())
        }
    }

    /// Resolves the interpreter executable, `None` when disabled or not found.
    #[must_use]
    pub fn resolve(&self, runtime: TargetRuntime) -> Option<PathBuf> {
        let program = match self {
            Self::Disabled => return None,
            Self::Default => runtime.default_program(),
            Self::Program(program) => program.as_str(),
        };
        let found = ProcessBuilder::find(program);
        if found.is_none() {
            debug!(program, runtime = %runtime, "interpreter not found");
        }
        found
    }
}

/// Compiles scripts by running an external interpreter.
#[derive(Debug, Clone)]
pub struct InterpreterCompiler {
    interpreter: PathBuf,
    runtime: TargetRuntime,
}

impl InterpreterCompiler {
    #[must_use]
    pub fn new(interpreter: impl Into<PathBuf>, runtime: TargetRuntime) -> Self {
        Self {
            interpreter: interpreter.into(),
            runtime,
        }
    }

    /// Builds a compiler from the configured setting, `None` if unavailable.
    #[must_use]
    pub fn from_setting(setting: &InterpreterSetting, runtime: TargetRuntime) -> Option<Self> {
        setting
            .resolve(runtime)
            .map(|interpreter| Self::new(interpreter, runtime))
    }

    #[must_use]
    pub fn interpreter(&self) -> &Path {
        &self.interpreter
    }

    async fn compile_to_bytes(&self, source: &Path, arcname: &str) -> Result<Vec<u8>> {
        let staging = tempfile::tempdir().context("failed to create compiler staging directory")?;
        let output = staging
            .path()
            .join(format!("module.{}", self.runtime.compiled_extension()));

        let result = ProcessBuilder::new(&self.interpreter)
            .arg("-c")
            .arg(PY_COMPILE_SNIPPET)
            .arg(source)
            .arg(&output)
            .arg(arcname)
            .capture_stderr()
            .flag(ProcessFlags::ALLOW_FAILURE)
            .run()
            .await
            .with_context(|| format!("failed to compile {}", source.display()))?;
        if !result.success() {
            anyhow::bail!(
                "failed to compile {}: interpreter exited with code {}: {}",
                source.display(),
                result.exit_code(),
                result.stderr().trim()
            );
        }

        tokio::fs::read(&output).await.with_context(|| {
            format!(
                "compiler produced no output for {} at {}",
                source.display(),
                output.display()
            )
        })
    }
}

impl BytecodeCompiler for InterpreterCompiler {
    fn runtime(&self) -> TargetRuntime {
        self.runtime
    }

    fn compile<'a>(&'a self, source: &'a Path, arcname: &'a str) -> BoxFuture<'a, Result<Vec<u8>>> {
        Box::pin(self.compile_to_bytes(source, arcname))
    }
}

/// Checks that `bytes` carry the magic header of `runtime`.
///
/// # Errors
///
/// Returns `PackageError::InvalidBytecode` naming `source` on mismatch.
pub fn validate_bytecode(
    source: &Path,
    bytes: &[u8],
    runtime: TargetRuntime,
) -> std::result::Result<(), PackageError> {
    if bytes.starts_with(runtime.magic()) {
        Ok(())
    } else {
        Err(PackageError::InvalidBytecode {
            file: source.display().to_string(),
            runtime: runtime.display_name().to_string(),
        })
    }
}

/// Compiles `source` and validates the result.
///
/// # Errors
///
/// Propagates compiler failures and `PackageError::InvalidBytecode`.
pub async fn compile_checked(
    compiler: &dyn BytecodeCompiler,
    source: &Path,
    arcname: &str,
) -> Result<Vec<u8>> {
    let bytes = compiler.compile(source, arcname).await?;
    validate_bytecode(source, &bytes, compiler.runtime())?;
    debug!(source = %source.display(), size = bytes.len(), "compiled");
    Ok(bytes)
}

/// Archive path of the compiled sibling of `arcname` (`a/foo.py` -> `a/foo.pyc`).
#[must_use]
pub fn compiled_arcname(arcname: &str, runtime: TargetRuntime) -> String {
    let file_start = arcname.rfind('/').map_or(0, |i| i + 1);
    let stem_end = arcname[file_start..]
        .rfind('.')
        .filter(|&dot| dot > 0)
        .map_or(arcname.len(), |dot| file_start + dot);
    format!("{}.{}", &arcname[..stem_end], runtime.compiled_extension())
}
