// wotmod-rs: World of Tanks mod packager
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Error handling module.
//!
//! ```text
//!          WotmodError (~24 bytes)
//!                 |
//!   +------+------+------+------+------+
//!   |      |      |      |      |      |
//!   v      v      v      v      v      v
//! Bail  Package Config Proc    Fs   Io/Other
//!        Box     Box    Box    Box   Box<str>
//!
//! Sub-errors (unboxed internally):
//!   Package  MissingName, CompilerUnavailable, InvalidBytecode,
//!            InvalidArcname, DuplicateEntry
//!   Config   InvalidValue
//!   Process  ExecutableNotFound, SpawnFailed, NonZeroExit
//!   Fs       NotFound, IoError
//! ```

use thiserror::Error;

/// Convenience alias for `anyhow::Result`.
pub type Result<T> = anyhow::Result<T>;

/// Result type using [`WotmodError`].
pub type WotmodResult<T> = std::result::Result<T, WotmodError>;

/// Top-level application error type.
///
/// All sub-errors are boxed to keep this enum at ~24 bytes on the stack.
#[derive(Debug, Error)]
pub enum WotmodError {
    /// Fatal error that should terminate the application.
    #[error("fatal error: {0}")]
    Bailed(Box<str>),

    /// Packaging pipeline error.
    #[error("package error: {0}")]
    Package(#[from] Box<PackageError>),

    /// Configuration error.
    #[error("config error: {0}")]
    Config(#[from] Box<ConfigError>),

    /// Process execution error.
    #[error("process error: {0}")]
    Process(#[from] Box<ProcessError>),

    /// Filesystem error.
    #[error("filesystem error: {0}")]
    Fs(#[from] Box<FsError>),

    /// I/O error.
    #[error("io error: {0}")]
    Io(Box<std::io::Error>),

    /// Generic error with message.
    #[error("{0}")]
    Other(Box<str>),
}

/// Create a fatal [`WotmodError::Bailed`] that terminates the application.
pub fn bail_out(message: impl Into<String>) -> WotmodError {
    WotmodError::Bailed(message.into().into_boxed_str())
}

macro_rules! impl_from_boxed {
    ($($error:ty => $variant:ident),+ $(,)?) => {
        $(
            impl From<$error> for WotmodError {
                fn from(err: $error) -> Self {
                    WotmodError::$variant(Box::new(err))
                }
            }
        )+
    };
}

impl_from_boxed! {
    PackageError => Package,
    ConfigError => Config,
    ProcessError => Process,
    FsError => Fs,
    std::io::Error => Io,
}

// --- Package Errors ---

/// Errors raised by the archive-construction pipeline.
#[derive(Debug, Error)]
pub enum PackageError {
    /// The package has no name, so no identity can be derived.
    #[error("package name is empty; set package.name")]
    MissingName,

    /// No compiler is available for the target runtime.
    #[error("cannot compile scripts: no compiler available for {runtime}")]
    CompilerUnavailable { runtime: String },

    /// A compiled artifact does not carry the runtime's magic header.
    #[error("{file} is not a valid compiled file for the target runtime {runtime}")]
    InvalidBytecode { file: String, runtime: String },

    /// An archive path is malformed.
    #[error("invalid archive path '{arcname}': {reason}")]
    InvalidArcname { arcname: String, reason: String },

    /// Two inputs map to the same archive path.
    #[error("duplicate archive entry: {arcname}")]
    DuplicateEntry { arcname: String },
}

// --- Config Errors ---

/// Configuration-related errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Invalid configuration value.
    #[error("invalid value for '{key}' in section '[{section}]': {message}")]
    InvalidValue {
        section: String,
        key: String,
        message: String,
    },
}

// --- Process Errors ---

/// Process execution errors.
#[derive(Debug, Error)]
pub enum ProcessError {
    /// Executable not found in PATH.
    #[error("executable not found: '{name}' (not in PATH)")]
    ExecutableNotFound { name: String },

    /// Failed to spawn process.
    #[error("failed to spawn process '{command}': {source}")]
    SpawnFailed {
        command: String,
        #[source]
        source: std::io::Error,
    },

    /// Process exited with non-zero status.
    #[error("process '{command}' exited with code {code}")]
    NonZeroExit { command: String, code: i32 },
}

// --- Filesystem Errors ---

/// Filesystem operation errors.
#[derive(Debug, Error)]
pub enum FsError {
    /// Path not found.
    #[error("path not found: {0}")]
    NotFound(String),

    /// General I/O error.
    #[error("I/O error on '{path}': {source}")]
    IoError {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

impl FsError {
    /// Classifies an I/O error raised while touching `path`.
    #[must_use]
    pub fn from_io(path: &std::path::Path, source: std::io::Error) -> Self {
        if source.kind() == std::io::ErrorKind::NotFound {
            Self::NotFound(path.display().to_string())
        } else {
            Self::IoError {
                path: path.display().to_string(),
                source,
            }
        }
    }
}

#[cfg(test)]
mod tests;
