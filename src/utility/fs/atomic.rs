// wotmod-rs: World of Tanks mod packager
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use std::io::Write;
use std::path::Path;

use anyhow::Context;
use tempfile::NamedTempFile;

use crate::error::Result;

/// Writes `contents` to `path` through a sibling temp file and a rename.
///
/// Readers never observe a partially written file at `path`; an existing
/// file is replaced. The parent directory is created if needed.
///
/// # Errors
///
/// Returns an error if the directory, temp file, write or rename fails.
pub fn write_atomic(path: &Path, contents: &[u8]) -> Result<()> {
    let parent = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    std::fs::create_dir_all(parent)
        .with_context(|| format!("failed to create directory {}", parent.display()))?;

    let mut staged = NamedTempFile::new_in(parent)
        .with_context(|| format!("failed to create temp file in {}", parent.display()))?;
    staged
        .write_all(contents)
        .and_then(|()| staged.as_file().sync_all())
        .with_context(|| format!("failed to write {}", staged.path().display()))?;

    // Dropping a NamedTempFile on error removes it
    staged
        .persist(path)
        .with_context(|| format!("failed to move archive into place at {}", path.display()))?;
    Ok(())
}
