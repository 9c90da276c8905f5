// wotmod-rs: World of Tanks mod packager
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Archive layout and zip emission.
//!
//! ```text
//! add_file("res/scripts/common/foo.py")
//! add_file("res/mods/x.foo/datafile")
//!        |
//!        v
//! entries()
//!   res/                      dir   (depth 1)
//!   res/mods/                 dir   (depth 2)
//!   res/scripts/              dir
//!   res/mods/x.foo/           dir   (depth 3)
//!   res/scripts/common/       dir
//!   res/scripts/common/foo.py file  (insertion order)
//!   res/mods/x.foo/datafile   file
//!        |
//!        v
//! to_zip_bytes()  dirs: stored, S_IFDIR|0755   files: deflate, 0644
//!                 every entry stamped 1980-01-01 00:00 (reproducible)
//! ```

use std::collections::BTreeSet;
use std::io::{Cursor, Write};

use anyhow::Context;
use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, DateTime, ZipWriter};

use crate::error::{PackageError, Result};

/// Top-level files copied to the archive root when present in the project.
pub const PASS_THROUGH_FILES: [&str; 3] = ["README", "LICENSE", "CHANGES"];

/// One zip member. Directory arcnames end with `/` and have no contents.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArchiveEntry {
    pub arcname: String,
    pub contents: Option<Vec<u8>>,
}

impl ArchiveEntry {
    #[must_use]
    pub const fn is_directory(&self) -> bool {
        self.contents.is_none()
    }

    fn directory(arcname: String) -> Self {
        Self {
            arcname,
            contents: None,
        }
    }
}

/// Ordered set of files to archive; directories are derived.
#[derive(Debug, Default)]
pub struct ArchiveLayout {
    files: Vec<ArchiveEntry>,
    names: BTreeSet<String>,
}

impl ArchiveLayout {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a file at `arcname`.
    ///
    /// # Errors
    ///
    /// Returns `PackageError::InvalidArcname` for malformed paths and
    /// `PackageError::DuplicateEntry` if `arcname` was already added.
    pub fn add_file(
        &mut self,
        arcname: impl Into<String>,
        contents: Vec<u8>,
    ) -> std::result::Result<(), PackageError> {
        let arcname = arcname.into();
        validate_arcname(&arcname)?;
        if !self.names.insert(arcname.clone()) {
            return Err(PackageError::DuplicateEntry { arcname });
        }
        self.files.push(ArchiveEntry {
            arcname,
            contents: Some(contents),
        });
        Ok(())
    }

    #[must_use]
    pub fn file_count(&self) -> usize {
        self.files.len()
    }

    /// Every ancestor directory of every file, once, parents before children.
    #[must_use]
    pub fn directories(&self) -> Vec<String> {
        let mut dirs: Vec<String> = self
            .files
            .iter()
            .flat_map(|entry| ancestor_dirs(&entry.arcname))
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect();
        dirs.sort_by(|a, b| depth(a).cmp(&depth(b)).then_with(|| a.cmp(b)));
        dirs
    }

    /// Complete entry list: directories first, then files in insertion order.
    #[must_use]
    pub fn entries(&self) -> Vec<ArchiveEntry> {
        self.directories()
            .into_iter()
            .map(ArchiveEntry::directory)
            .chain(self.files.iter().cloned())
            .collect()
    }

    /// Writes the layout as an in-memory zip archive.
    ///
    /// # Errors
    ///
    /// Returns an error if the zip writer fails.
    pub fn to_zip_bytes(&self) -> Result<Vec<u8>> {
        let mut writer = ZipWriter::new(Cursor::new(Vec::new()));
        let base = SimpleFileOptions::default().last_modified_time(DateTime::default());
        let dir_options = base.unix_permissions(0o755);
        let file_options = base
            .compression_method(CompressionMethod::Deflated)
            .unix_permissions(0o644);

        for dir in self.directories() {
            writer
                .add_directory(dir.as_str(), dir_options)
                .with_context(|| format!("failed to add directory {dir}"))?;
        }

        for entry in &self.files {
            writer
                .start_file(entry.arcname.as_str(), file_options)
                .with_context(|| format!("failed to add file {}", entry.arcname))?;
            if let Some(contents) = &entry.contents {
                writer
                    .write_all(contents)
                    .with_context(|| format!("failed to write {}", entry.arcname))?;
            }
        }

        let cursor = writer.finish().context("failed to finalize archive")?;
        Ok(cursor.into_inner())
    }
}

/// `a/b/c.txt` -> `["a/", "a/b/"]`
fn ancestor_dirs(arcname: &str) -> impl Iterator<Item = String> + '_ {
    arcname
        .match_indices('/')
        .map(move |(i, _)| arcname[..=i].to_string())
}

fn depth(dir: &str) -> usize {
    dir.matches('/').count()
}

fn validate_arcname(arcname: &str) -> std::result::Result<(), PackageError> {
    let invalid = |reason: &str| PackageError::InvalidArcname {
        arcname: arcname.to_string(),
        reason: reason.to_string(),
    };

    if arcname.is_empty() {
        return Err(invalid("empty path"));
    }
    if arcname.contains('\\') {
        return Err(invalid("backslash separator"));
    }
    if arcname.starts_with('/') {
        return Err(invalid("absolute path"));
    }
    if arcname.ends_with('/') {
        return Err(invalid("file path ends with '/'"));
    }
    if arcname
        .split('/')
        .any(|part| part.is_empty() || part == "." || part == "..")
    {
        return Err(invalid("empty, '.' or '..' component"));
    }
    Ok(())
}
