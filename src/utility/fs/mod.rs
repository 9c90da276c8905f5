// wotmod-rs: World of Tanks mod packager
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Filesystem utilities.
//!
//! ```text
//! walk:    find_files_with_extension()  ignore::WalkBuilder, sorted
//!          WalkOptions                  max_depth, hidden, gitignore, skip_dirs
//! atomic:  write_atomic()               NamedTempFile + persist (rename)
//! ```

pub mod atomic;
pub mod walk;
