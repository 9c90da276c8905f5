// wotmod-rs: World of Tanks mod packager
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Core infrastructure.
//!
//! ```text
//! process   async process spawning (script compiler invocation)
//! ```

pub mod process;
