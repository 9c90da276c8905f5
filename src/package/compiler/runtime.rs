// wotmod-rs: World of Tanks mod packager
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Target runtimes and their bytecode signatures.
//!
//! ```text
//! id    program     ext   magic
//! 2.6   python2.6   pyc   D1 F2 0D 0A
//! 2.7   python2.7   pyc   03 F3 0D 0A   (default, the game client's runtime)
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::ConfigError;

/// Script runtime the compiled bytecode must load in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum TargetRuntime {
    Python26,
    #[default]
    Python27,
}

impl TargetRuntime {
    pub const ALL: [Self; 2] = [Self::Python26, Self::Python27];

    /// Short identifier used in configuration (`2.7`).
    #[must_use]
    pub const fn id(self) -> &'static str {
        match self {
            Self::Python26 => "2.6",
            Self::Python27 => "2.7",
        }
    }

    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Python26 => "Python 2.6",
            Self::Python27 => "Python 2.7",
        }
    }

    /// Interpreter looked up on PATH when none is configured.
    #[must_use]
    pub const fn default_program(self) -> &'static str {
        match self {
            Self::Python26 => "python2.6",
            Self::Python27 => "python2.7",
        }
    }

    /// Extension of compiled artifacts, without the dot.
    #[must_use]
    pub const fn compiled_extension(self) -> &'static str {
        match self {
            Self::Python26 | Self::Python27 => "pyc",
        }
    }

    /// Leading bytes every compiled artifact for this runtime starts with.
    #[must_use]
    pub const fn magic(self) -> &'static [u8; 4] {
        match self {
            Self::Python26 => &[0xD1, 0xF2, 0x0D, 0x0A],
            Self::Python27 => &[0x03, 0xF3, 0x0D, 0x0A],
        }
    }
}

impl fmt::Display for TargetRuntime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

impl std::str::FromStr for TargetRuntime {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lowered = s.trim().to_ascii_lowercase();
        let version = lowered
            .strip_prefix("python")
            .or_else(|| lowered.strip_prefix("py"))
            .unwrap_or(&lowered)
            .trim();

        match version {
            "2.6" | "26" => Ok(Self::Python26),
            "2.7" | "27" => Ok(Self::Python27),
            _ => Err(ConfigError::InvalidValue {
                section: "build".to_string(),
                key: "target_runtime".to_string(),
                message: format!("unsupported target runtime '{s}', expected '2.6' or '2.7'"),
            }),
        }
    }
}

impl TryFrom<String> for TargetRuntime {
    type Error = ConfigError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<TargetRuntime> for String {
    fn from(runtime: TargetRuntime) -> Self {
        runtime.id().to_string()
    }
}
