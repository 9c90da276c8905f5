// wotmod-rs: World of Tanks mod packager
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Version normalization.
//!
//! ```text
//! "0.1.2-rc1" --split '.'--> ["0", "1", "2-rc1"]
//!   leading digits:            0    1    2  (stop: "-rc1")
//!   --> 00.01.02
//! None / "" / "dev"        --> 00.00.00
//! ```

use std::fmt;

/// Three-field numeric version used in archive names and `meta.xml`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct NormalizedVersion {
    pub major: u32,
    pub minor: u32,
    pub patch: u32,
}

impl NormalizedVersion {
    #[must_use]
    pub const fn new(major: u32, minor: u32, patch: u32) -> Self {
        Self {
            major,
            minor,
            patch,
        }
    }

    /// Parses a free-form version string. Never fails.
    ///
    /// Up to three dot-separated components are read. Each contributes its
    /// leading run of ASCII digits; the first non-digit character ends
    /// processing, so pre-release and build suffixes are dropped. Missing
    /// components are zero.
    #[must_use]
    pub fn parse(raw: Option<&str>) -> Self {
        let mut fields = [0u32; 3];

        if let Some(raw) = raw {
            for (slot, component) in fields.iter_mut().zip(raw.trim().split('.')) {
                let digits_end = component
                    .find(|c: char| !c.is_ascii_digit())
                    .unwrap_or(component.len());
                *slot = parse_saturating(&component[..digits_end]);
                if digits_end < component.len() || digits_end == 0 {
                    break;
                }
            }
        }

        let [major, minor, patch] = fields;
        Self::new(major, minor, patch)
    }
}

fn parse_saturating(digits: &str) -> u32 {
    if digits.is_empty() {
        return 0;
    }
    digits.parse().unwrap_or(u32::MAX)
}

impl fmt::Display for NormalizedVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}.{:02}.{:02}", self.major, self.minor, self.patch)
    }
}

#[cfg(test)]
mod tests;
