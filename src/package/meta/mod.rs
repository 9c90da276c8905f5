// wotmod-rs: World of Tanks mod packager
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! `meta.xml` descriptor read by the game's mod loader.
//!
//! ```text
//! <root>
//!   <id>com.github.jhakonen.foo</id>
//!   <version>00.01.00</version>
//!   <name>foo</name>
//!   <description>has cool stuff</description>
//! </root>
//! ```

use anyhow::Context;
use serde::{Deserialize, Serialize};

use super::identity::PackageIdentity;
use super::version::NormalizedVersion;
use crate::error::Result;

/// Archive path of the descriptor.
pub const META_ARCNAME: &str = "meta.xml";

/// Field order here is the element order in the document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename = "root")]
pub struct MetaDescriptor {
    pub id: String,
    pub version: String,
    pub name: String,
    pub description: String,
}

impl MetaDescriptor {
    #[must_use]
    pub fn new(
        identity: &PackageIdentity,
        version: &NormalizedVersion,
        name: &str,
        description: &str,
    ) -> Self {
        Self {
            id: identity.to_string(),
            version: version.to_string(),
            name: name.to_string(),
            description: description.to_string(),
        }
    }

    /// Renders the UTF-8 XML document.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_xml(&self) -> Result<String> {
        let mut document = String::new();
        let mut serializer = quick_xml::se::Serializer::new(&mut document);
        serializer.indent(' ', 2);
        self.serialize(serializer)
            .context("failed to serialize meta.xml")?;
        document.push('\n');
        Ok(document)
    }

    /// Parses a descriptor back from XML.
    ///
    /// # Errors
    ///
    /// Returns an error if `xml` is not a well-formed descriptor.
    pub fn from_xml(xml: &str) -> Result<Self> {
        quick_xml::de::from_str(xml).context("failed to parse meta.xml")
    }
}
