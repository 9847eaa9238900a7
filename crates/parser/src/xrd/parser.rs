//! XRD document loader

use super::types::CompositeResourceDefinition;
use serde::Deserialize;
use std::fs;
use std::path::Path;
use tracing::debug;
use xrd_openapi_common::{Result, XrdError};

/// Composite resource definition parser
///
/// Reads a single XRD document. YAML is a superset of JSON, so both formats
/// go through the same YAML deserializer. When the input holds several YAML
/// documents only the first is used.
#[derive(Debug, Clone)]
pub struct XrdParser {
    /// Loaded definition
    definition: CompositeResourceDefinition,
}

impl XrdParser {
    /// Load an XRD from a file path
    ///
    /// The whole file is read before parsing starts.
    ///
    /// # Example
    /// ```rust,ignore
    /// let parser = XrdParser::from_file("xwidgets.example.org.yaml")?;
    /// ```
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let raw = fs::read(path).map_err(|source| XrdError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        debug!(path = %path.display(), bytes = raw.len(), "read XRD file");
        Self::from_slice(&raw)
    }

    /// Parse an XRD from raw YAML or JSON bytes
    pub fn from_slice(raw: &[u8]) -> Result<Self> {
        let document = serde_yaml::Deserializer::from_slice(raw)
            .next()
            .ok_or_else(|| {
                XrdError::ParseDefinition(<serde_yaml::Error as serde::de::Error>::custom(
                    "no YAML document",
                ))
            })?;
        let definition =
            CompositeResourceDefinition::deserialize(document).map_err(XrdError::ParseDefinition)?;

        debug!(
            name = %definition.name(),
            group = %definition.group(),
            versions = definition.spec.versions.len(),
            "parsed XRD"
        );

        Ok(Self { definition })
    }

    /// Parse an XRD from a YAML or JSON string
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        Self::from_slice(yaml.as_bytes())
    }

    /// Get reference to the parsed definition
    pub fn definition(&self) -> &CompositeResourceDefinition {
        &self.definition
    }

    /// Take ownership of the parsed definition
    pub fn into_definition(self) -> CompositeResourceDefinition {
        self.definition
    }
}
