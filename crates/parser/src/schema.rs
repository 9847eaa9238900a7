//! Validation schema extraction and sanitization
//!
//! The embedded `openAPIV3Schema` of the referenceable version becomes the
//! request and response body of the generated endpoint. The top-level
//! `status` property is removed on the way: it is filled in by the control
//! plane after creation, and the provider generator cannot model properties
//! that only become known later.

use crate::xrd::XrdVersion;
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeMap;
use tracing::debug;
use xrd_openapi_common::{Result, XrdError};

/// Name of the output-only property removed from every schema
pub const STATUS_PROPERTY: &str = "status";

/// OpenAPI v3 validation schema
///
/// Only the keywords the generator inspects are typed; everything else is
/// kept verbatim in `extensions` so the schema round-trips unchanged.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ValidationSchema {
    /// Type: string, number, integer, boolean, array, object
    #[serde(rename = "type")]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schema_type: Option<String>,

    /// Description
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Properties (for object type)
    #[serde(default, deserialize_with = "null_as_default")]
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub properties: BTreeMap<String, ValidationSchema>,

    /// Required properties
    #[serde(default, deserialize_with = "null_as_default")]
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub required: Vec<String>,

    /// Remaining keywords (items, enum, x-kubernetes-*, etc.)
    #[serde(flatten)]
    pub extensions: BTreeMap<String, serde_json::Value>,
}

impl ValidationSchema {
    /// Schema of a plain string
    pub fn string() -> Self {
        Self {
            schema_type: Some("string".to_string()),
            ..Self::default()
        }
    }

    /// Decode a raw embedded schema
    pub fn from_raw(raw: &serde_json::Value) -> Result<Self> {
        Self::deserialize(raw).map_err(XrdError::ParseSchema)
    }

    /// Remove the top-level `status` property
    ///
    /// Returns whether a property was removed. Nested `status` properties are
    /// left alone.
    pub fn strip_status(&mut self) -> bool {
        self.properties.remove(STATUS_PROPERTY).is_some()
    }

    /// Whether a top-level property with the given name exists
    pub fn has_property(&self, name: &str) -> bool {
        self.properties.contains_key(name)
    }
}

/// Treat an explicit `null` like a missing key
///
/// YAML yields `null` for a key written without a value (`properties:`).
fn null_as_default<'de, D, T>(deserializer: D) -> std::result::Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Extract the sanitized validation schema of a version
///
/// Fails when the version carries no schema or the schema is malformed.
pub fn extract_schema(version: &XrdVersion) -> Result<ValidationSchema> {
    let raw = version.raw_schema().ok_or_else(|| XrdError::SchemaMissing {
        version: version.name.clone(),
    })?;

    let mut schema = ValidationSchema::from_raw(raw)?;
    if schema.strip_status() {
        debug!(version = %version.name, "removed status from schema");
    }

    Ok(schema)
}
