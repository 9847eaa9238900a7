//! Composite resource definition type definitions
//!
//! Simplified representation of `apiextensions.crossplane.io/v1`
//! `CompositeResourceDefinition`, focusing on what the claim endpoint needs

use serde::{Deserialize, Serialize};

/// XRD document root
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompositeResourceDefinition {
    /// API version (e.g., "apiextensions.crossplane.io/v1")
    #[serde(default)]
    pub api_version: Option<String>,

    /// Kind (e.g., "CompositeResourceDefinition")
    #[serde(default)]
    pub kind: Option<String>,

    /// Object metadata
    pub metadata: ObjectMeta,

    /// Definition spec
    pub spec: XrdSpec,
}

/// Object metadata
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ObjectMeta {
    /// Definition name, conventionally `<plural>.<group>`
    pub name: String,
}

/// XRD spec
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct XrdSpec {
    /// API group (e.g., "example.org")
    pub group: String,

    /// Names of the composite resource
    #[serde(default)]
    pub names: Option<ResourceNames>,

    /// Names of the claim
    #[serde(default)]
    pub claim_names: Option<ResourceNames>,

    /// Versions in declaration order
    #[serde(default)]
    pub versions: Vec<XrdVersion>,
}

/// Kind and plural name of a resource
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResourceNames {
    /// Kind (e.g., "Widget")
    #[serde(default)]
    pub kind: Option<String>,

    /// Plural name used in API paths (e.g., "widgets")
    pub plural: String,
}

/// A single served version of the definition
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct XrdVersion {
    /// Version name (e.g., "v1alpha1")
    pub name: String,

    /// Whether other resources may reference this version
    #[serde(default)]
    pub referenceable: bool,

    /// Whether the version is served by the API server
    #[serde(default)]
    pub served: bool,

    /// Validation schema
    #[serde(default)]
    pub schema: Option<VersionSchema>,
}

/// Validation schema wrapper of a version
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VersionSchema {
    /// Raw OpenAPI v3 schema, decoded later by the schema extractor
    #[serde(rename = "openAPIV3Schema")]
    #[serde(default)]
    pub open_api_v3_schema: Option<serde_json::Value>,
}

impl CompositeResourceDefinition {
    /// Definition name (`metadata.name`)
    pub fn name(&self) -> &str {
        &self.metadata.name
    }

    /// API group (`spec.group`)
    pub fn group(&self) -> &str {
        &self.spec.group
    }

    /// Plural claim name (`spec.claimNames.plural`), empty when unset
    pub fn claim_plural(&self) -> &str {
        self.spec
            .claim_names
            .as_ref()
            .map_or("", |names| names.plural.as_str())
    }
}

impl XrdVersion {
    /// Raw embedded schema, if the version carries one
    pub fn raw_schema(&self) -> Option<&serde_json::Value> {
        self.schema
            .as_ref()
            .and_then(|s| s.open_api_v3_schema.as_ref())
    }
}
