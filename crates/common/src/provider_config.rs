//! Provider configuration for the downstream provider code generator
//!
//! The configuration binds CRUD verbs of each generated resource to a path
//! and HTTP method inside an OpenAPI document. Rendered as YAML it has the
//! layout the generator reads:
//!
//! ```yaml
//! provider:
//!   name: example_crossplane
//! resources:
//!   widgets_example_org:
//!     create:
//!       path: /apis/example.org/v1/widgets/{namespace}/{name}
//!       method: POST
//! ```

use crate::{Result, XrdError};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Provider name used when the caller does not pick one
pub const DEFAULT_PROVIDER_NAME: &str = "example_crossplane";

/// Root of the provider configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProviderConfig {
    /// Provider identification
    pub provider: ProviderInfo,

    /// Resources keyed by normalized resource name
    #[serde(default)]
    pub resources: BTreeMap<String, ResourceConfig>,
}

/// Provider identification
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProviderInfo {
    /// Provider name (e.g., "example_crossplane")
    pub name: String,
}

/// CRUD locations for a single resource
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceConfig {
    pub create: OperationLocation,
    pub read: OperationLocation,
    pub update: OperationLocation,
    pub delete: OperationLocation,
}

/// Location of an operation inside the OpenAPI document
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OperationLocation {
    /// Path key in the document's `paths` map
    pub path: String,

    /// HTTP method of the operation under that path
    pub method: HttpMethod,
}

/// HTTP methods referenced by the provider configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Delete,
}

impl HttpMethod {
    /// Upper-case method name as used on the wire
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Put => "PUT",
            HttpMethod::Delete => "DELETE",
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl ProviderConfig {
    /// Create an empty configuration for the named provider
    pub fn new(provider_name: impl Into<String>) -> Self {
        Self {
            provider: ProviderInfo {
                name: provider_name.into(),
            },
            resources: BTreeMap::new(),
        }
    }

    /// Render the configuration as YAML
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(self).map_err(XrdError::ConfigRender)
    }
}

impl ResourceConfig {
    /// Map every CRUD verb onto the same path
    ///
    /// Only the create operation has a body in the generated document; the
    /// other verbs still point at the path so the generator sees a complete
    /// resource.
    pub fn for_path(path: &str) -> Self {
        let at = |method| OperationLocation {
            path: path.to_string(),
            method,
        };

        Self {
            create: at(HttpMethod::Post),
            read: at(HttpMethod::Get),
            update: at(HttpMethod::Put),
            delete: at(HttpMethod::Delete),
        }
    }

    /// Iterate the operations as (verb, location) pairs in CRUD order
    pub fn operations(&self) -> [(&'static str, &OperationLocation); 4] {
        [
            ("create", &self.create),
            ("read", &self.read),
            ("update", &self.update),
            ("delete", &self.delete),
        ]
    }
}
