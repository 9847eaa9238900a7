//! OpenAPI and provider config generation for Crossplane XRDs
//!
//! This crate turns a parsed composite resource definition into the two
//! artifacts the provider code generator consumes:
//! - an OpenAPI 3.0 document describing the namespaced claim endpoint
//! - a provider configuration binding CRUD verbs to that endpoint
//!
//! [`convert_file`] runs the whole pipeline; [`ArtifactWriter`] writes the
//! result to a directory.

pub mod openapi;
mod path;
mod provider_config;
mod templates;
mod writer;

pub use path::{claim_path, claim_path_for};
pub use provider_config::{resource_name, synthesize_provider_config};
pub use writer::{ArtifactWriter, CONFIG_FILE, OPENAPI_FILE, README_FILE};

use openapi::{OpenApiBuilder, OpenApiDocument, PathSource};
use std::path::Path;
use tracing::debug;
use xrd_openapi_common::{ProviderConfig, Result, XrdError, DEFAULT_PROVIDER_NAME};
use xrd_openapi_parser::{
    extract_schema, select_referenceable_version, CompositeResourceDefinition, XrdParser,
};

/// Options for a conversion
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConvertOptions {
    /// Provider name written into the provider configuration
    pub provider_name: String,
}

impl Default for ConvertOptions {
    fn default() -> Self {
        Self {
            provider_name: DEFAULT_PROVIDER_NAME.to_string(),
        }
    }
}

/// Result of converting one XRD
#[derive(Debug, Clone)]
pub struct Conversion {
    /// The OpenAPI document
    pub document: OpenApiDocument,

    /// The OpenAPI document serialized as JSON
    pub document_json: Vec<u8>,

    /// Provider configuration pointing into the document
    pub config: ProviderConfig,

    /// Registered paths in registration order
    pub sources: Vec<PathSource>,
}

impl Conversion {
    /// Version whose schema the first registered path was built from
    pub fn selected_version(&self) -> Option<&str> {
        self.sources.first().map(|source| source.version.as_str())
    }
}

/// Convert the XRD stored in a YAML or JSON file
///
/// # Example
/// ```rust,ignore
/// let conversion = convert_file("xwidgets.yaml", &ConvertOptions::default())?;
/// std::fs::write("openapi.json", &conversion.document_json)?;
/// ```
pub fn convert_file<P: AsRef<Path>>(path: P, options: &ConvertOptions) -> Result<Conversion> {
    let parser = XrdParser::from_file(path)?;
    convert_definition(parser.definition(), options)
}

/// Convert a parsed XRD
///
/// Fails without producing any artifact if the XRD has no referenceable
/// version, the version has no schema, or the document cannot be serialized.
pub fn convert_definition(
    xrd: &CompositeResourceDefinition,
    options: &ConvertOptions,
) -> Result<Conversion> {
    let version = select_referenceable_version(xrd)?;
    let schema = extract_schema(version)?;

    // TODO: register the cluster-scoped path of the composite resource as well
    let mut builder = OpenApiBuilder::new();
    builder.add_claim_path(xrd, version, &schema);
    let built = builder.build();

    let config = synthesize_provider_config(&options.provider_name, &built.sources);

    let document_json = serde_json::to_vec(&built.document).map_err(XrdError::Serialization)?;
    debug!(
        xrd = %xrd.name(),
        bytes = document_json.len(),
        "serialized OpenAPI document"
    );

    Ok(Conversion {
        document: built.document,
        document_json,
        config,
        sources: built.sources,
    })
}
