//! Composite resource definition loading
//!
//! This crate turns a Crossplane `CompositeResourceDefinition` (XRD) document
//! into the pieces the generator needs: the definition itself, its
//! referenceable version, and that version's validation schema with the
//! output-only `status` subtree removed.
//!
//! ## Pipeline
//!
//! 1. [`XrdParser`] reads a YAML or JSON document into a
//!    [`CompositeResourceDefinition`].
//! 2. [`select_referenceable_version`] picks the first version flagged
//!    `referenceable`.
//! 3. [`extract_schema`] decodes `schema.openAPIV3Schema` into a
//!    [`ValidationSchema`] and strips the top-level `status` property.

pub mod schema;
pub mod xrd;

pub use schema::{extract_schema, ValidationSchema, STATUS_PROPERTY};
pub use xrd::{
    select_referenceable_version, CompositeResourceDefinition, ObjectMeta, ResourceNames,
    VersionSchema, XrdParser, XrdSpec, XrdVersion,
};

use std::path::Path;
use xrd_openapi_common::Result;

/// Load an XRD from a YAML or JSON file
///
/// # Arguments
/// * `path` - Path to a file holding a single XRD document
///
/// # Returns
/// * `CompositeResourceDefinition` - The parsed definition
pub fn load_xrd<P: AsRef<Path>>(path: P) -> Result<CompositeResourceDefinition> {
    XrdParser::from_file(path).map(XrdParser::into_definition)
}
