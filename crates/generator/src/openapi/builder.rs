//! OpenAPI document builder

use super::types::{
    MediaType, OpenApiDocument, Operation, Parameter, PathItem, RequestBody, Response,
};
use crate::path::claim_path;
use serde::Serialize;
use std::collections::BTreeMap;
use tracing::debug;
use xrd_openapi_parser::{CompositeResourceDefinition, ValidationSchema, XrdVersion};

/// Description of the single success response
const SUCCESS_DESCRIPTION: &str = "Success";

/// Where a registered path came from
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PathSource {
    /// Path key in the document
    pub path: String,

    /// `metadata.name` of the XRD
    pub definition_name: String,

    /// Name of the version the schema was taken from
    pub version: String,
}

/// A finished document together with the origin of each of its paths
#[derive(Debug, Clone)]
pub struct BuiltDocument {
    pub document: OpenApiDocument,

    /// Registered paths in registration order
    pub sources: Vec<PathSource>,
}

/// Builds an OpenAPI document from XRD versions
///
/// Paths are recorded in registration order next to the document so that
/// consumers iterating them get a deterministic order.
#[derive(Debug, Clone, Default)]
pub struct OpenApiBuilder {
    document: OpenApiDocument,
    sources: Vec<PathSource>,
}

impl OpenApiBuilder {
    /// Create a builder for an empty document
    pub fn new() -> Self {
        Self::default()
    }

    /// Register the namespaced claim endpoint of an XRD version
    ///
    /// The endpoint gets a POST operation with required `namespace` and
    /// `name` path parameters, a required JSON request body and a `200` JSON
    /// response, both using `schema`.
    pub fn add_claim_path(
        &mut self,
        xrd: &CompositeResourceDefinition,
        version: &XrdVersion,
        schema: &ValidationSchema,
    ) -> &mut Self {
        let path = claim_path(xrd, version);

        let post = Operation {
            parameters: vec![
                Parameter::path_string("namespace"),
                Parameter::path_string("name"),
            ],
            request_body: Some(RequestBody {
                content: MediaType::json_content(schema),
                required: true,
            }),
            responses: BTreeMap::from([(
                "200".to_string(),
                Response {
                    description: SUCCESS_DESCRIPTION.to_string(),
                    content: MediaType::json_content(schema),
                },
            )]),
        };

        debug!(path = %path, xrd = %xrd.name(), "registered claim path");

        self.document
            .paths
            .insert(path.clone(), PathItem { post: Some(post) });
        self.sources.retain(|source| source.path != path);
        self.sources.push(PathSource {
            path,
            definition_name: xrd.name().to_string(),
            version: version.name.clone(),
        });

        self
    }

    /// Finish the document
    pub fn build(self) -> BuiltDocument {
        BuiltDocument {
            document: self.document,
            sources: self.sources,
        }
    }
}
