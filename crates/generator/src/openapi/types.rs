//! OpenAPI 3.0 type definitions
//!
//! Minimal representation of the parts of a document the claim endpoint uses.
//! Field order follows the order keys are emitted in.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use xrd_openapi_parser::ValidationSchema;

/// OpenAPI version emitted in every document
pub const OPENAPI_VERSION: &str = "3.0.0";

/// Title of every generated document
pub const DOCUMENT_TITLE: &str = "XRD openapi";

/// Version of every generated document
pub const DOCUMENT_VERSION: &str = "v0.1.0";

/// Media type of request and response bodies
pub const JSON_MEDIA_TYPE: &str = "application/json";

/// OpenAPI document root
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OpenApiDocument {
    /// OpenAPI version (e.g., "3.0.0")
    pub openapi: String,

    /// API metadata
    pub info: Info,

    /// API paths (endpoints)
    pub paths: BTreeMap<String, PathItem>,
}

/// API information
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Info {
    /// API title
    pub title: String,

    /// API version
    pub version: String,
}

/// Path item (operations for a path)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PathItem {
    /// POST operation
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub post: Option<Operation>,
}

/// HTTP operation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Operation {
    /// Parameters
    pub parameters: Vec<Parameter>,

    /// Request body
    #[serde(rename = "requestBody")]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub request_body: Option<RequestBody>,

    /// Responses keyed by status code
    pub responses: BTreeMap<String, Response>,
}

/// Parameter definition
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Parameter {
    /// Parameter name
    pub name: String,

    /// Location: query, header, path, cookie
    #[serde(rename = "in")]
    pub location: String,

    /// Required flag
    pub required: bool,

    /// Schema
    pub schema: ValidationSchema,
}

/// Request body
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RequestBody {
    /// Content types
    pub content: BTreeMap<String, MediaType>,

    /// Required flag
    pub required: bool,
}

/// Response
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Response {
    /// Description
    pub description: String,

    /// Content types
    pub content: BTreeMap<String, MediaType>,
}

/// Media type
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MediaType {
    /// Schema
    pub schema: ValidationSchema,
}

impl Parameter {
    /// Required string parameter located in the path
    pub fn path_string(name: &str) -> Self {
        Self {
            name: name.to_string(),
            location: "path".to_string(),
            required: true,
            schema: ValidationSchema::string(),
        }
    }
}

impl MediaType {
    /// Content map with a single JSON media type
    pub fn json_content(schema: &ValidationSchema) -> BTreeMap<String, MediaType> {
        BTreeMap::from([(
            JSON_MEDIA_TYPE.to_string(),
            MediaType {
                schema: schema.clone(),
            },
        )])
    }
}

impl OpenApiDocument {
    /// Empty document with the fixed metadata
    pub fn new() -> Self {
        Self {
            openapi: OPENAPI_VERSION.to_string(),
            info: Info {
                title: DOCUMENT_TITLE.to_string(),
                version: DOCUMENT_VERSION.to_string(),
            },
            paths: BTreeMap::new(),
        }
    }

    /// Schema of the JSON request body of the POST operation under a path
    pub fn post_request_schema(&self, path: &str) -> Option<&ValidationSchema> {
        self.paths
            .get(path)?
            .post
            .as_ref()?
            .request_body
            .as_ref()?
            .content
            .get(JSON_MEDIA_TYPE)
            .map(|media| &media.schema)
    }
}

impl Default for OpenApiDocument {
    fn default() -> Self {
        Self::new()
    }
}
