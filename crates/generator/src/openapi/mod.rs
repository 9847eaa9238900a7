//! OpenAPI 3.0 document synthesis
//!
//! Builds the document describing the claim endpoint of an XRD: one path with
//! a POST operation whose request and response bodies use the sanitized
//! validation schema.
//!
//! ## Usage
//! ```rust,ignore
//! use xrd_openapi_generator::openapi::OpenApiBuilder;
//!
//! let mut builder = OpenApiBuilder::new();
//! builder.add_claim_path(&xrd, version, &schema);
//! let built = builder.build();
//! ```

mod builder;
mod types;

pub use builder::{BuiltDocument, OpenApiBuilder, PathSource};
pub use types::*;
