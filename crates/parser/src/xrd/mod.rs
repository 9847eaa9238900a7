//! Crossplane composite resource definition documents
//!
//! Only `metadata.name`, `spec.group` and `spec.versions[].name` are
//! required. Everything else is parsed leniently; a missing
//! `spec.claimNames` leaves the claim plural empty.
//!
//! ## Usage
//! ```rust,ignore
//! use xrd_openapi_parser::xrd::{select_referenceable_version, XrdParser};
//!
//! let parser = XrdParser::from_file("xrd.yaml")?;
//! let version = select_referenceable_version(parser.definition())?;
//! ```

mod parser;
mod selector;
mod types;

pub use parser::XrdParser;
pub use selector::select_referenceable_version;
pub use types::*;
