//! Common types and utilities for xrd-openapi
//!
//! This crate contains the error taxonomy shared by the parser, generator and
//! CLI crates, plus the provider configuration model handed to the downstream
//! provider code generator.

mod provider_config;

pub use provider_config::{
    HttpMethod, OperationLocation, ProviderConfig, ProviderInfo, ResourceConfig,
    DEFAULT_PROVIDER_NAME,
};

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while converting an XRD
#[derive(Error, Debug)]
pub enum XrdError {
    #[error("cannot read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("cannot parse XRD: {0}")]
    ParseDefinition(#[source] serde_yaml::Error),

    #[error("cannot parse schema: {0}")]
    ParseSchema(#[source] serde_json::Error),

    #[error("no referenceable version for XRD")]
    NoReferenceableVersion,

    #[error("version {version} has no schema")]
    SchemaMissing { version: String },

    #[error("cannot marshal OpenAPI document: {0}")]
    Serialization(#[source] serde_json::Error),

    #[error("cannot render provider config: {0}")]
    ConfigRender(#[source] serde_yaml::Error),

    #[error("Template error: {0}")]
    Render(String),

    #[error("cannot write {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Stable classification of an [`XrdError`] for programmatic handling
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Input file could not be read
    Read,
    /// Malformed YAML/JSON, either the definition or its embedded schema
    Parse,
    /// No version is flagged referenceable
    Selection,
    /// The referenceable version carries no schema
    SchemaMissing,
    /// An output artifact could not be serialized
    Serialization,
    /// An output artifact could not be written
    Io,
}

impl XrdError {
    /// Classify this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            XrdError::Read { .. } => ErrorKind::Read,
            XrdError::ParseDefinition(_) | XrdError::ParseSchema(_) => ErrorKind::Parse,
            XrdError::NoReferenceableVersion => ErrorKind::Selection,
            XrdError::SchemaMissing { .. } => ErrorKind::SchemaMissing,
            XrdError::Serialization(_) | XrdError::ConfigRender(_) | XrdError::Render(_) => {
                ErrorKind::Serialization
            }
            XrdError::Io { .. } => ErrorKind::Io,
        }
    }
}

/// Result type for conversion operations
pub type Result<T> = std::result::Result<T, XrdError>;
