//! Error types for catalog construction, loading and rendering.

use std::path::PathBuf;

use thiserror::Error;

/// Errors produced by the catalog.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// A product was given an empty (or blank) name.
    #[error("product name must not be empty")]
    EmptyName,

    /// The catalog file could not be read.
    #[error("cannot read catalog '{path}'")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The catalog file is not valid JSON for a catalog.
    #[error("invalid JSON catalog '{path}'")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// The catalog file is not valid YAML for a catalog.
    #[error("invalid YAML catalog '{path}'")]
    Yaml {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    /// The file extension names no known catalog format.
    #[error("unsupported catalog format '{path}': expected .json, .yaml or .yml")]
    UnsupportedFormat { path: PathBuf },

    /// Output could not be encoded as JSON.
    #[error("cannot encode output as JSON")]
    EncodeJson(#[source] serde_json::Error),

    /// Output could not be encoded as YAML.
    #[error("cannot encode output as YAML")]
    EncodeYaml(#[source] serde_yaml::Error),
}

/// Result alias for catalog operations.
pub type Result<T> = std::result::Result<T, CatalogError>;
