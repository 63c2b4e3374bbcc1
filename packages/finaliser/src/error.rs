//! Finaliser Errors
//!
//! Every variant is an upstream contract violation: synthesis either returns a
//! complete fragment or one of these, never partial output.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FinaliserError {
    #[error("external dependency \"{id}\" is read through a default interop helper but has no default variable")]
    MissingDefaultVariable { id: String },

    #[error("dependency \"{id}\" is read as a namespace but has no namespace variable")]
    MissingNamespaceVariable { id: String },

    #[error("malformed re-export from \"{id}\": '{reexported}' from '{imported}' (a wildcard can only be forwarded as a wildcard)")]
    MalformedWildcardReexport {
        id: String,
        reexported: String,
        imported: String,
    },

    #[error("unknown interop type \"{0}\", expected one of \"auto\", \"compat\", \"default\", \"defaultOnly\", \"esModule\"")]
    UnknownInterop(String),

    #[error("invalid finaliser configuration: {0}")]
    InvalidConfig(String),
}

pub type Result<T> = std::result::Result<T, FinaliserError>;
