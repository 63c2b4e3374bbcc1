//! Interop Classification
//!
//! How an external module's default and namespace values are adapted when they
//! are read from a property-based module format.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::FinaliserError;

pub const INTEROP_DEFAULT_VARIABLE: &str = "_interopDefault";
pub const INTEROP_DEFAULT_COMPAT_VARIABLE: &str = "_interopDefaultCompat";
pub const INTEROP_NAMESPACE_VARIABLE: &str = "_interopNamespace";
pub const INTEROP_NAMESPACE_COMPAT_VARIABLE: &str = "_interopNamespaceCompat";
pub const INTEROP_NAMESPACE_DEFAULT_VARIABLE: &str = "_interopNamespaceDefault";
pub const INTEROP_NAMESPACE_DEFAULT_ONLY_VARIABLE: &str = "_interopNamespaceDefaultOnly";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum InteropType {
    /// Decide at runtime from the `__esModule` flag
    Auto,
    /// Like `Auto`, but also accepts functions and primitives as default values
    Compat,
    /// The module value itself is the default export
    #[default]
    Default,
    /// The module only has a default export
    DefaultOnly,
    /// The module is transpiled ES code with a real `default` property
    EsModule,
}

impl InteropType {
    pub fn as_str(&self) -> &'static str {
        match self {
            InteropType::Auto => "auto",
            InteropType::Compat => "compat",
            InteropType::Default => "default",
            InteropType::DefaultOnly => "defaultOnly",
            InteropType::EsModule => "esModule",
        }
    }

    /// Helper that materialises a dedicated default-value binding, if any
    pub fn default_helper(&self) -> Option<&'static str> {
        match self {
            InteropType::Auto => Some(INTEROP_DEFAULT_VARIABLE),
            InteropType::Compat => Some(INTEROP_DEFAULT_COMPAT_VARIABLE),
            InteropType::Default | InteropType::DefaultOnly | InteropType::EsModule => None,
        }
    }

    /// Helper that wraps the module value into a namespace object, if any
    pub fn namespace_helper(&self) -> Option<&'static str> {
        match self {
            InteropType::Auto => Some(INTEROP_NAMESPACE_VARIABLE),
            InteropType::Compat => Some(INTEROP_NAMESPACE_COMPAT_VARIABLE),
            InteropType::Default => Some(INTEROP_NAMESPACE_DEFAULT_VARIABLE),
            InteropType::DefaultOnly => Some(INTEROP_NAMESPACE_DEFAULT_ONLY_VARIABLE),
            InteropType::EsModule => None,
        }
    }

    /// Whether the default value is read as `.default` off the bound variable
    pub fn is_default_a_property(&self, external_live_bindings: bool) -> bool {
        match self {
            InteropType::EsModule => true,
            InteropType::Auto | InteropType::Compat => external_live_bindings,
            InteropType::Default | InteropType::DefaultOnly => false,
        }
    }
}

impl fmt::Display for InteropType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for InteropType {
    type Err = FinaliserError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "auto" => Ok(InteropType::Auto),
            "compat" => Ok(InteropType::Compat),
            "default" => Ok(InteropType::Default),
            "defaultOnly" => Ok(InteropType::DefaultOnly),
            "esModule" => Ok(InteropType::EsModule),
            other => Err(FinaliserError::UnknownInterop(other.to_string())),
        }
    }
}

impl TryFrom<String> for InteropType {
    type Error = FinaliserError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<InteropType> for String {
    fn from(value: InteropType) -> Self {
        value.as_str().to_string()
    }
}

/// Resolves the interop classification of a module id.
pub trait GetInterop {
    fn get_interop(&self, id: &str) -> InteropType;
}

impl<F> GetInterop for F
where
    F: Fn(&str) -> InteropType,
{
    fn get_interop(&self, id: &str) -> InteropType {
        self(id)
    }
}

/// The same classification for every module
impl GetInterop for InteropType {
    fn get_interop(&self, _id: &str) -> InteropType {
        *self
    }
}
