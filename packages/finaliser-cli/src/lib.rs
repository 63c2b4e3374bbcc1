#![deny(clippy::all)]

/**
 * Bundle Finaliser CLI
 *
 * Renders export blocks for unit manifests produced by a bundler
 */
pub use bundle_finaliser as finaliser;

pub mod compile;
pub mod logging;
pub mod manifest;

/// CLI version
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
