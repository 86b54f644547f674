//! CLI execution context.

use std::fs;

use anyhow::{Context as _, Result};
use techstore_core::catalog::Catalog;

use crate::output::Output;

/// Catalog bundled into the binary for runs without `--catalog`.
const DEMO_CATALOG_JSON: &str = include_str!("../assets/demo_catalog.json");

/// Execution context for CLI commands.
pub struct Context {
    /// Output handler.
    pub output: Output,
    /// Path to a catalog JSON file, if one was supplied.
    catalog_path: Option<String>,
}

impl Context {
    /// Build a context from the global CLI flags.
    pub fn new(catalog_path: Option<String>, output: Output) -> Self {
        Self {
            output,
            catalog_path,
        }
    }

    /// Load the session catalog: the `--catalog` file when given,
    /// otherwise the embedded demo catalog.
    pub fn load_catalog(&self) -> Result<Catalog> {
        let catalog = match &self.catalog_path {
            Some(path) => {
                let json = fs::read_to_string(path)
                    .with_context(|| format!("failed to read catalog file '{}'", path))?;
                Catalog::from_json(&json)
                    .with_context(|| format!("failed to parse catalog file '{}'", path))?
            }
            None => Catalog::from_json(DEMO_CATALOG_JSON)
                .context("embedded demo catalog is malformed")?,
        };

        tracing::info!(
            products = catalog.len(),
            currency = %catalog.currency(),
            "catalog loaded"
        );
        self.output
            .debug(&format!("catalog loaded: {} products", catalog.len()));
        Ok(catalog)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_demo_catalog_parses() {
        let ctx = Context::new(None, Output::new(false, false));
        let catalog = ctx.load_catalog().unwrap();
        assert!(!catalog.is_empty());
        assert_eq!(catalog.currency().code(), "INR");
    }

    #[test]
    fn test_missing_catalog_file_is_an_error() {
        let ctx = Context::new(
            Some("/nonexistent/catalog.json".to_string()),
            Output::new(false, false),
        );
        assert!(ctx.load_catalog().is_err());
    }
}
