//! Catalog loading.
//!
//! A custom catalog is a TOML file of `[[services]]` tables:
//!
//! ```toml
//! [[services]]
//! title = "Cybersecurity Solutions"
//! description = "Threat assessments and monitoring."
//! category = "Security & Infrastructure"
//! icon = "shield"
//! features = ["Penetration testing"]
//! ```
//!
//! Titles should also appear in the resolver table for views of them to count
//! as interest; unmapped titles are reported with a warning.

use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;
use site_persona_core::catalog::{Catalog, Service};
use site_persona_core::resolver::resolve;
use tracing::warn;

use crate::config::Config;

#[derive(Debug, Deserialize)]
struct CatalogFile {
    #[serde(default)]
    services: Vec<Service>,
}

/// The catalog named by `[catalog].path`, or the built-in one.
pub fn load_catalog(config: &Config) -> Result<Catalog> {
    match &config.catalog.path {
        Some(path) => load_catalog_file(path),
        None => Ok(Catalog::builtin()),
    }
}

pub fn load_catalog_file(path: &Path) -> Result<Catalog> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read catalog file: {}", path.display()))?;
    parse_catalog(&content)
        .with_context(|| format!("Invalid catalog file: {}", path.display()))
}

fn parse_catalog(content: &str) -> Result<Catalog> {
    let file: CatalogFile = toml::from_str(content)?;
    for s in &file.services {
        if resolve(&s.title).is_none() {
            warn!(title = %s.title, "catalog title has no resolver entry; views will not be tracked");
        }
    }
    Catalog::new(file.services)
}
