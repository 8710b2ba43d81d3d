//! Subcommand implementations and shared helpers.

pub mod catalog;
pub mod listing;
pub mod session;

use std::io::Write;
use std::path::Path;

use mahatta_core::{Catalog, CatalogData, Storefront};
use serde::Serialize;
use tracing::info;

use crate::config::CliConfig;

/// Build the catalog from the configured seed file, or the built-in one.
///
/// # Errors
///
/// Returns an error if the seed file cannot be read, parsed, or validated.
pub fn load_catalog(path: Option<&Path>) -> Result<Catalog, Box<dyn std::error::Error>> {
    let Some(path) = path else {
        info!("Using built-in catalog");
        return Ok(Catalog::builtin());
    };

    if !path.exists() {
        return Err(format!("Catalog file not found: {}", path.display()).into());
    }

    let content = std::fs::read_to_string(path)?;
    let data: CatalogData = serde_yaml::from_str(&content)?;
    let catalog = Catalog::new(data)?;
    info!(
        path = %path.display(),
        products = catalog.products().len(),
        "Loaded catalog"
    );
    Ok(catalog)
}

/// Start a fresh shopper session from configuration.
///
/// # Errors
///
/// Propagates catalog loading errors.
pub fn open_storefront(config: &CliConfig) -> Result<Storefront, Box<dyn std::error::Error>> {
    let catalog = load_catalog(config.catalog_path.as_deref())?;
    Ok(Storefront::new(catalog, config.store))
}

/// Write a value to stdout as JSON, one document per call.
///
/// # Errors
///
/// Returns an error if serialization or the write fails.
pub fn emit<T: Serialize>(value: &T, compact: bool) -> Result<(), Box<dyn std::error::Error>> {
    let mut out = std::io::stdout().lock();
    if compact {
        serde_json::to_writer(&mut out, value)?;
    } else {
        serde_json::to_writer_pretty(&mut out, value)?;
    }
    writeln!(out)?;
    out.flush()?;
    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_seed_file_is_an_error() {
        let err = load_catalog(Some(Path::new("/nonexistent/catalog.yaml"))).unwrap_err();
        assert!(err.to_string().contains("Catalog file not found"));
    }

    #[test]
    fn test_no_seed_uses_builtin() {
        let catalog = load_catalog(None).unwrap();
        assert_eq!(catalog.products().len(), 6);
    }

    #[test]
    fn test_yaml_seed_parses() {
        let yaml = r#"
currency: INR
products:
  - id: "w1"
    name: Linen Weave
    price: { amount: "120.00", currency_code: INR }
    image: linen.jpg
    category: Modern
    roomType: Bedroom
    collection: Textures
    surface: Matte
    mood: Calm
    color: Sand
categories:
  - { name: Modern, image: modern.jpg }
sub_categories:
  Modern: [Geometric, Urban]
"#;
        let data: CatalogData = serde_yaml::from_str(yaml).unwrap();
        let catalog = Catalog::new(data).unwrap();
        assert_eq!(catalog.products().len(), 1);
        assert_eq!(catalog.sub_categories_for(Some("Modern")), ["Geometric", "Urban"]);
    }
}
