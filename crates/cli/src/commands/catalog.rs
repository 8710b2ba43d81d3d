//! Print the product catalog.

use crate::commands::{emit, load_catalog};
use crate::config::CliConfig;

/// Print every product, in catalog order.
///
/// # Errors
///
/// Returns an error if the catalog cannot be loaded or written.
pub fn show(config: &CliConfig, compact: bool) -> Result<(), Box<dyn std::error::Error>> {
    let catalog = load_catalog(config.catalog_path.as_deref())?;
    emit(&catalog.products(), compact)
}
