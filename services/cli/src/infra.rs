use std::path::Path;

use patternworks::config::CatalogConfig;
use patternworks::error::AppError;
use patternworks::workflows::discounts::{Catalog, CatalogImporter};
use patternworks::workflows::visa::{Applicant, BackgroundCheck};

/// Load the demo catalog from a CSV export, or fall back to the configured products.
pub(crate) fn load_catalog(
    path: Option<&Path>,
    config: &CatalogConfig,
) -> Result<Catalog, AppError> {
    match path {
        Some(path) => Ok(CatalogImporter::from_path(path)?),
        None => Ok(Catalog::new(config.products.iter().cloned())?),
    }
}

pub(crate) fn demo_applicants() -> Result<Vec<Applicant>, AppError> {
    Ok(vec![
        Applicant::normal("John", "Doe", 5, true)?
            .with_background_check(BackgroundCheck::new(1, false)),
        Applicant::third_world("Muhammed", "Ali", 5, true, -3)?
            .with_background_check(BackgroundCheck::new(5, false)),
        Applicant::vip("mr", "important")?.with_background_check(BackgroundCheck::new(0, false)),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn load_catalog_falls_back_to_configured_products() {
        let config = CatalogConfig {
            products: vec!["ps4".to_string(), "ps5".to_string()],
        };

        let catalog = load_catalog(None, &config).expect("catalog builds");

        assert!(catalog.contains("ps4"));
        assert!(catalog.contains("ps5"));
        assert!(catalog.newly_discounted().is_empty());
    }

    #[test]
    fn load_catalog_propagates_missing_exports() {
        let config = CatalogConfig {
            products: vec!["ps5".to_string()],
        };

        match load_catalog(Some(Path::new("missing-export.csv")), &config) {
            Err(AppError::Import(_)) => {}
            other => panic!("expected import error, got {other:?}"),
        }
    }
}
