mod parser;

use std::io::Read;
use std::path::Path;

use tracing::info;

use super::catalog::{Catalog, CatalogError};
use crate::validation::ValidationError;
use parser::DiscountState;

#[derive(Debug)]
pub enum CatalogImportError {
    Io(std::io::Error),
    Csv(csv::Error),
    Catalog(CatalogError),
    Validation(ValidationError),
    UnknownDiscountState { product: String, value: String },
}

impl std::fmt::Display for CatalogImportError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CatalogImportError::Io(err) => write!(f, "failed to read catalog export: {}", err),
            CatalogImportError::Csv(err) => write!(f, "invalid catalog CSV data: {}", err),
            CatalogImportError::Catalog(err) => {
                write!(f, "could not apply catalog row: {}", err)
            }
            CatalogImportError::Validation(err) => write!(f, "invalid catalog row: {}", err),
            CatalogImportError::UnknownDiscountState { product, value } => write!(
                f,
                "unknown discount state '{}' for product {} (expected previous, new or blank)",
                value, product
            ),
        }
    }
}

impl std::error::Error for CatalogImportError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CatalogImportError::Io(err) => Some(err),
            CatalogImportError::Csv(err) => Some(err),
            CatalogImportError::Catalog(err) => Some(err),
            CatalogImportError::Validation(err) => Some(err),
            CatalogImportError::UnknownDiscountState { .. } => None,
        }
    }
}

impl From<std::io::Error> for CatalogImportError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<csv::Error> for CatalogImportError {
    fn from(err: csv::Error) -> Self {
        Self::Csv(err)
    }
}

impl From<CatalogError> for CatalogImportError {
    fn from(err: CatalogError) -> Self {
        Self::Catalog(err)
    }
}

impl From<ValidationError> for CatalogImportError {
    fn from(err: ValidationError) -> Self {
        Self::Validation(err)
    }
}

/// Builds a [`Catalog`] from a `Product,Discount` CSV export.
pub struct CatalogImporter;

impl CatalogImporter {
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Catalog, CatalogImportError> {
        let file = std::fs::File::open(path)?;
        Self::from_reader(file)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Catalog, CatalogImportError> {
        let records = parser::parse_records(reader)?;
        let mut catalog = Catalog::default();

        for record in &records {
            catalog.add_product(&record.product)?;
        }

        for record in records {
            match record.discount {
                Ok(DiscountState::None) => {}
                Ok(DiscountState::Previous) => {
                    catalog.record_previous_discount(&record.product)?;
                }
                Ok(DiscountState::New) => {
                    catalog.declare_discount(&record.product)?;
                }
                Err(value) => {
                    return Err(CatalogImportError::UnknownDiscountState {
                        product: record.product,
                        value,
                    })
                }
            }
        }

        info!(
            products = catalog.products().len(),
            previously_discounted = catalog.previously_discounted().len(),
            newly_discounted = catalog.newly_discounted().len(),
            "catalog imported"
        );
        Ok(catalog)
    }
}
