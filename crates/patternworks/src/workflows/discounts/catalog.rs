use std::borrow::Borrow;
use std::collections::BTreeSet;
use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::validation::{require_text, ValidationError};

use super::publisher::DiscountDelta;

/// Opaque product token, unique within a [`Catalog`].
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(String);

impl ProductId {
    pub fn new(raw: impl Into<String>) -> Result<Self, ValidationError> {
        require_text("product id", raw).map(Self)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for ProductId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Raised when a trusted catalog call names a product that was never registered.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CatalogError {
    #[error("no product named {product}")]
    UnknownProduct { product: String },
}

/// In-memory product catalog with the two discount change-sets.
///
/// Every member of `previously_discounted` and `newly_discounted` is also a
/// member of `products`; the mutators reject anything else.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    products: BTreeSet<ProductId>,
    previously_discounted: BTreeSet<ProductId>,
    newly_discounted: BTreeSet<ProductId>,
}

impl Catalog {
    pub fn new<I, S>(products: I) -> Result<Self, ValidationError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let products = products
            .into_iter()
            .map(ProductId::new)
            .collect::<Result<BTreeSet<_>, _>>()?;

        Ok(Self {
            products,
            ..Self::default()
        })
    }

    /// Register a product. Returns `false` when it was already known.
    pub fn add_product(&mut self, product: &str) -> Result<bool, ValidationError> {
        let product = ProductId::new(product)?;
        debug!(%product, "registering product");
        Ok(self.products.insert(product))
    }

    pub fn contains(&self, product: &str) -> bool {
        self.products.contains(product)
    }

    pub fn products(&self) -> &BTreeSet<ProductId> {
        &self.products
    }

    pub fn previously_discounted(&self) -> &BTreeSet<ProductId> {
        &self.previously_discounted
    }

    pub fn newly_discounted(&self) -> &BTreeSet<ProductId> {
        &self.newly_discounted
    }

    /// Announce a new discount. Declaring the same product twice is a no-op.
    pub fn declare_discount(&mut self, product: &str) -> Result<bool, CatalogError> {
        let product = self.known(product)?;
        debug!(%product, "declaring new discount");
        Ok(self.newly_discounted.insert(product))
    }

    /// Drop a product from the previously announced discounts.
    pub fn retire_discount(&mut self, product: &str) -> Result<bool, CatalogError> {
        let product = self.known(product)?;
        debug!(%product, "retiring previous discount");
        Ok(self.previously_discounted.remove(&product))
    }

    /// Mark a product as already announced, excluding it from future deltas.
    pub fn record_previous_discount(&mut self, product: &str) -> Result<bool, CatalogError> {
        let product = self.known(product)?;
        debug!(%product, "recording previous discount");
        Ok(self.previously_discounted.insert(product))
    }

    /// Withdraw a not-yet-announced discount. Returns `false` when the product
    /// was known but not newly discounted.
    pub fn withdraw_discount(&mut self, product: &str) -> Result<bool, CatalogError> {
        let product = self.known(product)?;
        debug!(%product, "withdrawing new discount");
        Ok(self.newly_discounted.remove(&product))
    }

    pub fn snapshot(&self) -> CatalogSnapshot<'_> {
        CatalogSnapshot {
            previously_discounted: &self.previously_discounted,
            newly_discounted: &self.newly_discounted,
        }
    }

    fn known(&self, product: &str) -> Result<ProductId, CatalogError> {
        self.products
            .get(product.trim())
            .cloned()
            .ok_or_else(|| CatalogError::UnknownProduct {
                product: product.to_string(),
            })
    }
}

/// Read-only view over the two change-sets of a [`Catalog`].
#[derive(Debug, Clone, Copy)]
pub struct CatalogSnapshot<'a> {
    pub previously_discounted: &'a BTreeSet<ProductId>,
    pub newly_discounted: &'a BTreeSet<ProductId>,
}

impl CatalogSnapshot<'_> {
    /// Products newly discounted but not yet part of the previous announcements.
    pub fn delta(&self) -> DiscountDelta {
        self.newly_discounted
            .difference(self.previously_discounted)
            .cloned()
            .collect()
    }

    pub fn all_discounted(&self) -> BTreeSet<ProductId> {
        self.previously_discounted
            .union(self.newly_discounted)
            .cloned()
            .collect()
    }
}
