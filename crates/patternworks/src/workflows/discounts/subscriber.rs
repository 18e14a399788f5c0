use std::collections::BTreeSet;

use tracing::warn;

use crate::validation::{require_email, require_text, ValidationError};

use super::catalog::{Catalog, CatalogSnapshot, ProductId};
use super::publisher::DiscountDelta;

/// Result of a wishlist edit. Unknown products are reported here rather
/// than raised, since wishlist input comes from end users.
#[must_use]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WishlistChange {
    Added,
    AlreadyPresent,
    Removed,
    NotInWishlist,
    UnknownProduct,
}

/// End consumer following a subset of the catalog. Identity is the
/// name and email pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiscountSubscriber {
    name: String,
    email: String,
    wishlist: BTreeSet<ProductId>,
    freshly_discounted: BTreeSet<ProductId>,
    all_discounted: BTreeSet<ProductId>,
}

impl DiscountSubscriber {
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Result<Self, ValidationError> {
        Ok(Self {
            name: require_text("name", name)?,
            email: require_email(email)?,
            wishlist: BTreeSet::new(),
            freshly_discounted: BTreeSet::new(),
            all_discounted: BTreeSet::new(),
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn set_name(&mut self, name: impl Into<String>) -> Result<(), ValidationError> {
        self.name = require_text("name", name)?;
        Ok(())
    }

    pub fn set_email(&mut self, email: impl Into<String>) -> Result<(), ValidationError> {
        self.email = require_email(email)?;
        Ok(())
    }

    pub fn same_identity(&self, other: &DiscountSubscriber) -> bool {
        self.name == other.name && self.email == other.email
    }

    pub fn wishlist(&self) -> &BTreeSet<ProductId> {
        &self.wishlist
    }

    /// Wishlist items that were part of the most recent delta.
    pub fn freshly_discounted(&self) -> &BTreeSet<ProductId> {
        &self.freshly_discounted
    }

    /// Wishlist items discounted in either change-set, as of the last
    /// [`reconcile_discounted`](Self::reconcile_discounted) call.
    pub fn all_discounted(&self) -> &BTreeSet<ProductId> {
        &self.all_discounted
    }

    pub fn add_to_wishlist(&mut self, catalog: &Catalog, product: &str) -> WishlistChange {
        let Some(product) = catalog.products().get(product.trim()).cloned() else {
            warn!(subscriber = %self.email, product, "product is not in the catalog, no action");
            return WishlistChange::UnknownProduct;
        };

        if self.wishlist.insert(product) {
            WishlistChange::Added
        } else {
            WishlistChange::AlreadyPresent
        }
    }

    pub fn remove_from_wishlist(&mut self, catalog: &Catalog, product: &str) -> WishlistChange {
        let product = product.trim();
        if !catalog.contains(product) {
            warn!(subscriber = %self.email, product, "product is not in the catalog, no action");
            return WishlistChange::UnknownProduct;
        }

        if self.wishlist.remove(product) {
            self.freshly_discounted.remove(product);
            self.all_discounted.remove(product);
            WishlistChange::Removed
        } else {
            warn!(subscriber = %self.email, product, "product was not on the wishlist, not removed");
            WishlistChange::NotInWishlist
        }
    }

    /// Clear entries that left the delta, then add wishlist items present in it.
    pub(crate) fn apply_delta(&mut self, delta: &DiscountDelta) {
        self.freshly_discounted
            .retain(|product| delta.contains(product.as_str()));

        let matches: Vec<ProductId> = delta
            .iter()
            .filter(|product| self.wishlist.contains(*product))
            .cloned()
            .collect();
        self.freshly_discounted.extend(matches);
    }

    /// Recompute the wishlist items discounted in either change-set.
    pub fn reconcile_discounted(&mut self, snapshot: &CatalogSnapshot<'_>) {
        self.all_discounted = snapshot
            .all_discounted()
            .into_iter()
            .filter(|product| self.wishlist.contains(product))
            .collect();
    }
}
