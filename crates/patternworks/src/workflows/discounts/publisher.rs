use std::cell::RefCell;
use std::collections::BTreeSet;
use std::rc::Rc;

use serde::Serialize;
use tracing::info;

use super::catalog::{Catalog, ProductId};

/// Products present in the new announcements but not in the previous ones,
/// computed fresh for every notification cycle.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct DiscountDelta {
    products: BTreeSet<ProductId>,
}

impl DiscountDelta {
    pub fn contains(&self, product: &str) -> bool {
        self.products.contains(product)
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ProductId> {
        self.products.iter()
    }

    pub fn products(&self) -> &BTreeSet<ProductId> {
        &self.products
    }
}

impl FromIterator<ProductId> for DiscountDelta {
    fn from_iter<T: IntoIterator<Item = ProductId>>(iter: T) -> Self {
        Self {
            products: iter.into_iter().collect(),
        }
    }
}

/// Receives every delta broadcast by a [`DiscountPublisher`].
pub trait DiscountListener {
    fn update(&mut self, delta: &DiscountDelta);
}

pub type SharedListener = Rc<RefCell<dyn DiscountListener>>;

/// Raised when removing a registration that does not exist.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RegistryError {
    #[error("listener is not registered with the publisher")]
    ListenerNotRegistered,
    #[error("subscriber {name} <{email}> is not subscribed")]
    SubscriberNotRegistered { name: String, email: String },
}

/// Change detector: diffs the catalog and broadcasts the result to every
/// registered listener in registration order.
#[derive(Default)]
pub struct DiscountPublisher {
    listeners: Vec<SharedListener>,
}

impl DiscountPublisher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a listener. Returns `false` if the same listener is already registered.
    pub fn register(&mut self, listener: SharedListener) -> bool {
        if self.position(&listener).is_some() {
            return false;
        }
        self.listeners.push(listener);
        true
    }

    pub fn unregister(&mut self, listener: &SharedListener) -> Result<(), RegistryError> {
        let index = self
            .position(listener)
            .ok_or(RegistryError::ListenerNotRegistered)?;
        self.listeners.remove(index);
        Ok(())
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    /// Compute `newly - previously` and push it to every listener.
    ///
    /// The catalog is left untouched, so announcing twice without a catalog
    /// change delivers the same delta twice.
    pub fn announce(&self, catalog: &Catalog) -> DiscountDelta {
        let delta = catalog.snapshot().delta();
        info!(
            products = delta.len(),
            listeners = self.listeners.len(),
            "announcing discount delta"
        );

        for listener in &self.listeners {
            listener.borrow_mut().update(&delta);
        }
        delta
    }

    fn position(&self, listener: &SharedListener) -> Option<usize> {
        let target = Rc::as_ptr(listener) as *const ();
        self.listeners
            .iter()
            .position(|registered| Rc::as_ptr(registered) as *const () == target)
    }
}
