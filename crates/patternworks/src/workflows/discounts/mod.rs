//! Discount announcements relayed to subscriber wishlists.
//!
//! A catalog mutation is diffed by the [`DiscountPublisher`], broadcast to
//! every registered [`DiscountListener`], narrowed per subscriber by the
//! [`WishlistObserver`] and finally handed to a [`DeliverySink`].

pub mod catalog;
pub mod delivery;
pub mod import;
pub mod observer;
pub mod publisher;
pub mod subscriber;

#[cfg(test)]
mod tests;

pub use catalog::{Catalog, CatalogError, CatalogSnapshot, ProductId};
pub use delivery::{ConsoleMailer, DeliveryError, DeliveryReceipt, DeliverySink, Outbox};
pub use import::{CatalogImportError, CatalogImporter};
pub use observer::{compose_sale_message, SharedSubscriber, WishlistObserver};
pub use publisher::{
    DiscountDelta, DiscountListener, DiscountPublisher, RegistryError, SharedListener,
};
pub use subscriber::{DiscountSubscriber, WishlistChange};
