//! Discount notification and visa evaluation workflows.
//!
//! - [`workflows::discounts`] tracks a product catalog, computes the set of
//!   freshly announced discounts and relays it to subscribers' wishlists.
//! - [`workflows::visa`] scores visa applicants by category and gates the
//!   result on a background check.

pub mod config;
pub mod error;
pub mod telemetry;
pub mod validation;
pub mod workflows;
