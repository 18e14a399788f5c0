use std::cell::RefCell;
use std::rc::Rc;

use tracing::{debug, info};

use super::catalog::ProductId;
use super::delivery::{DeliveryError, DeliverySink};
use super::publisher::{DiscountDelta, DiscountListener, RegistryError};
use super::subscriber::DiscountSubscriber;

pub type SharedSubscriber = Rc<RefCell<DiscountSubscriber>>;

/// Listener relaying discount deltas to subscribers' wishlists.
///
/// Subscribers are held by shared handle; unsubscribing never drops the
/// caller's copy. Subscribing the same person twice keeps both entries.
pub struct WishlistObserver {
    subscribers: Vec<SharedSubscriber>,
    sink: Box<dyn DeliverySink>,
}

impl WishlistObserver {
    pub fn new(sink: Box<dyn DeliverySink>) -> Self {
        Self {
            subscribers: Vec::new(),
            sink,
        }
    }

    pub fn subscribe(&mut self, subscriber: SharedSubscriber) {
        debug!(subscriber = %subscriber.borrow().email(), "subscribing");
        self.subscribers.push(subscriber);
    }

    /// Remove the first entry matching the subscriber's name and email.
    pub fn unsubscribe(&mut self, subscriber: &SharedSubscriber) -> Result<(), RegistryError> {
        let target = subscriber.borrow();
        let index = self
            .subscribers
            .iter()
            .position(|entry| entry.borrow().same_identity(&target))
            .ok_or_else(|| RegistryError::SubscriberNotRegistered {
                name: target.name().to_string(),
                email: target.email().to_string(),
            })?;
        drop(target);

        self.subscribers.remove(index);
        Ok(())
    }

    pub fn subscribers(&self) -> &[SharedSubscriber] {
        &self.subscribers
    }

    /// Send one message per subscriber with freshly discounted wishlist items,
    /// in subscription order. Returns the number of messages sent; the first
    /// sink failure aborts the cycle.
    pub fn notify(&self) -> Result<usize, DeliveryError> {
        let mut sent = 0;
        for subscriber in &self.subscribers {
            let subscriber = subscriber.borrow();
            if subscriber.freshly_discounted().is_empty() {
                continue;
            }

            let message = compose_sale_message(subscriber.name(), subscriber.freshly_discounted());
            self.sink.send(subscriber.email(), &message)?;
            info!(
                recipient = %subscriber.email(),
                items = subscriber.freshly_discounted().len(),
                "sale notification delivered"
            );
            sent += 1;
        }
        Ok(sent)
    }
}

impl DiscountListener for WishlistObserver {
    fn update(&mut self, delta: &DiscountDelta) {
        for subscriber in &self.subscribers {
            subscriber.borrow_mut().apply_delta(delta);
        }
    }
}

pub fn compose_sale_message<'a, I>(name: &str, items: I) -> String
where
    I: IntoIterator<Item = &'a ProductId>,
{
    let items = items
        .into_iter()
        .map(ProductId::as_str)
        .collect::<Vec<_>>()
        .join(" and ");
    format!(
        "dear {name},\nthe following items from your wishlist have recently gone on sale:\n{items}"
    )
}
