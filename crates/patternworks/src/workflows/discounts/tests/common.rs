use std::cell::RefCell;
use std::collections::BTreeSet;
use std::rc::Rc;

use crate::workflows::discounts::{
    Catalog, DeliveryError, DeliverySink, DiscountPublisher, DiscountSubscriber, Outbox,
    SharedListener, SharedSubscriber, WishlistObserver,
};

pub(super) fn catalog() -> Catalog {
    Catalog::new(["ps4", "ps5"]).expect("valid catalog")
}

pub(super) fn subscriber(name: &str, catalog: &Catalog, wishlist: &[&str]) -> SharedSubscriber {
    let mut subscriber =
        DiscountSubscriber::new(name, format!("{name}@foo.bar")).expect("valid subscriber");
    for product in wishlist {
        let _ = subscriber.add_to_wishlist(catalog, product);
    }
    Rc::new(RefCell::new(subscriber))
}

pub(super) struct Harness {
    pub(super) publisher: DiscountPublisher,
    pub(super) observer: Rc<RefCell<WishlistObserver>>,
    pub(super) outbox: Outbox,
}

impl Harness {
    pub(super) fn listener(&self) -> SharedListener {
        self.observer.clone()
    }
}

pub(super) fn harness() -> Harness {
    let outbox = Outbox::new();
    let observer = Rc::new(RefCell::new(WishlistObserver::new(Box::new(outbox.clone()))));
    let mut publisher = DiscountPublisher::new();
    publisher.register(observer.clone());
    Harness {
        publisher,
        observer,
        outbox,
    }
}

pub(super) fn fresh_items(subscriber: &SharedSubscriber) -> Vec<String> {
    subscriber
        .borrow()
        .freshly_discounted()
        .iter()
        .map(|product| product.to_string())
        .collect()
}

pub(super) fn set_of(products: &[&str]) -> BTreeSet<String> {
    products.iter().map(|product| product.to_string()).collect()
}

pub(super) struct OfflineMailer;

impl DeliverySink for OfflineMailer {
    fn send(&self, _recipient: &str, _message: &str) -> Result<(), DeliveryError> {
        Err(DeliveryError::Transport("smtp offline".to_string()))
    }
}
