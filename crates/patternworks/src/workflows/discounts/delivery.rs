use std::cell::RefCell;
use std::rc::Rc;

use chrono::{DateTime, Utc};
use serde::Serialize;

/// Terminal side effect of a notification cycle (e.g. an e-mail gateway).
pub trait DeliverySink {
    fn send(&self, recipient: &str, message: &str) -> Result<(), DeliveryError>;
}

/// Delivery dispatch error.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DeliveryError {
    #[error("delivery transport unavailable: {0}")]
    Transport(String),
}

/// Stand-in for a real mail API that writes each message to stdout.
#[derive(Debug, Default, Clone, Copy)]
pub struct ConsoleMailer;

impl DeliverySink for ConsoleMailer {
    fn send(&self, recipient: &str, message: &str) -> Result<(), DeliveryError> {
        println!("to: {recipient}\n{message}");
        Ok(())
    }
}

/// Record of a single message handed to an [`Outbox`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DeliveryReceipt {
    pub recipient: String,
    pub message: String,
    pub sent_at: DateTime<Utc>,
}

/// In-memory sink. Clones share the same buffer, so a handle kept by the
/// caller sees everything sent through the copy owned by the observer.
#[derive(Debug, Default, Clone)]
pub struct Outbox {
    receipts: Rc<RefCell<Vec<DeliveryReceipt>>>,
}

impl Outbox {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn receipts(&self) -> Vec<DeliveryReceipt> {
        self.receipts.borrow().clone()
    }

    pub fn len(&self) -> usize {
        self.receipts.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.receipts.borrow().is_empty()
    }

    pub fn clear(&self) {
        self.receipts.borrow_mut().clear();
    }
}

impl DeliverySink for Outbox {
    fn send(&self, recipient: &str, message: &str) -> Result<(), DeliveryError> {
        self.receipts.borrow_mut().push(DeliveryReceipt {
            recipient: recipient.to_string(),
            message: message.to_string(),
            sent_at: Utc::now(),
        });
        Ok(())
    }
}
