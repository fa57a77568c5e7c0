//! Pattern: Observer (a.k.a. Dependents, Publish-Subscribe)
//! Category: Behavioral
//!
//! A one-to-many relationship: when the publisher changes, every
//! subscriber is told about it and pulls whatever state it needs from the
//! publisher through a back-reference.
//!
//! Everything here is single-threaded, so the shared pieces use `Rc`,
//! `Weak` and `RefCell`.

use crate::error::ObserverError;
use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::{Rc, Weak};
use tracing::debug;

/// Receives a notification that the subject it watches has changed.
pub trait Observer {
    fn update(&self);
}

/// Identity of a shared handle: the address of the value it points to.
fn identity<T: ?Sized>(handle: &Rc<T>) -> usize {
    Rc::as_ptr(handle) as *const () as usize
}

/// A set of subscribers keyed by identity. Iteration order is unspecified.
#[derive(Default)]
pub struct Subscribers {
    entries: RefCell<HashMap<usize, Rc<dyn Observer>>>,
}

impl Subscribers {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `false` if the subscriber was already present.
    pub fn insert(&self, subscriber: Rc<dyn Observer>) -> bool {
        self.entries
            .borrow_mut()
            .insert(identity(&subscriber), subscriber)
            .is_none()
    }

    pub fn remove<O: Observer + ?Sized>(&self, subscriber: &Rc<O>) -> Result<(), ObserverError> {
        self.entries
            .borrow_mut()
            .remove(&identity(subscriber))
            .map(|_| ())
            .ok_or(ObserverError::NotSubscribed)
    }

    pub fn contains<O: Observer + ?Sized>(&self, subscriber: &Rc<O>) -> bool {
        self.entries.borrow().contains_key(&identity(subscriber))
    }

    pub fn len(&self) -> usize {
        self.entries.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }

    /// Clone the current handles so callers can notify without holding the borrow.
    pub fn snapshot(&self) -> Vec<Rc<dyn Observer>> {
        self.entries.borrow().values().cloned().collect()
    }
}

/// A publisher. Subscription management and notification come for free;
/// implementors only hand out their subscriber set.
pub trait Subject {
    fn subscribers(&self) -> &Subscribers;

    /// Register a subscriber. Adding the same subscriber twice is a no-op.
    fn add(&self, subscriber: Rc<dyn Observer>) {
        if !self.subscribers().insert(subscriber) {
            debug!("subscriber already registered");
        }
    }

    /// Unregister a subscriber, failing if it was never registered.
    fn remove<O: Observer + ?Sized>(&self, subscriber: &Rc<O>) -> Result<(), ObserverError> {
        self.subscribers().remove(subscriber)?;
        debug!(remaining = self.subscribers().len(), "subscriber removed");
        Ok(())
    }

    /// Call `update` once on every registered subscriber.
    ///
    /// A subscriber removed by an earlier `update` in the same pass is skipped.
    fn notify(&self) {
        let subscribers = self.subscribers().snapshot();
        debug!(count = subscribers.len(), "notifying subscribers");
        for subscriber in subscribers {
            if !self.subscribers().contains(&subscriber) {
                continue;
            }
            subscriber.update();
        }
    }
}

/// The town's public notice board.
#[derive(Default)]
pub struct MessageBoard {
    latest_message: RefCell<Option<String>>,
    subscribers: Subscribers,
}

impl MessageBoard {
    pub fn new() -> Rc<Self> {
        Rc::new(Self::default())
    }

    pub fn latest_message(&self) -> Option<String> {
        self.latest_message.borrow().clone()
    }

    /// Store the new message, then notify every subscriber.
    pub fn set_latest_message(&self, message: impl Into<String>) {
        *self.latest_message.borrow_mut() = Some(message.into());
        self.notify();
    }
}

impl Subject for MessageBoard {
    fn subscribers(&self) -> &Subscribers {
        &self.subscribers
    }
}

/// A citizen who reads the board every time it changes.
pub struct TownCitizen {
    name: String,
    board: Weak<MessageBoard>,
    inbox: RefCell<Vec<String>>,
}

impl TownCitizen {
    /// Create a citizen and subscribe it to `board`.
    pub fn new(name: impl Into<String>, board: &Rc<MessageBoard>) -> Rc<Self> {
        let citizen = Rc::new(Self {
            name: name.into(),
            board: Rc::downgrade(board),
            inbox: RefCell::new(Vec::new()),
        });
        board.add(citizen.clone());
        citizen
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Every message this citizen has been notified about, oldest first.
    pub fn received(&self) -> Vec<String> {
        self.inbox.borrow().clone()
    }

    pub fn notification_count(&self) -> usize {
        self.inbox.borrow().len()
    }
}

impl Observer for TownCitizen {
    fn update(&self) {
        let Some(board) = self.board.upgrade() else {
            return;
        };
        let message = board.latest_message().unwrap_or_default();
        println!("Notification for {}: {}", self.name, message);
        self.inbox.borrow_mut().push(message);
    }
}
