//! Application-wide channel for item popup requests.
//!
//! Any number of emitters share a [`PopupBus`]; exactly one consumer may be
//! subscribed at a time. Requests are delivered in emission order, and a
//! request emitted from inside a handler is queued until that handler returns.

use log::debug;
use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::{Rc, Weak};

use super::request::{ExtraInfo, PopupRequest};
use crate::error::PopupError;
use crate::item::ItemRef;

type Handler<E> = Rc<dyn Fn(PopupRequest<E>)>;

struct BusInner<E> {
    subscriber: Option<(u64, Handler<E>)>,
    next_token: u64,
    queue: VecDeque<PopupRequest<E>>,
    dispatching: bool,
}

pub struct PopupBus<E> {
    inner: Rc<RefCell<BusInner<E>>>,
}

impl<E> Clone for PopupBus<E> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl<E> PartialEq for PopupBus<E> {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }
}

impl<E: 'static> Default for PopupBus<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: 'static> PopupBus<E> {
    #[must_use]
    pub fn new() -> Self {
        Self {
            inner: Rc::new(RefCell::new(BusInner {
                subscriber: None,
                next_token: 0,
                queue: VecDeque::new(),
                dispatching: false,
            })),
        }
    }

    /// Register the single consumer of popup requests.
    ///
    /// # Errors
    ///
    /// Returns [`PopupError::AlreadySubscribed`] while another subscription
    /// is still active.
    pub fn subscribe(
        &self,
        handler: impl Fn(PopupRequest<E>) + 'static,
    ) -> Result<Subscription<E>, PopupError> {
        let mut inner = self.inner.borrow_mut();
        if inner.subscriber.is_some() {
            return Err(PopupError::AlreadySubscribed);
        }
        let token = inner.next_token;
        inner.next_token += 1;
        inner.subscriber = Some((token, Rc::new(handler)));
        Ok(Subscription {
            bus: Rc::downgrade(&self.inner),
            token: Some(token),
        })
    }

    #[must_use]
    pub fn has_subscriber(&self) -> bool {
        self.inner.borrow().subscriber.is_some()
    }

    /// `true` while a handler is running; emits made now are queued.
    #[must_use]
    pub fn is_dispatching(&self) -> bool {
        self.inner.borrow().dispatching
    }

    pub fn emit(&self, request: PopupRequest<E>) {
        {
            let mut inner = self.inner.borrow_mut();
            if inner.subscriber.is_none() {
                debug!("dropping popup request: no subscriber");
                return;
            }
            inner.queue.push_back(request);
            if inner.dispatching {
                return;
            }
            inner.dispatching = true;
        }

        loop {
            let next = {
                let mut inner = self.inner.borrow_mut();
                let handler = inner.subscriber.as_ref().map(|(_, h)| Rc::clone(h));
                match (handler, inner.queue.pop_front()) {
                    (Some(handler), Some(request)) => Some((handler, request)),
                    _ => {
                        inner.queue.clear();
                        inner.dispatching = false;
                        None
                    }
                }
            };
            let Some((handler, request)) = next else {
                break;
            };
            handler(request);
        }
    }

    pub fn show_item(&self, item: ItemRef, anchor: E, extra_info: ExtraInfo) {
        self.emit(PopupRequest::show(item, anchor).with_extra_info(extra_info));
    }

    pub fn hide(&self) {
        self.emit(PopupRequest::hide());
    }
}

/// Keeps the bus subscription alive; released on `unsubscribe` or drop.
pub struct Subscription<E> {
    bus: Weak<RefCell<BusInner<E>>>,
    token: Option<u64>,
}

impl<E> Subscription<E> {
    #[must_use]
    pub const fn is_active(&self) -> bool {
        self.token.is_some()
    }

    /// Release the subscriber slot. Returns `false` if already released.
    pub fn unsubscribe(&mut self) -> bool {
        let Some(token) = self.token.take() else {
            return false;
        };
        if let Some(bus) = self.bus.upgrade() {
            let mut inner = bus.borrow_mut();
            if inner.subscriber.as_ref().is_some_and(|(t, _)| *t == token) {
                inner.subscriber = None;
                inner.queue.clear();
            }
        }
        true
    }
}

impl<E> Drop for Subscription<E> {
    fn drop(&mut self) {
        self.unsubscribe();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::item::Item;
    use std::cell::RefCell;

    fn item(id: &str) -> ItemRef {
        ItemRef::new(Item {
            id: id.into(),
            ..Item::default()
        })
    }

    #[test]
    fn second_subscriber_is_rejected_until_first_releases() {
        let bus: PopupBus<u32> = PopupBus::new();
        let mut first = bus.subscribe(|_| {}).unwrap();
        assert!(matches!(
            bus.subscribe(|_| {}),
            Err(PopupError::AlreadySubscribed)
        ));
        assert!(first.unsubscribe());
        assert!(!first.unsubscribe());
        assert!(bus.subscribe(|_| {}).is_ok());
    }

    #[test]
    fn dropping_subscription_frees_the_slot() {
        let bus: PopupBus<u32> = PopupBus::new();
        {
            let _sub = bus.subscribe(|_| {}).unwrap();
            assert!(bus.has_subscriber());
        }
        assert!(!bus.has_subscriber());
    }

    #[test]
    fn reentrant_emits_are_delivered_after_current_handler() {
        let bus: PopupBus<u32> = PopupBus::new();
        let seen = Rc::new(RefCell::new(Vec::new()));
        let a = item("a");
        let b = item("b");
        let _sub = {
            let seen = Rc::clone(&seen);
            let bus_inner = bus.clone();
            let follow_up = b.clone();
            bus.subscribe(move |req: PopupRequest<u32>| {
                let id = req.item.as_ref().map(|i| i.id.clone()).unwrap_or_default();
                seen.borrow_mut().push(format!("start {id}"));
                if id == "a" {
                    bus_inner.show_item(follow_up.clone(), 2, ExtraInfo::default());
                }
                seen.borrow_mut().push(format!("end {id}"));
            })
            .unwrap()
        };
        bus.show_item(a, 1, ExtraInfo::default());
        assert_eq!(
            *seen.borrow(),
            vec!["start a", "end a", "start b", "end b"]
        );
    }

    #[test]
    fn emit_without_subscriber_is_dropped() {
        let bus: PopupBus<u32> = PopupBus::new();
        bus.hide();
        let count = Rc::new(RefCell::new(0));
        let _sub = {
            let count = Rc::clone(&count);
            bus.subscribe(move |_| *count.borrow_mut() += 1).unwrap()
        };
        assert_eq!(*count.borrow(), 0);
        bus.hide();
        assert_eq!(*count.borrow(), 1);
    }
}
