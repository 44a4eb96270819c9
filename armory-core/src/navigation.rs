//! Pre-navigation hooks.
//!
//! The router calls [`TransitionService::run_before`] before it changes
//! routes; anything that must not outlive the current page (the item popup)
//! registers a hook here.

use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};

pub type TransitionHook = Rc<dyn Fn()>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HookId(u64);

pub trait TransitionHooks {
    /// Register a hook that runs before every navigation.
    fn on_before(&self, hook: TransitionHook) -> HookId;

    /// Remove a hook. Returns `false` if it was not registered.
    fn remove(&self, id: HookId) -> bool;
}

#[derive(Default)]
pub struct TransitionService {
    hooks: RefCell<Vec<(HookId, TransitionHook)>>,
    next_id: Cell<u64>,
}

impl TransitionService {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn hook_count(&self) -> usize {
        self.hooks.borrow().len()
    }

    /// Run every registered hook in registration order.
    pub fn run_before(&self) {
        let hooks: Vec<TransitionHook> = self
            .hooks
            .borrow()
            .iter()
            .map(|(_, hook)| Rc::clone(hook))
            .collect();
        for hook in hooks {
            hook();
        }
    }
}

impl TransitionHooks for TransitionService {
    fn on_before(&self, hook: TransitionHook) -> HookId {
        let id = HookId(self.next_id.get());
        self.next_id.set(id.0 + 1);
        self.hooks.borrow_mut().push((id, hook));
        id
    }

    fn remove(&self, id: HookId) -> bool {
        let mut hooks = self.hooks.borrow_mut();
        let before = hooks.len();
        hooks.retain(|(hook_id, _)| *hook_id != id);
        hooks.len() != before
    }
}

/// Owned registration of a transition hook. Unregisters at most once.
pub struct HookRegistration {
    unregister: Option<Box<dyn FnOnce() -> bool>>,
}

impl HookRegistration {
    pub fn register<T>(hooks: &Rc<T>, hook: TransitionHook) -> Self
    where
        T: TransitionHooks + 'static,
    {
        let id = hooks.on_before(hook);
        let weak: Weak<T> = Rc::downgrade(hooks);
        Self {
            unregister: Some(Box::new(move || {
                weak.upgrade().is_some_and(|hooks| hooks.remove(id))
            })),
        }
    }

    #[must_use]
    pub const fn is_registered(&self) -> bool {
        self.unregister.is_some()
    }

    /// Remove the hook. A second call is a no-op that returns `false`.
    pub fn unregister(&mut self) -> bool {
        self.unregister.take().is_some_and(|unregister| unregister())
    }
}

impl Drop for HookRegistration {
    fn drop(&mut self) {
        self.unregister();
    }
}
