//! Mount/unmount lifecycle for the popup controller.
//!
//! Mounting wires the controller to the popup bus and to the router's
//! pre-navigation hooks; unmounting (or dropping the [`MountedPopup`])
//! releases both and destroys any live placement.

use log::{debug, warn};
use std::cell::RefCell;
use std::rc::{Rc, Weak};

use super::bus::{PopupBus, Subscription};
use super::controller::{PendingClose, PopupController};
use crate::error::PopupError;
use crate::navigation::{HookRegistration, TransitionHooks};
use crate::placement::PositionEngine;
use crate::settings::SettingsStore;

pub type SharedController<P, S> = Rc<RefCell<PopupController<P, S>>>;

pub struct PopupHost<P: PositionEngine, S> {
    controller: SharedController<P, S>,
    on_change: Option<Rc<dyn Fn()>>,
}

impl<P, S> PopupHost<P, S>
where
    P: PositionEngine + 'static,
    P::Element: PartialEq + 'static,
    S: SettingsStore + 'static,
{
    pub fn new(controller: SharedController<P, S>) -> Self {
        Self {
            controller,
            on_change: None,
        }
    }

    /// Notify after each request or navigation the controller handled.
    #[must_use]
    pub fn on_change(mut self, listener: impl Fn() + 'static) -> Self {
        self.on_change = Some(Rc::new(listener));
        self
    }

    /// Subscribe to popup requests and close the popup before navigation.
    ///
    /// # Errors
    ///
    /// Returns [`PopupError::AlreadySubscribed`] if another popup is mounted
    /// on the same bus, or [`PopupError::ControllerBusy`] if the controller is
    /// mutably borrowed.
    pub fn mount<T>(
        self,
        bus: &PopupBus<P::Element>,
        transitions: &Rc<T>,
    ) -> Result<MountedPopup<P, S>, PopupError>
    where
        T: TransitionHooks + 'static,
    {
        let pending_close = self
            .controller
            .try_borrow()
            .map_err(|_| PopupError::ControllerBusy)?
            .pending_close();

        let subscription = {
            let controller = Rc::downgrade(&self.controller);
            let pending_close = pending_close.clone();
            let on_change = self.on_change.clone();
            bus.subscribe(move |request| {
                if request.is_hide() {
                    close(&controller, &pending_close);
                } else {
                    with_controller(&controller, |c| c.on_show_request(request));
                }
                notify(on_change.as_ref());
            })?
        };

        let registration = {
            let controller = Rc::downgrade(&self.controller);
            let on_change = self.on_change.clone();
            HookRegistration::register(
                transitions,
                Rc::new(move || {
                    close(&controller, &pending_close);
                    notify(on_change.as_ref());
                }),
            )
        };

        debug!("Item popup mounted");
        Ok(MountedPopup {
            controller: Rc::downgrade(&self.controller),
            subscription: Some(subscription),
            registration: Some(registration),
        })
    }
}

fn with_controller<P, S>(
    controller: &Weak<RefCell<PopupController<P, S>>>,
    f: impl FnOnce(&mut PopupController<P, S>),
) where
    P: PositionEngine,
{
    let Some(controller) = controller.upgrade() else {
        return;
    };
    match controller.try_borrow_mut() {
        Ok(mut controller) => f(&mut controller),
        Err(_) => warn!("Item popup busy; dropping event"),
    }
}

/// Close now, or flag the close for the controller's next update if it is
/// borrowed. A close is never dropped.
fn close<P, S>(controller: &Weak<RefCell<PopupController<P, S>>>, pending_close: &PendingClose)
where
    P: PositionEngine,
    P::Element: PartialEq,
    S: SettingsStore,
{
    let Some(controller) = controller.upgrade() else {
        return;
    };
    match controller.try_borrow_mut() {
        Ok(mut controller) => controller.on_close(),
        Err(_) => {
            debug!("Item popup busy; close deferred");
            pending_close.request();
        }
    }
}

fn notify(listener: Option<&Rc<dyn Fn()>>) {
    if let Some(listener) = listener {
        listener();
    }
}

/// A mounted popup controller. Dropping it unmounts.
pub struct MountedPopup<P: PositionEngine, S> {
    controller: Weak<RefCell<PopupController<P, S>>>,
    subscription: Option<Subscription<P::Element>>,
    registration: Option<HookRegistration>,
}

impl<P: PositionEngine, S> MountedPopup<P, S> {
    #[must_use]
    pub const fn is_mounted(&self) -> bool {
        self.subscription.is_some()
    }

    /// Release the bus subscription and navigation hook and destroy any live
    /// placement. Safe to call more than once.
    pub fn unmount(&mut self) {
        if let Some(mut subscription) = self.subscription.take() {
            subscription.unsubscribe();
        }
        if let Some(mut registration) = self.registration.take() {
            registration.unregister();
        }
        if let Some(controller) = self.controller.upgrade() {
            match controller.try_borrow_mut() {
                Ok(mut controller) => controller.release_position(),
                Err(_) => warn!("Item popup busy during unmount; placement left to drop"),
            }
        }
        debug!("Item popup unmounted");
    }
}

impl<P: PositionEngine, S> Drop for MountedPopup<P, S> {
    fn drop(&mut self) {
        if self.is_mounted() {
            self.unmount();
        }
    }
}
