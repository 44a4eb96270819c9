use log::debug;
use std::cell::Cell;
use std::rc::Rc;

use super::request::{ExtraInfo, PopupRequest};
use super::tab::PopupTab;
use crate::config::PopupConfig;
use crate::item::ItemRef;
use crate::placement::{PositionEngine, PositionHandle, PositionOptions};
use crate::settings::{Setting, SettingsStore};

/// A close requested while the controller was borrowed elsewhere.
///
/// Readers see the popup as closed as soon as a close is requested; the
/// controller finishes the close on its next mutable call.
#[derive(Debug, Clone, Default)]
pub struct PendingClose(Rc<Cell<bool>>);

impl PendingClose {
    pub fn request(&self) {
        self.0.set(true);
    }

    #[must_use]
    pub fn is_requested(&self) -> bool {
        self.0.get()
    }

    fn clear(&self) {
        self.0.set(false);
    }
}

/// What the popup is currently showing.
///
/// The item and its anchor are always set or cleared together.
#[derive(Debug, Clone)]
pub struct ControllerState<E> {
    active_item: Option<ItemRef>,
    anchor: Option<E>,
    extra_info: ExtraInfo,
    selected_tab: PopupTab,
    pending_close: PendingClose,
}

impl<E> Default for ControllerState<E> {
    fn default() -> Self {
        Self {
            active_item: None,
            anchor: None,
            extra_info: ExtraInfo::default(),
            selected_tab: PopupTab::Overview,
            pending_close: PendingClose::default(),
        }
    }
}

impl<E> ControllerState<E> {
    #[must_use]
    pub fn active_item(&self) -> Option<&ItemRef> {
        if self.pending_close.is_requested() {
            return None;
        }
        self.active_item.as_ref()
    }

    #[must_use]
    pub fn anchor(&self) -> Option<&E> {
        if self.pending_close.is_requested() {
            return None;
        }
        self.anchor.as_ref()
    }

    /// Extra info from the last show request. Stale while the popup is closed;
    /// render from [`ControllerState::view`] instead.
    #[must_use]
    pub const fn extra_info(&self) -> &ExtraInfo {
        &self.extra_info
    }

    #[must_use]
    pub const fn selected_tab(&self) -> PopupTab {
        self.selected_tab
    }

    #[must_use]
    pub fn is_open(&self) -> bool {
        self.active_item().is_some()
    }

    /// Everything the rendering layer needs, or `None` while closed.
    #[must_use]
    pub fn view(&self) -> Option<PopupView<'_, E>> {
        match (self.active_item(), self.anchor()) {
            (Some(item), Some(anchor)) => Some(PopupView {
                item,
                anchor,
                extra_info: &self.extra_info,
                tab: self.selected_tab,
            }),
            _ => None,
        }
    }
}

#[derive(Debug)]
pub struct PopupView<'a, E> {
    pub item: &'a ItemRef,
    pub anchor: &'a E,
    pub extra_info: &'a ExtraInfo,
    pub tab: PopupTab,
}

/// Owns the single item popup: its state, its live placement and the
/// settings toggle behind the expanded details view.
pub struct PopupController<P: PositionEngine, S> {
    state: ControllerState<P::Element>,
    engine: P,
    handle: Option<P::Handle>,
    surface: Option<P::Element>,
    config: PopupConfig,
    settings: S,
}

impl<P: PositionEngine, S> PopupController<P, S> {
    #[must_use]
    pub const fn state(&self) -> &ControllerState<P::Element> {
        &self.state
    }

    #[must_use]
    pub const fn config(&self) -> &PopupConfig {
        &self.config
    }

    /// Shared flag for closing the popup while the controller is borrowed.
    #[must_use]
    pub fn pending_close(&self) -> PendingClose {
        self.state.pending_close.clone()
    }

    #[must_use]
    pub const fn has_position_handle(&self) -> bool {
        self.handle.is_some()
    }

    /// Destroy the live placement, if any.
    pub fn release_position(&mut self) {
        if let Some(handle) = self.handle.take() {
            handle.destroy();
        }
    }
}

impl<P, S> PopupController<P, S>
where
    P: PositionEngine,
    P::Element: PartialEq,
    S: SettingsStore,
{
    pub fn new(engine: P, settings: S, config: PopupConfig) -> Self {
        Self {
            state: ControllerState::default(),
            engine,
            handle: None,
            surface: None,
            config,
            settings,
        }
    }

    /// Share an existing close flag, so callers can request a close before
    /// the controller is reachable.
    #[must_use]
    pub fn with_pending_close(mut self, pending_close: PendingClose) -> Self {
        self.state.pending_close = pending_close;
        self
    }

    /// Finish a close requested through [`PendingClose`]. Returns `true` if
    /// one was applied.
    pub fn apply_pending_close(&mut self) -> bool {
        if !self.state.pending_close.is_requested() {
            return false;
        }
        self.on_close();
        true
    }

    pub fn on_show_request(&mut self, request: PopupRequest<P::Element>) {
        let PopupRequest {
            item,
            anchor,
            extra_info,
        } = request;
        self.apply_pending_close();
        let (Some(item), Some(anchor)) = (item, anchor) else {
            self.on_close();
            return;
        };
        if self.state.active_item.as_ref().is_some_and(|a| a.same(&item)) {
            self.on_close();
            return;
        }

        // The old placement is bound to the old anchor.
        self.release_position();

        if !item.reviewable && self.state.selected_tab == PopupTab::Reviews {
            self.state.selected_tab = PopupTab::Overview;
        }
        debug!("Showing item popup for {}", item.id);
        self.state.active_item = Some(item);
        self.state.anchor = Some(anchor);
        self.state.extra_info = extra_info;

        self.reposition();
    }

    pub fn on_close(&mut self) {
        self.state.pending_close.clear();
        if self.state.active_item.is_some() {
            debug!("Closing item popup");
        }
        self.state.active_item = None;
        self.state.anchor = None;
        self.release_position();
    }

    pub fn on_tab_changed(&mut self, tab: PopupTab) {
        self.apply_pending_close();
        self.state.selected_tab = tab;
    }

    #[must_use]
    pub fn expanded_details(&self) -> bool {
        self.settings.get_setting(Setting::ItemDetails)
    }

    pub fn toggle_expanded_details(&self) {
        let expanded = self.settings.get_setting(Setting::ItemDetails);
        self.settings.set_setting(Setting::ItemDetails, !expanded);
    }

    /// Record the mounted popup surface, or `None` when nothing is mounted.
    pub fn set_surface(&mut self, surface: Option<P::Element>) {
        self.apply_pending_close();
        if self.surface != surface {
            self.release_position();
            self.surface = surface;
        }
    }

    /// Called by the rendering layer after every paint.
    pub fn after_render(&mut self, surface: Option<P::Element>) {
        self.set_surface(surface);
        self.reposition();
    }

    /// Place the popup against its anchor, reusing the live placement when
    /// there is one.
    pub fn reposition(&mut self) {
        self.apply_pending_close();
        if self.state.active_item.is_none() {
            return;
        }
        let (Some(anchor), Some(surface)) = (self.state.anchor.as_ref(), self.surface.as_ref())
        else {
            return;
        };

        if let Some(handle) = self.handle.as_mut() {
            handle.recompute();
            return;
        }

        let boundary = self
            .config
            .boundary_selector
            .as_deref()
            .and_then(|selector| {
                let found = self.engine.resolve_boundary(selector);
                if found.is_none() {
                    debug!("Popup boundary {selector} not found; using default bounds");
                }
                found
            });
        let options = PositionOptions::new(
            self.config.policy.clone(),
            self.config.arrow_selector.clone(),
        )
        .with_boundary(boundary);

        let mut handle = self.engine.place(anchor, surface, options);
        // First layout pass can misplace the arrow.
        handle.recompute();
        self.handle = Some(handle);
    }
}

impl<P: PositionEngine, S> Drop for PopupController<P, S> {
    fn drop(&mut self) {
        self.release_position();
    }
}
