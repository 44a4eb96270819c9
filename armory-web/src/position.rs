//! DOM placement engine.
//!
//! Measures the anchor, the popup surface and the boundary with
//! `getBoundingClientRect`, runs the shared placement algorithm and writes the
//! result back as a fixed-position transform. Recomputes are batched onto the
//! next animation frame.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use armory_core::{
    PlacementOutcome, PositionEngine, PositionHandle, PositionOptions, Size, compute_placement,
};
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::Element;

use crate::dom;

pub const PLACEMENT_ATTR: &str = "x-placement";

#[derive(Debug, Default, Clone, Copy)]
pub struct DomPositionEngine;

impl PositionEngine for DomPositionEngine {
    type Element = Element;
    type Handle = DomPlacement;

    fn place(
        &mut self,
        anchor: &Element,
        surface: &Element,
        options: PositionOptions<Element>,
    ) -> DomPlacement {
        let inner = Rc::new(PlacementState {
            anchor: anchor.clone(),
            surface: surface.clone(),
            options,
            frame: Cell::new(None),
            on_frame: RefCell::new(None),
            disposed: Cell::new(false),
        });
        inner.apply();
        DomPlacement { inner }
    }

    fn resolve_boundary(&self, selector: &str) -> Option<Element> {
        dom::query(selector)
    }
}

struct PlacementState {
    anchor: Element,
    surface: Element,
    options: PositionOptions<Element>,
    frame: Cell<Option<i32>>,
    on_frame: RefCell<Option<Closure<dyn FnMut(f64)>>>,
    disposed: Cell<bool>,
}

impl PlacementState {
    fn apply(&self) {
        if self.disposed.get() {
            return;
        }
        let anchor = dom::client_rect(&self.anchor);
        let surface = dom::client_rect(&self.surface);
        let boundary = self
            .options
            .boundary
            .as_ref()
            .map_or_else(dom::viewport_rect, dom::client_rect);
        let arrow = self
            .surface
            .query_selector(&self.options.arrow_selector)
            .ok()
            .flatten();
        let arrow_len = arrow.as_ref().map_or(0.0, |arrow| {
            let rect = dom::client_rect(arrow);
            rect.width.max(rect.height)
        });

        let outcome = compute_placement(
            anchor,
            Size::new(surface.width, surface.height),
            boundary,
            &self.options.policy,
            arrow_len,
        );
        self.write(&outcome, arrow.as_ref());
    }

    fn write(&self, outcome: &PlacementOutcome, arrow: Option<&Element>) {
        set_attribute(&self.surface, "style", &surface_style(outcome));
        set_attribute(&self.surface, PLACEMENT_ATTR, outcome.placement.as_str());
        if let Some(arrow) = arrow {
            set_attribute(arrow, "style", &arrow_style(outcome));
        }
    }

    fn cancel_frame(&self) {
        if let Some(id) = self.frame.take()
            && let Some(win) = dom::window()
            && let Err(err) = win.cancel_animation_frame(id)
        {
            log::debug!("cancelAnimationFrame failed: {}", dom::js_error_message(&err));
        }
    }
}

fn set_attribute(element: &Element, name: &str, value: &str) {
    if let Err(err) = element.set_attribute(name, value) {
        log::warn!("Failed to set {name}: {}", dom::js_error_message(&err));
    }
}

fn remove_attribute(element: &Element, name: &str) {
    if let Err(err) = element.remove_attribute(name) {
        log::debug!("Failed to remove {name}: {}", dom::js_error_message(&err));
    }
}

/// Inline style that pins the surface at the computed viewport coordinates.
#[must_use]
pub fn surface_style(outcome: &PlacementOutcome) -> String {
    format!(
        "position: fixed; top: 0; left: 0; will-change: transform; \
         transform: translate3d({:.0}px, {:.0}px, 0);",
        outcome.x, outcome.y
    )
}

#[must_use]
pub fn arrow_style(outcome: &PlacementOutcome) -> String {
    if outcome.placement.is_vertical() {
        format!("left: {:.0}px;", outcome.arrow)
    } else {
        format!("top: {:.0}px;", outcome.arrow)
    }
}

/// A live DOM placement. Destroying it cancels any pending frame.
pub struct DomPlacement {
    inner: Rc<PlacementState>,
}

impl PositionHandle for DomPlacement {
    fn recompute(&mut self) {
        let inner = &self.inner;
        if inner.disposed.get() || inner.frame.get().is_some() {
            return;
        }
        let Some(win) = dom::window() else {
            return;
        };
        let mut slot = inner.on_frame.borrow_mut();
        let callback = slot.get_or_insert_with(|| {
            let state = Rc::downgrade(inner);
            Closure::<dyn FnMut(f64)>::new(move |_timestamp: f64| {
                if let Some(state) = state.upgrade() {
                    state.frame.set(None);
                    state.apply();
                }
            })
        });
        match win.request_animation_frame(callback.as_ref().unchecked_ref()) {
            Ok(id) => inner.frame.set(Some(id)),
            Err(err) => {
                log::warn!(
                    "requestAnimationFrame failed; placing now: {}",
                    dom::js_error_message(&err)
                );
                inner.apply();
            }
        }
    }

    fn destroy(self) {
        let inner = &self.inner;
        inner.disposed.set(true);
        inner.cancel_frame();
        inner.on_frame.borrow_mut().take();
        remove_attribute(&inner.surface, PLACEMENT_ATTR);
        remove_attribute(&inner.surface, "style");
    }
}
