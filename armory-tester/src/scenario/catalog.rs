use anyhow::{Result, ensure};
use armory_core::{
    Placement, PlacementPolicy, PopupRequest, PopupTab, Rect, Setting, SettingsStore, Size,
    compute_placement,
};

use super::Scenario;
use super::harness::{BOUNDARY, Harness};

pub fn catalog() -> Vec<Scenario> {
    vec![
        Scenario::new(
            "smoke",
            "Show then hide",
            "Open an item, then close it through the bus",
            smoke,
        ),
        Scenario::new(
            "toggle",
            "Toggle on same item",
            "Showing the active item again closes the popup",
            toggle,
        ),
        Scenario::new(
            "switch-item",
            "Switch items",
            "Showing another item replaces the active item and its placement",
            switch_item,
        ),
        Scenario::new(
            "tab-reset",
            "Reviews tab reset",
            "Unreviewable items fall back to the overview tab",
            tab_reset,
        ),
        Scenario::new(
            "navigation-close",
            "Close on navigation",
            "Pre-navigation hooks close the popup",
            navigation_close,
        ),
        Scenario::new(
            "busy-navigation",
            "Close on navigation while busy",
            "Navigating while the popup is borrowed still closes it",
            busy_navigation,
        ),
        Scenario::new(
            "idempotent-close",
            "Idempotent close",
            "Closing twice is the same as closing once",
            idempotent_close,
        ),
        Scenario::new(
            "reentrant-requests",
            "Re-entrant requests",
            "Requests emitted while handling a request run afterwards, in order",
            reentrant_requests,
        ),
        Scenario::new(
            "expanded-details",
            "Expanded details toggle",
            "The details toggle writes through to settings",
            expanded_details,
        ),
        Scenario::new(
            "teardown",
            "Unmount teardown",
            "Unmounting releases the bus, the hooks and the placement",
            teardown,
        ),
        Scenario::new(
            "placement-flip",
            "Placement flipping",
            "Popups flip below the anchor when the preferred side overflows",
            placement_flip,
        ),
    ]
}

fn smoke(h: &mut Harness) -> Result<()> {
    let a = Harness::item("a", false);
    h.show(&a, 1);
    ensure!(h.active_id().as_deref() == Some("a"), "item a should be active");
    h.bus.hide();
    ensure!(!h.is_open(), "hide request should close the popup");
    ensure!(h.changes.get() == 2, "each request should notify once");
    Ok(())
}

fn toggle(h: &mut Harness) -> Result<()> {
    let x = Harness::item("x", false);
    h.show(&x, 1);
    h.render()?;
    h.show(&x, 2);
    ensure!(!h.is_open(), "second show of the same item should close");
    ensure!(
        h.engine_log.live_handles().is_empty(),
        "closing should destroy the placement"
    );
    Ok(())
}

fn switch_item(h: &mut Harness) -> Result<()> {
    let a = Harness::item("a", false);
    let b = Harness::item("b", false);
    h.show(&a, 1);
    h.render()?;
    h.show(&b, 2);
    ensure!(h.active_id().as_deref() == Some("b"), "item b should be active");
    let placements = h.engine_log.placements();
    ensure!(placements.len() == 2, "expected one placement per item, got {}", placements.len());
    ensure!(placements[0].destroys == 1, "old placement destroyed exactly once");
    ensure!(placements[1].anchor == 2, "new placement anchored to the new element");
    ensure!(
        placements[1].options.boundary == Some(BOUNDARY),
        "boundary resolved from selector"
    );
    Ok(())
}

fn tab_reset(h: &mut Harness) -> Result<()> {
    let a = Harness::item("a", true);
    let b = Harness::item("b", false);
    h.show(&a, 1);
    h.with_controller(|c| c.on_tab_changed(PopupTab::Reviews))?;
    h.show(&b, 2);
    let tab = h.with_controller(|c| c.state().selected_tab())?;
    ensure!(tab == PopupTab::Overview, "expected overview, got {tab:?}");
    Ok(())
}

fn navigation_close(h: &mut Harness) -> Result<()> {
    let a = Harness::item("a", false);
    h.show(&a, 1);
    h.render()?;
    h.transitions.run_before();
    ensure!(!h.is_open(), "navigation should close the popup");
    ensure!(h.engine_log.live_handles().is_empty(), "placement destroyed on navigation");
    Ok(())
}

fn busy_navigation(h: &mut Harness) -> Result<()> {
    let a = Harness::item("a", false);
    h.show(&a, 1);
    h.render()?;
    {
        let _busy = h.controller.borrow_mut();
        h.transitions.run_before();
    }
    ensure!(!h.is_open(), "deferred close should hide the popup");
    h.render()?;
    ensure!(
        h.engine_log.live_handles().is_empty(),
        "placement destroyed once the controller is free"
    );
    h.show(&a, 1);
    ensure!(h.is_open(), "the closed item can be shown again");
    Ok(())
}

fn idempotent_close(h: &mut Harness) -> Result<()> {
    let a = Harness::item("a", true);
    h.show(&a, 1);
    h.with_controller(|c| c.on_tab_changed(PopupTab::Reviews))?;
    h.render()?;
    h.with_controller(|c| {
        c.on_close();
        c.on_close();
    })?;
    let (open, tab) = h.with_controller(|c| (c.state().is_open(), c.state().selected_tab()))?;
    ensure!(!open, "popup should be closed");
    ensure!(tab == PopupTab::Reviews, "close keeps the selected tab");
    let destroys = h.engine_log.placement(0).map_or(0, |p| p.destroys);
    ensure!(destroys == 1, "placement destroyed once, got {destroys}");
    Ok(())
}

fn reentrant_requests(h: &mut Harness) -> Result<()> {
    let a = Harness::item("a", false);
    let b = Harness::item("b", false);
    h.relay(PopupRequest::show(b, 2));
    h.relay(PopupRequest::hide());
    h.show(&a, 1);
    ensure!(h.changes.get() == 3, "all three requests handled, got {}", h.changes.get());
    ensure!(!h.is_open(), "queued hide runs last");
    ensure!(!h.bus.is_dispatching(), "bus should be idle");
    Ok(())
}

fn expanded_details(h: &mut Harness) -> Result<()> {
    let before = h.settings.get_setting(Setting::ItemDetails);
    h.with_controller(|c| c.toggle_expanded_details())?;
    ensure!(
        h.settings.get_setting(Setting::ItemDetails) != before,
        "toggle should flip the stored setting"
    );
    let expanded = h.with_controller(|c| c.expanded_details())?;
    ensure!(expanded != before, "controller reads the stored setting");
    Ok(())
}

fn teardown(h: &mut Harness) -> Result<()> {
    let a = Harness::item("a", false);
    h.show(&a, 1);
    h.render()?;
    h.unmount();
    ensure!(!h.is_mounted(), "popup should report unmounted");
    ensure!(!h.bus.has_subscriber(), "bus subscription released");
    ensure!(h.transitions.hook_count() == 0, "navigation hook released");
    ensure!(h.engine_log.live_handles().is_empty(), "placement destroyed");
    h.unmount();
    let b = Harness::item("b", false);
    h.show(&b, 2);
    ensure!(h.active_id().as_deref() == Some("a"), "unmounted popup ignores requests");
    Ok(())
}

fn placement_flip(_h: &mut Harness) -> Result<()> {
    let policy = PlacementPolicy::default();
    let boundary = Rect::new(0.0, 0.0, 400.0, 800.0);
    let anchor = Rect::new(300.0, 100.0, 50.0, 50.0);
    let outcome = compute_placement(anchor, Size::new(200.0, 150.0), boundary, &policy, 10.0);
    ensure!(
        outcome.placement == Placement::Bottom,
        "expected bottom, got {:?}",
        outcome.placement
    );
    ensure!(
        outcome.x + 200.0 <= boundary.right(),
        "popup should be kept inside the boundary"
    );
    Ok(())
}
