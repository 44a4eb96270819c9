use std::cell::Cell;
use std::rc::Rc;

use armory_core::placement::EngineLog;
use armory_core::{
    ExtraInfo, Item, ItemRef, MemorySettings, PopupBus, PopupConfig, PopupController, PopupError,
    PopupHost, PopupRequest, PopupTab, RecordingEngine, Setting, SettingsStore,
    TransitionService,
};

type Controller = PopupController<RecordingEngine<&'static str>, Rc<MemorySettings>>;

fn item(id: &str, reviewable: bool) -> ItemRef {
    ItemRef::new(Item {
        id: id.to_string(),
        name: format!("Item {id}"),
        reviewable,
        ..Item::default()
    })
}

fn controller() -> (Controller, Rc<EngineLog<&'static str>>, Rc<MemorySettings>) {
    let engine = RecordingEngine::new().with_boundary("#content", "content");
    let log = engine.log();
    let settings = Rc::new(MemorySettings::default());
    let controller = PopupController::new(
        engine,
        Rc::clone(&settings),
        PopupConfig::default().with_boundary_selector("#content"),
    );
    (controller, log, settings)
}

fn assert_mutual_presence(c: &Controller) {
    assert_eq!(
        c.state().active_item().is_some(),
        c.state().anchor().is_some(),
        "item and anchor must be set together"
    );
}

#[test]
fn show_then_hide_scenario() {
    let (mut c, _, _) = controller();
    let a = item("a", false);
    c.on_show_request(PopupRequest::show(a.clone(), "e1"));
    assert_eq!(c.state().active_item(), Some(&a));
    assert_eq!(c.state().anchor(), Some(&"e1"));

    c.on_show_request(PopupRequest::hide());
    assert!(c.state().active_item().is_none());
    assert!(c.state().anchor().is_none());
}

#[test]
fn showing_same_item_twice_toggles_closed() {
    let (mut c, _, _) = controller();
    let x = item("x", true);
    c.on_show_request(PopupRequest::show(x.clone(), "e1"));
    assert!(c.state().is_open());
    c.on_show_request(PopupRequest::show(x, "e2"));
    assert!(!c.state().is_open());
    assert_mutual_presence(&c);
}

#[test]
fn equal_but_distinct_items_do_not_toggle() {
    let (mut c, _, _) = controller();
    c.on_show_request(PopupRequest::show(item("x", false), "e1"));
    c.on_show_request(PopupRequest::show(item("x", false), "e1"));
    assert!(c.state().is_open());
}

#[test]
fn item_and_anchor_stay_paired_across_every_operation() {
    let (mut c, _, _) = controller();
    let a = item("a", true);
    let b = item("b", false);
    let steps: Vec<Box<dyn Fn(&mut Controller)>> = vec![
        Box::new({
            let a = a.clone();
            move |c: &mut Controller| c.on_show_request(PopupRequest::show(a.clone(), "e1"))
        }),
        Box::new(|c: &mut Controller| c.on_tab_changed(PopupTab::Reviews)),
        Box::new({
            let b = b.clone();
            move |c: &mut Controller| c.on_show_request(PopupRequest::show(b.clone(), "e2"))
        }),
        Box::new(|c: &mut Controller| c.after_render(Some("surface"))),
        Box::new(|c: &mut Controller| c.reposition()),
        Box::new(|c: &mut Controller| {
            c.on_show_request(PopupRequest {
                item: Some(item("c", true)),
                anchor: None,
                extra_info: ExtraInfo::default(),
            });
        }),
        Box::new(|c: &mut Controller| c.on_close()),
        Box::new(|c: &mut Controller| c.on_close()),
        Box::new({
            let b = b.clone();
            move |c: &mut Controller| c.on_show_request(PopupRequest::show(b.clone(), "e3"))
        }),
        Box::new(|c: &mut Controller| c.set_surface(None)),
    ];
    for step in &steps {
        step(&mut c);
        assert_mutual_presence(&c);
    }
}

#[test]
fn reviews_tab_resets_for_unreviewable_item() {
    let (mut c, _, _) = controller();
    c.on_show_request(PopupRequest::show(item("a", true), "e1"));
    c.on_tab_changed(PopupTab::Reviews);

    c.on_show_request(PopupRequest::show(item("b", true), "e2"));
    assert_eq!(c.state().selected_tab(), PopupTab::Reviews);

    c.on_show_request(PopupRequest::show(item("c", false), "e3"));
    assert_eq!(c.state().selected_tab(), PopupTab::Overview);
}

#[test]
fn tab_survives_close() {
    let (mut c, _, _) = controller();
    c.on_show_request(PopupRequest::show(item("a", true), "e1"));
    c.on_tab_changed(PopupTab::Reviews);
    c.on_close();
    assert_eq!(c.state().selected_tab(), PopupTab::Reviews);
    assert!(c.state().view().is_none());
}

#[test]
fn new_item_gets_a_fresh_position_handle() {
    let (mut c, log, _) = controller();
    c.set_surface(Some("surface"));

    c.on_show_request(PopupRequest::show(item("a", false), "e1"));
    let first = log.placement(0).expect("first placement");
    assert_eq!(first.anchor, "e1");
    assert_eq!(first.options.boundary, Some("content"));
    assert_eq!(first.recomputes, 1, "arrow fix-up recompute");

    c.on_show_request(PopupRequest::show(item("b", false), "e2"));
    let first = log.placement(0).expect("first placement");
    let second = log.placement(1).expect("second placement");
    assert_ne!(first.handle_id, second.handle_id);
    assert_eq!(second.anchor, "e2");
    assert_eq!(first.destroys, 1);
    assert_eq!(second.destroys, 0);
    assert_eq!(log.live_handles(), vec![1]);
}

#[test]
fn reposition_reuses_live_handle() {
    let (mut c, log, _) = controller();
    c.on_show_request(PopupRequest::show(item("a", false), "e1"));
    assert_eq!(log.placement_count(), 0, "no surface yet");

    c.after_render(Some("surface"));
    c.after_render(Some("surface"));
    c.reposition();
    assert_eq!(log.placement_count(), 1);
    assert_eq!(log.placement(0).map(|p| p.recomputes), Some(3));
}

#[test]
fn missing_boundary_places_without_one() {
    let engine: RecordingEngine<&'static str> = RecordingEngine::new();
    let log = engine.log();
    let mut c = PopupController::new(
        engine,
        MemorySettings::default(),
        PopupConfig::default().with_boundary_selector("#missing"),
    );
    c.set_surface(Some("surface"));
    c.on_show_request(PopupRequest::show(item("a", false), "e1"));
    let placement = log.placement(0).expect("placed");
    assert_eq!(placement.options.boundary, None);
    assert!(!placement.options.events_enabled);
}

#[test]
fn losing_the_surface_destroys_the_handle() {
    let (mut c, log, _) = controller();
    c.after_render(Some("surface"));
    c.on_show_request(PopupRequest::show(item("a", false), "e1"));
    assert!(c.has_position_handle());
    c.after_render(None);
    assert!(!c.has_position_handle());
    assert_eq!(log.placement(0).map(|p| p.destroys), Some(1));
}

#[test]
fn close_is_idempotent() {
    let (mut c, log, _) = controller();
    c.on_close();
    assert!(!c.state().is_open());

    c.set_surface(Some("surface"));
    c.on_show_request(PopupRequest::show(item("a", false), "e1"));
    c.on_close();
    c.on_close();
    assert!(!c.state().is_open());
    assert_eq!(c.state().selected_tab(), PopupTab::Overview);
    assert_eq!(log.placement(0).map(|p| p.destroys), Some(1));
}

#[test]
fn toggle_expanded_details_writes_through_settings() {
    let (c, _, settings) = controller();
    assert!(!c.expanded_details());
    c.toggle_expanded_details();
    assert!(settings.get_setting(Setting::ItemDetails));
    c.toggle_expanded_details();
    assert!(!settings.get_setting(Setting::ItemDetails));
    assert_eq!(settings.write_count(), 2);
}

#[test]
fn extra_info_passes_through_unchanged() {
    let (mut c, _, _) = controller();
    let extra = ExtraInfo {
        owned: true,
        acquired: true,
        ..ExtraInfo::default()
    };
    c.on_show_request(PopupRequest::show(item("a", false), "e1").with_extra_info(extra.clone()));
    let view = c.state().view().expect("open");
    assert_eq!(view.extra_info, &extra);
}

#[test]
fn mounted_controller_handles_bus_and_navigation() {
    let (c, log, _) = controller();
    let c = Rc::new(std::cell::RefCell::new(c));
    let bus = PopupBus::new();
    let transitions = Rc::new(TransitionService::new());
    let changes = Rc::new(Cell::new(0));

    let mut mounted = {
        let changes = Rc::clone(&changes);
        PopupHost::new(Rc::clone(&c))
            .on_change(move || changes.set(changes.get() + 1))
            .mount(&bus, &transitions)
            .expect("mount")
    };
    c.borrow_mut().set_surface(Some("surface"));

    bus.show_item(item("a", false), "e1", ExtraInfo::default());
    assert!(c.borrow().state().is_open());
    assert_eq!(changes.get(), 1);

    transitions.run_before();
    assert!(!c.borrow().state().is_open());
    assert_eq!(changes.get(), 2);

    bus.show_item(item("b", false), "e2", ExtraInfo::default());
    assert!(c.borrow().has_position_handle());

    mounted.unmount();
    assert!(!bus.has_subscriber());
    assert_eq!(transitions.hook_count(), 0);
    assert!(log.live_handles().is_empty());

    mounted.unmount();
    assert_eq!(transitions.hook_count(), 0);

    bus.show_item(item("c", false), "e3", ExtraInfo::default());
    assert_eq!(
        c.borrow().state().active_item().map(|i| i.id.clone()),
        Some("b".to_string())
    );
}

#[test]
fn only_one_popup_can_mount_per_bus() {
    let bus = PopupBus::new();
    let transitions = Rc::new(TransitionService::new());
    let (first, _, _) = controller();
    let (second, _, _) = controller();
    let _mounted = PopupHost::new(Rc::new(std::cell::RefCell::new(first)))
        .mount(&bus, &transitions)
        .expect("first mount");
    let result = PopupHost::new(Rc::new(std::cell::RefCell::new(second))).mount(&bus, &transitions);
    assert!(matches!(result, Err(PopupError::AlreadySubscribed)));
    assert_eq!(transitions.hook_count(), 1);
}

#[test]
fn dropping_the_mount_tears_everything_down() {
    let (c, log, _) = controller();
    let c = Rc::new(std::cell::RefCell::new(c));
    let bus = PopupBus::new();
    let transitions = Rc::new(TransitionService::new());
    {
        let _mounted = PopupHost::new(Rc::clone(&c))
            .mount(&bus, &transitions)
            .expect("mount");
        c.borrow_mut().set_surface(Some("surface"));
        bus.show_item(item("a", false), "e1", ExtraInfo::default());
        assert_eq!(log.live_handles(), vec![0]);
    }
    assert!(!bus.has_subscriber());
    assert_eq!(transitions.hook_count(), 0);
    assert_eq!(log.placement(0).map(|p| p.destroys), Some(1));
}

#[test]
fn navigation_while_controller_is_borrowed_still_closes() {
    let (c, log, _) = controller();
    let c = Rc::new(std::cell::RefCell::new(c));
    let bus = PopupBus::new();
    let transitions = Rc::new(TransitionService::new());
    let _mounted = PopupHost::new(Rc::clone(&c))
        .mount(&bus, &transitions)
        .expect("mount");
    c.borrow_mut().set_surface(Some("surface"));
    bus.show_item(item("a", false), "e1", ExtraInfo::default());

    {
        let held = c.borrow();
        transitions.run_before();
        assert!(!held.state().is_open(), "readers see the close at once");
        assert!(held.state().view().is_none());
    }
    assert!(!c.borrow().state().is_open());
    assert_mutual_presence(&c.borrow());

    assert!(c.borrow_mut().apply_pending_close());
    assert!(!c.borrow().has_position_handle());
    assert_eq!(log.placement(0).map(|p| p.destroys), Some(1));
    assert!(!c.borrow_mut().apply_pending_close());
}

#[test]
fn deferred_close_is_finished_by_the_next_update() {
    let (c, log, _) = controller();
    let c = Rc::new(std::cell::RefCell::new(c));
    let bus = PopupBus::new();
    let transitions = Rc::new(TransitionService::new());
    let _mounted = PopupHost::new(Rc::clone(&c))
        .mount(&bus, &transitions)
        .expect("mount");
    c.borrow_mut().set_surface(Some("surface"));
    let a = item("a", false);
    bus.show_item(a.clone(), "e1", ExtraInfo::default());

    {
        let _held = c.borrow_mut();
        transitions.run_before();
        bus.emit(PopupRequest::hide());
    }
    c.borrow_mut().after_render(Some("surface"));
    assert!(!c.borrow().state().is_open());
    assert_eq!(log.live_handles(), Vec::<usize>::new());

    // The close already happened, so showing the same item opens it again.
    bus.show_item(a, "e1", ExtraInfo::default());
    assert!(c.borrow().state().is_open());
}

#[test]
fn mounting_a_borrowed_controller_fails() {
    let (c, _, _) = controller();
    let c = Rc::new(std::cell::RefCell::new(c));
    let bus = PopupBus::new();
    let transitions = Rc::new(TransitionService::new());
    let _held = c.borrow_mut();
    let result = PopupHost::new(Rc::clone(&c)).mount(&bus, &transitions);
    assert!(matches!(result, Err(PopupError::ControllerBusy)));
    assert!(!bus.has_subscriber());
}
