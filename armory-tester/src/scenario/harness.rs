use std::cell::{Cell, RefCell};
use std::collections::VecDeque;
use std::rc::Rc;

use anyhow::{Result, anyhow};
use armory_core::placement::EngineLog;
use armory_core::{
    ExtraInfo, Item, ItemRef, MemorySettings, MountedPopup, PopupBus, PopupConfig,
    PopupController, PopupHost, PopupRequest, RecordingEngine, TransitionService,
};

/// Anchors are plain ids in headless runs.
pub type Anchor = u32;
pub type Engine = RecordingEngine<Anchor>;
pub type Controller = PopupController<Engine, Rc<MemorySettings>>;

pub const SURFACE: Anchor = 0;
pub const BOUNDARY: Anchor = 9_999;
const BOUNDARY_SELECTOR: &str = "#content";

/// A mounted popup wired to a bus, navigation hooks and a recording engine,
/// standing in for the browser shell.
pub struct Harness {
    pub controller: Rc<RefCell<Controller>>,
    pub bus: PopupBus<Anchor>,
    pub transitions: Rc<TransitionService>,
    pub engine_log: Rc<EngineLog<Anchor>>,
    pub settings: Rc<MemorySettings>,
    pub changes: Rc<Cell<usize>>,
    relay: Rc<RefCell<VecDeque<PopupRequest<Anchor>>>>,
    mounted: Option<MountedPopup<Engine, Rc<MemorySettings>>>,
}

impl Harness {
    pub fn mount() -> Result<Self> {
        let engine = RecordingEngine::new().with_boundary(BOUNDARY_SELECTOR, BOUNDARY);
        let engine_log = engine.log();
        let settings = Rc::new(MemorySettings::default());
        let controller = Rc::new(RefCell::new(PopupController::new(
            engine,
            Rc::clone(&settings),
            PopupConfig::default().with_boundary_selector(BOUNDARY_SELECTOR),
        )));
        let bus = PopupBus::new();
        let transitions = Rc::new(TransitionService::new());
        let changes = Rc::new(Cell::new(0));
        let relay = Rc::new(RefCell::new(VecDeque::new()));

        let mounted = {
            let changes = Rc::clone(&changes);
            let relay = Rc::clone(&relay);
            let relay_bus = bus.clone();
            PopupHost::new(Rc::clone(&controller))
                .on_change(move || {
                    changes.set(changes.get() + 1);
                    let next = relay.borrow_mut().pop_front();
                    if let Some(request) = next {
                        relay_bus.emit(request);
                    }
                })
                .mount(&bus, &transitions)?
        };

        Ok(Self {
            controller,
            bus,
            transitions,
            engine_log,
            settings,
            changes,
            relay,
            mounted: Some(mounted),
        })
    }

    pub fn item(id: &str, reviewable: bool) -> ItemRef {
        ItemRef::new(Item {
            id: id.to_string(),
            name: format!("Item {id}"),
            reviewable,
            ..Item::default()
        })
    }

    pub fn show(&self, item: &ItemRef, anchor: Anchor) {
        self.bus.show_item(item.clone(), anchor, ExtraInfo::default());
    }

    /// Queue a request to be emitted from inside the next change
    /// notification, i.e. while the bus is still dispatching.
    pub fn relay(&self, request: PopupRequest<Anchor>) {
        self.relay.borrow_mut().push_back(request);
    }

    /// Simulate a render pass with the surface mounted.
    pub fn render(&self) -> Result<()> {
        let mut controller = self
            .controller
            .try_borrow_mut()
            .map_err(|_| anyhow!("controller borrowed during render"))?;
        let surface = controller.state().is_open().then_some(SURFACE);
        controller.after_render(surface);
        Ok(())
    }

    pub fn with_controller<T>(&self, f: impl FnOnce(&mut Controller) -> T) -> Result<T> {
        let mut controller = self
            .controller
            .try_borrow_mut()
            .map_err(|_| anyhow!("controller already borrowed"))?;
        Ok(f(&mut controller))
    }

    pub fn is_open(&self) -> bool {
        self.controller.borrow().state().is_open()
    }

    pub fn active_id(&self) -> Option<String> {
        self.controller
            .borrow()
            .state()
            .active_item()
            .map(|item| item.id.clone())
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted.as_ref().is_some_and(MountedPopup::is_mounted)
    }

    pub fn unmount(&mut self) {
        if let Some(mounted) = self.mounted.as_mut() {
            mounted.unmount();
        }
    }
}
