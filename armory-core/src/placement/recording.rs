//! A [`PositionEngine`] that records what it was asked to do instead of
//! measuring anything. Used by the tester and by headless tests.

use std::cell::RefCell;
use std::collections::BTreeMap;
use std::rc::Rc;

use super::{PositionEngine, PositionHandle, PositionOptions};

#[derive(Debug, Clone, PartialEq)]
pub struct PlacementRecord<E> {
    pub handle_id: usize,
    pub anchor: E,
    pub surface: E,
    pub options: PositionOptions<E>,
    pub recomputes: usize,
    pub destroys: usize,
}

/// Shared view of everything a [`RecordingEngine`] did.
#[derive(Debug)]
pub struct EngineLog<E> {
    records: RefCell<Vec<PlacementRecord<E>>>,
}

impl<E: Clone> EngineLog<E> {
    #[must_use]
    pub fn placements(&self) -> Vec<PlacementRecord<E>> {
        self.records.borrow().clone()
    }

    #[must_use]
    pub fn placement(&self, handle_id: usize) -> Option<PlacementRecord<E>> {
        self.records.borrow().get(handle_id).cloned()
    }

    #[must_use]
    pub fn placement_count(&self) -> usize {
        self.records.borrow().len()
    }

    /// Handles created but not yet destroyed.
    #[must_use]
    pub fn live_handles(&self) -> Vec<usize> {
        self.records
            .borrow()
            .iter()
            .filter(|r| r.destroys == 0)
            .map(|r| r.handle_id)
            .collect()
    }
}

pub struct RecordingEngine<E> {
    log: Rc<EngineLog<E>>,
    boundaries: BTreeMap<String, E>,
}

impl<E: Clone> Default for RecordingEngine<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: Clone> RecordingEngine<E> {
    #[must_use]
    pub fn new() -> Self {
        Self {
            log: Rc::new(EngineLog {
                records: RefCell::new(Vec::new()),
            }),
            boundaries: BTreeMap::new(),
        }
    }

    /// Make `selector` resolve to `element`.
    #[must_use]
    pub fn with_boundary(mut self, selector: impl Into<String>, element: E) -> Self {
        self.boundaries.insert(selector.into(), element);
        self
    }

    #[must_use]
    pub fn log(&self) -> Rc<EngineLog<E>> {
        Rc::clone(&self.log)
    }
}

impl<E: Clone> PositionEngine for RecordingEngine<E> {
    type Element = E;
    type Handle = RecordingHandle<E>;

    fn place(&mut self, anchor: &E, surface: &E, options: PositionOptions<E>) -> Self::Handle {
        let mut records = self.log.records.borrow_mut();
        let handle_id = records.len();
        records.push(PlacementRecord {
            handle_id,
            anchor: anchor.clone(),
            surface: surface.clone(),
            options,
            recomputes: 0,
            destroys: 0,
        });
        RecordingHandle {
            id: handle_id,
            log: Rc::clone(&self.log),
        }
    }

    fn resolve_boundary(&self, selector: &str) -> Option<E> {
        self.boundaries.get(selector).cloned()
    }
}

pub struct RecordingHandle<E> {
    id: usize,
    log: Rc<EngineLog<E>>,
}

impl<E> RecordingHandle<E> {
    #[must_use]
    pub const fn id(&self) -> usize {
        self.id
    }
}

impl<E> PositionHandle for RecordingHandle<E> {
    fn recompute(&mut self) {
        if let Some(record) = self.log.records.borrow_mut().get_mut(self.id) {
            record.recomputes += 1;
        }
    }

    fn destroy(self) {
        if let Some(record) = self.log.records.borrow_mut().get_mut(self.id) {
            record.destroys += 1;
        }
    }
}
