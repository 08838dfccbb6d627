//! Recording map backend.

use std::sync::{Arc, Mutex};

use scrolly_core::map::{FlyToOptions, MapBackend, MapOptions, MapView};

/// One recorded `MapBackend` call. Handles are numbered from 1 in creation
/// order.
#[derive(Debug, Clone, PartialEq)]
pub enum MapCall {
    Create {
        handle: u32,
        container_id: String,
        view: MapView,
        options: MapOptions,
    },
    FlyTo {
        handle: u32,
        view: MapView,
        animation: FlyToOptions,
    },
    Remove {
        handle: u32,
    },
}

#[derive(Debug, Default)]
struct MapLog {
    calls: Vec<MapCall>,
    created: u32,
}

/// A map backend that records all calls and hands out numbered handles.
///
/// Clones share the same log.
#[derive(Debug, Clone, Default)]
pub struct RecordingMapBackend {
    log: Arc<Mutex<MapLog>>,
}

impl RecordingMapBackend {
    /// Create an empty recording backend.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a snapshot of all recorded calls.
    ///
    /// # Panics
    ///
    /// Panics if the internal mutex is poisoned.
    pub fn calls(&self) -> Vec<MapCall> {
        self.log.lock().unwrap().calls.clone()
    }

    /// Number of maps created and not yet removed.
    ///
    /// # Panics
    ///
    /// Panics if the internal mutex is poisoned.
    pub fn live_maps(&self) -> usize {
        let log = self.log.lock().unwrap();
        let created = log
            .calls
            .iter()
            .filter(|call| matches!(call, MapCall::Create { .. }))
            .count();
        let removed = log
            .calls
            .iter()
            .filter(|call| matches!(call, MapCall::Remove { .. }))
            .count();
        created - removed
    }
}

impl MapBackend for RecordingMapBackend {
    type Handle = u32;

    fn create(&mut self, container_id: &str, view: MapView, options: &MapOptions) -> u32 {
        let mut log = self.log.lock().unwrap();
        log.created += 1;
        let handle = log.created;
        log.calls.push(MapCall::Create {
            handle,
            container_id: container_id.to_owned(),
            view,
            options: options.clone(),
        });
        handle
    }

    fn fly_to(&mut self, handle: &u32, view: MapView, animation: &FlyToOptions) {
        self.log.lock().unwrap().calls.push(MapCall::FlyTo {
            handle: *handle,
            view,
            animation: *animation,
        });
    }

    fn remove(&mut self, handle: u32) {
        self.log.lock().unwrap().calls.push(MapCall::Remove { handle });
    }
}
