//! Keeps at most one live map and moves its camera.

use scrolly_core::map::{FlyToOptions, MapBackend, MapOptions, MapView};
use tracing::debug;

/// Lowest zoom the tile server renders.
pub const MIN_ZOOM: f64 = 1.0;
/// Highest zoom the tile server renders.
pub const MAX_ZOOM: f64 = 18.0;

/// Clamps a requested zoom into `[MIN_ZOOM, MAX_ZOOM]`.
#[must_use]
pub fn clamp_zoom(zoom: f64) -> f64 {
    zoom.clamp(MIN_ZOOM, MAX_ZOOM)
}

/// What `MapAdapter::show_map` did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MapAction {
    /// No map existed; one was created.
    Created,
    /// The live map flew to the new view.
    Moved,
    /// The live map belonged to another container; it was removed and a new
    /// one created.
    Recreated,
}

struct LiveMap<H> {
    container_id: String,
    handle: H,
}

/// Owns the single live map instance.
pub struct MapAdapter<M: MapBackend> {
    backend: M,
    live: Option<LiveMap<M::Handle>>,
    options: MapOptions,
    animation: FlyToOptions,
}

impl<M: MapBackend> MapAdapter<M> {
    /// Creates an adapter with the default map options and fly-to animation.
    pub fn new(backend: M) -> Self {
        Self {
            backend,
            live: None,
            options: MapOptions::default(),
            animation: FlyToOptions::default(),
        }
    }

    /// Shows the given view in `container_id`.
    ///
    /// A live map in another container is torn down first, so only one map
    /// exists at a time.
    pub fn show_map(
        &mut self,
        container_id: &str,
        latitude: f64,
        longitude: f64,
        zoom: f64,
    ) -> MapAction {
        let view = MapView {
            latitude,
            longitude,
            zoom: clamp_zoom(zoom),
        };

        let mut replaced = false;
        if let Some(live) = self.live.take() {
            if live.container_id == container_id {
                self.backend.fly_to(&live.handle, view, &self.animation);
                self.live = Some(live);
                debug!(container_id, zoom = view.zoom, "Moved map");
                return MapAction::Moved;
            }
            debug!(container_id = %live.container_id, "Removing map from previous container");
            self.backend.remove(live.handle);
            replaced = true;
        }

        let handle = self.backend.create(container_id, view, &self.options);
        self.live = Some(LiveMap {
            container_id: container_id.to_owned(),
            handle,
        });
        debug!(container_id, zoom = view.zoom, "Created map");

        if replaced {
            MapAction::Recreated
        } else {
            MapAction::Created
        }
    }

    /// Container id of the live map, if one exists.
    #[must_use]
    pub fn live_container(&self) -> Option<&str> {
        self.live.as_ref().map(|live| live.container_id.as_str())
    }
}
