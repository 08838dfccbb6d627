//! Map rendering port.

use serde::Serialize;

/// Where the map camera points.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MapView {
    /// Latitude in degrees.
    pub latitude: f64,
    /// Longitude in degrees.
    pub longitude: f64,
    /// Zoom level, already clamped to the backend's supported range.
    pub zoom: f64,
}

/// Base tile layer drawn under every map.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TileLayer {
    /// Tile URL template with `{s}`, `{z}`, `{x}` and `{y}` placeholders.
    pub url_template: String,
    /// Attribution shown in the map corner.
    pub attribution: String,
}

impl Default for TileLayer {
    fn default() -> Self {
        Self {
            url_template: "https://{s}.tile.openstreetmap.org/{z}/{x}/{y}.png".to_owned(),
            attribution: "© OpenStreetMap contributors".to_owned(),
        }
    }
}

/// Options used when a map instance is created.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MapOptions {
    /// Whether zoom buttons are shown.
    pub zoom_control: bool,
    /// Whether the mouse wheel zooms the map. Off so page scrolling is not
    /// captured by the map.
    pub scroll_wheel_zoom: bool,
    /// Base tile layer.
    #[serde(skip)]
    pub tile_layer: TileLayer,
}

impl Default for MapOptions {
    fn default() -> Self {
        Self {
            zoom_control: true,
            scroll_wheel_zoom: false,
            tile_layer: TileLayer::default(),
        }
    }
}

/// Animation used when an existing map moves to a new view.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FlyToOptions {
    /// Animation length in seconds.
    pub duration: f64,
    /// Smoothness of the easing curve.
    pub ease_linearity: f64,
    /// Whether the backend emits a move-start event.
    pub no_move_start: bool,
}

impl Default for FlyToOptions {
    fn default() -> Self {
        Self {
            duration: 1.0,
            ease_linearity: 0.1,
            no_move_start: false,
        }
    }
}

/// A map rendering library.
///
/// The adapter in the transition crate owns at most one live handle at a
/// time and decides when to create, move or remove it.
pub trait MapBackend {
    /// A live map instance.
    type Handle;

    /// Creates a map inside the element with id `container_id`.
    ///
    /// Implementations attach the base tile layer from `options` and watch the
    /// container so the map re-measures itself when it becomes visible after
    /// being hidden.
    fn create(&mut self, container_id: &str, view: MapView, options: &MapOptions) -> Self::Handle;

    /// Animates an existing map to `view`.
    fn fly_to(&mut self, handle: &Self::Handle, view: MapView, animation: &FlyToOptions);

    /// Tears a map down and releases its container.
    fn remove(&mut self, handle: Self::Handle);
}
