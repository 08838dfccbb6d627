//! Leaflet bindings and the `MapBackend` built on them.

use scrolly_core::map::{FlyToOptions, MapBackend, MapOptions, MapView};
use serde::Serialize;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{MutationObserver, MutationObserverInit, MutationRecord};

use crate::dom;

#[wasm_bindgen]
extern "C" {
    /// A Leaflet `L.Map`.
    #[derive(Clone)]
    type LeafletMap;

    type LeafletTileLayer;

    #[wasm_bindgen(js_namespace = L, js_name = map, catch)]
    fn leaflet_map(container_id: &str, options: &JsValue) -> Result<LeafletMap, JsValue>;

    #[wasm_bindgen(js_namespace = L, js_name = tileLayer)]
    fn tile_layer(url_template: &str, options: &JsValue) -> LeafletTileLayer;

    #[wasm_bindgen(method, js_name = addTo)]
    fn add_to(this: &LeafletTileLayer, map: &LeafletMap);

    #[wasm_bindgen(method, js_name = flyTo)]
    fn fly_to(this: &LeafletMap, center: &JsValue, zoom: f64, options: &JsValue);

    #[wasm_bindgen(method)]
    fn remove(this: &LeafletMap);

    #[wasm_bindgen(method, js_name = invalidateSize)]
    fn invalidate_size(this: &LeafletMap);
}

#[derive(Serialize)]
struct CreateOptions<'a> {
    center: [f64; 2],
    zoom: f64,
    #[serde(flatten)]
    map: &'a MapOptions,
}

#[derive(Serialize)]
struct TileOptions<'a> {
    attribution: &'a str,
}

/// Serializes `value` as a plain JS object, which is what Leaflet reads.
fn to_js<T: Serialize>(value: &T) -> JsValue {
    value
        .serialize(&serde_wasm_bindgen::Serializer::json_compatible())
        .unwrap_or_else(|err| {
            dom::warn(&format!("could not encode map options: {err}"));
            JsValue::UNDEFINED
        })
}

fn center(view: MapView) -> JsValue {
    to_js(&[view.latitude, view.longitude])
}

type MutationCallback = Closure<dyn FnMut(js_sys::Array, MutationObserver)>;

/// Re-validates the map's size whenever its container's style changes to
/// something visible. Leaflet measures a hidden container as zero-sized.
struct VisibilityWatcher {
    observer: MutationObserver,
    _callback: MutationCallback,
}

impl VisibilityWatcher {
    fn attach(container_id: &str, map: &LeafletMap) -> Result<Self, JsValue> {
        let document = web_sys::window()
            .and_then(|window| window.document())
            .ok_or_else(|| JsValue::from_str("no document"))?;
        let container = document
            .get_element_by_id(container_id)
            .ok_or_else(|| JsValue::from_str("map container not found"))?;

        let map = map.clone();
        let watched = container.clone();
        let on_mutation = move |records: js_sys::Array, _: MutationObserver| {
            let style_changed = records.iter().any(|record| {
                record
                    .dyn_into::<MutationRecord>()
                    .ok()
                    .and_then(|record| record.attribute_name())
                    .is_some_and(|name| name == "style")
            });
            if !style_changed {
                return;
            }
            let displayed = web_sys::window()
                .and_then(|window| window.get_computed_style(&watched).ok().flatten())
                .and_then(|style| style.get_property_value("display").ok())
                .is_some_and(|display| display != "none");
            if displayed {
                map.invalidate_size();
            }
        };
        let callback: MutationCallback = Closure::new(on_mutation);

        let observer = MutationObserver::new(callback.as_ref().unchecked_ref())?;
        let init = MutationObserverInit::new();
        init.set_attributes(true);
        init.set_attribute_filter(&js_sys::Array::of1(&JsValue::from_str("style")));
        observer.observe_with_options(&container, &init)?;

        Ok(Self {
            observer,
            _callback: callback,
        })
    }
}

impl Drop for VisibilityWatcher {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

/// A map created by [`LeafletBackend`].
///
/// `map` is `None` when Leaflet refused to create it; such a handle ignores
/// camera moves.
pub(crate) struct LiveMap {
    map: Option<LeafletMap>,
    _watcher: Option<VisibilityWatcher>,
}

/// `MapBackend` driving the page's global `L`.
#[derive(Debug, Default)]
pub(crate) struct LeafletBackend;

impl MapBackend for LeafletBackend {
    type Handle = LiveMap;

    fn create(&mut self, container_id: &str, view: MapView, options: &MapOptions) -> LiveMap {
        let create_options = to_js(&CreateOptions {
            center: [view.latitude, view.longitude],
            zoom: view.zoom,
            map: options,
        });
        let map = match leaflet_map(container_id, &create_options) {
            Ok(map) => map,
            Err(err) => {
                let reason = dom::describe(&err);
                dom::error(&format!("could not create map in #{container_id}: {reason}"));
                return LiveMap {
                    map: None,
                    _watcher: None,
                };
            }
        };

        let tiles = &options.tile_layer;
        tile_layer(
            &tiles.url_template,
            &to_js(&TileOptions {
                attribution: &tiles.attribution,
            }),
        )
        .add_to(&map);

        let watcher = match VisibilityWatcher::attach(container_id, &map) {
            Ok(watcher) => Some(watcher),
            Err(err) => {
                let reason = dom::describe(&err);
                dom::warn(&format!("map size will not follow visibility: {reason}"));
                None
            }
        };

        LiveMap {
            map: Some(map),
            _watcher: watcher,
        }
    }

    fn fly_to(&mut self, handle: &LiveMap, view: MapView, animation: &FlyToOptions) {
        if let Some(map) = &handle.map {
            map.fly_to(&center(view), view.zoom, &to_js(animation));
        }
    }

    fn remove(&mut self, handle: LiveMap) {
        if let Some(map) = &handle.map {
            map.remove();
        }
    }
}
