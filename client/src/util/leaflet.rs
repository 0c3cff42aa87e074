//! Bindings to the page-global Leaflet namespace (`L`).
//!
//! Only the calls the home-page map needs are bound. Leaflet itself is loaded
//! by a `<script>` tag in the SSR shell, so these resolve at call time in the
//! browser and are compiled only for the `hydrate` target.

use wasm_bindgen::prelude::*;

#[wasm_bindgen]
extern "C" {
    /// `L.Map` instance.
    pub type Map;

    /// `L.TileLayer` instance.
    pub type TileLayer;

    /// `L.map(element)`; throws if `L` is missing or the container is taken.
    #[wasm_bindgen(catch, js_namespace = L, js_name = map)]
    pub fn map(container: &web_sys::HtmlElement) -> Result<Map, JsValue>;

    /// `map.setView([lat, lng], zoom)`
    #[wasm_bindgen(method, js_name = setView)]
    pub fn set_view(this: &Map, center: &js_sys::Array, zoom: u8) -> Map;

    /// `L.tileLayer(url, options)`
    #[wasm_bindgen(catch, js_namespace = L, js_name = tileLayer)]
    pub fn tile_layer(url_template: &str, options: &JsValue) -> Result<TileLayer, JsValue>;

    /// `layer.addTo(map)`
    #[wasm_bindgen(method, js_name = addTo)]
    pub fn add_to(this: &TileLayer, map: &Map) -> TileLayer;
}

/// `[lat, lng]` as a JS array.
pub fn lat_lng(lat: f64, lng: f64) -> js_sys::Array {
    js_sys::Array::of2(&JsValue::from_f64(lat), &JsValue::from_f64(lng))
}
