//! Home-page map of Madagascar.
//!
//! DESIGN
//! ======
//! The Leaflet map is created once, after the container node mounts, and is
//! owned by Leaflet from then on: it is never rebuilt on reactive updates and
//! never torn down explicitly. The SSR render only emits the container.

#[cfg(test)]
#[path = "carte_test.rs"]
mod carte_test;

use leptos::prelude::*;

pub const MAP_CONTAINER_ID: &str = "map";
/// Antananarivo, `(lat, lng)`.
pub const MAP_CENTER: (f64, f64) = (-18.8792, 47.5079);
pub const MAP_ZOOM: u8 = 6;
pub const TILE_URL: &str = "https://{s}.tile.openstreetmap.org/{z}/{x}/{y}.png";
pub const TILE_ATTRIBUTION: &str = "&copy; OpenStreetMap contributors";
const MAP_STYLE: &str = "width: 100%; height: 500px;";

#[component]
pub fn CarteMadagascar() -> impl IntoView {
    let container_ref = NodeRef::<leptos::html::Div>::new();

    #[cfg(feature = "hydrate")]
    {
        let initialized = StoredValue::new(false);
        Effect::new(move || {
            let Some(container) = container_ref.get() else {
                return;
            };
            if initialized.get_value() {
                return;
            }
            initialized.set_value(true);
            if let Err(e) = init_map(&container) {
                leptos::logging::warn!("map init failed: {e:?}");
            }
        });
    }

    view! { <div id=MAP_CONTAINER_ID class="carte" style=MAP_STYLE node_ref=container_ref></div> }
}

#[cfg(feature = "hydrate")]
fn init_map(container: &web_sys::HtmlElement) -> Result<(), wasm_bindgen::JsValue> {
    use crate::util::leaflet;

    let (lat, lng) = MAP_CENTER;
    let map = leaflet::map(container)?;
    map.set_view(&leaflet::lat_lng(lat, lng), MAP_ZOOM);

    let options = js_sys::Object::new();
    js_sys::Reflect::set(&options, &"attribution".into(), &TILE_ATTRIBUTION.into())?;
    leaflet::tile_layer(TILE_URL, &options)?.add_to(&map);
    Ok(())
}
