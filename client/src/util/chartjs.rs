//! Bindings to the page-global Chart.js constructor (`Chart`).
//!
//! Configuration objects are built as `serde_json::Value` by `util::chart`
//! and handed over through `JSON.parse`.

use wasm_bindgen::prelude::*;

#[wasm_bindgen]
extern "C" {
    /// A live Chart.js chart bound to one canvas.
    #[wasm_bindgen(js_name = Chart)]
    pub type Chart;

    /// `new Chart(canvas, config)`
    #[wasm_bindgen(catch, constructor, js_class = "Chart")]
    pub fn new(canvas: &web_sys::HtmlCanvasElement, config: &JsValue) -> Result<Chart, JsValue>;

    /// `chart.destroy()`
    #[wasm_bindgen(method)]
    pub fn destroy(this: &Chart);
}

/// Create a chart on `canvas` from a JSON configuration value.
///
/// # Errors
///
/// Returns the JS exception if the serialized config fails to parse or the
/// `Chart` constructor throws (library not loaded, canvas already in use).
pub fn create(canvas: &web_sys::HtmlCanvasElement, config: &serde_json::Value) -> Result<Chart, JsValue> {
    let config = js_sys::JSON::parse(&config.to_string())?;
    Chart::new(canvas, &config)
}
