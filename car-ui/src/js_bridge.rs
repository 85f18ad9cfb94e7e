//! Typed wrappers around JS interop via `js_sys::eval()`.
//!
//! The Leaflet glue lives in `assets/js/*.js` and is embedded at compile
//! time. Leaflet itself (the `L` global) is loaded by the host page from a
//! CDN; the glue is evaluated once `L` appears and its functions are
//! promoted to `window.*`. This module serializes layer specs to JSON and
//! calls those globals.

use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};

// Embed all Leaflet glue JS files at compile time
static MAP_CORE_JS: &str = include_str!("../assets/js/map-core.js");
static MAP_MARKERS_JS: &str = include_str!("../assets/js/map-markers.js");
static MAP_ROUTES_JS: &str = include_str!("../assets/js/map-routes.js");
static MAP_HEAT_JS: &str = include_str!("../assets/js/map-heat.js");
static MAP_QUERY_JS: &str = include_str!("../assets/js/map-query.js");

/// Execute arbitrary JS, wrapping in try/catch to avoid panics.
pub fn call_js(code: &str) {
    let wrapped = format!(
        "try {{ {} }} catch(e) {{ console.warn('[CAR] JS call failed:', e); }}",
        code
    );
    let _ = js_sys::eval(&wrapped);
}

/// Evaluate the glue scripts and create the map in `container_id`.
///
/// The glue files define functions like `renderRoutePolylines(...)` via
/// `function` declarations. To ensure they become globally accessible
/// (not block-scoped inside the setInterval callback), they are evaluated
/// at global scope via indirect eval once Leaflet is ready, then each
/// function is explicitly promoted to `window.*`. Safe to call again; an
/// already-created map is reused.
pub fn init_map(container_id: &str) {
    let all_js = [
        MAP_CORE_JS,
        MAP_MARKERS_JS,
        MAP_ROUTES_JS,
        MAP_HEAT_JS,
        MAP_QUERY_JS,
    ]
    .join("\n");

    // Store the scripts on window so the polling callback can eval them
    // at global scope (not block-scoped inside setInterval).
    let store_js = format!(
        "if (!window.__carMapReady) window.__carMapScripts = {};",
        serde_json::to_string(&all_js).unwrap_or_default()
    );
    let _ = js_sys::eval(&store_js);

    let init_js = format!(
        r#"
        (function() {{
            var waitForLeaflet = setInterval(function() {{
                if (typeof L !== 'undefined' && document.getElementById('{container_id}')) {{
                    clearInterval(waitForLeaflet);
                    if (!window.__carMapReady) {{
                        // Eval at global scope via indirect eval
                        (0, eval)(window.__carMapScripts);
                        delete window.__carMapScripts;
                        // Promote function declarations to window explicitly
                        if (typeof initCleanAirMap !== 'undefined') window.initCleanAirMap = initCleanAirMap;
                        if (typeof applyCleanAirViewport !== 'undefined') window.applyCleanAirViewport = applyCleanAirViewport;
                        if (typeof destroyCleanAirMap !== 'undefined') window.destroyCleanAirMap = destroyCleanAirMap;
                        if (typeof renderEndpointMarkers !== 'undefined') window.renderEndpointMarkers = renderEndpointMarkers;
                        if (typeof renderWaypointMarkers !== 'undefined') window.renderWaypointMarkers = renderWaypointMarkers;
                        if (typeof renderRoutePolylines !== 'undefined') window.renderRoutePolylines = renderRoutePolylines;
                        if (typeof renderHeatCircles !== 'undefined') window.renderHeatCircles = renderHeatCircles;
                        if (typeof setQueryMode !== 'undefined') window.setQueryMode = setQueryMode;
                        if (typeof renderQueryPins !== 'undefined') window.renderQueryPins = renderQueryPins;
                    }}
                    window.initCleanAirMap('{container_id}');
                    window.__carMapReady = true;
                    console.log('[CAR] map initialized');
                }}
            }}, 100);
        }})();
        "#
    );
    let _ = js_sys::eval(&init_js);
}

/// Poll until the glue and the map exist, then call `function_name` with
/// the serialized payload.
fn render_when_ready(function_name: &str, container_id: &str, payload_json: &str) {
    let escaped = payload_json
        .replace('\\', "\\\\")
        .replace('\'', "\\'")
        .replace('\n', "");
    call_js(&format!(
        r#"
        (function() {{
            var poll = setInterval(function() {{
                if (window.__carMapReady &&
                    typeof window.{function_name} !== 'undefined' &&
                    window.__carMaps && window.__carMaps['{container_id}']) {{
                    clearInterval(poll);
                    try {{
                        window.{function_name}('{container_id}', '{escaped}');
                    }} catch(e) {{ console.error('[CAR] {function_name} error:', e); }}
                }}
            }}, 100);
        }})();
        "#,
    ));
}

/// Point the map per a serialized `Viewport` (fit bounds or center).
pub fn apply_viewport(container_id: &str, viewport_json: &str) {
    render_when_ready("applyCleanAirViewport", container_id, viewport_json);
}

/// Replace the source/destination markers.
pub fn render_endpoint_markers(container_id: &str, markers_json: &str) {
    render_when_ready("renderEndpointMarkers", container_id, markers_json);
}

/// Replace the route polylines.
pub fn render_route_polylines(container_id: &str, polylines_json: &str) {
    render_when_ready("renderRoutePolylines", container_id, polylines_json);
}

/// Replace the selected route's intermediate waypoint markers.
pub fn render_waypoint_markers(container_id: &str, markers_json: &str) {
    render_when_ready("renderWaypointMarkers", container_id, markers_json);
}

/// Replace the heat approximation circles.
pub fn render_heat_circles(container_id: &str, circles_json: &str) {
    render_when_ready("renderHeatCircles", container_id, circles_json);
}

/// Replace the point-query pins.
pub fn render_query_pins(container_id: &str, pins_json: &str) {
    render_when_ready("renderQueryPins", container_id, pins_json);
}

/// Toggle click-to-query mode (switches the cursor and click routing).
pub fn set_query_mode(container_id: &str, enabled: bool) {
    call_js(&format!(
        "if (window.setQueryMode) window.setQueryMode('{container_id}', {enabled});"
    ));
}

/// Tear down the map and its registry entry.
pub fn destroy_map(container_id: &str) {
    call_js(&format!(
        "if (window.destroyCleanAirMap) window.destroyCleanAirMap('{container_id}');"
    ));
}

/// Install the map click callback. The glue calls
/// `window.__carMapClick(lat, lng)` for clicks made in query mode.
pub fn set_click_handler(handler: impl FnMut(f64, f64) + 'static) {
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(f64, f64)>);
    if let Some(window) = web_sys::window() {
        let _ = js_sys::Reflect::set(
            &window,
            &JsValue::from_str("__carMapClick"),
            closure.as_ref().unchecked_ref(),
        );
    }
    closure.forget();
}

/// Install the pin dismiss callback. Pin popups call
/// `window.__carPinDismiss(id)`; JS numbers arrive as f64.
pub fn set_pin_dismiss_handler(handler: impl FnMut(f64) + 'static) {
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(f64)>);
    if let Some(window) = web_sys::window() {
        let _ = js_sys::Reflect::set(
            &window,
            &JsValue::from_str("__carPinDismiss"),
            closure.as_ref().unchecked_ref(),
        );
    }
    closure.forget();
}
