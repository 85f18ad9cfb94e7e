//! Pollution-Aware Route Planner
//!
//! Single-page app for picking a source and destination from the place
//! catalog, requesting candidate routes from the backend, and exploring
//! them on a Leaflet map color-coded by pollution severity. The selected
//! route grows a pollutant breakdown and recommendations, and can be
//! bookmarked (optionally with alerting) for the saved-routes page.
//!
//! Data flow:
//! 1. On mount, the Leaflet bridge is initialized and the backend health
//!    endpoint is pinged once.
//! 2. Picking a resolved source triggers a current-conditions fetch.
//! 3. Calculate posts both endpoints to `/routes/calculate`; each request
//!    takes a sequence number so late responses from older requests are
//!    discarded instead of clobbering newer results.
//! 4. Two effects mirror map-facing state into the JS layer: one applies
//!    the viewport, the other redraws the layer groups. Heat toggles and
//!    query pins touch only the layer effect, so they never re-fit the
//!    view.

use car_core::location::{LatLng, Location};
use car_core::request::plan_request;
use car_core::saved::SaveRouteRequest;
use car_ui::api::ApiClient;
use car_ui::components::{
    LoadingSpinner, LocationSelector, MapContainer, NoticeList, PageHeader, PollutionPanel,
    RouteCard,
};
use car_ui::js_bridge;
use car_ui::layers::{self, QueryPin};
use car_ui::state::{
    auto_selection, response_is_current, selection_changes, CalcPhase, NoticeKind, PlannerState,
};
use dioxus::prelude::*;

/// Map container DOM element ID used by the Leaflet bridge to render into.
const MAP_ID: &str = "route-planner-map";

fn main() {
    dioxus_logger::init(dioxus_logger::tracing::Level::INFO).expect("failed to init logger");
    dioxus::LaunchBuilder::new()
        .with_cfg(dioxus::web::Config::new().rootname("route-planner-root"))
        .launch(App);
}

#[component]
fn App() -> Element {
    let mut state = use_context_provider(PlannerState::new);
    let api = use_hook(ApiClient::from_window);
    let alerts_enabled = use_signal(|| false);

    // One-time setup: map, JS-side callbacks, backend health ping.
    // Reads no signals, so it runs exactly once on mount.
    use_effect({
        let api = api.clone();
        move || {
            js_bridge::init_map(MAP_ID);

            // Clicks land here from JS while query mode is on. The fetch
            // runs outside the component scope, hence spawn_local.
            js_bridge::set_click_handler(move |lat, lng| {
                let api = ApiClient::from_window();
                let mut state = state;
                wasm_bindgen_futures::spawn_local(async move {
                    match api.current_pollution(lat, lng).await {
                        Ok(reading) => {
                            let id = state.board.take_id();
                            state.query_pins.write().push(QueryPin {
                                id,
                                at: LatLng::new(lat, lng),
                                reading,
                            });
                        }
                        Err(e) => {
                            log::warn!("point query failed at {lat:.4},{lng:.4}: {e}");
                        }
                    }
                });
            });

            js_bridge::set_pin_dismiss_handler(move |id| {
                let id = id as u64;
                state.query_pins.write().retain(|pin| pin.id != id);
            });

            let api = api.clone();
            spawn(async move {
                match api.health().await {
                    Ok(status) => state.backend_healthy.set(Some(status.is_healthy())),
                    Err(e) => {
                        log::warn!("health check failed: {e}");
                        state.backend_healthy.set(Some(false));
                    }
                }
            });
        }
    });

    // Fetch current conditions whenever the source changes to a resolved
    // place; clear the panel when the source is unset.
    use_effect({
        let api = api.clone();
        move || {
            let source = (state.source)();
            let Some(at) = source.coords() else {
                state.conditions.set(None);
                return;
            };
            let api = api.clone();
            spawn(async move {
                match api.current_pollution(at.lat, at.lng).await {
                    Ok(reading) => state.conditions.set(Some(reading)),
                    Err(e) => log::warn!("conditions fetch failed for {}: {e}", source.address),
                }
            });
        }
    });

    // Keep the camera on the endpoints and the selected route. Separate
    // from the layer mirror below so heat toggles and query pins never
    // re-fit the view over a manual pan or zoom.
    use_effect(move || {
        let source = (state.source)();
        let destination = (state.destination)();
        let routes = state.routes.read();
        let selected_id = (state.selected_route_id)();
        let selected = selected_id
            .as_deref()
            .and_then(|id| routes.iter().find(|r| r.id == id));

        let viewport = layers::compute_viewport(&source, &destination, selected);
        js_bridge::apply_viewport(
            MAP_ID,
            &serde_json::to_string(&viewport).unwrap_or_default(),
        );
    });

    // Mirror the map layers into the Leaflet bridge. Re-runs whenever any
    // of the inputs change; every renderer clears its own layer group first,
    // so repeated runs converge instead of stacking.
    use_effect(move || {
        let source = (state.source)();
        let destination = (state.destination)();
        let routes = state.routes.read().clone();
        let selected_id = (state.selected_route_id)();
        let show_heat = (state.show_heat)();
        let query_mode = (state.query_mode)();
        let pins = state.query_pins.read().clone();

        let endpoints = layers::build_endpoint_markers(&source, &destination);
        let polylines = layers::build_route_polylines(&routes, selected_id.as_deref());
        let waypoints = selected_id
            .as_deref()
            .and_then(|id| routes.iter().find(|r| r.id == id))
            .map(layers::build_waypoint_markers)
            .unwrap_or_default();
        let heat = if show_heat {
            layers::build_heat_circles(&routes)
        } else {
            Vec::new()
        };
        let pin_specs = layers::build_query_pins(&pins);

        js_bridge::render_endpoint_markers(
            MAP_ID,
            &serde_json::to_string(&endpoints).unwrap_or_default(),
        );
        js_bridge::render_route_polylines(
            MAP_ID,
            &serde_json::to_string(&polylines).unwrap_or_default(),
        );
        js_bridge::render_waypoint_markers(
            MAP_ID,
            &serde_json::to_string(&waypoints).unwrap_or_default(),
        );
        js_bridge::render_heat_circles(MAP_ID, &serde_json::to_string(&heat).unwrap_or_default());
        js_bridge::render_query_pins(
            MAP_ID,
            &serde_json::to_string(&pin_specs).unwrap_or_default(),
        );
        js_bridge::set_query_mode(MAP_ID, query_mode);
    });

    let on_submit = {
        let api = api.clone();
        move |_| {
            if !(state.phase)().accepts_submit() {
                return;
            }
            let source = (state.source)();
            let destination = (state.destination)();
            let request = match plan_request(&source, &destination) {
                Ok(request) => request,
                Err(e) => {
                    state.board.push(NoticeKind::Error, e.to_string());
                    return;
                }
            };

            let seq = state.begin_calc();
            let api = api.clone();
            spawn(async move {
                match api.calculate_routes(&request).await {
                    Ok(response) => {
                        if !response_is_current((state.calc_seq)(), seq) {
                            log::info!("discarding superseded route response (seq {seq})");
                            return;
                        }
                        log::info!("received {} candidate routes", response.routes.len());
                        let selection = auto_selection(&response.routes);
                        state.routes.set(response.routes);
                        state.selected_route_id.set(selection);
                        state.phase.set(CalcPhase::Loaded);
                    }
                    Err(e) => {
                        if !response_is_current((state.calc_seq)(), seq) {
                            return;
                        }
                        log::error!("route calculation failed: {e}");
                        state.phase.set(CalcPhase::Error);
                        state
                            .board
                            .push(NoticeKind::Error, format!("Route calculation failed: {e}"));
                    }
                }
            });
        }
    };

    let on_select = move |route_id: String| {
        if !selection_changes((state.selected_route_id)().as_deref(), &route_id) {
            return;
        }
        state.selected_route_id.set(Some(route_id));
    };

    let on_save = {
        let api = api.clone();
        move |_| {
            let Some(route) = state.selected_route() else {
                return;
            };
            let (Some(source), Some(destination)) =
                ((state.source)().resolved(), (state.destination)().resolved())
            else {
                return;
            };
            let request = SaveRouteRequest {
                user_id: car_ui::identity::user_id(),
                route_name: format!("{} to {}", source.address, destination.address),
                source,
                destination,
                selected_route: route,
                alerts_enabled: alerts_enabled(),
            };
            let api = api.clone();
            spawn(async move {
                match api.save_route(&request).await {
                    Ok(saved) => {
                        state
                            .board
                            .push(NoticeKind::Success, format!("Saved '{}'", saved.route_name));
                    }
                    Err(e) => {
                        log::error!("save failed: {e}");
                        state
                            .board
                            .push(NoticeKind::Error, format!("Could not save route: {e}"));
                    }
                }
            });
        }
    };

    let phase = (state.phase)();
    let source_address = (state.source)().address;
    let destination_address = (state.destination)().address;
    let routes = state.routes.read().clone();
    let selected_id = (state.selected_route_id)();
    let conditions = (state.conditions)();
    let notices = state.board.notices.read().clone();
    let (health_label, health_color) = match (state.backend_healthy)() {
        None => ("checking backend...", "#6b7280"),
        Some(true) => ("backend online", "#047857"),
        Some(false) => ("backend unreachable", "#b91c1c"),
    };

    rsx! {
        div {
            style: "padding: 16px; font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif;",

            div {
                style: "display: flex; justify-content: space-between; align-items: baseline; gap: 12px;",
                PageHeader {
                    title: "Clean Air Routes".to_string(),
                    subtitle: "Candidate routes ranked by pollution exposure, cleanest first".to_string(),
                }
                span {
                    style: "font-size: 12px; color: {health_color};",
                    "{health_label}"
                }
            }

            NoticeList {
                notices: notices,
                on_dismiss: move |id| state.board.dismiss(id),
            }

            div {
                style: "display: flex; flex-wrap: wrap; gap: 16px; align-items: flex-start;",

                div {
                    style: "flex: 0 0 340px; max-width: 100%;",

                    LocationSelector {
                        label: "From".to_string(),
                        select_id: "source-select".to_string(),
                        selected_address: source_address,
                        on_select: move |place: Option<car_core::catalog::Place>| {
                            let location = place
                                .as_ref()
                                .map(Location::from)
                                .unwrap_or_default();
                            state.source.set(location);
                        },
                    }
                    LocationSelector {
                        label: "To".to_string(),
                        select_id: "destination-select".to_string(),
                        selected_address: destination_address,
                        on_select: move |place: Option<car_core::catalog::Place>| {
                            let location = place
                                .as_ref()
                                .map(Location::from)
                                .unwrap_or_default();
                            state.destination.set(location);
                        },
                    }

                    button {
                        style: "margin: 8px 0; padding: 8px 16px; border: none; border-radius: 6px; background: #2563eb; color: white; font-weight: bold; cursor: pointer;",
                        disabled: phase == CalcPhase::Loading,
                        onclick: on_submit,
                        "Calculate Routes"
                    }

                    div {
                        style: "display: flex; gap: 16px; font-size: 13px; margin: 4px 0 8px 0;",
                        label {
                            input {
                                r#type: "checkbox",
                                checked: (state.show_heat)(),
                                oninput: move |evt| state.show_heat.set(evt.checked()),
                            }
                            " Pollution heat overlay"
                        }
                        label {
                            input {
                                r#type: "checkbox",
                                checked: (state.query_mode)(),
                                oninput: move |evt| state.query_mode.set(evt.checked()),
                            }
                            " Click map to query air"
                        }
                    }

                    if let Some(reading) = conditions {
                        PollutionPanel {
                            title: "Current conditions at source".to_string(),
                            reading: reading,
                        }
                    }

                    if phase == CalcPhase::Loading {
                        LoadingSpinner { message: "Calculating routes...".to_string() }
                    }

                    for route in routes.iter() {
                        RouteCard {
                            key: "{route.id}",
                            route: route.clone(),
                            selected: selected_id.as_deref() == Some(route.id.as_str()),
                            on_select: on_select,
                        }
                    }

                    if selected_id.is_some() {
                        div {
                            style: "border-top: 1px solid #e5e7eb; margin-top: 8px; padding-top: 8px;",
                            label {
                                style: "font-size: 13px;",
                                input {
                                    r#type: "checkbox",
                                    checked: alerts_enabled(),
                                    oninput: {
                                        let mut alerts_enabled = alerts_enabled;
                                        move |evt: Event<FormData>| alerts_enabled.set(evt.checked())
                                    },
                                }
                                " Alert me when this route turns unhealthy"
                            }
                            button {
                                style: "display: block; margin-top: 6px; padding: 6px 14px; border: 1px solid #2563eb; border-radius: 6px; background: white; color: #2563eb; cursor: pointer;",
                                onclick: on_save,
                                "Save Route"
                            }
                        }
                    }
                }

                div {
                    style: "flex: 1 1 480px; min-width: 320px;",
                    MapContainer { id: MAP_ID.to_string() }
                }
            }
        }
    }
}
