//! Saved Routes
//!
//! Lists the routes the user bookmarked in the planner together with any
//! pollution alerts raised for them. Deleting a bookmark is confirmed by
//! the backend before the row leaves the list, so a failed delete leaves
//! the list untouched.
//!
//! The bookmark list and the alert list load independently on mount; a
//! failed alert fetch only logs, while a failed bookmark fetch surfaces a
//! banner since the page is useless without it.

use car_core::saved::ConfirmedRemoval;
use car_ui::api::ApiClient;
use car_ui::components::{AlertCard, LoadingSpinner, NoticeList, PageHeader, SavedRouteCard};
use car_ui::identity;
use car_ui::state::{NoticeKind, SavedState};
use dioxus::prelude::*;

fn main() {
    dioxus_logger::init(dioxus_logger::tracing::Level::INFO).expect("failed to init logger");
    dioxus::LaunchBuilder::new()
        .with_cfg(dioxus::web::Config::new().rootname("saved-routes-root"))
        .launch(App);
}

#[component]
fn App() -> Element {
    let mut state = use_context_provider(SavedState::new);
    let api = use_hook(ApiClient::from_window);

    // Load bookmarks and alerts on mount. The two fetches are independent;
    // each clears only its own pending flag.
    use_effect({
        let api = api.clone();
        move || {
            let user_id = identity::user_id();

            let routes_api = api.clone();
            let routes_user = user_id.clone();
            spawn(async move {
                match routes_api.saved_routes(&routes_user).await {
                    Ok(saved) => {
                        log::info!("loaded {} saved routes", saved.len());
                        state.saved.set(saved);
                    }
                    Err(e) => {
                        log::error!("saved routes fetch failed: {e}");
                        state
                            .board
                            .push(NoticeKind::Error, format!("Could not load saved routes: {e}"));
                    }
                }
                state.loading_saved.set(false);
            });

            let alerts_api = api.clone();
            spawn(async move {
                match alerts_api.alerts(&user_id).await {
                    Ok(alerts) => state.alerts.set(alerts),
                    Err(e) => log::warn!("alerts fetch failed: {e}"),
                }
                state.loading_alerts.set(false);
            });
        }
    });

    let on_delete = {
        let api = api.clone();
        move |route_id: String| {
            let api = api.clone();
            spawn(async move {
                match api.delete_saved_route(&route_id).await {
                    Ok(ack) => {
                        log::info!("delete confirmed: {}", ack.message);
                        if state.saved.write().remove_confirmed(&route_id) {
                            state.board.push(NoticeKind::Success, "Route deleted");
                        }
                    }
                    Err(e) => {
                        log::error!("delete failed for {route_id}: {e}");
                        state
                            .board
                            .push(NoticeKind::Error, format!("Could not delete route: {e}"));
                    }
                }
            });
        }
    };

    let loading = state.is_loading();
    let saved = state.saved.read().clone();
    let alerts = state.alerts.read().clone();
    let notices = state.board.notices.read().clone();

    rsx! {
        div {
            style: "padding: 16px; max-width: 760px; font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif;",

            PageHeader {
                title: "Saved Routes".to_string(),
                subtitle: "Bookmarked routes and the pollution alerts raised for them".to_string(),
            }

            NoticeList {
                notices: notices,
                on_dismiss: move |id| state.board.dismiss(id),
            }

            if loading {
                LoadingSpinner { message: "Loading saved routes...".to_string() }
            } else {
                if saved.is_empty() {
                    p {
                        style: "color: #6b7280; font-size: 14px;",
                        "No saved routes yet. Plan a route and save it to see it here."
                    }
                }
                for route in saved.iter() {
                    SavedRouteCard {
                        key: "{route.id}",
                        saved: route.clone(),
                        on_delete: on_delete.clone(),
                    }
                }

                if !alerts.is_empty() {
                    h3 {
                        style: "margin: 16px 0 4px 0; font-size: 16px;",
                        "Alerts"
                    }
                    for alert in alerts.iter() {
                        AlertCard {
                            key: "{alert.id}",
                            alert: alert.clone(),
                        }
                    }
                }
            }
        }
    }
}
