//! Card for one bookmarked route.

use crate::components::SeverityBadge;
use car_core::saved::SavedRoute;
use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct SavedRouteCardProps {
    pub saved: SavedRoute,
    /// Called with the bookmark id when the delete button is pressed
    pub on_delete: EventHandler<String>,
}

/// Summary card for one bookmark: endpoints, the picked route, alert flag,
/// and a delete button. The row stays in place until the backend confirms
/// the delete; the caller removes it afterwards.
#[component]
pub fn SavedRouteCard(props: SavedRouteCardProps) -> Element {
    let saved = props.saved.clone();
    let on_delete = props.on_delete;
    let id = saved.id.clone();
    let score = saved.selected_route.pollution_score;
    let picked_name = saved.selected_route.route_name.clone();
    let distance = saved.selected_route.distance_km;
    let duration = saved.selected_route.duration_minutes;
    let alerts_label = if saved.alerts_enabled {
        "Alerts on"
    } else {
        "Alerts off"
    };
    let meta = match saved.created_at {
        Some(t) => format!("{alerts_label}, saved {}", t.format("%Y-%m-%d")),
        None => alerts_label.to_string(),
    };

    rsx! {
        div {
            style: "border: 1px solid #d1d5db; border-radius: 8px; padding: 10px 12px; margin: 8px 0; background: white;",
            div {
                style: "display: flex; justify-content: space-between; align-items: center; gap: 8px;",
                strong { "{saved.route_name}" }
                SeverityBadge { score: score }
            }
            div {
                style: "font-size: 13px; color: #4b5563; margin-top: 4px;",
                "{saved.source.address} to {saved.destination.address}"
            }
            div {
                style: "font-size: 12px; color: #6b7280; margin-top: 2px;",
                "{picked_name}: {distance:.1} km, {duration:.0} min"
            }
            div {
                style: "display: flex; justify-content: space-between; align-items: center; margin-top: 6px;",
                span {
                    style: "font-size: 12px; color: #6b7280;",
                    "{meta}"
                }
                button {
                    style: "border: 1px solid #fca5a5; background: #fef2f2; color: #b91c1c; border-radius: 4px; padding: 4px 10px; cursor: pointer;",
                    onclick: move |_| on_delete.call(id.clone()),
                    "Delete"
                }
            }
        }
    }
}
