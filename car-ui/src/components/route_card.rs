//! Card presenting one candidate route.

use crate::components::SeverityBadge;
use car_core::route::{PollutantLevels, RouteOption};
use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct RouteCardProps {
    pub route: RouteOption,
    pub selected: bool,
    /// Called with the route id when the card is clicked
    pub on_select: EventHandler<String>,
}

/// Clickable summary card for one candidate route. The selected card grows
/// a pollutant breakdown and the route's recommendations.
#[component]
pub fn RouteCard(props: RouteCardProps) -> Element {
    let route = props.route.clone();
    let on_select = props.on_select;
    let route_id = route.id.clone();
    let border = if props.selected {
        "2px solid #2563eb"
    } else {
        "1px solid #d1d5db"
    };
    let name = route.route_name.clone();
    let score = route.pollution_score;
    let distance = route.distance_km;
    let duration = route.duration_minutes;
    let pollutant_line = pollutant_summary(&route.pollutant_levels);

    rsx! {
        div {
            style: "border: {border}; border-radius: 8px; padding: 10px 12px; margin: 8px 0; cursor: pointer; background: white;",
            onclick: move |_| on_select.call(route_id.clone()),
            div {
                style: "display: flex; justify-content: space-between; align-items: center; gap: 8px;",
                strong { "{name}" }
                SeverityBadge { score: score }
            }
            div {
                style: "font-size: 13px; color: #4b5563; margin-top: 4px;",
                "{distance:.1} km, {duration:.0} min"
            }
            if props.selected && !pollutant_line.is_empty() {
                div {
                    style: "font-size: 12px; color: #374151; margin-top: 4px;",
                    "{pollutant_line}"
                }
            }
            if props.selected && !route.recommendations.is_empty() {
                ul {
                    style: "margin: 6px 0 0 0; padding-left: 18px; font-size: 12px; color: #6b7280;",
                    for rec in route.recommendations.iter() {
                        li { "{rec}" }
                    }
                }
            }
        }
    }
}

fn pollutant_summary(levels: &PollutantLevels) -> String {
    let mut parts = Vec::new();
    if let Some(v) = levels.no2 {
        parts.push(format!("NO2 {v:.1}"));
    }
    if let Some(v) = levels.o3 {
        parts.push(format!("O3 {v:.1}"));
    }
    if let Some(v) = levels.so2 {
        parts.push(format!("SO2 {v:.1}"));
    }
    if let Some(v) = levels.co2 {
        parts.push(format!("CO2 {v:.0}"));
    }
    if let Some(v) = levels.methane {
        parts.push(format!("CH4 {v:.2}"));
    }
    parts.join(" / ")
}

#[cfg(test)]
mod tests {
    use super::pollutant_summary;
    use car_core::route::PollutantLevels;

    #[test]
    fn test_pollutant_summary_skips_missing_species() {
        let levels = PollutantLevels {
            no2: Some(18.12),
            o3: None,
            so2: Some(6.21),
            co2: None,
            methane: Some(1.934),
        };
        assert_eq!(pollutant_summary(&levels), "NO2 18.1 / SO2 6.2 / CH4 1.93");
        assert_eq!(pollutant_summary(&PollutantLevels::default()), "");
    }
}
