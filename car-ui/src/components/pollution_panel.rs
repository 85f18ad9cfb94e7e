//! Panel showing a point pollution reading.

use crate::components::SeverityBadge;
use car_core::pollution::PollutionReading;
use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct PollutionPanelProps {
    pub title: String,
    pub reading: PollutionReading,
}

/// Current-conditions panel for one point reading. Species the feed did
/// not report are simply omitted.
#[component]
pub fn PollutionPanel(props: PollutionPanelProps) -> Element {
    let reading = props.reading.clone();
    let rows: Vec<(&str, f64)> = [
        ("NO2", reading.no2),
        ("O3", reading.o3),
        ("SO2", reading.so2),
        ("CO2", reading.co2),
        ("CH4", reading.methane),
    ]
    .iter()
    .filter_map(|(name, value)| value.map(|v| (*name, v)))
    .collect();
    let timestamp = reading
        .timestamp
        .map(|t| t.format("%Y-%m-%d %H:%M UTC").to_string());

    rsx! {
        div {
            style: "border: 1px solid #e5e7eb; border-radius: 8px; padding: 10px 12px; margin: 8px 0; background: #f9fafb;",
            div {
                style: "display: flex; justify-content: space-between; align-items: center; gap: 8px;",
                strong { "{props.title}" }
                if let Some(aqi) = reading.aqi {
                    SeverityBadge { score: aqi }
                }
            }
            if !rows.is_empty() {
                div {
                    style: "display: flex; flex-wrap: wrap; gap: 10px; margin-top: 6px; font-size: 13px; color: #374151;",
                    for (name, value) in rows.iter() {
                        span { "{name}: {value:.1}" }
                    }
                }
            }
            if let Some(ts) = timestamp {
                div {
                    style: "font-size: 11px; color: #9ca3af; margin-top: 6px;",
                    "as of {ts}"
                }
            }
        }
    }
}
