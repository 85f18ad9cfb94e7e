//! Card for one pollution alert.

use car_core::alert::PollutionAlert;
use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct AlertCardProps {
    pub alert: PollutionAlert,
}

/// One alert row with a severity color bar.
#[component]
pub fn AlertCard(props: AlertCardProps) -> Element {
    let alert = props.alert.clone();
    let color = alert.severity.color();
    let severity = alert.severity.label();
    let kind = alert.alert_type.label();
    let when = alert
        .created_at
        .map(|t| t.format("%Y-%m-%d %H:%M UTC").to_string())
        .unwrap_or_default();

    rsx! {
        div {
            style: "border-left: 4px solid {color}; background: #f9fafb; border-radius: 4px; padding: 8px 12px; margin: 6px 0;",
            div {
                style: "display: flex; justify-content: space-between; gap: 8px; font-size: 12px; color: #6b7280;",
                span { "{kind}, severity {severity}" }
                if !when.is_empty() {
                    span { "{when}" }
                }
            }
            div {
                style: "font-size: 13px; color: #111827; margin-top: 2px;",
                "{alert.message}"
            }
        }
    }
}
