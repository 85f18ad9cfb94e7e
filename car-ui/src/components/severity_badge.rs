//! Colored pill labeling a pollution score.

use car_core::pollution::Severity;
use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct SeverityBadgeProps {
    pub score: f64,
}

/// Small pill showing a 0-100 pollution score with its tier color and label.
#[component]
pub fn SeverityBadge(props: SeverityBadgeProps) -> Element {
    let severity = Severity::classify(props.score);
    let color = severity.color();
    let label = severity.label();
    let score = props.score;

    rsx! {
        span {
            style: "display: inline-block; padding: 2px 8px; border-radius: 10px; background: {color}; color: white; font-size: 12px; font-weight: bold; white-space: nowrap;",
            "{label} ({score:.0})"
        }
    }
}
