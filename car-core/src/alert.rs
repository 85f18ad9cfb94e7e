use crate::pollution::{COLOR_GOOD, COLOR_MODERATE, COLOR_UNHEALTHY, COLOR_UNHEALTHY_SENSITIVE};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// What triggered an alert on a saved route.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AlertType {
    HighPollution,
    ExtremePollution,
    HealthWarning,
}

impl AlertType {
    pub fn label(&self) -> &'static str {
        match self {
            AlertType::HighPollution => "High pollution",
            AlertType::ExtremePollution => "Extreme pollution",
            AlertType::HealthWarning => "Health warning",
        }
    }
}

/// How urgent an alert is. Distinct from the route score tiers but drawn
/// from the same palette so the two read consistently side by side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AlertSeverity {
    Low,
    Medium,
    High,
    Extreme,
}

impl AlertSeverity {
    pub fn color(&self) -> &'static str {
        match self {
            AlertSeverity::Low => COLOR_GOOD,
            AlertSeverity::Medium => COLOR_MODERATE,
            AlertSeverity::High => COLOR_UNHEALTHY_SENSITIVE,
            AlertSeverity::Extreme => COLOR_UNHEALTHY,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            AlertSeverity::Low => "Low",
            AlertSeverity::Medium => "Medium",
            AlertSeverity::High => "High",
            AlertSeverity::Extreme => "Extreme",
        }
    }
}

/// A pollution alert generated for one of the user's saved routes with
/// alerting enabled.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PollutionAlert {
    pub id: String,
    pub route_id: String,
    pub alert_type: AlertType,
    pub message: String,
    pub severity: AlertSeverity,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_alert_parses_backend_payload() {
        let json = r#"{
            "id": "a1",
            "route_id": "r9",
            "alert_type": "high_pollution",
            "message": "High pollution alert for route 'Commute' - AQI: 132.5",
            "severity": "high",
            "created_at": "2025-06-01T08:30:00Z"
        }"#;
        let alert: PollutionAlert = serde_json::from_str(json).unwrap();
        assert_eq!(alert.alert_type, AlertType::HighPollution);
        assert_eq!(alert.severity, AlertSeverity::High);
        assert_eq!(alert.severity.color(), "#f97316");
    }

    #[test]
    fn test_severity_ordering() {
        assert!(AlertSeverity::Extreme > AlertSeverity::High);
        assert!(AlertSeverity::Medium > AlertSeverity::Low);
    }
}
