use crate::location::{LatLng, ResolvedLocation};
use crate::pollution::{PollutionReading, Severity};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Pollutant concentrations averaged over a route's waypoints. The backend
/// sends these as a plain JSON object, so absent species deserialize to
/// `None` rather than failing the whole route.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct PollutantLevels {
    #[serde(default)]
    pub no2: Option<f64>,
    #[serde(default)]
    pub o3: Option<f64>,
    #[serde(default)]
    pub so2: Option<f64>,
    #[serde(default)]
    pub co2: Option<f64>,
    #[serde(default)]
    pub methane: Option<f64>,
}

/// Role of a waypoint within its route.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WaypointKind {
    Source,
    Intermediate,
    Destination,
}

/// Optional annotation for a single waypoint: a display name, its role, and
/// the point pollution reading sampled there.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WaypointDetail {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: WaypointKind,
    #[serde(default)]
    pub pollution_data: Option<PollutionReading>,
}

/// One candidate route returned by `/routes/calculate`. Waypoints run in
/// travel order from source to destination.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RouteOption {
    pub id: String,
    pub route_name: String,
    pub distance_km: f64,
    pub duration_minutes: f64,
    /// 0-100, lower is better.
    pub pollution_score: f64,
    pub waypoints: Vec<LatLng>,
    #[serde(default)]
    pub pollutant_levels: PollutantLevels,
    #[serde(default)]
    pub recommendations: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub waypoint_details: Option<Vec<WaypointDetail>>,
}

impl RouteOption {
    pub fn severity(&self) -> Severity {
        Severity::classify(self.pollution_score)
    }

    /// Waypoint details, but only when they line up one-to-one with the
    /// waypoint list. Misaligned annotations are treated as absent rather
    /// than guessed at.
    pub fn aligned_waypoint_details(&self) -> Option<&[WaypointDetail]> {
        match &self.waypoint_details {
            Some(details) if details.len() == self.waypoints.len() => Some(details.as_slice()),
            _ => None,
        }
    }
}

/// Envelope for a route calculation. The backend sorts `routes` cleanest
/// first; that ordering is preserved as received and drives which route is
/// auto-selected.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RouteResponse {
    #[serde(default)]
    pub request_id: Option<String>,
    pub source: ResolvedLocation,
    pub destination: ResolvedLocation,
    pub routes: Vec<RouteOption>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn route_with_details(waypoints: usize, details: Option<usize>) -> RouteOption {
        RouteOption {
            id: "r1".to_string(),
            route_name: "Cleanest Air Route".to_string(),
            distance_km: 12.4,
            duration_minutes: 19.0,
            pollution_score: 25.0,
            waypoints: (0..waypoints)
                .map(|i| LatLng::new(40.0 + i as f64 * 0.01, -74.0))
                .collect(),
            pollutant_levels: PollutantLevels::default(),
            recommendations: vec![],
            waypoint_details: details.map(|n| {
                (0..n)
                    .map(|i| WaypointDetail {
                        name: format!("wp{i}"),
                        kind: WaypointKind::Intermediate,
                        pollution_data: None,
                    })
                    .collect()
            }),
        }
    }

    #[test]
    fn test_aligned_details_require_matching_length() {
        assert!(route_with_details(4, Some(4)).aligned_waypoint_details().is_some());
        assert!(route_with_details(4, Some(3)).aligned_waypoint_details().is_none());
        assert!(route_with_details(4, None).aligned_waypoint_details().is_none());
    }

    #[test]
    fn test_route_parses_backend_payload_without_details() {
        let json = r#"{
            "id": "0e2f",
            "route_name": "Fastest Route",
            "distance_km": 31.2,
            "duration_minutes": 37.0,
            "pollution_score": 62.3,
            "waypoints": [{"lat": 40.7128, "lng": -74.006}, {"lat": 40.8, "lng": -74.1}],
            "pollutant_levels": {"no2": 18.1, "o3": 41.0, "so2": 6.2, "co2": 412.5, "methane": 1.92},
            "recommendations": ["Moderate pollution: Sensitive individuals should take precautions"]
        }"#;
        let route: RouteOption = serde_json::from_str(json).unwrap();
        assert_eq!(route.severity(), Severity::UnhealthySensitive);
        assert_eq!(route.waypoints.len(), 2);
        assert_eq!(route.pollutant_levels.no2, Some(18.1));
        assert!(route.waypoint_details.is_none());
    }

    #[test]
    fn test_waypoint_kind_wire_names() {
        let detail: WaypointDetail =
            serde_json::from_str(r#"{"name": "Midtown", "type": "intermediate"}"#).unwrap();
        assert_eq!(detail.kind, WaypointKind::Intermediate);
        assert_eq!(detail.pollution_data, None);

        let as_json = serde_json::to_value(&WaypointKind::Source).unwrap();
        assert_eq!(as_json, serde_json::json!("source"));
    }
}
