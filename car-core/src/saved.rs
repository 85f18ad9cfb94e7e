use crate::location::ResolvedLocation;
use crate::route::RouteOption;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A bookmarked route as stored by the backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SavedRoute {
    pub id: String,
    pub user_id: String,
    pub route_name: String,
    pub source: ResolvedLocation,
    pub destination: ResolvedLocation,
    pub selected_route: RouteOption,
    #[serde(default)]
    pub alerts_enabled: bool,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

/// Body for `POST /routes/save`. The backend fills in `id` and
/// `created_at`, so the client never invents either.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SaveRouteRequest {
    pub user_id: String,
    pub route_name: String,
    pub source: ResolvedLocation,
    pub destination: ResolvedLocation,
    pub selected_route: RouteOption,
    pub alerts_enabled: bool,
}

/// Removal protocol for the bookmark list: a row leaves the list only after
/// the backend has confirmed the delete. Callers issue the DELETE first and
/// call this with the confirmed id.
pub trait ConfirmedRemoval {
    fn remove_confirmed(&mut self, route_id: &str) -> bool;
}

impl ConfirmedRemoval for Vec<SavedRoute> {
    fn remove_confirmed(&mut self, route_id: &str) -> bool {
        let before = self.len();
        self.retain(|route| route.id != route_id);
        self.len() != before
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::route::PollutantLevels;

    fn saved(id: &str) -> SavedRoute {
        SavedRoute {
            id: id.to_string(),
            user_id: "u1".to_string(),
            route_name: "Morning commute".to_string(),
            source: ResolvedLocation {
                lat: 40.7128,
                lng: -74.006,
                address: "New York, NY, USA".to_string(),
            },
            destination: ResolvedLocation {
                lat: 39.9526,
                lng: -75.1652,
                address: "Philadelphia, PA, USA".to_string(),
            },
            selected_route: RouteOption {
                id: format!("route-{id}"),
                route_name: "Cleanest Air Route".to_string(),
                distance_km: 129.6,
                duration_minutes: 194.0,
                pollution_score: 28.4,
                waypoints: vec![],
                pollutant_levels: PollutantLevels::default(),
                recommendations: vec![],
                waypoint_details: None,
            },
            alerts_enabled: true,
            created_at: None,
        }
    }

    #[test]
    fn test_remove_confirmed_removes_exactly_one_row() {
        let mut list = vec![saved("a"), saved("b"), saved("c")];
        assert!(list.remove_confirmed("b"));
        assert_eq!(list.len(), 2);
        assert!(list.iter().all(|r| r.id != "b"));
    }

    #[test]
    fn test_remove_confirmed_unknown_id_is_a_noop() {
        let mut list = vec![saved("a"), saved("b")];
        assert!(!list.remove_confirmed("zzz"));
        assert_eq!(list.len(), 2);
    }
}
