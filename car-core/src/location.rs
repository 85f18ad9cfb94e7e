use serde::{Deserialize, Serialize};

/// A coordinate pair in decimal degrees, matching the backend's waypoint shape.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
}

impl LatLng {
    pub fn new(lat: f64, lng: f64) -> Self {
        LatLng { lat, lng }
    }
}

/// A route endpoint as the user sees it while filling in the planner form.
/// Coordinates stay `None` until a catalog place has been chosen, so a
/// half-filled form is representable without sentinel values.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Location {
    pub address: String,
    pub lat: Option<f64>,
    pub lng: Option<f64>,
}

impl Location {
    /// Coordinates of this endpoint, present only when both components are set.
    pub fn coords(&self) -> Option<LatLng> {
        match (self.lat, self.lng) {
            (Some(lat), Some(lng)) => Some(LatLng { lat, lng }),
            _ => None,
        }
    }

    pub fn is_resolved(&self) -> bool {
        self.coords().is_some()
    }

    /// Convert into the wire shape the backend accepts. `None` while the
    /// user has not picked a place yet.
    pub fn resolved(&self) -> Option<ResolvedLocation> {
        self.coords().map(|c| ResolvedLocation {
            lat: c.lat,
            lng: c.lng,
            address: self.address.clone(),
        })
    }
}

/// A fully geocoded endpoint. Every location the backend sends or accepts
/// has this shape; only the in-progress form selection uses `Location`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResolvedLocation {
    pub lat: f64,
    pub lng: f64,
    pub address: String,
}

impl ResolvedLocation {
    pub fn coords(&self) -> LatLng {
        LatLng {
            lat: self.lat,
            lng: self.lng,
        }
    }
}

impl From<ResolvedLocation> for Location {
    fn from(resolved: ResolvedLocation) -> Self {
        Location {
            address: resolved.address,
            lat: Some(resolved.lat),
            lng: Some(resolved.lng),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unresolved_location_has_no_coords() {
        let empty = Location::default();
        assert_eq!(empty.coords(), None);
        assert!(!empty.is_resolved());

        let lat_only = Location {
            address: "somewhere".to_string(),
            lat: Some(39.7392),
            lng: None,
        };
        assert_eq!(lat_only.coords(), None);
        assert_eq!(lat_only.resolved(), None);
    }

    #[test]
    fn test_resolved_location_round_trips_coords() {
        let denver = Location {
            address: "Denver, CO, USA".to_string(),
            lat: Some(39.7392),
            lng: Some(-104.9903),
        };
        let coords = denver.coords().unwrap();
        assert!((coords.lat - 39.7392).abs() < f64::EPSILON);
        assert!((coords.lng - (-104.9903)).abs() < f64::EPSILON);

        let wire = denver.resolved().unwrap();
        assert_eq!(wire.address, "Denver, CO, USA");
        let back: Location = wire.into();
        assert_eq!(back, denver);
    }
}
