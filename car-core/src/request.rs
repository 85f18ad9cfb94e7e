use crate::location::{Location, ResolvedLocation};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

/// Body for `POST /routes/calculate`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RouteRequest {
    pub source: ResolvedLocation,
    pub destination: ResolvedLocation,
    #[serde(default = "empty_preferences")]
    pub preferences: Value,
}

fn empty_preferences() -> Value {
    Value::Object(serde_json::Map::new())
}

/// Why a planner submission cannot go out. Handled locally in the form;
/// these never reach the network layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlanError {
    MissingSource,
    MissingDestination,
}

impl fmt::Display for PlanError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlanError::MissingSource => write!(f, "Select a source location first"),
            PlanError::MissingDestination => write!(f, "Select a destination location first"),
        }
    }
}

impl std::error::Error for PlanError {}

/// Validate both endpoints and build the calculate request body. Source is
/// checked before destination, so a fully empty form reports the source.
pub fn plan_request(source: &Location, destination: &Location) -> Result<RouteRequest, PlanError> {
    let source = source.resolved().ok_or(PlanError::MissingSource)?;
    let destination = destination
        .resolved()
        .ok_or(PlanError::MissingDestination)?;
    Ok(RouteRequest {
        source,
        destination,
        preferences: empty_preferences(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn resolved(address: &str, lat: f64, lng: f64) -> Location {
        Location {
            address: address.to_string(),
            lat: Some(lat),
            lng: Some(lng),
        }
    }

    #[test]
    fn test_plan_request_rejects_missing_source() {
        let source = Location {
            address: "typed but never selected".to_string(),
            lat: None,
            lng: None,
        };
        let destination = resolved("Boston, MA, USA", 42.3601, -71.0589);
        assert_eq!(
            plan_request(&source, &destination),
            Err(PlanError::MissingSource)
        );
    }

    #[test]
    fn test_plan_request_rejects_missing_destination() {
        let source = resolved("Boston, MA, USA", 42.3601, -71.0589);
        assert_eq!(
            plan_request(&source, &Location::default()),
            Err(PlanError::MissingDestination)
        );
    }

    #[test]
    fn test_plan_request_reports_source_first_when_both_missing() {
        assert_eq!(
            plan_request(&Location::default(), &Location::default()),
            Err(PlanError::MissingSource)
        );
    }

    #[test]
    fn test_plan_request_builds_backend_body() {
        let source = resolved("New York, NY, USA", 40.7128, -74.006);
        let destination = resolved("Boston, MA, USA", 42.3601, -71.0589);
        let request = plan_request(&source, &destination).unwrap();

        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["source"]["address"], "New York, NY, USA");
        assert_eq!(json["destination"]["lat"], 42.3601);
        assert_eq!(json["preferences"], serde_json::json!({}));
    }
}
