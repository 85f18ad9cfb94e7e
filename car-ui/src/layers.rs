//! Map-layer construction rules.
//!
//! Everything here is a pure function from a state snapshot to serializable
//! layer specs. The JS bridge turns the specs into Leaflet layers; nothing
//! in this module touches the DOM, so the whole renderer contract is
//! testable off the browser.

use car_core::location::{LatLng, Location};
use car_core::pollution::{PollutionReading, Severity};
use car_core::route::{RouteOption, WaypointDetail, WaypointKind};
use serde::Serialize;

/// Continental fallback view when nothing has been selected yet.
pub const DEFAULT_CENTER: LatLng = LatLng {
    lat: 39.8,
    lng: -98.5,
};
pub const DEFAULT_ZOOM: u8 = 4;
/// Zoom applied when centering on a lone source selection.
pub const FOCUS_ZOOM: u8 = 12;
/// Pixel padding around fitted bounds.
pub const FIT_PADDING_PX: u32 = 40;

const SELECTED_WEIGHT: u32 = 6;
const UNSELECTED_WEIGHT: u32 = 4;
const SELECTED_OPACITY: f64 = 0.95;
const UNSELECTED_OPACITY: f64 = 0.45;

/// Radius of one heat circle in meters, sized to read as a corridor at city
/// zoom without merging adjacent routes.
pub const HEAT_RADIUS_M: f64 = 600.0;
const HEAT_OPACITY: f64 = 0.35;

/// Axis-aligned bounding box over map points.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Bounds {
    pub south: f64,
    pub west: f64,
    pub north: f64,
    pub east: f64,
}

impl Bounds {
    pub fn point(p: LatLng) -> Self {
        Bounds {
            south: p.lat,
            west: p.lng,
            north: p.lat,
            east: p.lng,
        }
    }

    pub fn extend(&mut self, p: LatLng) {
        self.south = self.south.min(p.lat);
        self.north = self.north.max(p.lat);
        self.west = self.west.min(p.lng);
        self.east = self.east.max(p.lng);
    }

    /// Bounding box of a point list, `None` when the list is empty.
    pub fn of(points: &[LatLng]) -> Option<Bounds> {
        let (first, rest) = points.split_first()?;
        let mut bounds = Bounds::point(*first);
        for p in rest {
            bounds.extend(*p);
        }
        Some(bounds)
    }

    pub fn contains(&self, p: LatLng) -> bool {
        self.south <= p.lat && p.lat <= self.north && self.west <= p.lng && p.lng <= self.east
    }
}

/// Where the map should look. Produced by `compute_viewport`, applied by
/// the JS bridge.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Viewport {
    FitBounds { bounds: Bounds, padding: u32 },
    Center { lat: f64, lng: f64, zoom: u8 },
}

/// Decide where the map should look. Priority order, first match wins:
/// the selected route's waypoint bounds, then both endpoints, then the
/// source alone at street zoom, then the continental default.
pub fn compute_viewport(
    source: &Location,
    destination: &Location,
    selected_route: Option<&RouteOption>,
) -> Viewport {
    if let Some(route) = selected_route {
        if let Some(bounds) = Bounds::of(&route.waypoints) {
            return Viewport::FitBounds {
                bounds,
                padding: FIT_PADDING_PX,
            };
        }
    }
    match (source.coords(), destination.coords()) {
        (Some(s), Some(d)) => {
            let mut bounds = Bounds::point(s);
            bounds.extend(d);
            Viewport::FitBounds {
                bounds,
                padding: FIT_PADDING_PX,
            }
        }
        (Some(s), None) => Viewport::Center {
            lat: s.lat,
            lng: s.lng,
            zoom: FOCUS_ZOOM,
        },
        _ => Viewport::Center {
            lat: DEFAULT_CENTER.lat,
            lng: DEFAULT_CENTER.lng,
            zoom: DEFAULT_ZOOM,
        },
    }
}

/// What a marker stands for; the glue picks its glyph from this.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MarkerRole {
    Source,
    Destination,
    Waypoint,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MarkerSpec {
    pub lat: f64,
    pub lng: f64,
    pub role: MarkerRole,
    pub popup: String,
}

/// Source and destination markers for whichever endpoints are resolved.
/// Popups carry the address and coordinates to four decimal places.
pub fn build_endpoint_markers(source: &Location, destination: &Location) -> Vec<MarkerSpec> {
    let mut markers = Vec::new();
    if let Some(c) = source.coords() {
        markers.push(MarkerSpec {
            lat: c.lat,
            lng: c.lng,
            role: MarkerRole::Source,
            popup: endpoint_popup("Source", &source.address, c),
        });
    }
    if let Some(c) = destination.coords() {
        markers.push(MarkerSpec {
            lat: c.lat,
            lng: c.lng,
            role: MarkerRole::Destination,
            popup: endpoint_popup("Destination", &destination.address, c),
        });
    }
    markers
}

fn endpoint_popup(role: &str, address: &str, c: LatLng) -> String {
    format!(
        "<strong>{role}</strong><br>{address}<br>{:.4}, {:.4}",
        c.lat, c.lng
    )
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PolylineSpec {
    pub route_id: String,
    pub points: Vec<LatLng>,
    pub color: &'static str,
    pub weight: u32,
    pub opacity: f64,
    pub selected: bool,
}

/// One polyline per route, points in waypoint order, stroke color from the
/// route's score tier. The selected route is drawn heavier and more opaque
/// than the rest. Pure over its inputs: rendering the same snapshot twice
/// yields the same specs.
pub fn build_route_polylines(
    routes: &[RouteOption],
    selected_id: Option<&str>,
) -> Vec<PolylineSpec> {
    routes
        .iter()
        .map(|route| {
            let selected = selected_id == Some(route.id.as_str());
            PolylineSpec {
                route_id: route.id.clone(),
                points: route.waypoints.clone(),
                color: route.severity().color(),
                weight: if selected {
                    SELECTED_WEIGHT
                } else {
                    UNSELECTED_WEIGHT
                },
                opacity: if selected {
                    SELECTED_OPACITY
                } else {
                    UNSELECTED_OPACITY
                },
                selected,
            }
        })
        .collect()
}

/// Small annotated markers over the selected route's intermediate
/// waypoints. Emitted only when the route's details line up one-to-one
/// with its waypoints; misaligned annotations produce nothing.
pub fn build_waypoint_markers(route: &RouteOption) -> Vec<MarkerSpec> {
    let Some(details) = route.aligned_waypoint_details() else {
        return Vec::new();
    };
    route
        .waypoints
        .iter()
        .zip(details)
        .filter(|(_, detail)| detail.kind == WaypointKind::Intermediate)
        .map(|(p, detail)| MarkerSpec {
            lat: p.lat,
            lng: p.lng,
            role: MarkerRole::Waypoint,
            popup: waypoint_popup(detail),
        })
        .collect()
}

fn waypoint_popup(detail: &WaypointDetail) -> String {
    let mut lines = vec![detail.name.clone()];
    if let Some(reading) = &detail.pollution_data {
        if let Some(aqi) = reading.aqi {
            let label = Severity::classify(aqi).label();
            lines.push(format!("AQI {aqi:.0} ({label})"));
        }
    }
    lines.join("<br>")
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HeatCircleSpec {
    pub lat: f64,
    pub lng: f64,
    pub radius_m: f64,
    pub color: &'static str,
    pub opacity: f64,
}

/// Heat approximation layer: one translucent fixed-radius circle per
/// waypoint of every route, tinted by that route's overall score tier.
/// This shades the sampled corridor; it is not a kernel density estimate
/// and interpolates nothing between waypoints.
pub fn build_heat_circles(routes: &[RouteOption]) -> Vec<HeatCircleSpec> {
    routes
        .iter()
        .flat_map(|route| {
            let color = route.severity().color();
            route.waypoints.iter().map(move |p| HeatCircleSpec {
                lat: p.lat,
                lng: p.lng,
                radius_m: HEAT_RADIUS_M,
                color,
                opacity: HEAT_OPACITY,
            })
        })
        .collect()
}

/// A pin dropped by the point-query tool, kept until dismissed.
#[derive(Debug, Clone, PartialEq)]
pub struct QueryPin {
    pub id: u64,
    pub at: LatLng,
    pub reading: PollutionReading,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PinSpec {
    pub id: u64,
    pub lat: f64,
    pub lng: f64,
    pub popup: String,
}

pub fn build_query_pins(pins: &[QueryPin]) -> Vec<PinSpec> {
    pins.iter()
        .map(|pin| PinSpec {
            id: pin.id,
            lat: pin.at.lat,
            lng: pin.at.lng,
            popup: pin_popup(&pin.reading, pin.at),
        })
        .collect()
}

fn pin_popup(reading: &PollutionReading, at: LatLng) -> String {
    let mut lines = Vec::new();
    match reading.aqi {
        Some(aqi) => {
            let label = Severity::classify(aqi).label();
            lines.push(format!("<strong>AQI {aqi:.0}</strong> {label}"));
        }
        None => lines.push("<strong>No AQI reported</strong>".to_string()),
    }
    let mut species = Vec::new();
    if let Some(v) = reading.no2 {
        species.push(format!("NO2 {v:.1}"));
    }
    if let Some(v) = reading.o3 {
        species.push(format!("O3 {v:.1}"));
    }
    if let Some(v) = reading.so2 {
        species.push(format!("SO2 {v:.1}"));
    }
    if !species.is_empty() {
        lines.push(species.join(" / "));
    }
    lines.push(format!("{:.4}, {:.4}", at.lat, at.lng));
    lines.join("<br>")
}

#[cfg(test)]
mod tests {
    use super::*;
    use car_core::route::PollutantLevels;

    fn resolved(address: &str, lat: f64, lng: f64) -> Location {
        Location {
            address: address.to_string(),
            lat: Some(lat),
            lng: Some(lng),
        }
    }

    fn route(id: &str, score: f64, waypoints: Vec<LatLng>) -> RouteOption {
        RouteOption {
            id: id.to_string(),
            route_name: format!("route {id}"),
            distance_km: 10.0,
            duration_minutes: 15.0,
            pollution_score: score,
            waypoints,
            pollutant_levels: PollutantLevels::default(),
            recommendations: vec![],
            waypoint_details: None,
        }
    }

    fn ny_boston_waypoints() -> Vec<LatLng> {
        vec![
            LatLng::new(40.7128, -74.006),
            LatLng::new(41.3, -73.1),
            LatLng::new(42.3601, -71.0589),
        ]
    }

    #[test]
    fn test_viewport_prefers_selected_route_bounds() {
        let source = resolved("New York, NY, USA", 40.7128, -74.006);
        let destination = resolved("Boston, MA, USA", 42.3601, -71.0589);
        let selected = route("r1", 25.0, ny_boston_waypoints());

        let viewport = compute_viewport(&source, &destination, Some(&selected));
        let Viewport::FitBounds { bounds, padding } = viewport else {
            panic!("expected fitted bounds, got {viewport:?}");
        };
        assert_eq!(padding, FIT_PADDING_PX);
        for p in ny_boston_waypoints() {
            assert!(bounds.contains(p), "bounds must contain waypoint {p:?}");
        }
    }

    #[test]
    fn test_viewport_selected_route_without_waypoints_falls_back() {
        let source = resolved("New York, NY, USA", 40.7128, -74.006);
        let destination = resolved("Boston, MA, USA", 42.3601, -71.0589);
        let empty_route = route("r1", 25.0, vec![]);

        let viewport = compute_viewport(&source, &destination, Some(&empty_route));
        let Viewport::FitBounds { bounds, .. } = viewport else {
            panic!("expected endpoint bounds, got {viewport:?}");
        };
        assert!(bounds.contains(LatLng::new(40.7128, -74.006)));
        assert!(bounds.contains(LatLng::new(42.3601, -71.0589)));
        assert!((bounds.south - 40.7128).abs() < f64::EPSILON);
        assert!((bounds.north - 42.3601).abs() < f64::EPSILON);
        assert!((bounds.west + 74.006).abs() < f64::EPSILON);
        assert!((bounds.east + 71.0589).abs() < f64::EPSILON);
    }

    #[test]
    fn test_viewport_source_only_centers_at_focus_zoom() {
        let source = resolved("Denver, CO, USA", 39.7392, -104.9903);
        let viewport = compute_viewport(&source, &Location::default(), None);
        assert_eq!(
            viewport,
            Viewport::Center {
                lat: 39.7392,
                lng: -104.9903,
                zoom: FOCUS_ZOOM
            }
        );
    }

    #[test]
    fn test_viewport_default_when_nothing_selected() {
        let viewport = compute_viewport(&Location::default(), &Location::default(), None);
        assert_eq!(
            viewport,
            Viewport::Center {
                lat: 39.8,
                lng: -98.5,
                zoom: DEFAULT_ZOOM
            }
        );
    }

    #[test]
    fn test_destination_alone_does_not_center() {
        // Only a lone source gets the street-zoom treatment.
        let destination = resolved("Miami, FL, USA", 25.7617, -80.1918);
        let viewport = compute_viewport(&Location::default(), &destination, None);
        assert_eq!(
            viewport,
            Viewport::Center {
                lat: 39.8,
                lng: -98.5,
                zoom: DEFAULT_ZOOM
            }
        );
    }

    #[test]
    fn test_endpoint_markers_skip_unresolved() {
        let source = resolved("New York, NY, USA", 40.7128, -74.006);
        let markers = build_endpoint_markers(&source, &Location::default());
        assert_eq!(markers.len(), 1);
        assert_eq!(markers[0].role, MarkerRole::Source);
        assert!(markers[0].popup.contains("New York, NY, USA"));
        assert!(markers[0].popup.contains("40.7128, -74.0060"));
    }

    #[test]
    fn test_polylines_color_by_score_and_mark_selection() {
        let routes = vec![
            route("r1", 25.0, ny_boston_waypoints()),
            route("r2", 60.0, ny_boston_waypoints()),
        ];
        let specs = build_route_polylines(&routes, Some("r1"));

        assert_eq!(specs.len(), 2);
        assert_eq!(specs[0].color, "#10b981");
        assert_eq!(specs[1].color, "#f97316");
        assert!(specs[0].selected);
        assert!(!specs[1].selected);
        assert!(specs[0].weight > specs[1].weight);
        assert!(specs[0].opacity > specs[1].opacity);
    }

    #[test]
    fn test_polylines_are_idempotent() {
        let routes = vec![
            route("r1", 25.0, ny_boston_waypoints()),
            route("r2", 60.0, ny_boston_waypoints()),
        ];
        let first = build_route_polylines(&routes, Some("r2"));
        let second = build_route_polylines(&routes, Some("r2"));
        assert_eq!(first, second);
    }

    #[test]
    fn test_heat_circles_cover_every_waypoint() {
        let routes = vec![
            route("r1", 25.0, ny_boston_waypoints()),
            route("r2", 80.0, vec![LatLng::new(40.0, -74.0), LatLng::new(40.1, -74.1)]),
        ];
        let circles = build_heat_circles(&routes);
        assert_eq!(circles.len(), 5);
        assert_eq!(circles[0].color, "#10b981");
        assert_eq!(circles[4].color, "#ef4444");
        assert!((circles[0].radius_m - HEAT_RADIUS_M).abs() < f64::EPSILON);
    }

    #[test]
    fn test_waypoint_markers_require_aligned_details() {
        use car_core::route::{WaypointDetail, WaypointKind};

        let mut r = route("r1", 25.0, ny_boston_waypoints());
        assert!(build_waypoint_markers(&r).is_empty());

        r.waypoint_details = Some(vec![
            WaypointDetail {
                name: "Start".to_string(),
                kind: WaypointKind::Source,
                pollution_data: None,
            },
            WaypointDetail {
                name: "Midpoint".to_string(),
                kind: WaypointKind::Intermediate,
                pollution_data: Some(PollutionReading {
                    aqi: Some(72.0),
                    ..Default::default()
                }),
            },
            WaypointDetail {
                name: "End".to_string(),
                kind: WaypointKind::Destination,
                pollution_data: None,
            },
        ]);
        let markers = build_waypoint_markers(&r);
        assert_eq!(markers.len(), 1);
        assert!(markers[0].popup.contains("Midpoint"));
        assert!(markers[0].popup.contains("AQI 72 (Unhealthy)"));

        // one detail short: treated as absent
        r.waypoint_details.as_mut().unwrap().pop();
        assert!(build_waypoint_markers(&r).is_empty());
    }

    #[test]
    fn test_pin_popup_handles_missing_aqi() {
        let pin = QueryPin {
            id: 7,
            at: LatLng::new(41.8781, -87.6298),
            reading: PollutionReading {
                no2: Some(14.23),
                ..Default::default()
            },
        };
        let specs = build_query_pins(&[pin]);
        assert_eq!(specs[0].id, 7);
        assert!(specs[0].popup.contains("No AQI reported"));
        assert!(specs[0].popup.contains("NO2 14.2"));
        assert!(specs[0].popup.contains("41.8781, -87.6298"));
    }

    #[test]
    fn test_viewport_serializes_for_the_bridge() {
        let viewport = compute_viewport(&Location::default(), &Location::default(), None);
        let json = serde_json::to_value(&viewport).unwrap();
        assert_eq!(json["kind"], "center");
        assert_eq!(json["zoom"], 4);
    }
}
