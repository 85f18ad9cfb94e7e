use crate::location::{Location, ResolvedLocation};
use csv::ReaderBuilder;
use serde::{Deserialize, Serialize};

/// Embedded CSV of selectable places: North American cities inside TEMPO
/// satellite coverage. This is the whole geocoding story for the demo.
pub static CSV_OBJECT: &str = include_str!("../../fixtures/locations.csv");

/// One selectable place from the embedded catalog.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct Place {
    /// Short display name (e.g., "Denver")
    pub name: String,
    /// Full address string sent to the backend
    pub address: String,
    /// Latitude in decimal degrees
    pub lat: f64,
    /// Longitude in decimal degrees
    pub lng: f64,
}

impl Place {
    /// Parse a CSV string of places into a vector.
    ///
    /// Expected CSV columns: name, address, lat, lng
    pub fn parse_place_csv(csv_object: &str) -> Result<Vec<Place>, std::io::Error> {
        let mut place_list: Vec<Place> = Vec::new();
        let mut rdr = ReaderBuilder::new()
            .delimiter(b',')
            .has_headers(true)
            .from_reader(csv_object.as_bytes());
        for row in rdr.records() {
            let record = row?;
            let name = String::from(record.get(0).expect("name parse fail"));
            let address = String::from(record.get(1).expect("address parse fail"));
            let lat = record
                .get(2)
                .unwrap_or("0.0")
                .trim()
                .parse::<f64>()
                .unwrap_or(0.0);
            let lng = record
                .get(3)
                .unwrap_or("0.0")
                .trim()
                .parse::<f64>()
                .unwrap_or(0.0);
            let place = Place {
                name,
                address,
                lat,
                lng,
            };
            place_list.push(place);
        }
        Ok(place_list)
    }

    /// Get the place vector from the embedded catalog.
    pub fn get_place_vector() -> Vec<Place> {
        if let Ok(p) = Place::parse_place_csv(CSV_OBJECT) {
            p
        } else {
            panic!("failed to parse locations csv")
        }
    }

    /// Look up a place by name or full address, case-insensitively.
    pub fn find<'a>(places: &'a [Place], query: &str) -> Option<&'a Place> {
        places.iter().find(|place| {
            place.name.eq_ignore_ascii_case(query) || place.address.eq_ignore_ascii_case(query)
        })
    }
}

impl From<&Place> for Location {
    fn from(place: &Place) -> Self {
        Location {
            address: place.address.clone(),
            lat: Some(place.lat),
            lng: Some(place.lng),
        }
    }
}

impl From<&Place> for ResolvedLocation {
    fn from(place: &Place) -> Self {
        ResolvedLocation {
            lat: place.lat,
            lng: place.lng,
            address: place.address.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Place;
    use crate::location::Location;

    #[test]
    fn test_place_vector() {
        let places: Vec<Place> = Place::get_place_vector();
        assert_eq!(places.len(), 22);
    }

    #[test]
    fn test_parse_place_csv() {
        let csv_data = "\
name,address,lat,lng
Denver,\"Denver, CO, USA\",39.7392,-104.9903
Seattle,\"Seattle, WA, USA\",47.6062,-122.3321
";
        let places = Place::parse_place_csv(csv_data).unwrap();
        assert_eq!(places.len(), 2);
        assert_eq!(places[0].name, "Denver");
        assert_eq!(places[0].address, "Denver, CO, USA");
        assert!((places[0].lat - 39.7392).abs() < f64::EPSILON);
        assert!((places[0].lng - (-104.9903)).abs() < f64::EPSILON);
        assert_eq!(places[1].name, "Seattle");
    }

    #[test]
    fn test_find_is_case_insensitive() {
        let places = Place::get_place_vector();
        let hit = Place::find(&places, "denver").unwrap();
        assert_eq!(hit.address, "Denver, CO, USA");
        let by_address = Place::find(&places, "Toronto, ON, Canada").unwrap();
        assert_eq!(by_address.name, "Toronto");
        assert!(Place::find(&places, "Atlantis").is_none());
    }

    #[test]
    fn test_place_resolves_to_location() {
        let places = Place::get_place_vector();
        let miami = Place::find(&places, "Miami").unwrap();
        let location: Location = miami.into();
        assert!(location.is_resolved());
        assert_eq!(location.address, "Miami, FL, USA");
    }
}
