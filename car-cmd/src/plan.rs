//! Route calculation from the command line.

use car_core::api::BackendClient;
use car_core::catalog::Place;
use car_core::location::Location;
use car_core::pollution::Severity;
use car_core::request::plan_request;
use log::info;

/// Resolve both endpoints against the embedded catalog, request candidate
/// routes, and print them in backend order (cleanest first).
pub async fn run_calculate(from: &str, to: &str, json: bool, api_base: String) -> anyhow::Result<()> {
    let places = Place::get_place_vector();
    let source = resolve_place(&places, from)?;
    let destination = resolve_place(&places, to)?;

    let request = plan_request(&Location::from(source), &Location::from(destination))?;
    let client = BackendClient::new(api_base);
    info!("Requesting routes from {}", client.base());
    let response = client.calculate_routes(&request).await?;

    if json {
        println!("{}", serde_json::to_string_pretty(&response)?);
        return Ok(());
    }

    println!(
        "Routes from {} to {} ({} candidates):",
        response.source.address,
        response.destination.address,
        response.routes.len()
    );
    for (rank, route) in response.routes.iter().enumerate() {
        let severity = Severity::classify(route.pollution_score);
        println!(
            "{:>2}. {:<28} {:>7.1} km {:>6.0} min  AQI {:>5.1}  {}",
            rank + 1,
            route.route_name,
            route.distance_km,
            route.duration_minutes,
            route.pollution_score,
            severity.label()
        );
        for rec in &route.recommendations {
            println!("      - {rec}");
        }
    }
    Ok(())
}

/// Look up a place by name or address, case-insensitively. An unknown
/// query lists what the catalog does contain instead of guessing.
fn resolve_place<'a>(places: &'a [Place], query: &str) -> anyhow::Result<&'a Place> {
    Place::find(places, query).ok_or_else(|| {
        let known = places
            .iter()
            .map(|p| p.name.as_str())
            .collect::<Vec<_>>()
            .join(", ");
        anyhow::anyhow!("unknown place '{query}'. Known places: {known}")
    })
}

#[cfg(test)]
mod tests {
    use super::resolve_place;
    use car_core::catalog::Place;

    #[test]
    fn test_resolve_place_is_case_insensitive() {
        let places = Place::get_place_vector();
        let hit = resolve_place(&places, "new york").unwrap();
        assert_eq!(hit.name, "New York");
    }

    #[test]
    fn test_resolve_place_unknown_lists_catalog() {
        let places = Place::get_place_vector();
        let err = resolve_place(&places, "Atlantis").unwrap_err();
        let message = err.to_string();
        assert!(message.contains("unknown place 'Atlantis'"));
        assert!(message.contains("New York"));
    }
}
