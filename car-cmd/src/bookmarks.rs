//! Saved route and alert listings.

use car_core::api::BackendClient;
use car_core::pollution::Severity;

/// List a user's saved routes, one block per bookmark.
pub async fn run_saved(user: &str, api_base: String) -> anyhow::Result<()> {
    let client = BackendClient::new(api_base);
    let saved = client.saved_routes(user).await?;

    if saved.is_empty() {
        println!("no saved routes for {user}");
        return Ok(());
    }
    for route in &saved {
        let severity = Severity::classify(route.selected_route.pollution_score);
        let alerts = if route.alerts_enabled { "on" } else { "off" };
        println!("{}  {}", route.id, route.route_name);
        println!(
            "    {} {:.1} km, AQI {:.1} ({}), alerts {}",
            route.selected_route.route_name,
            route.selected_route.distance_km,
            route.selected_route.pollution_score,
            severity.label(),
            alerts
        );
        if let Some(created) = route.created_at {
            println!("    saved {}", created.format("%Y-%m-%d %H:%M UTC"));
        }
    }
    Ok(())
}

/// Delete one saved route. The backend's confirmation message is printed
/// verbatim; a 404 surfaces as an error instead.
pub async fn run_delete(id: &str, api_base: String) -> anyhow::Result<()> {
    let client = BackendClient::new(api_base);
    let ack = client.delete_saved_route(id).await?;
    println!("{}", ack.message);
    Ok(())
}

/// List a user's pollution alerts, most useful after saving routes with
/// alerts enabled.
pub async fn run_alerts(user: &str, api_base: String) -> anyhow::Result<()> {
    let client = BackendClient::new(api_base);
    let alerts = client.alerts(user).await?;

    if alerts.is_empty() {
        println!("no alerts for {user}");
        return Ok(());
    }
    for alert in &alerts {
        let when = alert
            .created_at
            .map(|t| t.format("%Y-%m-%d %H:%M").to_string())
            .unwrap_or_else(|| "-".to_string());
        println!(
            "[{}] {}  route {}  {}",
            alert.severity.label(),
            when,
            alert.route_id,
            alert.message
        );
    }
    Ok(())
}
