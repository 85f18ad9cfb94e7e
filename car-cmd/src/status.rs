//! Backend health and point pollution queries.

use car_core::api::BackendClient;
use car_core::pollution::Severity;
use log::info;

/// Ping `GET /health` and report what the backend says about itself.
pub async fn run_health(api_base: String) -> anyhow::Result<()> {
    let client = BackendClient::new(api_base);
    info!("Checking {}", client.base());

    let status = client.health().await?;
    if status.is_healthy() {
        println!("backend healthy at {}", client.base());
    } else {
        println!("backend reports status '{}'", status.status);
    }
    if let Some(ts) = status.timestamp {
        println!("reported at {}", ts.format("%Y-%m-%d %H:%M:%S UTC"));
    }
    Ok(())
}

/// Fetch the current pollution reading at a coordinate and print the AQI
/// with its severity tier plus whichever species the feed reported.
pub async fn run_pollution(lat: f64, lng: f64, api_base: String) -> anyhow::Result<()> {
    let client = BackendClient::new(api_base);
    let reading = client.current_pollution(lat, lng).await?;

    println!("Pollution at {:.4}, {:.4}", lat, lng);
    match reading.aqi {
        Some(aqi) => {
            let severity = Severity::classify(aqi);
            println!("  AQI {:.0} ({})", aqi, severity.label());
        }
        None => println!("  no AQI reported"),
    }

    let species = [
        ("NO2", reading.no2),
        ("O3", reading.o3),
        ("SO2", reading.so2),
        ("CO2", reading.co2),
        ("CH4", reading.methane),
    ];
    for (name, value) in species {
        if let Some(v) = value {
            println!("  {name:<4} {v:.1}");
        }
    }
    if let Some(ts) = reading.timestamp {
        println!("  as of {}", ts.format("%Y-%m-%d %H:%M UTC"));
    }
    Ok(())
}
