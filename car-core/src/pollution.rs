use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Tier colors shared by every severity display: route polylines, badges,
/// heat circles, and the CLI table all draw from these four.
pub const COLOR_GOOD: &str = "#10b981";
pub const COLOR_MODERATE: &str = "#f59e0b";
pub const COLOR_UNHEALTHY_SENSITIVE: &str = "#f97316";
pub const COLOR_UNHEALTHY: &str = "#ef4444";

/// Severity tier of a pollution score (0-100 scale, lower is better).
///
/// The scale follows the EPA AQI category cut points for the bottom of the
/// index, collapsed to four tiers since route scores are capped at 100.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Severity {
    Good,
    Moderate,
    UnhealthySensitive,
    Unhealthy,
}

impl Severity {
    /// Classify a score into its tier. Upper bounds are inclusive: 30 is
    /// still Good, 50 still Moderate, 70 still UnhealthySensitive. Total
    /// over all of f64: negatives land in Good, anything past 100 in
    /// Unhealthy.
    pub fn classify(score: f64) -> Severity {
        if score <= 30.0 {
            Severity::Good
        } else if score <= 50.0 {
            Severity::Moderate
        } else if score <= 70.0 {
            Severity::UnhealthySensitive
        } else {
            Severity::Unhealthy
        }
    }

    pub fn color(&self) -> &'static str {
        match self {
            Severity::Good => COLOR_GOOD,
            Severity::Moderate => COLOR_MODERATE,
            Severity::UnhealthySensitive => COLOR_UNHEALTHY_SENSITIVE,
            Severity::Unhealthy => COLOR_UNHEALTHY,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Severity::Good => "Good",
            Severity::Moderate => "Moderate",
            Severity::UnhealthySensitive => "Unhealthy for Sensitive Groups",
            Severity::Unhealthy => "Unhealthy",
        }
    }
}

/// A point-in-time pollutant reading from the TEMPO-backed
/// `/pollution/current` endpoint. Every field is optional because the
/// upstream satellite feed can drop individual species.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct PollutionReading {
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
    #[serde(default)]
    pub aqi: Option<f64>,
    #[serde(default)]
    pub timestamp: Option<DateTime<Utc>>,
}

impl PollutionReading {
    /// Severity of the reading's AQI, when the feed reported one.
    pub fn severity(&self) -> Option<Severity> {
        self.aqi.map(Severity::classify)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_boundaries() {
        assert_eq!(Severity::classify(30.0), Severity::Good);
        assert_eq!(Severity::classify(31.0), Severity::Moderate);
        assert_eq!(Severity::classify(50.0), Severity::Moderate);
        assert_eq!(Severity::classify(51.0), Severity::UnhealthySensitive);
        assert_eq!(Severity::classify(70.0), Severity::UnhealthySensitive);
        assert_eq!(Severity::classify(71.0), Severity::Unhealthy);
    }

    #[test]
    fn test_classify_is_total() {
        assert_eq!(Severity::classify(-5.0), Severity::Good);
        assert_eq!(Severity::classify(0.0), Severity::Good);
        assert_eq!(Severity::classify(150.0), Severity::Unhealthy);
    }

    #[test]
    fn test_tier_colors() {
        assert_eq!(Severity::classify(12.0).color(), "#10b981");
        assert_eq!(Severity::classify(42.0).color(), "#f59e0b");
        assert_eq!(Severity::classify(60.0).color(), "#f97316");
        assert_eq!(Severity::classify(88.0).color(), "#ef4444");
    }

    #[test]
    fn test_reading_severity_requires_aqi() {
        let reading = PollutionReading {
            no2: Some(14.2),
            ..Default::default()
        };
        assert_eq!(reading.severity(), None);

        let with_aqi = PollutionReading {
            aqi: Some(82.0),
            ..Default::default()
        };
        assert_eq!(with_aqi.severity(), Some(Severity::Unhealthy));
    }

    #[test]
    fn test_reading_parses_partial_payload() {
        let json = r#"{"no2": 12.5, "aqi": 65.0, "timestamp": "2025-06-01T12:00:00Z"}"#;
        let reading: PollutionReading = serde_json::from_str(json).unwrap();
        assert_eq!(reading.no2, Some(12.5));
        assert_eq!(reading.o3, None);
        assert_eq!(reading.severity(), Some(Severity::UnhealthySensitive));
        assert!(reading.timestamp.is_some());
    }
}
