//! HTTP API Client
//!
//! Functions for communicating with the AirMap REST API. Every endpoint is a
//! read-only GET; failures bubble up to the caller as-is, with no retry,
//! caching or timeout at this layer.

use gloo_net::http::Request;
use urlencoding::encode;

/// Fixed API base URL, compiled in
pub const API_BASE: &str = "http://127.0.0.1:3000/api";

// ============ Response Types ============

/// A single georeferenced pollutant reading
#[derive(Clone, Debug, PartialEq, serde::Deserialize)]
pub struct PollutionReading {
    pub time: String,
    pub latitude: f64,
    pub longitude: f64,
    #[serde(default)]
    pub region: String,
    pub value: f64,
    #[serde(default)]
    pub is_anomaly: bool,
    #[serde(default)]
    pub pollutant: String,
}

/// Aggregated pollutant density for a bounding rectangle
#[derive(Clone, Debug, serde::Deserialize)]
pub struct RegionDensity {
    pub density: f64,
}

/// Spatial and temporal window for a density query
#[derive(Clone, Debug, PartialEq)]
pub struct DensityQuery {
    pub lat_from: f64,
    pub lat_to: f64,
    pub long_from: f64,
    pub long_to: f64,
    pub from: String,
    pub to: String,
}

// ============ URL Construction ============

fn pollutions_url(from: &str, to: &str, pollutant: Option<&str>) -> String {
    let mut url = format!(
        "{}/pollutions?from={}&to={}",
        API_BASE,
        encode(from),
        encode(to)
    );
    if let Some(pollutant) = pollutant {
        url.push_str(&format!("&pollutant={}", encode(pollutant)));
    }
    url
}

fn pollutants_url() -> String {
    format!("{}/pollutants", API_BASE)
}

fn anomalies_url(from: &str, to: &str) -> String {
    format!(
        "{}/anomalies?from={}&to={}",
        API_BASE,
        encode(from),
        encode(to)
    )
}

fn region_density_url(pollutant: &str, query: &DensityQuery) -> String {
    format!(
        "{}/pollutions/density/rect?pollutant={}&latFrom={}&latTo={}&longFrom={}&longTo={}&from={}&to={}",
        API_BASE,
        encode(pollutant),
        encode(&query.lat_from.to_string()),
        encode(&query.lat_to.to_string()),
        encode(&query.long_from.to_string()),
        encode(&query.long_to.to_string()),
        encode(&query.from),
        encode(&query.to),
    )
}

// ============ API Functions ============

/// Fetch pollution readings for a time range, optionally limited to one pollutant
pub async fn fetch_pollutions(
    from: &str,
    to: &str,
    pollutant: Option<&str>,
) -> Result<Vec<PollutionReading>, String> {
    let response = Request::get(&pollutions_url(from, to, pollutant))
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        return Err(format!("HTTP {} {}", response.status(), response.status_text()));
    }

    response.json().await.map_err(|e| format!("Parse error: {}", e))
}

/// Fetch the identifiers of all tracked pollutants
pub async fn fetch_pollutants() -> Result<Vec<String>, String> {
    let response = Request::get(&pollutants_url())
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        return Err(format!("HTTP {} {}", response.status(), response.status_text()));
    }

    response.json().await.map_err(|e| format!("Parse error: {}", e))
}

/// Fetch readings flagged as anomalous within a time range
pub async fn fetch_anomalies_of_range(
    from: &str,
    to: &str,
) -> Result<Vec<PollutionReading>, String> {
    let response = Request::get(&anomalies_url(from, to))
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        return Err(format!("HTTP {} {}", response.status(), response.status_text()));
    }

    response.json().await.map_err(|e| format!("Parse error: {}", e))
}

/// Fetch aggregated density for one pollutant inside a bounding rectangle
pub async fn fetch_region_density(
    pollutant: &str,
    query: &DensityQuery,
) -> Result<RegionDensity, String> {
    let response = Request::get(&region_density_url(pollutant, query))
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        return Err(format!("HTTP {} {}", response.status(), response.status_text()));
    }

    response.json().await.map_err(|e| format!("Parse error: {}", e))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pollutions_url_carries_encoded_range() {
        let url = pollutions_url("2024-01-01", "2024-01-31", None);
        assert_eq!(
            url,
            format!("{}/pollutions?from=2024-01-01&to=2024-01-31", API_BASE)
        );
    }

    #[test]
    fn pollutions_url_omits_missing_pollutant() {
        let url = pollutions_url("2024-01-01", "2024-01-31", None);
        assert!(!url.contains("pollutant"));
    }

    #[test]
    fn pollutions_url_appends_pollutant_when_present() {
        let url = pollutions_url("2024-01-01", "2024-01-31", Some("PM2.5"));
        assert!(url.ends_with("&pollutant=PM2.5"));
    }

    #[test]
    fn pollutions_url_percent_encodes_values() {
        let url = pollutions_url("2024-01-01 00:00", "2024-01-31 23:59", Some("NO x"));
        assert!(url.contains("from=2024-01-01%2000%3A00"));
        assert!(url.contains("to=2024-01-31%2023%3A59"));
        assert!(url.contains("pollutant=NO%20x"));
    }

    #[test]
    fn pollutants_url_takes_no_parameters() {
        assert_eq!(pollutants_url(), format!("{}/pollutants", API_BASE));
    }

    #[test]
    fn anomalies_url_carries_range() {
        let url = anomalies_url("2024-02-01", "2024-02-02");
        assert_eq!(
            url,
            format!("{}/anomalies?from=2024-02-01&to=2024-02-02", API_BASE)
        );
    }

    #[test]
    fn region_density_url_carries_all_seven_parameters() {
        let query = DensityQuery {
            lat_from: 10.0,
            lat_to: 20.0,
            long_from: 30.0,
            long_to: 40.0,
            from: "2024-01-01".to_string(),
            to: "2024-01-31".to_string(),
        };
        let url = region_density_url("PM2.5", &query);

        assert!(url.starts_with(&format!("{}/pollutions/density/rect?", API_BASE)));
        assert!(url.contains("pollutant=PM2.5"));
        assert!(url.contains("latFrom=10"));
        assert!(url.contains("latTo=20"));
        assert!(url.contains("longFrom=30"));
        assert!(url.contains("longTo=40"));
        assert!(url.contains("from=2024-01-01"));
        assert!(url.contains("to=2024-01-31"));
    }
}
