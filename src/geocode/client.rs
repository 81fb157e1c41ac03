use super::types::{Coordinates, ReverseGeocodeResponse};
use crate::{Error, Result, config::GeocodingConfig};
use async_trait::async_trait;
use reqwest::header::USER_AGENT;
use tracing::debug;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait Geocoder: Send + Sync {
    /// Returns a human-readable place name for the coordinates.
    async fn reverse(&self, coordinates: Coordinates) -> Result<String>;
}

/// Reverse geocoding against an OpenStreetMap Nominatim instance.
pub struct NominatimClient {
    client: reqwest::Client,
    url: String,
    user_agent: String,
}

impl NominatimClient {
    pub fn new(config: GeocodingConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout())
            .build()?;

        Ok(Self {
            client,
            url: config.url,
            user_agent: config.user_agent,
        })
    }
}

#[async_trait]
impl Geocoder for NominatimClient {
    async fn reverse(&self, coordinates: Coordinates) -> Result<String> {
        debug!("Reverse geocoding {}", coordinates);

        let response = self
            .client
            .get(&self.url)
            .header(USER_AGENT, &self.user_agent)
            .query(&[
                ("format", "jsonv2".to_string()),
                ("lat", coordinates.lat.to_string()),
                ("lon", coordinates.lon.to_string()),
            ])
            .send()
            .await
            .map_err(|e| Error::geocoding(format!("Failed to reach geocoding service: {}", e)))?;

        // Nominatim reports lookup failures as JSON bodies, so the status is not checked.
        let body: ReverseGeocodeResponse = response
            .json()
            .await
            .map_err(|e| Error::geocoding(format!("Failed to parse geocoding response: {}", e)))?;

        body.display_name
            .ok_or_else(|| Error::geocoding("Geocoding response missing display_name field"))
    }
}
