//! IP geolocation locator
//!
//! Resolves an approximate position from the caller's public IP via an
//! ip-api.com compatible endpoint: `{"status": "success", "lat": .., "lon": ..}`.

use crate::{
    error::GeolocationError,
    models::Coordinates,
    services::locators::Locator,
};
use reqwest::{Client as HttpClient, StatusCode};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
struct IpApiResponse {
    status: String,
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    lat: Option<f64>,
    #[serde(default)]
    lon: Option<f64>,
}

#[derive(Clone)]
pub struct IpApiLocator {
    http_client: HttpClient,
    api_url: String,
}

impl IpApiLocator {
    pub fn new(api_url: String) -> Self {
        Self {
            http_client: HttpClient::new(),
            api_url,
        }
    }

    fn map_transport_error(err: reqwest::Error) -> GeolocationError {
        if err.is_timeout() {
            GeolocationError::Timeout
        } else {
            GeolocationError::Other(err.to_string())
        }
    }

    fn convert_response(body: IpApiResponse) -> Result<Coordinates, GeolocationError> {
        if body.status != "success" {
            tracing::warn!(
                status = %body.status,
                reason = body.message.as_deref().unwrap_or(""),
                "IP geolocation lookup failed"
            );
            return Err(GeolocationError::PositionUnavailable);
        }

        match (body.lat, body.lon) {
            (Some(lat), Some(lon)) => Ok(Coordinates::new(lat, lon)),
            _ => Err(GeolocationError::PositionUnavailable),
        }
    }
}

#[async_trait::async_trait]
impl Locator for IpApiLocator {
    async fn acquire(&self) -> Result<Coordinates, GeolocationError> {
        let response = self
            .http_client
            .get(&self.api_url)
            .send()
            .await
            .map_err(Self::map_transport_error)?;

        let status = response.status();
        if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
            return Err(GeolocationError::PermissionDenied);
        }
        if !status.is_success() {
            tracing::warn!(status = %status, "IP geolocation endpoint returned error status");
            return Err(GeolocationError::PositionUnavailable);
        }

        let body: IpApiResponse = response.json().await.map_err(|e| {
            tracing::error!(error = %e, "Failed to deserialize IP geolocation response");
            GeolocationError::PositionUnavailable
        })?;

        let coords = Self::convert_response(body)?;

        tracing::info!(
            latitude = coords.latitude,
            longitude = coords.longitude,
            locator = "ip_api",
            "Position acquired"
        );

        Ok(coords)
    }

    fn name(&self) -> &'static str {
        "ip_api"
    }
}
