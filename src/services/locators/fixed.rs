use crate::{
    error::GeolocationError,
    models::Coordinates,
    services::locators::Locator,
};

/// Locator backed by configured coordinates
///
/// With no coordinates configured the environment has no location capability,
/// reported as `UnsupportedEnvironment`.
#[derive(Debug, Clone)]
pub struct FixedLocator {
    coords: Option<Coordinates>,
}

impl FixedLocator {
    pub fn new(coords: Option<Coordinates>) -> Self {
        Self { coords }
    }

    /// Uses the pair only when both halves are present
    pub fn from_parts(latitude: Option<f64>, longitude: Option<f64>) -> Self {
        let coords = latitude
            .zip(longitude)
            .map(|(lat, lng)| Coordinates::new(lat, lng));
        Self { coords }
    }
}

#[async_trait::async_trait]
impl Locator for FixedLocator {
    async fn acquire(&self) -> Result<Coordinates, GeolocationError> {
        self.coords.ok_or(GeolocationError::UnsupportedEnvironment)
    }

    fn name(&self) -> &'static str {
        "fixed"
    }
}
