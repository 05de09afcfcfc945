use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LocatorError {
    #[error("Geolocation is not supported by your browser.")]
    GeolocationUnsupported,
    #[error("Could not determine your location: {0}")]
    PositionUnavailable(String),
    #[error("Map service is not configured.")]
    MissingApiKey,
    #[error("Could not fetch nearby hospitals.")]
    Fetch(String),
}

impl From<reqwest::Error> for LocatorError {
    fn from(e: reqwest::Error) -> Self {
        LocatorError::Fetch(e.to_string())
    }
}

impl From<serde_json::Error> for LocatorError {
    fn from(e: serde_json::Error) -> Self {
        LocatorError::Fetch(e.to_string())
    }
}
