use reqwest::Client;
use shared_types::LatLong;

use super::error::LocatorError;
use super::places::{parse_places, places_url, HospitalPlace};
use crate::config::ClientConfig;

pub const NO_HOSPITALS_FOUND: &str = "No hospitals found within 5km.";

/// Hospitals around `center`, nearest first as ranked by the places service.
pub async fn fetch_nearby_hospitals(
    config: &ClientConfig,
    center: LatLong,
) -> Result<Vec<HospitalPlace>, LocatorError> {
    let api_key = config
        .geoapify_api_key
        .as_deref()
        .ok_or(LocatorError::MissingApiKey)?;
    let url = places_url(center, config.search_radius_m, config.result_limit, api_key);

    let response = Client::new().get(&url).send().await?;
    let body = response.text().await?;
    let places = parse_places(&body)?;
    Ok(places)
}
