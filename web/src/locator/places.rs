use serde::{Deserialize, Serialize};
use shared_types::LatLong;

pub const UNNAMED_HOSPITAL: &str = "Unnamed Hospital";

pub const SERVICES: [&str; 7] = [
    "Emergency Care",
    "Cardiology",
    "X-Ray",
    "Pediatrics",
    "Neurology",
    "Oncology",
    "Orthopedics",
];

#[derive(Deserialize, Debug)]
struct PlacesResponse {
    #[serde(default)]
    features: Vec<PlaceFeature>,
}

#[derive(Deserialize, Debug)]
struct PlaceFeature {
    properties: PlaceProperties,
}

#[derive(Deserialize, Debug)]
struct PlaceProperties {
    name: Option<String>,
    address_line2: Option<String>,
    lat: f64,
    lon: f64,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct HospitalPlace {
    pub name: Option<String>,
    pub address: Option<String>,
    pub position: LatLong,
}

impl HospitalPlace {
    pub fn display_name(&self) -> String {
        self.name
            .clone()
            .filter(|n| !n.trim().is_empty())
            .unwrap_or_else(|| UNNAMED_HOSPITAL.to_string())
    }
}

pub fn parse_places(body: &str) -> Result<Vec<HospitalPlace>, serde_json::Error> {
    let response: PlacesResponse = serde_json::from_str(body)?;
    Ok(response
        .features
        .into_iter()
        .map(|feature| HospitalPlace {
            name: feature.properties.name,
            address: feature.properties.address_line2,
            position: LatLong {
                lat: feature.properties.lat,
                long: feature.properties.lon,
            },
        })
        .collect())
}

/// Names handed to the doctor directory, in result order.
pub fn hospital_names(places: &[HospitalPlace]) -> Vec<String> {
    places.iter().map(HospitalPlace::display_name).collect()
}

/// Two or three service tags for the result at `index`, rotating through [`SERVICES`].
pub fn services_for(index: usize) -> Vec<&'static str> {
    let count = 2 + index % 2;
    let start = (index * 3) % SERVICES.len();
    (0..count)
        .map(|offset| SERVICES[(start + offset) % SERVICES.len()])
        .collect()
}

pub fn places_url(center: LatLong, radius_m: u32, limit: u32, api_key: &str) -> String {
    format!(
        "https://api.geoapify.com/v2/places?categories=healthcare.hospital&filter=circle:{lon},{lat},{radius}&bias=proximity:{lon},{lat}&limit={limit}&apiKey={key}",
        lon = center.long,
        lat = center.lat,
        radius = radius_m,
        limit = limit,
        key = urlencoding::encode(api_key),
    )
}

pub fn tile_url(api_key: &str) -> String {
    format!(
        "https://maps.geoapify.com/v1/tile/osm-bright/{{z}}/{{x}}/{{y}}.png?apiKey={}",
        urlencoding::encode(api_key)
    )
}

pub const TILE_ATTRIBUTION: &str = "Powered by <a href=\"https://www.geoapify.com/\" target=\"_blank\">Geoapify</a> | © <a href=\"https://www.openstreetmap.org/copyright\" target=\"_blank\">OpenStreetMap</a>";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MarkerKind {
    User,
    Hospital,
    HospitalHighlight,
}

pub const HIGHLIGHT_Z_OFFSET: f64 = 1000.0;

impl MarkerKind {
    /// Lifts the highlighted hospital above overlapping neighbours.
    pub fn z_index_offset(self) -> f64 {
        match self {
            MarkerKind::HospitalHighlight => HIGHLIGHT_Z_OFFSET,
            MarkerKind::User | MarkerKind::Hospital => 0.0,
        }
    }
}

/// Icon url, size and anchor for a map marker.
pub fn marker_icon(kind: MarkerKind, api_key: &str) -> (String, (f64, f64), (f64, f64)) {
    let (color, icon, size, dims, anchor) = match kind {
        MarkerKind::User => ("%231e90ff", "person", "large", (38.0, 55.0), (19.0, 53.0)),
        MarkerKind::Hospital => ("%23ff3333", "local_hospital", "large", (38.0, 55.0), (19.0, 53.0)),
        MarkerKind::HospitalHighlight => {
            ("%23b60000", "local_hospital", "xlarge", (46.0, 66.0), (23.0, 64.0))
        }
    };
    let url = format!(
        "https://api.geoapify.com/v1/icon/?type=material&color={}&icon={}&iconSize={}&apiKey={}",
        color,
        icon,
        size,
        urlencoding::encode(api_key)
    );
    (url, dims, anchor)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"{
        "type": "FeatureCollection",
        "features": [
            {"type": "Feature", "properties": {"name": "General Hospital", "address_line2": "12 Main St", "lat": 14.6, "lon": 121.0}},
            {"type": "Feature", "properties": {"lat": 14.7, "lon": 121.1}}
        ]
    }"#;

    #[test]
    fn parses_geoapify_features() {
        let places = parse_places(SAMPLE).unwrap();

        assert_eq!(places.len(), 2);
        assert_eq!(places[0].name.as_deref(), Some("General Hospital"));
        assert_eq!(places[0].address.as_deref(), Some("12 Main St"));
        assert_eq!(places[1].position, LatLong { lat: 14.7, long: 121.1 });
    }

    #[test]
    fn nameless_places_get_a_placeholder() {
        let places = parse_places(SAMPLE).unwrap();
        assert_eq!(hospital_names(&places), vec!["General Hospital", UNNAMED_HOSPITAL]);
    }

    #[test]
    fn missing_features_is_an_empty_result() {
        assert!(parse_places("{}").unwrap().is_empty());
        assert!(parse_places("not json").is_err());
    }

    #[test]
    fn services_are_two_or_three_distinct_tags() {
        for index in 0..10 {
            let services = services_for(index);
            assert!((2..=3).contains(&services.len()));
            let mut deduped = services.clone();
            deduped.dedup();
            assert_eq!(deduped.len(), services.len());
        }
    }

    #[test]
    fn places_url_puts_longitude_first() {
        let url = places_url(LatLong { lat: 14.5, long: 121.25 }, 5000, 20, "abc");
        assert!(url.contains("filter=circle:121.25,14.5,5000"));
        assert!(url.contains("bias=proximity:121.25,14.5"));
        assert!(url.ends_with("&limit=20&apiKey=abc"));
    }

    #[test]
    fn highlight_icon_is_larger() {
        let (_, normal, _) = marker_icon(MarkerKind::Hospital, "k");
        let (url, big, anchor) = marker_icon(MarkerKind::HospitalHighlight, "k");
        assert!(big.0 > normal.0 && big.1 > normal.1);
        assert_eq!(anchor, (23.0, 64.0));
        assert!(url.contains("iconSize=xlarge"));
    }

    #[test]
    fn highlighted_marker_sits_above_the_rest() {
        assert_eq!(MarkerKind::HospitalHighlight.z_index_offset(), HIGHLIGHT_Z_OFFSET);
        assert_eq!(MarkerKind::Hospital.z_index_offset(), 0.0);
        assert_eq!(MarkerKind::User.z_index_offset(), 0.0);
    }
}
