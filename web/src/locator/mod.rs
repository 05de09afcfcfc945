pub mod api;
pub mod error;
pub mod geolocation;
pub mod places;

pub use api::{fetch_nearby_hospitals, NO_HOSPITALS_FOUND};
pub use error::LocatorError;
pub use places::HospitalPlace;
