pub mod api;
pub mod catalog;
pub mod directory;
pub mod error;
pub mod state;
pub mod wizard;

pub use api::{BookingApi, HttpBookingApi};
pub use catalog::BookingCatalog;
pub use error::{BookingError, ValidationError};
pub use state::{BookingState, Step};
pub use wizard::{BookingWizard, SubmissionOutcome};
