use thiserror::Error;

/// A required earlier selection is missing. The message is shown to the user as-is.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Please select a doctor first.")]
    DoctorNotSelected,
    #[error("Please select a room first.")]
    RoomNotSelected,
    #[error("Please select a date first.")]
    DateNotSelected,
    #[error("That time slot is not available.")]
    SlotUnavailable,
    #[error("Unknown doctor: {0}")]
    UnknownDoctor(String),
    #[error("Unknown room: {0}")]
    UnknownRoom(String),
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BookingError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error("a booking submission is already in progress")]
    SubmissionInFlight,
    #[error("network error: {0}")]
    Network(String),
    #[error("server responded with status {0}")]
    Server(u16),
    #[error("unexpected response body: {0}")]
    InvalidResponse(String),
    #[error("page element unavailable: {0}")]
    CollaboratorUnavailable(String),
}

impl From<reqwest::Error> for BookingError {
    fn from(e: reqwest::Error) -> Self {
        match e.status() {
            Some(status) => BookingError::Server(status.as_u16()),
            None if e.is_decode() => BookingError::InvalidResponse(e.to_string()),
            None => BookingError::Network(e.to_string()),
        }
    }
}
