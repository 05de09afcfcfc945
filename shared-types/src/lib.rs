use serde::{Deserialize, Serialize};

/// Body of `POST /api/book-appointment/`.
///
/// Every field is sent even when unset, so the backend sees explicit `null`s.
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct BookingPayload {
    pub hospital_name: Option<String>,
    pub doctor_id: Option<String>,
    pub doctor_name: Option<String>,
    pub room_number: Option<String>,
    pub date: Option<String>,
    pub time: Option<String>,
}

/// What the booking endpoint answers with. Only its presence matters to the page.
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq, Eq)]
pub struct BookingReceipt {
    pub status: Option<String>,
    pub message: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct ChatRequest {
    pub message: String,
}

#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq, Eq)]
pub struct ChatReply {
    pub reply: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, Default, PartialEq)]
pub struct LatLong {
    pub lat: f64,
    pub long: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unset_booking_fields_serialize_as_null() {
        let payload = BookingPayload {
            doctor_id: Some("7".to_string()),
            ..Default::default()
        };

        let json = serde_json::to_value(&payload).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "hospitalName": null,
                "doctorId": "7",
                "doctorName": null,
                "roomNumber": null,
                "date": null,
                "time": null,
            })
        );
    }

    #[test]
    fn receipt_tolerates_missing_fields() {
        let receipt: BookingReceipt = serde_json::from_str("{}").unwrap();
        assert_eq!(receipt, BookingReceipt::default());
    }

    #[test]
    fn chat_reply_without_reply_field_parses() {
        let reply: ChatReply = serde_json::from_str(r#"{"error":"quota"}"#).unwrap();
        assert!(reply.reply.is_none());
    }
}
