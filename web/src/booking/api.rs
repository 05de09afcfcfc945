use reqwest::Client;
use shared_types::{BookingPayload, BookingReceipt};

use super::error::BookingError;

pub const BOOK_APPOINTMENT_PATH: &str = "/api/book-appointment/";
pub const CSRF_HEADER: &str = "X-CSRFToken";

/// Backend that accepts a finished booking.
#[allow(async_fn_in_trait)]
pub trait BookingApi {
    async fn submit(&self, payload: &BookingPayload) -> Result<BookingReceipt, BookingError>;
}

#[derive(Clone, Debug)]
pub struct HttpBookingApi {
    client: Client,
    url: String,
    csrf_token: String,
}

impl HttpBookingApi {
    pub fn new(origin: &str, csrf_token: String) -> Self {
        Self {
            client: Client::new(),
            url: format!("{}{}", origin.trim_end_matches('/'), BOOK_APPOINTMENT_PATH),
            csrf_token,
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

impl BookingApi for HttpBookingApi {
    async fn submit(&self, payload: &BookingPayload) -> Result<BookingReceipt, BookingError> {
        let response = self
            .client
            .post(&self.url)
            .header(CSRF_HEADER, &self.csrf_token)
            .json(payload)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(BookingError::Server(response.status().as_u16()));
        }

        let receipt: BookingReceipt = response.json().await?;
        Ok(receipt)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        http::{HeaderMap, StatusCode},
        routing::post,
        Router,
    };

    /// Serves `/api/book-appointment/` on a random local port. Requests without
    /// the CSRF header get a 403.
    async fn backend(status: StatusCode, body: &'static str) -> String {
        let app = Router::new().route(
            BOOK_APPOINTMENT_PATH,
            post(move |headers: HeaderMap| async move {
                if headers.get(CSRF_HEADER).is_none() {
                    return (StatusCode::FORBIDDEN, "");
                }
                (status, body)
            }),
        );
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });
        format!("http://{}", addr)
    }

    #[test]
    fn url_joins_origin_without_double_slash() {
        let api = HttpBookingApi::new("http://localhost:8000/", "token".to_string());
        assert_eq!(api.url(), "http://localhost:8000/api/book-appointment/");
    }

    #[tokio::test]
    async fn ok_response_is_decoded_into_a_receipt() {
        let origin = backend(StatusCode::OK, r#"{"status":"success","message":"Booked"}"#).await;
        let api = HttpBookingApi::new(&origin, "tok".to_string());

        let receipt = api.submit(&BookingPayload::default()).await.unwrap();
        assert_eq!(receipt.status.as_deref(), Some("success"));
        assert_eq!(receipt.message.as_deref(), Some("Booked"));
    }

    #[tokio::test]
    async fn non_ok_status_is_a_server_error() {
        let origin = backend(StatusCode::INTERNAL_SERVER_ERROR, "boom").await;
        let api = HttpBookingApi::new(&origin, "tok".to_string());

        let err = api.submit(&BookingPayload::default()).await.unwrap_err();
        assert_eq!(err, BookingError::Server(500));
    }

    #[tokio::test]
    async fn undecodable_ok_body_is_an_invalid_response() {
        let origin = backend(StatusCode::OK, "<html>not json</html>").await;
        let api = HttpBookingApi::new(&origin, "tok".to_string());

        let err = api.submit(&BookingPayload::default()).await.unwrap_err();
        assert!(matches!(err, BookingError::InvalidResponse(_)), "got {err:?}");
    }

    #[tokio::test]
    async fn unreachable_backend_is_a_network_error() {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);
        let api = HttpBookingApi::new(&format!("http://{}", addr), "tok".to_string());

        let err = api.submit(&BookingPayload::default()).await.unwrap_err();
        assert!(matches!(err, BookingError::Network(_)), "got {err:?}");
    }
}
