//! Body extractor accepting either JSON or form encoding.

use axum::extract::{Form, FromRequest, Json, Request};
use axum::http::header::CONTENT_TYPE;
use serde::de::DeserializeOwned;

use crate::error::AppError;

/// Extracts `T` from the request body, decoded exactly once.
///
/// A `Content-Type` of `application/json` selects JSON decoding; anything
/// else falls back to `application/x-www-form-urlencoded`. Bind failures
/// are answered with 404 and a message describing the failure, matching
/// the service's error contract for malformed payloads.
pub struct JsonOrForm<T>(pub T);

impl<S, T> FromRequest<S> for JsonOrForm<T>
where
    S: Send + Sync,
    T: DeserializeOwned,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let content_type = req
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .unwrap_or_default();

        if content_type.starts_with("application/json") {
            let Json(value) = Json::<T>::from_request(req, state)
                .await
                .map_err(|e| AppError::not_found(format!("failed to bind request body: {e}")))?;
            return Ok(Self(value));
        }

        let Form(value) = Form::<T>::from_request(req, state)
            .await
            .map_err(|e| AppError::not_found(format!("failed to bind request body: {e}")))?;
        Ok(Self(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{Router, routing::post};
    use axum_test::TestServer;
    use serde::{Deserialize, Serialize};

    #[derive(Debug, Serialize, Deserialize)]
    struct Payload {
        name: String,
        count: i64,
    }

    async fn echo_handler(JsonOrForm(payload): JsonOrForm<Payload>) -> Json<Payload> {
        Json(payload)
    }

    fn make_server() -> TestServer {
        let app = Router::new().route("/echo", post(echo_handler));
        TestServer::new(app).unwrap()
    }

    #[tokio::test]
    async fn test_binds_json_body() {
        let server = make_server();
        let response = server
            .post("/echo")
            .json(&serde_json::json!({ "name": "Dune", "count": 412 }))
            .await;

        response.assert_status_ok();
        let body = response.json::<Payload>();
        assert_eq!(body.name, "Dune");
        assert_eq!(body.count, 412);
    }

    #[tokio::test]
    async fn test_binds_form_body() {
        let server = make_server();
        let response = server
            .post("/echo")
            .form(&[("name", "Dune"), ("count", "412")])
            .await;

        response.assert_status_ok();
        let body = response.json::<Payload>();
        assert_eq!(body.name, "Dune");
        assert_eq!(body.count, 412);
    }

    #[tokio::test]
    async fn test_malformed_json_is_rejected() {
        let server = make_server();
        let response = server
            .post("/echo")
            .bytes("{not json".into())
            .content_type("application/json")
            .await;

        response.assert_status_not_found();
    }
}
