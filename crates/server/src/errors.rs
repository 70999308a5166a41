use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use models::errors::ModelError;
use service::errors::ServiceError;
use tracing::error;

/// Error body shared by all endpoints: `{"error": <title>, "message": <detail>}`.
#[derive(Debug)]
pub struct JsonApiError {
    pub status: StatusCode,
    pub error: &'static str,
    pub message: Option<String>,
}

impl JsonApiError {
    pub fn new(status: StatusCode, error: &'static str, message: Option<String>) -> Self {
        Self { status, error, message }
    }

    pub fn validation(message: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, "Validation Error", Some(message.into()))
    }
}

impl IntoResponse for JsonApiError {
    fn into_response(self) -> Response {
        if self.status.is_server_error() {
            error!(status = %self.status, error = self.error, message = ?self.message, "request failed");
        }
        (self.status, Json(serde_json::json!({"error": self.error, "message": self.message}))).into_response()
    }
}

impl From<JsonRejection> for JsonApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self::validation(rejection.body_text())
    }
}

impl From<ServiceError> for JsonApiError {
    fn from(e: ServiceError) -> Self {
        match e {
            ServiceError::Model(ModelError::Validation(m)) => Self::validation(m),
            other => Self::new(StatusCode::INTERNAL_SERVER_ERROR, "Storage Error", Some(other.to_string())),
        }
    }
}

impl From<ModelError> for JsonApiError {
    fn from(e: ModelError) -> Self { ServiceError::from(e).into() }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn model_validation_maps_to_400_with_bare_message() {
        let e: JsonApiError = ServiceError::from(ModelError::Validation("status is required".into())).into();
        assert_eq!(e.status, StatusCode::BAD_REQUEST);
        assert_eq!(e.error, "Validation Error");
        assert_eq!(e.message.as_deref(), Some("status is required"));
    }

    #[test]
    fn storage_faults_map_to_500() {
        let e: JsonApiError = ServiceError::Db("disk I/O error".into()).into();
        assert_eq!(e.status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(e.error, "Storage Error");

        let e: JsonApiError = ModelError::Db("locked".into()).into();
        assert_eq!(e.status, StatusCode::INTERNAL_SERVER_ERROR);
    }
}
