use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use ferrous_dig_domain::DomainError;
use tracing::error;

pub struct ApiError(pub DomainError);

impl ApiError {
    pub fn status(&self) -> StatusCode {
        if self.0.is_request_error() {
            StatusCode::BAD_REQUEST
        } else {
            StatusCode::INTERNAL_SERVER_ERROR
        }
    }
}

impl From<DomainError> for ApiError {
    fn from(err: DomainError) -> Self {
        Self(err)
    }
}

/// Request errors go back verbatim as plain text; anything else is logged and hidden.
impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = if status == StatusCode::BAD_REQUEST {
            self.0.to_string()
        } else {
            error!(error = %self.0, "Lookup failed");
            "internal error".to_string()
        };

        (status, message).into_response()
    }
}
