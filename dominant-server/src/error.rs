use axum::{
    http::{header, StatusCode},
    response::{IntoResponse, Response},
};
use dominant::{ColorError, ErrorKind};

#[derive(Debug)]
pub struct ApiError {
    pub message: String,
    pub http_status_code: StatusCode,
}

impl ApiError {
    pub fn internal(message: impl Into<String>) -> Self {
        ApiError {
            message: message.into(),
            http_status_code: StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<ColorError> for ApiError {
    fn from(err: ColorError) -> Self {
        ApiError {
            message: err.to_string(),
            http_status_code: match err.kind() {
                ErrorKind::UserError => StatusCode::BAD_REQUEST,
                ErrorKind::ServerError => StatusCode::INTERNAL_SERVER_ERROR,
            },
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (
            self.http_status_code,
            [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
            self.message,
        )
            .into_response()
    }
}
