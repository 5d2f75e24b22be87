pub mod handlers;
pub mod server;
pub mod uploads;

use crate::utils::error::AppError;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

/// Fixed failure text returned to the client regardless of the concrete fault.
pub const UPLOAD_FAILED_MESSAGE: &str = "Failed to upload file";

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match &self {
            // Body-limit overruns must keep their 413; everything else the
            // client caused is a plain 400.
            AppError::MultipartError(e) => e.status(),
            AppError::ValidationError { .. } | AppError::InvalidConfigValueError { .. } => {
                StatusCode::BAD_REQUEST
            }
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        };

        tracing::error!(
            "❌ Request failed: {} (Category: {:?}, Severity: {:?})",
            self,
            self.category(),
            self.severity()
        );

        (status, UPLOAD_FAILED_MESSAGE).into_response()
    }
}
