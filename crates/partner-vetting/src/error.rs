use crate::config::ConfigError;
use crate::telemetry::TelemetryError;
use crate::vetting::{IntakeRejection, RenderError};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use std::fmt;

#[derive(Debug)]
pub enum AppError {
    Config(ConfigError),
    Telemetry(TelemetryError),
    Io(std::io::Error),
    Server(axum::Error),
    Payload(serde_json::Error),
    Intake(IntakeRejection),
    Render(RenderError),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Config(err) => write!(f, "configuration error: {}", err),
            AppError::Telemetry(err) => write!(f, "telemetry error: {}", err),
            AppError::Io(err) => write!(f, "io error: {}", err),
            AppError::Server(err) => write!(f, "server error: {}", err),
            AppError::Payload(err) => write!(f, "invalid submission payload: {}", err),
            AppError::Intake(err) => write!(f, "{}", err),
            AppError::Render(err) => write!(f, "render error: {}", err),
        }
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AppError::Config(err) => Some(err),
            AppError::Telemetry(err) => Some(err),
            AppError::Io(err) => Some(err),
            AppError::Server(err) => Some(err),
            AppError::Payload(err) => Some(err),
            AppError::Intake(err) => Some(err),
            AppError::Render(err) => Some(err),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match self {
            AppError::Payload(_) | AppError::Intake(_) => StatusCode::BAD_REQUEST,
            AppError::Config(_)
            | AppError::Telemetry(_)
            | AppError::Io(_)
            | AppError::Server(_)
            | AppError::Render(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        let body = Json(json!({ "error": self.to_string() }));
        (status, body).into_response()
    }
}

impl From<ConfigError> for AppError {
    fn from(value: ConfigError) -> Self {
        Self::Config(value)
    }
}

impl From<TelemetryError> for AppError {
    fn from(value: TelemetryError) -> Self {
        Self::Telemetry(value)
    }
}

impl From<std::io::Error> for AppError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<axum::Error> for AppError {
    fn from(value: axum::Error) -> Self {
        Self::Server(value)
    }
}

impl From<serde_json::Error> for AppError {
    fn from(value: serde_json::Error) -> Self {
        Self::Payload(value)
    }
}

impl From<IntakeRejection> for AppError {
    fn from(value: IntakeRejection) -> Self {
        Self::Intake(value)
    }
}

impl From<RenderError> for AppError {
    fn from(value: RenderError) -> Self {
        Self::Render(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vetting::FieldError;

    #[test]
    fn intake_errors_map_to_bad_request() {
        let err = AppError::from(IntakeRejection {
            errors: vec![FieldError {
                field: "contact.email".to_string(),
                message: "is required".to_string(),
            }],
        });
        assert!(err.to_string().contains("contact.email: is required"));
        assert_eq!(err.into_response().status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn config_errors_map_to_internal_error() {
        let err = AppError::from(ConfigError::InvalidPort);
        assert_eq!(err.into_response().status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
