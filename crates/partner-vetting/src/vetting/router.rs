use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use serde_json::json;

use super::domain::{ApplicationId, PartnershipSubmission};
use super::repository::{ApplicationRepository, NotificationPublisher, RepositoryError};
use super::service::{ApplicationServiceError, PartnerVettingService};

/// Router builder exposing the intake, preview, and lookup endpoints.
pub fn application_router<R, N>(service: Arc<PartnerVettingService<R, N>>) -> Router
where
    R: ApplicationRepository + 'static,
    N: NotificationPublisher + 'static,
{
    Router::new()
        .route(
            "/api/v1/partnerships/applications",
            post(submit_handler::<R, N>),
        )
        .route(
            "/api/v1/partnerships/applications/:application_id",
            get(status_handler::<R, N>),
        )
        .route(
            "/api/v1/partnerships/evaluate",
            post(preview_handler::<R, N>),
        )
        .with_state(service)
}

pub(crate) async fn submit_handler<R, N>(
    State(service): State<Arc<PartnerVettingService<R, N>>>,
    axum::Json(submission): axum::Json<PartnershipSubmission>,
) -> Response
where
    R: ApplicationRepository + 'static,
    N: NotificationPublisher + 'static,
{
    match service.submit(submission) {
        Ok(record) => (StatusCode::ACCEPTED, axum::Json(record.status_view())).into_response(),
        Err(err) => error_response(err),
    }
}

pub(crate) async fn preview_handler<R, N>(
    State(service): State<Arc<PartnerVettingService<R, N>>>,
    axum::Json(submission): axum::Json<PartnershipSubmission>,
) -> Response
where
    R: ApplicationRepository + 'static,
    N: NotificationPublisher + 'static,
{
    match service.preview(submission) {
        Ok(preview) => (StatusCode::OK, axum::Json(preview)).into_response(),
        Err(err) => error_response(err),
    }
}

pub(crate) async fn status_handler<R, N>(
    State(service): State<Arc<PartnerVettingService<R, N>>>,
    Path(application_id): Path<String>,
) -> Response
where
    R: ApplicationRepository + 'static,
    N: NotificationPublisher + 'static,
{
    let id = ApplicationId(application_id);
    match service.get(&id) {
        Ok(record) => (StatusCode::OK, axum::Json(record.status_view())).into_response(),
        Err(ApplicationServiceError::Repository(RepositoryError::NotFound)) => {
            let payload = json!({
                "application_id": id.0,
                "error": "application not found",
            });
            (StatusCode::NOT_FOUND, axum::Json(payload)).into_response()
        }
        Err(other) => error_response(other),
    }
}

fn error_response(err: ApplicationServiceError) -> Response {
    match err {
        ApplicationServiceError::Intake(rejection) => {
            let payload = json!({
                "error": "submission rejected",
                "fields": rejection.errors,
            });
            (StatusCode::UNPROCESSABLE_ENTITY, axum::Json(payload)).into_response()
        }
        ApplicationServiceError::Repository(RepositoryError::Conflict) => {
            let payload = json!({
                "error": "application already exists",
            });
            (StatusCode::CONFLICT, axum::Json(payload)).into_response()
        }
        other => {
            let payload = json!({
                "error": other.to_string(),
            });
            (StatusCode::INTERNAL_SERVER_ERROR, axum::Json(payload)).into_response()
        }
    }
}
