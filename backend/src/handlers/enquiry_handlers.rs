use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    Json,
};
use chrono::Local;
use tracing::{debug, error, info};

use crate::handlers::enquiry_dtos::{EnquiryErrorResponse, EnquiryRequest, EnquiryResponse};
use crate::models::enquiry_models::{TemplateParams, TIMESTAMP_FORMAT};
use crate::AppState;

pub async fn health_check() -> &'static str {
    "OK"
}

pub async fn submit_enquiry(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<EnquiryRequest>, JsonRejection>,
) -> Result<Json<EnquiryResponse>, (StatusCode, Json<EnquiryErrorResponse>)> {
    // Wrong JSON types get the same error shape as failed validation.
    let Json(request) = payload.map_err(|rejection| {
        info!("Rejected malformed enquiry body");
        debug!("Enquiry body rejection: {}", rejection.body_text());
        (
            StatusCode::BAD_REQUEST,
            Json(EnquiryErrorResponse {
                error: rejection.body_text(),
                field: None,
            }),
        )
    })?;

    let record = request.validate().map_err(|e| {
        info!("Rejected enquiry: bad {}", e.field());
        debug!("Enquiry validation failed: {}", e);
        (
            StatusCode::BAD_REQUEST,
            Json(EnquiryErrorResponse {
                error: e.to_string(),
                field: Some(e.field()),
            }),
        )
    })?;

    let timestamp = Local::now().format(TIMESTAMP_FORMAT).to_string();
    let params = TemplateParams::new(&record, &state.recipient, &timestamp);

    match state.mailer.send(params).await {
        Ok(()) => {
            info!("Enquiry delivered");
            Ok(Json(EnquiryResponse {
                message: "Enquiry sent".to_string(),
            }))
        }
        Err(e) => {
            error!("Failed to deliver enquiry: {}", e);
            sentry::capture_message(
                &format!("Enquiry delivery failed: {}", e),
                sentry::Level::Error,
            );
            Err((
                StatusCode::BAD_GATEWAY,
                Json(EnquiryErrorResponse {
                    error: "Email could not be sent".to_string(),
                    field: None,
                }),
            ))
        }
    }
}
