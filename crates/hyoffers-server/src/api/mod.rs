mod offers;
mod openapi;

use std::sync::Arc;

use axum::{
    http::{header, HeaderName, Method, StatusCode},
    response::IntoResponse,
    routing::get,
    Extension, Json, Router,
};
use chrono::{DateTime, Utc};
use hyoffers_core::{AppConfig, CoercionPolicy};
use hyoffers_scraper::{IncentiveClient, ScraperError, ZipOffers};
use serde::Serialize;
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::middleware::{request_id, RequestId, REQUEST_ID_HEADER};

#[derive(Clone)]
pub struct AppState {
    pub client: Arc<IncentiveClient>,
    pub coercion_policy: CoercionPolicy,
    pub public_base_url: Option<String>,
}

impl AppState {
    /// Builds the shared state from configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ScraperError`] if the upstream client cannot be constructed.
    pub fn from_config(config: &AppConfig) -> Result<Self, ScraperError> {
        Ok(Self {
            client: Arc::new(IncentiveClient::from_config(config)?),
            coercion_policy: config.coercion_policy,
            public_base_url: config.public_base_url.clone(),
        })
    }

    pub(super) fn offers_for(&self, zip: &str) -> ZipOffers<'_> {
        ZipOffers::new(&self.client, zip, self.coercion_policy)
    }
}

#[derive(Debug, Serialize)]
pub struct ApiResponse<T: Serialize> {
    pub data: T,
    pub meta: ResponseMeta,
}

#[derive(Debug, Serialize)]
pub struct ResponseMeta {
    pub request_id: String,
    pub timestamp: DateTime<Utc>,
}

#[derive(Debug, Serialize)]
pub struct ApiError {
    pub error: ErrorBody,
    pub meta: ResponseMeta,
}

#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub code: String,
    pub message: String,
}

#[derive(Debug, Serialize, PartialEq, Eq)]
struct HealthData {
    status: &'static str,
}

impl ResponseMeta {
    pub(super) fn new(request_id: String) -> Self {
        Self {
            request_id,
            timestamp: Utc::now(),
        }
    }
}

impl ApiError {
    pub fn new(
        request_id: impl Into<String>,
        code: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            error: ErrorBody {
                code: code.into(),
                message: message.into(),
            },
            meta: ResponseMeta::new(request_id.into()),
        }
    }

    fn status(&self) -> StatusCode {
        match self.error.code.as_str() {
            "validation_error" => StatusCode::UNPROCESSABLE_ENTITY,
            "upstream_error" | "upstream_data_error" => StatusCode::BAD_GATEWAY,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        (self.status(), Json(self)).into_response()
    }
}

pub(super) fn map_scraper_error(request_id: String, error: &ScraperError) -> ApiError {
    tracing::error!(error = %error, request_id = %request_id, "offer lookup failed");
    match error {
        ScraperError::DataFormat { .. } => ApiError::new(
            request_id,
            "upstream_data_error",
            format!("incentive service returned malformed offer data: {error}"),
        ),
        e if e.is_upstream() => ApiError::new(
            request_id,
            "upstream_error",
            "incentive service request failed",
        ),
        _ => ApiError::new(request_id, "internal_error", "offer lookup failed"),
    }
}

fn build_cors() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(tower_http::cors::Any)
        .allow_methods([Method::GET])
        .allow_headers([header::CONTENT_TYPE, HeaderName::from_static(REQUEST_ID_HEADER)])
        .expose_headers([HeaderName::from_static(REQUEST_ID_HEADER)])
}

pub fn build_app(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/openapi.json", get(openapi::openapi_document))
        .route("/offers", get(offers::list_offers))
        .route("/offers/with-payment", get(offers::list_payment_offers))
        .route("/offers/{offer_type}", get(offers::list_offers_by_type))
        .route("/models", get(offers::list_models))
        .layer(
            ServiceBuilder::new()
                .layer(axum::middleware::from_fn(request_id))
                .layer(TraceLayer::new_for_http())
                .layer(build_cors()),
        )
        .with_state(state)
}

async fn health(Extension(req_id): Extension<RequestId>) -> impl IntoResponse {
    Json(ApiResponse {
        data: HealthData { status: "ok" },
        meta: ResponseMeta::new(req_id.0),
    })
}

#[cfg(test)]
#[path = "api_test.rs"]
mod tests;
