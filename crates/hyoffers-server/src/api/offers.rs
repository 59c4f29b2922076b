use axum::{
    extract::{rejection::QueryRejection, Path, Query, State},
    Extension, Json,
};
use hyoffers_core::OfferRecord;
use serde::Deserialize;

use crate::middleware::RequestId;

use super::{map_scraper_error, ApiError, AppState};

#[derive(Debug, Deserialize)]
pub(super) struct ZipQuery {
    pub zip: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(super) struct PaymentQuery {
    pub zip: Option<String>,
    pub model: Option<String>,
    /// Kept as text so a malformed value is reported as a validation error.
    pub max_price: Option<String>,
}

/// Maps a malformed query string (e.g. a repeated `zip`) to `validation_error`.
fn parse_query<T>(
    req_id: &RequestId,
    query: Result<Query<T>, QueryRejection>,
) -> Result<T, ApiError> {
    query.map(|Query(q)| q).map_err(|rejection| {
        ApiError::new(
            req_id.0.clone(),
            "validation_error",
            format!("invalid query string: {}", rejection.body_text()),
        )
    })
}

fn require_zip(req_id: &RequestId, zip: Option<String>) -> Result<String, ApiError> {
    zip.map(|z| z.trim().to_owned())
        .filter(|z| !z.is_empty())
        .ok_or_else(|| {
            ApiError::new(
                req_id.0.clone(),
                "validation_error",
                "query parameter 'zip' is required",
            )
        })
}

fn parse_max_price(req_id: &RequestId, raw: Option<&str>) -> Result<Option<f64>, ApiError> {
    let Some(raw) = raw.map(str::trim).filter(|s| !s.is_empty()) else {
        return Ok(None);
    };
    raw.parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .map(Some)
        .ok_or_else(|| {
            ApiError::new(
                req_id.0.clone(),
                "validation_error",
                format!("query parameter 'maxPrice' must be a number, got '{raw}'"),
            )
        })
}

pub(super) async fn list_offers(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    query: Result<Query<ZipQuery>, QueryRejection>,
) -> Result<Json<Vec<OfferRecord>>, ApiError> {
    let query = parse_query(&req_id, query)?;
    let zip = require_zip(&req_id, query.zip)?;
    let offers = state
        .offers_for(&zip)
        .extract_offers()
        .await
        .map_err(|e| map_scraper_error(req_id.0.clone(), &e))?;
    Ok(Json(offers))
}

pub(super) async fn list_payment_offers(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    query: Result<Query<PaymentQuery>, QueryRejection>,
) -> Result<Json<Vec<OfferRecord>>, ApiError> {
    let query = parse_query(&req_id, query)?;
    let zip = require_zip(&req_id, query.zip)?;
    let max_price = parse_max_price(&req_id, query.max_price.as_deref())?;
    let offers = state
        .offers_for(&zip)
        .get_available_payment_offers(query.model.as_deref(), max_price)
        .await
        .map_err(|e| map_scraper_error(req_id.0.clone(), &e))?;
    Ok(Json(offers))
}

pub(super) async fn list_offers_by_type(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    Path(offer_type): Path<String>,
    query: Result<Query<ZipQuery>, QueryRejection>,
) -> Result<Json<Vec<OfferRecord>>, ApiError> {
    let query = parse_query(&req_id, query)?;
    let zip = require_zip(&req_id, query.zip)?;
    let offers = state
        .offers_for(&zip)
        .get_offers_by_type(&offer_type)
        .await
        .map_err(|e| map_scraper_error(req_id.0.clone(), &e))?;
    Ok(Json(offers))
}

pub(super) async fn list_models(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    query: Result<Query<ZipQuery>, QueryRejection>,
) -> Result<Json<Vec<String>>, ApiError> {
    let query = parse_query(&req_id, query)?;
    let zip = require_zip(&req_id, query.zip)?;
    let models = state
        .offers_for(&zip)
        .get_all_model_names()
        .await
        .map_err(|e| map_scraper_error(req_id.0.clone(), &e))?;
    Ok(Json(models))
}
