use crate::{
    config::Config,
    error::AppError,
    pricing::{CalcItem, PriceCalculator},
};
use axum::{
    body::Bytes,
    extract::State,
    http::{header, HeaderMap},
    Json,
};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::sync::Arc;
use std::time::Instant;

/// Application state
///
/// Built once before the listener is bound and never mutated afterwards.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub calculator: PriceCalculator,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct CalcResponse {
    pub total: f64,
}

/// Handle POST /calc
/// Prices every item against the tier table and returns only the total
pub async fn handle_calc(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Json<CalcResponse>, AppError> {
    let start = Instant::now();

    if !is_json_content_type(&headers) {
        return Err(AppError::InvalidRequest(format!(
            "unsupported content type: {:?}",
            headers.get(header::CONTENT_TYPE)
        )));
    }

    let items = parse_calc_request(&body)?;

    let quote = state.calculator.quote(&items);

    if !quote.total.is_finite() {
        return Err(AppError::InvalidRequest(format!(
            "total is not representable: {}",
            quote.total
        )));
    }

    if quote.unpriced_items > 0 {
        tracing::debug!(
            unpriced_items = quote.unpriced_items,
            "Items matched no price tier and were priced at 0"
        );
    }

    tracing::info!(
        items = items.len(),
        unpriced_items = quote.unpriced_items,
        total = quote.total,
        duration_us = start.elapsed().as_micros() as u64,
        "Calculated total"
    );

    Ok(Json(CalcResponse { total: quote.total }))
}

/// Whether the request declares a JSON body (`application/json` or a
/// `+json` media type, parameters such as `charset` ignored)
pub fn is_json_content_type(headers: &HeaderMap) -> bool {
    let Some(content_type) = headers
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
    else {
        return false;
    };

    let mime = content_type
        .split(';')
        .next()
        .unwrap_or_default()
        .trim()
        .to_ascii_lowercase();

    mime == "application/json" || (mime.starts_with("application/") && mime.ends_with("+json"))
}

/// Validate the request body and extract the items.
///
/// The body must be a JSON object whose `items` field is an array, and every
/// item must carry a numeric `weight`. Anything else is an invalid request.
pub fn parse_calc_request(body: &[u8]) -> Result<Vec<CalcItem>, AppError> {
    let value: Value = serde_json::from_slice(body)?;

    let items = value
        .get("items")
        .and_then(Value::as_array)
        .ok_or_else(|| AppError::InvalidRequest("items must be an array".to_string()))?;

    items
        .iter()
        .enumerate()
        .map(|(idx, item)| {
            CalcItem::deserialize(item)
                .map_err(|e| AppError::InvalidRequest(format!("item {}: {}", idx, e)))
        })
        .collect()
}
