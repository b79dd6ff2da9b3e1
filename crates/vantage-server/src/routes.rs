use std::sync::Arc;

use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;

use vantage_core::entities::EnrichmentRecord;
use vantage_enrich::{ContentGenerator, EnrichRequest, Enricher};

use crate::error::ApiError;

pub async fn healthz() -> StatusCode {
    StatusCode::OK
}

/// `POST /api/enrich`
pub async fn enrich<G>(
    State(enricher): State<Arc<Enricher<G>>>,
    payload: Result<Json<EnrichRequest>, JsonRejection>,
) -> Result<Json<EnrichmentRecord>, ApiError>
where
    G: ContentGenerator + 'static,
{
    let Json(request) = payload.map_err(|rejection| ApiError::BadRequest(rejection.body_text()))?;
    let record = enricher.enrich_request(&request).await?;
    Ok(Json(record))
}
