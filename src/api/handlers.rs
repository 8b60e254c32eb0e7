//! API Handlers
//!
//! HTTP request handlers for each text metrics endpoint. The caller's
//! identity is taken from the `x-user-id` header; requests without it
//! are rejected before any service call.

use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::{HeaderMap, StatusCode},
    Json,
};

use crate::cache::MemoryCache;
use crate::error::{Result, ServiceError};
use crate::models::{
    AnalysisResponse, CharacterCountQuery, CreateTextRequest, DeleteResponse, HealthResponse,
    LongestWordsQuery, Metric, StatsResponse, TextListResponse, TextResponse, UpdateTextRequest,
};
use crate::service::AnalysisService;
use crate::store::MemoryStore;

/// Application state shared across all handlers.
#[derive(Clone)]
pub struct AppState {
    /// The analysis service over the bundled backends
    pub service: Arc<AnalysisService<MemoryStore, MemoryCache>>,
    /// Cache handle for the stats endpoint
    pub cache: Arc<MemoryCache>,
}

impl AppState {
    /// Creates a new AppState over the given service and cache.
    pub fn new(
        service: Arc<AnalysisService<MemoryStore, MemoryCache>>,
        cache: Arc<MemoryCache>,
    ) -> Self {
        Self { service, cache }
    }
}

/// Extracts the caller identity from the `x-user-id` header.
fn owner_id(headers: &HeaderMap) -> Result<String> {
    headers
        .get("x-user-id")
        .and_then(|value| value.to_str().ok())
        .map(str::to_string)
        .filter(|id| !id.is_empty())
        .ok_or_else(|| ServiceError::InvalidRequest("Missing x-user-id header".to_string()))
}

/// Handler for POST /texts
pub async fn create_text_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(req): Json<CreateTextRequest>,
) -> Result<(StatusCode, Json<TextResponse>)> {
    let owner = owner_id(&headers)?;
    if let Some(error_msg) = req.validate() {
        return Err(ServiceError::InvalidRequest(error_msg));
    }

    let document = state.service.create_document(&req.content, &owner).await?;
    Ok((StatusCode::CREATED, Json(TextResponse::created(document))))
}

/// Handler for GET /texts
pub async fn list_texts_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Json<TextListResponse>> {
    let owner = owner_id(&headers)?;
    let documents = state.service.list_documents(&owner).await?;
    Ok(Json(TextListResponse::new(documents)))
}

/// Handler for GET /texts/:id/words
pub async fn word_count_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<String>,
) -> Result<Json<AnalysisResponse>> {
    let owner = owner_id(&headers)?;
    let result = state
        .service
        .get_metric(&id, &owner, Metric::WordCount)
        .await?;
    Ok(Json(AnalysisResponse::new(id, result)))
}

/// Handler for GET /texts/:id/characters
pub async fn character_count_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<String>,
    Query(query): Query<CharacterCountQuery>,
) -> Result<Json<AnalysisResponse>> {
    let owner = owner_id(&headers)?;
    let metric = Metric::CharacterCount {
        include_whitespace: query.include_whitespace,
    };
    let result = state.service.get_metric(&id, &owner, metric).await?;
    Ok(Json(AnalysisResponse::new(id, result)))
}

/// Handler for GET /texts/:id/sentences
pub async fn sentence_count_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<String>,
) -> Result<Json<AnalysisResponse>> {
    let owner = owner_id(&headers)?;
    let result = state
        .service
        .get_metric(&id, &owner, Metric::SentenceCount)
        .await?;
    Ok(Json(AnalysisResponse::new(id, result)))
}

/// Handler for GET /texts/:id/paragraphs
pub async fn paragraph_count_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<String>,
) -> Result<Json<AnalysisResponse>> {
    let owner = owner_id(&headers)?;
    let result = state
        .service
        .get_metric(&id, &owner, Metric::ParagraphCount)
        .await?;
    Ok(Json(AnalysisResponse::new(id, result)))
}

/// Handler for GET /texts/:id/longest
pub async fn longest_words_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<String>,
    Query(query): Query<LongestWordsQuery>,
) -> Result<Json<AnalysisResponse>> {
    let owner = owner_id(&headers)?;
    let metric = Metric::LongestWord {
        return_all: query.return_all,
    };
    let result = state.service.get_metric(&id, &owner, metric).await?;
    Ok(Json(AnalysisResponse::new(id, result)))
}

/// Handler for PUT /texts/:id
pub async fn update_text_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<String>,
    Json(req): Json<UpdateTextRequest>,
) -> Result<Json<TextResponse>> {
    let owner = owner_id(&headers)?;
    if let Some(error_msg) = req.validate() {
        return Err(ServiceError::InvalidRequest(error_msg));
    }

    let document = state
        .service
        .update_document(&id, &owner, &req.content)
        .await?;
    Ok(Json(TextResponse::updated(document)))
}

/// Handler for DELETE /texts/:id
pub async fn delete_text_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<String>,
) -> Result<Json<DeleteResponse>> {
    let owner = owner_id(&headers)?;
    state.service.delete_document(&id, &owner).await?;
    Ok(Json(DeleteResponse::new(id)))
}

/// Handler for GET /stats
pub async fn stats_handler(State(state): State<AppState>) -> Json<StatsResponse> {
    let stats = state.cache.stats().await;
    Json(StatsResponse::new(
        stats.hits,
        stats.misses,
        stats.evictions,
        stats.total_entries,
    ))
}

/// Handler for GET /health
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::healthy())
}
