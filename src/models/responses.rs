//! Response DTOs for the text metrics API
//!
//! Defines the structure of outgoing HTTP response bodies.

use serde::Serialize;

use super::{Document, MetricResult};

/// Response body carrying a single document (create/update)
#[derive(Debug, Clone, Serialize)]
pub struct TextResponse {
    /// Success message
    pub message: String,
    /// The stored document
    pub document: Document,
}

impl TextResponse {
    /// Creates a response for a newly created document
    pub fn created(document: Document) -> Self {
        Self {
            message: "Text created successfully".to_string(),
            document,
        }
    }

    /// Creates a response for an updated document
    pub fn updated(document: Document) -> Self {
        Self {
            message: "Text updated successfully".to_string(),
            document,
        }
    }
}

/// Response body for the list endpoint (GET /texts)
#[derive(Debug, Clone, Serialize)]
pub struct TextListResponse {
    /// The caller's documents
    pub documents: Vec<Document>,
    /// Number of documents returned
    pub count: usize,
}

impl TextListResponse {
    /// Creates a new TextListResponse
    pub fn new(documents: Vec<Document>) -> Self {
        let count = documents.len();
        Self { documents, count }
    }
}

/// Response body for metric endpoints (GET /texts/:id/<metric>)
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResponse {
    /// The analyzed document
    pub document_id: String,
    /// The computed metric value
    pub result: MetricResult,
}

impl AnalysisResponse {
    /// Creates a new AnalysisResponse
    pub fn new(document_id: impl Into<String>, result: MetricResult) -> Self {
        Self {
            document_id: document_id.into(),
            result,
        }
    }
}

/// Response body for the delete endpoint (DELETE /texts/:id)
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteResponse {
    /// Success message
    pub message: String,
    /// The deleted document id
    pub document_id: String,
}

impl DeleteResponse {
    /// Creates a new DeleteResponse
    pub fn new(document_id: impl Into<String>) -> Self {
        let document_id = document_id.into();
        Self {
            message: format!("Text '{}' deleted successfully", document_id),
            document_id,
        }
    }
}

/// Response body for the stats endpoint (GET /stats)
#[derive(Debug, Clone, Serialize)]
pub struct StatsResponse {
    /// Number of cache hits
    pub hits: u64,
    /// Number of cache misses
    pub misses: u64,
    /// Number of entries evicted at capacity
    pub evictions: u64,
    /// Current number of entries in cache
    pub total_entries: usize,
    /// Hit rate (hits / (hits + misses))
    pub hit_rate: f64,
}

impl StatsResponse {
    /// Creates a new StatsResponse from cache statistics
    pub fn new(hits: u64, misses: u64, evictions: u64, total_entries: usize) -> Self {
        let total_requests = hits + misses;
        let hit_rate = if total_requests > 0 {
            hits as f64 / total_requests as f64
        } else {
            0.0
        };
        Self {
            hits,
            misses,
            evictions,
            total_entries,
            hit_rate,
        }
    }
}

/// Response body for the health endpoint (GET /health)
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    /// Health status (e.g., "healthy")
    pub status: String,
    /// Current timestamp in ISO 8601 format
    pub timestamp: String,
}

impl HealthResponse {
    /// Creates a new HealthResponse with current timestamp
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }
}
