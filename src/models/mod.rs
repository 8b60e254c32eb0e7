//! Domain and API models
//!
//! This module defines the document record, the metric taxonomy, and the
//! DTOs (Data Transfer Objects) used for serializing/deserializing HTTP
//! request and response bodies.

pub mod document;
pub mod metric;
pub mod requests;
pub mod responses;

// Re-export commonly used types
pub use document::Document;
pub use metric::{Metric, MetricResult};
pub use requests::{CharacterCountQuery, CreateTextRequest, LongestWordsQuery, UpdateTextRequest};
pub use responses::{
    AnalysisResponse, DeleteResponse, HealthResponse, StatsResponse, TextListResponse,
    TextResponse,
};
