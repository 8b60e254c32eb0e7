//! API Module
//!
//! HTTP handlers and routing for the text metrics REST API.
//!
//! # Endpoints
//! - `POST /texts` - Create a text document
//! - `GET /texts` - List the caller's documents
//! - `GET /texts/:id/words` - Word count
//! - `GET /texts/:id/characters` - Character count (`?includeWhitespace=`)
//! - `GET /texts/:id/sentences` - Sentence count
//! - `GET /texts/:id/paragraphs` - Paragraph count
//! - `GET /texts/:id/longest` - Longest word(s) (`?returnAll=`)
//! - `PUT /texts/:id` - Update document content
//! - `DELETE /texts/:id` - Delete a document
//! - `GET /stats` - Cache statistics
//! - `GET /health` - Health check endpoint

pub mod handlers;
pub mod routes;

pub use handlers::*;
pub use routes::create_router;
