//! textlab-api crate
//!
//! Web server exposing placeholder text analysis and service status as HTTP API.
//!
//! ## Endpoints
//! - `GET /` - Service Info
//! - `GET /health` - Health Check
//! - `POST /api/analyze` - Character/word counts with a placeholder sentiment label
//! - `GET /api/stats` - Service Statistics (not tracked yet, always zero)
//!
//! ## Usage Example
//! ```bash
//! curl -X POST 'http://127.0.0.1:8000/api/analyze?text=hello%20world'
//!
//! curl -X POST http://127.0.0.1:8000/api/analyze \
//!   -H "Content-Type: application/json" \
//!   -d '{"text": "hello world"}'
//! ```

pub mod api;
pub mod config;
pub mod errors;
pub mod models;
pub mod service;

pub use api::AppState;
pub use config::Config;
pub use errors::{ApiError, ApiErrorKind};
pub use models::{AnalyzeRequest, AnalyzeResponse, HealthResponse, RootResponse, StatsResponse};
pub use service::{AnalysisService, PlaceholderAnalysisService};
