//! Response Model Definition

use serde::Serialize;

use crate::config::{SERVICE_NAME, SERVICE_VERSION};

/// Sentiment label stamped on every analysis; no model is consulted
pub const PLACEHOLDER_SENTIMENT: &str = "positive";

/// Advisory returned with every analysis
pub const PLACEHOLDER_MESSAGE: &str = "This is a placeholder. Add your ML model here!";

/// `GET /` response
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RootResponse {
  /// Service name
  pub message: &'static str,
  /// Always "running"
  pub status: &'static str,
  /// Service version
  pub version: &'static str,
}

impl Default for RootResponse {
  fn default() -> Self {
    Self {
      message: SERVICE_NAME,
      status: "running",
      version: SERVICE_VERSION,
    }
  }
}

/// `GET /health` response
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HealthResponse {
  /// Always "healthy"
  pub status: &'static str,
}

impl Default for HealthResponse {
  fn default() -> Self {
    Self { status: "healthy" }
  }
}

/// Text Analysis Response
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AnalyzeResponse {
  /// Echo of the submitted text
  pub text: String,
  /// Length in characters (not bytes)
  pub length: usize,
  /// Number of whitespace-separated words
  pub words: usize,
  /// Sentiment label
  pub sentiment: &'static str,
  /// Advisory message
  pub message: &'static str,
}

/// Service Statistics Response
///
/// Counters are not tracked yet and are reported as zero.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatsResponse {
  /// Always "running"
  pub uptime: &'static str,
  /// Requests processed so far
  pub requests_processed: u64,
  /// Models currently loaded
  pub models_loaded: u64,
}

impl Default for StatsResponse {
  fn default() -> Self {
    Self {
      uptime: "running",
      requests_processed: 0,
      models_loaded: 0,
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn root_response_serialization() {
    let json = serde_json::to_value(RootResponse::default()).unwrap();
    assert_eq!(
      json,
      serde_json::json!({
        "message": "Python Microservice",
        "status": "running",
        "version": "1.0.0",
      })
    );
  }

  #[test]
  fn health_response_serialization() {
    let json = serde_json::to_string(&HealthResponse::default()).unwrap();
    assert_eq!(json, r#"{"status":"healthy"}"#);
  }

  #[test]
  fn analyze_response_serialization() {
    let response = AnalyzeResponse {
      text: "hello world".to_string(),
      length: 11,
      words: 2,
      sentiment: PLACEHOLDER_SENTIMENT,
      message: PLACEHOLDER_MESSAGE,
    };

    let json = serde_json::to_string(&response).unwrap();
    assert!(json.contains("\"text\":\"hello world\""));
    assert!(json.contains("\"length\":11"));
    assert!(json.contains("\"words\":2"));
    assert!(json.contains("\"sentiment\":\"positive\""));
    assert!(json.contains("Add your ML model here!"));
  }

  #[test]
  fn stats_response_is_zeroed() {
    let json = serde_json::to_value(StatsResponse::default()).unwrap();
    assert_eq!(json["uptime"], "running");
    assert_eq!(json["requests_processed"], 0);
    assert_eq!(json["models_loaded"], 0);
  }
}
