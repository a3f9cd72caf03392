//! モデルモジュール

mod request;
mod response;

pub use request::{AnalyzeParams, AnalyzeRequest};
pub use response::{
  AnalyzeResponse, HealthResponse, PLACEHOLDER_MESSAGE, PLACEHOLDER_SENTIMENT, RootResponse,
  StatsResponse,
};
