//! サービスモジュール

mod analysis_service;

pub use analysis_service::{AnalysisService, PlaceholderAnalysisService, char_count, word_count};
