//! Text Analysis Service

use crate::errors::Result;
use crate::models::{
  AnalyzeRequest, AnalyzeResponse, PLACEHOLDER_MESSAGE, PLACEHOLDER_SENTIMENT, StatsResponse,
};

/// Common interface for the analysis service
///
/// This trait allows swapping the production implementation
/// (`PlaceholderAnalysisService`) with test stubs/mocks, or later with a
/// service backed by a real model.
pub trait AnalysisService: Send + Sync {
  /// Analyzes one piece of text
  ///
  /// # Errors
  /// Implementations may reject input; the placeholder never does
  fn analyze(&self, request: AnalyzeRequest) -> Result<AnalyzeResponse>;

  /// Reports service statistics
  ///
  /// # Errors
  /// Implementations may fail to collect statistics; the placeholder never does
  fn stats(&self) -> Result<StatsResponse>;
}

/// Number of characters (Unicode scalar values) in `text`
#[must_use]
pub fn char_count(text: &str) -> usize {
  text.chars().count()
}

/// Whether `c` separates words
///
/// Unicode whitespace plus the information separators U+001C..=U+001F.
fn is_word_separator(c: char) -> bool {
  c.is_whitespace() || ('\u{1c}'..='\u{1f}').contains(&c)
}

/// Number of words in `text`, split on runs of word separators
#[must_use]
pub fn word_count(text: &str) -> usize {
  text.split(is_word_separator).filter(|word| !word.is_empty()).count()
}

/// Placeholder analysis service
///
/// Counts characters and words and stamps a fixed sentiment label.
/// No inference takes place, and statistics are not tracked.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlaceholderAnalysisService;

impl PlaceholderAnalysisService {
  /// Creates the service
  #[must_use]
  pub fn new() -> Self {
    Self
  }
}

/// Production implementation of trait `AnalysisService`
impl AnalysisService for PlaceholderAnalysisService {
  fn analyze(&self, request: AnalyzeRequest) -> Result<AnalyzeResponse> {
    let length = char_count(&request.text);
    let words = word_count(&request.text);

    Ok(AnalyzeResponse {
      text: request.text,
      length,
      words,
      sentiment: PLACEHOLDER_SENTIMENT,
      message: PLACEHOLDER_MESSAGE,
    })
  }

  fn stats(&self) -> Result<StatsResponse> {
    Ok(StatsResponse::default())
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn hello_world_counts() {
    let response = PlaceholderAnalysisService::new()
      .analyze(AnalyzeRequest::new("hello world"))
      .unwrap();

    assert_eq!(response.text, "hello world");
    assert_eq!(response.length, 11);
    assert_eq!(response.words, 2);
    assert_eq!(response.sentiment, "positive");
    assert_eq!(response.message, PLACEHOLDER_MESSAGE);
  }

  #[test]
  fn empty_text_counts_zero() {
    let response = PlaceholderAnalysisService::new().analyze(AnalyzeRequest::new("")).unwrap();
    assert_eq!(response.length, 0);
    assert_eq!(response.words, 0);
    assert_eq!(response.sentiment, "positive");
  }

  #[test]
  fn length_counts_characters_not_bytes() {
    assert_eq!(char_count("héllo"), 5);
    assert_eq!(char_count("東京タワー"), 5);
    assert_eq!("東京タワー".len(), 15);
  }

  #[test]
  fn words_split_on_whitespace_runs() {
    assert_eq!(word_count("  a \t b\n"), 2);
    assert_eq!(word_count("   "), 0);
    assert_eq!(word_count("one"), 1);
    // ideographic space (U+3000) is whitespace too
    assert_eq!(word_count("東京\u{3000}大阪"), 2);
    // information separators split words as well
    assert_eq!(word_count("a\u{1f}b"), 2);
    assert_eq!(word_count("a\u{1c}b\u{1d}c"), 3);
    assert_eq!(word_count("\u{1e}a\u{1e}\u{1e}b\u{1f}"), 2);
    // U+00A0 and U+0085 are whitespace; U+200B is not
    assert_eq!(word_count("a\u{a0}b\u{85}c"), 3);
    assert_eq!(word_count("a\u{200b}b"), 1);
  }

  #[test]
  fn analyze_is_idempotent() {
    let service = PlaceholderAnalysisService::new();
    let first = service.analyze(AnalyzeRequest::new("same input twice")).unwrap();
    let second = service.analyze(AnalyzeRequest::new("same input twice")).unwrap();
    assert_eq!(first, second);
  }

  #[test]
  fn stats_stay_zero_after_analyses() {
    let service = PlaceholderAnalysisService::new();
    for _ in 0..3 {
      service.analyze(AnalyzeRequest::new("hello")).unwrap();
    }

    let stats = service.stats().unwrap();
    assert_eq!(stats.uptime, "running");
    assert_eq!(stats.requests_processed, 0);
    assert_eq!(stats.models_loaded, 0);
  }
}
