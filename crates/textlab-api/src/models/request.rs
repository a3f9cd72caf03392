//! リクエストモデル定義

use serde::Deserialize;

/// テキスト解析リクエスト（JSON ボディ形式）
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct AnalyzeRequest {
  /// 解析対象のテキスト
  pub text: String,
}

impl AnalyzeRequest {
  /// テキストからリクエストを作成
  #[must_use]
  pub fn new(text: impl Into<String>) -> Self {
    Self { text: text.into() }
  }
}

/// `POST /api/analyze` のクエリパラメータ
///
/// `?text=...` が本来の受け付け形式。
/// 省略された場合は JSON ボディにフォールバックする。
#[derive(Debug, Default, Deserialize)]
pub struct AnalyzeParams {
  /// 解析対象のテキスト
  pub text: Option<String>,
}

impl AnalyzeParams {
  /// デコード済みのクエリ (キー, 値) 列から作成する
  ///
  /// `text` が複数回現れた場合は最後の値を採用する。
  #[must_use]
  pub fn from_pairs(pairs: Vec<(String, String)>) -> Self {
    let text = pairs.into_iter().rev().find(|(key, _)| key == "text").map(|(_, value)| value);
    Self { text }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn deserialize_valid_request() {
    let json = r#"{"text": "hello world"}"#;
    let req: AnalyzeRequest = serde_json::from_str(json).unwrap();
    assert_eq!(req, AnalyzeRequest::new("hello world"));
  }

  #[test]
  fn deserialize_empty_text() {
    let json = r#"{"text": ""}"#;
    let req: AnalyzeRequest = serde_json::from_str(json).unwrap();
    assert_eq!(req.text, "");
  }

  #[test]
  fn deserialize_non_string_text_fails() {
    let json = r#"{"text": 42}"#;
    assert!(serde_json::from_str::<AnalyzeRequest>(json).is_err());
  }

  fn pairs(items: &[(&str, &str)]) -> Vec<(String, String)> {
    items.iter().map(|(k, v)| ((*k).to_string(), (*v).to_string())).collect()
  }

  #[test]
  fn params_from_pairs_takes_last_text() {
    let params = AnalyzeParams::from_pairs(pairs(&[("text", "a"), ("lang", "en"), ("text", "b")]));
    assert_eq!(params.text.as_deref(), Some("b"));
  }

  #[test]
  fn params_from_pairs_without_text() {
    let params = AnalyzeParams::from_pairs(pairs(&[("lang", "en")]));
    assert!(params.text.is_none());
  }

  #[test]
  fn params_text_is_optional() {
    let params: AnalyzeParams = serde_json::from_str("{}").unwrap();
    assert!(params.text.is_none());
  }
}
