//! HTTPハンドラー定義

use axum::{
  Json,
  body::Bytes,
  extract::{Query, State, rejection::QueryRejection},
  http::Uri,
};
use serde_json::Value;
use tracing::{debug, info};

use crate::errors::{ApiError, Result};
use crate::models::{
  AnalyzeParams, AnalyzeRequest, AnalyzeResponse, HealthResponse, RootResponse, StatsResponse,
};
use crate::service::char_count;

use super::state::AppState;

/// GET / エンドポイント
///
/// サービス名・稼働状態・バージョンを返す。
pub async fn root() -> Json<RootResponse> {
  Json(RootResponse::default())
}

/// ヘルスチェックエンドポイント
///
/// サーバーが稼働しているかを確認する。
pub async fn health_check() -> Json<HealthResponse> {
  Json(HealthResponse::default())
}

/// POST /api/analyze エンドポイント
///
/// テキストの文字数・単語数を数え、固定の感情ラベルを付けて返す。
///
/// # Request
/// ```text
/// POST /api/analyze?text=hello%20world
/// ```
/// クエリに `text` が無い場合は JSON ボディを使う:
/// ```json
/// { "text": "hello world" }
/// ```
///
/// # Response
/// - 200 OK: 解析成功
/// - 422 Unprocessable Entity: テキスト未指定、クエリ文字列またはボディが不正
///
/// `text` が複数回指定された場合は最後の値を使う。
pub async fn post_analyze(
  State(state): State<AppState>,
  query: std::result::Result<Query<Vec<(String, String)>>, QueryRejection>,
  body: Bytes,
) -> Result<Json<AnalyzeResponse>> {
  let Query(pairs) = query
    .map_err(|e| ApiError::invalid_input(format!("クエリ文字列を解釈できません: {e}")))?;
  let request = resolve_analyze_request(AnalyzeParams::from_pairs(pairs), &body)?;
  debug!(
    text_bytes = request.text.len(),
    text_chars = char_count(&request.text),
    "解析リクエストを受信"
  );

  // 文字数・単語数を数えるだけの軽い処理のため spawn_blocking は使わない
  let response = state.service.analyze(request)?;

  info!(length = response.length, words = response.words, "解析完了");

  Ok(Json(response))
}

/// GET /api/stats エンドポイント
///
/// サービスの統計情報を返す。
pub async fn get_stats(State(state): State<AppState>) -> Result<Json<StatsResponse>> {
  let stats = state.service.stats()?;
  Ok(Json(stats))
}

/// 未定義ルートのフォールバック
pub async fn not_found(uri: Uri) -> ApiError {
  debug!(path = %uri.path(), "未定義のルート");
  ApiError::not_found(uri.path())
}

/// 解析リクエストを組み立てる
///
/// クエリパラメータ `text` を優先し、無ければ JSON ボディの `text` を使う。
pub(crate) fn resolve_analyze_request(params: AnalyzeParams, body: &[u8]) -> Result<AnalyzeRequest> {
  if let Some(text) = params.text {
    return Ok(AnalyzeRequest::new(text));
  }

  if body.iter().all(u8::is_ascii_whitespace) {
    return Err(ApiError::MissingText);
  }

  let value: Value = serde_json::from_slice(body)
    .map_err(|e| ApiError::invalid_input(format!("ボディが JSON として不正です: {e}")))?;

  let Value::Object(mut fields) = value else {
    return Err(ApiError::invalid_input("ボディは JSON オブジェクトである必要があります"));
  };

  match fields.remove("text") {
    Some(Value::String(text)) => Ok(AnalyzeRequest::new(text)),
    Some(_) => Err(ApiError::invalid_input("text は文字列である必要があります")),
    None => Err(ApiError::MissingText),
  }
}
