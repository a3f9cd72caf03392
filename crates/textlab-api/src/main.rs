//! textlab-api サーバーエントリーポイント

use std::sync::Arc;

use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use textlab_api::ApiError;
use textlab_api::api::AppState;
use textlab_api::api::run_server;
use textlab_api::config::Config;
use textlab_api::service::PlaceholderAnalysisService;

#[tokio::main]
async fn main() -> Result<(), ApiError> {
  // ロギングの初期化（RUST_LOG 未設定時は info）
  let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
  tracing_subscriber::registry().with(tracing_subscriber::fmt::layer()).with(filter).init();

  // 設定の読み込み
  let config = Config::from_env()?;
  tracing::info!(
    bind_addr = %config.bind_addr(),
    allowed_origin = %config.allowed_origin,
    "設定を読み込みました"
  );

  // サービスの初期化
  let service = Arc::new(PlaceholderAnalysisService::new());

  // アプリケーション状態の作成
  let state = AppState::new(config, service);

  // サーバー起動
  run_server(state).await
}
