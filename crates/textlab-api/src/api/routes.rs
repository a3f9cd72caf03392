//! ルーター定義

use axum::{
  Router,
  http::HeaderValue,
  routing::{get, post},
};
use tower_http::{
  cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer},
  trace::TraceLayer,
};

use super::handlers::{get_stats, health_check, not_found, post_analyze, root};
use super::state::AppState;
use crate::errors::ApiError;

/// CORS レイヤーを作成する
///
/// 認証情報付きリクエストはワイルドカードと併用できないため、
/// メソッドとヘッダーはプリフライトの要求をそのまま返して全許可とする。
/// 許可オリジン以外からのリクエストには `Access-Control-Allow-Origin` を付けない。
///
/// # Errors
/// オリジンがヘッダー値として不正な場合にエラーを返す
pub fn cors_layer(allowed_origin: &str) -> crate::errors::Result<CorsLayer> {
  let origin = HeaderValue::from_str(allowed_origin)
    .map_err(|e| ApiError::config(format!("不正なオリジンです: {allowed_origin:?} ({e})")))?;

  Ok(
    CorsLayer::new()
      .allow_origin(AllowOrigin::list([origin]))
      .allow_credentials(true)
      .allow_methods(AllowMethods::mirror_request())
      .allow_headers(AllowHeaders::mirror_request()),
  )
}

/// APIルーターを作成する
///
/// # Arguments
/// * `state` - アプリケーション状態
///
/// # Returns
/// 設定済みの Router
///
/// # Errors
/// CORS 設定の作成に失敗した場合にエラーを返す
pub fn create_router(state: AppState) -> crate::errors::Result<Router> {
  let cors = cors_layer(&state.config.allowed_origin)?;

  Ok(
    Router::new()
      .route("/", get(root))
      .route("/health", get(health_check))
      .route("/api/analyze", post(post_analyze))
      .route("/api/stats", get(get_stats))
      .fallback(not_found)
      .layer(cors)
      .layer(TraceLayer::new_for_http())
      .with_state(state),
  )
}

/// サーバーを起動する
///
/// Ctrl-C（Unix では SIGTERM も）を受け取ると、処理中のリクエストを
/// 完了させてから終了する。
///
/// # Arguments
/// * `state` - アプリケーション状態
///
/// # Errors
/// サーバーの起動に失敗した場合にエラーを返す
pub async fn run_server(state: AppState) -> crate::errors::Result<()> {
  let addr = state.config.bind_addr();
  let listener = tokio::net::TcpListener::bind(&addr)
    .await
    .map_err(|e| ApiError::config(format!("バインドに失敗しました: {addr}: {e}")))?;

  tracing::info!(
    allowed_origin = %state.config.allowed_origin,
    "サーバーを起動します: http://{}",
    addr
  );

  let router = create_router(state)?;

  axum::serve(listener, router)
    .with_graceful_shutdown(shutdown_signal())
    .await
    .map_err(|e| ApiError::internal(format!("サーバーエラー: {e}")))?;

  tracing::info!("サーバーを停止しました");

  Ok(())
}

/// 終了シグナルを待つ
async fn shutdown_signal() {
  let ctrl_c = async {
    if let Err(e) = tokio::signal::ctrl_c().await {
      tracing::error!(error = %e, "Ctrl-C ハンドラーの登録に失敗しました");
      std::future::pending::<()>().await;
    }
  };

  #[cfg(unix)]
  let terminate = async {
    match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
      Ok(mut sig) => {
        sig.recv().await;
      }
      Err(e) => {
        tracing::error!(error = %e, "SIGTERM ハンドラーの登録に失敗しました");
        std::future::pending::<()>().await;
      }
    }
  };

  #[cfg(not(unix))]
  let terminate = std::future::pending::<()>();

  tokio::select! {
    () = ctrl_c => {},
    () = terminate => {},
  }

  tracing::info!("終了シグナルを受信しました");
}
