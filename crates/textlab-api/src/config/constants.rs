//! API設定の定数定義

/// デフォルトのバインドホスト
///
/// コンテナ内での利用を想定し、全インターフェースで待ち受ける。
pub const DEFAULT_HOST: &str = "0.0.0.0";

/// デフォルトの待ち受けポート
pub const DEFAULT_PORT: u16 = 8000;

/// デフォルトで許可するクロスオリジン
///
/// ローカル開発中のフロントエンド（Web アプリ）のオリジン。
/// 認証情報付きリクエストはこのオリジンからのみ許可される。
pub const DEFAULT_ALLOWED_ORIGIN: &str = "http://localhost:3000";

/// サービス名（`GET /` の `message` として返す）
pub const SERVICE_NAME: &str = "Python Microservice";

/// サービスのバージョン（`GET /` の `version` として返す）
pub const SERVICE_VERSION: &str = "1.0.0";
