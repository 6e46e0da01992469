//! 型定義モジュール
//!
//! アプリケーション全体で使用される共通的な型定義を管理します。
//! - 設定: 環境変数から組み立てるストア接続設定とそのエラー
//! - エラー: 記事ストアへのクエリ失敗

pub mod config;
pub mod error;

// 便利な再エクスポート
pub use config::{ConfigError, ConfigResult, StoreConfig, StoreSource};
pub use error::{StoreError, StoreResult};
