//! インフラ層
//!
//! 記事ストアとの通信、ファイル読み込み、ログ初期化を提供します。

pub mod api;
pub mod loader;
pub mod logging;
pub mod storage;
