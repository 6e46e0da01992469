//! ログ出力の初期化
//!
//! `log` ファサードの出力先として `flexi_logger` を標準エラーに接続する。
//! 初期化はプロセスごとに一度だけ行い、2回目以降の呼び出しは何もしない。

use flexi_logger::{Logger, LoggerHandle};
use once_cell::sync::OnceCell;

use crate::types::config::{DEFAULT_LOG_LEVEL, ENV_LOG_LEVEL};

static LOGGER: OnceCell<LoggerHandle> = OnceCell::new();

/// 環境変数 `BLOG_LOG_LEVEL`（未設定なら `info`）でログを初期化する
pub fn init_logging() -> Result<(), String> {
    let spec = std::env::var(ENV_LOG_LEVEL)
        .ok()
        .filter(|v| !v.trim().is_empty())
        .unwrap_or_else(|| DEFAULT_LOG_LEVEL.to_string());
    init_logging_with(&spec)
}

/// 指定したログ指定文字列（例: `debug`, `info,blogfeed=trace`）で初期化する
pub fn init_logging_with(spec: &str) -> Result<(), String> {
    LOGGER
        .get_or_try_init(|| {
            Logger::try_with_str(spec)
                .map_err(|err| format!("ログレベルの指定が不正です `{}`: {}", spec, err))?
                .log_to_stderr()
                .start()
                .map_err(|err| format!("ログの初期化に失敗しました: {}", err))
        })
        .map(|_| ())
}
