use blogfeed::app::execute_blog_workflow;
use blogfeed::infra::logging::init_logging;
use blogfeed::types::StoreConfig;
use std::process::ExitCode;

#[tokio::main]
async fn main() -> ExitCode {
    // 環境変数を読み込み（.envファイルがあれば使用）
    let _ = dotenvy::dotenv();

    if let Err(e) = init_logging() {
        eprintln!("{}", e);
        return ExitCode::FAILURE;
    }

    let config = match StoreConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            log::error!("設定の読み込みに失敗しました: {}", e);
            return ExitCode::FAILURE;
        }
    };

    match execute_blog_workflow(&config).await {
        Ok(json) => {
            println!("{}", json);
            ExitCode::SUCCESS
        }
        Err(e) => {
            log::error!("ブログ欄の生成に失敗しました: {:#}", e);
            ExitCode::FAILURE
        }
    }
}
