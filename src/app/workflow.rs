use crate::{
    domain::article::{Activation, ArticleQuery, BlogView},
    infra::{
        api::store::{ArticleStore, RestArticleStore},
        storage::file::FileArticleStore,
    },
    types::{StoreConfig, StoreSource},
};
use anyhow::{Context, Result};
use serde::Serialize;
use std::sync::Arc;

/// ブログ欄の固定文言
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SectionCopy {
    pub eyebrow: String,
    pub heading: String,
    pub tagline: String,
    pub loading_message: String,
    pub empty_message: String,
    pub featured_badge: String,
    pub featured_cta: String,
    pub side_cta: String,
    pub view_all_label: String,
    pub view_all_url: String,
}

impl Default for SectionCopy {
    fn default() -> Self {
        Self {
            eyebrow: "Latest Insights".to_string(),
            heading: "Blog & Articles".to_string(),
            tagline: "Sharing knowledge about web development, animations, and modern technologies"
                .to_string(),
            loading_message: "Loading articles...".to_string(),
            empty_message: "No articles published yet. Check back soon!".to_string(),
            featured_badge: "Featured".to_string(),
            featured_cta: "Read Article".to_string(),
            side_cta: "Read More".to_string(),
            view_all_label: "View All Articles".to_string(),
            view_all_url: "#".to_string(),
        }
    }
}

/// 描画側へ渡すブログ欄の内容
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BlogSection {
    pub copy: SectionCopy,
    pub view: BlogView,
}

/// 設定に応じた記事ストアを作成する
pub fn build_store(config: &StoreConfig) -> Arc<dyn ArticleStore> {
    match &config.source {
        StoreSource::Rest { base_url, api_key } => {
            let mut store = RestArticleStore::new(base_url.as_str(), api_key.as_str());
            if let Some(secs) = config.timeout_secs {
                store = store.with_timeout(secs);
            }
            log::debug!("RESTストアを使用します: {}", base_url);
            Arc::new(store)
        }
        StoreSource::File { path } => {
            log::debug!("ファイルストアを使用します: {}", path);
            Arc::new(FileArticleStore::new(path.as_str()))
        }
    }
}

/// ローダーを1回起動し、完了を待ってブログ欄を組み立てる
pub async fn render_blog_section(store: Arc<dyn ArticleStore>, query: ArticleQuery) -> BlogSection {
    let mut activation = Activation::start(store, query);
    activation.wait().await;

    let view = BlogView::from_state(&activation.into_state());
    log::info!("ブログ欄を組み立てました: {}枚のカード", view.card_count());

    BlogSection {
        copy: SectionCopy::default(),
        view,
    }
}

/// ブログ欄ワークフローのメイン実行関数
///
/// 1. 設定から記事ストアを作成
/// 2. 最新3件を取得してビューを組み立て
/// 3. JSONとして返す
///
/// ストアの失敗は空のビューになるため、ここでエラーになるのはシリアライズ失敗のみ。
pub async fn execute_blog_workflow(config: &StoreConfig) -> Result<String> {
    log::info!("=== ブログ欄ワークフロー開始 ===");

    let store = build_store(config);
    let section = render_blog_section(store, ArticleQuery::latest(config.table.as_str())).await;
    let json =
        serde_json::to_string_pretty(&section).context("ブログ欄のシリアライズに失敗")?;

    log::info!("=== ブログ欄ワークフロー完了 ===");
    Ok(json)
}
