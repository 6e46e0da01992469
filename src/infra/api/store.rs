use crate::domain::article::{ArticleQuery, ArticleRecord};
use crate::types::{StoreError, StoreResult};
use async_trait::async_trait;
use reqwest::header::ACCEPT;
use reqwest::Client;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

/// 記事ストアの抽象化トレイト
///
/// ホスティングされたテーブル・ローカルファイル・テスト用モックを
/// 統一的に扱えるようにするためのインターフェースです。
#[async_trait]
pub trait ArticleStore: Send + Sync {
    /// クエリに従って記事レコードを取得する
    ///
    /// 並び順はストアが保証し、呼び出し側では並べ替えない。
    async fn fetch_articles(&self, query: &ArticleQuery) -> StoreResult<Vec<ArticleRecord>>;
}

/// `reqwest` を使用したRESTテーブル（PostgREST互換）用の実装
pub struct RestArticleStore {
    client: Client,
    base_url: String,
    api_key: String,
    timeout: Option<Duration>,
}

impl RestArticleStore {
    /// 新しいストアクライアントを作成
    ///
    /// # Arguments
    /// * `base_url` - プロジェクトのURL（例: `https://xxxx.supabase.co`）
    /// * `api_key` - 匿名キー。`apikey` ヘッダーとBearerトークンの両方に使う
    pub fn new<U: Into<String>, K: Into<String>>(base_url: U, api_key: K) -> Self {
        let base_url: String = base_url.into();
        Self {
            client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.into(),
            timeout: None,
        }
    }

    /// リクエストタイムアウトを設定（既定ではクライアントの既定値に従う）
    pub fn with_timeout(mut self, timeout_secs: u64) -> Self {
        self.timeout = Some(Duration::from_secs(timeout_secs));
        self
    }

    fn endpoint(&self, table: &str) -> String {
        format!("{}/rest/v1/{}", self.base_url, table)
    }
}

#[async_trait]
impl ArticleStore for RestArticleStore {
    async fn fetch_articles(&self, query: &ArticleQuery) -> StoreResult<Vec<ArticleRecord>> {
        let order = query.order_param();
        let limit = query.limit.to_string();

        let mut request = self
            .client
            .get(self.endpoint(&query.table))
            .query(&[
                ("select", "*"),
                ("order", order.as_str()),
                ("limit", limit.as_str()),
            ])
            .header("apikey", &self.api_key)
            .bearer_auth(&self.api_key)
            .header(ACCEPT, "application/json");
        if let Some(timeout) = self.timeout {
            request = request.timeout(timeout);
        }

        let response = request
            .send()
            .await
            .map_err(|e| StoreError::request(&query.table, e))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| StoreError::request(&query.table, e))?;

        if !status.is_success() {
            return Err(StoreError::status(&query.table, status.as_u16(), body));
        }

        serde_json::from_str(&body)
            .map_err(|e| StoreError::decode(format!("{}テーブルの応答", query.table), e))
    }
}

/// テスト用のモックストア
///
/// この実装はテスト時にDIされ、実際の通信を行わずに
/// 定義済みのレコードやエラーを返します。
pub struct MockArticleStore {
    /// モック時に返すレコード
    pub records: Vec<ArticleRecord>,
    /// エラー時に返すメッセージ（Noneなら成功）
    pub error_message: Option<String>,
    /// 応答までの待ち時間
    pub delay: Option<Duration>,
    calls: AtomicUsize,
}

impl MockArticleStore {
    /// 成功レスポンスを返すモックストアを作成
    pub fn new_success(records: Vec<ArticleRecord>) -> Self {
        Self {
            records,
            error_message: None,
            delay: None,
            calls: AtomicUsize::new(0),
        }
    }

    /// エラーを返すモックストアを作成
    pub fn new_error(error_message: &str) -> Self {
        Self {
            records: Vec::new(),
            error_message: Some(error_message.to_string()),
            delay: None,
            calls: AtomicUsize::new(0),
        }
    }

    /// 応答を遅らせる
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    /// これまでに受けたクエリの回数
    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ArticleStore for MockArticleStore {
    async fn fetch_articles(&self, _query: &ArticleQuery) -> StoreResult<Vec<ArticleRecord>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
        match &self.error_message {
            Some(message) => Err(StoreError::other(format!("モックストアエラー: {}", message))),
            None => Ok(self.records.clone()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_mock_store_success() {
        let store = MockArticleStore::new_success(Vec::new());

        let result = store.fetch_articles(&ArticleQuery::default()).await;

        assert!(result.unwrap().is_empty());
        assert_eq!(store.call_count(), 1);
    }

    #[tokio::test]
    async fn test_mock_store_error() {
        let store = MockArticleStore::new_error("接続失敗");

        let result = store.fetch_articles(&ArticleQuery::default()).await;

        assert!(result.unwrap_err().to_string().contains("接続失敗"));
        assert_eq!(store.call_count(), 1);
    }

    #[test]
    fn test_endpoint_strips_trailing_slash() {
        let store = RestArticleStore::new("https://example.supabase.co/", "key");
        assert_eq!(
            store.endpoint("articles"),
            "https://example.supabase.co/rest/v1/articles"
        );
    }
}
