use crate::domain::article::{ArticleQuery, ArticleRecord, PUBLISHED_AT_COLUMN};
use crate::infra::api::store::ArticleStore;
use crate::infra::loader::load_json_from_file;
use crate::types::{StoreError, StoreResult};
use async_trait::async_trait;

/// JSONファイルを記事テーブルとして扱うストア
///
/// ファイル内の順序は問わず、ストアとして並び順と件数上限をここで適用する。
pub struct FileArticleStore {
    path: String,
}

impl FileArticleStore {
    pub fn new<P: Into<String>>(path: P) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &str {
        &self.path
    }
}

#[async_trait]
impl ArticleStore for FileArticleStore {
    async fn fetch_articles(&self, query: &ArticleQuery) -> StoreResult<Vec<ArticleRecord>> {
        if query.order_column != PUBLISHED_AT_COLUMN {
            return Err(StoreError::other(format!(
                "ファイルストアは{}以外での並び替えに対応していません: {}",
                PUBLISHED_AT_COLUMN, query.order_column
            )));
        }

        let mut records: Vec<ArticleRecord> = load_json_from_file(&self.path)?;
        // 安定ソートなので同時刻の記事はファイル内の順序を保つ
        if query.descending {
            records.sort_by(|a, b| b.published_at.cmp(&a.published_at));
        } else {
            records.sort_by(|a, b| a.published_at.cmp(&b.published_at));
        }
        records.truncate(query.limit);
        Ok(records)
    }
}
