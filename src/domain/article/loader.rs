use super::model::{ArticleQuery, ArticleRecord};
use crate::infra::api::store::ArticleStore;
use crate::types::{StoreError, StoreResult};
use serde::Serialize;
use std::sync::Arc;
use tokio::sync::oneshot::{self, error::TryRecvError};

/// ブログ欄のビュー状態
///
/// `Loading` から始まり、取得が終わると `Populated` で確定する。
/// 取得失敗も `Populated(空)` として扱い、閲覧者には記事0件と区別しない。
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "state", content = "articles", rename_all = "snake_case")]
pub enum ViewState {
    Loading,
    Populated(Vec<ArticleRecord>),
}

impl ViewState {
    pub fn is_loading(&self) -> bool {
        matches!(self, ViewState::Loading)
    }

    /// 確定済みの記事一覧。読み込み中は空
    pub fn articles(&self) -> &[ArticleRecord] {
        match self {
            ViewState::Loading => &[],
            ViewState::Populated(records) => records,
        }
    }
}

/// ストアにクエリを1回だけ発行して記事を取得する
///
/// リトライやポーリングは行わない。件数上限を超えて返された場合は
/// 先頭から上限件数までを残す（並び順は変えない）。
pub async fn load_articles(
    store: &dyn ArticleStore,
    query: &ArticleQuery,
) -> StoreResult<Vec<ArticleRecord>> {
    log::info!(
        "記事を取得します: table={} order={} limit={}",
        query.table,
        query.order_param(),
        query.limit
    );

    let mut records = store.fetch_articles(query).await?;
    if records.len() > query.limit {
        log::warn!(
            "ストアが上限を超える{}件を返したため{}件に切り詰めます",
            records.len(),
            query.limit
        );
        records.truncate(query.limit);
    }
    Ok(records)
}

/// 取得結果をビュー状態に確定させる
///
/// エラーはログに記録したうえで診断用に返し、状態は `Populated(空)` にする。
pub fn settle(result: StoreResult<Vec<ArticleRecord>>) -> (ViewState, Option<StoreError>) {
    match result {
        Ok(records) => {
            log::info!("記事の取得が完了しました: {}件", records.len());
            (ViewState::Populated(records), None)
        }
        Err(e) => {
            log::error!("記事の取得に失敗しました: {}", e);
            (ViewState::Populated(Vec::new()), Some(e))
        }
    }
}

/// 取得から状態確定までを一度に行う
pub async fn load_view_state(store: &dyn ArticleStore, query: &ArticleQuery) -> ViewState {
    settle(load_articles(store, query).await).0
}

/// ローダーの1回分の起動（ビューのマウント1回に相当）
///
/// 起動時に取得タスクを1つだけ生成し、結果はワンショットチャネルで受け取る。
/// 完了前にこの値を破棄した場合、遅れて届いた結果はどこにも書き込まれずに捨てられる。
/// 再取得したい場合は新しい `Activation` を起動する（キャッシュはしない）。
pub struct Activation {
    state: ViewState,
    diagnostic: Option<StoreError>,
    pending: Option<oneshot::Receiver<StoreResult<Vec<ArticleRecord>>>>,
}

impl Activation {
    /// 取得タスクを起動する。tokioランタイム内で呼ぶこと
    pub fn start(store: Arc<dyn ArticleStore>, query: ArticleQuery) -> Self {
        let (tx, rx) = oneshot::channel();

        tokio::spawn(async move {
            let result = load_articles(store.as_ref(), &query).await;
            if tx.send(result).is_err() {
                log::debug!(
                    "ビューが破棄済みのため取得結果を捨てました: table={}",
                    query.table
                );
            }
        });

        Self {
            state: ViewState::Loading,
            diagnostic: None,
            pending: Some(rx),
        }
    }

    pub fn state(&self) -> &ViewState {
        &self.state
    }

    /// 取得失敗時のエラー（運用者向け。ビューには出さない）
    pub fn diagnostic(&self) -> Option<&StoreError> {
        self.diagnostic.as_ref()
    }

    /// 待たずに完了を確認する
    pub fn poll(&mut self) -> &ViewState {
        let received = match self.pending.as_mut() {
            Some(rx) => rx.try_recv(),
            None => return &self.state,
        };
        match received {
            Ok(result) => self.resolve(result),
            Err(TryRecvError::Empty) => {}
            Err(TryRecvError::Closed) => self.resolve(Err(abandoned())),
        }
        &self.state
    }

    /// 取得の完了を待つ
    pub async fn wait(&mut self) -> &ViewState {
        if let Some(rx) = self.pending.take() {
            let result = rx.await.unwrap_or_else(|_| Err(abandoned()));
            self.resolve(result);
        }
        &self.state
    }

    /// 状態の所有権を描画側へ渡す
    pub fn into_state(self) -> ViewState {
        self.state
    }

    fn resolve(&mut self, result: StoreResult<Vec<ArticleRecord>>) {
        self.pending = None;
        let (state, diagnostic) = settle(result);
        self.state = state;
        self.diagnostic = diagnostic;
    }
}

// 取得タスクが結果を送らずに終了した（パニックなど）
fn abandoned() -> StoreError {
    StoreError::other("取得タスクが結果を返さずに終了しました")
}
