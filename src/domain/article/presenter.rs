use super::loader::ViewState;
use super::model::ArticleRecord;
use chrono::{DateTime, Utc};
use serde::Serialize;

/// カテゴリに代替画像がない場合に順番に使う既定画像
pub const DEFAULT_IMAGES: [&str; 3] = [
    "/assets/blog-gsap.jpg",
    "/assets/blog-threejs.jpg",
    "/assets/blog-react.jpg",
];

/// 記事にリンクがない場合のリンク先
pub const DEFAULT_LINK: &str = "#";

/// 注目記事と残りの記事への分割結果
#[derive(Debug, PartialEq)]
pub struct Partition<'a> {
    pub featured: Option<&'a ArticleRecord>,
    pub side: Vec<&'a ArticleRecord>,
}

/// 記事一覧を注目記事1件とサイド記事に分ける
///
/// 最初に `is_featured` が立っている記事が注目記事になり、
/// 2件目以降のフラグ付き記事を含む残りはすべて元の順序のままサイド記事になる。
pub fn partition(records: &[ArticleRecord]) -> Partition<'_> {
    let mut featured = None;
    let mut side = Vec::with_capacity(records.len());

    for record in records {
        if featured.is_none() && record.is_featured {
            featured = Some(record);
        } else {
            side.push(record);
        }
    }

    Partition { featured, side }
}

/// 記事の表示画像を決める
///
/// 明示的な画像URL → カテゴリの代替画像 → `index` に応じた既定画像の順に選ぶ。
/// 注目記事は `index` に0を渡す。
pub fn resolve_image(record: &ArticleRecord, index: usize) -> String {
    if let Some(url) = record.explicit_image() {
        return url.to_string();
    }
    record
        .category()
        .fallback_image()
        .unwrap_or(DEFAULT_IMAGES[index % DEFAULT_IMAGES.len()])
        .to_string()
}

/// 公開日を `Jan 5, 2026` の形式にする（UTC基準）
pub fn format_published_date(published_at: &DateTime<Utc>) -> String {
    published_at.format("%b %-d, %Y").to_string()
}

/// 描画用に整形した記事カード
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ArticleCard {
    pub id: String,
    pub title: String,
    pub excerpt: String,
    pub category: String,
    pub image: String,
    pub date: String,
    pub read_time: String,
    pub url: String,
    pub featured: bool,
}

impl ArticleCard {
    fn from_record(record: &ArticleRecord, image_index: usize, featured: bool) -> Self {
        let url = record
            .url
            .as_deref()
            .filter(|url| !url.trim().is_empty())
            .unwrap_or(DEFAULT_LINK)
            .to_string();

        Self {
            id: record.id.to_string(),
            title: record.title.clone(),
            excerpt: record.excerpt.clone(),
            category: record.category.clone(),
            image: resolve_image(record, image_index),
            date: format_published_date(&record.published_at),
            read_time: record.read_time.clone(),
            url,
            featured,
        }
    }
}

/// ビューが表示すべき内容
///
/// | 状態 | 件数 | 表示 |
/// |---|---|---|
/// | Loading | - | 読み込み表示のみ |
/// | Populated | 0 | 空メッセージのみ（グリッドなし） |
/// | Populated | 1以上 | 注目カード0〜1枚とサイドカード |
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum BlogView {
    Loading,
    Empty,
    Grid {
        featured: Option<ArticleCard>,
        side: Vec<ArticleCard>,
    },
}

impl BlogView {
    pub fn from_state(state: &ViewState) -> Self {
        match state {
            ViewState::Loading => BlogView::Loading,
            ViewState::Populated(records) => Self::present(records),
        }
    }

    /// 確定済みの記事一覧からビューを組み立てる
    pub fn present(records: &[ArticleRecord]) -> Self {
        if records.is_empty() {
            return BlogView::Empty;
        }

        let Partition { featured, side } = partition(records);
        BlogView::Grid {
            featured: featured.map(|record| ArticleCard::from_record(record, 0, true)),
            side: side
                .into_iter()
                .enumerate()
                .map(|(index, record)| ArticleCard::from_record(record, index, false))
                .collect(),
        }
    }

    /// 表示されるカードの総数
    pub fn card_count(&self) -> usize {
        match self {
            BlogView::Loading | BlogView::Empty => 0,
            BlogView::Grid { featured, side } => featured.iter().count() + side.len(),
        }
    }
}
