use anyhow::{Context, Result};
use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// ブログ欄に表示する最新記事の件数
pub const LATEST_LIMIT: usize = 3;
/// 並び替えに使う公開日時カラム
pub const PUBLISHED_AT_COLUMN: &str = "published_at";

/// 記事ID（ストア側では文字列・数値のどちらでもよい不透明な値）
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ArticleId {
    Number(i64),
    Text(String),
}

impl fmt::Display for ArticleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArticleId::Number(n) => write!(f, "{}", n),
            ArticleId::Text(s) => write!(f, "{}", s),
        }
    }
}

// 記事テーブルの1行（読み取り専用）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArticleRecord {
    pub id: ArticleId,
    pub title: String,
    pub excerpt: String,
    pub category: String,
    #[serde(default)]
    pub image_url: Option<String>,
    pub read_time: String,
    #[serde(default, deserialize_with = "deserialize_flag")]
    pub is_featured: bool,
    #[serde(deserialize_with = "deserialize_published_at")]
    pub published_at: DateTime<Utc>,
    /// 記事ページへのリンク（未設定なら表示側で `#`）
    #[serde(default)]
    pub url: Option<String>,
}

impl ArticleRecord {
    /// 空白以外の画像URLが明示されていればそれを返す
    pub fn explicit_image(&self) -> Option<&str> {
        self.image_url
            .as_deref()
            .filter(|url| !url.trim().is_empty())
    }

    pub fn category(&self) -> Category {
        Category::from_label(&self.category)
    }
}

/// 公開日時文字列をUTCの日時に変換する
///
/// オフセット付きの値はUTCへ正規化し、オフセットのない値はUTCとして扱う。
pub fn parse_published_at(raw: &str) -> Result<DateTime<Utc>> {
    let value = raw.trim();

    if let Ok(parsed) = DateTime::parse_from_rfc3339(value) {
        return Ok(parsed.with_timezone(&Utc));
    }
    // Postgresの timestamptz 表記（例: 2025-12-28 10:15:00+00）
    if let Ok(parsed) = DateTime::parse_from_str(value, "%Y-%m-%d %H:%M:%S%.f%#z") {
        return Ok(parsed.with_timezone(&Utc));
    }
    for format in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(value, format) {
            return Ok(naive.and_utc());
        }
    }

    dateparser::parse_with_timezone(value, &Utc)
        .with_context(|| format!("公開日時の解析に失敗: {}", raw))
}

fn deserialize_published_at<'de, D>(deserializer: D) -> std::result::Result<DateTime<Utc>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    parse_published_at(&raw).map_err(serde::de::Error::custom)
}

// nullはfalseとして扱う
fn deserialize_flag<'de, D>(deserializer: D) -> std::result::Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<bool>::deserialize(deserializer)?.unwrap_or(false))
}

/// 代替画像の対応表を持つ既知のカテゴリ
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Category {
    Animation,
    ThreeDGraphics,
    React,
    /// 対応表にないカテゴリ
    Other(String),
}

impl Category {
    pub fn from_label(label: &str) -> Self {
        match label {
            "Animation" => Category::Animation,
            "3D Graphics" => Category::ThreeDGraphics,
            "React" => Category::React,
            other => Category::Other(other.to_string()),
        }
    }

    pub fn label(&self) -> &str {
        match self {
            Category::Animation => "Animation",
            Category::ThreeDGraphics => "3D Graphics",
            Category::React => "React",
            Category::Other(label) => label,
        }
    }

    /// カテゴリ固有の代替画像。未知のカテゴリはNone
    pub fn fallback_image(&self) -> Option<&'static str> {
        match self {
            Category::Animation => Some("/assets/blog-gsap.jpg"),
            Category::ThreeDGraphics => Some("/assets/blog-threejs.jpg"),
            Category::React => Some("/assets/blog-react.jpg"),
            Category::Other(_) => None,
        }
    }
}

/// 記事ストアへの読み取りクエリ
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArticleQuery {
    pub table: String,
    pub order_column: String,
    pub descending: bool,
    pub limit: usize,
}

impl ArticleQuery {
    /// 公開日時の降順で最新3件を取得するクエリ
    pub fn latest<T: Into<String>>(table: T) -> Self {
        Self {
            table: table.into(),
            order_column: PUBLISHED_AT_COLUMN.to_string(),
            descending: true,
            limit: LATEST_LIMIT,
        }
    }

    /// PostgREST形式の並び順指定（例: `published_at.desc`）
    pub fn order_param(&self) -> String {
        let direction = if self.descending { "desc" } else { "asc" };
        format!("{}.{}", self.order_column, direction)
    }
}

impl Default for ArticleQuery {
    fn default() -> Self {
        Self::latest(crate::types::config::DEFAULT_TABLE)
    }
}
