pub mod loader;
pub mod model;
pub mod presenter;

// 公開APIの再エクスポート

// model.rsから
pub use model::{
    parse_published_at, ArticleId, ArticleQuery, ArticleRecord, Category, LATEST_LIMIT,
    PUBLISHED_AT_COLUMN,
};

// loader.rsから
pub use loader::{load_articles, load_view_state, settle, Activation, ViewState};

// presenter.rsから
pub use presenter::{
    format_published_date, partition, resolve_image, ArticleCard, BlogView, Partition,
    DEFAULT_IMAGES, DEFAULT_LINK,
};
