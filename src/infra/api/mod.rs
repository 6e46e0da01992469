pub mod store;

pub use store::{ArticleStore, MockArticleStore, RestArticleStore};
