pub mod file;

pub use file::FileArticleStore;
