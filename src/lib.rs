//! 公開サイトのブログ欄に載せる最新記事を、ホスティングされた記事テーブルから取得し、
//! 描画用のビューに整形するライブラリ。

pub mod app;
pub mod domain;
pub mod infra;
pub mod types;
