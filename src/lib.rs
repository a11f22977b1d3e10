//! film-grade CLI ライブラリ
//!
//! ローカル画像ファイルにカメラ補正 + フィルムルックを適用する

pub mod cli;
pub mod client;
pub mod config;
pub mod error;
pub mod image_file;
pub mod picker;
