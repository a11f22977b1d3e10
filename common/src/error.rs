//! エラー型定義

use thiserror::Error;

/// 共通エラー型
#[derive(Error, Debug)]
pub enum Error {
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Base64 decode error: {0}")]
    Base64(#[from] base64::DecodeError),

    #[error("Invalid data URL")]
    InvalidDataUrl,

    #[error("Please upload an image first.")]
    NoImageUploaded,

    #[error("The AI model did not return an image. Please try a different look or image.")]
    NoImageProduced,

    #[error("Unknown camera profile: {0}")]
    UnknownCamera(String),

    #[error("Unknown film look: {0}")]
    UnknownFilm(String),

    #[error("Presets cannot be changed while a grade is in progress")]
    Busy,

    #[error("A grade is already in progress")]
    AlreadyGrading,

    #[error("{0}")]
    Api(String),
}

/// Result型エイリアス
pub type Result<T> = std::result::Result<T, Error>;
