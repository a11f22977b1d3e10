use thiserror::Error;

#[derive(Error, Debug)]
pub enum FilmGradeError {
    #[error("設定エラー: {0}")]
    Config(String),

    #[error("APIキーが設定されていません。`film-grade config --set-api-key YOUR_KEY` で設定するか GEMINI_API_KEY を指定してください")]
    MissingApiKey,

    #[error("ファイルが見つかりません: {0}")]
    FileNotFound(String),

    #[error("画像ではありません: {0}")]
    NotAnImage(String),

    #[error("JSON解析エラー: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("IOエラー: {0}")]
    Io(#[from] std::io::Error),

    #[error("対話入力エラー: {0}")]
    Prompt(#[from] dialoguer::Error),

    #[error("{0}")]
    Grade(#[from] film_grade_common::Error),

    #[error("{0}")]
    GradeFailed(String),
}

pub type Result<T> = std::result::Result<T, FilmGradeError>;
