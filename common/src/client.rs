//! リモート画像編集クライアントの境界
//!
//! CLI(reqwest) と Web(fetch) がそれぞれ実装する。

use crate::error::Result;

/// 画像編集リクエスト
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditRequest {
    /// `data:` プレフィックスを含まないBase64本体
    pub image_base64: String,
    pub mime_type: String,
    pub prompt: String,
}

/// 画像編集APIの応答
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditOutcome {
    /// 編集済み画像（Base64本体）
    Image { data: String, mime_type: Option<String> },
    /// 画像が返らなかった（説明テキストがあれば保持）
    NoImage { text: Option<String> },
}

/// 画像編集APIクライアント
///
/// ブラウザ側のFutureは `Send` ではないため境界を付けない。
#[allow(async_fn_in_trait)]
pub trait EditClient {
    async fn edit(&self, request: &EditRequest) -> Result<EditOutcome>;
}
