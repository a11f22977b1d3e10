//! 画像データのBase64 / Data URL変換
//!
//! 送信時は `data:` プレフィックスを除いたBase64本体のみを使い、
//! 表示用には元のMIMEタイプで Data URL を組み立て直す。

use base64::{engine::general_purpose::STANDARD, Engine as _};
use crate::error::{Error, Result};

/// MIMEタイプ不明時のデフォルト
pub const DEFAULT_MIME_TYPE: &str = "image/jpeg";

pub fn encode_base64(bytes: &[u8]) -> String {
    STANDARD.encode(bytes)
}

pub fn decode_base64(payload: &str) -> Result<Vec<u8>> {
    Ok(STANDARD.decode(payload.trim())?)
}

/// MIMEタイプとBase64本体から Data URL を生成
pub fn to_data_url(mime_type: &str, base64_payload: &str) -> String {
    format!("data:{};base64,{}", mime_type, base64_payload)
}

/// Data URLからBase64データ部分を抽出
///
/// # Arguments
/// * `data_url` - "data:image/jpeg;base64,/9j/4AAQ..." 形式のData URL
///
/// # Returns
/// Base64エンコードされたデータ部分、または抽出失敗時はNone
pub fn extract_base64_from_data_url(data_url: &str) -> Option<&str> {
    let (header, payload) = data_url.split_once(',')?;
    if !header.starts_with("data:") || !header.ends_with(";base64") {
        return None;
    }
    Some(payload)
}

/// Data URLからMIMEタイプを抽出
///
/// 抽出失敗時は "image/jpeg" を返す
pub fn extract_mime_type_from_data_url(data_url: &str) -> &str {
    data_url
        .strip_prefix("data:")
        .and_then(|s| s.split([';', ',']).next())
        .filter(|s| !s.is_empty())
        .unwrap_or(DEFAULT_MIME_TYPE)
}

/// Data URLを (MIMEタイプ, バイト列) に分解
pub fn split_data_url(data_url: &str) -> Result<(String, Vec<u8>)> {
    let payload = extract_base64_from_data_url(data_url).ok_or(Error::InvalidDataUrl)?;
    let mime_type = extract_mime_type_from_data_url(data_url).to_string();
    Ok((mime_type, decode_base64(payload)?))
}
