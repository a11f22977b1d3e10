//! 画像ファイルの読み込みと出力パス決定

use crate::error::{FilmGradeError, Result};
use film_grade_common::{GradeResult, UploadedImage};
use image::ImageFormat;
use std::path::{Path, PathBuf};

/// 画像ファイルを読み込み、MIMEタイプを判定
///
/// 先頭バイトで判定できなければ拡張子から推定する
pub fn load_image(path: &Path) -> Result<UploadedImage> {
    if !path.is_file() {
        return Err(FilmGradeError::FileNotFound(path.display().to_string()));
    }

    let bytes = std::fs::read(path)?;
    let format = image::guess_format(&bytes)
        .ok()
        .or_else(|| ImageFormat::from_path(path).ok())
        .ok_or_else(|| FilmGradeError::NotAnImage(path.display().to_string()))?;

    let file_name = path
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_default();

    Ok(UploadedImage::from_bytes(file_name, format.to_mime_type(), bytes))
}

/// デフォルト出力先: 入力と同じフォルダの `<stem>_<film-id>.<ext>`
pub fn default_output_path(input: &Path, film_id: &str) -> PathBuf {
    let stem = input
        .file_stem()
        .map(|s| s.to_string_lossy().to_string())
        .unwrap_or_else(|| "graded".to_string());
    let file_name = match input.extension() {
        Some(ext) => format!("{}_{}.{}", stem, film_id, ext.to_string_lossy()),
        None => format!("{}_{}", stem, film_id),
    };
    input.with_file_name(file_name)
}

/// グレーディング結果を書き出す
pub fn write_result(path: &Path, result: &GradeResult) -> Result<()> {
    let bytes = result.bytes()?;
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, bytes)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_output_path() {
        let out = default_output_path(Path::new("/photos/IMG_0001.jpg"), "fuji-velvia-50");
        assert_eq!(out, PathBuf::from("/photos/IMG_0001_fuji-velvia-50.jpg"));
    }

    #[test]
    fn test_default_output_path_without_extension() {
        let out = default_output_path(Path::new("shot"), "cinestill-800t");
        assert_eq!(out, PathBuf::from("shot_cinestill-800t"));
    }
}
