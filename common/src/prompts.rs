//! プロンプト生成モジュール
//!
//! カメラ補正 → フィルムルックの順で指示を連結する

use crate::catalog::Profile;

/// グレーディング用プロンプト生成
///
/// # Arguments
/// * `camera` - カメラ補正プロファイル
/// * `film` - フィルムルック
///
/// # Returns
/// 画像編集APIに送る指示文
pub fn compose_grade_prompt(camera: &Profile, film: &Profile) -> String {
    format!(
        "First, apply a camera correction profile to this image. {camera_prompt} \
         Then, apply a cinematic film look inspired by {film_name}. {film_prompt} \
         Keep the result realistic and high quality.",
        camera_prompt = camera.prompt,
        film_name = film.name,
        film_prompt = film.prompt,
    )
}
