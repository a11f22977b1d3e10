//! 対話式プリセット選択

use crate::error::Result;
use dialoguer::Select;
use film_grade_common::Profile;

/// カタログから1件選択（初期カーソルは現在の選択）
pub fn pick_profile(title: &str, catalog: &'static [Profile], current: &Profile) -> Result<&'static Profile> {
    let labels: Vec<String> = catalog
        .iter()
        .map(|p| format!("{} ({})", p.name, p.id))
        .collect();
    let default = catalog.iter().position(|p| p.id == current.id).unwrap_or(0);

    let index = Select::new()
        .with_prompt(title)
        .items(&labels)
        .default(default)
        .interact()?;

    Ok(&catalog[index])
}
