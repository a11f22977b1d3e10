use clap::Parser;
use film_grade::{cli, client, config, error, image_file, picker};
use film_grade_common::{GradeController, CAMERA_PROFILES, FILM_LOOKS};
use cli::{Cli, Commands};
use config::Config;
use error::{FilmGradeError, Result};
use indicatif::ProgressBar;
use std::time::Duration;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .format_timestamp_millis()
        .init();

    let config = Config::load()?;

    match cli.command {
        Commands::Presets => {
            println!("カメラプロファイル:");
            for profile in CAMERA_PROFILES {
                println!("  {:<16} {}", profile.id, profile.name);
            }
            println!("\nフィルムルック:");
            for look in FILM_LOOKS {
                println!("  {:<24} {}", look.id, look.name);
            }
        }

        Commands::Prompt { camera, film } => {
            let mut controller = GradeController::new();
            if let Some(id) = camera {
                controller.select_camera(&id)?;
            }
            if let Some(id) = film {
                controller.select_film(&id)?;
            }
            println!("{}", controller.prompt());
        }

        Commands::Grade { input, camera, film, output, interactive } => {
            println!("🎞  film-grade - グレーディング\n");

            let client = client::GeminiClient::from_config(&config)?;
            let mut controller = GradeController::new();

            // 1. 画像読み込み
            println!("[1/3] 画像を読み込み中...");
            let image = image_file::load_image(&input)?;
            println!("✔ {} ({}, {} bytes)\n", image.file_name(), image.mime_type(), image.bytes().len());
            controller.upload_image(image);

            // 2. プリセット選択
            if let Some(id) = camera {
                controller.select_camera(&id)?;
            }
            if let Some(id) = film {
                controller.select_film(&id)?;
            }
            if interactive {
                let camera = picker::pick_profile("カメラプロファイル", CAMERA_PROFILES, controller.selected_camera())?;
                controller.select_camera(camera.id)?;
                let film = picker::pick_profile("フィルムルック", FILM_LOOKS, controller.selected_film())?;
                controller.select_film(film.id)?;
            }

            // 3. Gemini呼び出し
            println!(
                "[2/3] グレーディング中... ({} → {}, {})",
                controller.selected_camera().name,
                controller.selected_film().name,
                client.model()
            );
            let spinner = ProgressBar::new_spinner();
            spinner.set_message("Gemini 応答待ち");
            spinner.enable_steady_tick(Duration::from_millis(120));
            let outcome = controller.apply_grade(&client).await;
            spinner.finish_and_clear();

            if let Err(e) = outcome {
                let message = controller
                    .error_message()
                    .map(str::to_string)
                    .unwrap_or_else(|| e.to_string());
                return Err(FilmGradeError::GradeFailed(message));
            }
            println!("✔ グレーディング完了\n");

            // 4. 保存
            println!("[3/3] 結果を保存中...");
            let output = output
                .unwrap_or_else(|| image_file::default_output_path(&input, controller.selected_film().id));
            let result = controller
                .grade_result()
                .ok_or_else(|| FilmGradeError::GradeFailed("結果がありません".into()))?;
            image_file::write_result(&output, result)?;
            println!("✔ 結果を保存: {}", output.display());

            println!("\n✅ 完了");
        }

        Commands::Config { set_api_key, set_model, show } => {
            let mut config = config;

            if let Some(key) = set_api_key {
                config.set_api_key(key)?;
                println!("✔ APIキーを設定しました");
            }

            if let Some(model) = set_model {
                config.set_model(model)?;
                println!("✔ モデルを設定しました");
            }

            if show {
                println!("設定:");
                println!("  パス: {}", Config::config_path()?.display());
                println!("  モデル: {}", config.model);
                println!("  APIベースURL: {}", config.api_base);
                println!("  APIキー: {}", if config.get_api_key().is_ok() { "設定済み" } else { "未設定" });
            }
        }
    }

    Ok(())
}
