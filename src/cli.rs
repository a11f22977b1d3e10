use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "film-grade")]
#[command(about = "カメラ補正 + フィルムルックをGeminiで写真に適用するツール", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// 詳細ログを出力
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// プリセット一覧を表示
    Presets,

    /// 送信されるプロンプトを表示
    Prompt {
        /// カメラプロファイルID
        #[arg(short, long)]
        camera: Option<String>,

        /// フィルムルックID
        #[arg(short, long)]
        film: Option<String>,
    },

    /// 画像にグレーディングを適用
    Grade {
        /// 入力画像ファイル
        #[arg(required = true)]
        input: PathBuf,

        /// カメラプロファイルID（デフォルト: generic-srgb）
        #[arg(short, long)]
        camera: Option<String>,

        /// フィルムルックID（デフォルト: kodak-portra-400）
        #[arg(short, long)]
        film: Option<String>,

        /// 出力ファイル（デフォルト: 入力フォルダ/<名前>_<フィルムID>.<拡張子>）
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// プリセットを対話的に選択
        #[arg(short, long)]
        interactive: bool,
    },

    /// 設定を表示/編集
    Config {
        /// APIキーを設定
        #[arg(long)]
        set_api_key: Option<String>,

        /// モデル名を設定
        #[arg(long)]
        set_model: Option<String>,

        /// 設定を表示
        #[arg(long)]
        show: bool,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_grade() {
        let cli = Cli::parse_from([
            "film-grade", "grade", "in.jpg", "--camera", "sony-slog3", "--film", "fuji-velvia-50", "-o", "out.jpg",
        ]);
        match cli.command {
            Commands::Grade { input, camera, film, output, interactive } => {
                assert_eq!(input, PathBuf::from("in.jpg"));
                assert_eq!(camera.as_deref(), Some("sony-slog3"));
                assert_eq!(film.as_deref(), Some("fuji-velvia-50"));
                assert_eq!(output, Some(PathBuf::from("out.jpg")));
                assert!(!interactive);
            }
            _ => panic!("expected grade command"),
        }
    }

    #[test]
    fn test_verbose_is_global() {
        let cli = Cli::parse_from(["film-grade", "presets", "-v"]);
        assert!(cli.verbose);
    }
}
