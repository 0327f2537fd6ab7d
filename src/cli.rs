use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "snapchef")]
#[command(about = "食材写真から食材・栄養・レシピをAIで提案", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// 詳細ログを出力
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// 写真を1枚解析して結果を表示
    Analyze {
        /// 画像ファイルのパス
        #[arg(required = true)]
        image: PathBuf,

        /// 整形せずJSONで出力
        #[arg(long)]
        json: bool,

        /// 使用するモデル（デフォルト: 設定ファイルの値）
        #[arg(short, long)]
        model: Option<String>,
    },

    /// 対話式で画像選択・解析・クリアを繰り返す
    Session {
        /// 使用するモデル（デフォルト: 設定ファイルの値）
        #[arg(short, long)]
        model: Option<String>,
    },

    /// 設定管理
    Config {
        /// APIキーを設定
        #[arg(long)]
        set_api_key: Option<String>,

        /// 現在の設定を表示
        #[arg(long)]
        show: bool,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_analyze() {
        let cli = Cli::try_parse_from(["snapchef", "analyze", "salad.jpg", "--json"]).unwrap();
        match cli.command {
            Commands::Analyze { image, json, model } => {
                assert_eq!(image, PathBuf::from("salad.jpg"));
                assert!(json);
                assert!(model.is_none());
            }
            _ => panic!("Expected Analyze"),
        }
    }

    #[test]
    fn test_parse_analyze_requires_image() {
        assert!(Cli::try_parse_from(["snapchef", "analyze"]).is_err());
    }

    #[test]
    fn test_parse_global_verbose() {
        let cli = Cli::try_parse_from(["snapchef", "session", "-v"]).unwrap();
        assert!(cli.verbose);
        assert!(matches!(cli.command, Commands::Session { model: None }));
    }

    #[test]
    fn test_parse_config() {
        let cli = Cli::try_parse_from(["snapchef", "config", "--set-api-key", "abc", "--show"]).unwrap();
        match cli.command {
            Commands::Config { set_api_key, show } => {
                assert_eq!(set_api_key.as_deref(), Some("abc"));
                assert!(show);
            }
            _ => panic!("Expected Config"),
        }
    }
}
