use clap::Parser;
use log::warn;
use snapchef::{cli, client, config, error, loader, render, session};
use snapchef_common::ViewState;
use cli::{Cli, Commands};
use client::GeminiClient;
use config::Config;
use error::{Result, SnapChefError};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .format_timestamp(None)
        .init();

    let config = Config::load()?;

    match cli.command {
        Commands::Analyze { image, json, model } => {
            println!("📸 snapchef - 食材解析\n");

            // 1. 画像読み込み
            println!("[1/2] 画像を読み込み中...");
            let mut state = ViewState::default();
            state.select_image(loader::load_image(&image)?);
            println!("✔ {}\n", image.display());

            // 2. 解析
            println!("[2/2] AI解析中...");
            let client = build_client(&config, model);
            session::run_analysis(&mut state, &client).await;

            if let Some(message) = state.error() {
                println!("{}", render::error_banner(message));
                return Err(SnapChefError::ApiCall(message.to_string()));
            }

            if let Some(result) = state.result() {
                if json {
                    println!("{}", serde_json::to_string_pretty(result)?);
                } else {
                    println!("{}", render::render_result(result));
                }
            }
        }

        Commands::Session { model } => {
            let client = build_client(&config, model);
            session::run_interactive(&client).await?;
        }

        Commands::Config { set_api_key, show } => {
            let mut config = config;

            if let Some(key) = set_api_key {
                config.set_api_key(key)?;
                println!("✔ APIキーを設定しました");
            }

            if show {
                println!("設定:");
                println!("  モデル: {}", config.model);
                println!("  APIキー: {}", if config.get_api_key().is_ok() { "設定済み" } else { "未設定" });
                println!("  設定ファイル: {}", Config::config_path()?.display());
            }
        }
    }

    Ok(())
}

/// APIキー未設定でも起動はする（解析のたびに失敗として表示される）
fn build_client(config: &Config, model: Option<String>) -> GeminiClient {
    let api_key = config.get_api_key().unwrap_or_else(|e| {
        warn!("{}", e);
        String::new()
    });
    GeminiClient::new(api_key, model.unwrap_or_else(|| config.model.clone()))
}
