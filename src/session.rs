//! 対話式セッション
//!
//! Web画面と同じ ViewState を端末上で操作する。
//! 各状態で実行できる操作だけをメニューに出す。

use crate::client::GeminiClient;
use crate::error::Result;
use crate::loader;
use crate::render;
use dialoguer::{Input, Select};
use indicatif::ProgressBar;
use log::{error, info};
use snapchef_common::{failure_message, Phase, ViewState};
use std::path::Path;
use std::time::Duration;

/// メニュー操作
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionAction {
    /// 画像を選択
    SelectImage,
    /// 解析開始
    Analyze,
    /// 結果を再表示
    ShowResult,
    /// 画像をクリア
    ClearImage,
    /// 終了
    Quit,
}

impl SessionAction {
    pub fn label(&self) -> &'static str {
        match self {
            SessionAction::SelectImage => "Upload or take a photo",
            SessionAction::Analyze => "Analyze Ingredients",
            SessionAction::ShowResult => "Show recipe",
            SessionAction::ClearImage => "Clear image",
            SessionAction::Quit => "Quit",
        }
    }
}

/// 現在の状態で選べる操作
pub fn available_actions(state: &ViewState) -> Vec<SessionAction> {
    use SessionAction::*;
    match state.phase() {
        Phase::Idle => vec![SelectImage, Quit],
        Phase::ImageSelected => vec![Analyze, SelectImage, ClearImage, Quit],
        Phase::Analyzing => vec![SelectImage, ClearImage, Quit],
        Phase::Resulted => vec![ShowResult, SelectImage, ClearImage, Quit],
    }
}

/// 画像ファイルを選択状態にする
///
/// 読み込みに失敗した場合は状態を変えずにエラーを返す
pub fn select_image(state: &mut ViewState, path: &Path) -> Result<()> {
    let image = loader::load_image(path)?;
    state.select_image(image);
    Ok(())
}

/// 解析を1回実行して結果を状態に反映
///
/// # Returns
/// リクエストを送った場合 true（画像がない・結果表示中なら何もしない）
pub async fn run_analysis(state: &mut ViewState, client: &GeminiClient) -> bool {
    let Some(ticket) = state.begin_analysis() else {
        return false;
    };

    let spinner = ProgressBar::new_spinner();
    spinner.set_message("Cooking up ideas...");
    spinner.enable_steady_tick(Duration::from_millis(100));

    let outcome = client.analyze(&ticket.image).await.map_err(|e| {
        error!("{}", e);
        failure_message(&e)
    });

    spinner.finish_and_clear();
    state.finish_analysis(ticket, outcome);
    true
}

/// 対話ループ
pub async fn run_interactive(client: &GeminiClient) -> Result<()> {
    let mut state = ViewState::default();

    println!("🍳 What's in your fridge?");
    println!("Snap a photo of your ingredients or leftovers and let AI suggest your next favorite meal.\n");

    loop {
        let actions = available_actions(&state);
        let labels: Vec<&str> = actions.iter().map(|a| a.label()).collect();
        let choice = Select::new()
            .with_prompt(format!("[{}]", state.phase().as_str()))
            .items(&labels)
            .default(0)
            .interact()?;

        match actions[choice] {
            SessionAction::SelectImage => {
                let path: String = Input::new().with_prompt("画像ファイル").interact_text()?;
                match select_image(&mut state, Path::new(path.trim())) {
                    Ok(()) => info!("画像を選択しました: {}", path.trim()),
                    Err(e) => println!("{}", render::error_banner(&e.to_string())),
                }
            }
            SessionAction::Analyze => {
                run_analysis(&mut state, client).await;
                print_outcome(&state);
            }
            SessionAction::ShowResult => print_outcome(&state),
            SessionAction::ClearImage => {
                state.clear_image();
                println!("✔ 画像をクリアしました\n");
            }
            SessionAction::Quit => break,
        }
    }

    Ok(())
}

fn print_outcome(state: &ViewState) {
    if let Some(message) = state.error() {
        println!("{}", render::error_banner(message));
    }
    if let Some(result) = state.result() {
        println!("{}", render::render_result(result));
    }
}
