//! 画面状態の通しシナリオ
//!
//! 画像選択 → 解析 → 結果/エラー → クリア をモックサーバ相手に実行

use serde_json::json;
use snapchef::client::GeminiClient;
use snapchef::session::{self, available_actions, SessionAction};
use snapchef_common::{macro_tiles, numbered_steps, Phase, ViewState};
use std::fs;
use tempfile::tempdir;

const ENDPOINT: &str = "/models/gemini-3-flash-preview:generateContent";

const JPEG_BYTES: &[u8] = &[0xFF, 0xD8, 0xFF, 0xE0, 0, 0x10, b'J', b'F', b'I', b'F', 0, 1];

fn salad_response() -> String {
    let result = json!({
        "identifiedIngredients": ["lettuce", "tomato"],
        "nutritionalEstimate": "~150 kcal",
        "suggestedRecipe": {
            "title": "Garden Salad",
            "description": "Fresh and light",
            "ingredients": ["lettuce", "tomato", "olive oil"],
            "instructions": ["Chop vegetables", "Toss with oil"],
            "macros": {"calories": "150", "protein": "3g", "fat": "7g", "carbs": "12g"}
        }
    });
    json!({"candidates": [{"content": {"parts": [{"text": result.to_string()}]}}]}).to_string()
}

fn select_salad(state: &mut ViewState) -> tempfile::TempDir {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("salad.jpg");
    fs::write(&path, JPEG_BYTES).unwrap();
    session::select_image(state, &path).expect("画像選択失敗");
    dir
}

/// シナリオA: salad.jpg を解析して結果を表示
#[tokio::test]
async fn test_scenario_salad_result() {
    let mut server = mockito::Server::new_async().await;
    let _m = server
        .mock("POST", ENDPOINT)
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(salad_response())
        .create_async()
        .await;

    let mut state = ViewState::default();
    let _dir = select_salad(&mut state);
    assert_eq!(state.phase(), Phase::ImageSelected);
    assert!(state.result().is_none());
    assert!(state.error().is_none());

    let client = GeminiClient::new("test-key", "gemini-3-flash-preview").with_base_url(server.url());
    assert!(session::run_analysis(&mut state, &client).await);

    assert_eq!(state.phase(), Phase::Resulted);
    assert!(!state.is_loading());
    let result = state.result().expect("結果がない");

    // 食材タグ2つ
    assert_eq!(result.identified_ingredients, vec!["lettuce", "tomato"]);

    // 栄養素タイル4枚
    let tiles = macro_tiles(&result.suggested_recipe.macros);
    let values: Vec<_> = tiles.iter().map(|t| t.value).collect();
    assert_eq!(values, vec!["150", "3g", "12g", "7g"]);

    // 手順2つ（順序どおり）
    assert_eq!(
        numbered_steps(&result.suggested_recipe),
        vec![(1, "Chop vegetables"), (2, "Toss with oil")]
    );

    // 結果表示中は解析ボタンを出さない
    assert!(!available_actions(&state).contains(&SessionAction::Analyze));
}

/// シナリオB: 通信失敗 → ローディング解除・エラー表示・再試行可能
#[tokio::test]
async fn test_scenario_network_failure_allows_retry() {
    let mut state = ViewState::default();
    let _dir = select_salad(&mut state);

    let client = GeminiClient::new("test-key", "gemini-3-flash-preview").with_base_url("http://127.0.0.1:9");
    assert!(session::run_analysis(&mut state, &client).await);

    assert!(!state.is_loading());
    assert_eq!(state.phase(), Phase::ImageSelected);
    let message = state.error().expect("エラーメッセージがない");
    assert!(!message.trim().is_empty());
    assert!(state.image().is_some());
    assert!(state.can_analyze());
    assert_eq!(available_actions(&state)[0], SessionAction::Analyze);
}

/// シナリオC: 結果表示中にクリア → 結果・エラーなし、アップロードに戻る
#[tokio::test]
async fn test_scenario_clear_after_result() {
    let mut server = mockito::Server::new_async().await;
    let _m = server
        .mock("POST", ENDPOINT)
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(salad_response())
        .create_async()
        .await;

    let mut state = ViewState::default();
    let _dir = select_salad(&mut state);
    let client = GeminiClient::new("test-key", "gemini-3-flash-preview").with_base_url(server.url());
    session::run_analysis(&mut state, &client).await;
    assert_eq!(state.phase(), Phase::Resulted);

    state.clear_image();
    assert!(state.result().is_none());
    assert!(state.error().is_none());
    assert!(state.image().is_none());
    assert_eq!(
        available_actions(&state),
        vec![SessionAction::SelectImage, SessionAction::Quit]
    );
}

/// APIキー未設定は解析失敗として表示される
#[tokio::test]
async fn test_missing_api_key_surfaces_as_error() {
    let mut state = ViewState::default();
    let _dir = select_salad(&mut state);

    let client = GeminiClient::new("", "gemini-3-flash-preview").with_base_url("http://127.0.0.1:9");
    session::run_analysis(&mut state, &client).await;

    assert!(state.error().unwrap().contains("API key"));
}
