//! ブラウザ上で実行するテスト（wasm-pack test --headless --firefox）

#![cfg(target_arch = "wasm32")]

use snapchef_common::{EncodedImage, Error};
use snapchef_wasm::api::gemini::analyze_image;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

#[wasm_bindgen_test]
async fn analyze_without_api_key_fails_before_fetch() {
    let image = EncodedImage::from_data_url("data:image/jpeg;base64,/9j/4AAQ");
    let err = analyze_image("", &image).await.unwrap_err();
    assert!(matches!(err, Error::MissingApiKey));
}

#[wasm_bindgen_test]
async fn analyze_with_invalid_key_surfaces_error() {
    let image = EncodedImage::from_data_url("data:image/jpeg;base64,/9j/4AAQ");
    let err = analyze_image("invalid-key", &image).await.unwrap_err();
    assert!(!err.to_string().is_empty());
}
