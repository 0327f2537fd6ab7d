//! Gemini API連携（fetch）
//!
//! リクエストの組み立てとレスポンスのパースは snapchef_common と共通。
//! ここではブラウザの fetch で1回だけ送信する。

use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, RequestMode, Response};
use snapchef_common::gemini::{
    api_error_message, generate_content_url, API_KEY_HEADER, GEMINI_API_BASE,
};
use snapchef_common::{
    build_analysis_request, parse_gemini_response, AnalysisResult, EncodedImage, Error,
    GeminiRequest, GeminiResponse, DEFAULT_MODEL,
};

/// JS側の例外からメッセージを取り出す
fn js_message(value: &JsValue) -> String {
    if let Some(err) = value.dyn_ref::<js_sys::Error>() {
        return String::from(err.message());
    }
    value.as_string().unwrap_or_else(|| format!("{:?}", value))
}

fn network_error(value: JsValue) -> Error {
    Error::Network(js_message(&value))
}

/// Gemini API呼び出し
async fn call_gemini_api(api_key: &str, request: &GeminiRequest) -> Result<GeminiResponse, Error> {
    let url = generate_content_url(GEMINI_API_BASE, DEFAULT_MODEL);
    let body = serde_json::to_string(request)?;

    let opts = RequestInit::new();
    opts.set_method("POST");
    opts.set_mode(RequestMode::Cors);
    opts.set_body(&JsValue::from_str(&body));

    let request = Request::new_with_str_and_init(&url, &opts).map_err(network_error)?;
    let headers = request.headers();
    headers.set("Content-Type", "application/json").map_err(network_error)?;
    headers.set(API_KEY_HEADER, api_key).map_err(network_error)?;

    let window = web_sys::window().ok_or_else(|| Error::Network("window is not available".into()))?;
    let resp_value = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(network_error)?;
    let resp: Response = resp_value.dyn_into().map_err(network_error)?;

    if !resp.ok() {
        let status = resp.status();
        let text = match resp.text() {
            Ok(promise) => JsFuture::from(promise)
                .await
                .ok()
                .and_then(|v| v.as_string())
                .unwrap_or_default(),
            Err(_) => String::new(),
        };
        return Err(Error::Api {
            status,
            message: api_error_message(status, &text),
        });
    }

    let json = JsFuture::from(resp.json().map_err(network_error)?)
        .await
        .map_err(|e| Error::Parse(js_message(&e)))?;

    serde_wasm_bindgen::from_value(json).map_err(|e| Error::Parse(e.to_string()))
}

/// 写真を解析
///
/// APIキーが空ならリクエストを送らずに `MissingApiKey`
pub async fn analyze_image(api_key: &str, image: &EncodedImage) -> Result<AnalysisResult, Error> {
    if api_key.is_empty() {
        return Err(Error::MissingApiKey);
    }

    let request = build_analysis_request(image);
    let response = call_gemini_api(api_key, &request).await?;
    parse_gemini_response(&response)
}
