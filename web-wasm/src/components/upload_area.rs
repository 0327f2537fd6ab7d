//! アップロードエリアコンポーネント
//!
//! 画像がなければファイル選択、あればプレビューとクリアボタンを表示

use leptos::prelude::*;
use wasm_bindgen::prelude::*;
use web_sys::{File, FileReader, HtmlInputElement};
use snapchef_common::{EncodedImage, ViewState};

#[component]
pub fn UploadArea<F, FC>(
    state: ReadSignal<ViewState>,
    on_image_selected: F,
    on_clear: FC,
) -> impl IntoView
where
    F: Fn(EncodedImage) + 'static + Clone + Send + Sync,
    FC: Fn(()) + 'static + Clone + Send + Sync,
{
    let preview = Memo::new(move |_| {
        state.with(|s| s.image().map(|image| image.as_data_url().to_string()))
    });

    view! {
        {move || match preview.get() {
            None => {
                let on_image_selected = on_image_selected.clone();
                view! {
                    <label class="upload-area">
                        <div class="upload-icon">"📷"</div>
                        <span>"Upload or take a photo"</span>
                        <input
                            type="file"
                            accept="image/*"
                            class="hidden"
                            on:change=move |ev| {
                                let input = event_target::<HtmlInputElement>(&ev);
                                if let Some(file) = input.files().and_then(|files| files.get(0)) {
                                    read_image(file, on_image_selected.clone());
                                }
                                // 同じファイルを選び直しても change が発火するように
                                input.set_value("");
                            }
                        />
                    </label>
                }
                .into_any()
            }
            Some(src) => {
                let on_clear = on_clear.clone();
                view! {
                    <div class="preview">
                        <img src=src alt="Food Preview" />
                        <button
                            class="btn-clear"
                            title="Clear image"
                            on:click=move |_| on_clear(())
                        >
                            "✕"
                        </button>
                    </div>
                }
                .into_any()
            }
        }}
    }
}

/// FileReaderでData URLに変換
///
/// 読み込み失敗はブラウザ側のエラーとしてコンソールに出すだけ
fn read_image<F>(file: File, on_loaded: F)
where
    F: Fn(EncodedImage) + 'static,
{
    let reader = match FileReader::new() {
        Ok(reader) => reader,
        Err(e) => {
            gloo::console::error!(e);
            return;
        }
    };

    let reader_clone = reader.clone();
    let onload = Closure::wrap(Box::new(move |_: web_sys::ProgressEvent| {
        if let Ok(result) = reader_clone.result() {
            if let Some(data_url) = result.as_string() {
                on_loaded(EncodedImage::from_data_url(data_url));
            }
        }
    }) as Box<dyn FnMut(_)>);

    let file_name = file.name();
    let onerror = Closure::wrap(Box::new(move |_: web_sys::ProgressEvent| {
        gloo::console::error!(format!("failed to read {}", file_name));
    }) as Box<dyn FnMut(_)>);

    reader.set_onload(Some(onload.as_ref().unchecked_ref()));
    reader.set_onerror(Some(onerror.as_ref().unchecked_ref()));
    onload.forget();
    onerror.forget();

    if let Err(e) = reader.read_as_data_url(&file) {
        gloo::console::error!(e);
    }
}
