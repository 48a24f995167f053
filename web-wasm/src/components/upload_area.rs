//! OCRアップロードエリアコンポーネント

use leptos::prelude::*;
use web_sys::{File, HtmlInputElement};

#[component]
pub fn UploadArea<F>(
    loading: Memo<bool>,
    on_file_selected: F,
) -> impl IntoView
where
    F: Fn(Option<File>) + 'static + Clone,
{
    // 先頭の1ファイルのみ。キャンセル時はNoneを渡す
    let on_change = move |ev: web_sys::Event| {
        let input: HtmlInputElement = event_target(&ev);
        let file = input.files().and_then(|files| files.get(0));
        on_file_selected(file);
    };

    view! {
        <div class="upload-area" class:loading=move || loading.get()>
            <label class="upload-label">
                <span class="upload-icon">
                    {move || if loading.get() { "⏳" } else { "📄" }}
                </span>
                <span class="upload-text">
                    {move || if loading.get() { "Extracting text..." } else { "Upload Prescription for OCR" }}
                </span>
                <input
                    type="file"
                    class="hidden"
                    accept="image/*"
                    disabled=move || loading.get()
                    on:change=on_change
                />
            </label>
        </div>
    }
}
