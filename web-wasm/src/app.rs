//! メインアプリケーションコンポーネント

use leptos::html::Div;
use leptos::prelude::*;
use leptos::task::spawn_local;
use medcert_common::{extract_body, EditorConfig, EditorSink, EditorState};

use crate::api::ocr::TesseractEngine;
use crate::components::{
    certificate_preview::CertificatePreview,
    details_form::DetailsForm,
    export_buttons::ExportButtons,
    header::Header,
    upload_area::UploadArea,
};
use crate::export::{pdf_wasm, share};

/// OCRアダプタにエディタ状態を書かせるシンク
#[derive(Clone, Copy)]
struct SignalSink {
    state: RwSignal<EditorState>,
}

impl EditorSink for SignalSink {
    fn set_loading(&self, loading: bool) {
        self.state.update(|s| *s = s.with_loading(loading));
    }

    fn set_body(&self, body: String) {
        self.state.update(|s| *s = s.with_body(body));
    }

    fn alert(&self, message: &str) {
        gloo::dialogs::alert(message);
    }
}

/// メインアプリケーションコンポーネント
#[component]
pub fn App() -> impl IntoView {
    let config = StoredValue::new(crate::config::load());

    // アプリケーション状態
    let state = RwSignal::new(EditorState::default());
    let form = Memo::new(move |_| state.with(|s| s.form.clone()));
    let loading = Memo::new(move |_| state.with(|s| s.loading));
    let (exporting, set_exporting) = signal(false);
    let preview_ref = NodeRef::<Div>::new();

    // OCRハンドラ
    let on_file_selected = move |file: Option<web_sys::File>| {
        let sink = SignalSink { state };
        let config: EditorConfig = config.get_value();
        spawn_local(async move {
            let outcome = extract_body(&TesseractEngine, file, &sink, &config).await;
            log::debug!("OCR outcome: {:?}", outcome);
        });
    };

    // PDF出力ハンドラ
    let on_export_pdf = move |_| {
        let Some(element) = preview_ref.get_untracked() else {
            log::warn!("preview is not mounted");
            return;
        };
        let snapshot = form.get_untracked();
        let config = config.get_value();
        set_exporting.set(true);
        spawn_local(async move {
            match pdf_wasm::export_pdf(&element, &snapshot, &config).await {
                Ok(filename) => log::info!("PDF saved: {}", filename),
                Err(e) => {
                    log::error!("PDF export failed: {}", e);
                    gloo::dialogs::alert(&format!("Could not export the PDF: {}", e));
                }
            }
            set_exporting.set(false);
        });
    };

    let on_print = move |_| share::print_page();
    let on_whatsapp = move |_| share::open_whatsapp(&form.get_untracked());
    let on_email = move |_| share::open_email(&form.get_untracked());

    let on_copy = move |_| {
        let snapshot = form.get_untracked();
        spawn_local(async move {
            if let Err(e) = share::copy_body(&snapshot).await {
                log::error!("{}", e);
                gloo::dialogs::alert("Could not copy to the clipboard.");
            }
        });
    };

    view! {
        <div class="container">
            <Header />

            <div class="editor-grid">
                <section class="input-panel">
                    <h2>"Certificate Details"</h2>
                    <UploadArea loading=loading on_file_selected=on_file_selected />
                    <DetailsForm state=state form=form />
                    <ExportButtons
                        exporting=exporting
                        on_export_pdf=on_export_pdf
                        on_print=on_print
                        on_whatsapp=on_whatsapp
                        on_email=on_email
                        on_copy=on_copy
                    />
                </section>

                <CertificatePreview form=form config=config preview_ref=preview_ref />
            </div>
        </div>
    }
}
