//! 診断書プレビューコンポーネント
//!
//! レターヘッド画像をA4サイズのコンテナ全面に敷き、本文を重ねる。
//! フォームが変わるたびに発行日も含めて丸ごと再計算する。
//! 発行日はブラウザのロケールで整形する。

use leptos::html::Div;
use leptos::prelude::*;
use medcert_common::preview::{DIAGNOSIS_LABEL, SALUTATION, SYMPTOMS_LABEL, TITLE};
use medcert_common::{CertificateForm, CertificateLayout, CertificateView, EditorConfig, Footer};
use wasm_bindgen::JsValue;

/// 今日の日付（ホストロケール書式）
fn locale_today() -> String {
    js_sys::Date::new_0()
        .to_locale_date_string("default", &JsValue::UNDEFINED)
        .into()
}

#[component]
pub fn CertificatePreview(
    form: Memo<CertificateForm>,
    config: StoredValue<EditorConfig>,
    preview_ref: NodeRef<Div>,
) -> impl IntoView {
    let layout = CertificateLayout::a4();
    let letterhead = config.with_value(|c| c.letterhead_url.clone());

    let content = move || {
        let footer = config.with_value(|c| Footer::with_issued_on(locale_today(), c));
        let view_model = CertificateView::project(&form.get(), footer);
        let footer = view_model.footer.clone();

        view! {
            <h1 class="certificate-title">{TITLE}</h1>

            <div class="certificate-body">
                <p class="salutation">{SALUTATION}</p>

                <p>
                    "This is to certify that "<strong>{view_model.name.clone()}</strong>", aged "
                    <strong>{view_model.age.clone()}</strong>" years, "
                    <strong>{view_model.sex.clone()}</strong>
                    ", was under my medical supervision for the purpose of "
                    <strong>{view_model.purpose.clone()}</strong>"."
                </p>

                <div class="clinical-notes">
                    <p><strong>{SYMPTOMS_LABEL}</strong>" "{view_model.symptoms.clone()}</p>
                    <p><strong>{DIAGNOSIS_LABEL}</strong>" "{view_model.diagnosis.clone()}</p>
                </div>

                <p>
                    "Based on the clinical examination, the patient is/was advised rest and medical leave from "
                    <span class="date-blank">{view_model.start_date.clone()}</span>
                    " to "
                    <span class="date-blank">{view_model.end_date.clone()}</span>"."
                </p>

                <div class="advice">{view_model.body.clone()}</div>
            </div>

            <div class="signature-row">
                <div class="issue-stamp">
                    <p>{format!("Date: {}", footer.issued_on)}</p>
                    <p>{format!("Place: {}", footer.place)}</p>
                </div>
                <div class="signatory">
                    <div class="stamp-space"></div>
                    <p class="signatory-label">{footer.signatory_label}</p>
                    <p class="organisation">{footer.organisation}</p>
                </div>
            </div>
        }
    };

    view! {
        <div class="preview-panel">
            <div class="certificate-container" node_ref=preview_ref style=layout.page_style()>
                <img src=letterhead class="letterhead" alt="Letterhead" />
                <div class="certificate-content" style=layout.content_style()>
                    {content}
                </div>
            </div>
        </div>
    }
}
