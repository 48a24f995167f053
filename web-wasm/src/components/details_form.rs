//! 患者情報入力フォームコンポーネント
//!
//! 各コントロールのname属性をキーにして1フィールドずつ更新する。

use leptos::prelude::*;
use medcert_common::{CertificateForm, EditorState, SEX_OPTIONS};
use wasm_bindgen::JsCast;
use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};

/// イベント発生元コントロールの (name, value)
fn control_name_value(ev: &web_sys::Event) -> Option<(String, String)> {
    let target = ev.target()?;
    if let Some(input) = target.dyn_ref::<HtmlInputElement>() {
        return Some((input.name(), input.value()));
    }
    if let Some(select) = target.dyn_ref::<HtmlSelectElement>() {
        return Some((select.name(), select.value()));
    }
    if let Some(area) = target.dyn_ref::<HtmlTextAreaElement>() {
        return Some((area.name(), area.value()));
    }
    None
}

#[component]
pub fn DetailsForm(
    state: RwSignal<EditorState>,
    form: Memo<CertificateForm>,
) -> impl IntoView {
    let on_change = move |ev: web_sys::Event| {
        let Some((name, value)) = control_name_value(&ev) else {
            return;
        };
        if let Some(next) = state.with_untracked(|s| s.with_change(&name, &value)) {
            state.set(next);
        }
    };

    view! {
        <div class="details-form">
            <div class="form-grid">
                <input
                    name="name"
                    placeholder="Patient Name"
                    prop:value=move || form.with(|f| f.name.clone())
                    on:input=on_change
                />
                <input
                    name="purpose"
                    placeholder="Purpose of Certificate"
                    prop:value=move || form.with(|f| f.purpose.clone())
                    on:input=on_change
                />
                <input
                    type="number"
                    name="age"
                    placeholder="Age"
                    prop:value=move || form.with(|f| f.age.clone())
                    on:input=on_change
                />
                <select
                    name="sex"
                    prop:value=move || form.with(|f| f.sex.clone())
                    on:change=on_change
                >
                    <option value="">"Select Sex"</option>
                    {SEX_OPTIONS
                        .iter()
                        .map(|sex| view! { <option value=*sex>{*sex}</option> })
                        .collect_view()}
                </select>
            </div>

            <textarea
                name="symptoms"
                class="short"
                placeholder="Symptoms"
                prop:value=move || form.with(|f| f.symptoms.clone())
                on:input=on_change
            />
            <textarea
                name="diagnosis"
                class="short"
                placeholder="Diagnosis"
                prop:value=move || form.with(|f| f.diagnosis.clone())
                on:input=on_change
            />

            <div class="date-grid">
                <div class="form-group">
                    <label for="start-date">"From Date"</label>
                    <input
                        type="date"
                        id="start-date"
                        name="startDate"
                        prop:value=move || form.with(|f| f.start_date.clone())
                        on:change=on_change
                    />
                </div>
                <div class="form-group">
                    <label for="end-date">"To Date"</label>
                    <input
                        type="date"
                        id="end-date"
                        name="endDate"
                        prop:value=move || form.with(|f| f.end_date.clone())
                        on:change=on_change
                    />
                </div>
            </div>

            <textarea
                name="body"
                class="tall"
                placeholder="Additional medical advice or body text..."
                prop:value=move || form.with(|f| f.body.clone())
                on:input=on_change
            />
        </div>
    }
}
