//! エクスポートボタンコンポーネント

use leptos::prelude::*;

#[component]
pub fn ExportButtons<FP, FR, FW, FE, FC>(
    exporting: ReadSignal<bool>,
    on_export_pdf: FP,
    on_print: FR,
    on_whatsapp: FW,
    on_email: FE,
    on_copy: FC,
) -> impl IntoView
where
    FP: Fn(()) + 'static + Clone,
    FR: Fn(()) + 'static + Clone,
    FW: Fn(()) + 'static + Clone,
    FE: Fn(()) + 'static + Clone,
    FC: Fn(()) + 'static + Clone,
{
    view! {
        <div class="export-buttons">
            <button
                class="btn btn-primary"
                disabled=move || exporting.get()
                on:click={
                    let on_export_pdf = on_export_pdf.clone();
                    move |_| on_export_pdf(())
                }
            >
                {move || if exporting.get() { "Exporting..." } else { "Download PDF" }}
            </button>

            <button
                class="btn btn-secondary"
                on:click={
                    let on_print = on_print.clone();
                    move |_| on_print(())
                }
            >
                "Print"
            </button>

            <button
                class="btn btn-whatsapp"
                on:click={
                    let on_whatsapp = on_whatsapp.clone();
                    move |_| on_whatsapp(())
                }
            >
                "WhatsApp"
            </button>

            <button
                class="btn btn-secondary"
                on:click={
                    let on_email = on_email.clone();
                    move |_| on_email(())
                }
            >
                "Email"
            </button>

            <button
                class="btn btn-tertiary"
                on:click={
                    let on_copy = on_copy.clone();
                    move |_| on_copy(())
                }
            >
                "Copy"
            </button>
        </div>
    }
}
