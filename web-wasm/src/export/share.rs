//! 共有・印刷（ブラウザAPI）
//!
//! 印刷と共有インテントはブラウザ側の失敗をログに残すだけにする。

use crate::export::js_bindings::{copy_text_js, js_error_message};
use medcert_common::share::{clipboard_payload, mailto_url, whatsapp_url};
use medcert_common::{CertificateForm, Error, Result};

/// ネイティブの印刷ダイアログを開く
pub fn print_page() {
    if let Err(e) = gloo::utils::window().print() {
        log::warn!("print failed: {}", js_error_message(&e));
    }
}

/// WhatsAppの共有インテントを新しいタブで開く
pub fn open_whatsapp(form: &CertificateForm) {
    let url = whatsapp_url(form);
    match gloo::utils::window().open_with_url_and_target(&url, "_blank") {
        Ok(Some(_)) => {}
        Ok(None) => log::warn!("share window was blocked"),
        Err(e) => log::warn!("share failed: {}", js_error_message(&e)),
    }
}

/// メールクライアントを開く
pub fn open_email(form: &CertificateForm) {
    let url = mailto_url(form);
    if let Err(e) = gloo::utils::window().location().set_href(&url) {
        log::warn!("mailto failed: {}", js_error_message(&e));
    }
}

/// 本文（body）だけをクリップボードへコピー
pub async fn copy_body(form: &CertificateForm) -> Result<()> {
    copy_text_js(clipboard_payload(form))
        .await
        .map(|_| ())
        .map_err(|e| Error::Clipboard(js_error_message(&e)))
}
