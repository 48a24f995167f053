//! 共有インテントURLの組み立て
//!
//! WhatsApp / メール / クリップボード用のテキストを作る。
//! テキストはURLクエリに埋め込めるようパーセントエンコードする。

use crate::types::CertificateForm;

const WHATSAPP_BASE: &str = "https://wa.me/";

/// WhatsApp用の要約テキスト
pub fn whatsapp_message(form: &CertificateForm) -> String {
    format!(
        "Medical Certificate for {}\nDiagnosis: {}\nPeriod: {} to {}",
        form.name, form.diagnosis, form.start_date, form.end_date
    )
}

pub fn whatsapp_url(form: &CertificateForm) -> String {
    format!(
        "{}?text={}",
        WHATSAPP_BASE,
        urlencoding::encode(&whatsapp_message(form))
    )
}

/// メールの件名と本文
pub fn email_parts(form: &CertificateForm) -> (String, String) {
    let subject = format!("Medical Certificate - {}", form.name);
    let body = format!(
        "Please find the medical details for {}. Diagnosis: {}",
        form.name, form.diagnosis
    );
    (subject, body)
}

pub fn mailto_url(form: &CertificateForm) -> String {
    let (subject, body) = email_parts(form);
    format!(
        "mailto:?subject={}&body={}",
        urlencoding::encode(&subject),
        urlencoding::encode(&body)
    )
}

/// クリップボードへ書き込む内容（本文のみ）
pub fn clipboard_payload(form: &CertificateForm) -> &str {
    &form.body
}
