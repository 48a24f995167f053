//! 診断書プレビューの投影
//!
//! フォーム状態から表示用の値を組み立てる純粋関数。
//! 空のフィールドはプレースホルダに置き換え、印刷物に空白が出ないようにする。
//! 日付と場所（フッター）はフォーム状態に含めず、描画のたびに計算する。

use crate::config::EditorConfig;
use crate::types::{CertificateForm, FormField};
use chrono::NaiveDate;

pub const TITLE: &str = "MEDICAL CERTIFICATE";
pub const SALUTATION: &str = "To Whom It May Concern,";
pub const SYMPTOMS_LABEL: &str = "Presenting Symptoms:";
pub const DIAGNOSIS_LABEL: &str = "Clinical Diagnosis:";

/// ブラウザ外（テスト等）で使う発行日の書式（日/月/年）
pub const ISSUE_DATE_FORMAT: &str = "%d/%m/%Y";

/// フィールドごとのプレースホルダ（bodyは定義なし）
pub fn placeholder(field: FormField) -> Option<&'static str> {
    match field {
        FormField::Name => Some("__________"),
        FormField::Age | FormField::Sex => Some("___"),
        FormField::Purpose => Some("medical consultation"),
        FormField::Symptoms | FormField::Diagnosis => Some("N/A"),
        FormField::StartDate | FormField::EndDate => Some("___"),
        FormField::Body => None,
    }
}

/// 表示値を解決する（空白のみの値も未入力として扱う）
pub fn display_value(form: &CertificateForm, field: FormField) -> String {
    let raw = form.get(field);
    match placeholder(field) {
        Some(ph) if raw.trim().is_empty() => ph.to_string(),
        _ => raw.to_string(),
    }
}

/// 署名欄
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Footer {
    pub issued_on: String,
    pub place: String,
    pub signatory_label: String,
    pub organisation: String,
}

impl Footer {
    /// 現在時刻で発行日を決める（キャッシュしないこと）
    ///
    /// ブラウザではホストロケールで整形した日付を `with_issued_on` に渡す。
    pub fn now(config: &EditorConfig) -> Self {
        Self::on(chrono::Local::now().date_naive(), config)
    }

    pub fn on(date: NaiveDate, config: &EditorConfig) -> Self {
        Self::with_issued_on(date.format(ISSUE_DATE_FORMAT).to_string(), config)
    }

    /// 整形済みの発行日をそのまま使う
    pub fn with_issued_on(issued_on: impl Into<String>, config: &EditorConfig) -> Self {
        Self {
            issued_on: issued_on.into(),
            place: config.place.clone(),
            signatory_label: config.signatory_label.clone(),
            organisation: config.organisation.clone(),
        }
    }
}

/// プレビュー1枚分の表示値
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CertificateView {
    pub name: String,
    pub age: String,
    pub sex: String,
    pub purpose: String,
    pub symptoms: String,
    pub diagnosis: String,
    pub start_date: String,
    pub end_date: String,
    pub body: String,
    pub footer: Footer,
}

impl CertificateView {
    pub fn project(form: &CertificateForm, footer: Footer) -> Self {
        Self {
            name: display_value(form, FormField::Name),
            age: display_value(form, FormField::Age),
            sex: display_value(form, FormField::Sex),
            purpose: display_value(form, FormField::Purpose),
            symptoms: display_value(form, FormField::Symptoms),
            diagnosis: display_value(form, FormField::Diagnosis),
            start_date: display_value(form, FormField::StartDate),
            end_date: display_value(form, FormField::EndDate),
            body: form.body.clone(),
            footer,
        }
    }

    pub fn certify_sentence(&self) -> String {
        format!(
            "This is to certify that {}, aged {} years, {}, was under my medical supervision for the purpose of {}.",
            self.name, self.age, self.sex, self.purpose
        )
    }

    pub fn leave_sentence(&self) -> String {
        format!(
            "Based on the clinical examination, the patient is/was advised rest and medical leave from {} to {}.",
            self.start_date, self.end_date
        )
    }

    /// テキストとして描画（診断・テスト用）
    pub fn to_plain_text(&self) -> String {
        let mut lines = vec![
            TITLE.to_string(),
            SALUTATION.to_string(),
            self.certify_sentence(),
            format!("{} {}", SYMPTOMS_LABEL, self.symptoms),
            format!("{} {}", DIAGNOSIS_LABEL, self.diagnosis),
            self.leave_sentence(),
        ];
        if !self.body.is_empty() {
            lines.push(self.body.clone());
        }
        lines.push(format!("Date: {}", self.footer.issued_on));
        lines.push(format!("Place: {}", self.footer.place));
        lines.push(self.footer.signatory_label.clone());
        lines.push(self.footer.organisation.clone());
        lines.join("\n")
    }
}
