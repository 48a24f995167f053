//! 診断書フォームの型定義
//!
//! Web(WASM)とテストで共有される型:
//! - CertificateForm: 入力フォームの全フィールド
//! - FormField: 入力コントロールのname属性に対応するキー

use serde::{Deserialize, Serialize};

/// 性別セレクトの選択肢（空文字は未選択）
pub const SEX_OPTIONS: [&str; 3] = ["Male", "Female", "Other"];

/// 診断書フォーム
///
/// すべて文字列のまま保持する（年齢も数値変換しない）。
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CertificateForm {
    pub purpose: String,        // 診断書の目的
    pub name: String,           // 患者名
    pub age: String,            // 年齢
    pub sex: String,            // 性別
    pub symptoms: String,       // 症状
    pub diagnosis: String,      // 診断
    pub start_date: String,     // 休養開始日（ISO）
    pub end_date: String,       // 休養終了日（ISO）
    pub body: String,           // 本文（OCRで上書きされる）
}

/// フォームのフィールドキー
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormField {
    Purpose,
    Name,
    Age,
    Sex,
    Symptoms,
    Diagnosis,
    StartDate,
    EndDate,
    Body,
}

impl FormField {
    pub const ALL: [FormField; 9] = [
        FormField::Purpose,
        FormField::Name,
        FormField::Age,
        FormField::Sex,
        FormField::Symptoms,
        FormField::Diagnosis,
        FormField::StartDate,
        FormField::EndDate,
        FormField::Body,
    ];

    /// コントロールのname属性
    pub fn as_str(&self) -> &'static str {
        match self {
            FormField::Purpose => "purpose",
            FormField::Name => "name",
            FormField::Age => "age",
            FormField::Sex => "sex",
            FormField::Symptoms => "symptoms",
            FormField::Diagnosis => "diagnosis",
            FormField::StartDate => "startDate",
            FormField::EndDate => "endDate",
            FormField::Body => "body",
        }
    }

    /// name属性からフィールドを引く（未知の名前はNone）
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|f| f.as_str() == name)
    }
}

impl CertificateForm {
    pub fn get(&self, field: FormField) -> &str {
        match field {
            FormField::Purpose => &self.purpose,
            FormField::Name => &self.name,
            FormField::Age => &self.age,
            FormField::Sex => &self.sex,
            FormField::Symptoms => &self.symptoms,
            FormField::Diagnosis => &self.diagnosis,
            FormField::StartDate => &self.start_date,
            FormField::EndDate => &self.end_date,
            FormField::Body => &self.body,
        }
    }

    fn slot_mut(&mut self, field: FormField) -> &mut String {
        match field {
            FormField::Purpose => &mut self.purpose,
            FormField::Name => &mut self.name,
            FormField::Age => &mut self.age,
            FormField::Sex => &mut self.sex,
            FormField::Symptoms => &mut self.symptoms,
            FormField::Diagnosis => &mut self.diagnosis,
            FormField::StartDate => &mut self.start_date,
            FormField::EndDate => &mut self.end_date,
            FormField::Body => &mut self.body,
        }
    }

    /// 1フィールドだけ差し替えた新しいフォームを返す
    pub fn with_field(&self, field: FormField, value: impl Into<String>) -> Self {
        let mut next = self.clone();
        *next.slot_mut(field) = value.into();
        next
    }
}
