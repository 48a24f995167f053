//! フォーム状態コントローラ
//!
//! 入力イベント1回につき1フィールドだけを差し替える。
//! 検証・整形・型変換は行わない。

use crate::types::{CertificateForm, FormField};

/// エディタ全体の状態（トップレベルコンポーネントが所有）
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EditorState {
    pub form: CertificateForm,
    /// OCR実行中フラグ
    pub loading: bool,
}

impl EditorState {
    /// フォームの変更イベントを適用した新しい状態（未知の名前ならNone）
    pub fn with_change(&self, name: &str, value: &str) -> Option<Self> {
        let form = apply_change(&self.form, name, value)?;
        Some(Self {
            form,
            loading: self.loading,
        })
    }

    /// OCR結果で本文だけを差し替える
    pub fn with_body(&self, body: impl Into<String>) -> Self {
        Self {
            form: self.form.with_field(FormField::Body, body),
            loading: self.loading,
        }
    }

    pub fn with_loading(&self, loading: bool) -> Self {
        Self {
            form: self.form.clone(),
            loading,
        }
    }
}

/// 変更イベントを適用する
///
/// `name` はコントロールのname属性。未知の名前ならNoneを返し、状態は変えない。
pub fn apply_change(form: &CertificateForm, name: &str, value: &str) -> Option<CertificateForm> {
    let field = FormField::from_name(name)?;
    log::debug!("form change: {}", field.as_str());
    Some(form.with_field(field, value))
}

/// 一連の変更イベントをまとめて適用する（未知の名前は読み飛ばす）
pub fn apply_changes<'a, I>(form: &CertificateForm, events: I) -> CertificateForm
where
    I: IntoIterator<Item = (&'a str, &'a str)>,
{
    events.into_iter().fold(form.clone(), |acc, (name, value)| {
        apply_change(&acc, name, value).unwrap_or(acc)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_apply_change_replaces_one_field() {
        let form = CertificateForm {
            name: "Jane".to_string(),
            diagnosis: "Flu".to_string(),
            ..Default::default()
        };

        let next = apply_change(&form, "diagnosis", "Migraine").expect("既知のフィールド");
        assert_eq!(next.diagnosis, "Migraine");
        assert_eq!(next.name, "Jane");
        assert_eq!(form.diagnosis, "Flu");
    }

    #[test]
    fn test_apply_change_unknown_name() {
        let form = CertificateForm::default();
        assert!(apply_change(&form, "doctor", "x").is_none());
    }

    #[test]
    fn test_age_is_not_coerced() {
        let form = CertificateForm::default();
        let next = apply_change(&form, "age", "  042 ").expect("既知のフィールド");
        assert_eq!(next.age, "  042 ");

        let next = apply_change(&next, "age", "forty").expect("既知のフィールド");
        assert_eq!(next.age, "forty");
    }

    #[test]
    fn test_apply_changes_last_write_wins() {
        let form = CertificateForm::default();
        let events = [
            ("name", "J"),
            ("symptoms", "fever"),
            ("name", "Ja"),
            ("unknown", "ignored"),
            ("name", "Jane"),
            ("symptoms", "fever, cough"),
            ("sex", "Female"),
            ("sex", ""),
        ];

        let result = apply_changes(&form, events);
        assert_eq!(result.name, "Jane");
        assert_eq!(result.symptoms, "fever, cough");
        assert_eq!(result.sex, "");
        assert_eq!(result.purpose, "");
    }

    #[test]
    fn test_editor_state_with_change_keeps_loading() {
        let state = EditorState::default().with_loading(true);
        let next = state.with_change("name", "Jane").expect("既知のフィールド");
        assert!(next.loading);
        assert_eq!(next.form.name, "Jane");
        assert_eq!(state.form.name, "");

        assert!(state.with_change("doctor", "x").is_none());
    }

    #[test]
    fn test_editor_state_with_body_only_touches_body() {
        let state = EditorState::default()
            .with_change("diagnosis", "Flu")
            .expect("既知のフィールド");
        let next = state.with_body("Rest for 3 days.").with_loading(false);
        assert_eq!(next.form.body, "Rest for 3 days.");
        assert_eq!(next.form.diagnosis, "Flu");
        assert!(!next.loading);
    }

    #[test]
    fn test_editor_state_default() {
        let state = EditorState::default();
        assert!(!state.loading);
        assert_eq!(state.form, CertificateForm::default());
    }
}
