//! エディタ設定
//!
//! JSONから読み込む。欠けているキーはデフォルト値で埋める。

use crate::error::{Error, Result};
use crate::ocr::OcrFailurePolicy;
use serde::{Deserialize, Serialize};

/// OCRの言語ヒント
pub const OCR_LANGUAGE: &str = "eng";

/// 印刷品質のためのラスタライズ倍率
pub const RASTER_SCALE: f32 = 3.0;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorConfig {
    pub ocr_language: String,
    pub ocr_failure_policy: OcrFailurePolicy,
    /// 抽出成功時にも通知する（Alertポリシー時のみ）
    pub notify_on_success: bool,
    pub raster_scale: f32,
    pub letterhead_url: String,
    pub place: String,
    pub signatory_label: String,
    pub organisation: String,
    /// 患者名が空のときのファイル名トークン
    pub file_name_fallback: String,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            ocr_language: OCR_LANGUAGE.into(),
            ocr_failure_policy: OcrFailurePolicy::Alert,
            notify_on_success: true,
            raster_scale: RASTER_SCALE,
            letterhead_url: "/letterhead.svg".into(),
            place: "Dwarka, Delhi".into(),
            signatory_label: "Authorized Signatory".into(),
            organisation: "Easy My Care (EMC) Private Limited".into(),
            file_name_fallback: "Patient".into(),
        }
    }
}

impl EditorConfig {
    pub fn from_json(content: &str) -> Result<Self> {
        let config: EditorConfig = serde_json::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        if !(self.raster_scale.is_finite() && self.raster_scale > 0.0) {
            return Err(Error::Config(format!(
                "raster_scale must be positive: {}",
                self.raster_scale
            )));
        }
        if self.ocr_language.trim().is_empty() {
            return Err(Error::Config("ocr_language is empty".into()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = EditorConfig::default();
        assert_eq!(config.ocr_language, "eng");
        assert_eq!(config.ocr_failure_policy, OcrFailurePolicy::Alert);
        assert!((config.raster_scale - 3.0).abs() < f32::EPSILON);
        assert_eq!(config.file_name_fallback, "Patient");
    }

    #[test]
    fn test_from_json_partial() {
        let json = r#"{ "ocr_failure_policy": "silent_log", "place": "Pune" }"#;
        let config = EditorConfig::from_json(json).expect("設定読み込み失敗");
        assert_eq!(config.ocr_failure_policy, OcrFailurePolicy::SilentLog);
        assert_eq!(config.place, "Pune");
        assert_eq!(config.signatory_label, "Authorized Signatory");
    }

    #[test]
    fn test_from_json_rejects_bad_scale() {
        let err = EditorConfig::from_json(r#"{ "raster_scale": 0 }"#).unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }

    #[test]
    fn test_from_json_invalid() {
        let err = EditorConfig::from_json("{ not json").unwrap_err();
        assert!(matches!(err, Error::Json(_)));
    }
}
