//! OCRアダプタ
//!
//! 外部の文字認識サービスを呼び出し、結果で本文（body）を丸ごと置き換える。
//! リトライ・キャンセル・進捗通知はしない。

use crate::config::EditorConfig;
use crate::error::Result;
use serde::{Deserialize, Serialize};

pub const OCR_SUCCESS_MESSAGE: &str = "Text extracted successfully!";
pub const OCR_FAILURE_MESSAGE: &str = "Could not extract text from the image.";

/// 文字認識サービスの境界
#[allow(async_fn_in_trait)]
pub trait OcrEngine {
    /// 画像ペイロード（WASMでは web_sys::File）
    type Image;

    async fn recognize(&self, image: Self::Image, language: &str) -> Result<String>;
}

/// OCRアダプタが触ってよい状態
pub trait EditorSink {
    fn set_loading(&self, loading: bool);
    fn set_body(&self, body: String);
    /// ブロッキング通知
    fn alert(&self, message: &str);
}

/// OCR失敗時の扱い
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OcrFailurePolicy {
    /// ログのみ
    SilentLog,
    /// ログ＋アラート
    #[default]
    Alert,
}

/// OCR実行結果
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OcrOutcome {
    /// ファイル未選択
    Skipped,
    /// 抽出成功（bodyに書き込んだ文字数）
    Extracted(usize),
    Failed(String),
}

/// 選択された画像からbodyを抽出する
///
/// 画像がNoneなら何もしない（loadingも切り替えない）。
/// それ以外はどの経路でも最後にloadingをfalseへ戻す。
pub async fn extract_body<E, S>(
    engine: &E,
    image: Option<E::Image>,
    sink: &S,
    config: &EditorConfig,
) -> OcrOutcome
where
    E: OcrEngine,
    S: EditorSink,
{
    let Some(image) = image else {
        return OcrOutcome::Skipped;
    };

    sink.set_loading(true);
    let outcome = match engine.recognize(image, &config.ocr_language).await {
        Ok(text) => {
            let chars = text.chars().count();
            log::info!("OCR extracted {} chars", chars);
            sink.set_body(text);
            if config.notify_on_success && config.ocr_failure_policy == OcrFailurePolicy::Alert {
                sink.alert(OCR_SUCCESS_MESSAGE);
            }
            OcrOutcome::Extracted(chars)
        }
        Err(e) => {
            log::error!("OCR Error: {}", e);
            if config.ocr_failure_policy == OcrFailurePolicy::Alert {
                sink.alert(OCR_FAILURE_MESSAGE);
            }
            OcrOutcome::Failed(e.to_string())
        }
    };
    sink.set_loading(false);

    outcome
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use futures::executor::block_on;
    use std::cell::RefCell;

    struct FixedEngine(std::result::Result<&'static str, &'static str>);

    impl OcrEngine for FixedEngine {
        type Image = Vec<u8>;

        async fn recognize(&self, _image: Vec<u8>, language: &str) -> Result<String> {
            assert_eq!(language, "eng");
            self.0.map(str::to_string).map_err(|e| Error::Ocr(e.to_string()))
        }
    }

    #[derive(Default)]
    struct Recorder {
        events: RefCell<Vec<String>>,
    }

    impl EditorSink for Recorder {
        fn set_loading(&self, loading: bool) {
            self.events.borrow_mut().push(format!("loading={}", loading));
        }
        fn set_body(&self, body: String) {
            self.events.borrow_mut().push(format!("body={}", body));
        }
        fn alert(&self, message: &str) {
            self.events.borrow_mut().push(format!("alert={}", message));
        }
    }

    #[test]
    fn test_extract_body_success_sequence() {
        let sink = Recorder::default();
        let config = EditorConfig::default();
        let outcome = block_on(extract_body(&FixedEngine(Ok("Rest 3 days")), Some(vec![1]), &sink, &config));

        assert_eq!(outcome, OcrOutcome::Extracted(11));
        assert_eq!(
            *sink.events.borrow(),
            vec![
                "loading=true".to_string(),
                "body=Rest 3 days".to_string(),
                format!("alert={}", OCR_SUCCESS_MESSAGE),
                "loading=false".to_string(),
            ]
        );
    }

    #[test]
    fn test_extract_body_no_file() {
        let sink = Recorder::default();
        let outcome = block_on(extract_body(&FixedEngine(Ok("x")), None, &sink, &EditorConfig::default()));
        assert_eq!(outcome, OcrOutcome::Skipped);
        assert!(sink.events.borrow().is_empty());
    }

    #[test]
    fn test_extract_body_failure_silent_log() {
        let sink = Recorder::default();
        let config = EditorConfig {
            ocr_failure_policy: OcrFailurePolicy::SilentLog,
            ..Default::default()
        };
        let outcome = block_on(extract_body(&FixedEngine(Err("bad image")), Some(vec![]), &sink, &config));

        assert!(matches!(outcome, OcrOutcome::Failed(ref m) if m.contains("bad image")));
        assert_eq!(
            *sink.events.borrow(),
            vec!["loading=true".to_string(), "loading=false".to_string()]
        );
    }

    #[test]
    fn test_extract_body_failure_alert() {
        let sink = Recorder::default();
        let outcome = block_on(extract_body(&FixedEngine(Err("bad image")), Some(vec![]), &sink, &EditorConfig::default()));

        assert!(matches!(outcome, OcrOutcome::Failed(_)));
        let events = sink.events.borrow();
        assert_eq!(events.len(), 3);
        assert_eq!(events[1], format!("alert={}", OCR_FAILURE_MESSAGE));
        assert_eq!(events[2], "loading=false");
    }

    #[test]
    fn test_success_notice_can_be_disabled() {
        let sink = Recorder::default();
        let config = EditorConfig {
            notify_on_success: false,
            ..Default::default()
        };
        block_on(extract_body(&FixedEngine(Ok("ok")), Some(vec![]), &sink, &config));
        assert!(sink.events.borrow().iter().all(|e| !e.starts_with("alert=")));
    }

    #[test]
    fn test_policy_serde() {
        let json = serde_json::to_string(&OcrFailurePolicy::SilentLog).expect("シリアライズ失敗");
        assert_eq!(json, "\"silent_log\"");
        let policy: OcrFailurePolicy = serde_json::from_str("\"alert\"").expect("デシリアライズ失敗");
        assert_eq!(policy, OcrFailurePolicy::Alert);
    }
}
