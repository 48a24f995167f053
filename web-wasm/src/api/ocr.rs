//! tesseract.js 連携
//!
//! 選択された画像ファイルをJavaScript側のtesseract.jsへ渡して文字認識する。

use crate::export::js_bindings::{js_error_message, recognize_text_js};
use medcert_common::{Error, OcrEngine, Result};

/// tesseract.jsによるOCRエンジン
#[derive(Debug, Clone, Copy, Default)]
pub struct TesseractEngine;

impl OcrEngine for TesseractEngine {
    type Image = web_sys::File;

    async fn recognize(&self, image: web_sys::File, language: &str) -> Result<String> {
        log::debug!("OCR start: {} ({} bytes)", image.name(), image.size());
        let value = recognize_text_js(&image, language)
            .await
            .map_err(|e| Error::Ocr(js_error_message(&e)))?;
        value
            .as_string()
            .ok_or_else(|| Error::Ocr("認識結果が文字列ではありません".into()))
    }
}
