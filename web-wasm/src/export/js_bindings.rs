//! JavaScript Bridge バインディング
//!
//! Rust WASM から JavaScript 関数を呼び出すためのバインディング定義。
//! OCR（tesseract.js）とラスタライズ（html2canvas）、ダウンロード、
//! クリップボードをJavaScript側に委譲する際に使用。

use base64::{engine::general_purpose::STANDARD, Engine as _};
use medcert_common::{Error, Result};
use serde::Serialize;
use wasm_bindgen::prelude::*;

// ============================================
// データ型定義
// ============================================

/// html2canvasに渡すオプション
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CaptureOptions {
    pub scale: f32,
    #[serde(rename = "useCORS")]
    pub use_cors: bool,
    pub logging: bool,
    pub background_color: String,
}

impl CaptureOptions {
    pub fn with_scale(scale: f32) -> Self {
        Self {
            scale,
            use_cors: true,
            logging: false,
            background_color: "#ffffff".to_string(),
        }
    }
}

// ============================================
// JavaScript関数のextern宣言
// ============================================

#[wasm_bindgen(module = "/js/ocr-bridge.js")]
extern "C" {
    /// 画像ファイルから文字を認識
    ///
    /// # Returns
    /// 認識したプレーンテキスト
    #[wasm_bindgen(js_name = "recognizeText", catch)]
    pub async fn recognize_text_js(file: &web_sys::File, lang: &str) -> std::result::Result<JsValue, JsValue>;
}

#[wasm_bindgen(module = "/js/capture-bridge.js")]
extern "C" {
    /// 要素をPNG data URLにラスタライズ
    #[wasm_bindgen(js_name = "captureElement", catch)]
    pub async fn capture_element_js(
        element: &web_sys::HtmlElement,
        options: JsValue,
    ) -> std::result::Result<JsValue, JsValue>;
}

#[wasm_bindgen(module = "/js/download.js")]
extern "C" {
    /// PDFをダウンロード
    #[wasm_bindgen(js_name = "downloadPdf", catch)]
    pub fn download_pdf_js(data: &[u8], filename: &str) -> std::result::Result<(), JsValue>;
}

#[wasm_bindgen(module = "/js/clipboard-bridge.js")]
extern "C" {
    /// テキストをクリップボードへ書き込み（API未対応ならreject）
    #[wasm_bindgen(js_name = "copyText", catch)]
    pub async fn copy_text_js(text: &str) -> std::result::Result<JsValue, JsValue>;
}

// ============================================
// ヘルパー関数
// ============================================

/// JavaScriptのエラー値を文字列にする
pub fn js_error_message(value: &JsValue) -> String {
    if let Some(s) = value.as_string() {
        return s;
    }
    if let Some(err) = value.dyn_ref::<js_sys::Error>() {
        return String::from(err.message());
    }
    format!("{:?}", value)
}

/// PNG data URLからバイト列を取り出す
pub fn decode_data_url(data_url: &str) -> Result<Vec<u8>> {
    let (header, payload) = data_url
        .split_once(',')
        .ok_or_else(|| Error::Rasterize("data URLではありません".into()))?;
    if !header.starts_with("data:") || !header.ends_with(";base64") {
        return Err(Error::Rasterize(format!("未対応のdata URL: {}", header)));
    }
    // 空キャンバスは "data:," になる
    if payload.is_empty() {
        return Err(Error::Rasterize("空のキャンバス".into()));
    }
    STANDARD
        .decode(payload)
        .map_err(|e| Error::Rasterize(format!("Base64デコード失敗: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capture_options_serialize() {
        let options = CaptureOptions::with_scale(3.0);
        let json = serde_json::to_string(&options).expect("シリアライズ失敗");

        assert!(json.contains("\"scale\":3.0"));
        assert!(json.contains("\"useCORS\":true"));
        assert!(json.contains("\"logging\":false"));
        assert!(json.contains("\"backgroundColor\":\"#ffffff\""));
    }

    #[test]
    fn test_decode_data_url() {
        let bytes = decode_data_url("data:image/png;base64,iVBORw0KGgo=").expect("デコード失敗");
        assert_eq!(&bytes[1..4], b"PNG");
    }

    #[test]
    fn test_decode_data_url_errors() {
        assert!(matches!(decode_data_url("no comma"), Err(Error::Rasterize(_))));
        assert!(matches!(decode_data_url("data:,"), Err(Error::Rasterize(_))));
        assert!(matches!(decode_data_url("data:image/png;base64,"), Err(Error::Rasterize(_))));
        assert!(matches!(decode_data_url("data:image/png;base64,@@@"), Err(Error::Rasterize(_))));
    }
}

#[cfg(all(target_arch = "wasm32", test))]
mod wasm_tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn wasm_capture_options_to_js_value() {
        let value = serde_wasm_bindgen::to_value(&CaptureOptions::with_scale(3.0)).expect("変換失敗");
        let scale = js_sys::Reflect::get(&value, &JsValue::from_str("scale")).expect("scaleなし");
        assert_eq!(scale.as_f64(), Some(3.0));
    }

    #[wasm_bindgen_test]
    fn wasm_js_error_message() {
        let err = js_sys::Error::new("tainted canvas");
        assert_eq!(js_error_message(&err.into()), "tainted canvas");
    }
}
