//! PDF生成（WASM版）
//!
//! html2canvasでプレビューをラスタライズし、Rust側でA4 PDFに組んでダウンロードする。

use crate::export::js_bindings::{
    capture_element_js, decode_data_url, download_pdf_js, js_error_message, CaptureOptions,
};
use medcert_common::export::{export_certificate, FileSink, Rasterizer};
use medcert_common::{CertificateForm, EditorConfig, Error, Result};

/// プレビュー要素をhtml2canvasでPNGにする
pub struct ElementRasterizer<'a> {
    pub element: &'a web_sys::HtmlElement,
}

impl Rasterizer for ElementRasterizer<'_> {
    async fn rasterize(&self, scale: f32) -> Result<Vec<u8>> {
        let options = serde_wasm_bindgen::to_value(&CaptureOptions::with_scale(scale))
            .map_err(|e| Error::Rasterize(format!("Options serialization failed: {}", e)))?;

        let data_url = capture_element_js(self.element, options)
            .await
            .map_err(|e| Error::Rasterize(js_error_message(&e)))?
            .as_string()
            .ok_or_else(|| Error::Rasterize("data URLが返りませんでした".into()))?;

        decode_data_url(&data_url)
    }
}

/// Blobにしてブラウザのダウンロードに渡す
pub struct BlobDownload;

impl FileSink for BlobDownload {
    fn save(&self, bytes: &[u8], filename: &str) -> Result<()> {
        download_pdf_js(bytes, filename).map_err(|e| Error::Download(js_error_message(&e)))
    }
}

/// プレビューをPDFに書き出してダウンロードする
///
/// どこかで失敗した場合はダウンロードせずにエラーを返す。
/// 成功時はファイル名を返す。
pub async fn export_pdf(
    element: &web_sys::HtmlElement,
    form: &CertificateForm,
    config: &EditorConfig,
) -> Result<String> {
    export_certificate(&ElementRasterizer { element }, &BlobDownload, form, config).await
}
