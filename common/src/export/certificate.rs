//! 診断書PDFの書き出し手順
//!
//! ラスタライズ → PDF組版 → 保存。どの段階で失敗しても保存は呼ばない。

use super::pdf_core::{build_certificate_pdf, pdf_file_name, PdfPagePlan};
use crate::config::EditorConfig;
use crate::error::Result;
use crate::types::CertificateForm;

/// プレビューをPNGにする
#[allow(async_fn_in_trait)]
pub trait Rasterizer {
    async fn rasterize(&self, scale: f32) -> Result<Vec<u8>>;
}

/// 出来上がったPDFの保存先
pub trait FileSink {
    fn save(&self, bytes: &[u8], filename: &str) -> Result<()>;
}

/// プレビューをA4 1ページのPDFにして保存し、ファイル名を返す
pub async fn export_certificate<R, S>(
    rasterizer: &R,
    sink: &S,
    form: &CertificateForm,
    config: &EditorConfig,
) -> Result<String>
where
    R: Rasterizer,
    S: FileSink,
{
    let png = rasterizer.rasterize(config.raster_scale).await?;
    let pdf = build_certificate_pdf(&png, &PdfPagePlan::a4_full_page())?;
    let filename = pdf_file_name(&form.name, &config.file_name_fallback);

    sink.save(&pdf, &filename)?;
    log::info!("certificate exported: {} ({} bytes)", filename, pdf.len());
    Ok(filename)
}
