//! PDF export core utilities shared by WASM and tests.
//!
//! プレビューをラスタライズしたPNGを、A4縦1ページの原点に全面配置する。

use crate::layout::{A4_HEIGHT_MM, A4_WIDTH_MM};

const FILE_NAME_PREFIX: &str = "Medical_Certificate_";

/// 用紙の向き
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    Portrait,
}

/// 画像の配置（mm単位、原点は左下）
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ImagePlacement {
    pub format: &'static str,
    pub x_mm: f32,
    pub y_mm: f32,
    pub width_mm: f32,
    pub height_mm: f32,
}

/// 1ページ分のPDF構成
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PdfPagePlan {
    pub orientation: Orientation,
    pub page_width_mm: f32,
    pub page_height_mm: f32,
    pub image: ImagePlacement,
}

impl PdfPagePlan {
    /// A4縦にビットマップを全面配置
    pub fn a4_full_page() -> Self {
        Self {
            orientation: Orientation::Portrait,
            page_width_mm: A4_WIDTH_MM,
            page_height_mm: A4_HEIGHT_MM,
            image: ImagePlacement {
                format: "PNG",
                x_mm: 0.0,
                y_mm: 0.0,
                width_mm: A4_WIDTH_MM,
                height_mm: A4_HEIGHT_MM,
            },
        }
    }

    /// 画像幅をページ幅に合わせるDPI
    pub fn dpi_for_width(&self, width_px: u32) -> f32 {
        width_px as f32 * 25.4 / self.image.width_mm
    }

    /// 幅を合わせた後、高さをページ高さに伸ばす倍率
    pub fn vertical_stretch(&self, width_px: u32, height_px: u32) -> f32 {
        let natural_height_mm = height_px as f32 * self.image.width_mm / width_px as f32;
        self.image.height_mm / natural_height_mm
    }
}

/// ダウンロードファイル名: 患者名が空ならフォールバックトークン
pub fn pdf_file_name(name: &str, fallback: &str) -> String {
    let token = if name.trim().is_empty() { fallback } else { name };
    format!("{}{}.pdf", FILE_NAME_PREFIX, token)
}

#[cfg(feature = "pdf")]
pub use self::render::build_certificate_pdf;

#[cfg(feature = "pdf")]
mod render {
    use super::PdfPagePlan;
    use crate::error::{Error, Result};
    use printpdf::image_crate::{self, DynamicImage};
    use printpdf::{Image, ImageTransform, Mm, PdfDocument};
    use std::io::BufWriter;

    /// PNGバイト列から1ページのPDFを生成する
    pub fn build_certificate_pdf(png: &[u8], plan: &PdfPagePlan) -> Result<Vec<u8>> {
        let bitmap = image_crate::load_from_memory(png)
            .map_err(|e| Error::Pdf(format!("画像デコードエラー: {}", e)))?;
        let (width_px, height_px) = (bitmap.width(), bitmap.height());
        if width_px == 0 || height_px == 0 {
            return Err(Error::Pdf("空の画像".into()));
        }
        // html2canvasは背景を白で塗るのでアルファは捨てる
        let bitmap = DynamicImage::ImageRgb8(bitmap.to_rgb8());

        let (doc, page, layer) = PdfDocument::new(
            "Medical Certificate",
            Mm(plan.page_width_mm),
            Mm(plan.page_height_mm),
            "Layer 1",
        );
        let current_layer = doc.get_page(page).get_layer(layer);

        let transform = ImageTransform {
            translate_x: Some(Mm(plan.image.x_mm)),
            translate_y: Some(Mm(plan.image.y_mm)),
            scale_x: Some(1.0),
            scale_y: Some(plan.vertical_stretch(width_px, height_px)),
            dpi: Some(plan.dpi_for_width(width_px)),
            ..Default::default()
        };
        Image::from_dynamic_image(&bitmap).add_to_layer(current_layer, transform);

        let mut buffer = Vec::new();
        {
            let mut writer = BufWriter::new(&mut buffer);
            doc.save(&mut writer)
                .map_err(|e| Error::Pdf(format!("PDF保存エラー: {:?}", e)))?;
        }
        log::debug!("PDF built: {}x{}px -> {} bytes", width_px, height_px, buffer.len());
        Ok(buffer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_a4_plan() {
        let plan = PdfPagePlan::a4_full_page();
        assert_eq!(plan.orientation, Orientation::Portrait);
        assert!((plan.page_width_mm - 210.0).abs() < 0.01);
        assert!((plan.page_height_mm - 297.0).abs() < 0.01);
        assert_eq!(plan.image.x_mm, 0.0);
        assert_eq!(plan.image.y_mm, 0.0);
        assert_eq!(plan.image.width_mm, plan.page_width_mm);
        assert_eq!(plan.image.height_mm, plan.page_height_mm);
        assert_eq!(plan.image.format, "PNG");
    }

    #[test]
    fn test_dpi_and_stretch() {
        let plan = PdfPagePlan::a4_full_page();
        // 210mm幅 × 3倍 ≒ 2480px
        let dpi = plan.dpi_for_width(2480);
        assert!((dpi - 299.96).abs() < 0.1);

        // A4比率ならほぼ伸ばさない
        let stretch = plan.vertical_stretch(2100, 2970);
        assert!((stretch - 1.0).abs() < 0.001);

        // 正方形なら縦に伸ばす
        let stretch = plan.vertical_stretch(1000, 1000);
        assert!((stretch - 297.0 / 210.0).abs() < 0.001);
    }

    #[test]
    fn test_pdf_file_name() {
        assert_eq!(pdf_file_name("Jane Doe", "Patient"), "Medical_Certificate_Jane Doe.pdf");
        assert_eq!(pdf_file_name("", "Patient"), "Medical_Certificate_Patient.pdf");
        assert_eq!(pdf_file_name("   ", "Patient"), "Medical_Certificate_Patient.pdf");
    }

    #[cfg(feature = "pdf")]
    #[test]
    fn test_build_certificate_pdf() {
        use printpdf::image_crate::{DynamicImage, ImageFormat, Rgba, RgbaImage};
        use std::io::Cursor;

        fn contains(haystack: &[u8], needle: &[u8]) -> bool {
            haystack.windows(needle.len()).any(|w| w == needle)
        }

        let bitmap = DynamicImage::ImageRgba8(RgbaImage::from_pixel(210, 297, Rgba([255, 255, 255, 255])));
        let mut png = Vec::new();
        bitmap
            .write_to(&mut Cursor::new(&mut png), ImageFormat::Png)
            .expect("PNGエンコード失敗");

        let pdf = build_certificate_pdf(&png, &PdfPagePlan::a4_full_page()).expect("PDF生成失敗");
        assert!(pdf.starts_with(b"%PDF"));
        // A4縦（595.28 x 841.89pt）が1ページだけ
        assert!(contains(&pdf, b"/Count 1"), "ページ数が1ではない");
        assert!(
            contains(&pdf, b"MediaBox[0 0 595.27563 841.88983]"),
            "用紙サイズがA4縦ではない"
        );
        assert!(!contains(&pdf, b"/Count 2"));
    }

    #[cfg(feature = "pdf")]
    #[test]
    fn test_build_certificate_pdf_rejects_garbage() {
        let err = build_certificate_pdf(b"not a png", &PdfPagePlan::a4_full_page()).unwrap_err();
        assert!(matches!(err, crate::error::Error::Pdf(_)));
    }
}
