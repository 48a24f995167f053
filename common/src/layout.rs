//! レイアウト設定モジュール
//!
//! プレビューとPDFで共有する用紙サイズと余白（mm単位）。

pub const A4_WIDTH_MM: f32 = 210.0;
pub const A4_HEIGHT_MM: f32 = 297.0;

/// 1mmあたりのポイント数
pub const PT_PER_MM: f32 = 72.0 / 25.4;

pub fn mm_to_pt(mm: f32) -> f32 {
    mm * PT_PER_MM
}

/// レターヘッド上の本文領域
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CertificateLayout {
    pub page_width_mm: f32,
    pub page_height_mm: f32,
    pub margin_side_mm: f32,
    pub margin_top_mm: f32,
    pub margin_bottom_mm: f32,
}

impl Default for CertificateLayout {
    fn default() -> Self {
        Self::a4()
    }
}

impl CertificateLayout {
    /// レターヘッドの比率に合わせた余白
    pub fn a4() -> Self {
        Self {
            page_width_mm: A4_WIDTH_MM,
            page_height_mm: A4_HEIGHT_MM,
            margin_side_mm: 25.0,
            margin_top_mm: 55.0,
            margin_bottom_mm: 60.0,
        }
    }

    pub fn content_width_mm(&self) -> f32 {
        self.page_width_mm - self.margin_side_mm * 2.0
    }

    pub fn content_height_mm(&self) -> f32 {
        self.page_height_mm - self.margin_top_mm - self.margin_bottom_mm
    }

    /// プレビューコンテナのインラインスタイル
    pub fn page_style(&self) -> String {
        format!(
            "width: {}mm; height: {}mm;",
            self.page_width_mm, self.page_height_mm
        )
    }

    /// 本文オーバーレイのインラインスタイル
    pub fn content_style(&self) -> String {
        format!(
            "padding: {}mm {}mm {}mm {}mm;",
            self.margin_top_mm, self.margin_side_mm, self.margin_bottom_mm, self.margin_side_mm
        )
    }
}
