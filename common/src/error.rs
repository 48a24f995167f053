//! エラー型定義

use thiserror::Error;

/// 共通エラー型
///
/// どのエラーも発生した操作だけを中断し、フォーム状態には触れない。
#[derive(Error, Debug)]
pub enum Error {
    #[error("OCR error: {0}")]
    Ocr(String),

    #[error("Rasterize error: {0}")]
    Rasterize(String),

    #[error("PDF error: {0}")]
    Pdf(String),

    #[error("Clipboard error: {0}")]
    Clipboard(String),

    #[error("Download error: {0}")]
    Download(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Config error: {0}")]
    Config(String),
}

/// Result型エイリアス
pub type Result<T> = std::result::Result<T, Error>;
