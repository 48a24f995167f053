//! Medical Certificate Editor Common Library
//!
//! Web(WASM)とテストで共有される型とユーティリティ

pub mod types;
pub mod layout;
pub mod error;
pub mod config;
pub mod form;
pub mod ocr;
pub mod preview;
pub mod share;
pub mod export;

pub use types::{CertificateForm, FormField, SEX_OPTIONS};
pub use layout::CertificateLayout;
pub use error::{Error, Result};
pub use config::EditorConfig;
pub use form::{apply_change, apply_changes, EditorState};
pub use ocr::{extract_body, EditorSink, OcrEngine, OcrFailurePolicy, OcrOutcome};
pub use preview::{CertificateView, Footer};
pub use export::{pdf_file_name, PdfPagePlan};
