//! Export core modules shared across WASM wrappers and tests.

#[cfg(feature = "pdf")]
pub mod certificate;
pub mod pdf_core;

pub use pdf_core::{pdf_file_name, ImagePlacement, Orientation, PdfPagePlan};

#[cfg(feature = "pdf")]
pub use certificate::{export_certificate, FileSink, Rasterizer};
#[cfg(feature = "pdf")]
pub use pdf_core::build_certificate_pdf;
