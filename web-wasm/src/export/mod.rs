//! エクスポート・共有

pub mod js_bindings;
pub mod pdf_wasm;
pub mod share;
