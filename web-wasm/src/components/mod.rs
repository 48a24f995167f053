//! UIコンポーネント

pub mod certificate_preview;
pub mod details_form;
pub mod export_buttons;
pub mod header;
pub mod upload_area;
