pub mod control_panel;
pub mod error_banner;
pub mod header;
pub mod image_viewer;
pub mod settings_panel;
pub mod upload_area;
