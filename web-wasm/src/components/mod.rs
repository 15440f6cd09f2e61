//! UI components

pub mod api_key_field;
pub mod error_panel;
pub mod header;
pub mod loading_panel;
pub mod results_panel;
pub mod subject_table;
pub mod toast;
pub mod upload_area;
