//! Result actions: JSON download and share

pub mod download;
pub mod js_bindings;
pub mod share;
