//! VTU SGPA terminal client
//!
//! Drives the shared `UploadController` headlessly against the parse service.

pub mod cli;
pub mod client;
pub mod config;
pub mod error;
pub mod export;
pub mod pdf_input;
pub mod render;
pub mod session;
