//! Parse service client

pub mod parse_pdf;
