//! Input and output formats: JSON records in, space-separated report out.

pub mod csv;
pub mod json;
