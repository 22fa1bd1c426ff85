//! Boundary encodings: CSV input records and JSON Lines output.

pub mod csv;
pub mod json;
