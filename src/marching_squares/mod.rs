// src/marching_squares/mod.rs

pub mod cases;
pub mod extractor;

pub use cases::{CASE_TABLE, Edge, cell_case};
pub use extractor::{IsolineIter, MarchingSquares};
