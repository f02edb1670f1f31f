//! Generación de la ficha PDF

pub mod generator;

pub use generator::GeneradorPdf;
