//! Utilidades transversales

pub mod string_utils;
