//! Capa de acceso a datos

pub mod usuarios;
