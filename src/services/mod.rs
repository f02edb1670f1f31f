//! Capa de servicios: reglas de negocio

pub mod usuarios;
