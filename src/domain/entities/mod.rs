//! Entidades de dominio

pub mod usuarios;
