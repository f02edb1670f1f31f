//! Handlers HTTP de la API

pub mod usuarios;
