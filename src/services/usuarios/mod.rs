//! Servicios del dominio de usuarios

pub mod usuario_service;

pub use usuario_service::UsuarioService;
