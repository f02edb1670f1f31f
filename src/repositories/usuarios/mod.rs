//! Repositorios del dominio de usuarios

pub mod usuario_repo;

pub use usuario_repo::UsuarioRepository;
