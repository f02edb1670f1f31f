//! DTOs de petición del dominio de usuarios

pub mod busqueda_usuario;
pub mod create_usuario;

pub use busqueda_usuario::BusquedaUsuarioQuery;
pub use create_usuario::CreateUsuarioRequest;
