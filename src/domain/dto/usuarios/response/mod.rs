//! DTOs de respuesta del dominio de usuarios

pub mod api_response;
pub mod usuario_response;

pub use api_response::ApiResponse;
pub use usuario_response::UsuarioResponse;
