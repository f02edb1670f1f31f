//! Objetos de transferencia de datos (DTO)
//!
//! La forma de las peticiones y respuestas HTTP, separada de la forma
//! almacenada de las entidades.

pub mod usuarios;
