//! DTO de búsqueda y listado de usuarios
//!
//! Parámetros de query de `GET /api/v1/usuarios`: con `id` o `dni` la
//! consulta devuelve una ficha; sin ellos, el listado con límite opcional.

use serde::Deserialize;

/// Parámetros de consulta del endpoint de usuarios
#[derive(Debug, Clone, Default, Deserialize)]
pub struct BusquedaUsuarioQuery {
    /// Identificador del documento
    pub id: Option<String>,
    /// Documento nacional de identidad
    pub dni: Option<String>,
    /// Máximo de fichas a devolver en el listado
    pub limite: Option<i64>,
}
