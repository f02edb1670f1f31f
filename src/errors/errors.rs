//! Sistema de errores usado en toda la aplicación
//!
//! Manejo de errores unificado para el backend de fichas de personal.
//! Combina `thiserror` con `actix_web::ResponseError` para que cada error
//! de dominio se traduzca de forma consistente en una respuesta HTTP con
//! el sobre estándar `{success, error}`.
//!
//! ## Uso
//!
//! ```rust,ignore
//! use crate::errors::AppError;
//!
//! async fn crear_usuario(req: CreateUsuarioRequest) -> Result<Usuario, AppError> {
//!     if req.dni.trim().is_empty() {
//!         return Err(AppError::ValidationError("el DNI es requerido".to_string()));
//!     }
//!
//!     let usuario = repo.crear(req.to_usuario()).await
//!         .map_err(|e| AppError::DatabaseError(e.to_string()))?;
//!
//!     Ok(usuario)
//! }
//! ```

use thiserror::Error;

/// Error global de la aplicación
///
/// Enumera todas las clases de fallo que puede producir el backend.
/// Se convierte automáticamente en una respuesta HTTP con el código de
/// estado correspondiente.
#[derive(Error, Debug)]
pub enum AppError {
    /// Error de la base de datos (500 Internal Server Error)
    #[error("Error de base de datos: {0}")]
    DatabaseError(String),

    /// Error de validación de entrada (400 Bad Request)
    #[error("Error de validación: {0}")]
    ValidationError(String),

    /// Recurso no encontrado (404 Not Found)
    #[error("No encontrado: {0}")]
    NotFound(String),

    /// Error de configuración (500 Internal Server Error)
    #[error("Error de configuración: {0}")]
    ConfigError(String),

    /// Error de generación de PDF (500 Internal Server Error)
    #[error("Error generando PDF: {0}")]
    PdfError(String),

    /// Error interno del servidor (500 Internal Server Error)
    #[error("Error interno del servidor: {0}")]
    InternalError(String),
}

impl actix_web::ResponseError for AppError {
    /// Genera la respuesta HTTP de error.
    ///
    /// Cada variante se mapea a su código de estado y el mensaje viaja en
    /// el sobre estándar `{"success": false, "error": "..."}`.
    fn error_response(&self) -> actix_web::HttpResponse {
        use actix_web::http::StatusCode;

        let status = match self {
            AppError::ValidationError(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        };

        actix_web::HttpResponse::build(status)
            .json(serde_json::json!({
                "success": false,
                "error": self.to_string()
            }))
    }
}

/// Alias de Result para mayor comodidad
pub type AppResult<T> = Result<T, AppError>;

/// Trait de extensión para convertir errores de librerías externas en AppError
pub trait ErrorContext<T> {
    /// Convierte el error agregando un mensaje de contexto.
    fn context(self, msg: &str) -> AppResult<T>;

    /// Variante con contexto evaluado de forma diferida.
    fn with_context<F>(self, f: F) -> AppResult<T>
    where
        F: FnOnce() -> String;
}

impl<T, E> ErrorContext<T> for Result<T, E>
where
    E: std::fmt::Display,
{
    fn context(self, msg: &str) -> AppResult<T> {
        self.map_err(|e| AppError::InternalError(format!("{}: {}", msg, e)))
    }

    fn with_context<F>(self, f: F) -> AppResult<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| AppError::InternalError(format!("{}: {}", f(), e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::ResponseError;

    #[test]
    fn test_validation_error_response() {
        let error = AppError::ValidationError("el DNI es requerido".to_string());
        let response = error.error_response();

        assert_eq!(response.status(), actix_web::http::StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_not_found_error_response() {
        let error = AppError::NotFound("usuario no encontrado".to_string());
        let response = error.error_response();

        assert_eq!(response.status(), actix_web::http::StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_database_error_response() {
        let error = AppError::DatabaseError("conexión rechazada".to_string());
        let response = error.error_response();

        assert_eq!(
            response.status(),
            actix_web::http::StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_pdf_error_response() {
        let error = AppError::PdfError("fuente no disponible".to_string());
        let response = error.error_response();

        assert_eq!(
            response.status(),
            actix_web::http::StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_error_context_trait() {
        let result: Result<(), &str> = Err("error original");
        let app_result = result.context("contexto adicional");

        assert!(app_result.is_err());
        if let Err(AppError::InternalError(msg)) = app_result {
            assert!(msg.contains("contexto adicional"));
            assert!(msg.contains("error original"));
        } else {
            panic!("Se esperaba InternalError");
        }
    }
}
