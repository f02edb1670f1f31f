//! Sobre estándar de las respuestas JSON
//!
//! Todas las respuestas de la API viajan con la misma forma:
//! `{"success": ..., "message": ..., "data": ..., "error": ...}`, omitiendo
//! los campos ausentes. Los errores generan el mismo sobre desde
//! [`crate::errors::AppError`].

use serde::Serialize;

/// Respuesta estándar de la API
#[derive(Debug, Serialize)]
pub struct ApiResponse<T: Serialize> {
    /// Indica si la operación terminó bien
    pub success: bool,
    /// Mensaje descriptivo de la operación
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    /// Carga útil de la respuesta
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    /// Descripción del error cuando `success` es falso
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl<T: Serialize> ApiResponse<T> {
    /// Construye una respuesta exitosa con mensaje y datos.
    pub fn exito(mensaje: impl Into<String>, data: T) -> Self {
        Self {
            success: true,
            message: Some(mensaje.into()),
            data: Some(data),
            error: None,
        }
    }
}

impl ApiResponse<()> {
    /// Construye una respuesta exitosa sin carga útil.
    pub fn mensaje(mensaje: impl Into<String>) -> Self {
        Self {
            success: true,
            message: Some(mensaje.into()),
            data: None,
            error: None,
        }
    }

    /// Construye una respuesta de error con el mensaje indicado.
    pub fn error(mensaje: impl Into<String>) -> Self {
        Self {
            success: false,
            message: None,
            data: None,
            error: Some(mensaje.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exito_omite_campo_error() {
        let respuesta = ApiResponse::exito("Usuario encontrado", serde_json::json!({"dni": "45879632"}));
        let json = serde_json::to_value(&respuesta).unwrap();

        assert_eq!(json["success"], true);
        assert_eq!(json["message"], "Usuario encontrado");
        assert_eq!(json["data"]["dni"], "45879632");
        assert!(json.get("error").is_none());
    }

    #[test]
    fn test_error_omite_datos() {
        let respuesta = ApiResponse::error("Usuario no encontrado");
        let json = serde_json::to_value(&respuesta).unwrap();

        assert_eq!(json["success"], false);
        assert_eq!(json["error"], "Usuario no encontrado");
        assert!(json.get("data").is_none());
        assert!(json.get("message").is_none());
    }
}
