//! # Servicio de usuarios
//!
//! Reglas de negocio de la ficha de personal, entre los handlers HTTP y
//! el repositorio. Aquí viven las tres reglas del sistema:
//!
//! 1. toda entrada se valida antes de tocar la base de datos;
//! 2. el listado sin límite explícito se acota a 100 fichas;
//! 3. la actualización reemplaza la ficha completa conservando el
//!    identificador y la fecha de alta.
//!
//! El "no encontrado" se decide en esta capa: el almacén no distingue un
//! resultado vacío de un fallo, así que el servicio convierte el vacío en
//! `AppError::NotFound` y deja el resto como errores de base de datos.

use std::sync::Arc;

use log::info;
use once_cell::sync::Lazy;
use validator::Validate;

use crate::domain::dto::usuarios::request::CreateUsuarioRequest;
use crate::domain::entities::usuarios::Usuario;
use crate::errors::{AppError, AppResult};
use crate::repositories::usuarios::UsuarioRepository;

/// Tope de fichas devueltas cuando el listado no trae límite explícito
const LIMITE_LISTADO: i64 = 100;

/// Lógica de negocio de la ficha de personal
///
/// Singleton por proceso, con el repositorio inyectado una única vez a
/// través del accesor perezoso.
pub struct UsuarioService {
    /// Repositorio de acceso a datos
    repo: Arc<UsuarioRepository>,
}

static INSTANCE: Lazy<Arc<UsuarioService>> = Lazy::new(|| {
    Arc::new(UsuarioService {
        repo: UsuarioRepository::instance(),
    })
});

impl UsuarioService {
    /// Devuelve el singleton del servicio.
    pub fn instance() -> Arc<Self> {
        INSTANCE.clone()
    }

    /// Registra una ficha nueva.
    ///
    /// # Errores
    ///
    /// * `ValidationError` - nombres, apellido paterno o DNI ausentes o
    ///   de menos de 2 caracteres tras recortar espacios
    /// * `DatabaseError` - fallo de la inserción
    pub async fn crear_usuario(&self, request: CreateUsuarioRequest) -> AppResult<Usuario> {
        request
            .validate()
            .map_err(|e| AppError::ValidationError(e.to_string()))?;

        let usuario = request.to_usuario();

        let creado = self.repo.crear(usuario).await?;

        info!(
            "Usuario registrado: dni={} id={}",
            creado.dni,
            creado.id.map(|oid| oid.to_hex()).unwrap_or_default()
        );

        Ok(creado)
    }

    /// Obtiene una ficha por el identificador del documento.
    pub async fn obtener_por_id(&self, id: &str) -> AppResult<Usuario> {
        if id.trim().is_empty() {
            return Err(AppError::ValidationError(
                "el identificador es requerido".to_string(),
            ));
        }

        self.repo
            .buscar_por_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("usuario con id {} no existe", id)))
    }

    /// Obtiene una ficha por DNI.
    pub async fn obtener_por_dni(&self, dni: &str) -> AppResult<Usuario> {
        if dni.trim().is_empty() {
            return Err(AppError::ValidationError("el DNI es requerido".to_string()));
        }

        self.repo
            .buscar_por_dni(dni)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("usuario con DNI {} no existe", dni)))
    }

    /// Lista fichas por fecha de alta descendente.
    ///
    /// Sin límite explícito (o con un valor no positivo) se aplica el tope
    /// por defecto de 100 fichas.
    pub async fn listar(&self, limite: Option<i64>) -> AppResult<Vec<Usuario>> {
        self.repo.listar(limite_efectivo(limite)).await
    }

    /// Reemplaza una ficha existente.
    ///
    /// El payload sustituye todos los campos del documento; el
    /// identificador y la fecha de alta se conservan y `updated_at` queda
    /// refrescado.
    pub async fn actualizar(
        &self,
        id: &str,
        request: CreateUsuarioRequest,
    ) -> AppResult<Usuario> {
        request
            .validate()
            .map_err(|e| AppError::ValidationError(e.to_string()))?;

        let existente = self.obtener_por_id(id).await?;

        let mut reemplazo = request.to_usuario();
        reemplazo.conservar_identidad_de(&existente);

        let actualizado = self
            .repo
            .actualizar(id, &reemplazo)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("usuario con id {} no existe", id)))?;

        info!("Usuario actualizado: dni={} id={}", actualizado.dni, id);

        Ok(actualizado)
    }

    /// Elimina una ficha.
    ///
    /// # Errores
    ///
    /// * `NotFound` - el identificador no corresponde a ninguna ficha
    pub async fn eliminar(&self, id: &str) -> AppResult<()> {
        if id.trim().is_empty() {
            return Err(AppError::ValidationError(
                "el identificador es requerido".to_string(),
            ));
        }

        let eliminado = self.repo.eliminar(id).await?;

        if !eliminado {
            return Err(AppError::NotFound(format!(
                "usuario con id {} no existe",
                id
            )));
        }

        info!("Usuario eliminado: id={}", id);

        Ok(())
    }
}

/// Límite de fichas que se pide al almacén.
///
/// Los valores ausentes o no positivos caen al tope por defecto; los
/// explícitos nunca lo superan.
fn limite_efectivo(limite: Option<i64>) -> i64 {
    match limite {
        Some(valor) if valor > 0 => valor.min(LIMITE_LISTADO),
        _ => LIMITE_LISTADO,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_listado_sin_limite_usa_el_tope() {
        assert_eq!(limite_efectivo(None), 100);
    }

    #[test]
    fn test_limite_explicito_se_respeta() {
        assert_eq!(limite_efectivo(Some(20)), 20);
    }

    #[test]
    fn test_limite_excesivo_o_invalido_se_acota() {
        assert_eq!(limite_efectivo(Some(500)), 100);
        assert_eq!(limite_efectivo(Some(0)), 100);
        assert_eq!(limite_efectivo(Some(-3)), 100);
    }
}
