//! # Repositorio de usuarios
//!
//! Capa de acceso a datos de la ficha de personal: un adaptador delgado
//! sobre la colección `usuarios` de MongoDB.
//!
//! ## Características
//!
//! - **CRUD directo**: sin caché ni reintentos; cada operación es una
//!   única llamada al driver
//! - **Errores envueltos**: todo fallo del driver se propaga como
//!   `AppError::DatabaseError` sin distinguir su causa; el "no encontrado"
//!   lo infiere la capa de servicio del resultado vacío
//! - **Índices**: DNI único y fecha de alta descendente, creados al
//!   arrancar

use std::sync::Arc;

use futures_util::TryStreamExt;
use mongodb::{
    bson::{doc, oid::ObjectId},
    options::{FindOneAndUpdateOptions, IndexOptions, ReturnDocument},
    Collection, IndexModel,
};
use once_cell::sync::Lazy;

use crate::core::registry::ServiceLocator;
use crate::db::Database;
use crate::domain::entities::usuarios::Usuario;
use crate::errors::{AppError, AppResult};

/// Nombre de la colección de fichas
const COLECCION_USUARIOS: &str = "usuarios";

/// Repositorio de acceso a la colección de usuarios
///
/// Singleton por proceso: el accesor [`UsuarioRepository::instance`]
/// resuelve la conexión registrada en el `ServiceLocator` la primera vez
/// y reutiliza la misma instancia en adelante.
pub struct UsuarioRepository {
    /// Conexión compartida a MongoDB
    db: Arc<Database>,
}

static INSTANCE: Lazy<Arc<UsuarioRepository>> = Lazy::new(|| {
    Arc::new(UsuarioRepository {
        db: ServiceLocator::get::<Database>(),
    })
});

impl UsuarioRepository {
    /// Devuelve el singleton del repositorio.
    pub fn instance() -> Arc<Self> {
        INSTANCE.clone()
    }

    /// Colección tipada de fichas.
    fn coleccion(&self) -> Collection<Usuario> {
        self.db.get_database().collection::<Usuario>(COLECCION_USUARIOS)
    }

    /// Inserta una ficha nueva.
    ///
    /// El identificador lo asigna la base de datos; la ficha devuelta lo
    /// lleva ya incorporado.
    pub async fn crear(&self, mut usuario: Usuario) -> AppResult<Usuario> {
        let resultado = self
            .coleccion()
            .insert_one(&usuario)
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        usuario.id = resultado.inserted_id.as_object_id();

        Ok(usuario)
    }

    /// Busca una ficha por el identificador del documento.
    ///
    /// # Errores
    ///
    /// * `ValidationError` - el texto no es un ObjectId válido
    /// * `DatabaseError` - fallo del driver
    pub async fn buscar_por_id(&self, id: &str) -> AppResult<Option<Usuario>> {
        let object_id = ObjectId::parse_str(id)
            .map_err(|_| AppError::ValidationError("identificador de usuario inválido".to_string()))?;

        self.coleccion()
            .find_one(doc! { "_id": object_id })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    /// Busca una ficha por DNI (filtro de igualdad sobre el campo secundario).
    pub async fn buscar_por_dni(&self, dni: &str) -> AppResult<Option<Usuario>> {
        self.coleccion()
            .find_one(doc! { "dni": dni })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    /// Lista fichas ordenadas por fecha de alta descendente.
    ///
    /// `limite` acota el número de documentos pedidos al servidor; el tope
    /// por defecto lo aplica la capa de servicio.
    pub async fn listar(&self, limite: i64) -> AppResult<Vec<Usuario>> {
        let mut cursor = self
            .coleccion()
            .find(doc! {})
            .sort(doc! { "created_at": -1 })
            .limit(limite)
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        let mut usuarios = Vec::new();
        while let Some(usuario) = cursor
            .try_next()
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?
        {
            usuarios.push(usuario);
        }

        Ok(usuarios)
    }

    /// Actualiza una ficha con una escritura de fusión parcial (`$set`).
    ///
    /// Devuelve el documento posterior a la actualización, o `None` si el
    /// identificador no corresponde a ninguna ficha.
    pub async fn actualizar(&self, id: &str, usuario: &Usuario) -> AppResult<Option<Usuario>> {
        let object_id = ObjectId::parse_str(id)
            .map_err(|_| AppError::ValidationError("identificador de usuario inválido".to_string()))?;

        let mut documento = mongodb::bson::to_document(usuario)
            .map_err(|e| AppError::InternalError(format!("Error serializando la ficha: {}", e)))?;

        // El _id es inmutable; nunca forma parte del $set
        documento.remove("_id");

        let opciones = FindOneAndUpdateOptions::builder()
            .return_document(ReturnDocument::After)
            .build();

        self.coleccion()
            .find_one_and_update(doc! { "_id": object_id }, doc! { "$set": documento })
            .with_options(opciones)
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    /// Elimina una ficha.
    ///
    /// Devuelve `true` si se eliminó un documento y `false` si el
    /// identificador no existía. Borrado físico, sin papelera.
    pub async fn eliminar(&self, id: &str) -> AppResult<bool> {
        let object_id = ObjectId::parse_str(id)
            .map_err(|_| AppError::ValidationError("identificador de usuario inválido".to_string()))?;

        let resultado = self
            .coleccion()
            .delete_one(doc! { "_id": object_id })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(resultado.deleted_count > 0)
    }

    /// Crea los índices de la colección.
    ///
    /// Se ejecuta una vez en el arranque:
    ///
    /// 1. `dni` único, para la búsqueda por documento de identidad
    /// 2. `created_at` descendente, para el listado por fecha de alta
    pub async fn crear_indices(&self) -> AppResult<()> {
        let indice_dni = IndexModel::builder()
            .keys(doc! { "dni": 1 })
            .options(IndexOptions::builder()
                .unique(true)
                .name("dni_unique".to_string())
                .build())
            .build();

        let indice_alta = IndexModel::builder()
            .keys(doc! { "created_at": -1 })
            .options(IndexOptions::builder()
                .name("created_at_desc".to_string())
                .build())
            .build();

        self.coleccion()
            .create_indexes([indice_dni, indice_alta])
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(())
    }
}
