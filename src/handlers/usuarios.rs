//! # Handlers HTTP de usuarios
//!
//! Endpoints REST de la ficha de personal. Cada handler valida la
//! entrada, resuelve el servicio singleton y traduce el resultado al
//! sobre estándar `{success, message?, data?, error?}`.
//!
//! ## Endpoints
//!
//! | Método | Ruta | Descripción | Código |
//! |--------|------|-------------|--------|
//! | `POST` | `/api/v1/usuarios` | Registrar ficha | 201 Created |
//! | `GET` | `/api/v1/usuarios` | Buscar por `?id=`/`?dni=` o listar | 200 OK |
//! | `PUT` | `/api/v1/usuarios/{id}` | Reemplazar ficha | 200 OK |
//! | `DELETE` | `/api/v1/usuarios/{id}` | Eliminar ficha | 200 OK |
//! | `GET` | `/api/v1/usuarios/{dni}/pdf` | Exportar ficha en PDF | 200 OK |
//!
//! Cada petición corre con un tiempo límite propio de 10 segundos
//! alrededor de la llamada al servicio; si se agota, la operación en
//! curso se aborta y el cliente recibe un error interno.

use std::future::Future;
use std::time::Duration;

use actix_web::{delete, get, post, put, rt::time::timeout, web, HttpResponse};
use log::error;
use validator::Validate;

use crate::domain::dto::usuarios::request::{BusquedaUsuarioQuery, CreateUsuarioRequest};
use crate::domain::dto::usuarios::response::{ApiResponse, UsuarioResponse};
use crate::errors::{AppError, AppResult};
use crate::pdf::GeneradorPdf;
use crate::services::usuarios::UsuarioService;
use crate::utils::string_utils::nombre_archivo_seguro;

/// Tiempo límite por petición
const TIEMPO_LIMITE: Duration = Duration::from_secs(10);

/// Ejecuta una operación del servicio con el tiempo límite por petición.
///
/// El vencimiento aborta la llamada al almacén en curso y se devuelve al
/// cliente como error interno.
async fn con_tiempo_limite<F, T>(operacion: F) -> AppResult<T>
where
    F: Future<Output = AppResult<T>>,
{
    match timeout(TIEMPO_LIMITE, operacion).await {
        Ok(resultado) => resultado,
        Err(_) => Err(AppError::InternalError(
            "la operación superó el tiempo límite de 10 segundos".to_string(),
        )),
    }
}

/// Registro de una ficha de personal
///
/// # Endpoint
///
/// `POST /api/v1/usuarios`
///
/// # Respuestas
///
/// * `201 Created` - ficha registrada, con el documento creado en `data`
/// * `400 Bad Request` - nombres, apellido paterno o DNI ausentes o
///   demasiado cortos
/// * `500 Internal Server Error` - fallo del almacén
///
/// # Ejemplo
///
/// ```bash
/// curl -X POST http://localhost:8080/api/v1/usuarios \
///   -H "Content-Type: application/json" \
///   -d '{"nombres":"Luis Alberto","apellido_paterno":"Canales","dni":"45879632"}'
/// ```
#[post("")]
pub async fn crear_usuario(
    payload: web::Json<CreateUsuarioRequest>,
) -> Result<HttpResponse, AppError> {
    payload
        .validate()
        .map_err(|e| AppError::ValidationError(e.to_string()))?;

    let servicio = UsuarioService::instance();
    let usuario = con_tiempo_limite(servicio.crear_usuario(payload.into_inner()))
        .await
        .map_err(|e| {
            error!("Error registrando usuario: {}", e);
            e
        })?;

    Ok(HttpResponse::Created().json(ApiResponse::exito(
        "Usuario registrado exitosamente",
        UsuarioResponse::from(usuario),
    )))
}

/// Consulta de fichas
///
/// Un único endpoint despacha según los parámetros de query:
///
/// * `?id=` - una ficha por identificador del documento
/// * `?dni=` - una ficha por documento de identidad
/// * sin parámetros - listado por fecha de alta descendente, con
///   `?limite=` opcional (tope implícito de 100)
///
/// # Endpoint
///
/// `GET /api/v1/usuarios`
///
/// # Ejemplos
///
/// ```bash
/// curl "http://localhost:8080/api/v1/usuarios?dni=45879632"
/// curl "http://localhost:8080/api/v1/usuarios?limite=20"
/// ```
#[get("")]
pub async fn buscar_usuarios(
    query: web::Query<BusquedaUsuarioQuery>,
) -> Result<HttpResponse, AppError> {
    let servicio = UsuarioService::instance();
    let query = query.into_inner();

    if let Some(id) = query.id {
        let usuario = con_tiempo_limite(servicio.obtener_por_id(&id)).await?;
        return Ok(HttpResponse::Ok().json(ApiResponse::exito(
            "Usuario encontrado",
            UsuarioResponse::from(usuario),
        )));
    }

    if let Some(dni) = query.dni {
        let usuario = con_tiempo_limite(servicio.obtener_por_dni(&dni)).await?;
        return Ok(HttpResponse::Ok().json(ApiResponse::exito(
            "Usuario encontrado",
            UsuarioResponse::from(usuario),
        )));
    }

    let usuarios = con_tiempo_limite(servicio.listar(query.limite))
        .await
        .map_err(|e| {
            error!("Error listando usuarios: {}", e);
            e
        })?;

    let fichas: Vec<UsuarioResponse> = usuarios.into_iter().map(UsuarioResponse::from).collect();

    Ok(HttpResponse::Ok().json(ApiResponse::exito(
        "Usuarios obtenidos exitosamente",
        fichas,
    )))
}

/// Reemplazo de una ficha existente
///
/// El payload sustituye todos los campos del documento; el identificador
/// y la fecha de alta originales se conservan y `updated_at` queda
/// refrescado.
///
/// # Endpoint
///
/// `PUT /api/v1/usuarios/{usuario_id}`
///
/// # Respuestas
///
/// * `200 OK` - ficha actualizada, con el documento resultante en `data`
/// * `400 Bad Request` - payload inválido o identificador mal formado
/// * `404 Not Found` - el identificador no corresponde a ninguna ficha
#[put("/{usuario_id}")]
pub async fn actualizar_usuario(
    usuario_id: web::Path<String>,
    payload: web::Json<CreateUsuarioRequest>,
) -> Result<HttpResponse, AppError> {
    payload
        .validate()
        .map_err(|e| AppError::ValidationError(e.to_string()))?;

    let servicio = UsuarioService::instance();
    let usuario = con_tiempo_limite(servicio.actualizar(&usuario_id, payload.into_inner()))
        .await
        .map_err(|e| {
            error!("Error actualizando usuario {}: {}", usuario_id, e);
            e
        })?;

    Ok(HttpResponse::Ok().json(ApiResponse::exito(
        "Usuario actualizado exitosamente",
        UsuarioResponse::from(usuario),
    )))
}

/// Baja de una ficha
///
/// Borrado físico del documento; las listas embebidas (hijos, padres,
/// estudios...) desaparecen con él, no existen como entidades aparte.
///
/// # Endpoint
///
/// `DELETE /api/v1/usuarios/{usuario_id}`
#[delete("/{usuario_id}")]
pub async fn eliminar_usuario(
    usuario_id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let servicio = UsuarioService::instance();
    con_tiempo_limite(servicio.eliminar(&usuario_id))
        .await
        .map_err(|e| {
            error!("Error eliminando usuario {}: {}", usuario_id, e);
            e
        })?;

    Ok(HttpResponse::Ok().json(ApiResponse::mensaje("Usuario eliminado exitosamente")))
}

/// Exportación de la ficha en PDF
///
/// Busca la ficha por DNI, la renderiza con [`GeneradorPdf`] y la
/// devuelve como descarga `application/pdf` con nombre calculado
/// `usuario_<nombres>_<apellido>_<fecha>.pdf`.
///
/// # Endpoint
///
/// `GET /api/v1/usuarios/{dni}/pdf`
///
/// # Ejemplo
///
/// ```bash
/// curl -OJ http://localhost:8080/api/v1/usuarios/45879632/pdf
/// ```
#[get("/{dni}/pdf")]
pub async fn exportar_usuario_pdf(
    dni: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let servicio = UsuarioService::instance();
    let usuario = con_tiempo_limite(servicio.obtener_por_dni(&dni)).await?;

    let bytes = GeneradorPdf::instance()
        .generar_ficha(&usuario)
        .map_err(|e| {
            error!("Error generando PDF del usuario {}: {}", dni, e);
            e
        })?;

    let nombre_archivo = format!(
        "usuario_{}_{}_{}.pdf",
        nombre_archivo_seguro(&usuario.nombres),
        nombre_archivo_seguro(&usuario.apellido_paterno),
        chrono::Local::now().format("%Y%m%d")
    );

    Ok(HttpResponse::Ok()
        .content_type("application/pdf")
        .insert_header((
            "Content-Disposition",
            format!("attachment; filename=\"{}\"", nombre_archivo),
        ))
        .body(bytes))
}
