//! Configuración de rutas de la API
//!
//! Agrupa los endpoints REST por funcionalidad y añade el healthcheck.
//!
//! # Features
//!
//! - CRUD de fichas de personal bajo `/api/v1/usuarios`
//! - Exportación PDF de la ficha individual
//! - Endpoint de healthcheck para balanceadores y monitoreo
//! - Respuesta 405 uniforme para métodos no permitidos dentro del scope
//!
//! # Examples
//!
//! ```rust,ignore
//! use actix_web::App;
//!
//! let app = App::new().configure(configure_all_routes);
//! ```

use actix_web::web;
use serde_json::json;

use crate::domain::dto::usuarios::response::ApiResponse;
use crate::handlers;

/// Registra todas las rutas de la aplicación.
pub fn configure_all_routes(cfg: &mut web::ServiceConfig) {
    // Healthcheck
    cfg.service(health_check);

    // Rutas por funcionalidad
    configure_usuario_routes(cfg);
}

/// Registra las rutas del dominio de usuarios.
///
/// # Route Group
///
/// - `POST /api/v1/usuarios` - registro de ficha
/// - `GET /api/v1/usuarios` - búsqueda por `?id=`/`?dni=` o listado
/// - `PUT /api/v1/usuarios/{id}` - reemplazo de ficha
/// - `DELETE /api/v1/usuarios/{id}` - baja de ficha
/// - `GET /api/v1/usuarios/{dni}/pdf` - exportación PDF
///
/// Cualquier otra combinación de método y ruta dentro del scope responde
/// `405 Method Not Allowed` con el sobre estándar.
fn configure_usuario_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/usuarios")
            .service(handlers::usuarios::crear_usuario)
            .service(handlers::usuarios::buscar_usuarios)
            .service(handlers::usuarios::actualizar_usuario)
            .service(handlers::usuarios::eliminar_usuario)
            .service(handlers::usuarios::exportar_usuario_pdf)
            .default_service(web::route().to(metodo_no_permitido)),
    );
}

/// Respuesta uniforme para métodos no soportados.
async fn metodo_no_permitido() -> actix_web::HttpResponse {
    actix_web::HttpResponse::MethodNotAllowed().json(ApiResponse::error("Método no permitido"))
}

/// Healthcheck del servicio
///
/// # Examples
///
/// ```bash
/// curl http://localhost:8080/health
/// ```
///
/// Response:
/// ```json
/// {
///   "status": "healthy",
///   "service": "personal_service_backend",
///   "version": "0.1.0",
///   "timestamp": "2025-01-01T00:00:00Z",
///   "features": {
///     "database": "MongoDB",
///     "pdf": "printpdf",
///     "dependency_injection": "ServiceLocator"
///   }
/// }
/// ```
#[actix_web::get("/health")]
async fn health_check() -> actix_web::HttpResponse {
    actix_web::HttpResponse::Ok().json(json!({
        "status": "healthy",
        "service": "personal_service_backend",
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
        "features": {
            "database": "MongoDB",
            "pdf": "printpdf",
            "dependency_injection": "ServiceLocator"
        }
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{test, App};

    #[actix_web::test]
    async fn test_health_check_responde_200() {
        let app = test::init_service(App::new().configure(configure_all_routes)).await;

        let req = test::TestRequest::get().uri("/health").to_request();
        let resp = test::call_service(&app, req).await;

        assert!(resp.status().is_success());
    }

    #[actix_web::test]
    async fn test_metodo_no_soportado_responde_405() {
        let app = test::init_service(App::new().configure(configure_all_routes)).await;

        let req = test::TestRequest::patch()
            .uri("/api/v1/usuarios")
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(
            resp.status(),
            actix_web::http::StatusCode::METHOD_NOT_ALLOWED
        );
    }

    #[actix_web::test]
    async fn test_alta_con_dni_corto_responde_400() {
        let app = test::init_service(App::new().configure(configure_all_routes)).await;

        let req = test::TestRequest::post()
            .uri("/api/v1/usuarios")
            .set_json(json!({
                "apellido_paterno": "Canales",
                "nombres": "Luis",
                "dni": "4"
            }))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), actix_web::http::StatusCode::BAD_REQUEST);
    }
}
