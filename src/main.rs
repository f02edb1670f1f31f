//! Aplicación principal del backend de fichas de personal
//!
//! Arranca el servidor HTTP basado en Actix-web e inicializa los
//! componentes compartidos: conexión a MongoDB, índices de la colección
//! y el registro de singletons del proceso.

use std::sync::Arc;
use actix_cors::Cors;
use actix_web::http::header;
use actix_web::{middleware, App, HttpServer};
use actix_governor::{Governor, GovernorConfigBuilder};
use dotenv::dotenv;
use env_logger::Env;
use log::{error, info, warn};
use personal_service_backend::config::ServerConfig;
use personal_service_backend::core::registry::ServiceLocator;
use personal_service_backend::db::Database;
use personal_service_backend::repositories::usuarios::UsuarioRepository;
use personal_service_backend::routes::configure_all_routes;

/// Configuración de rate limiting
#[derive(Debug)]
struct RateLimitConfig {
    per_second: u64,
    burst_size: u32,
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Configuración de entorno y logging
    load_env_file();
    init_logging();

    info!("🚀 Iniciando backend de fichas de personal...");

    // Inicialización de la base de datos
    let database = initialize_data_store().await;

    // Registro de los componentes compartidos del proceso
    ServiceLocator::set(database);

    // Índices de la colección de usuarios
    if let Err(e) = UsuarioRepository::instance().crear_indices().await {
        warn!("⚠️ No se pudieron crear los índices de usuarios: {}", e);
    }

    info!("✅ Componentes inicializados correctamente");

    // Arranque del servidor HTTP
    start_http_server().await
}

/// Configura y ejecuta el servidor HTTP
///
/// Incluye los middlewares de rate limiting, CORS, logging y
/// normalización de rutas.
///
/// # Errors
///
/// * `std::io::Error` - fallo al vincular el puerto o al ejecutar el servidor
async fn start_http_server() -> std::io::Result<()> {
    let bind_address = format!("{}:{}", ServerConfig::host(), ServerConfig::port());

    info!("🌐 Servidor escuchando en http://{}", bind_address);
    info!("📍 Healthcheck: http://{}/health", bind_address);
    info!("📍 API: http://{}/api/v1/usuarios", bind_address);

    // Rate limiting
    let rate_limit_config = load_rate_limit_config();
    let governor_conf = GovernorConfigBuilder::default()
        .requests_per_second(rate_limit_config.per_second)
        .burst_size(rate_limit_config.burst_size)
        .use_headers()
        .finish()
        .unwrap();

    info!(
        "🛡️ Rate limiting activo: {} req/s, ráfaga de {}",
        rate_limit_config.per_second,
        rate_limit_config.burst_size
    );

    HttpServer::new(move || {
        let cors = configure_cors();

        App::new()
            // Rate limiting primero
            .wrap(Governor::new(&governor_conf))

            // Middlewares restantes
            .wrap(cors)
            .wrap(middleware::Logger::default())
            .wrap(middleware::NormalizePath::trim())

            // Rutas
            .configure(configure_all_routes)
    })
        .bind(bind_address)?
        .workers(4)
        .run()
        .await
}

/// Carga el archivo de entorno según el perfil activo
///
/// # Environment Variables
///
/// * `PROFILE=dev` - carga `.env.dev`
/// * `PROFILE=prod` - carga `.env.prod`
/// * otro valor - carga el `.env` por defecto
fn load_env_file() {
    let profile = std::env::var("PROFILE").unwrap_or_else(|_| "dev".to_string());

    match profile.as_str() {
        "prod" => match dotenv::from_filename(".env.prod") {
            Ok(_) => info!("Archivo .env.prod cargado"),
            Err(e) => error!("No se pudo cargar .env.prod: {}", e),
        },
        "dev" => match dotenv::from_filename(".env.dev") {
            Ok(_) => info!("Archivo .env.dev cargado"),
            Err(e) => error!("No se pudo cargar .env.dev: {}", e),
        },
        _ => {
            dotenv().ok();
            info!("Archivo .env por defecto cargado");
        }
    }
}

/// Inicializa el sistema de logging
///
/// # Environment Variables
///
/// * `RUST_LOG` - nivel de log (por defecto: "info,actix_web=debug")
fn init_logging() {
    env_logger::init_from_env(Env::default().default_filter_or("info,actix_web=debug"));
}

/// Inicializa la conexión a MongoDB
///
/// La falta de credenciales fuera de desarrollo es un error fatal de
/// configuración: el proceso termina sin levantar el servidor.
async fn initialize_data_store() -> Arc<Database> {
    info!("📡 Conectando a la base de datos...");

    match Database::new().await {
        Ok(database) => Arc::new(database),
        Err(e) => {
            error!("❌ Error de configuración de la base de datos: {}", e);
            std::process::exit(1);
        }
    }
}

/// Configura el middleware CORS
///
/// La API es consumida desde orígenes arbitrarios (el formulario de
/// registro se sirve por separado), así que se permite cualquier origen.
fn configure_cors() -> Cors {
    Cors::default()
        .allow_any_origin()
        .allowed_methods(vec!["GET", "POST", "PUT", "DELETE", "OPTIONS"])
        .allowed_headers(vec![
            header::AUTHORIZATION,
            header::ACCEPT,
            header::CONTENT_TYPE,
        ])
        .max_age(3600)
}

/// Carga la configuración de rate limiting desde el entorno
///
/// # Environment Variables
///
/// * `RATE_LIMIT_PER_SECOND` - peticiones por segundo (por defecto: 100)
/// * `RATE_LIMIT_BURST_SIZE` - ráfaga permitida (por defecto: 200)
fn load_rate_limit_config() -> RateLimitConfig {
    let per_second = std::env::var("RATE_LIMIT_PER_SECOND")
        .unwrap_or_else(|_| "100".to_string())
        .parse::<u64>()
        .unwrap_or_else(|e| {
            error!("RATE_LIMIT_PER_SECOND inválido: {}. Se usa 100", e);
            100
        });

    let burst_size = std::env::var("RATE_LIMIT_BURST_SIZE")
        .unwrap_or_else(|_| "200".to_string())
        .parse::<u32>()
        .unwrap_or_else(|e| {
            error!("RATE_LIMIT_BURST_SIZE inválido: {}. Se usa 200", e);
            200
        });

    let config = RateLimitConfig {
        per_second,
        burst_size,
    };

    info!("Rate limiting configurado: {:?}", config);
    config
}
