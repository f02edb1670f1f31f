//! Backend de fichas de datos del personal
//!
//! Servicio HTTP para la gestión de registros de personal (entidad
//! `Usuario`): alta, consulta, listado, actualización y baja sobre
//! MongoDB, más la exportación de la ficha individual como PDF.
//!
//! # Features
//!
//! - **Gestión de personal**: CRUD completo de la ficha de datos
//! - **Búsqueda**: por identificador del documento o por DNI
//! - **Exportación PDF**: ficha multi-sección con foto y logo opcionales
//! - **Singleton DI**: componentes registrados una única vez por proceso
//! - **MongoDB**: persistencia de documentos `Usuario`
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────┐
//! │   HTTP Routes   │ ← endpoints REST
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐     ┌─────────────────┐
//! │    Handlers     │ ──► │  GeneradorPdf   │ ← exportación de fichas
//! └─────────────────┘     └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Services     │ ← reglas de negocio
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │  Repositories   │ ← acceso a datos
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │     MongoDB     │ ← almacenamiento
//! └─────────────────┘
//! ```
//!
//! # Examples
//!
//! ```rust,ignore
//! use personal_service_backend::services::usuarios::UsuarioService;
//!
//! // Instancia singleton del servicio
//! let servicio = UsuarioService::instance();
//!
//! // Registrar y consultar un usuario
//! let usuario = servicio.crear_usuario(request).await?;
//! let encontrado = servicio.obtener_por_dni(&usuario.dni).await?;
//! ```

pub mod core;
pub mod config;
pub mod db;
pub mod domain;
pub mod repositories;
pub mod services;
pub mod pdf;
pub mod utils;
pub mod routes;
pub mod handlers;
pub mod errors;
