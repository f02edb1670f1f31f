//! Módulo de configuración de la aplicación

pub mod data_config;

pub use data_config::{DatabaseConfig, Environment, ServerConfig};
