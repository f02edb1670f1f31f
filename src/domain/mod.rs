//! Capa de dominio: entidades y DTOs
//!
//! Separa la forma almacenada (`entities`) de la forma que viaja por la
//! API (`dto`). Los DTOs de petición validan la entrada del cliente; los
//! de respuesta exponen el identificador como cadena y las fechas en
//! RFC 3339.

pub mod entities;
pub mod dto;
