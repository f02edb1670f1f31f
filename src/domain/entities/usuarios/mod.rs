//! Entidades del dominio de personal

pub mod usuario;

pub use usuario::{
    Capacitacion, DatosConyuge, EducacionBasica, EducacionSuperior, ExperienciaLaboral, Hijo,
    Idioma, Padre, Usuario,
};
