//! # DTO de alta y actualización de usuario
//!
//! Estructura de la petición HTTP para registrar o reemplazar una ficha de
//! personal. La validación corre con `validator` antes de tocar la capa de
//! servicio y la conversión a entidad recorta los espacios de todos los
//! campos de texto libre.
//!
//! ## Reglas de validación
//!
//! ### Nombres (`nombres`), apellido paterno (`apellido_paterno`) y DNI (`dni`)
//! - Obligatorios
//! - Mínimo 2 caracteres tras recortar espacios
//!
//! El resto de campos es texto libre: las fichas llegan de un formulario
//! progresivo y pueden registrarse incompletas.
//!
//! ## Uso
//!
//! ```rust,ignore
//! use validator::Validate;
//! use crate::domain::dto::usuarios::request::CreateUsuarioRequest;
//!
//! let req: CreateUsuarioRequest = serde_json::from_str(cuerpo)?;
//! req.validate().map_err(|e| AppError::ValidationError(e.to_string()))?;
//! let usuario = req.to_usuario();
//! ```

use mongodb::bson::DateTime;
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use crate::domain::entities::usuarios::{
    Capacitacion, DatosConyuge, EducacionBasica, EducacionSuperior, ExperienciaLaboral, Hijo,
    Idioma, Padre, Usuario,
};
use crate::utils::string_utils::recortar;

/// Petición de registro de una ficha de personal
///
/// Misma forma que la entidad salvo el identificador y los timestamps,
/// que asigna el servidor. Se reutiliza en la actualización: el payload
/// reemplaza todos los campos del documento.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateUsuarioRequest {
    /// Apellido paterno del titular
    #[validate(custom(function = "validar_campo_ficha"))]
    pub apellido_paterno: String,
    #[serde(default)]
    pub apellido_materno: String,
    /// Nombres del titular
    #[validate(custom(function = "validar_campo_ficha"))]
    pub nombres: String,
    #[serde(default)]
    pub sexo: String,
    /// Documento nacional de identidad
    #[validate(custom(function = "validar_campo_ficha"))]
    pub dni: String,
    #[serde(default)]
    pub licencia_conducir: String,
    #[serde(default)]
    pub categoria_licencia: String,
    #[serde(default)]
    pub fecha_nacimiento: String,
    #[serde(default)]
    pub lugar_nacimiento_distrito: String,
    #[serde(default)]
    pub lugar_nacimiento_provincia: String,
    #[serde(default)]
    pub lugar_nacimiento_departamento: String,
    #[serde(default)]
    pub direccion_domicilio: String,
    #[serde(default)]
    pub fecha_ingreso: String,
    #[serde(default)]
    pub lugar_trabajo: String,
    #[serde(default)]
    pub puesto_actual: String,
    #[serde(default)]
    pub telefono: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub situacion_contractual: String,
    #[serde(default)]
    pub regimen_pensionario: String,
    #[serde(default)]
    pub afp_nombre: String,
    #[serde(default)]
    pub cuspp: String,
    #[serde(default)]
    pub regimen_salud: String,
    #[serde(default)]
    pub contacto_nombre: String,
    #[serde(default)]
    pub contacto_parentesco: String,
    #[serde(default)]
    pub contacto_celular: String,
    #[serde(default)]
    pub contacto_telefono_fijo: String,
    #[serde(default)]
    pub contacto_direccion: String,
    #[serde(default)]
    pub grupo_sanguineo: String,
    #[serde(default)]
    pub estado_civil: String,
    #[serde(default)]
    pub constancia_estado_civil: String,
    #[serde(default)]
    pub datos_conyuge: Option<DatosConyuge>,
    #[serde(default)]
    pub hijos: Vec<Hijo>,
    #[serde(default)]
    pub padres: Vec<Padre>,
    #[serde(default)]
    pub educacion_basica: Vec<EducacionBasica>,
    #[serde(default)]
    pub educacion_superior: Vec<EducacionSuperior>,
    #[serde(default)]
    pub capacitaciones: Vec<Capacitacion>,
    #[serde(default)]
    pub experiencia_laboral: Vec<ExperienciaLaboral>,
    #[serde(default)]
    pub idiomas: Vec<Idioma>,
    #[serde(default)]
    pub autoriza_bcp: bool,
    #[serde(default)]
    pub autoriza_otro_banco: bool,
    #[serde(default)]
    pub otro_banco_nombre: String,
    #[serde(default)]
    pub otro_banco_cuenta: String,
    #[serde(default)]
    pub otro_banco_cci: String,
    #[serde(default)]
    pub autoriza_cts_bcp: bool,
    #[serde(default)]
    pub foto: String,
}

/// Valida un campo obligatorio de la ficha.
///
/// El campo debe quedar con al menos 2 caracteres tras recortar los
/// espacios en blanco de los extremos.
fn validar_campo_ficha(valor: &str) -> Result<(), ValidationError> {
    let recortado = valor.trim();

    if recortado.is_empty() {
        return Err(ValidationError::new("campo_requerido")
            .with_message("el campo es requerido".into()));
    }

    if recortado.chars().count() < 2 {
        return Err(ValidationError::new("campo_muy_corto")
            .with_message("debe tener al menos 2 caracteres".into()));
    }

    Ok(())
}

impl CreateUsuarioRequest {
    /// Convierte la petición en la entidad `Usuario`.
    ///
    /// Recorta los espacios de todos los campos de texto, deja el
    /// identificador sin asignar (lo pone la base de datos) y fija el
    /// momento de alta.
    pub fn to_usuario(&self) -> Usuario {
        Usuario {
            id: None,
            created_at: DateTime::now(),
            updated_at: None,
            apellido_paterno: recortar(&self.apellido_paterno),
            apellido_materno: recortar(&self.apellido_materno),
            nombres: recortar(&self.nombres),
            sexo: recortar(&self.sexo),
            dni: recortar(&self.dni),
            licencia_conducir: recortar(&self.licencia_conducir),
            categoria_licencia: recortar(&self.categoria_licencia),
            fecha_nacimiento: recortar(&self.fecha_nacimiento),
            lugar_nacimiento_distrito: recortar(&self.lugar_nacimiento_distrito),
            lugar_nacimiento_provincia: recortar(&self.lugar_nacimiento_provincia),
            lugar_nacimiento_departamento: recortar(&self.lugar_nacimiento_departamento),
            direccion_domicilio: recortar(&self.direccion_domicilio),
            fecha_ingreso: recortar(&self.fecha_ingreso),
            lugar_trabajo: recortar(&self.lugar_trabajo),
            puesto_actual: recortar(&self.puesto_actual),
            telefono: recortar(&self.telefono),
            email: recortar(&self.email),
            situacion_contractual: recortar(&self.situacion_contractual),
            regimen_pensionario: recortar(&self.regimen_pensionario),
            afp_nombre: recortar(&self.afp_nombre),
            cuspp: recortar(&self.cuspp),
            regimen_salud: recortar(&self.regimen_salud),
            contacto_nombre: recortar(&self.contacto_nombre),
            contacto_parentesco: recortar(&self.contacto_parentesco),
            contacto_celular: recortar(&self.contacto_celular),
            contacto_telefono_fijo: recortar(&self.contacto_telefono_fijo),
            contacto_direccion: recortar(&self.contacto_direccion),
            grupo_sanguineo: recortar(&self.grupo_sanguineo),
            estado_civil: recortar(&self.estado_civil),
            constancia_estado_civil: recortar(&self.constancia_estado_civil),
            datos_conyuge: self.datos_conyuge.clone(),
            hijos: self.hijos.clone(),
            padres: self.padres.clone(),
            educacion_basica: self.educacion_basica.clone(),
            educacion_superior: self.educacion_superior.clone(),
            capacitaciones: self.capacitaciones.clone(),
            experiencia_laboral: self.experiencia_laboral.clone(),
            idiomas: self.idiomas.clone(),
            autoriza_bcp: self.autoriza_bcp,
            autoriza_otro_banco: self.autoriza_otro_banco,
            otro_banco_nombre: recortar(&self.otro_banco_nombre),
            otro_banco_cuenta: recortar(&self.otro_banco_cuenta),
            otro_banco_cci: recortar(&self.otro_banco_cci),
            autoriza_cts_bcp: self.autoriza_cts_bcp,
            foto: recortar(&self.foto),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn peticion_valida() -> CreateUsuarioRequest {
        serde_json::from_value(serde_json::json!({
            "apellido_paterno": "Canales",
            "apellido_materno": "Rojas",
            "nombres": "Luis Alberto",
            "sexo": "M",
            "dni": "45879632",
            "fecha_nacimiento": "1990-04-12",
            "telefono": "  987654321  ",
            "email": "lcanales@example.com",
            "hijos": [{
                "id": "h1",
                "apellidos_nombres": "Canales Díaz, Ana",
                "fecha_nacimiento": "2015-08-01",
                "direccion": "Av. Los Pinos 120",
                "dni": "79456123",
                "edad": 10
            }]
        }))
        .expect("petición de prueba válida")
    }

    #[test]
    fn test_peticion_completa_pasa_validacion() {
        assert!(peticion_valida().validate().is_ok());
    }

    #[test]
    fn test_nombres_vacios_fallan() {
        let mut req = peticion_valida();
        req.nombres = "   ".to_string();

        let error = req.validate().unwrap_err();
        assert!(error.to_string().contains("nombres"));
    }

    #[test]
    fn test_apellido_paterno_vacio_falla() {
        let mut req = peticion_valida();
        req.apellido_paterno = String::new();

        let error = req.validate().unwrap_err();
        assert!(error.to_string().contains("apellido_paterno"));
    }

    #[test]
    fn test_dni_de_un_caracter_falla() {
        let mut req = peticion_valida();
        req.dni = " 4 ".to_string();

        let error = req.validate().unwrap_err();
        assert!(error.to_string().contains("dni"));
    }

    #[test]
    fn test_dos_caracteres_tras_recortar_pasan() {
        let mut req = peticion_valida();
        req.nombres = "  Li  ".to_string();

        assert!(req.validate().is_ok());
    }

    #[test]
    fn test_to_usuario_recorta_y_fija_alta() {
        let usuario = peticion_valida().to_usuario();

        assert!(usuario.id.is_none());
        assert!(usuario.updated_at.is_none());
        assert_eq!(usuario.telefono, "987654321");
        assert_eq!(usuario.hijos.len(), 1);
        assert_eq!(usuario.hijos[0].edad, 10);
    }

    #[test]
    fn test_campos_opcionales_ausentes_se_rellenan() {
        let req: CreateUsuarioRequest = serde_json::from_value(serde_json::json!({
            "apellido_paterno": "Canales",
            "nombres": "Luis",
            "dni": "45879632"
        }))
        .expect("los campos opcionales tienen valor por defecto");

        assert!(req.validate().is_ok());
        assert!(req.hijos.is_empty());
        assert!(req.datos_conyuge.is_none());
        assert!(!req.autoriza_bcp);
    }
}
