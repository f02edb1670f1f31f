//! DTO de respuesta de usuario
//!
//! Forma pública de la ficha: el identificador viaja como cadena
//! hexadecimal y los timestamps en RFC 3339, independientemente de cómo
//! los almacene la base de datos.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::domain::entities::usuarios::{
    Capacitacion, DatosConyuge, EducacionBasica, EducacionSuperior, ExperienciaLaboral, Hijo,
    Idioma, Padre, Usuario,
};

/// Ficha de personal tal como la devuelve la API
#[derive(Debug, Clone, Serialize)]
pub struct UsuarioResponse {
    /// Identificador asignado por la base de datos
    pub id: String,
    pub created_at: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,

    pub apellido_paterno: String,
    pub apellido_materno: String,
    pub nombres: String,
    pub sexo: String,
    pub dni: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub licencia_conducir: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub categoria_licencia: String,
    pub fecha_nacimiento: String,
    pub lugar_nacimiento_distrito: String,
    pub lugar_nacimiento_provincia: String,
    pub lugar_nacimiento_departamento: String,
    pub direccion_domicilio: String,
    pub fecha_ingreso: String,
    pub lugar_trabajo: String,
    pub puesto_actual: String,
    pub telefono: String,
    pub email: String,
    pub situacion_contractual: String,
    pub regimen_pensionario: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub afp_nombre: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub cuspp: String,
    pub regimen_salud: String,
    pub contacto_nombre: String,
    pub contacto_parentesco: String,
    pub contacto_celular: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub contacto_telefono_fijo: String,
    pub contacto_direccion: String,
    pub grupo_sanguineo: String,
    pub estado_civil: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub constancia_estado_civil: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub datos_conyuge: Option<DatosConyuge>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub hijos: Vec<Hijo>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub padres: Vec<Padre>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub educacion_basica: Vec<EducacionBasica>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub educacion_superior: Vec<EducacionSuperior>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub capacitaciones: Vec<Capacitacion>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub experiencia_laboral: Vec<ExperienciaLaboral>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub idiomas: Vec<Idioma>,
    pub autoriza_bcp: bool,
    pub autoriza_otro_banco: bool,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub otro_banco_nombre: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub otro_banco_cuenta: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub otro_banco_cci: String,
    pub autoriza_cts_bcp: bool,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub foto: String,
}

/// Convierte un timestamp BSON a `chrono` UTC.
fn fecha_utc(fecha: mongodb::bson::DateTime) -> DateTime<Utc> {
    DateTime::from_timestamp_millis(fecha.timestamp_millis())
        .unwrap_or(DateTime::<Utc>::UNIX_EPOCH)
}

impl From<Usuario> for UsuarioResponse {
    fn from(usuario: Usuario) -> Self {
        Self {
            id: usuario.id.map(|oid| oid.to_hex()).unwrap_or_default(),
            created_at: fecha_utc(usuario.created_at),
            updated_at: usuario.updated_at.map(fecha_utc),
            apellido_paterno: usuario.apellido_paterno,
            apellido_materno: usuario.apellido_materno,
            nombres: usuario.nombres,
            sexo: usuario.sexo,
            dni: usuario.dni,
            licencia_conducir: usuario.licencia_conducir,
            categoria_licencia: usuario.categoria_licencia,
            fecha_nacimiento: usuario.fecha_nacimiento,
            lugar_nacimiento_distrito: usuario.lugar_nacimiento_distrito,
            lugar_nacimiento_provincia: usuario.lugar_nacimiento_provincia,
            lugar_nacimiento_departamento: usuario.lugar_nacimiento_departamento,
            direccion_domicilio: usuario.direccion_domicilio,
            fecha_ingreso: usuario.fecha_ingreso,
            lugar_trabajo: usuario.lugar_trabajo,
            puesto_actual: usuario.puesto_actual,
            telefono: usuario.telefono,
            email: usuario.email,
            situacion_contractual: usuario.situacion_contractual,
            regimen_pensionario: usuario.regimen_pensionario,
            afp_nombre: usuario.afp_nombre,
            cuspp: usuario.cuspp,
            regimen_salud: usuario.regimen_salud,
            contacto_nombre: usuario.contacto_nombre,
            contacto_parentesco: usuario.contacto_parentesco,
            contacto_celular: usuario.contacto_celular,
            contacto_telefono_fijo: usuario.contacto_telefono_fijo,
            contacto_direccion: usuario.contacto_direccion,
            grupo_sanguineo: usuario.grupo_sanguineo,
            estado_civil: usuario.estado_civil,
            constancia_estado_civil: usuario.constancia_estado_civil,
            datos_conyuge: usuario.datos_conyuge,
            hijos: usuario.hijos,
            padres: usuario.padres,
            educacion_basica: usuario.educacion_basica,
            educacion_superior: usuario.educacion_superior,
            capacitaciones: usuario.capacitaciones,
            experiencia_laboral: usuario.experiencia_laboral,
            idiomas: usuario.idiomas,
            autoriza_bcp: usuario.autoriza_bcp,
            autoriza_otro_banco: usuario.autoriza_otro_banco,
            otro_banco_nombre: usuario.otro_banco_nombre,
            otro_banco_cuenta: usuario.otro_banco_cuenta,
            otro_banco_cci: usuario.otro_banco_cci,
            autoriza_cts_bcp: usuario.autoriza_cts_bcp,
            foto: usuario.foto,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::dto::usuarios::request::CreateUsuarioRequest;

    #[test]
    fn test_conversion_expone_id_en_hexadecimal() {
        let req: CreateUsuarioRequest = serde_json::from_value(serde_json::json!({
            "apellido_paterno": "Canales",
            "nombres": "Luis",
            "dni": "45879632"
        }))
        .unwrap();

        let mut usuario = req.to_usuario();
        let oid = mongodb::bson::oid::ObjectId::new();
        usuario.id = Some(oid);

        let respuesta = UsuarioResponse::from(usuario);

        assert_eq!(respuesta.id, oid.to_hex());
        assert_eq!(respuesta.dni, "45879632");
        assert!(respuesta.updated_at.is_none());
    }

    #[test]
    fn test_serializacion_omite_listas_vacias() {
        let req: CreateUsuarioRequest = serde_json::from_value(serde_json::json!({
            "apellido_paterno": "Canales",
            "nombres": "Luis",
            "dni": "45879632"
        }))
        .unwrap();

        let respuesta = UsuarioResponse::from(req.to_usuario());
        let json = serde_json::to_value(&respuesta).unwrap();

        assert!(json.get("hijos").is_none());
        assert!(json.get("foto").is_none());
        assert!(json.get("created_at").is_some());
    }
}
