//! Entidad Usuario
//!
//! Ficha de datos del personal: la única entidad de dominio del sistema.
//! Los datos familiares, de instrucción y de experiencia viven embebidos
//! en el propio documento, nunca como entidades separadas.

use mongodb::bson::{oid::ObjectId, DateTime};
use serde::{Deserialize, Serialize};

/// Datos del cónyuge o conviviente
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DatosConyuge {
    #[serde(default)]
    pub apellidos_nombres: String,
    #[serde(default)]
    pub genero: String,
    #[serde(default)]
    pub fecha_nacimiento: String,
    #[serde(default)]
    pub dni: String,
    #[serde(default)]
    pub direccion: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub copia_dni: String,
}

/// Hijo declarado en la ficha
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Hijo {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub apellidos_nombres: String,
    #[serde(default)]
    pub fecha_nacimiento: String,
    #[serde(default)]
    pub direccion: String,
    #[serde(default)]
    pub dni: String,
    #[serde(default)]
    pub edad: i32,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub copia_dni: String,
}

/// Padre o madre del titular
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Padre {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub apellidos_nombres: String,
    #[serde(default)]
    pub fecha_nacimiento: String,
    #[serde(default)]
    pub ocupacion: String,
    #[serde(default)]
    pub estado_civil: String,
    #[serde(default)]
    pub vive: bool,
}

/// Etapa de educación básica
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EducacionBasica {
    #[serde(default)]
    pub nivel: String,
    #[serde(default)]
    pub completa: bool,
    #[serde(default)]
    pub centro_estudios: String,
    #[serde(default)]
    pub desde: String,
    #[serde(default)]
    pub hasta: String,
}

/// Etapa de educación superior
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EducacionSuperior {
    #[serde(default)]
    pub nivel: String,
    #[serde(default)]
    pub especialidad: String,
    #[serde(default)]
    pub centro_estudios: String,
    #[serde(default)]
    pub desde: String,
    #[serde(default)]
    pub hasta: String,
    #[serde(default)]
    pub completa: bool,
    #[serde(default)]
    pub grado_academico: String,
}

/// Curso o capacitación
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Capacitacion {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub nombre: String,
    #[serde(default)]
    pub institucion: String,
    #[serde(default)]
    pub horas: i32,
}

/// Puesto anterior del titular
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ExperienciaLaboral {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub cargo: String,
    #[serde(default)]
    pub empresa: String,
    #[serde(default)]
    pub fecha_ingreso: String,
    #[serde(default)]
    pub fecha_cese: String,
    #[serde(default)]
    pub tiempo_permanencia: String,
    #[serde(default)]
    pub motivo_cese: String,
}

/// Idioma y nivel de dominio
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Idioma {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub idioma: String,
    #[serde(default)]
    pub lee: String,
    #[serde(default)]
    pub habla: String,
    #[serde(default)]
    pub escribe: String,
}

/// Ficha completa de un trabajador
///
/// El identificador lo asigna la base de datos al insertar y es inmutable.
/// `created_at` se fija una única vez en la creación; `updated_at` se
/// refresca en cada actualización.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Usuario {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    /// Momento de alta en el sistema
    pub created_at: DateTime,
    /// Última actualización de la ficha
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime>,

    // Datos personales
    pub apellido_paterno: String,
    pub apellido_materno: String,
    pub nombres: String,
    pub sexo: String,
    pub dni: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub licencia_conducir: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub categoria_licencia: String,
    pub fecha_nacimiento: String,

    // Lugar de nacimiento
    #[serde(default)]
    pub lugar_nacimiento_distrito: String,
    #[serde(default)]
    pub lugar_nacimiento_provincia: String,
    #[serde(default)]
    pub lugar_nacimiento_departamento: String,

    // Domicilio
    #[serde(default)]
    pub direccion_domicilio: String,

    // Datos laborales
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

    // Régimen
    #[serde(default)]
    pub regimen_pensionario: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub afp_nombre: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub cuspp: String,
    #[serde(default)]
    pub regimen_salud: String,

    // Información de emergencia
    #[serde(default)]
    pub contacto_nombre: String,
    #[serde(default)]
    pub contacto_parentesco: String,
    #[serde(default)]
    pub contacto_celular: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub contacto_telefono_fijo: String,
    #[serde(default)]
    pub contacto_direccion: String,
    #[serde(default)]
    pub grupo_sanguineo: String,

    #[serde(default)]
    pub estado_civil: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub constancia_estado_civil: String,

    // Datos familiares
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub datos_conyuge: Option<DatosConyuge>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub hijos: Vec<Hijo>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub padres: Vec<Padre>,

    // Datos de instrucción
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub educacion_basica: Vec<EducacionBasica>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub educacion_superior: Vec<EducacionSuperior>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub capacitaciones: Vec<Capacitacion>,

    // Experiencia laboral
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub experiencia_laboral: Vec<ExperienciaLaboral>,

    // Idiomas
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub idiomas: Vec<Idioma>,

    // Apertura de cuenta sueldo
    #[serde(default)]
    pub autoriza_bcp: bool,
    #[serde(default)]
    pub autoriza_otro_banco: bool,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub otro_banco_nombre: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub otro_banco_cuenta: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub otro_banco_cci: String,

    // Apertura de cuenta CTS
    #[serde(default)]
    pub autoriza_cts_bcp: bool,

    /// Foto en base64, con o sin prefijo `data:image/...;base64,`
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub foto: String,
}

impl Usuario {
    /// Apellidos y nombres en el orden de la ficha impresa.
    pub fn nombre_completo(&self) -> String {
        format!(
            "{} {} {}",
            self.apellido_paterno, self.apellido_materno, self.nombres
        )
    }

    /// Conserva la identidad de un registro existente sobre esta ficha.
    ///
    /// La actualización reemplaza todos los campos del documento salvo el
    /// identificador y el momento de alta; `updated_at` queda refrescado.
    pub fn conservar_identidad_de(&mut self, existente: &Usuario) {
        self.id = existente.id;
        self.created_at = existente.created_at;
        self.updated_at = Some(DateTime::now());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn usuario_minimo(nombres: &str, dni: &str) -> Usuario {
        Usuario {
            id: None,
            created_at: DateTime::now(),
            updated_at: None,
            apellido_paterno: "Canales".to_string(),
            apellido_materno: "Rojas".to_string(),
            nombres: nombres.to_string(),
            sexo: "M".to_string(),
            dni: dni.to_string(),
            licencia_conducir: String::new(),
            categoria_licencia: String::new(),
            fecha_nacimiento: "1990-04-12".to_string(),
            lugar_nacimiento_distrito: String::new(),
            lugar_nacimiento_provincia: String::new(),
            lugar_nacimiento_departamento: String::new(),
            direccion_domicilio: String::new(),
            fecha_ingreso: String::new(),
            lugar_trabajo: String::new(),
            puesto_actual: String::new(),
            telefono: String::new(),
            email: String::new(),
            situacion_contractual: String::new(),
            regimen_pensionario: String::new(),
            afp_nombre: String::new(),
            cuspp: String::new(),
            regimen_salud: String::new(),
            contacto_nombre: String::new(),
            contacto_parentesco: String::new(),
            contacto_celular: String::new(),
            contacto_telefono_fijo: String::new(),
            contacto_direccion: String::new(),
            grupo_sanguineo: String::new(),
            estado_civil: String::new(),
            constancia_estado_civil: String::new(),
            datos_conyuge: None,
            hijos: Vec::new(),
            padres: Vec::new(),
            educacion_basica: Vec::new(),
            educacion_superior: Vec::new(),
            capacitaciones: Vec::new(),
            experiencia_laboral: Vec::new(),
            idiomas: Vec::new(),
            autoriza_bcp: false,
            autoriza_otro_banco: false,
            otro_banco_nombre: String::new(),
            otro_banco_cuenta: String::new(),
            otro_banco_cci: String::new(),
            autoriza_cts_bcp: false,
            foto: String::new(),
        }
    }

    #[test]
    fn test_nombre_completo() {
        let usuario = usuario_minimo("Luis Alberto", "45879632");
        assert_eq!(usuario.nombre_completo(), "Canales Rojas Luis Alberto");
    }

    #[test]
    fn test_conservar_identidad_preserva_id_y_alta() {
        let mut existente = usuario_minimo("Luis Alberto", "45879632");
        existente.id = Some(ObjectId::new());

        let mut reemplazo = usuario_minimo("Carmen", "11223344");
        reemplazo.conservar_identidad_de(&existente);

        assert_eq!(reemplazo.id, existente.id);
        assert_eq!(reemplazo.created_at, existente.created_at);
        assert!(reemplazo.updated_at.is_some());
        // El resto de campos queda tal como vino el reemplazo
        assert_eq!(reemplazo.nombres, "Carmen");
        assert_eq!(reemplazo.dni, "11223344");
    }

    #[test]
    fn test_serializacion_omite_id_ausente() {
        let usuario = usuario_minimo("Luis Alberto", "45879632");
        let doc = mongodb::bson::to_document(&usuario).expect("documento válido");

        assert!(!doc.contains_key("_id"));
        assert!(doc.contains_key("created_at"));
        assert!(!doc.contains_key("foto"));
    }
}
