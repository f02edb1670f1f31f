//! # Generador de la ficha PDF
//!
//! Convierte una ficha [`Usuario`] en el documento "Ficha de Datos del
//! Personal": A4 vertical, cabecera con logo y foto opcionales, ocho
//! secciones de datos y pie con el momento de generación.
//!
//! La maquetación es declarativa por filas y columnas: [`LienzoFicha`]
//! mantiene un cursor vertical sobre la página, reparte cada fila en una
//! grilla de 12 columnas y abre una página nueva cuando el cursor alcanza
//! el margen inferior. Las fuentes son las estándar del formato PDF
//! (Helvetica), de modo que la generación no depende de archivos de
//! fuentes en disco.

use std::sync::Arc;

use base64::{engine::general_purpose::STANDARD, Engine as _};
use log::warn;
use once_cell::sync::Lazy;
use printpdf::{
    BuiltinFont, Color, Image, ImageTransform, IndirectFontRef, Line, Mm, PdfDocument,
    PdfDocumentReference, PdfLayerReference, Point, Rgb,
};

use crate::domain::entities::usuarios::Usuario;
use crate::errors::{AppError, AppResult};
use crate::utils::string_utils::{formatear_booleano, valor_o_guion};

/// Ancho de página A4 en milímetros
const ANCHO_PAGINA: f32 = 210.0;
/// Alto de página A4 en milímetros
const ALTO_PAGINA: f32 = 297.0;
/// Margen uniforme de la ficha
const MARGEN: f32 = 15.0;
/// Columnas de la grilla de maquetación
const COLUMNAS: f32 = 12.0;

/// Rutas donde se busca el logo de la cabecera
const RUTAS_LOGO: [&str; 3] = ["logo.png", "./assets/logo.png", "../logo.png"];

/// Color de los títulos de sección y separadores
fn color_cabecera() -> Color {
    Color::Rgb(Rgb::new(34.0 / 255.0, 139.0 / 255.0, 34.0 / 255.0, None))
}

/// Color del texto secundario del pie
fn color_texto() -> Color {
    Color::Rgb(Rgb::new(55.0 / 255.0, 55.0 / 255.0, 55.0 / 255.0, None))
}

/// Generador de fichas PDF
///
/// Sin estado propio; existe como singleton para seguir el mismo patrón
/// de acceso que el resto de componentes.
pub struct GeneradorPdf;

static INSTANCE: Lazy<Arc<GeneradorPdf>> = Lazy::new(|| Arc::new(GeneradorPdf));

impl GeneradorPdf {
    /// Devuelve el singleton del generador.
    pub fn instance() -> Arc<Self> {
        INSTANCE.clone()
    }

    /// Genera la ficha PDF de un usuario y devuelve el flujo de bytes.
    pub fn generar_ficha(&self, usuario: &Usuario) -> AppResult<Vec<u8>> {
        let mut lienzo = LienzoFicha::nuevo("Ficha de Datos del Personal")?;

        lienzo.cabecera(usuario);

        lienzo.separador(2.0);
        lienzo.avanzar(5.0);

        seccion_datos_personales(&mut lienzo, usuario);
        seccion_contacto_emergencia(&mut lienzo, usuario);
        seccion_datos_laborales(&mut lienzo, usuario);
        seccion_educacion(&mut lienzo, usuario);
        seccion_capacitaciones(&mut lienzo, usuario);
        seccion_experiencia_laboral(&mut lienzo, usuario);
        seccion_idiomas(&mut lienzo, usuario);
        seccion_informacion_familiar(&mut lienzo, usuario);

        lienzo.pie();

        lienzo.terminar()
    }
}

/// Par etiqueta-valor de una fila de la ficha.
fn campo(etiqueta: &str, valor: &str) -> String {
    format!("{}: {}", etiqueta, valor_o_guion(valor))
}

fn seccion_datos_personales(lienzo: &mut LienzoFicha, usuario: &Usuario) {
    lienzo.titulo_seccion("I. DATOS PERSONALES");

    lienzo.fila(&[
        (campo("DNI", &usuario.dni), 4),
        (campo("Apellidos y Nombres", &usuario.nombre_completo()), 8),
    ]);
    lienzo.fila(&[
        (campo("Fecha Nacimiento", &usuario.fecha_nacimiento), 4),
        (campo("Sexo", &usuario.sexo), 4),
        (campo("Estado Civil", &usuario.estado_civil), 4),
    ]);
    lienzo.fila(&[
        (campo("Licencia Conducir", &usuario.licencia_conducir), 4),
        (campo("Categoría Licencia", &usuario.categoria_licencia), 4),
        (campo("Grupo Sanguíneo", &usuario.grupo_sanguineo), 4),
    ]);
    lienzo.fila(&[(campo("Dirección", &usuario.direccion_domicilio), 12)]);
    lienzo.fila(&[(
        campo(
            "Lugar Nacimiento",
            &format!(
                "{} - {} - {}",
                usuario.lugar_nacimiento_departamento,
                usuario.lugar_nacimiento_provincia,
                usuario.lugar_nacimiento_distrito
            ),
        ),
        12,
    )]);

    lienzo.avanzar(5.0);
}

fn seccion_contacto_emergencia(lienzo: &mut LienzoFicha, usuario: &Usuario) {
    lienzo.titulo_seccion("II. CONTACTO Y EMERGENCIA");

    lienzo.fila(&[
        (campo("Teléfono", &usuario.telefono), 6),
        (campo("Email", &usuario.email), 6),
    ]);
    lienzo.fila(&[
        (campo("Contacto Emergencia", &usuario.contacto_nombre), 6),
        (campo("Parentesco", &usuario.contacto_parentesco), 3),
        (campo("Celular", &usuario.contacto_celular), 3),
    ]);
    lienzo.fila(&[(campo("Dirección Emergencia", &usuario.contacto_direccion), 12)]);

    lienzo.avanzar(5.0);
}

fn seccion_datos_laborales(lienzo: &mut LienzoFicha, usuario: &Usuario) {
    lienzo.titulo_seccion("III. DATOS LABORALES");

    lienzo.fila(&[
        (campo("Puesto Actual", &usuario.puesto_actual), 4),
        (campo("Lugar Trabajo", &usuario.lugar_trabajo), 4),
        (campo("Fecha Ingreso", &usuario.fecha_ingreso), 4),
    ]);
    lienzo.fila(&[
        (campo("Régimen Pensionario", &usuario.regimen_pensionario), 4),
        (
            campo(
                "AFP/ONP",
                format!("{} {}", usuario.afp_nombre, usuario.cuspp).trim(),
            ),
            4,
        ),
        (campo("Régimen Salud", &usuario.regimen_salud), 4),
    ]);
    lienzo.fila(&[
        (campo("Situación Contractual", &usuario.situacion_contractual), 4),
        (campo("Autoriza BCP", formatear_booleano(usuario.autoriza_bcp)), 4),
        (
            campo("Autoriza CTS BCP", formatear_booleano(usuario.autoriza_cts_bcp)),
            4,
        ),
    ]);
    lienzo.fila(&[(
        campo(
            "Otro Banco",
            &format!(
                "{} ({} - CCI: {})",
                valor_o_guion(&usuario.otro_banco_nombre),
                valor_o_guion(&usuario.otro_banco_cuenta),
                valor_o_guion(&usuario.otro_banco_cci)
            ),
        ),
        12,
    )]);

    lienzo.avanzar(5.0);
}

fn seccion_educacion(lienzo: &mut LienzoFicha, usuario: &Usuario) {
    lienzo.titulo_seccion("IV. EDUCACIÓN");

    if !usuario.educacion_basica.is_empty() {
        lienzo.subtitulo("Educación Básica:");
        for edu in &usuario.educacion_basica {
            lienzo.linea_detalle(&format!(
                "{} - {} ({} - {}) Completa: {}",
                edu.nivel,
                edu.centro_estudios,
                edu.desde,
                edu.hasta,
                formatear_booleano(edu.completa)
            ));
        }
    }

    if !usuario.educacion_superior.is_empty() {
        lienzo.subtitulo("Educación Superior:");
        for edu in &usuario.educacion_superior {
            lienzo.linea_detalle(&format!(
                "{} en {} ({} - {}) - {}. Grado: {}",
                edu.nivel,
                edu.centro_estudios,
                edu.desde,
                edu.hasta,
                edu.especialidad,
                edu.grado_academico
            ));
        }
    }

    lienzo.avanzar(5.0);
}

fn seccion_capacitaciones(lienzo: &mut LienzoFicha, usuario: &Usuario) {
    if usuario.capacitaciones.is_empty() {
        return;
    }

    lienzo.titulo_seccion("V. CAPACITACIONES");
    for cap in &usuario.capacitaciones {
        lienzo.linea_detalle(&format!(
            "- {} ({}) - {} Horas",
            cap.nombre, cap.institucion, cap.horas
        ));
    }
    lienzo.avanzar(5.0);
}

fn seccion_experiencia_laboral(lienzo: &mut LienzoFicha, usuario: &Usuario) {
    if usuario.experiencia_laboral.is_empty() {
        return;
    }

    lienzo.titulo_seccion("VI. EXPERIENCIA LABORAL");
    for exp in &usuario.experiencia_laboral {
        lienzo.linea_detalle(&format!(
            "- {} en {} ({} al {}) - {}. Motivo: {}",
            exp.cargo,
            exp.empresa,
            exp.fecha_ingreso,
            exp.fecha_cese,
            exp.tiempo_permanencia,
            exp.motivo_cese
        ));
    }
    lienzo.avanzar(5.0);
}

fn seccion_idiomas(lienzo: &mut LienzoFicha, usuario: &Usuario) {
    if usuario.idiomas.is_empty() {
        return;
    }

    lienzo.titulo_seccion("VII. IDIOMAS");
    for idi in &usuario.idiomas {
        lienzo.linea_detalle(&format!(
            "- {}: Lee({}), Habla({}), Escribe({})",
            idi.idioma, idi.lee, idi.habla, idi.escribe
        ));
    }
    lienzo.avanzar(5.0);
}

fn seccion_informacion_familiar(lienzo: &mut LienzoFicha, usuario: &Usuario) {
    let sin_conyuge = usuario
        .datos_conyuge
        .as_ref()
        .map(|c| c.apellidos_nombres.is_empty())
        .unwrap_or(true);

    if sin_conyuge && usuario.hijos.is_empty() && usuario.padres.is_empty() {
        return;
    }

    lienzo.titulo_seccion("VIII. INFORMACIÓN FAMILIAR");

    if let Some(conyuge) = usuario.datos_conyuge.as_ref().filter(|c| !c.apellidos_nombres.is_empty()) {
        lienzo.subtitulo("Cónyuge / Conviviente:");
        lienzo.fila(&[
            (campo("Nombre", &conyuge.apellidos_nombres), 6),
            (campo("DNI", &conyuge.dni), 3),
            (campo("F. Nacimiento", &conyuge.fecha_nacimiento), 3),
        ]);
    }

    if !usuario.hijos.is_empty() {
        lienzo.subtitulo("Hijos:");
        for (i, hijo) in usuario.hijos.iter().enumerate() {
            lienzo.linea_detalle(&format!(
                "{}. {} (DNI: {}) - F. Nac: {}",
                i + 1,
                hijo.apellidos_nombres,
                hijo.dni,
                hijo.fecha_nacimiento
            ));
        }
    }

    if !usuario.padres.is_empty() {
        lienzo.subtitulo("Padres:");
        for (i, padre) in usuario.padres.iter().enumerate() {
            lienzo.linea_detalle(&format!(
                "{}. {} - F. Nac: {} - Ocupación: {} - Vive: {}",
                i + 1,
                padre.apellidos_nombres,
                padre.fecha_nacimiento,
                padre.ocupacion,
                formatear_booleano(padre.vive)
            ));
        }
    }
}

/// Cursor de maquetación sobre el documento
///
/// Mantiene la página activa y la posición vertical, repartiendo cada
/// fila en la grilla de 12 columnas dentro del área útil.
struct LienzoFicha {
    doc: PdfDocumentReference,
    capa: PdfLayerReference,
    fuente: IndirectFontRef,
    fuente_negrita: IndirectFontRef,
    /// Posición vertical actual, en mm desde el borde inferior
    y: f32,
    paginas: usize,
}

impl LienzoFicha {
    fn nuevo(titulo: &str) -> AppResult<Self> {
        let (doc, pagina, capa) =
            PdfDocument::new(titulo, Mm(ANCHO_PAGINA), Mm(ALTO_PAGINA), "Capa 1");

        let fuente = doc
            .add_builtin_font(BuiltinFont::Helvetica)
            .map_err(|e| AppError::PdfError(e.to_string()))?;
        let fuente_negrita = doc
            .add_builtin_font(BuiltinFont::HelveticaBold)
            .map_err(|e| AppError::PdfError(e.to_string()))?;

        let capa = doc.get_page(pagina).get_layer(capa);

        Ok(Self {
            doc,
            capa,
            fuente,
            fuente_negrita,
            y: ALTO_PAGINA - MARGEN,
            paginas: 1,
        })
    }

    /// Ancho del área útil de la página.
    fn ancho_util() -> f32 {
        ANCHO_PAGINA - 2.0 * MARGEN
    }

    /// Coordenada X del inicio de una columna de la grilla.
    fn x_columna(inicio: u8) -> f32 {
        MARGEN + Self::ancho_util() * f32::from(inicio) / COLUMNAS
    }

    /// Abre una página nueva si la fila no cabe en la actual.
    fn asegurar_espacio(&mut self, alto: f32) {
        if self.y - alto >= MARGEN {
            return;
        }

        self.paginas += 1;
        let (pagina, capa) = self.doc.add_page(
            Mm(ANCHO_PAGINA),
            Mm(ALTO_PAGINA),
            format!("Capa {}", self.paginas),
        );
        self.capa = self.doc.get_page(pagina).get_layer(capa);
        self.y = ALTO_PAGINA - MARGEN;
    }

    fn avanzar(&mut self, alto: f32) {
        self.y -= alto;
    }

    /// Escribe un texto en la posición indicada de la fila actual.
    fn texto(&self, contenido: &str, tamano: f32, x: f32, negrita: bool) {
        let fuente = if negrita { &self.fuente_negrita } else { &self.fuente };
        self.capa.use_text(contenido, tamano, Mm(x), Mm(self.y), fuente);
    }

    /// Título de sección en negrita y color corporativo.
    fn titulo_seccion(&mut self, titulo: &str) {
        self.asegurar_espacio(10.0);
        self.avanzar(6.0);
        self.capa.set_fill_color(color_cabecera());
        self.texto(titulo, 11.0, MARGEN, true);
        self.capa.set_fill_color(Color::Rgb(Rgb::new(0.0, 0.0, 0.0, None)));
        self.avanzar(4.0);
    }

    /// Encabezado de sub-bloque ("Hijos:", "Educación Básica:"...).
    fn subtitulo(&mut self, texto: &str) {
        self.asegurar_espacio(6.0);
        self.avanzar(4.5);
        self.texto(texto, 9.0, MARGEN, true);
        self.avanzar(1.5);
    }

    /// Fila de campos repartidos en la grilla de 12 columnas.
    ///
    /// Cada elemento lleva su texto y el ancho en columnas que ocupa.
    fn fila(&mut self, campos: &[(String, u8)]) {
        self.asegurar_espacio(6.0);
        self.avanzar(4.5);

        let mut inicio: u8 = 0;
        for (texto, columnas) in campos {
            self.texto(texto, 9.0, Self::x_columna(inicio), false);
            inicio = inicio.saturating_add(*columnas);
        }

        self.avanzar(1.5);
    }

    /// Línea de detalle a ancho completo en letra pequeña.
    fn linea_detalle(&mut self, texto: &str) {
        self.asegurar_espacio(5.0);
        self.avanzar(4.0);
        self.texto(texto, 8.0, MARGEN, false);
        self.avanzar(1.0);
    }

    /// Línea horizontal separadora a ancho completo.
    fn separador(&mut self, grosor: f32) {
        self.asegurar_espacio(4.0);
        self.avanzar(2.0);

        self.capa.set_outline_color(color_cabecera());
        self.capa.set_outline_thickness(grosor);
        self.capa.add_line(Line {
            points: vec![
                (Point::new(Mm(MARGEN), Mm(self.y)), false),
                (Point::new(Mm(ANCHO_PAGINA - MARGEN), Mm(self.y)), false),
            ],
            is_closed: false,
        });

        self.avanzar(2.0);
    }

    /// Cabecera de la ficha: logo, título y foto del titular.
    fn cabecera(&mut self, usuario: &Usuario) {
        let alto_cabecera = 30.0;
        let tope = self.y;

        // Logo (izquierda, 3 columnas)
        if !self.dibujar_logo(tope - alto_cabecera + 2.0) {
            self.capa.set_fill_color(color_texto());
            self.capa.use_text(
                "LOGO",
                10.0,
                Mm(Self::x_columna(1)),
                Mm(tope - alto_cabecera / 2.0),
                &self.fuente_negrita,
            );
        }

        // Título (centro, 6 columnas)
        let empresa = std::env::var("EMPRESA_NOMBRE")
            .unwrap_or_else(|_| "DIRECCIÓN DE RECURSOS HUMANOS".to_string());
        self.capa.set_fill_color(color_cabecera());
        self.capa.use_text(
            empresa,
            14.0,
            Mm(Self::x_columna(3) + 4.0),
            Mm(tope - 10.0),
            &self.fuente_negrita,
        );
        self.capa.set_fill_color(Color::Rgb(Rgb::new(0.0, 0.0, 0.0, None)));
        self.capa.use_text(
            "FICHA DE DATOS DEL PERSONAL",
            12.0,
            Mm(Self::x_columna(3) + 8.0),
            Mm(tope - 20.0),
            &self.fuente_negrita,
        );

        // Foto (derecha, 3 columnas)
        if !self.dibujar_foto(usuario, tope - alto_cabecera + 2.0) {
            self.capa.set_fill_color(color_texto());
            self.capa.use_text(
                "[ SIN FOTO ]",
                10.0,
                Mm(Self::x_columna(9) + 4.0),
                Mm(tope - alto_cabecera / 2.0),
                &self.fuente_negrita,
            );
            self.capa.set_fill_color(Color::Rgb(Rgb::new(0.0, 0.0, 0.0, None)));
        }

        self.avanzar(alto_cabecera + 3.0);
    }

    /// Intenta dibujar el logo desde las rutas conocidas.
    fn dibujar_logo(&self, y_base: f32) -> bool {
        for ruta in RUTAS_LOGO {
            if let Ok(bytes) = std::fs::read(ruta) {
                if self.dibujar_imagen(&bytes, Self::x_columna(0), y_base, 26.0) {
                    return true;
                }
            }
        }
        false
    }

    /// Intenta dibujar la foto embebida en base64.
    fn dibujar_foto(&self, usuario: &Usuario, y_base: f32) -> bool {
        if usuario.foto.is_empty() || usuario.foto == "null" || usuario.foto == "undefined" {
            return false;
        }

        match decodificar_imagen_base64(&usuario.foto) {
            Ok(bytes) => self.dibujar_imagen(&bytes, Self::x_columna(9) + 4.0, y_base, 26.0),
            Err(e) => {
                warn!("Foto del usuario {} descartada: {}", usuario.dni, e);
                false
            }
        }
    }

    /// Decodifica y coloca una imagen PNG/JPEG escalada a `alto_mm`.
    fn dibujar_imagen(&self, bytes: &[u8], x: f32, y_base: f32, alto_mm: f32) -> bool {
        let imagen = match decodificar_imagen(bytes) {
            Some(imagen) => imagen,
            None => return false,
        };

        let alto_px = imagen.image.height.0 as f32;
        if alto_px <= 0.0 {
            return false;
        }

        // Con 300 dpi, un píxel mide 25.4/300 mm
        let alto_natural_mm = alto_px * 25.4 / 300.0;
        let escala = alto_mm / alto_natural_mm;

        imagen.add_to_layer(
            self.capa.clone(),
            ImageTransform {
                translate_x: Some(Mm(x)),
                translate_y: Some(Mm(y_base)),
                scale_x: Some(escala),
                scale_y: Some(escala),
                ..Default::default()
            },
        );

        true
    }

    /// Pie de la ficha con el momento de generación.
    fn pie(&mut self) {
        self.asegurar_espacio(20.0);
        self.avanzar(10.0);
        self.separador(1.0);

        self.avanzar(4.0);
        self.capa.set_fill_color(color_texto());
        let generado = format!(
            "Generado el: {}",
            chrono::Local::now().format("%d/%m/%Y %H:%M:%S")
        );
        self.texto(&generado, 8.0, ANCHO_PAGINA - MARGEN - 60.0, false);
    }

    /// Cierra el documento y devuelve los bytes generados.
    fn terminar(self) -> AppResult<Vec<u8>> {
        self.doc
            .save_to_bytes()
            .map_err(|e| AppError::PdfError(e.to_string()))
    }
}

/// Quita el prefijo `data:image/...;base64,` y decodifica el contenido.
fn decodificar_imagen_base64(contenido: &str) -> AppResult<Vec<u8>> {
    let datos = match contenido.split_once("base64,") {
        Some((_, resto)) => resto,
        None => contenido,
    };

    STANDARD
        .decode(datos.trim())
        .map_err(|e| AppError::PdfError(format!("base64 inválido: {}", e)))
}

/// Construye la imagen según su firma (PNG o JPEG).
fn decodificar_imagen(bytes: &[u8]) -> Option<Image> {
    use printpdf::image_crate::codecs::{jpeg::JpegDecoder, png::PngDecoder};
    use std::io::Cursor;

    if bytes.starts_with(&[0x89, b'P', b'N', b'G']) {
        let decoder = PngDecoder::new(Cursor::new(bytes)).ok()?;
        Image::try_from(decoder).ok()
    } else if bytes.starts_with(&[0xFF, 0xD8]) {
        let decoder = JpegDecoder::new(Cursor::new(bytes)).ok()?;
        Image::try_from(decoder).ok()
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::dto::usuarios::request::CreateUsuarioRequest;

    fn usuario_de_prueba() -> Usuario {
        let req: CreateUsuarioRequest = serde_json::from_value(serde_json::json!({
            "apellido_paterno": "Canales",
            "apellido_materno": "Rojas",
            "nombres": "Luis Alberto",
            "sexo": "M",
            "dni": "45879632",
            "fecha_nacimiento": "1990-04-12",
            "estado_civil": "Soltero"
        }))
        .unwrap();
        req.to_usuario()
    }

    #[test]
    fn test_ficha_minima_genera_pdf_valido() {
        let usuario = usuario_de_prueba();

        let bytes = GeneradorPdf::instance()
            .generar_ficha(&usuario)
            .expect("la ficha mínima debe generarse");

        assert!(bytes.starts_with(b"%PDF"));
        assert!(bytes.len() > 500);
    }

    #[test]
    fn test_ficha_sin_foto_ni_secciones_opcionales() {
        let mut usuario = usuario_de_prueba();
        usuario.foto = String::new();
        usuario.hijos.clear();
        usuario.capacitaciones.clear();

        let bytes = GeneradorPdf::instance().generar_ficha(&usuario).unwrap();
        assert!(bytes.starts_with(b"%PDF"));
    }

    #[test]
    fn test_foto_con_base64_invalido_no_interrumpe() {
        let mut usuario = usuario_de_prueba();
        usuario.foto = "data:image/jpeg;base64,@@no-es-base64@@".to_string();

        let bytes = GeneradorPdf::instance().generar_ficha(&usuario).unwrap();
        assert!(bytes.starts_with(b"%PDF"));
    }

    #[test]
    fn test_listas_largas_abren_paginas_nuevas() {
        let mut usuario = usuario_de_prueba();
        for i in 0..80 {
            usuario.experiencia_laboral.push(
                crate::domain::entities::usuarios::ExperienciaLaboral {
                    id: format!("exp-{}", i),
                    cargo: "Asistente".to_string(),
                    empresa: format!("Empresa {}", i),
                    fecha_ingreso: "2015-01-01".to_string(),
                    fecha_cese: "2016-01-01".to_string(),
                    tiempo_permanencia: "1 año".to_string(),
                    motivo_cese: "Fin de contrato".to_string(),
                },
            );
        }

        let bytes = GeneradorPdf::instance().generar_ficha(&usuario).unwrap();
        assert!(bytes.starts_with(b"%PDF"));
    }

    #[test]
    fn test_decodificar_imagen_base64_quita_prefijo() {
        let datos = STANDARD.encode([0xFF, 0xD8, 0xFF, 0xE0]);
        let con_prefijo = format!("data:image/jpeg;base64,{}", datos);

        let bytes = decodificar_imagen_base64(&con_prefijo).unwrap();
        assert_eq!(bytes, vec![0xFF, 0xD8, 0xFF, 0xE0]);
    }

    #[test]
    fn test_decodificar_imagen_base64_invalido_falla() {
        assert!(decodificar_imagen_base64("@@@").is_err());
    }
}
