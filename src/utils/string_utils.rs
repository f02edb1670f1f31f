//! Utilidades de manejo de cadenas
//!
//! Funciones auxiliares compartidas por el mapeo de DTOs y la generación
//! de la ficha PDF.

/// Recorta los espacios en blanco de los extremos y devuelve una copia.
pub fn recortar(valor: &str) -> String {
    valor.trim().to_string()
}

/// Formatea un booleano como "Si" / "No" para la ficha impresa.
pub fn formatear_booleano(valor: bool) -> &'static str {
    if valor { "Si" } else { "No" }
}

/// Devuelve el valor o un guion cuando está vacío.
///
/// En la ficha impresa los campos sin dato se muestran como "-".
pub fn valor_o_guion(valor: &str) -> &str {
    if valor.trim().is_empty() { "-" } else { valor }
}

/// Sanea un fragmento para usarlo en un nombre de archivo.
///
/// Conserva letras y dígitos; los espacios y el resto de caracteres se
/// reemplazan por guion bajo, colapsando las repeticiones.
pub fn nombre_archivo_seguro(valor: &str) -> String {
    let mut resultado = String::with_capacity(valor.len());
    let mut anterior_guion = false;

    for c in valor.trim().chars() {
        if c.is_alphanumeric() {
            resultado.push(c);
            anterior_guion = false;
        } else if !anterior_guion && !resultado.is_empty() {
            resultado.push('_');
            anterior_guion = true;
        }
    }

    while resultado.ends_with('_') {
        resultado.pop();
    }

    resultado
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recortar() {
        assert_eq!(recortar("  Luis Alberto  "), "Luis Alberto");
        assert_eq!(recortar("\t\n"), "");
    }

    #[test]
    fn test_formatear_booleano() {
        assert_eq!(formatear_booleano(true), "Si");
        assert_eq!(formatear_booleano(false), "No");
    }

    #[test]
    fn test_valor_o_guion() {
        assert_eq!(valor_o_guion("45879632"), "45879632");
        assert_eq!(valor_o_guion("   "), "-");
        assert_eq!(valor_o_guion(""), "-");
    }

    #[test]
    fn test_nombre_archivo_seguro() {
        assert_eq!(nombre_archivo_seguro("Luis Alberto"), "Luis_Alberto");
        assert_eq!(nombre_archivo_seguro("  Pérez / Díaz  "), "Pérez_Díaz");
        assert_eq!(nombre_archivo_seguro("Canales"), "Canales");
        assert_eq!(nombre_archivo_seguro("***"), "");
    }
}
