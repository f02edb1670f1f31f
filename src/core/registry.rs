//! # Service Registry - contenedor de singletons
//!
//! Contenedor de inyección de dependencias por tipo para los componentes
//! de infraestructura del backend. Cada tipo registrado existe exactamente
//! una vez por proceso: `main` registra la conexión a la base de datos al
//! arrancar y los repositorios/servicios la resuelven desde sus propios
//! accesores `instance()` perezosos.
//!
//! ## Componentes
//!
//! - **Registro único**: `set` guarda una instancia `Arc<T>` indexada por `TypeId`
//! - **Resolución**: `get` devuelve el singleton o entra en pánico con un
//!   mensaje claro si el tipo nunca fue registrado (fallo de arranque, no
//!   de petición)
//! - **Thread-safe**: `RwLock` sobre el mapa de instancias; el contenedor
//!   global vive en un `Lazy` de `once_cell`, la guarda de inicialización
//!   única del proceso
//!
//! ## Uso
//!
//! ```rust,ignore
//! // main.rs: registrar la infraestructura al arrancar
//! let database = Arc::new(Database::new().await?);
//! ServiceLocator::set(database);
//!
//! // componentes: resolver el singleton donde haga falta
//! let db = ServiceLocator::get::<Database>();
//! ```

use std::any::{Any, TypeId};
use std::collections::HashMap;
use std::sync::{Arc, RwLock};
use once_cell::sync::Lazy;

/// Contenedor global de singletons
///
/// Mapa `TypeId → Arc<dyn Any>` protegido por `RwLock`. Las instancias se
/// registran una sola vez durante el arranque y se comparten entre todas
/// las peticiones.
pub struct ServiceLocator {
    /// Instancias registradas, una por tipo
    instances: RwLock<HashMap<TypeId, Arc<dyn Any + Send + Sync>>>,
}

impl ServiceLocator {
    /// Solo el `Lazy` global construye el contenedor.
    fn new() -> Self {
        Self {
            instances: RwLock::new(HashMap::new()),
        }
    }

    /// Registra una instancia construida externamente.
    ///
    /// Pensado para los componentes de infraestructura (conexión a la base
    /// de datos) que `main` crea antes de levantar el servidor HTTP.
    /// Registrar dos veces el mismo tipo reemplaza la instancia anterior.
    pub fn set<T: 'static + Send + Sync>(instance: Arc<T>) {
        let type_name = std::any::type_name::<T>();
        log::info!("📦 Registrando singleton: {}", Self::nombre_corto(type_name));

        let mut instances = LOCATOR.instances.write().unwrap();
        instances.insert(TypeId::of::<T>(), instance as Arc<dyn Any + Send + Sync>);
    }

    /// Devuelve el singleton del tipo solicitado.
    ///
    /// # Panics
    ///
    /// Si el tipo nunca fue registrado con [`ServiceLocator::set`]. Eso
    /// solo puede ocurrir por un error de arranque, por lo que se prefiere
    /// el pánico temprano a propagar un `Option` por todo el árbol de
    /// dependencias.
    pub fn get<T: 'static + Send + Sync>() -> Arc<T> {
        Self::try_get::<T>().unwrap_or_else(|| {
            panic!(
                "Singleton no registrado: {}. Registrarlo con ServiceLocator::set() durante el arranque",
                std::any::type_name::<T>()
            )
        })
    }

    /// Variante de [`ServiceLocator::get`] que no entra en pánico.
    pub fn try_get<T: 'static + Send + Sync>() -> Option<Arc<T>> {
        let instances = LOCATOR.instances.read().unwrap();
        instances
            .get(&TypeId::of::<T>())
            .map(|instance| {
                instance
                    .clone()
                    .downcast::<T>()
                    .expect("Tipo inconsistente en ServiceLocator")
            })
    }

    /// Recorta la ruta de módulos del nombre de tipo para los logs.
    fn nombre_corto(type_name: &str) -> &str {
        type_name.rsplit("::").next().unwrap_or(type_name)
    }
}

/// Instancia global del contenedor
///
/// `Lazy<T>` garantiza una única inicialización por proceso; todos los
/// accesos posteriores reutilizan la misma instancia.
static LOCATOR: Lazy<ServiceLocator> = Lazy::new(ServiceLocator::new);

#[cfg(test)]
mod tests {
    use super::*;

    struct Marcador {
        valor: u32,
    }

    #[test]
    fn test_set_y_get_devuelven_la_misma_instancia() {
        ServiceLocator::set(Arc::new(Marcador { valor: 7 }));

        let a = ServiceLocator::get::<Marcador>();
        let b = ServiceLocator::get::<Marcador>();

        assert_eq!(a.valor, 7);
        assert!(Arc::ptr_eq(&a, &b));
    }

    #[test]
    fn test_try_get_sin_registrar_devuelve_none() {
        struct NuncaRegistrado;

        assert!(ServiceLocator::try_get::<NuncaRegistrado>().is_none());
    }
}
