// [libs/infra/registry/src/lib.rs]
/*!
 * =================================================================
 * APARATO: LIBRARY REGISTRY HUB (V7.0 - DECLARATIVE TRUTH)
 * CLASIFICACIÓN: INFRASTRUCTURE (ESTRATO L3)
 * RESPONSABILIDAD: CARGA Y VALIDACIÓN DEL REGISTRO DE SISTEMAS
 *
 * VISION HIPER-HOLÍSTICA:
 * Un directorio de documentos YAML, un sistema por archivo, es la
 * única fuente de verdad sobre la federación. La carga ocurre una
 * vez en la ignición; después el registro es de solo lectura.
 * =================================================================
 */

/// Catálogo de fallos de configuración (fatales en la ignición).
pub mod errors;
/// Motor de carga, interpolación '${ENV}' y validación de invariantes.
pub mod loader;

pub use errors::ConfigurationError;
pub use loader::{load_registry, LibraryRegistry};
