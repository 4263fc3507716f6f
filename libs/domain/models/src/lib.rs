// [libs/domain/models/src/lib.rs]
/*!
 * =================================================================
 * APARATO: DOMAIN MODELS MASTER HUB (V14.0 - FEDERATED TRUTH)
 * CLASIFICACIÓN: DOMAIN MODELS (ESTRATO L2)
 * RESPONSABILIDAD: SINGLE SOURCE OF TRUTH DEL DOMINIO FEDERADO
 *
 * VISION HIPER-HOLÍSTICA 2026:
 * 1. BRANDED IDENTITY: 'LibrarySystemId' y 'BranchId' son envoltorios
 *    opacos; el compilador impide su intercambio implícito.
 * 2. IMMUTABLE HOLDINGS: Un 'BookHolding' emitido por un adaptador es
 *    inmutable durante el resto del pipeline de agregación.
 * 3. CAMEL PARITY: Los DTOs que cruzan la frontera HTTP serializan en
 *    camelCase para paridad con el consumidor de visualización.
 * =================================================================
 */

/// Registro de salud por sistema bibliotecario.
pub mod health;
/// Ejemplares, estados normalizados y huellas de deduplicación.
pub mod holding;
/// Envoltorios opacos de identidad del dominio.
pub mod identity;
/// Descripción declarativa de sistemas, sucursales y adaptadores.
pub mod library;
/// Resultado consolidado de búsqueda y taxonomía de fallos recuperados.
pub mod search;

pub use health::HealthRecord;
pub use holding::{BookHolding, HoldingSource, ItemStatus, MaterialType};
pub use identity::{BranchId, LibrarySystemId};
pub use library::{AdapterConfig, AdapterProtocol, Branch, LibrarySystem};
pub use search::{
    AdapterErrorKind, AggregatedHoldings, BranchSummary, SearchError, SearchResult, SystemSummary,
};

#[cfg(test)]
mod tests_serialization;
