// [libs/domain/search/src/lib.rs]
/*!
 * =================================================================
 * APARATO: FEDERATED SEARCH ENGINE HUB (V16.0 - PANOPTICON CORE)
 * CLASIFICACIÓN: DOMAIN ENGINE (ESTRATO L2)
 * RESPONSABILIDAD: DEFINICIÓN SUPREMA DEL MOTOR DE BÚSQUEDA FEDERADA
 *
 * VISION HIPER-HOLÍSTICA 2026:
 * 1. TRIPLE DEADLINE: Cada llamada saliente vive bajo tres relojes
 *    anidados (por petición, por sistema, global); el primero en
 *    vencer cancela la operación y libera sus permisos.
 * 2. RECOVERED FAN-OUT: Ningún fallo de adaptador aborta la búsqueda;
 *    todos cristalizan como entradas categorizadas del resultado.
 * 3. SINGLE FLIGHT: Búsquedas concurrentes del mismo ISBN comparten
 *    un único cómputo subyacente difundido a todos los esperantes.
 * =================================================================
 */

/// Agregador: deduplicación por huella, fuentes cruzadas y consolidados.
pub mod aggregator;
/// Caché de resultados con single-flight por ISBN.
pub mod cache;
/// Configuración del motor (presupuestos, deadlines, caché).
pub mod config;
/// Coordinador del fan-out federado.
pub mod coordinator;

pub use aggregator::aggregate_holdings;
pub use cache::SearchCache;
pub use config::SearchConfig;
pub use coordinator::SearchCoordinator;
