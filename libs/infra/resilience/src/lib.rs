// [libs/infra/resilience/src/lib.rs]
/*!
 * =================================================================
 * APARATO: RESILIENCE INFRASTRUCTURE HUB (V13.0 - FAULT ISOLATION)
 * CLASIFICACIÓN: INFRASTRUCTURE (ESTRATO L3)
 * RESPONSABILIDAD: AISLAMIENTO DE FALLOS DEL FAN-OUT FEDERADO
 *
 * VISION HIPER-HOLÍSTICA 2026:
 * 1. FAULT CONTAINMENT: Un catálogo caído jamás debe degradar la
 *    búsqueda federada completa. Breaker, retry y gobernador forman
 *    el triple escudo del coordinador.
 * 2. ZERO BACKGROUND THREADS: Toda transición temporal (apertura de
 *    breaker, expiración de caché) es perezosa y determinista.
 * 3. LOCK DISCIPLINE: Cada aparato posee su propio cerrojo; no existen
 *    cerrojos compartidos entre estratos.
 * =================================================================
 */

/// Máquina de estados CLOSED / OPEN / HALF_OPEN por adaptador.
pub mod breaker;
/// Caché LRU con TTL absoluto por entrada y expiración perezosa.
pub mod cache;
/// Gobernador bicapa de concurrencia (global + por sistema).
pub mod governor;
/// Rastreador de salud con contadores rodantes por sistema.
pub mod health;
/// Motor de reintentos con backoff exponencial y jitter uniforme.
pub mod retry;

pub use breaker::{CircuitBreaker, CircuitState};
pub use cache::MemoryCache;
pub use governor::{ConcurrencyGovernor, FlightPermit};
pub use health::HealthTracker;
pub use retry::{with_retry, RetryPolicy};
