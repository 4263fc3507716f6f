// [libs/domain/adapters/src/envelope.rs]
/*!
 * =================================================================
 * APARATO: ADAPTER SEARCH ENVELOPE (V13.0 - TRIPLE SHIELD INNER RING)
 * CLASIFICACIÓN: DOMAIN ADAPTERS (ESTRATO L3)
 * RESPONSABILIDAD: TIMING, TIMEOUT POR PETICIÓN Y REINTENTOS
 *
 * VISION HIPER-HOLÍSTICA:
 * 1. INNER RING: Este sobre aplica el anillo interior del triple
 *    escudo (timeout por petición + retry con jitter). Los anillos
 *    exteriores (breaker, gobernador, deadline por sistema y global)
 *    pertenecen al coordinador.
 * 2. ERROR-KIND PREDICATE: Sólo los fallos transitorios reintentan;
 *    auth, rate-limit y parse ejecutan exactamente una vez.
 * 3. LATENCY TRUTH: La latencia reportada incluye los reintentos:
 *    es el costo real observado por el coordinador.
 * =================================================================
 */

use crate::contract::{CatalogAdapter, SearchOutcome};
use crate::errors::AdapterError;
use panoptes_core_isbn::Isbn13;
use panoptes_domain_models::LibrarySystem;
use panoptes_infra_resilience::{with_retry, RetryPolicy};
use std::time::{Duration, Instant};
use tracing::debug;

/**
 * Ejecuta la búsqueda del adaptador bajo el anillo interior del escudo.
 *
 * Cada intento corre bajo el timeout por petición del 'AdapterConfig';
 * el vencimiento cristaliza como 'AdapterError::Timeout' reintentable.
 *
 * # Errors:
 * El último fallo categorizado tras agotar la política de reintentos.
 */
pub async fn run_guarded_search(
    adapter: &dyn CatalogAdapter,
    isbn: &Isbn13,
    system: &LibrarySystem,
    retry_policy: RetryPolicy,
) -> Result<SearchOutcome, AdapterError> {
    let flight_started = Instant::now();
    let per_request_timeout_ms = adapter.config().timeout_ms;

    let holdings = with_retry(retry_policy, AdapterError::is_transient, |attempt_number| {
        async move {
            if attempt_number > 0 {
                debug!(
                    "🛰️  [ADAPTER_RETRY]: {} attempt {} for system [{}].",
                    adapter.protocol().label(),
                    attempt_number,
                    system.id
                );
            }

            match tokio::time::timeout(
                Duration::from_millis(per_request_timeout_ms),
                adapter.execute_search(isbn, system),
            )
            .await
            {
                Ok(raw_outcome) => raw_outcome,
                Err(_deadline_elapsed) => Err(AdapterError::Timeout(per_request_timeout_ms)),
            }
        }
    })
    .await?;

    Ok(SearchOutcome {
        holdings,
        protocol: adapter.protocol(),
        response_time_ms: flight_started.elapsed().as_millis() as u64,
    })
}
