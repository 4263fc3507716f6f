// [libs/infra/resilience/src/retry.rs]
/*!
 * =================================================================
 * APARATO: RETRY ENGINE (V10.0 - JITTERED BACKOFF)
 * CLASIFICACIÓN: INFRASTRUCTURE (ESTRATO L3)
 * RESPONSABILIDAD: REINTENTOS CON BACKOFF EXPONENCIAL Y JITTER
 *
 * VISION HIPER-HOLÍSTICA:
 * 1. ERROR-KIND AWARENESS: El predicado 'should_retry' decide por
 *    categoría; los fallos permanentes (auth, rate-limit, parse)
 *    ejecutan la operación exactamente una vez.
 * 2. THUNDERING HERD SHIELD: El jitter uniforme ±25% dispersa las
 *    ráfagas de reintento de múltiples búsquedas concurrentes.
 * 3. CANCELLATION TRANSPARENCY: La espera usa 'tokio::time::sleep',
 *    que es abort-safe; la cancelación de la tarea portadora
 *    interrumpe el reintento de inmediato.
 *
 * # Mathematical Proof (Bounded Attempts):
 * Con 'max_retries' = R, la operación se invoca a lo sumo 1 + R veces.
 * La espera previa al reintento n (1-indexado) es
 * base · 2^(n-1) · U(0.75, 1.25).
 * =================================================================
 */

use rand::Rng;
use std::future::Future;
use std::time::Duration;
use tracing::debug;

/// Política de reintentos de un intento de adaptador.
#[derive(Debug, Clone, Copy)]
pub struct RetryPolicy {
    /// Reintentos máximos tras el intento inicial.
    pub max_retries: u32,
    /// Base del backoff exponencial en milisegundos.
    pub base_delay_ms: u64,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self { max_retries: 2, base_delay_ms: 500 }
    }
}

impl RetryPolicy {
    /**
     * Espera previa al reintento n (1-indexado), con jitter aplicado.
     */
    #[must_use]
    pub fn backoff_delay(&self, retry_number: u32) -> Duration {
        let exponential = self
            .base_delay_ms
            .saturating_mul(1u64 << retry_number.saturating_sub(1).min(20));
        let jitter_factor = rand::thread_rng().gen_range(0.75..=1.25);
        Duration::from_millis((exponential as f64 * jitter_factor) as u64)
    }
}

/**
 * Ejecuta 'operation' bajo la política de reintentos.
 *
 * El predicado 'should_retry' inspecciona cada fallo: si lo declara
 * permanente, el fallo se propaga sin nueva invocación. La operación
 * recibe el número de intento (0 = inicial) para rastro forense.
 *
 * # Errors:
 * El último fallo observado, una vez agotados los reintentos o ante
 * un fallo declarado permanente.
 */
pub async fn with_retry<T, E, F, Fut, P>(
    policy: RetryPolicy,
    should_retry: P,
    mut operation: F,
) -> Result<T, E>
where
    F: FnMut(u32) -> Fut,
    Fut: Future<Output = Result<T, E>>,
    P: Fn(&E) -> bool,
{
    let mut attempt_number: u32 = 0;

    loop {
        match operation(attempt_number).await {
            Ok(outcome) => return Ok(outcome),
            Err(fault) => {
                let retries_exhausted = attempt_number >= policy.max_retries;
                if retries_exhausted || !should_retry(&fault) {
                    return Err(fault);
                }

                attempt_number += 1;
                let rest = policy.backoff_delay(attempt_number);
                debug!(
                    "🔁 [RETRY_ENGINE]: Attempt {} collapsed. Resting {}ms before retry.",
                    attempt_number,
                    rest.as_millis()
                );
                tokio::time::sleep(rest).await;
            }
        }
    }
}
