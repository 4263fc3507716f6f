// [apps/gateway/src/services/vault_sweeper.rs]
/*!
 * =================================================================
 * APARATO: VAULT SWEEPER DAEMON (V7.0 - HYGIENE HARDENED)
 * CLASIFICACIÓN: BACKGROUND INFRASTRUCTURE (ESTRATO L4)
 * RESPONSABILIDAD: RECUPERACIÓN DE RAM DE SLOTS VENCIDOS
 *
 * VISION HIPER-HOLÍSTICA:
 * 1. PRIMARY BOUND ELSEWHERE: El tope TTL+capacidad de la bóveda se
 *    aplica en cada inserción; este daemon sólo recupera RAM entre
 *    inserciones, cuando nadie consulta los slots muertos.
 * 2. QUIET CADENCE: Ciclo de 60 segundos, sintonizado para no
 *    introducir jitter en los hilos de red del fan-out.
 * =================================================================
 */

use crate::state::AppState;
use std::time::Duration;
use tokio::time::interval;
use tracing::info;

/**
 * Inicia el daemon de barrido perpetuo en el runtime de Tokio.
 */
pub fn spawn_vault_sweeper(application_state: AppState) {
    let mut maintenance_ticker = interval(Duration::from_secs(60));

    tokio::spawn(async move {
        info!("💀 [SWEEPER_ACTIVE]: Vault hygiene daemon initiated.");

        loop {
            maintenance_ticker.tick().await;

            let purged_slots = application_state.async_vault.sweep();
            if purged_slots > 0 {
                info!(
                    "💀 [SWEEPER_CLEANUP]: Evicted {} expired async slots ({} resident).",
                    purged_slots,
                    application_state.async_vault.resident_slots()
                );
            }
        }
    });
}
