// [apps/gateway/src/state/async_vault.rs]
/*!
 * =================================================================
 * APARATO: ASYNC SEARCH VAULT (V8.0 - BOUNDED TRANSIT)
 * CLASIFICACIÓN: APPLICATION STATE (ESTRATO L1-APP)
 * RESPONSABILIDAD: BÓVEDA ACOTADA DE BÚSQUEDAS ASÍNCRONAS
 *
 * VISION HIPER-HOLÍSTICA:
 * 1. BOUNDED LIFECYCLE: POST /search abre un slot 'pending'; el
 *    fan-out de fondo lo sella con el resultado. Tope de 1000 slots
 *    con TTL de 10 minutos; la inserción sobre capacidad desaloja
 *    el slot menos recientemente usado.
 * 2. LAZY + SWEPT EVICTION: La expiración perezosa ocurre en cada
 *    consulta; el daemon de barrido recupera RAM entre consultas.
 * 3. SINGLE INSTANCE SCOPE: La bóveda vive en RAM del proceso; un
 *    despliegue multi-instancia exigiría un almacén externo.
 * =================================================================
 */

use panoptes_domain_models::SearchResult;
use panoptes_infra_resilience::MemoryCache;
use std::sync::Arc;
use std::time::Duration;
use uuid::Uuid;

/// Tope de slots residentes en la bóveda.
const VAULT_CAPACITY: usize = 1_000;
/// Vida máxima de un slot, sellado o no.
const VAULT_TTL: Duration = Duration::from_secs(600);

/// Estado observable de una búsqueda asíncrona.
#[derive(Debug, Clone)]
pub enum AsyncSearchStatus {
    /// El fan-out sigue en vuelo.
    Pending,
    /// Resultado sellado y listo para entrega.
    Complete(Arc<SearchResult>),
}

/// Bóveda acotada de búsquedas asíncronas en tránsito.
pub struct AsyncSearchVault {
    slots: MemoryCache<Uuid, AsyncSearchStatus>,
}

impl AsyncSearchVault {
    /// Construye la bóveda con los topes nominales (1000 slots, 10 min).
    #[must_use]
    pub fn with_nominal_bounds() -> Self {
        Self::with_bounds(VAULT_CAPACITY, VAULT_TTL)
    }

    /// Construye la bóveda con topes explícitos (bancos de prueba).
    #[must_use]
    pub fn with_bounds(capacity: usize, time_to_live: Duration) -> Self {
        Self { slots: MemoryCache::new(capacity, time_to_live) }
    }

    /// Abre un slot 'pending' para la búsqueda recién despachada.
    pub fn open(&self, search_id: Uuid) {
        self.slots.set(search_id, AsyncSearchStatus::Pending);
    }

    /**
     * Sella el slot con el resultado del fan-out.
     * Un slot ya desalojado se re-crea: el consumidor que aún posee el
     * identificador recupera su resultado dentro del TTL.
     */
    pub fn seal(&self, search_id: Uuid, result: Arc<SearchResult>) {
        self.slots.set(search_id, AsyncSearchStatus::Complete(result));
    }

    /// Estado vigente del slot; None para desconocido o vencido.
    #[must_use]
    pub fn status(&self, search_id: &Uuid) -> Option<AsyncSearchStatus> {
        self.slots.get(search_id)
    }

    /// Barrido explícito de slots vencidos (daemon de higiene).
    pub fn sweep(&self) -> usize {
        self.slots.purge_expired()
    }

    /// Slots residentes (diagnóstico).
    #[must_use]
    pub fn resident_slots(&self) -> usize {
        self.slots.len()
    }
}
