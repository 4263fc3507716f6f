// [libs/domain/search/src/cache.rs]
/*!
 * =================================================================
 * APARATO: SEARCH CACHE + SINGLE FLIGHT (V12.0 - BROADCAST SEAL)
 * CLASIFICACIÓN: DOMAIN ENGINE (ESTRATO L2)
 * RESPONSABILIDAD: CACHÉ DE RESULTADOS Y COALESCENCIA POR ISBN
 *
 * VISION HIPER-HOLÍSTICA:
 * 1. LRU+TTL BACKING: El almacén es el 'MemoryCache' de resiliencia;
 *    este aparato añade la disciplina single-flight.
 * 2. LEADER/FOLLOWER: El primer vuelo de un ISBN abre un canal watch;
 *    los concurrentes se suscriben y reciben el resultado difundido.
 *    El sellado ocurre bajo el cerrojo del mapa de pendientes.
 * 3. CRASH TRANSPARENCY: Si el líder muere sin sellar, el canal se
 *    cierra y los seguidores ejecutan su propio fan-out.
 * 4. KILL SWITCH: Con 'enabled=false' toda operación colapsa a
 *    null/no-op y cada búsqueda va a la red.
 * =================================================================
 */

use panoptes_core_isbn::Isbn13;
use panoptes_domain_models::SearchResult;
use panoptes_infra_resilience::MemoryCache;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::sync::watch;

type FlightChannel = watch::Receiver<Option<Arc<SearchResult>>>;

/// Desenlace de la planificación de un vuelo de búsqueda.
pub enum FlightPlan {
    /// El líder ejecuta el fan-out y sella el resultado.
    Leader(watch::Sender<Option<Arc<SearchResult>>>),
    /// El seguidor espera la difusión del líder en curso.
    Follower(FlightChannel),
}

/// Caché de resultados con coalescencia single-flight por ISBN.
pub struct SearchCache {
    enabled: bool,
    store: MemoryCache<Isbn13, Arc<SearchResult>>,
    pending_flights: Mutex<HashMap<Isbn13, FlightChannel>>,
}

impl SearchCache {
    /// Construye el caché con capacidad, TTL y llave maestra.
    #[must_use]
    pub fn new(enabled: bool, max_entries: usize, time_to_live: Duration) -> Self {
        Self {
            enabled,
            store: MemoryCache::new(max_entries, time_to_live),
            pending_flights: Mutex::new(HashMap::new()),
        }
    }

    /// Resultado vigente para el ISBN; None con el caché deshabilitado.
    #[must_use]
    pub fn lookup(&self, isbn: &Isbn13) -> Option<Arc<SearchResult>> {
        if !self.enabled {
            return None;
        }
        self.store.get(isbn)
    }

    /**
     * Planifica el vuelo del ISBN: el primer llamante se convierte en
     * líder; los concurrentes reciben el canal del vuelo en curso.
     *
     * Un canal pendiente cuyo líder murió (canal cerrado) se reemplaza:
     * el llamante hereda el liderazgo.
     */
    #[must_use]
    pub fn plan_flight(&self, isbn: &Isbn13) -> FlightPlan {
        let mut pending_guard = self.pending_flights.lock().expect("FLIGHT_LOCK_POISONED");

        if let Some(existing_channel) = pending_guard.get(isbn) {
            // has_changed() falla sólo con el emisor muerto (líder caído).
            if existing_channel.has_changed().is_ok() {
                return FlightPlan::Follower(existing_channel.clone());
            }
        }

        let (flight_sender, flight_receiver) = watch::channel(None);
        pending_guard.insert(isbn.clone(), flight_receiver);
        FlightPlan::Leader(flight_sender)
    }

    /**
     * Sella el vuelo: almacena el resultado (si el caché está activo),
     * lo difunde a los seguidores y retira el vuelo pendiente.
     */
    pub fn seal_flight(
        &self,
        isbn: &Isbn13,
        result: Arc<SearchResult>,
        flight_sender: &watch::Sender<Option<Arc<SearchResult>>>,
    ) {
        if self.enabled {
            self.store.set(isbn.clone(), result.clone());
        }

        // Difusión y retiro bajo el mismo cerrojo: un seguidor que llega
        // tras el retiro encuentra el caché ya sellado.
        let mut pending_guard = self.pending_flights.lock().expect("FLIGHT_LOCK_POISONED");
        let _ = flight_sender.send(Some(result));
        pending_guard.remove(isbn);
    }

    /// Cantidad de resultados residentes (diagnóstico).
    #[must_use]
    pub fn resident_results(&self) -> usize {
        self.store.len()
    }
}
