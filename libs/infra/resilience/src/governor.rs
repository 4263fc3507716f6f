// [libs/infra/resilience/src/governor.rs]
/*!
 * =================================================================
 * APARATO: CONCURRENCY GOVERNOR (V8.0 - DUAL SEMAPHORE)
 * CLASIFICACIÓN: INFRASTRUCTURE (ESTRATO L3)
 * RESPONSABILIDAD: PRESUPUESTO DE VUELO GLOBAL Y POR SISTEMA
 *
 * VISION HIPER-HOLÍSTICA:
 * 1. LAYERED BUDGETS: Un semáforo global acota el total de peticiones
 *    salientes; un semáforo por sistema acota la presión sobre cada
 *    catálogo individual.
 * 2. ACQUISITION ORDER: El slot por sistema se adquiere ANTES que el
 *    global. Un catálogo lento acumula espera en SU cola sin retener
 *    capacidad global mientras aguarda.
 * 3. FIFO FAIRNESS: Los semáforos de Tokio despachan permisos en orden
 *    de llegada; no existe cola adicional más allá del semáforo.
 * =================================================================
 */

use panoptes_domain_models::LibrarySystemId;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use tokio::sync::{OwnedSemaphorePermit, Semaphore};

/// Capacidad global por defecto de peticiones en vuelo.
pub const DEFAULT_GLOBAL_CAPACITY: usize = 20;
/// Capacidad por defecto de peticiones en vuelo hacia un mismo sistema.
pub const DEFAULT_PER_HOST_CAPACITY: usize = 2;

/// Par de permisos de vuelo (por sistema + global).
///
/// Ambos slots se liberan automáticamente al soltar el permiso, incluso
/// si la tarea portadora es cancelada por una deadline.
#[derive(Debug)]
pub struct FlightPermit {
    _host_slot: OwnedSemaphorePermit,
    _global_slot: OwnedSemaphorePermit,
}

/// Gobernador bicapa de concurrencia del fan-out.
#[derive(Debug)]
pub struct ConcurrencyGovernor {
    global_slots: Arc<Semaphore>,
    host_slots: Mutex<HashMap<LibrarySystemId, Arc<Semaphore>>>,
}

impl ConcurrencyGovernor {
    /// Construye el gobernador con la capacidad global indicada.
    #[must_use]
    pub fn new(global_capacity: usize) -> Self {
        Self {
            global_slots: Arc::new(Semaphore::new(global_capacity.max(1))),
            host_slots: Mutex::new(HashMap::new()),
        }
    }

    /**
     * Adquiere un permiso de vuelo hacia el sistema indicado.
     *
     * Orden estricto: primero el slot del sistema (capacidad
     * 'host_capacity', creada perezosamente en el primer vuelo),
     * después el slot global. La espera es FIFO en ambos niveles.
     */
    pub async fn acquire(&self, system_id: &LibrarySystemId, host_capacity: usize) -> FlightPermit {
        let host_semaphore = {
            let mut hosts_guard = self.host_slots.lock().expect("GOVERNOR_LOCK_POISONED");
            hosts_guard
                .entry(system_id.clone())
                .or_insert_with(|| Arc::new(Semaphore::new(host_capacity.max(1))))
                .clone()
        };

        let host_slot = host_semaphore
            .acquire_owned()
            .await
            .expect("GOVERNOR_COLLAPSE: host semaphore closed");

        let global_slot = self
            .global_slots
            .clone()
            .acquire_owned()
            .await
            .expect("GOVERNOR_COLLAPSE: global semaphore closed");

        FlightPermit { _host_slot: host_slot, _global_slot: global_slot }
    }

    /// Permisos globales aún disponibles (instrumentación de diagnóstico).
    #[must_use]
    pub fn available_global_slots(&self) -> usize {
        self.global_slots.available_permits()
    }
}

impl Default for ConcurrencyGovernor {
    fn default() -> Self {
        Self::new(DEFAULT_GLOBAL_CAPACITY)
    }
}
