// [libs/infra/resilience/src/health.rs]
/*!
 * =================================================================
 * APARATO: SYSTEM HEALTH TRACKER (V9.0 - DEFENSIVE SNAPSHOTS)
 * CLASIFICACIÓN: INFRASTRUCTURE (ESTRATO L3)
 * RESPONSABILIDAD: VIGILANCIA RODANTE DE SALUD POR SISTEMA
 *
 * VISION HIPER-HOLÍSTICA:
 * 1. LAZY BIRTH: El registro de un sistema nace en su primera llamada
 *    y vive durante todo el proceso.
 * 2. DEFENSIVE COPIES: Todo snapshot entregado al exterior es copia;
 *    mutarlo jamás afecta a los contadores internos.
 * 3. OBSERVER DISCIPLINE: El rastreador observa cada llamada del
 *    coordinador, exitosa o fallida, sin excepción.
 * =================================================================
 */

use chrono::Utc;
use panoptes_domain_models::{HealthRecord, LibrarySystemId};
use std::collections::BTreeMap;
use std::sync::Mutex;

/// Rastreador de salud con mapa protegido por cerrojo único.
#[derive(Debug, Default)]
pub struct HealthTracker {
    records: Mutex<BTreeMap<LibrarySystemId, HealthRecord>>,
}

impl HealthTracker {
    /// Construye un rastreador sin historia.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /**
     * Registra una llamada exitosa con su duración observada.
     */
    pub fn record_success(&self, system_id: &LibrarySystemId, duration_ms: u64) {
        let mut records_guard = self.records.lock().expect("HEALTH_LOCK_POISONED");
        let record = records_guard.entry(system_id.clone()).or_default();
        record.success_count += 1;
        record.cumulative_duration_ms += duration_ms;
        record.last_success_at = Some(Utc::now());
    }

    /**
     * Registra una llamada fallida con su mensaje (ya depurado) y duración.
     */
    pub fn record_failure(&self, system_id: &LibrarySystemId, error_message: &str, duration_ms: u64) {
        let mut records_guard = self.records.lock().expect("HEALTH_LOCK_POISONED");
        let record = records_guard.entry(system_id.clone()).or_default();
        record.failure_count += 1;
        record.cumulative_duration_ms += duration_ms;
        record.last_failure_at = Some(Utc::now());
        record.last_error_message = Some(error_message.to_string());
    }

    /**
     * Snapshot defensivo del registro de un sistema (None sin historia).
     */
    #[must_use]
    pub fn system_health(&self, system_id: &LibrarySystemId) -> Option<HealthRecord> {
        self.records
            .lock()
            .expect("HEALTH_LOCK_POISONED")
            .get(system_id)
            .cloned()
    }

    /**
     * Snapshot defensivo completo, ordenado por identificador de sistema.
     */
    #[must_use]
    pub fn all_health(&self) -> BTreeMap<LibrarySystemId, HealthRecord> {
        self.records.lock().expect("HEALTH_LOCK_POISONED").clone()
    }

    /// Tasa de éxito del sistema; 0.0 sin muestras.
    #[must_use]
    pub fn success_rate(&self, system_id: &LibrarySystemId) -> f64 {
        self.system_health(system_id)
            .map(|record| record.success_rate())
            .unwrap_or(0.0)
    }
}
