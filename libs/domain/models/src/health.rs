// [libs/domain/models/src/health.rs]
/*!
 * =================================================================
 * APARATO: SYSTEM HEALTH RECORD (V9.0 - ROLLING TRUTH)
 * CLASIFICACIÓN: DOMAIN MODELS (ESTRATO L2)
 * RESPONSABILIDAD: CONTADORES RODANTES DE SALUD POR SISTEMA
 *
 * # Lifecycle:
 * El registro nace perezosamente en la primera llamada al sistema y
 * vive durante todo el proceso. Los snapshots entregados al exterior
 * son copias defensivas: mutarlos jamás afecta al rastreador.
 * =================================================================
 */

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Contadores rodantes de salud de un sistema bibliotecario.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct HealthRecord {
    /// Llamadas exitosas acumuladas.
    pub success_count: u64,
    /// Llamadas fallidas acumuladas.
    pub failure_count: u64,
    /// Instante del último éxito.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_success_at: Option<DateTime<Utc>>,
    /// Instante del último fallo.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_failure_at: Option<DateTime<Utc>>,
    /// Mensaje del último fallo (ya depurado de material sensible).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_error_message: Option<String>,
    /// Duración acumulada de todas las llamadas en milisegundos.
    pub cumulative_duration_ms: u64,
}

impl HealthRecord {
    /// Tasa de éxito: success / (success + failure); 0.0 sin muestras.
    #[must_use]
    pub fn success_rate(&self) -> f64 {
        let total_samples = self.success_count + self.failure_count;
        if total_samples == 0 {
            return 0.0;
        }
        self.success_count as f64 / total_samples as f64
    }
}
