// [libs/domain/models/src/search.rs]
/*!
 * =================================================================
 * APARATO: SEARCH RESULT CONTRACTS (V21.0 - CONSOLIDATED TRUTH)
 * CLASIFICACIÓN: DOMAIN MODELS (ESTRATO L2)
 * RESPONSABILIDAD: RESULTADO CONSOLIDADO Y TAXONOMÍA DE FALLOS
 *
 * VISION HIPER-HOLÍSTICA 2026:
 * 1. RECOVERED FAULTS: Los fallos de adaptador jamás abortan el
 *    fan-out; se cristalizan como entradas categorizadas de 'errors'.
 * 2. LIFECYCLE DISCIPLINE: El resultado nace como andamio al iniciar
 *    la búsqueda, sólo el coordinador lo muta, y al completarse queda
 *    inmutable y cacheable.
 * 3. PARTIAL HONESTY: Si la deadline global venció antes de que todos
 *    los sistemas respondieran, 'is_partial' lo declara sin ambigüedad.
 * =================================================================
 */

use crate::holding::BookHolding;
use crate::identity::{BranchId, LibrarySystemId};
use chrono::{DateTime, Utc};
use panoptes_core_isbn::Isbn13;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Categorías de fallo de un intento de adaptador (taxonomía recuperada).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AdapterErrorKind {
    /// Red inalcanzable o conexión colapsada (reintentable).
    Connection,
    /// Deadline por petición vencida (reintentable).
    Timeout,
    /// 401/403 o credencial ausente (permanente, sin fallback).
    Auth,
    /// 429 del vendor, con posible Retry-After (permanente para la ráfaga).
    RateLimit,
    /// Cuerpo malformado o esquema inesperado (permanente para la respuesta).
    Parse,
    /// Breaker abierto: el intento jamás salió a la red (sintético).
    CircuitOpen,
    /// La tarea seguía en vuelo cuando venció la deadline global.
    TimedOut,
    /// Fallo no categorizado.
    Unknown,
}

/// Entrada de fallo categorizado de un intento de adaptador.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchError {
    /// Sistema cuyo intento falló.
    pub system_id: LibrarySystemId,
    /// Etiqueta nominal del protocolo del adaptador que intentó.
    pub protocol: String,
    /// Categoría del fallo.
    pub error_type: AdapterErrorKind,
    /// Mensaje descriptivo (ya depurado de material sensible).
    pub message: String,
    /// Instante de registro del fallo.
    pub occurred_at: DateTime<Utc>,
}

/// Consolidado por sucursal tras la agregación.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BranchSummary {
    /// Sucursal consolidada.
    pub branch_id: BranchId,
    /// Nombre visible de la sucursal.
    pub branch_name: String,
    /// Copias totales (copy_count ?? 1 por ejemplar).
    pub total_copies: u32,
    /// Copias con estado exactamente 'available'.
    pub available_copies: u32,
    /// Copias con estado exactamente 'checked_out'.
    pub checked_out_copies: u32,
}

/// Consolidado por sistema tras la agregación.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SystemSummary {
    /// Sistema consolidado.
    pub system_id: LibrarySystemId,
    /// Nombre visible del sistema.
    pub system_name: String,
    /// Sucursales, en orden de cosecha.
    pub branches: Vec<BranchSummary>,
    /// Suma de copias de todas las sucursales.
    pub total_copies: u32,
    /// Suma de copias disponibles.
    pub available_copies: u32,
    /// Suma de copias prestadas.
    pub checked_out_copies: u32,
    /// Suma de reservas declaradas.
    pub hold_count: u32,
}

/// Consolidado global de la búsqueda.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct AggregatedHoldings {
    /// Sistemas ordenados por copias disponibles desc, nombre asc.
    pub systems: Vec<SystemSummary>,
    /// Σ copias de todos los sistemas.
    pub total_copies: u32,
    /// Σ copias disponibles de todos los sistemas.
    pub total_available: u32,
    /// Σ copias prestadas de todos los sistemas.
    pub total_checked_out: u32,
    /// Σ reservas declaradas de todos los sistemas.
    pub total_holds: u32,
}

/// Resultado consolidado de una búsqueda federada.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResult {
    /// Identificador único de la petición de búsqueda.
    pub request_id: Uuid,
    /// Materia prima exacta que envió el consumidor.
    pub original_isbn: String,
    /// Forma canónica de 13 dígitos efectivamente buscada.
    pub isbn13: Isbn13,
    /// Instante de inicio del fan-out.
    pub started_at: DateTime<Utc>,
    /// Instante de sellado del resultado.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub completed_at: Option<DateTime<Utc>>,
    /// Ejemplares supervivientes de la deduplicación, en orden de llegada.
    pub holdings: Vec<BookHolding>,
    /// Fallos recuperados, uno por intento de adaptador fallido.
    pub errors: Vec<SearchError>,
    /// Consolidado por sistema/sucursal.
    pub aggregate: AggregatedHoldings,
    /// Sistemas consultados en el fan-out.
    pub systems_searched: u32,
    /// Sistemas que respondieron con éxito.
    pub systems_succeeded: u32,
    /// Sistemas cuyo intento colapsó (fallos permanentes o agotados).
    pub systems_failed: u32,
    /// Sistemas aún en vuelo al vencer la deadline global.
    pub systems_timed_out: u32,
    /// true si la deadline global venció antes de completar el fan-out.
    pub is_partial: bool,
    /// true si el resultado proviene del caché y no de la red.
    pub from_cache: bool,
}

impl SearchResult {
    /**
     * Crea el andamio inicial de una búsqueda recién iniciada.
     * Sólo el coordinador muta el andamio durante su ciclo de vida.
     */
    #[must_use]
    pub fn scaffold(request_id: Uuid, original_isbn: String, isbn13: Isbn13) -> Self {
        Self {
            request_id,
            original_isbn,
            isbn13,
            started_at: Utc::now(),
            completed_at: None,
            holdings: Vec::new(),
            errors: Vec::new(),
            aggregate: AggregatedHoldings::default(),
            systems_searched: 0,
            systems_succeeded: 0,
            systems_failed: 0,
            systems_timed_out: 0,
            is_partial: false,
            from_cache: false,
        }
    }
}
