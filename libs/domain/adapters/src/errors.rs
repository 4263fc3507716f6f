// INICIO DEL ARCHIVO [libs/domain/adapters/src/errors.rs]
/*!
 * =================================================================
 * APARATO: ADAPTER FAULT CATALOG (V11.0 - TAXONOMY SEALED)
 * CLASIFICACIÓN: DOMAIN ADAPTERS (ESTRATO L2/L3)
 * RESPONSABILIDAD: CATALOGACIÓN DE FALLOS DE COMUNICACIÓN FEDERADA
 *
 * # Taxonomía de recuperación:
 * - Transitorios (reintentables): Connection, Timeout, Unknown.
 * - Permanentes para la ráfaga: Auth, RateLimit, Parse.
 * El coordinador recupera TODOS: jamás abortan el fan-out.
 * =================================================================
 */

use panoptes_domain_models::AdapterErrorKind;
use thiserror::Error;

/// Catálogo de fallos de un intento de adaptador.
#[derive(Error, Debug)]
pub enum AdapterError {
    /// Red inalcanzable o conexión colapsada.
    #[error("NETWORK_UNREACHABLE: {0}")]
    Connection(String),

    /// Deadline por petición vencida.
    #[error("DEADLINE_ELAPSED: request exceeded {0}ms")]
    Timeout(u64),

    /// Credencial rechazada (401/403) o ausente.
    #[error("CREDENTIAL_REJECTED: {0}")]
    Auth(String),

    /// Throttling del vendor (429), con posible ventana Retry-After.
    #[error("VENDOR_THROTTLE: HTTP 429 (retry-after: {retry_after_seconds:?}s)")]
    RateLimit {
        /// Segundos declarados por el vendor antes de reintentar.
        retry_after_seconds: Option<u64>,
    },

    /// Cuerpo malformado o esquema inesperado.
    #[error("RESPONSE_CORRUPTION: {0}")]
    Parse(String),

    /// Fallo no categorizado.
    #[error("UNCLASSIFIED_FAULT: {0}")]
    Unknown(String),
}

impl AdapterError {
    /// Categoría serializable del fallo para 'SearchResult.errors'.
    #[must_use]
    pub fn kind(&self) -> AdapterErrorKind {
        match self {
            Self::Connection(_) => AdapterErrorKind::Connection,
            Self::Timeout(_) => AdapterErrorKind::Timeout,
            Self::Auth(_) => AdapterErrorKind::Auth,
            Self::RateLimit { .. } => AdapterErrorKind::RateLimit,
            Self::Parse(_) => AdapterErrorKind::Parse,
            Self::Unknown(_) => AdapterErrorKind::Unknown,
        }
    }

    /**
     * true para fallos transitorios que el motor de reintentos admite.
     * Los fallos no categorizados se consideran transitorios para
     * preservar la semántica de recuperación del fan-out.
     */
    #[must_use]
    pub fn is_transient(&self) -> bool {
        matches!(self, Self::Connection(_) | Self::Timeout(_) | Self::Unknown(_))
    }

    /**
     * true para fallos que admiten fallback a un adaptador alternativo.
     * Auth y RateLimit se registran sin fallback: otro adaptador del
     * mismo sistema compartiría credenciales o presupuesto de ráfaga.
     */
    #[must_use]
    pub fn admits_fallback(&self) -> bool {
        !matches!(self, Self::Auth(_) | Self::RateLimit { .. })
    }
}

// FIN DEL ARCHIVO [libs/domain/adapters/src/errors.rs]
