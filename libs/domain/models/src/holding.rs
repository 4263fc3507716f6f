// [libs/domain/models/src/holding.rs]
/*!
 * =================================================================
 * APARATO: BOOK HOLDING CONTRACTS (V19.0 - FINGERPRINT SEALED)
 * CLASIFICACIÓN: DOMAIN MODELS (ESTRATO L2)
 * RESPONSABILIDAD: EJEMPLARES, ESTADOS NORMALIZADOS Y HUELLAS DEDUP
 *
 * VISION HIPER-HOLÍSTICA 2026:
 * 1. FINGERPRINT DETERMINISM: La huella de un ejemplar físico es
 *    estable entre búsquedas consecutivas; dos huellas iguales son,
 *    por definición, el mismo ejemplar descubierto por dos caminos.
 * 2. SOURCE TAGGING: 'HoldingSource' reemplaza la detección por
 *    substring de texto crudo: disponibilidad directa en tiempo real
 *    prevalece estrictamente sobre disponibilidad agregada.
 * 3. IMMUTABILITY: Un ejemplar emitido por un adaptador no se muta;
 *    el agregador lo posee durante el resto del pipeline.
 *
 * # Mathematical Proof (Fingerprint Stability):
 * La huella '(system, isbn, branch_code, discriminador)' en minúsculas
 * es función pura de atributos físicos del ejemplar. El discriminador
 * elige el campo más único disponible (barcode > signatura), por lo que
 * dos búsquedas consecutivas del mismo ejemplar colisionan siempre.
 * =================================================================
 */

use crate::identity::{BranchId, LibrarySystemId};
use panoptes_core_isbn::Isbn13;
use serde::{Deserialize, Serialize};

/// Vocabulario normalizado de estado de circulación.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ItemStatus {
    /// En estantería, disponible para préstamo.
    Available,
    /// Prestado a un usuario.
    CheckedOut,
    /// En tránsito entre sucursales.
    InTransit,
    /// Retenido para una reserva.
    OnHold,
    /// Pedido al proveedor, aún no recibido.
    OnOrder,
    /// En procesamiento técnico o catalogación.
    InProcessing,
    /// Perdido, extraviado o retirado.
    Missing,
    /// El vendor no expone estado interpretable.
    Unknown,
}

/// Tipo de material del ejemplar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MaterialType {
    /// Libro impreso.
    Book,
    /// Letra grande.
    LargePrint,
    /// Audiolibro físico (CD).
    Audiobook,
    /// Película (DVD/BluRay).
    Dvd,
    /// Libro electrónico.
    Ebook,
    /// Material no clasificado.
    Other,
}

/// Procedencia de la disponibilidad del ejemplar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HoldingSource {
    /// Consulta directa al catálogo del sistema (tiempo real).
    Direct,
    /// Agregador externo sin disponibilidad en tiempo real.
    Aggregated,
}

/// Un ejemplar físico o lógico en una sucursal concreta.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookHolding {
    /// Forma canónica de 13 dígitos buscada.
    pub isbn: Isbn13,
    /// Sistema propietario del ejemplar.
    pub system_id: LibrarySystemId,
    /// Sucursal (declarada, o texto crudo del vendor si no resolvió).
    pub branch_id: BranchId,
    /// Nombre visible del sistema.
    pub system_name: String,
    /// Nombre visible de la sucursal.
    pub branch_name: String,
    /// Signatura topográfica.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub call_number: Option<String>,
    /// Estado normalizado del vocabulario canónico.
    pub status: ItemStatus,
    /// Tipo de material.
    pub material_type: MaterialType,
    /// Fecha de devolución declarada por el vendor (texto sin reinterpretar).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub due_date: Option<String>,
    /// Cantidad de reservas declarada.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hold_count: Option<u32>,
    /// Cantidad de copias que este registro representa (1 si ausente).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub copy_count: Option<u32>,
    /// Enlace al registro en el catálogo público.
    pub catalog_url: String,
    /// Colección ("Adult Fiction", "YA").
    #[serde(skip_serializing_if = "Option::is_none")]
    pub collection: Option<String>,
    /// Volumen, para obras multi-tomo.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub volume: Option<String>,
    /// Estado crudo tal como lo emitió el vendor (rastro forense).
    pub raw_status: String,
    /// Procedencia de la disponibilidad.
    pub source: HoldingSource,
    /// Huella determinista de deduplicación.
    pub fingerprint: String,
}

impl BookHolding {
    /**
     * Calcula la huella determinista de deduplicación.
     *
     * Forma: 'system:isbn:branch_code:discriminador' en minúsculas,
     * donde el discriminador es el campo más único disponible
     * (barcode > signatura > centinela "-").
     */
    #[must_use]
    pub fn compute_fingerprint(
        system_id: &LibrarySystemId,
        isbn: &Isbn13,
        branch_code: &str,
        barcode: Option<&str>,
        call_number: Option<&str>,
    ) -> String {
        let discriminator = barcode
            .filter(|candidate| !candidate.trim().is_empty())
            .or(call_number.filter(|candidate| !candidate.trim().is_empty()))
            .unwrap_or("-");

        format!(
            "{}:{}:{}:{}",
            system_id.as_str(),
            isbn.as_str(),
            branch_code.trim(),
            discriminator.trim()
        )
        .to_lowercase()
    }
}
