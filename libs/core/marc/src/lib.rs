// [libs/core/marc/src/lib.rs]
/*!
 * =================================================================
 * APARATO: BIBLIOGRAPHIC EXTRACTION HUB (V10.0 - SOVEREIGN SYNC)
 * CLASIFICACIÓN: CORE PARSING (ESTRATO L1)
 * RESPONSABILIDAD: ORQUESTACIÓN DE PRIMITIVAS MARCXML, SRU Y HTML
 *
 * VISION HIPER-HOLÍSTICA 2026:
 * 1. WIRE NEUTRALITY: Este estrato no conoce adaptadores ni sistemas
 *    bibliotecarios; sólo transforma materia prima (XML/HTML) en
 *    estructuras navegables para el estrato de dominio.
 * 2. XXE HARDENING: El lector XML jamás expande entidades externas.
 * 3. STRATEGY CASCADE: La cosecha HTML prueba estrategias CSS en orden
 *    de especificidad descendente; la primera con filas gana.
 * =================================================================
 */

/// Catálogo de fallos de extracción.
pub mod errors;
/// Cosechadora de filas HTML por estrategias de selectores CSS.
pub mod html;
/// Lector de colecciones MARCXML (controlfield / datafield / subfield).
pub mod marcxml;
/// Modelo navegable de registros MARC.
pub mod record;
/// Sobre SRU 1.1: construcción de URL y extracción de registros.
pub mod sru;

pub use errors::ExtractionError;
pub use html::{harvest_rows, RawHoldingRow, SelectorStrategy};
pub use marcxml::parse_marc_collection;
pub use record::{DataField, MarcRecord, Subfield};
pub use sru::{build_sru_search_url, extract_sru_records};
