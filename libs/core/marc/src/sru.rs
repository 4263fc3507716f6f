// [libs/core/marc/src/sru.rs]
/*!
 * =================================================================
 * APARATO: SRU 1.1 ENVELOPE (V7.0 - WIRE EXACT)
 * CLASIFICACIÓN: CORE PARSING (ESTRATO L1)
 * RESPONSABILIDAD: CONSTRUCCIÓN DE CONSULTA CQL Y APERTURA DEL SOBRE
 *
 * # Wire Contract:
 * GET {base}?version=1.1&operation=searchRetrieve
 *          &query=bath.isbn={isbn}&recordSchema=marcxml&maximumRecords=50
 * La forma es bit-exacta: servidores SRU veteranos rechazan variaciones
 * de capitalización u orden de parámetros no estándar.
 * =================================================================
 */

use crate::errors::ExtractionError;
use crate::marcxml::parse_marc_collection;
use crate::record::MarcRecord;

/// Tope de registros solicitados por ráfaga SRU.
const MAXIMUM_RECORDS_PER_BURST: u8 = 50;

/**
 * Construye la URL de búsqueda SRU 1.1 con consulta CQL 'bath.isbn'.
 * Si la base ya porta parámetros, la consulta se encadena con '&'.
 */
#[must_use]
pub fn build_sru_search_url(base_url: &str, isbn13_digits: &str) -> String {
    let joiner = if base_url.contains('?') { '&' } else { '?' };
    format!(
        "{}{}version=1.1&operation=searchRetrieve&query=bath.isbn={}&recordSchema=marcxml&maximumRecords={}",
        base_url.trim_end_matches('/'),
        joiner,
        isbn13_digits,
        MAXIMUM_RECORDS_PER_BURST
    )
}

/**
 * Abre el sobre 'searchRetrieveResponse' y emite los registros MARC.
 * Acepta variantes con y sin prefijo 'zs:'. Un sobre con cero registros
 * produce un vector vacío, no un fallo.
 */
pub fn extract_sru_records(response_material: &str) -> Result<Vec<MarcRecord>, ExtractionError> {
    parse_marc_collection(response_material)
}
