// [libs/domain/models/src/tests_serialization.rs]
/**
 * =================================================================
 * APARATO: DOMAIN SERIALIZATION TEST (V6.0 - CAMEL PARITY)
 * CLASIFICACIÓN: TRINITY EVIDENCE (ESTRATO L2-MODELS)
 * RESPONSABILIDAD: CERTIFICACIÓN DE PARIDAD JSON CON EL CONSUMIDOR
 *
 * # Logic:
 * El consumidor de visualización espera camelCase y discriminadores
 * snake_case en los vocabularios ('checked_out', 'rate_limit'). Toda
 * deriva de esquema rompe el contrato silenciosamente; este aparato
 * la detecta en tiempo de test.
 * =================================================================
 */

use crate::holding::{BookHolding, HoldingSource, ItemStatus, MaterialType};
use crate::identity::{BranchId, LibrarySystemId};
use crate::search::{AdapterErrorKind, SearchResult};
use panoptes_core_isbn::parse;
use uuid::Uuid;

/**
 * CERTIFICACIÓN: Roundtrip del ejemplar con discriminadores exactos.
 */
#[test]
fn certify_holding_serialization_roundtrip() {
    let isbn = parse("9780306406157").expect("reference vector").isbn13;
    let system_id = LibrarySystemId::new("harris-county");

    let holding = BookHolding {
        fingerprint: BookHolding::compute_fingerprint(&system_id, &isbn, "MAIN", None, Some("FIC SMI")),
        isbn,
        system_id,
        branch_id: BranchId::new("main"),
        system_name: "Harris County Public Library".to_string(),
        branch_name: "Main Library".to_string(),
        call_number: Some("FIC SMI".to_string()),
        status: ItemStatus::CheckedOut,
        material_type: MaterialType::Book,
        due_date: Some("2025-12-15".to_string()),
        hold_count: Some(2),
        copy_count: None,
        catalog_url: "https://catalog.hcpl.net".to_string(),
        collection: Some("Adult Fiction".to_string()),
        volume: None,
        raw_status: "Checked Out".to_string(),
        source: HoldingSource::Direct,
    };

    let serialized = serde_json::to_string_pretty(&holding)
        .expect("CRITICAL_FAULT: holding serialization collapsed");

    // AUDITORÍA DE FIRMA DE PROTOCOLO (camelCase + snake_case discriminators)
    assert!(serialized.contains("\"systemId\": \"harris-county\""));
    assert!(serialized.contains("\"status\": \"checked_out\""));
    assert!(serialized.contains("\"source\": \"direct\""));
    assert!(serialized.contains("\"dueDate\": \"2025-12-15\""));

    let recovered: BookHolding = serde_json::from_str(&serialized)
        .expect("CRITICAL_FAULT: holding deserialization failed, schema drift detected");
    assert_eq!(recovered, holding, "L2_DATA_CORRUPTION: holding roundtrip mismatch");
}

/**
 * CERTIFICACIÓN: El andamio del resultado serializa contadores camelCase
 * y el vocabulario de fallos mantiene sus discriminadores.
 */
#[test]
fn certify_search_result_scaffold_serialization() {
    let parsed = parse("0306406152").expect("reference vector");
    let scaffold = SearchResult::scaffold(
        Uuid::new_v4(),
        "0-306-40615-2".to_string(),
        parsed.isbn13,
    );

    let serialized = serde_json::to_string(&scaffold)
        .expect("CRITICAL_FAULT: scaffold serialization collapsed");

    assert!(serialized.contains("\"isbn13\":\"9780306406157\""));
    assert!(serialized.contains("\"isPartial\":false"));
    assert!(serialized.contains("\"fromCache\":false"));
    assert!(serialized.contains("\"systemsSearched\":0"));

    assert_eq!(
        serde_json::to_string(&AdapterErrorKind::RateLimit).expect("kind serialization"),
        "\"rate_limit\"",
        "L2_VOCABULARY_DRIFT: error kind discriminator changed"
    );
}
