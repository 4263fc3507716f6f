// [tests/mirror/apps/gateway/async_vault.test.rs]
/**
 * =================================================================
 * APARATO: ASYNC VAULT MIRROR TEST (V3.0)
 * CLASIFICACIÓN: TRINITY EVIDENCE (ESTRATO L4-GATEWAY)
 * OBJETIVO: Certificar el ciclo pending -> sealed, los topes de la
 *          bóveda y el barrido de slots vencidos.
 * =================================================================
 */

use panoptes_core_isbn::parse;
use panoptes_domain_models::SearchResult;
use panoptes_gateway::state::async_vault::{AsyncSearchStatus, AsyncSearchVault};
use std::sync::Arc;
use std::time::Duration;
use uuid::Uuid;

fn probe_result() -> Arc<SearchResult> {
    let isbn = parse("9780306406157").expect("reference vector").isbn13;
    Arc::new(SearchResult::scaffold(Uuid::new_v4(), "9780306406157".to_string(), isbn))
}

/**
 * CERTIFICACIÓN: Ciclo de vida pending -> sealed -> consulta.
 */
#[test]
fn certify_pending_sealed_cycle() {
    let vault = AsyncSearchVault::with_bounds(8, Duration::from_secs(600));
    let search_id = Uuid::new_v4();

    assert!(vault.status(&search_id).is_none(), "unknown slots must be None");

    vault.open(search_id);
    assert!(matches!(vault.status(&search_id), Some(AsyncSearchStatus::Pending)));

    let sealed_result = probe_result();
    vault.seal(search_id, sealed_result.clone());

    match vault.status(&search_id) {
        Some(AsyncSearchStatus::Complete(resident)) => {
            assert_eq!(resident.request_id, sealed_result.request_id);
        }
        other => panic!("VAULT_CORRUPTION: sealed slot reported {:?}", other.is_some()),
    }

    println!("✅ VAULT: Pending/sealed cycle certified.");
}

/**
 * CERTIFICACIÓN: La bóveda jamás excede su capacidad; la inserción
 * sobre tope desaloja el slot menos recientemente usado.
 */
#[test]
fn certify_bounded_capacity() {
    let vault = AsyncSearchVault::with_bounds(2, Duration::from_secs(600));
    let first = Uuid::new_v4();
    let second = Uuid::new_v4();
    let third = Uuid::new_v4();

    vault.open(first);
    vault.open(second);
    vault.open(third);

    assert_eq!(vault.resident_slots(), 2, "CAPACITY_BREACH");
    assert!(vault.status(&first).is_none(), "oldest slot must be evicted");
    assert!(vault.status(&third).is_some());

    println!("✅ VAULT: Bounded capacity certified.");
}

/**
 * CERTIFICACIÓN: El barrido recupera los slots vencidos por TTL.
 */
#[test]
fn certify_ttl_sweep() {
    let vault = AsyncSearchVault::with_bounds(8, Duration::from_millis(30));
    vault.open(Uuid::new_v4());
    vault.open(Uuid::new_v4());

    std::thread::sleep(Duration::from_millis(50));

    let purged = vault.sweep();
    assert_eq!(purged, 2, "both expired slots must be reclaimed");
    assert_eq!(vault.resident_slots(), 0);

    println!("✅ VAULT: TTL sweep certified.");
}
