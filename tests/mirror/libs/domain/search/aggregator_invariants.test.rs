// [tests/mirror/libs/domain/search/aggregator_invariants.test.rs]
/**
 * =================================================================
 * APARATO: AGGREGATOR INVARIANTS MIRROR TEST (V3.0)
 * CLASIFICACIÓN: TRINITY EVIDENCE (ESTRATO L2-SEARCH)
 * OBJETIVO: Certificar la idempotencia de la deduplicación por
 *          huella y la conservación de sumas del consolidado.
 * =================================================================
 */

use panoptes_core_isbn::parse;
use panoptes_domain_models::{
    BookHolding, BranchId, HoldingSource, ItemStatus, LibrarySystemId, MaterialType,
};
use panoptes_domain_search::aggregate_holdings;

fn probe_holding(
    system: &str,
    branch: &str,
    status: ItemStatus,
    discriminator: &str,
    copy_count: Option<u32>,
) -> BookHolding {
    let isbn = parse("9780306406157").expect("reference vector").isbn13;
    let system_id = LibrarySystemId::new(system);
    BookHolding {
        fingerprint: BookHolding::compute_fingerprint(&system_id, &isbn, branch, None, Some(discriminator)),
        isbn,
        system_id,
        branch_id: BranchId::new(branch),
        system_name: format!("{} Library System", system),
        branch_name: branch.to_string(),
        call_number: Some(discriminator.to_string()),
        status,
        material_type: MaterialType::Book,
        due_date: None,
        hold_count: None,
        copy_count,
        catalog_url: "https://catalog.example.org".to_string(),
        collection: None,
        volume: None,
        raw_status: "probe".to_string(),
        source: HoldingSource::Direct,
    }
}

/**
 * CERTIFICACIÓN: Huellas iguales colapsan sin importar cuántas veces
 * repita el fan-out el mismo ejemplar (idempotencia).
 */
#[test]
fn certify_fingerprint_dedup_idempotence() {
    let triplicated = vec![
        probe_holding("alpha", "main", ItemStatus::Available, "FIC A", None),
        probe_holding("alpha", "main", ItemStatus::Available, "FIC A", None),
        probe_holding("alpha", "main", ItemStatus::Available, "FIC A", None),
    ];

    let (survivors, aggregate) = aggregate_holdings(triplicated);
    assert_eq!(survivors.len(), 1, "equal fingerprints must collapse to one survivor");
    assert_eq!(aggregate.total_copies, 1);

    // Segunda pasada sobre los supervivientes: punto fijo.
    let (re_survivors, re_aggregate) = aggregate_holdings(survivors);
    assert_eq!(re_survivors.len(), 1, "dedup must be a fixed point");
    assert_eq!(re_aggregate.total_copies, 1);

    println!("✅ AGGREGATOR: Fingerprint dedup idempotence certified.");
}

/**
 * CERTIFICACIÓN: Σ systems[i].total_copies == total_copies y
 * Σ systems[i].available_copies == total_available; ordenación por
 * disponibles desc con desempate por nombre asc.
 */
#[test]
fn certify_sum_conservation_and_sort_order() {
    let harvest = vec![
        probe_holding("zeta", "main", ItemStatus::Available, "Z1", Some(2)),
        probe_holding("alpha", "main", ItemStatus::Available, "A1", Some(2)),
        probe_holding("alpha", "west", ItemStatus::CheckedOut, "A2", None),
        probe_holding("mid", "main", ItemStatus::OnHold, "M1", Some(4)),
    ];

    let (_, aggregate) = aggregate_holdings(harvest);

    let sum_total: u32 = aggregate.systems.iter().map(|s| s.total_copies).sum();
    let sum_available: u32 = aggregate.systems.iter().map(|s| s.available_copies).sum();
    assert_eq!(sum_total, aggregate.total_copies, "SUM_CONSERVATION: total copies");
    assert_eq!(sum_available, aggregate.total_available, "SUM_CONSERVATION: available copies");
    assert_eq!(aggregate.total_copies, 9);
    assert_eq!(aggregate.total_available, 4);

    // Empate a 2 disponibles entre 'alpha' y 'zeta': nombre asc decide.
    assert_eq!(aggregate.systems[0].system_id, LibrarySystemId::new("alpha"));
    assert_eq!(aggregate.systems[1].system_id, LibrarySystemId::new("zeta"));
    assert_eq!(aggregate.systems[2].system_id, LibrarySystemId::new("mid"), "0 available sinks");

    println!("✅ AGGREGATOR: Sum conservation and sort order certified.");
}
