// [libs/domain/search/src/aggregator.rs]
/*!
 * =================================================================
 * APARATO: RESULT AGGREGATOR (V14.0 - FINGERPRINT DISCIPLINE)
 * CLASIFICACIÓN: DOMAIN ENGINE (ESTRATO L2)
 * RESPONSABILIDAD: DEDUPLICACIÓN Y CONSOLIDACIÓN DEL FAN-OUT
 *
 * VISION HIPER-HOLÍSTICA 2026:
 * 1. FINGERPRINT DEDUP: Dos huellas iguales son el mismo ejemplar
 *    físico descubierto por dos caminos; sobrevive la primera.
 * 2. CROSS-SOURCE DEDUP: Si un sistema aporta disponibilidad directa
 *    en tiempo real, toda fila agregada de ese sistema se descarta:
 *    lo directo prevalece estrictamente sobre lo agregado.
 * 3. ORDER INDEPENDENCE: El orden de llegada del fan-out no es
 *    determinista; las huellas y la ordenación final (disponibles
 *    desc, nombre asc) estabilizan el consolidado.
 *
 * # Mathematical Proof (Sum Conservation):
 * Σ systems[i].total_copies == total_copies y
 * Σ systems[i].available_copies == total_available, porque cada
 * ejemplar superviviente se asigna a exactamente un sistema y una
 * sucursal con peso copy_count ?? 1.
 * =================================================================
 */

use panoptes_domain_models::{
    AggregatedHoldings, BookHolding, BranchSummary, HoldingSource, ItemStatus, LibrarySystemId,
    SystemSummary,
};
use std::collections::{HashMap, HashSet};

/**
 * Ejecuta el pipeline completo de agregación sobre la cosecha cruda.
 * Retorna los ejemplares supervivientes y el consolidado ordenado.
 */
#[must_use]
pub fn aggregate_holdings(raw_holdings: Vec<BookHolding>) -> (Vec<BookHolding>, AggregatedHoldings) {
    // (a) DEDUPLICACIÓN POR HUELLA: sobrevive la primera aparición.
    let mut seen_fingerprints: HashSet<String> = HashSet::new();
    let fingerprint_survivors: Vec<BookHolding> = raw_holdings
        .into_iter()
        .filter(|holding| seen_fingerprints.insert(holding.fingerprint.clone()))
        .collect();

    // (b) DEDUPLICACIÓN DE FUENTES CRUZADAS: lo directo desplaza lo agregado.
    let systems_with_direct: HashSet<LibrarySystemId> = fingerprint_survivors
        .iter()
        .filter(|holding| holding.source == HoldingSource::Direct)
        .map(|holding| holding.system_id.clone())
        .collect();

    let survivors: Vec<BookHolding> = fingerprint_survivors
        .into_iter()
        .filter(|holding| {
            holding.source == HoldingSource::Direct
                || !systems_with_direct.contains(&holding.system_id)
        })
        .collect();

    // (c)+(d) AGRUPACIÓN POR SISTEMA Y SUCURSAL CON SUMAS PONDERADAS.
    // El orden de cosecha se preserva dentro de cada nivel.
    let mut system_index: HashMap<LibrarySystemId, usize> = HashMap::new();
    let mut summaries: Vec<SystemSummary> = Vec::new();

    for holding in &survivors {
        let slot = match system_index.get(&holding.system_id) {
            Some(existing) => *existing,
            None => {
                system_index.insert(holding.system_id.clone(), summaries.len());
                summaries.push(SystemSummary {
                    system_id: holding.system_id.clone(),
                    system_name: holding.system_name.clone(),
                    branches: Vec::new(),
                    total_copies: 0,
                    available_copies: 0,
                    checked_out_copies: 0,
                    hold_count: 0,
                });
                summaries.len() - 1
            }
        };

        let copies = holding.copy_count.unwrap_or(1);
        let available = if holding.status == ItemStatus::Available { copies } else { 0 };
        let checked_out = if holding.status == ItemStatus::CheckedOut { copies } else { 0 };

        let system_summary = &mut summaries[slot];
        system_summary.total_copies += copies;
        system_summary.available_copies += available;
        system_summary.checked_out_copies += checked_out;
        system_summary.hold_count += holding.hold_count.unwrap_or(0);

        match system_summary
            .branches
            .iter_mut()
            .find(|branch| branch.branch_id == holding.branch_id)
        {
            Some(branch_summary) => {
                branch_summary.total_copies += copies;
                branch_summary.available_copies += available;
                branch_summary.checked_out_copies += checked_out;
            }
            None => system_summary.branches.push(BranchSummary {
                branch_id: holding.branch_id.clone(),
                branch_name: holding.branch_name.clone(),
                total_copies: copies,
                available_copies: available,
                checked_out_copies: checked_out,
            }),
        }
    }

    // (e) ORDENACIÓN: disponibles desc, nombre asc como desempate.
    summaries.sort_by(|left, right| {
        right
            .available_copies
            .cmp(&left.available_copies)
            .then_with(|| left.system_name.cmp(&right.system_name))
    });

    let aggregate = AggregatedHoldings {
        total_copies: summaries.iter().map(|system| system.total_copies).sum(),
        total_available: summaries.iter().map(|system| system.available_copies).sum(),
        total_checked_out: summaries.iter().map(|system| system.checked_out_copies).sum(),
        total_holds: summaries.iter().map(|system| system.hold_count).sum(),
        systems: summaries,
    };

    (survivors, aggregate)
}
