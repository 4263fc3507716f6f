// [tests/mirror/libs/infra/resilience/breaker_state_machine.test.rs]
/**
 * =================================================================
 * APARATO: BREAKER STATE MACHINE MIRROR TEST (V3.0)
 * CLASIFICACIÓN: TRINITY EVIDENCE (ESTRATO L3-RESILIENCE)
 * OBJETIVO: Certificar el ciclo canónico (threshold=3, reset=1000ms):
 *          tres fallos -> OPEN; reposo vencido -> HALF_OPEN;
 *          sonda exitosa -> CLOSED con contador en cero.
 * =================================================================
 */

use panoptes_infra_resilience::{CircuitBreaker, CircuitState};
use std::time::Duration;

#[test]
fn certify_canonical_breaker_cycle() {
    let breaker = CircuitBreaker::new(3, Duration::from_millis(1_000));

    // FASE 1: tres fallos consecutivos abren el circuito.
    breaker.record_failure();
    breaker.record_failure();
    assert_eq!(breaker.state(), CircuitState::Closed, "two failures must not open");
    breaker.record_failure();
    assert_eq!(breaker.state(), CircuitState::Open, "third failure must open");
    assert!(breaker.is_open(), "open circuit must skip calls");

    // FASE 2: el reposo vencido admite exactamente una sonda.
    std::thread::sleep(Duration::from_millis(1_050));
    assert_eq!(breaker.state(), CircuitState::HalfOpen, "rest period must admit a probe");
    assert!(!breaker.is_open(), "the probe call must be allowed through");

    // FASE 3: la sonda exitosa cierra y reinicia el contador.
    breaker.record_success();
    assert_eq!(breaker.state(), CircuitState::Closed);
    assert_eq!(breaker.consecutive_failures(), 0, "counter must reset on close");

    println!("✅ BREAKER: Canonical OPEN/HALF_OPEN/CLOSED cycle certified.");
}

/**
 * CERTIFICACIÓN: Antes del reposo, el circuito permanece OPEN.
 */
#[test]
fn certify_premature_probe_denied() {
    let breaker = CircuitBreaker::new(1, Duration::from_millis(1_000));
    breaker.record_failure();

    std::thread::sleep(Duration::from_millis(100));
    assert_eq!(breaker.state(), CircuitState::Open, "rest period must hold");
    println!("✅ BREAKER: Premature probe denial certified.");
}
