// [tests/mirror/apps/gateway/rate_window.test.rs]
/**
 * =================================================================
 * APARATO: RATE WINDOW MIRROR TEST (V3.0)
 * CLASIFICACIÓN: TRINITY EVIDENCE (ESTRATO L4-GATEWAY)
 * OBJETIVO: Certificar el presupuesto de ventana fija por cliente y
 *          el renacimiento del contador al vencer la ventana.
 * =================================================================
 */

use panoptes_gateway::state::rate_limiter::FixedWindowRateLimiter;
use std::time::Duration;

/**
 * CERTIFICACIÓN: El presupuesto se agota en la ventana y el rechazo
 * declara un Retry-After honesto (>= 1 segundo).
 */
#[test]
fn certify_budget_exhaustion() {
    let limiter = FixedWindowRateLimiter::with_window(2, Duration::from_secs(60));

    assert!(limiter.consume("203.0.113.7").is_ok());
    assert!(limiter.consume("203.0.113.7").is_ok());

    let rejection = limiter.consume("203.0.113.7").expect_err("third burst must exceed budget");
    assert!(rejection >= 1, "Retry-After must be at least one honest second");

    // La identidad vecina conserva su presupuesto propio.
    assert!(limiter.consume("203.0.113.8").is_ok(), "budgets are per client identity");

    println!("✅ RATE_WINDOW: Budget exhaustion certified.");
}

/**
 * CERTIFICACIÓN: Al vencer la ventana el contador renace en cero.
 */
#[test]
fn certify_window_rebirth() {
    let limiter = FixedWindowRateLimiter::with_window(1, Duration::from_millis(80));

    assert!(limiter.consume("203.0.113.9").is_ok());
    assert!(limiter.consume("203.0.113.9").is_err(), "budget spent within the window");

    std::thread::sleep(Duration::from_millis(100));
    assert!(limiter.consume("203.0.113.9").is_ok(), "elapsed window must rebirth the counter");

    println!("✅ RATE_WINDOW: Window rebirth certified.");
}
