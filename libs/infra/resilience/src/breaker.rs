// [libs/infra/resilience/src/breaker.rs]
/*!
 * =================================================================
 * APARATO: CIRCUIT BREAKER STATE MACHINE (V12.0 - LAZY TRANSITIONS)
 * CLASIFICACIÓN: INFRASTRUCTURE (ESTRATO L3)
 * RESPONSABILIDAD: SUSPENSIÓN TEMPORAL DE DEPENDENCIAS COLAPSADAS
 *
 * VISION HIPER-HOLÍSTICA:
 * 1. CLOSED: Toda llamada se intenta. Éxito -> contador a 0; fallo ->
 *    contador++; al alcanzar el umbral -> OPEN con sello temporal.
 * 2. OPEN: El coordinador omite la llamada y registra un fallo
 *    sintético 'circuit_open'. Vencido el periodo de reposo, la
 *    próxima consulta de estado transiciona perezosamente a HALF_OPEN.
 * 3. HALF_OPEN: Se admite exactamente una sonda. Éxito -> CLOSED
 *    (contador a 0); fallo -> OPEN con sello temporal refrescado.
 *
 * # Mathematical Proof (Deterministic Transitions):
 * Las transiciones son función pura de (estado, contador, reloj);
 * no existe hilo de fondo alguno. Dos consultas con el mismo reloj
 * observan el mismo estado.
 * =================================================================
 */

use std::sync::Mutex;
use std::time::{Duration, Instant};

/// Estado observable del breaker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CircuitState {
    /// Flujo nominal: las llamadas se intentan.
    Closed,
    /// Dependencia suspendida: las llamadas se omiten.
    Open,
    /// Periodo de sonda: se admite un único intento de verificación.
    HalfOpen,
}

#[derive(Debug)]
enum CoreState {
    Closed,
    Open { opened_at: Instant },
    HalfOpen,
}

#[derive(Debug)]
struct BreakerCore {
    state: CoreState,
    consecutive_failures: u32,
}

/// Breaker de circuito por instancia de adaptador.
#[derive(Debug)]
pub struct CircuitBreaker {
    failure_threshold: u32,
    reset_timeout: Duration,
    core: Mutex<BreakerCore>,
}

/// Umbral por defecto de fallos consecutivos antes de abrir.
pub const DEFAULT_FAILURE_THRESHOLD: u32 = 5;
/// Periodo de reposo por defecto antes de admitir una sonda.
pub const DEFAULT_RESET_TIMEOUT_MS: u64 = 60_000;

impl Default for CircuitBreaker {
    fn default() -> Self {
        Self::new(DEFAULT_FAILURE_THRESHOLD, Duration::from_millis(DEFAULT_RESET_TIMEOUT_MS))
    }
}

impl CircuitBreaker {
    /// Construye un breaker con umbral y periodo de reposo explícitos.
    #[must_use]
    pub fn new(failure_threshold: u32, reset_timeout: Duration) -> Self {
        Self {
            failure_threshold: failure_threshold.max(1),
            reset_timeout,
            core: Mutex::new(BreakerCore {
                state: CoreState::Closed,
                consecutive_failures: 0,
            }),
        }
    }

    /**
     * Registra una llamada exitosa.
     * En HALF_OPEN la sonda exitosa cierra el circuito; en CLOSED el
     * contador de fallos consecutivos vuelve a cero.
     */
    pub fn record_success(&self) {
        let mut guard = self.core.lock().expect("BREAKER_LOCK_POISONED");
        guard.consecutive_failures = 0;
        guard.state = CoreState::Closed;
    }

    /**
     * Registra una llamada fallida.
     * En CLOSED incrementa el contador y abre al alcanzar el umbral.
     * En HALF_OPEN la sonda fallida reabre con sello temporal fresco
     * (el contador no se incrementa más allá del umbral).
     */
    pub fn record_failure(&self) {
        let mut guard = self.core.lock().expect("BREAKER_LOCK_POISONED");
        match guard.state {
            CoreState::Closed => {
                guard.consecutive_failures = guard.consecutive_failures.saturating_add(1);
                if guard.consecutive_failures >= self.failure_threshold {
                    guard.state = CoreState::Open { opened_at: Instant::now() };
                }
            }
            CoreState::HalfOpen => {
                guard.state = CoreState::Open { opened_at: Instant::now() };
            }
            CoreState::Open { .. } => {
                // Fallo sintético registrado con el circuito ya abierto: inerte.
            }
        }
    }

    /**
     * Estado observable, aplicando la transición perezosa OPEN -> HALF_OPEN
     * cuando el periodo de reposo ha vencido.
     */
    pub fn state(&self) -> CircuitState {
        let mut guard = self.core.lock().expect("BREAKER_LOCK_POISONED");
        if let CoreState::Open { opened_at } = guard.state {
            if opened_at.elapsed() >= self.reset_timeout {
                guard.state = CoreState::HalfOpen;
            }
        }

        match guard.state {
            CoreState::Closed => CircuitState::Closed,
            CoreState::Open { .. } => CircuitState::Open,
            CoreState::HalfOpen => CircuitState::HalfOpen,
        }
    }

    /// true cuando la llamada debe omitirse (circuito abierto y en reposo).
    pub fn is_open(&self) -> bool {
        self.state() == CircuitState::Open
    }

    /// Fallos consecutivos observados (instrumentación de diagnóstico).
    pub fn consecutive_failures(&self) -> u32 {
        self.core.lock().expect("BREAKER_LOCK_POISONED").consecutive_failures
    }
}
