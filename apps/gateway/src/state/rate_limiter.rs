// [apps/gateway/src/state/rate_limiter.rs]
/*!
 * =================================================================
 * APARATO: FIXED WINDOW RATE LIMITER (V7.0 - CLIENT BUDGETS)
 * CLASIFICACIÓN: APPLICATION STATE (ESTRATO L1-APP)
 * RESPONSABILIDAD: PRESUPUESTO DE PETICIONES POR CLIENTE Y VENTANA
 *
 * VISION HIPER-HOLÍSTICA:
 * 1. FIXED WINDOW: Ventana de 60 segundos por identidad de cliente;
 *    al vencer la ventana el contador renace en cero.
 * 2. HONEST RETRY-AFTER: El rechazo declara los segundos restantes
 *    de la ventana vigente, nunca un valor inventado.
 * 3. SELF PRUNING: El mapa de ventanas se poda oportunistamente al
 *    crecer, sin daemon dedicado.
 * =================================================================
 */

use std::collections::HashMap;
use std::sync::Mutex;
use std::time::{Duration, Instant};

/// Duración nominal de la ventana fija.
const WINDOW_SPAN: Duration = Duration::from_secs(60);
/// Umbral de poda oportunista del mapa de ventanas.
const PRUNE_THRESHOLD: usize = 10_000;

#[derive(Debug, Clone, Copy)]
struct WindowSlot {
    window_started: Instant,
    request_count: u32,
}

/// Limitador de ventana fija por identidad de cliente.
pub struct FixedWindowRateLimiter {
    window_span: Duration,
    requests_per_window: u32,
    windows: Mutex<HashMap<String, WindowSlot>>,
}

impl FixedWindowRateLimiter {
    /// Construye el limitador con presupuesto por minuto.
    #[must_use]
    pub fn per_minute(requests_per_window: u32) -> Self {
        Self::with_window(requests_per_window, WINDOW_SPAN)
    }

    /// Construye el limitador con ventana explícita (bancos de prueba).
    #[must_use]
    pub fn with_window(requests_per_window: u32, window_span: Duration) -> Self {
        Self {
            window_span,
            requests_per_window: requests_per_window.max(1),
            windows: Mutex::new(HashMap::new()),
        }
    }

    /**
     * Consume una unidad del presupuesto del cliente.
     *
     * # Errors:
     * Los segundos restantes de la ventana vigente cuando el
     * presupuesto está agotado (mínimo 1 para un Retry-After honesto).
     */
    pub fn consume(&self, client_identity: &str) -> Result<(), u64> {
        let mut windows_guard = self.windows.lock().expect("RATE_WINDOW_LOCK_POISONED");

        // Poda oportunista: ventanas vencidas no volverán a consultarse.
        if windows_guard.len() > PRUNE_THRESHOLD {
            let span = self.window_span;
            windows_guard.retain(|_, slot| slot.window_started.elapsed() < span);
        }

        let slot = windows_guard
            .entry(client_identity.to_string())
            .or_insert(WindowSlot { window_started: Instant::now(), request_count: 0 });

        // Renacimiento de ventana vencida.
        if slot.window_started.elapsed() >= self.window_span {
            slot.window_started = Instant::now();
            slot.request_count = 0;
        }

        if slot.request_count >= self.requests_per_window {
            let remaining = self
                .window_span
                .saturating_sub(slot.window_started.elapsed())
                .as_secs()
                .max(1);
            return Err(remaining);
        }

        slot.request_count += 1;
        Ok(())
    }
}
