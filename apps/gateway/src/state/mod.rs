// [apps/gateway/src/state/mod.rs]
/*!
 * =================================================================
 * APARATO: GATEWAY STATE ORCHESTRATOR (V11.0 - COMPOSITION ROOT)
 * CLASIFICACIÓN: APPLICATION STATE (ESTRATO L1-APP)
 * RESPONSABILIDAD: ORQUESTACIÓN DE MOTOR, BÓVEDA Y GUARDIAS
 *
 * VISION HIPER-HOLÍSTICA 2026:
 * 1. COMPOSITION ROOT: Centraliza el rastro del motor federado, la
 *    bóveda asíncrona y el limitador de ventana fija.
 * 2. NOMINAL PURITY: Uso de 'Arc<T>' para inmutabilidad compartida
 *    entre los hilos del runtime.
 * =================================================================
 */

pub mod async_vault;
pub mod rate_limiter;

use chrono::{DateTime, Utc};
use panoptes_domain_search::SearchCoordinator;
use std::sync::Arc;
use std::time::Instant;

/**
 * Contenedor de estado compartido (Thread-Safe) para el Gateway.
 * Actúa como la placa base donde se conectan todos los estratos.
 */
#[derive(Clone)]
pub struct AppState {
    /// Motor de búsqueda federada (coordinador + caché + salud).
    pub coordinator: Arc<SearchCoordinator>,
    /// Bóveda de resultados de búsquedas asíncronas (POST /search).
    pub async_vault: Arc<async_vault::AsyncSearchVault>,
    /// Limitador de ventana fija por cliente.
    pub rate_limiter: Arc<rate_limiter::FixedWindowRateLimiter>,
    /// Instante de ignición para el cálculo de uptime.
    pub ignited_at: Instant,
    /// Marca temporal de ignición para reportes de liveness.
    pub ignited_at_utc: DateTime<Utc>,
    /// Cabeceras de proxy honradas sólo con este interruptor explícito.
    pub trust_proxy: bool,
    /// Modo producción: los mensajes de fallo interno se depuran.
    pub production_mode: bool,
    /// Tope duro de espera del endpoint síncrono en milisegundos.
    pub synchronous_ceiling_ms: u64,
}

impl AppState {
    /**
     * Forja el estado maestro inyectando el motor ya cristalizado.
     */
    #[must_use]
    pub fn new(
        coordinator: Arc<SearchCoordinator>,
        rate_limit_per_minute: u32,
        trust_proxy: bool,
        production_mode: bool,
        synchronous_ceiling_ms: u64,
    ) -> Self {
        Self {
            coordinator,
            async_vault: Arc::new(async_vault::AsyncSearchVault::with_nominal_bounds()),
            rate_limiter: Arc::new(rate_limiter::FixedWindowRateLimiter::per_minute(
                rate_limit_per_minute,
            )),
            ignited_at: Instant::now(),
            ignited_at_utc: Utc::now(),
            trust_proxy,
            production_mode,
            synchronous_ceiling_ms,
        }
    }

    /// Segundos transcurridos desde la ignición.
    #[must_use]
    pub fn uptime_seconds(&self) -> u64 {
        self.ignited_at.elapsed().as_secs()
    }
}
