// [libs/domain/search/src/config.rs]
/*!
 * =================================================================
 * APARATO: SEARCH ENGINE CONFIGURATION (V9.0 - AMBIENT CAPTURE)
 * CLASIFICACIÓN: DOMAIN ENGINE (ESTRATO L2)
 * RESPONSABILIDAD: PRESUPUESTOS DE CONCURRENCIA, DEADLINES Y CACHÉ
 *
 * # Ambient Capture:
 * Cada campo admite sobrescritura por variable de entorno 'PANOPTES_*'
 * en la ignición; un valor ilegible cae al default nominal sin
 * colapsar el arranque.
 * =================================================================
 */

use std::str::FromStr;

/// Configuración inmutable del motor de búsqueda federada.
#[derive(Debug, Clone)]
pub struct SearchConfig {
    /// Tope global de peticiones salientes en vuelo.
    pub max_concurrency: usize,
    /// Tope de peticiones en vuelo hacia un mismo sistema.
    pub max_per_host_concurrency: usize,
    /// Deadline global del fan-out completo en milisegundos.
    pub global_timeout_ms: u64,
    /// Deadline por sistema (flota completa, fallbacks incluidos).
    pub per_system_timeout_ms: u64,
    /// Reintentos máximos por intento de adaptador.
    pub max_retries: u32,
    /// Base del backoff exponencial en milisegundos.
    pub retry_base_delay_ms: u64,
    /// Fallos consecutivos antes de abrir el breaker de un adaptador.
    pub breaker_failure_threshold: u32,
    /// Reposo del breaker antes de admitir una sonda, en milisegundos.
    pub breaker_reset_timeout_ms: u64,
    /// Llave maestra del caché de resultados.
    pub cache_enabled: bool,
    /// Capacidad máxima del caché de resultados.
    pub cache_max_entries: usize,
    /// TTL absoluto de cada resultado cacheado, en milisegundos.
    pub cache_ttl_ms: u64,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            max_concurrency: 20,
            max_per_host_concurrency: 2,
            global_timeout_ms: 30_000,
            per_system_timeout_ms: 15_000,
            max_retries: 2,
            retry_base_delay_ms: 500,
            breaker_failure_threshold: 5,
            breaker_reset_timeout_ms: 60_000,
            cache_enabled: true,
            cache_max_entries: 500,
            cache_ttl_ms: 300_000,
        }
    }
}

impl SearchConfig {
    /**
     * Captura la configuración desde el entorno ambiente, con caída
     * silenciosa al default nominal por campo ilegible.
     */
    #[must_use]
    pub fn from_environment() -> Self {
        let nominal = Self::default();
        Self {
            max_concurrency: ambient("PANOPTES_MAX_CONCURRENCY", nominal.max_concurrency),
            max_per_host_concurrency: ambient(
                "PANOPTES_MAX_PER_HOST_CONCURRENCY",
                nominal.max_per_host_concurrency,
            ),
            global_timeout_ms: ambient("PANOPTES_GLOBAL_TIMEOUT_MS", nominal.global_timeout_ms),
            per_system_timeout_ms: ambient(
                "PANOPTES_PER_SYSTEM_TIMEOUT_MS",
                nominal.per_system_timeout_ms,
            ),
            max_retries: ambient("PANOPTES_MAX_RETRIES", nominal.max_retries),
            retry_base_delay_ms: ambient("PANOPTES_RETRY_BASE_DELAY_MS", nominal.retry_base_delay_ms),
            breaker_failure_threshold: ambient(
                "PANOPTES_BREAKER_THRESHOLD",
                nominal.breaker_failure_threshold,
            ),
            breaker_reset_timeout_ms: ambient(
                "PANOPTES_BREAKER_RESET_MS",
                nominal.breaker_reset_timeout_ms,
            ),
            cache_enabled: ambient("PANOPTES_CACHE_ENABLED", nominal.cache_enabled),
            cache_max_entries: ambient("PANOPTES_CACHE_MAX_ENTRIES", nominal.cache_max_entries),
            cache_ttl_ms: ambient("PANOPTES_CACHE_TTL_MS", nominal.cache_ttl_ms),
        }
    }
}

fn ambient<T: FromStr>(variable_name: &str, nominal: T) -> T {
    std::env::var(variable_name)
        .ok()
        .and_then(|raw_value| raw_value.trim().parse::<T>().ok())
        .unwrap_or(nominal)
}
