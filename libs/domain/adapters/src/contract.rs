// [libs/domain/adapters/src/contract.rs]
/*!
 * =================================================================
 * APARATO: CATALOG ADAPTER CONTRACT (V14.0 - SOVEREIGN SEAM)
 * CLASIFICACIÓN: DOMAIN ADAPTERS (ESTRATO L2)
 * RESPONSABILIDAD: CONTRATO COMÚN DE BÚSQUEDA Y SALUD
 *
 * VISION HIPER-HOLÍSTICA:
 * El coordinador conoce exclusivamente este contrato: cada vendor
 * implementa 'execute_search' con su formato de cable propio, y el
 * sobre común (envelope) aporta timing, timeout y reintentos.
 * =================================================================
 */

use crate::errors::AdapterError;
use crate::http;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use panoptes_core_isbn::Isbn13;
use panoptes_domain_models::{AdapterConfig, AdapterProtocol, BookHolding, LibrarySystem};
use std::time::Instant;

/// Resultado envuelto de una búsqueda de adaptador.
#[derive(Debug, Clone)]
pub struct SearchOutcome {
    /// Ejemplares emitidos por el adaptador.
    pub holdings: Vec<BookHolding>,
    /// Protocolo que produjo la cosecha.
    pub protocol: AdapterProtocol,
    /// Latencia total observada, reintentos incluidos.
    pub response_time_ms: u64,
}

/// Reporte puntual de salud de un adaptador.
#[derive(Debug, Clone)]
pub struct AdapterHealthReport {
    /// true si la sonda alcanzó el catálogo.
    pub healthy: bool,
    /// Latencia de la sonda en milisegundos.
    pub latency_ms: u64,
    /// Mensaje descriptivo del desenlace.
    pub message: String,
    /// Instante de la sonda.
    pub checked_at: DateTime<Utc>,
}

/// Contrato común de todo adaptador de catálogo federado.
#[async_trait]
pub trait CatalogAdapter: Send + Sync {
    /// Protocolo de la suma cerrada que este adaptador implementa.
    fn protocol(&self) -> AdapterProtocol;

    /// Configuración declarativa con la que fue construido.
    fn config(&self) -> &AdapterConfig;

    /**
     * Ejecuta UNA búsqueda cruda contra el catálogo del vendor.
     *
     * Sin timeout ni reintentos propios: el sobre común los aplica.
     * Emite los ejemplares ya normalizados (estado canónico, huella
     * determinista, sucursal resuelta o texto crudo).
     *
     * # Errors:
     * `AdapterError` categorizado según la taxonomía de recuperación.
     */
    async fn execute_search(
        &self,
        isbn: &Isbn13,
        system: &LibrarySystem,
    ) -> Result<Vec<BookHolding>, AdapterError>;

    /**
     * Sonda de salud: alcanza la URL base del catálogo y mide latencia.
     * Los vendors sin endpoint de salud dedicado responden a la raíz.
     */
    async fn health_check(&self, http_client: &reqwest::Client) -> AdapterHealthReport {
        let probe_started = Instant::now();
        let outcome = http_client.get(&self.config().base_url).send().await;
        let latency_ms = probe_started.elapsed().as_millis() as u64;

        match outcome {
            Ok(response) if response.status().is_success() || response.status().is_redirection() => {
                AdapterHealthReport {
                    healthy: true,
                    latency_ms,
                    message: format!("HTTP_{}", response.status().as_u16()),
                    checked_at: Utc::now(),
                }
            }
            Ok(response) => AdapterHealthReport {
                healthy: false,
                latency_ms,
                message: format!("HTTP_{}", response.status().as_u16()),
                checked_at: Utc::now(),
            },
            Err(network_fault) => AdapterHealthReport {
                healthy: false,
                latency_ms,
                message: http::classify_network_fault(&network_fault, self.config().timeout_ms).to_string(),
                checked_at: Utc::now(),
            },
        }
    }
}
