// [apps/gateway/src/kernel.rs]
/*!
 * =================================================================
 * APARATO: GATEWAY SOVEREIGN KERNEL (V16.0 - GUARDED IGNITION)
 * CLASIFICACIÓN: COMPOSITION ROOT (ESTRATO L1-APP)
 * RESPONSABILIDAD: BOOTSTRAP DE INFRAESTRUCTURA E IGNICIÓN SEGURA
 *
 * VISION HIPER-HOLÍSTICA:
 * Actúa como la placa base donde se conectan todos los servicios:
 * registro declarativo -> flota de adaptadores -> coordinador ->
 * estado compartido -> daemons -> socket TCP. Un registro corrupto
 * aborta la ignición ANTES de abrir el socket.
 * =================================================================
 */

use crate::routes::create_sovereign_router;
use crate::services::spawn_vault_sweeper;
use crate::state::AppState;
use panoptes_domain_adapters::AdapterRegistry;
use panoptes_domain_search::{SearchConfig, SearchCoordinator};
use panoptes_infra_registry::{load_registry, ConfigurationError};
use panoptes_infra_resilience::HealthTracker;
use std::collections::BTreeMap;
use std::net::SocketAddr;
use std::path::Path;
use std::sync::Arc;
use tracing::{info, instrument};

/// Margen del tope duro síncrono sobre el reloj global del fan-out.
const SYNCHRONOUS_CEILING_SLACK_MS: u64 = 5_000;

pub struct GatewayKernel {
    pub server_network_port: u16,
    pub application_state: AppState,
}

impl GatewayKernel {
    /**
     * Realiza la ignición del registro declarativo y el estado.
     *
     * # Errors:
     * `ConfigurationError` ante registro ilegible o corrupto: la
     * ignición se aborta sin abrir el socket.
     */
    #[instrument(skip_all)]
    pub fn ignite(
        registry_directory: &Path,
        listening_port: u16,
    ) -> Result<Self, ConfigurationError> {
        // 1. CARGA DEL REGISTRO DECLARATIVO (fatal ante corrupción)
        let registry = Arc::new(load_registry(registry_directory)?);

        // 2. RESUMEN DE IGNICIÓN (desglose por vendor)
        let mut vendor_breakdown: BTreeMap<String, usize> = BTreeMap::new();
        let mut branch_count = 0usize;
        let mut adapter_count = 0usize;
        for system in registry.all_systems() {
            *vendor_breakdown.entry(system.vendor.clone()).or_default() += 1;
            branch_count += system.branches.len();
            adapter_count += system.adapters.len();
        }
        info!(
            "🗺️  [REGISTRY_SUMMARY]: {} systems / {} branches / {} adapters. Vendors: {:?}",
            registry.len(),
            branch_count,
            adapter_count,
            vendor_breakdown
        );

        // 3. CRISTALIZACIÓN DE LA FLOTA Y EL MOTOR
        let adapters = Arc::new(AdapterRegistry::build(registry.all_systems()));
        let health_tracker = Arc::new(HealthTracker::new());
        let search_config = SearchConfig::from_environment();
        let synchronous_ceiling_ms =
            search_config.global_timeout_ms + SYNCHRONOUS_CEILING_SLACK_MS;

        let coordinator = Arc::new(SearchCoordinator::new(
            registry,
            adapters,
            health_tracker,
            search_config,
        ));

        // 4. CAPTURA DE INTERRUPTORES PERIMETRALES
        let trust_proxy = ambient_flag("TRUST_PROXY");
        let production_mode = std::env::var("PANOPTES_ENV")
            .map(|mode| mode.eq_ignore_ascii_case("production"))
            .unwrap_or(false);
        let search_rpm: u32 = std::env::var("PANOPTES_SEARCH_RPM")
            .ok()
            .and_then(|raw| raw.trim().parse().ok())
            .unwrap_or(60);

        let application_state = AppState::new(
            coordinator,
            search_rpm,
            trust_proxy,
            production_mode,
            synchronous_ceiling_ms,
        );

        Ok(Self { server_network_port: listening_port, application_state })
    }

    /**
     * Abre el socket TCP y sirve el enrutador soberano.
     * Los daemons de mantenimiento despegan antes del primer accept.
     *
     * # Errors:
     * Fallo de bind o colapso del servidor HTTP.
     */
    pub async fn serve(self) -> std::io::Result<()> {
        spawn_vault_sweeper(self.application_state.clone());

        let bind_address = SocketAddr::from(([0, 0, 0, 0], self.server_network_port));
        let router = create_sovereign_router(self.application_state);

        info!("🛰️  [GATEWAY_ONLINE]: Listening on {}.", bind_address);

        let listener = tokio::net::TcpListener::bind(bind_address).await?;
        axum::serve(
            listener,
            router.into_make_service_with_connect_info::<SocketAddr>(),
        )
        .await
    }
}

fn ambient_flag(variable_name: &str) -> bool {
    std::env::var(variable_name)
        .map(|raw| {
            let normalized = raw.trim().to_ascii_lowercase();
            normalized == "1" || normalized == "true" || normalized == "yes"
        })
        .unwrap_or(false)
}
