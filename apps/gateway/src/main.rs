// [apps/gateway/src/main.rs]
/*!
 * =================================================================
 * APARATO: GATEWAY MAIN ENTRY POINT (V11.0 - GOLD MASTER)
 * CLASIFICACIÓN: APPLICATION SHELL (ESTRATO L4)
 * RESPONSABILIDAD: BOOTSTRAP DE INFRAESTRUCTURA E IGNICIÓN SEGURA
 *
 * # Mathematical Proof (Deterministic Ignition):
 * El proceso garantiza que la carga del registro declarativo ocurra
 * antes que la apertura del socket TCP, previniendo estados de
 * carrera donde un consumidor busque contra una federación aún no
 * cristalizada.
 * =================================================================
 */

use dotenvy::dotenv;
use panoptes_gateway::prelude::*;
use panoptes_shared_heimdall::init_tracing;
use std::path::PathBuf;
use tracing::{error, info};

/**
 * Punto de ignición supremo del binario del Gateway.
 */
fn main() -> Result<(), Box<dyn std::error::Error>> {
    // 1. CARGA DE ENTORNO SOBERANO
    dotenv().ok();

    // 2. INICIALIZACIÓN DE OBSERVABILIDAD (HEIMDALL)
    init_tracing("panoptes_gateway");

    // 3. CONSTRUCCIÓN DEL RUNTIME
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?;

    runtime.block_on(async {
        info!("🛰️  [GATEWAY]: Global ignition sequence starting...");

        // 4. ADQUISICIÓN DE COORDENADAS TÁCTICAS
        let registry_directory: PathBuf = std::env::var("PANOPTES_REGISTRY_DIR")
            .unwrap_or_else(|_| "./registry".to_string())
            .into();

        let listening_network_port: u16 = std::env::var("PORT")
            .unwrap_or_else(|_| "8080".to_string())
            .parse()
            .unwrap_or(8080);

        // 5. IGNICIÓN DEL KERNEL (el registro corrupto aborta aquí)
        let kernel_instance =
            match GatewayKernel::ignite(&registry_directory, listening_network_port) {
                Ok(kernel) => kernel,
                Err(configuration_fault) => {
                    error!(
                        "🔥 [IGNITION_ABORTED]: Registry load collapsed: {}",
                        configuration_fault
                    );
                    return Err(Box::<dyn std::error::Error>::from(configuration_fault));
                }
            };

        // 6. SERVICIO PERPETUO
        kernel_instance.serve().await.map_err(Into::into)
    })
}
