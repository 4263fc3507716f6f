// [libs/domain/adapters/src/registry.rs]
/*!
 * =================================================================
 * APARATO: ADAPTER DISPATCH REGISTRY (V12.0 - CLOSED MATCH)
 * CLASIFICACIÓN: DOMAIN ADAPTERS (ESTRATO L3)
 * RESPONSABILIDAD: INSTANCIACIÓN Y DESPACHO ORDENADO DE ADAPTADORES
 *
 * VISION HIPER-HOLÍSTICA:
 * 1. STARTUP CRYSTALLIZATION: Los adaptadores se instancian UNA vez
 *    en la ignición mediante un 'match' exhaustivo sobre la suma
 *    cerrada de protocolos; el registro es de solo lectura después.
 * 2. ORDERED DISPATCH: Cada sistema conserva su lista ordenada
 *    (primario primero, fallbacks después), tal como la declara el
 *    documento del registro.
 * 3. SHARED TUNNEL: Todos los adaptadores comparten un único pool de
 *    conexiones HTTP.
 * =================================================================
 */

use crate::apollo::ApolloAdapter;
use crate::aspen::AspenAdapter;
use crate::atriuum::AtriuumAdapter;
use crate::bibliocommons::BiblioCommonsAdapter;
use crate::contract::CatalogAdapter;
use crate::enterprise::EnterpriseAdapter;
use crate::http::build_shared_client;
use crate::koha::KohaAdapter;
use crate::polaris::PolarisAdapter;
use crate::sierra::SierraAdapter;
use crate::spydus::SpydusAdapter;
use crate::sru_generic::GenericSruAdapter;
use crate::tlc::TlcAdapter;
use panoptes_domain_models::{AdapterConfig, AdapterProtocol, LibrarySystem, LibrarySystemId};
use reqwest::Client;
use std::collections::HashMap;
use std::sync::Arc;
use tracing::info;

/// Registro inmutable de adaptadores instanciados por sistema.
pub struct AdapterRegistry {
    http_client: Client,
    fleets: HashMap<LibrarySystemId, Vec<Arc<dyn CatalogAdapter>>>,
}

impl AdapterRegistry {
    /**
     * Cristaliza la flota de adaptadores de todos los sistemas.
     * Despacho cerrado: el compilador exige cubrir cada protocolo.
     */
    #[must_use]
    pub fn build(systems: &[LibrarySystem]) -> Self {
        let http_client = build_shared_client();
        let mut fleets: HashMap<LibrarySystemId, Vec<Arc<dyn CatalogAdapter>>> = HashMap::new();

        for system in systems {
            let fleet: Vec<Arc<dyn CatalogAdapter>> = system
                .adapters
                .iter()
                .map(|config| Self::instantiate(&http_client, config.clone()))
                .collect();
            fleets.insert(system.id.clone(), fleet);
        }

        let total_adapters: usize = fleets.values().map(Vec::len).sum();
        info!(
            "🛠️  [ADAPTER_REGISTRY]: {} adapters crystallized across {} systems.",
            total_adapters,
            fleets.len()
        );

        Self { http_client, fleets }
    }

    /**
     * Cristaliza un registro desde flotas ya construidas en memoria.
     * Seam de composición para consumidores que inyectan adaptadores
     * propios (bancos de prueba, catálogos embebidos).
     */
    #[must_use]
    pub fn from_parts(fleets: HashMap<LibrarySystemId, Vec<Arc<dyn CatalogAdapter>>>) -> Self {
        Self { http_client: build_shared_client(), fleets }
    }

    fn instantiate(http_client: &Client, config: AdapterConfig) -> Arc<dyn CatalogAdapter> {
        match config.protocol {
            AdapterProtocol::SruGeneric => {
                Arc::new(GenericSruAdapter::new(http_client.clone(), config))
            }
            AdapterProtocol::Koha => Arc::new(KohaAdapter::new(http_client.clone(), config)),
            AdapterProtocol::Enterprise => {
                Arc::new(EnterpriseAdapter::new(http_client.clone(), config))
            }
            AdapterProtocol::BiblioCommons => {
                Arc::new(BiblioCommonsAdapter::new(http_client.clone(), config))
            }
            AdapterProtocol::Apollo => Arc::new(ApolloAdapter::new(http_client.clone(), config)),
            AdapterProtocol::Atriuum => Arc::new(AtriuumAdapter::new(http_client.clone(), config)),
            AdapterProtocol::Aspen => Arc::new(AspenAdapter::new(http_client.clone(), config)),
            AdapterProtocol::Tlc => Arc::new(TlcAdapter::new(http_client.clone(), config)),
            AdapterProtocol::Spydus => Arc::new(SpydusAdapter::new(http_client.clone(), config)),
            AdapterProtocol::SierraRest => {
                Arc::new(SierraAdapter::new(http_client.clone(), config))
            }
            AdapterProtocol::PolarisPapi => {
                Arc::new(PolarisAdapter::new(http_client.clone(), config))
            }
        }
    }

    /**
     * Flota ordenada de un sistema (primario primero, fallbacks después).
     */
    #[must_use]
    pub fn fleet(&self, system_id: &LibrarySystemId) -> &[Arc<dyn CatalogAdapter>] {
        self.fleets
            .get(system_id)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Túnel HTTP compartido (sondas de salud del gateway).
    #[must_use]
    pub fn http_client(&self) -> &Client {
        &self.http_client
    }

    /// Cantidad de sistemas con flota instanciada.
    #[must_use]
    pub fn system_count(&self) -> usize {
        self.fleets.len()
    }
}
