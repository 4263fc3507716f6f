// [libs/domain/adapters/src/enterprise.rs]
/*!
 * =================================================================
 * APARATO: SIRSIDYNIX ENTERPRISE ADAPTER (V11.0 - DETAIL TABLE)
 * CLASIFICACIÓN: DOMAIN ADAPTERS (ESTRATO L2/L3)
 * RESPONSABILIDAD: COSECHA HTML DEL CATÁLOGO ENTERPRISE
 *
 * # Wire Contract:
 * GET {base}/search/results?qu=ISBN%3D{isbn}
 * La disponibilidad vive en la tabla de detalle de ejemplares
 * ('detailItemsTable'); las instalaciones veteranas usan la tabla
 * legada 'itemlisting'. La cascada cubre ambas generaciones.
 * =================================================================
 */

use crate::contract::CatalogAdapter;
use crate::emit::crystallize_scraped_document;
use crate::errors::AdapterError;
use crate::http;
use async_trait::async_trait;
use panoptes_core_isbn::Isbn13;
use panoptes_core_marc::SelectorStrategy;
use panoptes_domain_models::{AdapterConfig, AdapterProtocol, BookHolding, LibrarySystem};
use reqwest::Client;

/// Cascada de estrategias Enterprise, especificidad descendente.
const STRATEGY_CASCADE: &[SelectorStrategy] = &[
    SelectorStrategy {
        name: "enterprise_detail_table",
        container: "table.detailItemsTable tr.detailItemsTableRow",
        branch: Some("td.detailItemsTable_LIBRARY"),
        call_number: Some("td.detailItemsTable_CALL_NUMBER"),
        status: Some("td.detailItemsTable_SD_ITEM_STATUS"),
        collection: Some("td.detailItemsTable_SD_HOME_LOCATION"),
    },
    SelectorStrategy {
        name: "enterprise_legacy_itemlisting",
        container: "table.itemlisting tr:not(:first-child)",
        branch: Some("td:nth-child(1)"),
        call_number: Some("td:nth-child(2)"),
        status: Some("td:nth-child(3)"),
        collection: None,
    },
];

/// Adaptador de cosecha para SirsiDynix Enterprise.
pub struct EnterpriseAdapter {
    http_client: Client,
    config: AdapterConfig,
}

impl EnterpriseAdapter {
    /// Construye el adaptador sobre el túnel HTTP compartido.
    #[must_use]
    pub fn new(http_client: Client, config: AdapterConfig) -> Self {
        Self { http_client, config }
    }

    fn search_url(&self, isbn: &Isbn13) -> String {
        format!(
            "{}/search/results?qu=ISBN%3D{}",
            self.config.base_url.trim_end_matches('/'),
            isbn.as_str()
        )
    }

    /// Cosecha pura sin red, reutilizable desde fixtures de certificación.
    pub fn harvest(
        html_material: &str,
        system: &LibrarySystem,
        isbn: &Isbn13,
    ) -> Result<Vec<BookHolding>, AdapterError> {
        crystallize_scraped_document(html_material, STRATEGY_CASCADE, system, isbn)
    }
}

#[async_trait]
impl CatalogAdapter for EnterpriseAdapter {
    fn protocol(&self) -> AdapterProtocol {
        AdapterProtocol::Enterprise
    }

    fn config(&self) -> &AdapterConfig {
        &self.config
    }

    async fn execute_search(
        &self,
        isbn: &Isbn13,
        system: &LibrarySystem,
    ) -> Result<Vec<BookHolding>, AdapterError> {
        let html_material = http::fetch_text(
            &self.http_client,
            &self.search_url(isbn),
            self.config.timeout_ms,
        )
        .await?;

        Self::harvest(&html_material, system, isbn)
    }
}
