// [libs/domain/adapters/src/bibliocommons.rs]
/*!
 * =================================================================
 * APARATO: BIBLIOCOMMONS ADAPTER (V10.0 - AVAILABILITY CARDS)
 * CLASIFICACIÓN: DOMAIN ADAPTERS (ESTRATO L2/L3)
 * RESPONSABILIDAD: COSECHA HTML DE LA CAPA SOCIAL BIBLIOCOMMONS
 *
 * # Wire Contract:
 * GET {base}/v2/search?query={isbn}&searchType=isbn
 * La disponibilidad moderna vive en tarjetas 'cp-availability';
 * las instalaciones legadas exponen la tabla 'availability-details'.
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

/// Cascada de estrategias BiblioCommons, especificidad descendente.
const STRATEGY_CASCADE: &[SelectorStrategy] = &[
    SelectorStrategy {
        name: "bibliocommons_availability_cards",
        container: "div.cp-availability-group ul.item-list li.item-row",
        branch: Some("span.cp-branch-name"),
        call_number: Some("span.cp-call-number"),
        status: Some("span.cp-availability-status"),
        collection: Some("span.cp-collection-name"),
    },
    SelectorStrategy {
        name: "bibliocommons_legacy_details",
        container: "table.availability-details tbody tr",
        branch: Some("td.branch"),
        call_number: Some("td.collection-callnumber"),
        status: Some("td.status"),
        collection: None,
    },
];

/// Adaptador de cosecha para BiblioCommons.
pub struct BiblioCommonsAdapter {
    http_client: Client,
    config: AdapterConfig,
}

impl BiblioCommonsAdapter {
    /// Construye el adaptador sobre el túnel HTTP compartido.
    #[must_use]
    pub fn new(http_client: Client, config: AdapterConfig) -> Self {
        Self { http_client, config }
    }

    fn search_url(&self, isbn: &Isbn13) -> String {
        format!(
            "{}/v2/search?query={}&searchType=isbn",
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
impl CatalogAdapter for BiblioCommonsAdapter {
    fn protocol(&self) -> AdapterProtocol {
        AdapterProtocol::BiblioCommons
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
