// [libs/domain/adapters/src/atriuum.rs]
/*!
 * =================================================================
 * APARATO: ATRIUUM ADAPTER (V12.0 - TEMPLATED SEARCH)
 * CLASIFICACIÓN: DOMAIN ADAPTERS (ESTRATO L2/L3)
 * RESPONSABILIDAD: COSECHA HTML DE BOOK SYSTEMS ATRIUUM
 *
 * # Wire Contract:
 * Las instalaciones Atriuum difieren en la ruta de búsqueda; la bolsa
 * 'extra' admite 'searchUrlTemplate' con el placeholder '{ISBN}'.
 * Sin plantilla, se usa la ruta OPAC por defecto.
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

/// Clave reconocida de la bolsa 'extra' para la plantilla de búsqueda.
const SEARCH_URL_TEMPLATE_KEY: &str = "searchUrlTemplate";
/// Placeholder del ISBN dentro de la plantilla.
const ISBN_PLACEHOLDER: &str = "{ISBN}";

/// Cascada de estrategias Atriuum, especificidad descendente.
const STRATEGY_CASCADE: &[SelectorStrategy] = &[
    SelectorStrategy {
        name: "atriuum_holdings_table",
        container: "table#holdingsTable tr.holdingRow",
        branch: Some("td.branchName"),
        call_number: Some("td.callNumber"),
        status: Some("td.itemStatus"),
        collection: Some("td.collection"),
    },
    SelectorStrategy {
        name: "atriuum_opac_results",
        container: "div.opacResults table tr:not(:first-child)",
        branch: Some("td:nth-child(1)"),
        call_number: Some("td:nth-child(2)"),
        status: Some("td:nth-child(3)"),
        collection: None,
    },
];

/// Adaptador de cosecha para Book Systems Atriuum.
pub struct AtriuumAdapter {
    http_client: Client,
    config: AdapterConfig,
}

impl AtriuumAdapter {
    /// Construye el adaptador sobre el túnel HTTP compartido.
    #[must_use]
    pub fn new(http_client: Client, config: AdapterConfig) -> Self {
        Self { http_client, config }
    }

    /**
     * URL de búsqueda: proyección tipada de 'searchUrlTemplate' si la
     * bolsa la declara; ruta OPAC por defecto en su ausencia.
     */
    fn search_url(&self, isbn: &Isbn13) -> String {
        match self.config.extra_str(SEARCH_URL_TEMPLATE_KEY) {
            Some(template) => template.replace(ISBN_PLACEHOLDER, isbn.as_str()),
            None => format!(
                "{}/cgi-bin/opac.exe?isbn={}",
                self.config.base_url.trim_end_matches('/'),
                urlencoding::encode(isbn.as_str())
            ),
        }
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
impl CatalogAdapter for AtriuumAdapter {
    fn protocol(&self) -> AdapterProtocol {
        AdapterProtocol::Atriuum
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
