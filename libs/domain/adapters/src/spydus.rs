// [libs/domain/adapters/src/spydus.rs]
/*!
 * =================================================================
 * APARATO: SPYDUS ADAPTER (V9.0 - RESULT CONTENT TABLE)
 * CLASIFICACIÓN: DOMAIN ADAPTERS (ESTRATO L2/L3)
 * RESPONSABILIDAD: COSECHA HTML DEL CATÁLOGO CIVICA SPYDUS
 *
 * # Wire Contract:
 * GET {base}/cgi-bin/spydus.exe/ENQ/OPAC/BIBENQ?ISBN={isbn}
 * La disponibilidad vive en la tabla de contenido de resultados;
 * la variante compacta usa filas 'holding-line'.
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

/// Cascada de estrategias Spydus, especificidad descendente.
const STRATEGY_CASCADE: &[SelectorStrategy] = &[
    SelectorStrategy {
        name: "spydus_result_content",
        container: "table.result-content-table tbody tr",
        branch: Some("td.rct-location"),
        call_number: Some("td.rct-shelfmark"),
        status: Some("td.rct-status"),
        collection: Some("td.rct-collection"),
    },
    SelectorStrategy {
        name: "spydus_holding_lines",
        container: "div.holding-line",
        branch: Some("span.holding-location"),
        call_number: Some("span.holding-shelfmark"),
        status: Some("span.holding-status"),
        collection: None,
    },
];

/// Adaptador de cosecha para Civica Spydus.
pub struct SpydusAdapter {
    http_client: Client,
    config: AdapterConfig,
}

impl SpydusAdapter {
    /// Construye el adaptador sobre el túnel HTTP compartido.
    #[must_use]
    pub fn new(http_client: Client, config: AdapterConfig) -> Self {
        Self { http_client, config }
    }

    fn search_url(&self, isbn: &Isbn13) -> String {
        format!(
            "{}/cgi-bin/spydus.exe/ENQ/OPAC/BIBENQ?ISBN={}",
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
impl CatalogAdapter for SpydusAdapter {
    fn protocol(&self) -> AdapterProtocol {
        AdapterProtocol::Spydus
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

#[cfg(test)]
mod tests {
    use super::*;
    use panoptes_core_isbn::parse;
    use panoptes_domain_models::{Branch, BranchId, ItemStatus, LibrarySystemId};

    /**
     * CERTIFICACIÓN: Cosecha de la variante compacta 'holding-line'.
     */
    #[test]
    fn certify_holding_line_harvest() {
        let document = r#"<div class="holding-line">
  <span class="holding-location">Civic Centre</span>
  <span class="holding-shelfmark">F SMI</span>
  <span class="holding-status">In Transit</span>
</div>"#;

        let system = LibrarySystem {
            id: LibrarySystemId::new("spydus-demo"),
            name: "Spydus Demo".to_string(),
            vendor: "civica".to_string(),
            region: "QLD".to_string(),
            catalog_url: "https://spydus.example.org".to_string(),
            enabled: true,
            branches: vec![Branch {
                id: BranchId::new("civic"),
                name: "Civic Centre".to_string(),
                code: "CIV".to_string(),
                address: None,
                city: None,
            }],
            adapters: Vec::new(),
        };

        let holdings =
            SpydusAdapter::harvest(document, &system, &parse("9780306406157").expect("v").isbn13)
                .expect("nominal harvest");

        assert_eq!(holdings.len(), 1);
        assert_eq!(holdings[0].status, ItemStatus::InTransit);
        assert_eq!(holdings[0].branch_id, BranchId::new("civic"));
    }
}
