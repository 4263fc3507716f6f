// [libs/domain/adapters/src/apollo.rs]
/*!
 * =================================================================
 * APARATO: APOLLO / BIBLIONIX ADAPTER (V9.0 - COPIES FEED)
 * CLASIFICACIÓN: DOMAIN ADAPTERS (ESTRATO L2/L3)
 * RESPONSABILIDAD: BÚSQUEDA REST JSON CONTRA APOLLO (BIBLIONIX)
 *
 * # Wire Contract:
 * GET {base}/api/copies?isbn={isbn}
 * Respuesta: {"copies": [{"branch", "call_number", "status_text",
 * "due_back", "collection"}]} en snake_case del vendor.
 * =================================================================
 */

use crate::contract::CatalogAdapter;
use crate::emit::HoldingDraft;
use crate::errors::AdapterError;
use crate::http;
use async_trait::async_trait;
use panoptes_core_isbn::Isbn13;
use panoptes_domain_models::{
    AdapterConfig, AdapterProtocol, BookHolding, HoldingSource, LibrarySystem,
};
use reqwest::Client;
use serde::Deserialize;

#[derive(Debug, Deserialize, Default)]
#[serde(default)]
struct ApolloEnvelope {
    copies: Vec<ApolloCopyRow>,
}

#[derive(Debug, Deserialize, Default)]
#[serde(default)]
struct ApolloCopyRow {
    branch: String,
    call_number: Option<String>,
    status_text: Option<String>,
    due_back: Option<String>,
    collection: Option<String>,
}

/// Adaptador REST para Apollo (Biblionix).
pub struct ApolloAdapter {
    http_client: Client,
    config: AdapterConfig,
}

impl ApolloAdapter {
    /// Construye el adaptador sobre el túnel HTTP compartido.
    #[must_use]
    pub fn new(http_client: Client, config: AdapterConfig) -> Self {
        Self { http_client, config }
    }

    fn search_url(&self, isbn: &Isbn13) -> String {
        format!(
            "{}/api/copies?isbn={}",
            self.config.base_url.trim_end_matches('/'),
            isbn.as_str()
        )
    }

    /**
     * Proyecta el cuerpo JSON crudo de Apollo a ejemplares cristalizados.
     *
     * # Errors:
     * `AdapterError::Parse` ante un cuerpo fuera del esquema del vendor.
     */
    pub fn parse_response(
        raw_body: &str,
        system: &LibrarySystem,
        isbn: &Isbn13,
    ) -> Result<Vec<BookHolding>, AdapterError> {
        let envelope: ApolloEnvelope = serde_json::from_str(raw_body).map_err(|schema_fault| {
            AdapterError::Parse(format!("vendor schema mismatch: {}", schema_fault))
        })?;
        Ok(Self::emit_holdings(envelope, system, isbn))
    }

    fn emit_holdings(
        envelope: ApolloEnvelope,
        system: &LibrarySystem,
        isbn: &Isbn13,
    ) -> Vec<BookHolding> {
        envelope
            .copies
            .into_iter()
            .filter(|row| !row.branch.trim().is_empty())
            .map(|row| {
                HoldingDraft {
                    branch_text: row.branch,
                    call_number: row.call_number,
                    raw_status: row.status_text.unwrap_or_default(),
                    collection: row.collection,
                    due_date: row.due_back,
                    source: HoldingSource::Direct,
                    ..HoldingDraft::default()
                }
                .crystallize(system, isbn)
            })
            .collect()
    }
}

#[async_trait]
impl CatalogAdapter for ApolloAdapter {
    fn protocol(&self) -> AdapterProtocol {
        AdapterProtocol::Apollo
    }

    fn config(&self) -> &AdapterConfig {
        &self.config
    }

    async fn execute_search(
        &self,
        isbn: &Isbn13,
        system: &LibrarySystem,
    ) -> Result<Vec<BookHolding>, AdapterError> {
        let raw_body = http::fetch_text(
            &self.http_client,
            &self.search_url(isbn),
            self.config.timeout_ms,
        )
        .await?;

        Self::parse_response(&raw_body, system, isbn)
    }
}
