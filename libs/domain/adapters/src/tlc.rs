// [libs/domain/adapters/src/tlc.rs]
/*!
 * =================================================================
 * APARATO: TLC ADAPTER (V9.0 - LS2 ITEMS API)
 * CLASIFICACIÓN: DOMAIN ADAPTERS (ESTRATO L2/L3)
 * RESPONSABILIDAD: BÚSQUEDA REST JSON CONTRA TLC LS2 PAC
 *
 * # Wire Contract:
 * GET {base}/ls2pac/api/items?isbn={isbn}
 * Respuesta: {"items": [{"location", "callNumber", "status",
 * "collection", "dueDate"}]}.
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
struct TlcEnvelope {
    items: Vec<TlcItemRow>,
}

#[derive(Debug, Deserialize, Default)]
#[serde(default, rename_all = "camelCase")]
struct TlcItemRow {
    location: String,
    call_number: Option<String>,
    status: Option<String>,
    collection: Option<String>,
    due_date: Option<String>,
    barcode: Option<String>,
}

/// Adaptador REST para TLC (The Library Corporation) LS2 PAC.
pub struct TlcAdapter {
    http_client: Client,
    config: AdapterConfig,
}

impl TlcAdapter {
    /// Construye el adaptador sobre el túnel HTTP compartido.
    #[must_use]
    pub fn new(http_client: Client, config: AdapterConfig) -> Self {
        Self { http_client, config }
    }

    fn search_url(&self, isbn: &Isbn13) -> String {
        format!(
            "{}/ls2pac/api/items?isbn={}",
            self.config.base_url.trim_end_matches('/'),
            isbn.as_str()
        )
    }

    /**
     * Proyecta el cuerpo JSON crudo de LS2 a ejemplares cristalizados.
     *
     * # Errors:
     * `AdapterError::Parse` ante un cuerpo fuera del esquema del vendor.
     */
    pub fn parse_response(
        raw_body: &str,
        system: &LibrarySystem,
        isbn: &Isbn13,
    ) -> Result<Vec<BookHolding>, AdapterError> {
        let envelope: TlcEnvelope = serde_json::from_str(raw_body).map_err(|schema_fault| {
            AdapterError::Parse(format!("vendor schema mismatch: {}", schema_fault))
        })?;
        Ok(Self::emit_holdings(envelope, system, isbn))
    }

    fn emit_holdings(
        envelope: TlcEnvelope,
        system: &LibrarySystem,
        isbn: &Isbn13,
    ) -> Vec<BookHolding> {
        envelope
            .items
            .into_iter()
            .filter(|row| !row.location.trim().is_empty())
            .map(|row| {
                HoldingDraft {
                    branch_text: row.location,
                    call_number: row.call_number,
                    barcode: row.barcode,
                    raw_status: row.status.unwrap_or_default(),
                    collection: row.collection,
                    due_date: row.due_date,
                    source: HoldingSource::Direct,
                    ..HoldingDraft::default()
                }
                .crystallize(system, isbn)
            })
            .collect()
    }
}

#[async_trait]
impl CatalogAdapter for TlcAdapter {
    fn protocol(&self) -> AdapterProtocol {
        AdapterProtocol::Tlc
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
