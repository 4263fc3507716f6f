// [libs/domain/adapters/src/aspen.rs]
/*!
 * =================================================================
 * APARATO: ASPEN DISCOVERY ADAPTER (V11.0 - ITEM API)
 * CLASIFICACIÓN: DOMAIN ADAPTERS (ESTRATO L2/L3)
 * RESPONSABILIDAD: BÚSQUEDA REST JSON CONTRA ASPEN DISCOVERY
 *
 * # Wire Contract:
 * GET {base}/API/ItemAPI?method=getItemAvailability&isbn={isbn}
 * Respuesta: {"result": {"success", "holdings": [...]}} donde cada
 * holding porta locationCode/callNumber/statusFull/dueDate/format.
 * =================================================================
 */

use crate::contract::CatalogAdapter;
use crate::emit::HoldingDraft;
use crate::errors::AdapterError;
use crate::http;
use crate::status::material_type_from_label;
use async_trait::async_trait;
use panoptes_core_isbn::Isbn13;
use panoptes_domain_models::{
    AdapterConfig, AdapterProtocol, BookHolding, HoldingSource, LibrarySystem,
};
use reqwest::Client;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
struct AspenEnvelope {
    result: AspenResult,
}

#[derive(Debug, Deserialize, Default)]
#[serde(default)]
struct AspenResult {
    success: bool,
    holdings: Vec<AspenHoldingRow>,
}

#[derive(Debug, Deserialize, Default)]
#[serde(default, rename_all = "camelCase")]
struct AspenHoldingRow {
    location_code: String,
    location_name: Option<String>,
    call_number: Option<String>,
    status_full: Option<String>,
    available: Option<bool>,
    due_date: Option<String>,
    format: Option<String>,
    barcode: Option<String>,
    shelf_location: Option<String>,
    num_holds: Option<u32>,
    total_copies: Option<u32>,
}

/// Adaptador REST para Aspen Discovery.
pub struct AspenAdapter {
    http_client: Client,
    config: AdapterConfig,
}

impl AspenAdapter {
    /// Construye el adaptador sobre el túnel HTTP compartido.
    #[must_use]
    pub fn new(http_client: Client, config: AdapterConfig) -> Self {
        Self { http_client, config }
    }

    fn search_url(&self, isbn: &Isbn13) -> String {
        format!(
            "{}/API/ItemAPI?method=getItemAvailability&isbn={}",
            self.config.base_url.trim_end_matches('/'),
            isbn.as_str()
        )
    }

    /**
     * Proyecta el cuerpo JSON crudo de Aspen a ejemplares cristalizados.
     * Pura y sin red: reutilizable desde fixtures de certificación.
     *
     * # Errors:
     * `AdapterError::Parse` ante un cuerpo fuera del esquema del vendor.
     */
    pub fn parse_response(
        raw_body: &str,
        system: &LibrarySystem,
        isbn: &Isbn13,
    ) -> Result<Vec<BookHolding>, AdapterError> {
        let envelope: AspenEnvelope = serde_json::from_str(raw_body).map_err(|schema_fault| {
            AdapterError::Parse(format!("vendor schema mismatch: {}", schema_fault))
        })?;
        Ok(Self::emit_holdings(envelope, system, isbn))
    }

    fn emit_holdings(
        envelope: AspenEnvelope,
        system: &LibrarySystem,
        isbn: &Isbn13,
    ) -> Vec<BookHolding> {
        if !envelope.result.success {
            return Vec::new();
        }

        envelope
            .result
            .holdings
            .into_iter()
            .map(|row| {
                // El estado textual prevalece; la bandera booleana es el
                // respaldo de instalaciones que omiten statusFull.
                let raw_status = row.status_full.unwrap_or_else(|| {
                    match row.available {
                        Some(true) => "Available".to_string(),
                        Some(false) => "Not Available".to_string(),
                        None => String::new(),
                    }
                });

                let material_type =
                    material_type_from_label(row.format.as_deref().unwrap_or(""));

                HoldingDraft {
                    branch_text: row.location_name.unwrap_or(row.location_code),
                    call_number: row.call_number,
                    barcode: row.barcode,
                    raw_status,
                    collection: row.shelf_location,
                    due_date: row.due_date,
                    hold_count: row.num_holds,
                    copy_count: row.total_copies,
                    material_type,
                    source: HoldingSource::Direct,
                    ..HoldingDraft::default()
                }
                .crystallize(system, isbn)
            })
            .collect()
    }
}

#[async_trait]
impl CatalogAdapter for AspenAdapter {
    fn protocol(&self) -> AdapterProtocol {
        AdapterProtocol::Aspen
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
