// [libs/domain/adapters/src/polaris.rs]
/*!
 * =================================================================
 * APARATO: POLARIS PAPI ADAPTER (V10.0 - BIB HOLDINGS ROWS)
 * CLASIFICACIÓN: DOMAIN ADAPTERS (ESTRATO L2/L3)
 * RESPONSABILIDAD: BÚSQUEDA REST AUTENTICADA CONTRA POLARIS PAPI
 *
 * # Wire Contract:
 * GET {base}/PAPIService/REST/public/v1/1033/100/1/search/bibs/holdings?isbn={isbn}
 * con cabecera 'PolarisAccessKey' desde la variable de entorno
 * declarada. Respuesta PascalCase del vendor:
 * {"PAPIErrorCode": 0, "BibHoldingsGetRows": [...]}.
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

/// Cabecera propietaria de autenticación PAPI.
const ACCESS_KEY_HEADER: &str = "PolarisAccessKey";

#[derive(Debug, Deserialize, Default)]
#[serde(default, rename_all = "PascalCase")]
struct PolarisEnvelope {
    #[serde(rename = "PAPIErrorCode")]
    papi_error_code: i64,
    bib_holdings_get_rows: Vec<PolarisHoldingRow>,
}

#[derive(Debug, Deserialize, Default)]
#[serde(default, rename_all = "PascalCase")]
struct PolarisHoldingRow {
    location_name: String,
    call_number: Option<String>,
    circ_status_name: Option<String>,
    due_date: Option<String>,
    barcode: Option<String>,
    collection_name: Option<String>,
    holds_count: Option<u32>,
}

/// Adaptador REST autenticado para Polaris PAPI.
pub struct PolarisAdapter {
    http_client: Client,
    config: AdapterConfig,
    access_key: Option<String>,
}

impl PolarisAdapter {
    /**
     * Construye el adaptador resolviendo la clave de acceso del entorno.
     */
    #[must_use]
    pub fn new(http_client: Client, config: AdapterConfig) -> Self {
        let access_key = config
            .client_key_env_var
            .as_deref()
            .and_then(|variable_name| std::env::var(variable_name).ok());

        Self { http_client, config, access_key }
    }

    fn search_url(&self, isbn: &Isbn13) -> String {
        format!(
            "{}/PAPIService/REST/public/v1/1033/100/1/search/bibs/holdings?isbn={}",
            self.config.base_url.trim_end_matches('/'),
            isbn.as_str()
        )
    }

    /**
     * Proyecta el cuerpo JSON crudo de PAPI a ejemplares cristalizados.
     *
     * # Errors:
     * `AdapterError::Parse` ante un cuerpo fuera del esquema del vendor
     * o un código de aplicación PAPI distinto de cero.
     */
    pub fn parse_response(
        raw_body: &str,
        system: &LibrarySystem,
        isbn: &Isbn13,
    ) -> Result<Vec<BookHolding>, AdapterError> {
        let envelope: PolarisEnvelope = serde_json::from_str(raw_body).map_err(|schema_fault| {
            AdapterError::Parse(format!("vendor schema mismatch: {}", schema_fault))
        })?;
        Self::emit_holdings(envelope, system, isbn)
    }

    fn emit_holdings(
        envelope: PolarisEnvelope,
        system: &LibrarySystem,
        isbn: &Isbn13,
    ) -> Result<Vec<BookHolding>, AdapterError> {
        // PAPI reporta fallos de aplicación dentro de un HTTP 200.
        if envelope.papi_error_code != 0 {
            return Err(AdapterError::Parse(format!(
                "PAPI application fault: code {}",
                envelope.papi_error_code
            )));
        }

        Ok(envelope
            .bib_holdings_get_rows
            .into_iter()
            .filter(|row| !row.location_name.trim().is_empty())
            .map(|row| {
                HoldingDraft {
                    branch_text: row.location_name,
                    call_number: row.call_number,
                    barcode: row.barcode,
                    raw_status: row.circ_status_name.unwrap_or_default(),
                    collection: row.collection_name,
                    due_date: row.due_date,
                    hold_count: row.holds_count,
                    source: HoldingSource::Direct,
                    ..HoldingDraft::default()
                }
                .crystallize(system, isbn)
            })
            .collect())
    }
}

#[async_trait]
impl CatalogAdapter for PolarisAdapter {
    fn protocol(&self) -> AdapterProtocol {
        AdapterProtocol::PolarisPapi
    }

    fn config(&self) -> &AdapterConfig {
        &self.config
    }

    async fn execute_search(
        &self,
        isbn: &Isbn13,
        system: &LibrarySystem,
    ) -> Result<Vec<BookHolding>, AdapterError> {
        let Some(access_key) = &self.access_key else {
            return Err(AdapterError::Auth("missing Polaris access key".to_string()));
        };

        let request = self
            .http_client
            .get(self.search_url(isbn))
            .header(ACCESS_KEY_HEADER, access_key);
        let response = request
            .send()
            .await
            .map_err(|fault| http::classify_network_fault(&fault, self.config.timeout_ms))?;
        http::audit_response_status(&response)?;
        let raw_body = response
            .text()
            .await
            .map_err(|fault| http::classify_network_fault(&fault, self.config.timeout_ms))?;

        Self::parse_response(&raw_body, system, isbn)
    }
}
