// [libs/domain/adapters/src/sierra.rs]
/*!
 * =================================================================
 * APARATO: SIERRA REST ADAPTER (V13.0 - OAUTH CLIENT CREDENTIALS)
 * CLASIFICACIÓN: DOMAIN ADAPTERS (ESTRATO L2/L3)
 * RESPONSABILIDAD: BÚSQUEDA REST AUTENTICADA CONTRA INNOVATIVE SIERRA
 *
 * # Wire Contract:
 * 1. POST {base}/v6/token (Basic key:secret, grant_type=client_credentials)
 *    -> {"access_token": "..."}
 * 2. GET {base}/v6/items?isbn={isbn}&fields=location,status,callNumber,barcode
 *    (Bearer token) -> {"entries": [...]}
 *
 * El material secreto viaja SOLO desde las variables de entorno
 * declaradas en la configuración; jamás se loguea ni se almacena en
 * el documento del registro.
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

#[derive(Debug, Deserialize)]
struct SierraTokenEnvelope {
    access_token: String,
}

#[derive(Debug, Deserialize, Default)]
#[serde(default)]
struct SierraItemsEnvelope {
    entries: Vec<SierraItemRow>,
}

#[derive(Debug, Deserialize, Default)]
#[serde(default, rename_all = "camelCase")]
struct SierraItemRow {
    location: SierraLocation,
    status: SierraStatus,
    call_number: Option<String>,
    barcode: Option<String>,
}

#[derive(Debug, Deserialize, Default)]
#[serde(default)]
struct SierraLocation {
    code: String,
    name: String,
}

#[derive(Debug, Deserialize, Default)]
#[serde(default)]
struct SierraStatus {
    display: String,
    duedate: Option<String>,
}

/// Adaptador REST autenticado para Innovative Sierra.
pub struct SierraAdapter {
    http_client: Client,
    config: AdapterConfig,
    client_key: Option<String>,
    client_secret: Option<String>,
}

impl SierraAdapter {
    /**
     * Construye el adaptador resolviendo credenciales desde el entorno.
     * Las variables ya fueron validadas como resolubles por el registro.
     */
    #[must_use]
    pub fn new(http_client: Client, config: AdapterConfig) -> Self {
        let client_key = config
            .client_key_env_var
            .as_deref()
            .and_then(|variable_name| std::env::var(variable_name).ok());
        let client_secret = config
            .client_secret_env_var
            .as_deref()
            .and_then(|variable_name| std::env::var(variable_name).ok());

        Self { http_client, config, client_key, client_secret }
    }

    async fn negotiate_access_token(&self) -> Result<String, AdapterError> {
        let (Some(key), Some(secret)) = (&self.client_key, &self.client_secret) else {
            return Err(AdapterError::Auth("missing Sierra client credentials".to_string()));
        };

        let token_url = format!("{}/v6/token", self.config.base_url.trim_end_matches('/'));
        let request = self
            .http_client
            .post(token_url)
            .basic_auth(key, Some(secret))
            .form(&[("grant_type", "client_credentials")]);

        let envelope: SierraTokenEnvelope =
            http::fetch_json(request, self.config.timeout_ms).await?;
        Ok(envelope.access_token)
    }

    /**
     * Proyecta el cuerpo JSON crudo de /items a ejemplares cristalizados.
     *
     * # Errors:
     * `AdapterError::Parse` ante un cuerpo fuera del esquema del vendor.
     */
    pub fn parse_response(
        raw_body: &str,
        system: &LibrarySystem,
        isbn: &Isbn13,
    ) -> Result<Vec<BookHolding>, AdapterError> {
        let envelope: SierraItemsEnvelope = serde_json::from_str(raw_body).map_err(|schema_fault| {
            AdapterError::Parse(format!("vendor schema mismatch: {}", schema_fault))
        })?;
        Ok(Self::emit_holdings(envelope, system, isbn))
    }

    fn emit_holdings(
        envelope: SierraItemsEnvelope,
        system: &LibrarySystem,
        isbn: &Isbn13,
    ) -> Vec<BookHolding> {
        envelope
            .entries
            .into_iter()
            .map(|row| {
                let branch_text = if row.location.name.trim().is_empty() {
                    row.location.code
                } else {
                    row.location.name
                };

                HoldingDraft {
                    branch_text,
                    call_number: row.call_number,
                    barcode: row.barcode,
                    raw_status: row.status.display,
                    due_date: row.status.duedate,
                    source: HoldingSource::Direct,
                    ..HoldingDraft::default()
                }
                .crystallize(system, isbn)
            })
            .collect()
    }
}

#[async_trait]
impl CatalogAdapter for SierraAdapter {
    fn protocol(&self) -> AdapterProtocol {
        AdapterProtocol::SierraRest
    }

    fn config(&self) -> &AdapterConfig {
        &self.config
    }

    async fn execute_search(
        &self,
        isbn: &Isbn13,
        system: &LibrarySystem,
    ) -> Result<Vec<BookHolding>, AdapterError> {
        let access_token = self.negotiate_access_token().await?;

        let items_url = format!(
            "{}/v6/items?isbn={}&fields=location,status,callNumber,barcode",
            self.config.base_url.trim_end_matches('/'),
            isbn.as_str()
        );
        let request = self.http_client.get(items_url).bearer_auth(access_token);
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
