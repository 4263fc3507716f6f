// [libs/domain/adapters/src/sru_generic.rs]
/*!
 * =================================================================
 * APARATO: GENERIC SRU ADAPTER (V12.0 - MARC 852 STANDARD)
 * CLASIFICACIÓN: DOMAIN ADAPTERS (ESTRATO L2/L3)
 * RESPONSABILIDAD: BÚSQUEDA SRU 1.1 CON HOLDINGS MARC 852 ESTÁNDAR
 *
 * VISION HIPER-HOLÍSTICA:
 * El SRU genérico habla con cualquier catálogo que exponga el perfil
 * Bath. Los holdings viajan en el campo estándar 852 (b=sucursal,
 * h=signatura, z=nota pública, c=sublocalización). El protocolo NO
 * transporta disponibilidad en tiempo real: el estado emitido es
 * 'unknown' por contrato.
 * =================================================================
 */

use crate::contract::CatalogAdapter;
use crate::emit::HoldingDraft;
use crate::errors::AdapterError;
use crate::http;
use async_trait::async_trait;
use panoptes_core_isbn::Isbn13;
use panoptes_core_marc::{build_sru_search_url, extract_sru_records, MarcRecord};
use panoptes_domain_models::{
    AdapterConfig, AdapterProtocol, BookHolding, HoldingSource, LibrarySystem, MaterialType,
};
use reqwest::Client;
use tracing::debug;

/// Adaptador SRU 1.1 genérico (perfil Bath, holdings 852).
pub struct GenericSruAdapter {
    http_client: Client,
    config: AdapterConfig,
}

impl GenericSruAdapter {
    /// Construye el adaptador sobre el túnel HTTP compartido.
    #[must_use]
    pub fn new(http_client: Client, config: AdapterConfig) -> Self {
        Self { http_client, config }
    }

    /**
     * Punto de montaje SRU efectivo: la base, con puerto explícito y
     * base de datos anexada cuando la configuración (estilo Z39.50)
     * los declara.
     */
    fn mount_point(&self) -> String {
        let mut mount = self.config.base_url.trim_end_matches('/').to_string();

        if let Some(explicit_port) = self.config.port {
            if let Ok(mut parsed) = url::Url::parse(&mount) {
                if parsed.set_port(Some(explicit_port)).is_ok() {
                    mount = parsed.to_string().trim_end_matches('/').to_string();
                }
            }
        }

        if let Some(database_name) = &self.config.database_name {
            mount = format!("{}/{}", mount, database_name.trim_matches('/'));
        }

        mount
    }

    /**
     * Proyecta los campos 852 de los registros MARC a ejemplares.
     * Pura y sin red: reutilizable desde fixtures de certificación.
     */
    pub fn emit_holdings(
        records: &[MarcRecord],
        system: &LibrarySystem,
        isbn: &Isbn13,
    ) -> Vec<BookHolding> {
        let mut crystallized = Vec::new();

        for record in records {
            for holdings_field in record.data_fields_with_tag("852") {
                let Some(branch_text) = holdings_field.first_subfield('b') else {
                    continue;
                };

                let draft = HoldingDraft {
                    branch_text: branch_text.to_string(),
                    call_number: holdings_field.first_subfield('h').map(str::to_string),
                    collection: holdings_field.first_subfield('c').map(str::to_string),
                    // El perfil Bath no expone circulación: la nota pública
                    // es el único rastro de estado, y no es interpretable.
                    raw_status: holdings_field.first_subfield('z').unwrap_or("").to_string(),
                    material_type: MaterialType::Book,
                    source: HoldingSource::Direct,
                    ..HoldingDraft::default()
                };

                crystallized.push(draft.crystallize(system, isbn));
            }
        }

        crystallized
    }
}

#[async_trait]
impl CatalogAdapter for GenericSruAdapter {
    fn protocol(&self) -> AdapterProtocol {
        AdapterProtocol::SruGeneric
    }

    fn config(&self) -> &AdapterConfig {
        &self.config
    }

    async fn execute_search(
        &self,
        isbn: &Isbn13,
        system: &LibrarySystem,
    ) -> Result<Vec<BookHolding>, AdapterError> {
        let search_url = build_sru_search_url(&self.mount_point(), isbn.as_str());
        let response_material =
            http::fetch_text(&self.http_client, &search_url, self.config.timeout_ms).await?;

        let records = extract_sru_records(&response_material)
            .map_err(|extraction_fault| AdapterError::Parse(extraction_fault.to_string()))?;

        let holdings = Self::emit_holdings(&records, system, isbn);
        debug!(
            "📗 [SRU_GENERIC]: {} holdings from {} records for [{}].",
            holdings.len(),
            records.len(),
            system.id
        );

        Ok(holdings)
    }
}
