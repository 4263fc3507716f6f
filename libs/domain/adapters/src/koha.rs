// [libs/domain/adapters/src/koha.rs]
/*!
 * =================================================================
 * APARATO: KOHA SRU ADAPTER (V15.0 - VENDOR FIELD 952)
 * CLASIFICACIÓN: DOMAIN ADAPTERS (ESTRATO L2/L3)
 * RESPONSABILIDAD: BÚSQUEDA SRU CON DISPONIBILIDAD DERIVADA DE 952
 *
 * VISION HIPER-HOLÍSTICA:
 * Koha enriquece el MARCXML con el campo vendor 952 (un campo por
 * ejemplar físico): b/a=sucursal, o=signatura, p=barcode, y=itype,
 * 7=bandera not-for-loan, q=fecha de devolución. A diferencia del
 * perfil Bath estándar, la circulación SÍ es derivable:
 *   7 != "0"  -> "Not for loan"
 *   q presente -> "Checked out"
 *   si no      -> "Available"
 * =================================================================
 */

use crate::contract::CatalogAdapter;
use crate::emit::HoldingDraft;
use crate::errors::AdapterError;
use crate::http;
use crate::status::material_type_from_itype;
use async_trait::async_trait;
use panoptes_core_isbn::Isbn13;
use panoptes_core_marc::{build_sru_search_url, extract_sru_records, DataField, MarcRecord};
use panoptes_domain_models::{
    AdapterConfig, AdapterProtocol, BookHolding, HoldingSource, LibrarySystem, MaterialType,
};
use reqwest::Client;
use tracing::debug;

/// Adaptador SRU para catálogos Koha (campo vendor 952).
pub struct KohaAdapter {
    http_client: Client,
    config: AdapterConfig,
}

impl KohaAdapter {
    /// Construye el adaptador sobre el túnel HTTP compartido.
    #[must_use]
    pub fn new(http_client: Client, config: AdapterConfig) -> Self {
        Self { http_client, config }
    }

    /**
     * Deriva el estado crudo del ejemplar desde las banderas 952.
     */
    fn derive_raw_status(item_field: &DataField) -> String {
        let not_for_loan = item_field
            .first_subfield('7')
            .map(|flag| flag != "0")
            .unwrap_or(false);

        if not_for_loan {
            "Not for loan".to_string()
        } else if item_field.first_subfield('q').is_some() {
            "Checked out".to_string()
        } else {
            "Available".to_string()
        }
    }

    /**
     * Proyecta los campos 952 de los registros a ejemplares.
     * Pura y sin red: reutilizable desde fixtures de certificación.
     */
    pub fn emit_holdings(
        records: &[MarcRecord],
        system: &LibrarySystem,
        isbn: &Isbn13,
    ) -> Vec<BookHolding> {
        let mut crystallized = Vec::new();

        for record in records {
            for item_field in record.data_fields_with_tag("952") {
                // La sucursal viaja en b (homebranch) con a como respaldo.
                let Some(branch_text) = item_field
                    .first_subfield('b')
                    .or_else(|| item_field.first_subfield('a'))
                else {
                    continue;
                };

                let material_type = item_field
                    .first_subfield('y')
                    .map(material_type_from_itype)
                    .unwrap_or(MaterialType::Book);

                let draft = HoldingDraft {
                    branch_text: branch_text.to_string(),
                    call_number: item_field.first_subfield('o').map(str::to_string),
                    barcode: item_field.first_subfield('p').map(str::to_string),
                    raw_status: Self::derive_raw_status(item_field),
                    due_date: item_field.first_subfield('q').map(str::to_string),
                    material_type,
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
impl CatalogAdapter for KohaAdapter {
    fn protocol(&self) -> AdapterProtocol {
        AdapterProtocol::Koha
    }

    fn config(&self) -> &AdapterConfig {
        &self.config
    }

    async fn execute_search(
        &self,
        isbn: &Isbn13,
        system: &LibrarySystem,
    ) -> Result<Vec<BookHolding>, AdapterError> {
        let search_url = build_sru_search_url(&self.config.base_url, isbn.as_str());
        let response_material =
            http::fetch_text(&self.http_client, &search_url, self.config.timeout_ms).await?;

        let records = extract_sru_records(&response_material)
            .map_err(|extraction_fault| AdapterError::Parse(extraction_fault.to_string()))?;

        let holdings = Self::emit_holdings(&records, system, isbn);
        debug!(
            "📘 [KOHA_SRU]: {} item fields crystallized for [{}].",
            holdings.len(),
            system.id
        );

        Ok(holdings)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use panoptes_core_isbn::parse;
    use panoptes_domain_models::{Branch, BranchId, ItemStatus, LibrarySystemId};

    fn probe_system() -> LibrarySystem {
        LibrarySystem {
            id: LibrarySystemId::new("koha-demo"),
            name: "Koha Demo Library".to_string(),
            vendor: "koha".to_string(),
            region: "TX".to_string(),
            catalog_url: "https://koha.example.org".to_string(),
            enabled: true,
            branches: vec![Branch {
                id: BranchId::new("main"),
                name: "Main Library".to_string(),
                code: "main".to_string(),
                address: None,
                city: None,
            }],
            adapters: Vec::new(),
        }
    }

    fn envelope_with_952(subfields: &str) -> String {
        format!(
            r#"<collection><record><datafield tag="952" ind1=" " ind2=" ">{}</datafield></record></collection>"#,
            subfields
        )
    }

    /**
     * CERTIFICACIÓN: 952 con fecha de devolución deriva 'Checked out'
     * y transporta la fecha textual intacta.
     */
    #[test]
    fn certify_due_date_derivation() {
        let envelope = envelope_with_952(
            r#"<subfield code="b">main</subfield><subfield code="o">FIC SMI</subfield><subfield code="q">2025-12-15</subfield>"#,
        );
        let records = extract_sru_records(&envelope).expect("nominal envelope");
        let system = probe_system();
        let isbn = parse("9780306406157").expect("reference vector").isbn13;

        let holdings = KohaAdapter::emit_holdings(&records, &system, &isbn);
        assert_eq!(holdings.len(), 1);
        assert_eq!(holdings[0].status, ItemStatus::CheckedOut);
        assert_eq!(holdings[0].due_date.as_deref(), Some("2025-12-15"));
        assert_eq!(holdings[0].raw_status, "Checked out");
        assert_eq!(holdings[0].branch_id, BranchId::new("main"));
    }

    /**
     * CERTIFICACIÓN: La bandera not-for-loan prevalece sobre la fecha.
     */
    #[test]
    fn certify_not_for_loan_precedence() {
        let envelope = envelope_with_952(
            r#"<subfield code="b">main</subfield><subfield code="7">1</subfield><subfield code="q">2025-12-15</subfield>"#,
        );
        let records = extract_sru_records(&envelope).expect("nominal envelope");
        let holdings =
            KohaAdapter::emit_holdings(&records, &probe_system(), &parse("9780306406157").expect("v").isbn13);

        assert_eq!(holdings[0].raw_status, "Not for loan");
    }

    /**
     * CERTIFICACIÓN: Sin bandera ni fecha, el ejemplar está disponible,
     * con barcode como discriminador de huella e itype proyectado.
     */
    #[test]
    fn certify_available_with_barcode_fingerprint() {
        let envelope = envelope_with_952(
            r#"<subfield code="b">main</subfield><subfield code="7">0</subfield><subfield code="p">31234000123456</subfield><subfield code="y">dvd</subfield>"#,
        );
        let records = extract_sru_records(&envelope).expect("nominal envelope");
        let holdings =
            KohaAdapter::emit_holdings(&records, &probe_system(), &parse("9780306406157").expect("v").isbn13);

        assert_eq!(holdings[0].status, ItemStatus::Available);
        assert_eq!(holdings[0].material_type, MaterialType::Dvd);
        assert!(
            holdings[0].fingerprint.ends_with(":31234000123456"),
            "barcode must discriminate the fingerprint"
        );
    }
}
