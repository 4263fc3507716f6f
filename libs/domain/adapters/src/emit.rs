// [libs/domain/adapters/src/emit.rs]
/*!
 * =================================================================
 * APARATO: HOLDING EMISSION FORGE (V9.0 - SHARED CRYSTALLIZATION)
 * CLASIFICACIÓN: DOMAIN ADAPTERS (ESTRATO L2)
 * RESPONSABILIDAD: CRISTALIZACIÓN UNIFORME DE EJEMPLARES
 *
 * VISION HIPER-HOLÍSTICA:
 * Los cuatro adaptadores de cosecha HTML y los REST comparten la misma
 * disciplina de emisión: resolver la sucursal declarada (o transportar
 * el texto crudo sin colapsar), normalizar el estado y sellar la huella
 * determinista. Este aparato es la única forja de esa disciplina.
 * =================================================================
 */

use crate::status::normalize_status;
use panoptes_core_isbn::Isbn13;
use panoptes_core_marc::RawHoldingRow;
use panoptes_domain_models::{
    BookHolding, BranchId, HoldingSource, LibrarySystem, MaterialType,
};

/// Materia prima neutra de un ejemplar listo para cristalizar.
#[derive(Debug, Clone)]
pub struct HoldingDraft {
    /// Texto de sucursal del vendor (nombre o código).
    pub branch_text: String,
    /// Signatura topográfica.
    pub call_number: Option<String>,
    /// Barcode del ejemplar (discriminador preferente de la huella).
    pub barcode: Option<String>,
    /// Estado crudo del vendor.
    pub raw_status: String,
    /// Colección declarada.
    pub collection: Option<String>,
    /// Volumen declarado.
    pub volume: Option<String>,
    /// Fecha de devolución declarada.
    pub due_date: Option<String>,
    /// Reservas declaradas.
    pub hold_count: Option<u32>,
    /// Copias que este registro representa.
    pub copy_count: Option<u32>,
    /// Tipo de material.
    pub material_type: MaterialType,
    /// Procedencia de la disponibilidad.
    pub source: HoldingSource,
}

impl Default for HoldingDraft {
    fn default() -> Self {
        Self {
            branch_text: String::new(),
            call_number: None,
            barcode: None,
            raw_status: String::new(),
            collection: None,
            volume: None,
            due_date: None,
            hold_count: None,
            copy_count: None,
            material_type: MaterialType::Book,
            source: HoldingSource::Direct,
        }
    }
}

impl HoldingDraft {
    /**
     * Cristaliza el borrador en un 'BookHolding' inmutable.
     *
     * La sucursal se resuelve contra las declaradas del sistema por
     * coincidencia insensible a mayúsculas sobre nombre o código; un
     * texto no reconocido viaja como identificador literal en lugar
     * de colapsar la búsqueda.
     */
    #[must_use]
    pub fn crystallize(self, system: &LibrarySystem, isbn: &Isbn13) -> BookHolding {
        let (branch_id, branch_name, branch_code) = match system.resolve_branch(&self.branch_text) {
            Some(declared) => (declared.id.clone(), declared.name.clone(), declared.code.clone()),
            None => (
                BranchId::new(self.branch_text.clone()),
                self.branch_text.clone(),
                self.branch_text.clone(),
            ),
        };

        let fingerprint = BookHolding::compute_fingerprint(
            &system.id,
            isbn,
            &branch_code,
            self.barcode.as_deref(),
            self.call_number.as_deref(),
        );

        BookHolding {
            isbn: isbn.clone(),
            system_id: system.id.clone(),
            branch_id,
            system_name: system.name.clone(),
            branch_name,
            call_number: self.call_number,
            status: normalize_status(&self.raw_status),
            material_type: self.material_type,
            due_date: self.due_date,
            hold_count: self.hold_count,
            copy_count: self.copy_count,
            catalog_url: system.catalog_url.clone(),
            collection: self.collection,
            volume: self.volume,
            raw_status: self.raw_status,
            source: self.source,
            fingerprint,
        }
    }
}

/**
 * Proyecta una fila HTML cosechada al borrador neutro de emisión.
 */
#[must_use]
pub fn draft_from_scraped_row(row: RawHoldingRow) -> HoldingDraft {
    HoldingDraft {
        branch_text: row.branch_text.unwrap_or_default(),
        call_number: row.call_number_text,
        raw_status: row.status_text.unwrap_or_default(),
        collection: row.collection_text,
        ..HoldingDraft::default()
    }
}

/**
 * Cosecha un documento HTML con la cascada de estrategias del adaptador
 * y cristaliza cada fila superviviente como ejemplar.
 *
 * # Errors:
 * `AdapterError::Parse` ante una estrategia con selector imposible
 * (fallo de configuración del adaptador, no de red).
 */
pub fn crystallize_scraped_document(
    html_material: &str,
    strategy_cascade: &[panoptes_core_marc::SelectorStrategy],
    system: &LibrarySystem,
    isbn: &Isbn13,
) -> Result<Vec<BookHolding>, crate::errors::AdapterError> {
    let rows = panoptes_core_marc::harvest_rows(html_material, strategy_cascade)
        .map_err(|extraction_fault| crate::errors::AdapterError::Parse(extraction_fault.to_string()))?;

    Ok(rows
        .into_iter()
        .map(|row| draft_from_scraped_row(row).crystallize(system, isbn))
        .collect())
}
