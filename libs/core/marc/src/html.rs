// [libs/core/marc/src/html.rs]
/*!
 * =================================================================
 * APARATO: HTML HARVESTING ENGINE (V11.0 - STRATEGY CASCADE)
 * CLASIFICACIÓN: CORE PARSING (ESTRATO L1)
 * RESPONSABILIDAD: COSECHA DE FILAS DE DISPONIBILIDAD POR SELECTORES CSS
 *
 * VISION HIPER-HOLÍSTICA:
 * Los catálogos renderizados en servidor (Enterprise, BiblioCommons,
 * Atriuum, Spydus) no exponen API: la disponibilidad vive en tablas HTML.
 * Cada adaptador declara una cascada de estrategias en especificidad
 * descendente; la primera que produce al menos una fila gana y las
 * restantes jamás se evalúan.
 * =================================================================
 */

use crate::errors::ExtractionError;
use scraper::{Html, Selector};

/// Estrategia de cosecha: un contenedor de filas y selectores por columna.
#[derive(Debug, Clone, Copy)]
pub struct SelectorStrategy {
    /// Nombre nominal de la estrategia (para rastro forense).
    pub name: &'static str,
    /// Selector CSS del contenedor de cada fila de ejemplar.
    pub container: &'static str,
    /// Selector de la celda de sucursal, relativo a la fila.
    pub branch: Option<&'static str>,
    /// Selector de la celda de signatura topográfica, relativo a la fila.
    pub call_number: Option<&'static str>,
    /// Selector de la celda de estado, relativo a la fila.
    pub status: Option<&'static str>,
    /// Selector de la celda de colección, relativo a la fila.
    pub collection: Option<&'static str>,
}

/// Fila cruda cosechada de una superficie HTML.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawHoldingRow {
    /// Texto de sucursal (sin resolver contra el registro de sucursales).
    pub branch_text: Option<String>,
    /// Texto de signatura topográfica.
    pub call_number_text: Option<String>,
    /// Texto de estado crudo del vendor.
    pub status_text: Option<String>,
    /// Texto de colección.
    pub collection_text: Option<String>,
    /// Estrategia ganadora que produjo esta fila.
    pub strategy_name: &'static str,
}

/**
 * Ejecuta la cascada de estrategias sobre el documento HTML.
 * Retorna las filas de la primera estrategia con cosecha no vacía;
 * vector vacío si toda la cascada quedó seca.
 *
 * # Errors:
 * `ExtractionError::SelectorSyntax` si una estrategia declara un
 * selector imposible de compilar (fallo de configuración, no de red).
 */
pub fn harvest_rows(
    html_material: &str,
    strategy_cascade: &[SelectorStrategy],
) -> Result<Vec<RawHoldingRow>, ExtractionError> {
    let document = Html::parse_document(html_material);

    for strategy in strategy_cascade {
        let container_selector = compile_selector(strategy.name, strategy.container)?;

        let mut harvested: Vec<RawHoldingRow> = Vec::new();
        for row_element in document.select(&container_selector) {
            let row = RawHoldingRow {
                branch_text: harvest_cell(&row_element, strategy.name, strategy.branch)?,
                call_number_text: harvest_cell(&row_element, strategy.name, strategy.call_number)?,
                status_text: harvest_cell(&row_element, strategy.name, strategy.status)?,
                collection_text: harvest_cell(&row_element, strategy.name, strategy.collection)?,
                strategy_name: strategy.name,
            };

            // Una fila sin sucursal ni estado es esqueleto de maquetación.
            if row.branch_text.is_some() || row.status_text.is_some() {
                harvested.push(row);
            }
        }

        if !harvested.is_empty() {
            return Ok(harvested);
        }
    }

    Ok(Vec::new())
}

// --- ESTRATO INTERNO DE COSECHA ---

fn compile_selector(strategy_name: &'static str, css: &str) -> Result<Selector, ExtractionError> {
    Selector::parse(css).map_err(|_| ExtractionError::SelectorSyntax(strategy_name.to_string()))
}

fn harvest_cell(
    row_element: &scraper::ElementRef<'_>,
    strategy_name: &'static str,
    cell_css: Option<&'static str>,
) -> Result<Option<String>, ExtractionError> {
    let Some(css) = cell_css else {
        return Ok(None);
    };

    let cell_selector = compile_selector(strategy_name, css)?;
    let collapsed = row_element.select(&cell_selector).next().map(|cell| {
        cell.text()
            .collect::<Vec<_>>()
            .join(" ")
            .split_whitespace()
            .collect::<Vec<_>>()
            .join(" ")
    });

    Ok(collapsed.filter(|text| !text.is_empty()))
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE_DOCUMENT: &str = r#"<html><body>
<table class="itemTable">
  <tr class="itemRow">
    <td class="branch">Main Library</td>
    <td class="callno">FIC SMI</td>
    <td class="status">Available</td>
  </tr>
  <tr class="itemRow">
    <td class="branch">West Branch</td>
    <td class="callno">FIC SMI</td>
    <td class="status">Checked Out</td>
  </tr>
</table>
</body></html>"#;

    const PRIMARY: SelectorStrategy = SelectorStrategy {
        name: "modern_grid",
        container: "div.results-grid .holding-card",
        branch: Some(".location"),
        call_number: Some(".shelf"),
        status: Some(".availability"),
        collection: None,
    };

    const FALLBACK: SelectorStrategy = SelectorStrategy {
        name: "legacy_table",
        container: "table.itemTable tr.itemRow",
        branch: Some("td.branch"),
        call_number: Some("td.callno"),
        status: Some("td.status"),
        collection: None,
    };

    /**
     * CERTIFICACIÓN: La cascada desciende hasta la estrategia con cosecha.
     */
    #[test]
    fn certify_cascade_descends_to_harvesting_strategy() {
        let rows = harvest_rows(SAMPLE_DOCUMENT, &[PRIMARY, FALLBACK])
            .expect("CRITICAL_FAULT: cascade collapsed");

        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].strategy_name, "legacy_table");
        assert_eq!(rows[0].branch_text.as_deref(), Some("Main Library"));
        assert_eq!(rows[0].status_text.as_deref(), Some("Available"));
        assert_eq!(rows[1].status_text.as_deref(), Some("Checked Out"));
    }

    /**
     * CERTIFICACIÓN: Documento sin filas produce cosecha vacía, no fallo.
     */
    #[test]
    fn certify_dry_document_tolerance() {
        let rows = harvest_rows("<html><body><p>No items.</p></body></html>", &[PRIMARY, FALLBACK])
            .expect("CRITICAL_FAULT: dry document rejected");
        assert!(rows.is_empty());
    }

    /**
     * CERTIFICACIÓN: El texto multi-fragmento colapsa a espaciado simple.
     */
    #[test]
    fn certify_whitespace_collapse() {
        let noisy = r#"<table class="itemTable"><tr class="itemRow">
            <td class="branch">  Main
                Library  </td><td class="status"><span>Available</span></td>
        </tr></table>"#;

        let rows = harvest_rows(noisy, &[FALLBACK]).expect("CRITICAL_FAULT: noisy document rejected");
        assert_eq!(rows[0].branch_text.as_deref(), Some("Main Library"));
    }
}
