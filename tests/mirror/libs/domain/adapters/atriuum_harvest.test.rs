// [tests/mirror/libs/domain/adapters/atriuum_harvest.test.rs]
/**
 * =================================================================
 * APARATO: ATRIUUM HARVEST MIRROR TEST (V3.0)
 * CLASIFICACIÓN: TRINITY EVIDENCE (ESTRATO L2-ADAPTERS)
 * OBJETIVO: Certificar la cosecha HTML de dos filas con resolución
 *          de sucursal declarada y passthrough de la no declarada.
 * =================================================================
 */

use panoptes_core_isbn::parse;
use panoptes_domain_adapters::atriuum::AtriuumAdapter;
use panoptes_domain_models::{
    Branch, BranchId, ItemStatus, LibrarySystem, LibrarySystemId,
};

const ATRIUUM_DOCUMENT: &str = r#"<html><body>
<table id="holdingsTable">
  <tr class="holdingRow">
    <td class="branchName">Main Library</td>
    <td class="callNumber">FIC SMI</td>
    <td class="itemStatus">Available</td>
  </tr>
  <tr class="holdingRow">
    <td class="branchName">West Branch</td>
    <td class="callNumber">FIC SMI</td>
    <td class="itemStatus">Checked Out</td>
  </tr>
</table>
</body></html>"#;

/**
 * CERTIFICACIÓN: Dos filas (Main Library, FIC SMI, Available) y
 * (West Branch, FIC SMI, Checked Out) -> dos ejemplares con estados
 * 'available' y 'checked_out'; la primera sucursal resuelve al id
 * declarado 'main'.
 */
#[test]
fn certify_two_row_harvest() {
    let system = LibrarySystem {
        id: LibrarySystemId::new("prairie-creek"),
        name: "Prairie Creek Library".to_string(),
        vendor: "booksystems".to_string(),
        region: "TX".to_string(),
        catalog_url: "https://atriuum.prairiecreek.example.org".to_string(),
        enabled: true,
        branches: vec![Branch {
            id: BranchId::new("main"),
            name: "Main Library".to_string(),
            code: "MAIN".to_string(),
            address: None,
            city: None,
        }],
        adapters: Vec::new(),
    };
    let isbn = parse("9780306406157").expect("reference vector").isbn13;

    let holdings = AtriuumAdapter::harvest(ATRIUUM_DOCUMENT, &system, &isbn)
        .expect("CRITICAL_FAULT: harvest collapsed");

    assert_eq!(holdings.len(), 2);

    assert_eq!(holdings[0].status, ItemStatus::Available);
    assert_eq!(holdings[0].branch_id, BranchId::new("main"), "declared branch must resolve");
    assert_eq!(holdings[0].call_number.as_deref(), Some("FIC SMI"));

    assert_eq!(holdings[1].status, ItemStatus::CheckedOut);
    assert_eq!(
        holdings[1].branch_id,
        BranchId::new("West Branch"),
        "undeclared branch must travel as raw text, never crash"
    );

    println!("✅ ATRIUUM: Two-row harvest with branch resolution certified.");
}
