// [tests/mirror/libs/domain/adapters/koha_holdings_parity.test.rs]
/**
 * =================================================================
 * APARATO: KOHA HOLDINGS PARITY MIRROR TEST (V3.0)
 * CLASIFICACIÓN: TRINITY EVIDENCE (ESTRATO L2-ADAPTERS)
 * OBJETIVO: Certificar la derivación de circulación del campo vendor
 *          952 sobre un sobre SRU real de Koha.
 * =================================================================
 */

use panoptes_core_isbn::parse;
use panoptes_core_marc::extract_sru_records;
use panoptes_domain_adapters::koha::KohaAdapter;
use panoptes_domain_models::{
    Branch, BranchId, ItemStatus, LibrarySystem, LibrarySystemId,
};

fn riverbend_system() -> LibrarySystem {
    LibrarySystem {
        id: LibrarySystemId::new("riverbend"),
        name: "Riverbend Public Library".to_string(),
        vendor: "koha".to_string(),
        region: "TX".to_string(),
        catalog_url: "https://koha.riverbend.example.org".to_string(),
        enabled: true,
        branches: vec![
            Branch {
                id: BranchId::new("main"),
                name: "Main Library".to_string(),
                code: "main".to_string(),
                address: None,
                city: None,
            },
            Branch {
                id: BranchId::new("west"),
                name: "West Branch".to_string(),
                code: "WB".to_string(),
                address: None,
                city: None,
            },
        ],
        adapters: Vec::new(),
    }
}

const KOHA_ENVELOPE: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<zs:searchRetrieveResponse xmlns:zs="http://www.loc.gov/zing/srw/">
  <zs:numberOfRecords>1</zs:numberOfRecords>
  <zs:records>
    <zs:record>
      <zs:recordData>
        <record xmlns="http://www.loc.gov/MARC21/slim">
          <datafield tag="952" ind1=" " ind2=" ">
            <subfield code="b">main</subfield>
            <subfield code="o">FIC SMI</subfield>
            <subfield code="q">2025-12-15</subfield>
          </datafield>
          <datafield tag="952" ind1=" " ind2=" ">
            <subfield code="b">WB</subfield>
            <subfield code="o">FIC SMI</subfield>
            <subfield code="7">0</subfield>
            <subfield code="p">31234000123456</subfield>
          </datafield>
        </record>
      </zs:recordData>
    </zs:record>
  </zs:records>
</zs:searchRetrieveResponse>"#;

/**
 * CERTIFICACIÓN: 952 con '$q' deriva 'checked_out' transportando la
 * fecha; 952 limpio deriva 'available' con barcode en la huella.
 */
#[test]
fn certify_952_circulation_derivation() {
    let records = extract_sru_records(KOHA_ENVELOPE).expect("CRITICAL_FAULT: envelope rejected");
    let system = riverbend_system();
    let isbn = parse("9780306406157").expect("reference vector").isbn13;

    let holdings = KohaAdapter::emit_holdings(&records, &system, &isbn);
    assert_eq!(holdings.len(), 2, "one holding per 952 field");

    let checked_out = &holdings[0];
    assert_eq!(checked_out.status, ItemStatus::CheckedOut);
    assert_eq!(checked_out.due_date.as_deref(), Some("2025-12-15"));
    assert_eq!(checked_out.call_number.as_deref(), Some("FIC SMI"));
    assert_eq!(checked_out.branch_id, BranchId::new("main"), "branch 'main' must resolve");

    let available = &holdings[1];
    assert_eq!(available.status, ItemStatus::Available);
    assert_eq!(available.branch_id, BranchId::new("west"), "code 'WB' must resolve");
    assert!(
        available.fingerprint.ends_with(":31234000123456"),
        "barcode must discriminate the fingerprint"
    );

    println!("✅ KOHA: 952 circulation derivation certified.");
}

/**
 * CERTIFICACIÓN: Huellas estables entre búsquedas consecutivas.
 */
#[test]
fn certify_fingerprint_stability_across_searches() {
    let system = riverbend_system();
    let isbn = parse("9780306406157").expect("reference vector").isbn13;

    let first_pass = KohaAdapter::emit_holdings(
        &extract_sru_records(KOHA_ENVELOPE).expect("envelope"),
        &system,
        &isbn,
    );
    let second_pass = KohaAdapter::emit_holdings(
        &extract_sru_records(KOHA_ENVELOPE).expect("envelope"),
        &system,
        &isbn,
    );

    let first_prints: Vec<_> = first_pass.iter().map(|h| h.fingerprint.clone()).collect();
    let second_prints: Vec<_> = second_pass.iter().map(|h| h.fingerprint.clone()).collect();
    assert_eq!(first_prints, second_prints, "FINGERPRINT_DRIFT across consecutive searches");

    println!("✅ KOHA: Fingerprint stability certified.");
}
