// [tests/mirror/libs/core/marc/sru_envelope_parity.test.rs]
/**
 * =================================================================
 * APARATO: SRU ENVELOPE PARITY MIRROR TEST (V2.0)
 * CLASIFICACIÓN: TRINITY EVIDENCE (ESTRATO L1-MARC)
 * OBJETIVO: Certificar la apertura bit-perfecta del sobre SRU en sus
 *          variantes con y sin prefijo 'zs:'.
 * =================================================================
 */

use panoptes_core_marc::{build_sru_search_url, extract_sru_records};

const PREFIXED_ENVELOPE: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<zs:searchRetrieveResponse xmlns:zs="http://www.loc.gov/zing/srw/">
  <zs:version>1.1</zs:version>
  <zs:numberOfRecords>2</zs:numberOfRecords>
  <zs:records>
    <zs:record>
      <zs:recordData>
        <record xmlns="http://www.loc.gov/MARC21/slim">
          <controlfield tag="001">101</controlfield>
          <datafield tag="952" ind1=" " ind2=" ">
            <subfield code="b">main</subfield>
            <subfield code="o">FIC SMI</subfield>
          </datafield>
        </record>
      </zs:recordData>
    </zs:record>
    <zs:record>
      <zs:recordData>
        <record xmlns="http://www.loc.gov/MARC21/slim">
          <datafield tag="852" ind1=" " ind2=" ">
            <subfield code="b">WEST</subfield>
            <subfield code="h">813.54</subfield>
          </datafield>
        </record>
      </zs:recordData>
    </zs:record>
  </zs:records>
</zs:searchRetrieveResponse>"#;

/**
 * CERTIFICACIÓN: La URL de consulta es bit-exacta al contrato SRU 1.1.
 */
#[test]
fn certify_wire_exact_query() {
    let url = build_sru_search_url("https://sru.example.org/biblios", "9780306406157");
    assert_eq!(
        url,
        "https://sru.example.org/biblios?version=1.1&operation=searchRetrieve&query=bath.isbn=9780306406157&recordSchema=marcxml&maximumRecords=50"
    );
    println!("✅ SRU: Wire-exact query certified.");
}

/**
 * CERTIFICACIÓN: El sobre prefijado entrega ambos registros MARC,
 * descartando los cascarones del envoltorio 'zs:record'.
 */
#[test]
fn certify_prefixed_envelope_parity() {
    let records = extract_sru_records(PREFIXED_ENVELOPE)
        .expect("CRITICAL_FAULT: prefixed envelope rejected");

    assert_eq!(records.len(), 2, "wrapper shells must not inflate the record count");
    assert_eq!(records[0].control_field("001"), Some("101"));

    let koha_field = records[0].data_fields_with_tag("952").next().expect("952 lost");
    assert_eq!(koha_field.first_subfield('b'), Some("main"));

    let standard_field = records[1].data_fields_with_tag("852").next().expect("852 lost");
    assert_eq!(standard_field.first_subfield('h'), Some("813.54"));

    println!("✅ SRU: Prefixed envelope parity certified.");
}

/**
 * CERTIFICACIÓN: La variante sin prefijo entrega el mismo material.
 */
#[test]
fn certify_unprefixed_envelope_parity() {
    let unprefixed = PREFIXED_ENVELOPE.replace("zs:", "");
    let records = extract_sru_records(&unprefixed)
        .expect("CRITICAL_FAULT: unprefixed envelope rejected");
    assert_eq!(records.len(), 2, "prefix neutrality breach");
    println!("✅ SRU: Unprefixed envelope parity certified.");
}
