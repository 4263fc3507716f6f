// [tests/mirror/libs/core/isbn/conversion_parity.test.rs]
/**
 * =================================================================
 * APARATO: ISBN CONVERSION PARITY MIRROR TEST (V3.0)
 * CLASIFICACIÓN: TRINITY EVIDENCE (ESTRATO L1-ISBN)
 * OBJETIVO: Certificar la normalización idempotente y la inversión
 *          bit-perfecta de la conversión 10 <-> 13.
 * =================================================================
 */

use panoptes_core_isbn::{parse, to_isbn10, to_isbn13, IsbnError};

/**
 * CERTIFICACIÓN: Escenarios literales del contrato de identidad.
 */
#[test]
fn certify_literal_identity_scenarios() {
    // Forma de 13 nominal.
    let thirteen = parse("9780306406157").expect("CRITICAL_FAULT: reference 13-form rejected");
    assert_eq!(thirteen.isbn13.as_str(), "9780306406157");

    // Forma de 10: cristaliza ambas identidades.
    let ten = parse("0306406152").expect("CRITICAL_FAULT: reference 10-form rejected");
    assert_eq!(ten.isbn13.as_str(), "9780306406157");
    assert_eq!(ten.isbn10.as_ref().map(|v| v.as_str()), Some("0306406152"));

    // 'X' como control en forma de 13: la ley mod-10 lo rechaza.
    let fault = parse("978-0-306-40615-X").expect_err("INTEGRITY_COLLAPSE: X accepted");
    assert!(fault.to_string().contains("check digit"), "rule name must surface");
    assert_eq!(fault, IsbnError::CheckDigit13);

    println!("✅ ISBN: Literal identity scenarios certified.");
}

/**
 * CERTIFICACIÓN: parse(parse(x).isbn13) == parse(x).isbn13 y
 * to_isbn10(to_isbn13(x)) == x sobre vectores reales de catálogo.
 */
#[test]
fn certify_idempotence_and_inversion() {
    let catalog_vectors = [
        "9780306406157",
        "978-0-14-028333-4",
        "0-14-028333-1",
        "080442957X",
        "9780743273565",
    ];

    for raw_vector in catalog_vectors {
        let first_pass = parse(raw_vector).expect("catalog vector must parse");
        let second_pass = parse(first_pass.isbn13.as_str()).expect("canonical must re-parse");
        assert_eq!(first_pass.isbn13, second_pass.isbn13, "IDEMPOTENCE_BREACH: {}", raw_vector);

        if let Some(ten_form) = first_pass.isbn10 {
            let roundtrip = to_isbn10(&to_isbn13(&ten_form)).expect("978 prefix converts");
            assert_eq!(roundtrip.as_str(), ten_form.as_str(), "INVERSION_BREACH: {}", raw_vector);
        }
    }

    println!("✅ ISBN: Idempotence and inversion certified.");
}
