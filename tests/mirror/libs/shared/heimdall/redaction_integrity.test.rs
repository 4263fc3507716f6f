// [tests/mirror/libs/shared/heimdall/redaction_integrity.test.rs]
/**
 * =================================================================
 * APARATO: REDACTION INTEGRITY MIRROR TEST (V2.0)
 * CLASIFICACIÓN: TRINITY EVIDENCE
 * OBJETIVO: Certificar que ningún material sensible cruza el estrato
 *          de trazas del Panóptico.
 * =================================================================
 */

use panoptes_shared_heimdall::redaction::{is_sensitive_key, redact_pairs, REDACTED_SENTINEL};

/**
 * CERTIFICACIÓN: El catálogo sensible cubre las claves del contrato
 * (clientSecret, accessKey, password, apiKey, Authorization).
 */
#[test]
fn certify_sensitive_catalog_coverage() {
    for sensitive in ["clientSecret", "accessKey", "password", "apiKey", "Authorization"] {
        assert!(is_sensitive_key(sensitive), "CATALOG_GAP: '{}' must be sensitive", sensitive);
    }
    assert!(!is_sensitive_key("vendor"));
    println!("✅ REDACTION: Sensitive catalog coverage certified.");
}

/**
 * CERTIFICACIÓN: La redacción por pares neutraliza sólo los valores
 * sensibles y preserva el resto bit-perfecto.
 */
#[test]
fn certify_pairwise_redaction() {
    let redacted = redact_pairs(vec![
        ("Authorization", "Bearer sk-material-vivo"),
        ("apiKey", "XYZ-123"),
        ("region", "TX"),
    ]);

    assert_eq!(redacted[0].1, REDACTED_SENTINEL);
    assert_eq!(redacted[1].1, REDACTED_SENTINEL);
    assert_eq!(redacted[2].1, "TX", "ordinary values must survive intact");
    println!("✅ REDACTION: Pairwise neutralization certified.");
}
