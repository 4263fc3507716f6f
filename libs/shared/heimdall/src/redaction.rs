// [libs/shared/heimdall/src/redaction.rs]
/*!
 * =================================================================
 * APARATO: SECRET REDACTION SHIELD (V4.1 - ZERO LEAK)
 * CLASIFICACIÓN: SHARED UTILITY (ESTRATO L4/L6)
 * RESPONSABILIDAD: NEUTRALIZACIÓN DE MATERIAL SENSIBLE EN TRAZAS
 *
 * VISION HIPER-HOLÍSTICA:
 * Los adaptadores federados transportan credenciales de vendor (API Keys,
 * Client Secrets) en cabeceras y bolsas de configuración. Este aparato
 * garantiza que dicho material jamás cristalice en el estrato de logs.
 * =================================================================
 */

/// Claves cuyo valor debe ser neutralizado antes de cruzar el estrato de trazas.
/// La comparación es insensible a mayúsculas para cubrir variantes snake/camel.
const SENSITIVE_KEY_CATALOG: &[&str] = &[
    "clientsecret",
    "client_secret",
    "accesskey",
    "access_key",
    "password",
    "apikey",
    "api_key",
    "authorization",
];

/// Centinela visible que sustituye a cualquier valor sensible.
pub const REDACTED_SENTINEL: &str = "[REDACTED]";

/**
 * Determina si una clave pertenece al catálogo de material sensible.
 */
pub fn is_sensitive_key(key_identifier: &str) -> bool {
    let normalized_key = key_identifier.to_ascii_lowercase();
    SENSITIVE_KEY_CATALOG.iter().any(|sensitive| normalized_key == *sensitive)
}

/**
 * Redacta el valor asociado a una clave si ésta es sensible.
 * El valor original se retorna intacto para claves ordinarias.
 */
pub fn redact_value<'a>(key_identifier: &str, raw_value: &'a str) -> &'a str {
    if is_sensitive_key(key_identifier) {
        REDACTED_SENTINEL
    } else {
        raw_value
    }
}

/**
 * Redacta pares clave/valor de un iterador de cabeceras o extras,
 * produciendo una representación segura para el Panóptico.
 */
pub fn redact_pairs<'a, I>(pairs: I) -> Vec<(String, String)>
where
    I: IntoIterator<Item = (&'a str, &'a str)>,
{
    pairs
        .into_iter()
        .map(|(key, value)| (key.to_string(), redact_value(key, value).to_string()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    /**
     * CERTIFICACIÓN: El catálogo sensible neutraliza variantes de capitalización.
     */
    #[test]
    fn certify_sensitive_catalog_case_insensitive() {
        assert!(is_sensitive_key("Authorization"));
        assert!(is_sensitive_key("clientSecret"));
        assert!(is_sensitive_key("API_KEY"));
        assert!(!is_sensitive_key("catalogUrl"));
    }

    /**
     * CERTIFICACIÓN: El valor sensible se sustituye por el centinela.
     */
    #[test]
    fn certify_redaction_substitution() {
        assert_eq!(redact_value("apiKey", "sk-material-vivo"), REDACTED_SENTINEL);
        assert_eq!(redact_value("region", "TX"), "TX");
    }
}
