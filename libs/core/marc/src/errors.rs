// [libs/core/marc/src/errors.rs]
//! =================================================================
//! APARATO: EXTRACTION FAULT CATALOG (V4.0)
//! RESPONSABILIDAD: CATALOGACIÓN DE FALLOS DE PARSING XML/HTML
//! =================================================================

use thiserror::Error;

/// Catálogo de fallos del estrato de extracción.
#[derive(Error, Debug)]
pub enum ExtractionError {
    /// El flujo XML está corrupto o truncado.
    #[error("XML_STREAM_CORRUPTION: {0}")]
    XmlFault(#[from] quick_xml::Error),

    /// Un atributo obligatorio (tag/code) está ausente o ilegible.
    #[error("ATTRIBUTE_VOID: malformed {0} attribute in MARC stream")]
    MalformedAttribute(&'static str),

    /// Una estrategia CSS declaró un selector sintácticamente inválido.
    #[error("SELECTOR_SYNTAX_FAULT: strategy '{0}' carries an unparsable selector")]
    SelectorSyntax(String),
}
