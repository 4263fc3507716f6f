// [libs/core/isbn/src/codes.rs]
/*!
 * =================================================================
 * APARATO: BRANDED IDENTITY WRAPPERS (V8.1 - OPAQUE STRATA)
 * CLASIFICACIÓN: CORE DOMAIN (ESTRATO L1)
 * RESPONSABILIDAD: PREVENCIÓN DE INTERCAMBIO IMPLÍCITO ENTRE FORMAS ISBN
 *
 * VISION HIPER-HOLÍSTICA:
 * El compilador actúa como guardián: una función que exige 'Isbn13'
 * jamás aceptará un 'Isbn10' crudo ni un '&str' arbitrario. La única
 * puerta de construcción pública es el motor 'parse'.
 * =================================================================
 */

use serde::{Deserialize, Serialize};
use std::fmt;

/// Identificador opaco de 13 dígitos normalizados (forma canónica del sistema).
///
/// Invariante: exactamente 13 dígitos ASCII cuyo último dígito satisface
/// la suma ponderada módulo 10.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Isbn13(String);

/// Identificador opaco de 10 caracteres (9 dígitos + dígito de control mod-11,
/// donde el control puede ser 'X').
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Isbn10(String);

impl Isbn13 {
    /// Construcción interna reservada al motor de parsing.
    /// La materia prima DEBE haber superado la ley de control mod-10.
    pub(crate) fn from_validated(digits: String) -> Self {
        debug_assert_eq!(digits.len(), 13, "IDENTITY_BREACH: Isbn13 requires 13 digits");
        Self(digits)
    }

    /// Vista de solo lectura de los 13 dígitos normalizados.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Isbn10 {
    /// Construcción interna reservada al motor de parsing.
    pub(crate) fn from_validated(characters: String) -> Self {
        debug_assert_eq!(characters.len(), 10, "IDENTITY_BREACH: Isbn10 requires 10 characters");
        Self(characters)
    }

    /// Vista de solo lectura de los 10 caracteres normalizados.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Isbn13 {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(&self.0)
    }
}

impl fmt::Display for Isbn10 {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(&self.0)
    }
}
