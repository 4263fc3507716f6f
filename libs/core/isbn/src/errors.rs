// [libs/core/isbn/src/errors.rs]
//! =================================================================
//! APARATO: ISBN VALIDATION FAULTS (V5.0 - USER SAFE)
//! RESPONSABILIDAD: CATALOGACIÓN DE FALLOS DE IDENTIDAD BIBLIOGRÁFICA
//!
//! Los mensajes son aptos para el usuario final: nombran la regla que
//! falló (longitud, juego de caracteres, dígito de control) sin exponer
//! detalle interno alguno. Son los únicos mensajes del sistema que la
//! capa HTTP propaga textualmente.
//! =================================================================

use thiserror::Error;

/// Catálogo de fallos de validación de ISBN.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum IsbnError {
    /// La entrada depurada no mide 10 ni 13 caracteres.
    #[error("invalid length: expected 10 or 13 significant characters, found {0}")]
    InvalidLength(usize),

    /// La entrada contiene caracteres fuera del alfabeto ISBN.
    #[error("invalid character set: '{0}' is not a digit (or a terminal 'X' in the 10-digit form)")]
    InvalidCharacter(char),

    /// La suma ponderada módulo 10 de la forma de 13 dígitos no cierra.
    #[error("invalid check digit for the 13-digit form")]
    CheckDigit13,

    /// La suma ponderada módulo 11 de la forma de 10 dígitos no cierra.
    #[error("invalid check digit for the 10-digit form")]
    CheckDigit10,

    /// Una forma de 13 dígitos fuera del prefijo 978 no admite forma de 10.
    #[error("only 978-prefixed ISBN-13 values have an ISBN-10 equivalent")]
    NotConvertible,
}
