// [libs/core/isbn/src/lib.rs]
#![deny(missing_docs)]

/*!
 * =================================================================
 * APARATO: ISBN IDENTITY MASTER HUB (V12.0 - SOVEREIGN SYNC)
 * CLASIFICACIÓN: CORE DOMAIN (ESTRATO L1)
 * RESPONSABILIDAD: ORQUESTACIÓN DE PRIMITIVAS DE IDENTIDAD BIBLIOGRÁFICA
 *
 * VISION HIPER-HOLÍSTICA 2026:
 * 1. SINGLE SOURCE OF IDENTITY: Todo el sistema federado transporta el
 *    ISBN como cadena normalizada de 13 dígitos. Este aparato es el
 *    único punto donde la materia prima del usuario se cristaliza.
 * 2. BRANDED TYPES: 'Isbn10' e 'Isbn13' son envoltorios opacos que
 *    impiden el intercambio implícito entre formas.
 * 3. HYGIENE: Cero advertencias de compilación y documentación completa.
 *
 * # Mathematical Proof (Checksum Integrity):
 * La forma de 13 dígitos satisface la suma ponderada módulo 10
 * (pesos 1,3 alternados); la forma de 10 dígitos satisface la suma
 * ponderada módulo 11 (pesos 10..1, 'X' = 10). Ambas leyes son
 * verificadas antes de cualquier conversión.
 * =================================================================
 */

/// Aritmética de dígitos de control (mod-10 y mod-11).
pub mod checksum;
/// Envoltorios opacos de identidad (Isbn10 / Isbn13).
pub mod codes;
/// Catálogo de fallos de validación de identidad.
pub mod errors;
/// Motor de análisis, normalización y conversión.
pub mod parse;

pub use checksum::{check_digit_10, check_digit_13};
pub use codes::{Isbn10, Isbn13};
pub use errors::IsbnError;
pub use parse::{parse, to_isbn10, to_isbn13, ParsedIsbn};
