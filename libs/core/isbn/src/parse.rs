// [libs/core/isbn/src/parse.rs]
/*!
 * =================================================================
 * APARATO: ISBN PARSE & CONVERSION ENGINE (V15.0 - CANONICAL FORM)
 * CLASIFICACIÓN: CORE DOMAIN (ESTRATO L1)
 * RESPONSABILIDAD: DEPURACIÓN, VALIDACIÓN Y CONVERSIÓN 10 <-> 13
 *
 * VISION HIPER-HOLÍSTICA:
 * 1. CANONICAL PIPELINE: Materia prima -> depuración de separadores ->
 *    ley de control -> forma canónica de 13 dígitos.
 * 2. DUAL YIELD: Una entrada de 10 dígitos cristaliza ambas formas;
 *    una de 13 con prefijo 978 recupera su equivalente de 10.
 * 3. USER SAFE FAULTS: Cada rechazo nombra la regla violada.
 * =================================================================
 */

use crate::checksum::{check_digit_10, check_digit_13, validates_mod10, validates_mod11, ROMAN_TEN};
use crate::codes::{Isbn10, Isbn13};
use crate::errors::IsbnError;

/// Resultado cristalizado de un análisis exitoso.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedIsbn {
    /// Forma canónica de 13 dígitos que viaja por todo el sistema.
    pub isbn13: Isbn13,
    /// Forma de 10 equivalente, presente sólo bajo el prefijo 978.
    pub isbn10: Option<Isbn10>,
    /// Presentación con guiones para superficies visuales (EAN-grupo-cuerpo-control).
    pub hyphenated: String,
}

/**
 * Analiza materia prima arbitraria y la cristaliza en la forma canónica.
 *
 * # Reglas:
 * 1. Se depura todo carácter fuera de '[0-9Xx]' (guiones, espacios, ruido).
 * 2. Longitud 10: ley mod-11 ('X' = 10 sólo en posición final) y
 *    conversión a 13 con prefijo 978 + recomputación mod-10.
 * 3. Longitud 13: ley mod-10 directa; 'X' no es admisible.
 *
 * # Errors:
 * `IsbnError` nombrando la regla violada (longitud, alfabeto, control).
 */
pub fn parse(raw_material: &str) -> Result<ParsedIsbn, IsbnError> {
    // 1. DEPURACIÓN DE SEPARADORES
    let significant: Vec<char> = raw_material
        .chars()
        .filter(|candidate| candidate.is_ascii_digit() || *candidate == 'X' || *candidate == 'x')
        .collect();

    match significant.len() {
        10 => parse_ten_form(&significant),
        13 => parse_thirteen_form(&significant),
        other_length => Err(IsbnError::InvalidLength(other_length)),
    }
}

/**
 * Convierte una forma de 10 validada a su forma canónica de 13.
 * Prefija 978 al cuerpo de 9 dígitos y recalcula el control mod-10.
 */
#[must_use]
pub fn to_isbn13(ten_form: &Isbn10) -> Isbn13 {
    let body_digits: Vec<u32> = std::iter::once(9)
        .chain(std::iter::once(7))
        .chain(std::iter::once(8))
        .chain(ten_form.as_str().chars().take(9).map(|d| d.to_digit(10).unwrap_or(0)))
        .collect();

    let control = check_digit_13(&body_digits);
    let crystallized: String = body_digits
        .iter()
        .map(|digit| char::from_digit(*digit, 10).unwrap_or('0'))
        .chain(std::iter::once(char::from_digit(control, 10).unwrap_or('0')))
        .collect();

    Isbn13::from_validated(crystallized)
}

/**
 * Recupera la forma de 10 desde una forma canónica de 13.
 *
 * # Errors:
 * `IsbnError::NotConvertible` cuando el prefijo EAN no es 978.
 */
pub fn to_isbn10(thirteen_form: &Isbn13) -> Result<Isbn10, IsbnError> {
    let canonical = thirteen_form.as_str();
    if !canonical.starts_with("978") {
        return Err(IsbnError::NotConvertible);
    }

    let body_digits: Vec<u32> = canonical
        .chars()
        .skip(3)
        .take(9)
        .map(|d| d.to_digit(10).unwrap_or(0))
        .collect();

    let control = check_digit_10(&body_digits);
    let control_character = if control == ROMAN_TEN {
        'X'
    } else {
        char::from_digit(control, 10).unwrap_or('0')
    };

    let crystallized: String = body_digits
        .iter()
        .map(|digit| char::from_digit(*digit, 10).unwrap_or('0'))
        .chain(std::iter::once(control_character))
        .collect();

    Ok(Isbn10::from_validated(crystallized))
}

// --- ESTRATO INTERNO DE ANÁLISIS ---

fn parse_ten_form(significant: &[char]) -> Result<ParsedIsbn, IsbnError> {
    let mut numeric_values: Vec<u32> = Vec::with_capacity(10);

    for (position, candidate) in significant.iter().enumerate() {
        match candidate {
            digit if digit.is_ascii_digit() => {
                numeric_values.push(digit.to_digit(10).unwrap_or(0));
            }
            // 'X' sólo es legal como dígito de control terminal.
            'X' | 'x' if position == 9 => numeric_values.push(ROMAN_TEN),
            other => return Err(IsbnError::InvalidCharacter(*other)),
        }
    }

    if !validates_mod11(&numeric_values) {
        return Err(IsbnError::CheckDigit10);
    }

    let ten_crystallized: String = significant
        .iter()
        .map(|candidate| candidate.to_ascii_uppercase())
        .collect();
    let ten_form = Isbn10::from_validated(ten_crystallized);
    let thirteen_form = to_isbn13(&ten_form);
    let hyphenated = hyphenate(&thirteen_form);

    Ok(ParsedIsbn {
        isbn13: thirteen_form,
        isbn10: Some(ten_form),
        hyphenated,
    })
}

fn parse_thirteen_form(significant: &[char]) -> Result<ParsedIsbn, IsbnError> {
    let mut numeric_values: Vec<u32> = Vec::with_capacity(13);

    for candidate in significant {
        match candidate {
            digit if digit.is_ascii_digit() => {
                numeric_values.push(digit.to_digit(10).unwrap_or(0));
            }
            // 'X' en la forma de 13 es un control ilegal, no un carácter extraño:
            // la regla violada es la ley de control mod-10.
            'X' | 'x' => return Err(IsbnError::CheckDigit13),
            other => return Err(IsbnError::InvalidCharacter(*other)),
        }
    }

    if !validates_mod10(&numeric_values) {
        return Err(IsbnError::CheckDigit13);
    }

    let crystallized: String = significant.iter().collect();
    let thirteen_form = Isbn13::from_validated(crystallized);
    let ten_form = to_isbn10(&thirteen_form).ok();
    let hyphenated = hyphenate(&thirteen_form);

    Ok(ParsedIsbn {
        isbn13: thirteen_form,
        isbn10: ten_form,
        hyphenated,
    })
}

/**
 * Presentación con guiones orientada a superficies visuales.
 * Segmentación fija EAN(3)-grupo(1)-cuerpo(8)-control(1); la segmentación
 * editorial real exige tablas de rango que el dominio no requiere.
 */
fn hyphenate(thirteen_form: &Isbn13) -> String {
    let canonical = thirteen_form.as_str();
    format!(
        "{}-{}-{}-{}",
        &canonical[..3],
        &canonical[3..4],
        &canonical[4..12],
        &canonical[12..]
    )
}
