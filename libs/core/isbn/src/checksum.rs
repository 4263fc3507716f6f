// [libs/core/isbn/src/checksum.rs]
/*!
 * =================================================================
 * APARATO: CHECKSUM ARITHMETIC ENGINE (V7.2 - BIT PERFECT)
 * CLASIFICACIÓN: CORE DOMAIN (ESTRATO L1)
 * RESPONSABILIDAD: LEYES DE CONTROL MOD-10 Y MOD-11
 *
 * # Mathematical Proof (Weighted Sums):
 * ISBN-13: sea d_1..d_12 el cuerpo; el control es
 *   c = (10 - Σ d_i · w_i mod 10) mod 10, con w_i ∈ {1,3} alternado.
 * ISBN-10: sea d_1..d_9 el cuerpo; el control es
 *   c = (11 - Σ d_i · (11 - i) mod 11) mod 11, donde c = 10 se
 *   representa con el carácter 'X'.
 * =================================================================
 */

/// Valor simbólico del dígito de control 'X' en la forma de 10.
pub const ROMAN_TEN: u32 = 10;

/**
 * Calcula el dígito de control mod-10 para los primeros 12 dígitos
 * de una forma de 13.
 *
 * # Panics:
 * Nunca: la entrada se limita a los primeros 12 elementos del slice.
 */
#[must_use]
pub fn check_digit_13(first_twelve: &[u32]) -> u32 {
    let weighted_sum: u32 = first_twelve
        .iter()
        .take(12)
        .enumerate()
        .map(|(position, digit)| if position % 2 == 0 { *digit } else { digit * 3 })
        .sum();

    (10 - (weighted_sum % 10)) % 10
}

/**
 * Calcula el valor del dígito de control mod-11 para los primeros 9
 * dígitos de una forma de 10. Un retorno de 10 corresponde a 'X'.
 */
#[must_use]
pub fn check_digit_10(first_nine: &[u32]) -> u32 {
    let weighted_sum: u32 = first_nine
        .iter()
        .take(9)
        .enumerate()
        .map(|(position, digit)| digit * (10 - position as u32))
        .sum();

    (11 - (weighted_sum % 11)) % 11
}

/**
 * Verifica la ley de control completa de una forma de 13 dígitos.
 */
#[must_use]
pub fn validates_mod10(all_thirteen: &[u32]) -> bool {
    all_thirteen.len() == 13 && check_digit_13(&all_thirteen[..12]) == all_thirteen[12]
}

/**
 * Verifica la ley de control completa de una forma de 10 posiciones,
 * donde la última posición puede valer 10 ('X').
 */
#[must_use]
pub fn validates_mod11(all_ten: &[u32]) -> bool {
    all_ten.len() == 10 && check_digit_10(&all_ten[..9]) == all_ten[9]
}
