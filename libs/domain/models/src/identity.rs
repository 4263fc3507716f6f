// [libs/domain/models/src/identity.rs]
/*!
 * =================================================================
 * APARATO: DOMAIN IDENTITY WRAPPERS (V7.0 - OPAQUE STRATA)
 * CLASIFICACIÓN: DOMAIN MODELS (ESTRATO L2)
 * RESPONSABILIDAD: IDENTIFICADORES OPACOS DE SISTEMA Y SUCURSAL
 *
 * VISION HIPER-HOLÍSTICA:
 * Un identificador de sistema jamás debe viajar por un canal que espera
 * un identificador de sucursal. Los envoltorios opacos delegan esa
 * vigilancia al compilador, erradicando una clase completa de fallos.
 * =================================================================
 */

use serde::{Deserialize, Serialize};
use std::fmt;

/// Identificador opaco de un sistema bibliotecario ("harris-county", "koha-demo").
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LibrarySystemId(String);

/// Identificador opaco de una sucursal dentro de su sistema.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BranchId(String);

impl LibrarySystemId {
    /// Cristaliza un identificador desde el documento declarativo del registro.
    #[must_use]
    pub fn new(raw_identifier: impl Into<String>) -> Self {
        Self(raw_identifier.into())
    }

    /// Vista de solo lectura del identificador.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl BranchId {
    /// Cristaliza un identificador desde el documento declarativo del registro.
    ///
    /// Los adaptadores también lo emplean para sucursales no reconocidas:
    /// el texto crudo del vendor se transporta como identificador literal
    /// en lugar de colapsar la búsqueda.
    #[must_use]
    pub fn new(raw_identifier: impl Into<String>) -> Self {
        Self(raw_identifier.into())
    }

    /// Vista de solo lectura del identificador.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for LibrarySystemId {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(&self.0)
    }
}

impl fmt::Display for BranchId {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(&self.0)
    }
}
