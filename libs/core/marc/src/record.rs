// [libs/core/marc/src/record.rs]
/*!
 * =================================================================
 * APARATO: MARC RECORD MODEL (V6.2 - NAVIGABLE STRATA)
 * CLASIFICACIÓN: CORE PARSING (ESTRATO L1)
 * RESPONSABILIDAD: REPRESENTACIÓN NAVEGABLE DE CAMPOS Y SUBCAMPOS
 *
 * # Topología MARC:
 * - controlfield: tag numérico (001..009) con texto plano.
 * - datafield:    tag numérico (010..999) + indicadores + subcampos.
 * - subfield:     código de una letra/dígito + texto.
 * =================================================================
 */

/// Subcampo MARC: código de un carácter y su contenido textual.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Subfield {
    /// Código del subcampo ('a'..'z', '0'..'9').
    pub code: char,
    /// Contenido textual sin depurar.
    pub value: String,
}

/// Campo de datos MARC con indicadores y subcampos ordenados.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DataField {
    /// Etiqueta numérica de tres posiciones ("852", "952", ...).
    pub tag: String,
    /// Primer indicador.
    pub indicator_1: char,
    /// Segundo indicador.
    pub indicator_2: char,
    /// Subcampos en orden de aparición.
    pub subfields: Vec<Subfield>,
}

impl DataField {
    /**
     * Primer subcampo con el código solicitado, depurado de espacios.
     * Retorna None para subcampos ausentes o vacíos tras la depuración.
     */
    #[must_use]
    pub fn first_subfield(&self, code: char) -> Option<&str> {
        self.subfields
            .iter()
            .find(|subfield| subfield.code == code)
            .map(|subfield| subfield.value.trim())
            .filter(|value| !value.is_empty())
    }
}

/// Registro MARC completo con campos de control y de datos.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct MarcRecord {
    /// Campos de control (tag, contenido).
    pub control_fields: Vec<(String, String)>,
    /// Campos de datos en orden de aparición.
    pub data_fields: Vec<DataField>,
}

impl MarcRecord {
    /// Indica si el registro carece de todo campo (cascarón vacío).
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.control_fields.is_empty() && self.data_fields.is_empty()
    }

    /**
     * Itera los campos de datos que portan la etiqueta solicitada.
     * Un registro de holdings real repite la etiqueta una vez por copia física.
     */
    pub fn data_fields_with_tag<'record>(
        &'record self,
        tag: &'record str,
    ) -> impl Iterator<Item = &'record DataField> {
        self.data_fields.iter().filter(move |field| field.tag == tag)
    }

    /**
     * Primer campo de control con la etiqueta solicitada.
     */
    #[must_use]
    pub fn control_field(&self, tag: &str) -> Option<&str> {
        self.control_fields
            .iter()
            .find(|(candidate_tag, _)| candidate_tag == tag)
            .map(|(_, content)| content.as_str())
    }
}
