// [libs/core/marc/src/marcxml.rs]
/*!
 * =================================================================
 * APARATO: MARCXML STREAM READER (V9.0 - XXE HARDENED)
 * CLASIFICACIÓN: CORE PARSING (ESTRATO L1)
 * RESPONSABILIDAD: CRISTALIZACIÓN DE REGISTROS MARC DESDE FLUJO XML
 *
 * VISION HIPER-HOLÍSTICA:
 * 1. PREFIX NEUTRALITY: La comparación por nombre local acepta tanto
 *    elementos sin prefijo como 'zs:'/'marc:'-prefijados, cubriendo
 *    todas las variantes de servidores SRU observadas en producción.
 * 2. NESTED RECORD DISCIPLINE: El sobre SRU anida '<record>' dentro
 *    de '<recordData>' dentro de otro '<record>'. La pila de registros
 *    descarta cascarones vacíos y emite sólo registros con campos.
 * 3. XXE HARDENING: El lector jamás expande entidades externas; el
 *    contenido DOCTYPE es ignorado como evento inerte.
 * =================================================================
 */

use crate::errors::ExtractionError;
use crate::record::{DataField, MarcRecord, Subfield};
use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;

/**
 * Analiza un flujo MARCXML (o un sobre SRU que lo contenga) y emite
 * todos los registros MARC con al menos un campo.
 *
 * # Errors:
 * `ExtractionError::XmlFault` ante flujo corrupto o truncado;
 * `ExtractionError::MalformedAttribute` ante atributos tag/code ilegibles.
 */
pub fn parse_marc_collection(xml_material: &str) -> Result<Vec<MarcRecord>, ExtractionError> {
    let mut stream_reader = Reader::from_str(xml_material);

    let mut harvested_records: Vec<MarcRecord> = Vec::new();
    // Pila de candidatos: el sobre SRU produce cascarones '<record>' externos
    // que se descartan al cerrar sin campos propios.
    let mut record_stack: Vec<MarcRecord> = Vec::new();
    let mut open_data_field: Option<DataField> = None;
    let mut open_subfield_code: Option<char> = None;
    let mut open_control_tag: Option<String> = None;
    let mut text_accumulator = String::new();

    loop {
        match stream_reader.read_event()? {
            Event::Start(element) => match element.local_name().as_ref() {
                b"record" => record_stack.push(MarcRecord::default()),
                b"controlfield" => {
                    open_control_tag = Some(required_attribute(&element, "tag")?);
                    text_accumulator.clear();
                }
                b"datafield" => {
                    open_data_field = Some(DataField {
                        tag: required_attribute(&element, "tag")?,
                        indicator_1: indicator_attribute(&element, "ind1"),
                        indicator_2: indicator_attribute(&element, "ind2"),
                        subfields: Vec::new(),
                    });
                }
                b"subfield" => {
                    open_subfield_code = required_attribute(&element, "code")?.chars().next();
                    text_accumulator.clear();
                }
                _ => {}
            },
            Event::Text(fragment) => {
                text_accumulator.push_str(&fragment.unescape()?);
            }
            Event::End(element) => match element.local_name().as_ref() {
                b"record" => {
                    if let Some(candidate) = record_stack.pop() {
                        if !candidate.is_empty() {
                            harvested_records.push(candidate);
                        }
                    }
                }
                b"controlfield" => {
                    if let (Some(tag), Some(record)) = (open_control_tag.take(), record_stack.last_mut()) {
                        record.control_fields.push((tag, text_accumulator.trim().to_string()));
                    }
                }
                b"subfield" => {
                    if let (Some(code), Some(field)) = (open_subfield_code.take(), open_data_field.as_mut()) {
                        field.subfields.push(Subfield {
                            code,
                            value: text_accumulator.trim().to_string(),
                        });
                    }
                }
                b"datafield" => {
                    if let (Some(field), Some(record)) = (open_data_field.take(), record_stack.last_mut()) {
                        record.data_fields.push(field);
                    }
                }
                _ => {}
            },
            Event::Eof => break,
            // DOCTYPE, comentarios, PI y elementos vacíos son materia inerte.
            _ => {}
        }
    }

    Ok(harvested_records)
}

// --- ESTRATO INTERNO DE ATRIBUTOS ---

fn required_attribute(element: &BytesStart<'_>, name: &'static str) -> Result<String, ExtractionError> {
    element
        .try_get_attribute(name)
        .map_err(quick_xml::Error::from)?
        .ok_or(ExtractionError::MalformedAttribute(name))?
        .unescape_value()
        .map(|value| value.into_owned())
        .map_err(ExtractionError::XmlFault)
}

fn indicator_attribute(element: &BytesStart<'_>, name: &str) -> char {
    element
        .try_get_attribute(name)
        .ok()
        .flatten()
        .and_then(|attribute| attribute.unescape_value().ok())
        .and_then(|value| value.chars().next())
        .unwrap_or(' ')
}
