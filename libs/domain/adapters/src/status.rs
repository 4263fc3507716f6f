// [libs/domain/adapters/src/status.rs]
/*!
 * =================================================================
 * APARATO: STATUS NORMALIZATION MATRIX (V10.0 - UNIFORM VOCABULARY)
 * CLASIFICACIÓN: DOMAIN ADAPTERS (ESTRATO L2)
 * RESPONSABILIDAD: MAPEO DE ESTADOS CRUDOS AL VOCABULARIO CANÓNICO
 *
 * VISION HIPER-HOLÍSTICA:
 * Cada vendor describe la circulación con su propio dialecto ("On
 * Shelf", "DUE 12-15-25", "In Transit to West"). Esta matriz aplica
 * reglas de substring insensibles a mayúsculas, uniformes para los
 * once adaptadores. Las formas negadas ("not available") se evalúan
 * antes que sus positivas: es el único desempate necesario.
 * =================================================================
 */

use panoptes_domain_models::{ItemStatus, MaterialType};

/**
 * Normaliza un estado crudo del vendor al vocabulario canónico.
 * Primera regla que coincide gana; sin coincidencia -> Unknown.
 */
#[must_use]
pub fn normalize_status(raw_status: &str) -> ItemStatus {
    let normalized = raw_status.trim().to_lowercase();
    if normalized.is_empty() {
        return ItemStatus::Unknown;
    }

    // Desempate de formas negadas: "not available" porta el substring
    // "available" y debe resolverse como prestado, no disponible.
    if normalized.starts_with("due")
        || normalized.contains("checked out")
        || normalized.contains("not available")
    {
        return ItemStatus::CheckedOut;
    }

    if normalized.contains("available")
        || normalized.contains("on shelf")
        || normalized.contains("in library")
        || normalized.contains("check shelf")
        || normalized == "in"
    {
        return ItemStatus::Available;
    }

    if normalized.contains("transit") {
        return ItemStatus::InTransit;
    }
    if normalized.contains("hold") {
        return ItemStatus::OnHold;
    }
    if normalized.contains("order") {
        return ItemStatus::OnOrder;
    }
    if normalized.contains("processing") || normalized.contains("cataloging") {
        return ItemStatus::InProcessing;
    }
    if normalized.contains("missing") || normalized.contains("lost") || normalized.contains("withdrawn") {
        return ItemStatus::Missing;
    }

    ItemStatus::Unknown
}

/**
 * Proyecta un código de tipo de ítem Koha al tipo de material canónico.
 */
#[must_use]
pub fn material_type_from_itype(itype_code: &str) -> MaterialType {
    let normalized = itype_code.trim().to_lowercase();
    match normalized.as_str() {
        "bk" | "book" => MaterialType::Book,
        "lp" => MaterialType::LargePrint,
        "cd" => MaterialType::Audiobook,
        "dvd" => MaterialType::Dvd,
        _ if normalized.contains("ebook") => MaterialType::Ebook,
        _ => MaterialType::Other,
    }
}

/**
 * Proyecta una etiqueta de formato REST ("Large Print", "eBook") al
 * tipo de material canónico. Las etiquetas compuestas resuelven por
 * el rasgo más específico ('large print book' -> LargePrint).
 */
#[must_use]
pub fn material_type_from_label(format_label: &str) -> MaterialType {
    let normalized = format_label.trim().to_lowercase();
    if normalized.is_empty() {
        return MaterialType::Other;
    }

    if normalized.contains("large") {
        MaterialType::LargePrint
    } else if normalized.contains("ebook") || normalized.contains("e-book") {
        MaterialType::Ebook
    } else if normalized.contains("audio") || normalized.contains("cd") {
        MaterialType::Audiobook
    } else if normalized.contains("dvd") || normalized.contains("video") {
        MaterialType::Dvd
    } else if normalized.contains("book") {
        MaterialType::Book
    } else {
        MaterialType::Other
    }
}
