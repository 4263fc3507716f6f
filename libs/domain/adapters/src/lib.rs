// [libs/domain/adapters/src/lib.rs]
/*!
 * =================================================================
 * APARATO: FEDERATED ADAPTER HUB (V18.0 - CLOSED DISPATCH)
 * CLASIFICACIÓN: DOMAIN ADAPTERS (ESTRATO L2/L3)
 * RESPONSABILIDAD: DEFINICIÓN SUPREMA DEL ÁRBOL DE ADAPTADORES
 *
 * VISION HIPER-HOLÍSTICA 2026:
 * 1. CLOSED PROTOCOL SUM: El despacho por protocolo es un 'match'
 *    exhaustivo en la ignición; no existe registro por reflexión.
 * 2. FAULT TAXONOMY: Todo fallo saliente se categoriza (connection,
 *    timeout, auth, rate_limit, parse) antes de cruzar al coordinador.
 * 3. WIRE FAMILIES: SRU/MARCXML (generic, koha), HTML por estrategias
 *    CSS (enterprise, biblio_commons, atriuum, spydus) y REST JSON
 *    (aspen, tlc, apollo, sierra_rest, polaris_papi).
 * =================================================================
 */

// --- ESTRATO DE CONTRATO Y ENVOLTURA ---
/// Contrato común de búsqueda y chequeo de salud.
pub mod contract;
/// Sobre de ejecución: timing, timeout por petición y reintentos.
pub mod envelope;
/// Catálogo de fallos categorizados de adaptador.
pub mod errors;

// --- ESTRATO DE UTILIDADES COMPARTIDAS ---
/// Emisión compartida de ejemplares desde filas HTML cosechadas.
pub mod emit;
/// Túnel HTTP compartido y clasificación de fallos de red.
pub mod http;
/// Normalización uniforme de estados crudos y tipos de material.
pub mod status;

// --- ESTRATO DE ADAPTADORES CONCRETOS ---
/// Apollo / Biblionix (REST JSON).
pub mod apollo;
/// Aspen Discovery (REST JSON).
pub mod aspen;
/// Book Systems Atriuum (HTML con plantilla de búsqueda).
pub mod atriuum;
/// BiblioCommons (HTML renderizado en servidor).
pub mod bibliocommons;
/// SirsiDynix Enterprise (HTML renderizado en servidor).
pub mod enterprise;
/// Koha vía SRU con campo vendor 952.
pub mod koha;
/// Polaris PAPI (REST JSON autenticado).
pub mod polaris;
/// Innovative Sierra (REST JSON con token OAuth).
pub mod sierra;
/// Civica Spydus (HTML renderizado en servidor).
pub mod spydus;
/// SRU 1.1 genérico con holdings MARC 852.
pub mod sru_generic;
/// The Library Corporation (TLC) LS2 PAC (REST JSON).
pub mod tlc;

// --- ESTRATO DE DESPACHO ---
/// Registro de adaptadores: sistema -> lista ordenada (primario + fallbacks).
pub mod registry;

pub use contract::{AdapterHealthReport, CatalogAdapter, SearchOutcome};
pub use envelope::run_guarded_search;
pub use errors::AdapterError;
pub use registry::AdapterRegistry;
pub use status::{normalize_status, material_type_from_itype};
