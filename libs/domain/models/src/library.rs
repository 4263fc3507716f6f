// INICIO DEL ARCHIVO [libs/domain/models/src/library.rs]
/*!
 * =================================================================
 * APARATO: LIBRARY SYSTEM CONTRACTS (V16.0 - DECLARATIVE MASTER)
 * CLASIFICACIÓN: DOMAIN MODELS (ESTRATO L2)
 * RESPONSABILIDAD: DESCRIPCIÓN DECLARATIVA DE SISTEMAS FEDERADOS
 *
 * VISION HIPER-HOLÍSTICA 2026:
 * 1. DECLARATIVE TRUTH: Un 'LibrarySystem' es la cristalización de un
 *    documento YAML del registro; tras la carga es de solo lectura.
 * 2. CLOSED PROTOCOL SUM: 'AdapterProtocol' es una suma cerrada; el
 *    despacho por protocolo ocurre en tiempo de compilación, sin
 *    registro por reflexión.
 * 3. SECRET INDIRECTION: La configuración transporta NOMBRES de
 *    variables de entorno, jamás el material secreto en sí.
 * =================================================================
 */

use crate::identity::{BranchId, LibrarySystemId};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Valor por defecto del timeout por petición saliente.
pub const DEFAULT_ADAPTER_TIMEOUT_MS: u64 = 10_000;
/// Valor por defecto de concurrencia máxima por sistema.
pub const DEFAULT_MAX_CONCURRENCY: usize = 2;

/// Suma cerrada de protocolos de adaptador soportados.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AdapterProtocol {
    /// SRU 1.1 genérico con holdings MARC 852 (sin disponibilidad real).
    SruGeneric,
    /// SRU 1.1 con campo vendor Koha 952 (disponibilidad derivable).
    Koha,
    /// SirsiDynix Enterprise (HTML renderizado en servidor).
    Enterprise,
    /// BiblioCommons (HTML renderizado en servidor).
    BiblioCommons,
    /// Apollo/Biblionix (REST XML/JSON del vendor).
    Apollo,
    /// Book Systems Atriuum (HTML con plantilla de búsqueda).
    Atriuum,
    /// Aspen Discovery (REST JSON).
    Aspen,
    /// TLC - The Library Corporation (REST JSON).
    Tlc,
    /// Civica Spydus (HTML renderizado en servidor).
    Spydus,
    /// Innovative Sierra (REST JSON autenticado).
    SierraRest,
    /// Polaris PAPI (REST JSON autenticado).
    PolarisPapi,
}

impl AdapterProtocol {
    /// Etiqueta nominal estable del protocolo (rastro forense y DTOs).
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            Self::SruGeneric => "sru_generic",
            Self::Koha => "koha",
            Self::Enterprise => "enterprise",
            Self::BiblioCommons => "biblio_commons",
            Self::Apollo => "apollo",
            Self::Atriuum => "atriuum",
            Self::Aspen => "aspen",
            Self::Tlc => "tlc",
            Self::Spydus => "spydus",
            Self::SierraRest => "sierra_rest",
            Self::PolarisPapi => "polaris_papi",
        }
    }
}

/// Sucursal física o lógica de un sistema bibliotecario.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Branch {
    /// Identificador único dentro del sistema.
    pub id: BranchId,
    /// Nombre visible ("Main Library").
    pub name: String,
    /// Código corto del vendor ("main", "WB").
    pub code: String,
    /// Dirección postal, si el registro la declara.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    /// Ciudad, si el registro la declara.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
}

/// Configuración de un adaptador concreto (primario o fallback).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdapterConfig {
    /// Protocolo de la suma cerrada.
    pub protocol: AdapterProtocol,
    /// URL base absoluta del catálogo o API del vendor.
    pub base_url: String,
    /// Puerto explícito para adaptadores estilo Z39.50.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub port: Option<u16>,
    /// Nombre de base de datos para adaptadores estilo Z39.50.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub database_name: Option<String>,
    /// NOMBRE de la variable de entorno con la clave de API (jamás el valor).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub client_key_env_var: Option<String>,
    /// NOMBRE de la variable de entorno con el secreto (jamás el valor).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub client_secret_env_var: Option<String>,
    /// Timeout por petición saliente en milisegundos.
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,
    /// Concurrencia máxima de peticiones en vuelo hacia este sistema.
    #[serde(default = "default_max_concurrency")]
    pub max_concurrency: usize,
    /// Bolsa de opciones por protocolo (p.ej. 'searchUrlTemplate' en Atriuum).
    /// Cada adaptador proyecta sus claves reconocidas a forma tipada.
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub extra: HashMap<String, serde_json::Value>,
}

impl AdapterConfig {
    /**
     * Proyección tipada de una clave de la bolsa 'extra' como texto.
     * Retorna None para claves ausentes o no textuales.
     */
    #[must_use]
    pub fn extra_str(&self, key: &str) -> Option<&str> {
        self.extra.get(key).and_then(|value| value.as_str())
    }
}

fn default_timeout_ms() -> u64 {
    DEFAULT_ADAPTER_TIMEOUT_MS
}

fn default_max_concurrency() -> usize {
    DEFAULT_MAX_CONCURRENCY
}

/// Descripción declarativa completa de un sistema bibliotecario.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LibrarySystem {
    /// Identificador único en todo el registro.
    pub id: LibrarySystemId,
    /// Nombre humano del sistema ("Harris County Public Library").
    pub name: String,
    /// Etiqueta del vendor ILS ("koha", "sirsidynix").
    pub vendor: String,
    /// Región administrativa ("TX", "Gulf Coast").
    pub region: String,
    /// URL pública del catálogo para construir enlaces de ejemplar.
    pub catalog_url: String,
    /// Sistemas deshabilitados se omiten del fan-out sin tocar el documento.
    #[serde(default = "default_enabled")]
    pub enabled: bool,
    /// Sucursales declaradas (no vacío).
    pub branches: Vec<Branch>,
    /// Adaptadores ordenados: primario primero, fallbacks después (no vacío).
    pub adapters: Vec<AdapterConfig>,
}

fn default_enabled() -> bool {
    true
}

impl LibrarySystem {
    /**
     * Resuelve una sucursal declarada por coincidencia insensible a
     * mayúsculas sobre nombre o código del vendor.
     */
    #[must_use]
    pub fn resolve_branch(&self, raw_text: &str) -> Option<&Branch> {
        let normalized = raw_text.trim().to_lowercase();
        self.branches.iter().find(|branch| {
            branch.name.to_lowercase() == normalized || branch.code.to_lowercase() == normalized
        })
    }

    /// Adaptador primario (primera posición de la lista ordenada).
    #[must_use]
    pub fn primary_adapter(&self) -> Option<&AdapterConfig> {
        self.adapters.first()
    }

    /// Adaptadores de fallback (posiciones posteriores a la primaria).
    #[must_use]
    pub fn fallback_adapters(&self) -> &[AdapterConfig] {
        if self.adapters.len() > 1 {
            &self.adapters[1..]
        } else {
            &[]
        }
    }
}
// FIN DEL ARCHIVO [libs/domain/models/src/library.rs]
