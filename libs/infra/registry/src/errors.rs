// INICIO DEL ARCHIVO [libs/infra/registry/src/errors.rs]
//! =================================================================
//! APARATO: CONFIGURATION FAULT CATALOG (V5.0)
//! RESPONSABILIDAD: CATALOGACIÓN DE FALLOS FATALES DE IGNICIÓN
//! =================================================================

use thiserror::Error;

/// Catálogo de fallos de carga del registro declarativo.
/// Todos son fatales: el servidor no debe arrancar con registro corrupto.
#[derive(Error, Debug)]
pub enum ConfigurationError {
    /// El directorio del registro no existe o no es legible.
    #[error("REGISTRY_VAULT_UNREACHABLE: cannot read registry directory '{0}': {1}")]
    DirectoryUnreachable(String, std::io::Error),

    /// Un documento declara un placeholder '${{VAR}}' sin valor en el entorno.
    #[error("ENV_REFERENCE_VOID: placeholder '${{{0}}}' in '{1}' has no value in the ambient environment")]
    UnresolvedEnvReference(String, String),

    /// Un documento no cumple el esquema declarativo.
    #[error("DOCUMENT_SCHEMA_FAULT: '{0}': {1}")]
    DocumentSchema(String, String),

    /// Dos documentos declaran el mismo identificador de sistema.
    #[error("IDENTITY_COLLISION: system id '{0}' declared by more than one document")]
    DuplicateSystemId(String),

    /// Un sistema viola un invariante estructural (sucursales, adaptadores, URLs).
    #[error("SYSTEM_INVARIANT_BREACH: system '{0}': {1}")]
    SystemInvariant(String, String),

    /// Ningún documento sobrevivió a la carga.
    #[error("REGISTRY_VOID: no valid system documents found in '{0}'")]
    EmptyRegistry(String),
}
// FIN DEL ARCHIVO [libs/infra/registry/src/errors.rs]
