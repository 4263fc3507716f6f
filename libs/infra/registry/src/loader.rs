// [libs/infra/registry/src/loader.rs]
/*!
 * =================================================================
 * APARATO: DECLARATIVE REGISTRY LOADER (V13.0 - FILE ISOLATION)
 * CLASIFICACIÓN: INFRASTRUCTURE (ESTRATO L3)
 * RESPONSABILIDAD: CARGA YAML, INTERPOLACIÓN '${ENV}' Y VALIDACIÓN
 *
 * VISION HIPER-HOLÍSTICA 2026:
 * 1. FILE ISOLATION: Un documento corrupto se reporta y se omite;
 *    los documentos restantes continúan cargando. Las colisiones de
 *    identidad y un registro vacío sí son fatales.
 * 2. ENV INTERPOLATION: Los placeholders '${VAR}' se resuelven del
 *    entorno ANTES del análisis YAML; una referencia sin valor falla
 *    la carga de ese documento.
 * 3. INVARIANT WALL: ids únicos, sucursales/adaptadores no vacíos,
 *    URLs absolutas y referencias de secreto resolubles. Nada que
 *    viole el muro entra al fan-out.
 * =================================================================
 */

use crate::errors::ConfigurationError;
use panoptes_domain_models::{LibrarySystem, LibrarySystemId};
use std::collections::HashSet;
use std::path::Path;
use tracing::{info, warn};
use url::Url;

/// Registro inmutable de sistemas bibliotecarios tras la ignición.
#[derive(Debug, Clone)]
pub struct LibraryRegistry {
    systems: Vec<LibrarySystem>,
}

impl LibraryRegistry {
    /**
     * Cristaliza un registro desde sistemas ya construidos en memoria.
     * Seam de composición para consumidores embebidos; la carga desde
     * disco con validación completa vive en 'load_registry'.
     */
    #[must_use]
    pub fn from_systems(systems: Vec<LibrarySystem>) -> Self {
        Self { systems }
    }

    /// Sistemas habilitados para el fan-out.
    pub fn enabled_systems(&self) -> impl Iterator<Item = &LibrarySystem> {
        self.systems.iter().filter(|system| system.enabled)
    }

    /// Todos los sistemas declarados, habilitados o no.
    #[must_use]
    pub fn all_systems(&self) -> &[LibrarySystem] {
        &self.systems
    }

    /// Búsqueda por identificador opaco.
    #[must_use]
    pub fn system(&self, system_id: &LibrarySystemId) -> Option<&LibrarySystem> {
        self.systems.iter().find(|system| &system.id == system_id)
    }

    /// Cantidad total de sistemas declarados.
    #[must_use]
    pub fn len(&self) -> usize {
        self.systems.len()
    }

    /// true cuando el registro no declara sistema alguno.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.systems.is_empty()
    }
}

/**
 * Carga el registro completo desde un directorio de documentos YAML
 * (uno por sistema, extensiones .yml / .yaml, orden lexicográfico).
 *
 * # Errors:
 * `ConfigurationError` ante directorio ilegible, colisión de
 * identidades o registro vacío tras la carga. Los fallos por
 * documento individual se reportan y omiten.
 */
pub fn load_registry(registry_directory: &Path) -> Result<LibraryRegistry, ConfigurationError> {
    let directory_label = registry_directory.display().to_string();

    let mut document_paths: Vec<_> = std::fs::read_dir(registry_directory)
        .map_err(|fault| ConfigurationError::DirectoryUnreachable(directory_label.clone(), fault))?
        .filter_map(|entry| entry.ok().map(|entry| entry.path()))
        .filter(|path| {
            matches!(
                path.extension().and_then(|extension| extension.to_str()),
                Some("yml") | Some("yaml")
            )
        })
        .collect();
    document_paths.sort();

    let mut crystallized_systems: Vec<LibrarySystem> = Vec::new();
    let mut seen_identifiers: HashSet<LibrarySystemId> = HashSet::new();

    for document_path in &document_paths {
        let document_label = document_path.display().to_string();

        match load_single_document(document_path) {
            Ok(system) => {
                // Las colisiones de identidad son fatales: dos documentos
                // reclamando el mismo sistema corromperían la agregación.
                if !seen_identifiers.insert(system.id.clone()) {
                    return Err(ConfigurationError::DuplicateSystemId(system.id.to_string()));
                }
                crystallized_systems.push(system);
            }
            Err(document_fault) => {
                warn!(
                    "📕 [REGISTRY_DOCUMENT_SKIPPED]: '{}' rejected: {}",
                    document_label, document_fault
                );
            }
        }
    }

    if crystallized_systems.is_empty() {
        return Err(ConfigurationError::EmptyRegistry(directory_label));
    }

    let enabled_count = crystallized_systems.iter().filter(|system| system.enabled).count();
    info!(
        "📚 [REGISTRY_ONLINE]: {} systems crystallized ({} enabled, {} documents scanned).",
        crystallized_systems.len(),
        enabled_count,
        document_paths.len()
    );

    Ok(LibraryRegistry { systems: crystallized_systems })
}

// --- ESTRATO INTERNO DE CARGA ---

fn load_single_document(document_path: &Path) -> Result<LibrarySystem, ConfigurationError> {
    let document_label = document_path.display().to_string();

    let raw_material = std::fs::read_to_string(document_path)
        .map_err(|fault| ConfigurationError::DocumentSchema(document_label.clone(), fault.to_string()))?;

    // 1. INTERPOLACIÓN DE ENTORNO (previa al análisis YAML)
    let resolved_material = interpolate_environment(&raw_material, &document_label)?;

    // 2. ANÁLISIS DEL ESQUEMA DECLARATIVO
    let system: LibrarySystem = serde_yaml::from_str(&resolved_material)
        .map_err(|fault| ConfigurationError::DocumentSchema(document_label.clone(), fault.to_string()))?;

    // 3. MURO DE INVARIANTES
    validate_system(&system)?;

    Ok(system)
}

/**
 * Sustituye cada placeholder '${VAR}' por su valor de entorno.
 * Una referencia sin valor falla la carga del documento completo.
 */
fn interpolate_environment(
    raw_material: &str,
    document_label: &str,
) -> Result<String, ConfigurationError> {
    let mut resolved = String::with_capacity(raw_material.len());
    let mut cursor = raw_material;

    while let Some(opening) = cursor.find("${") {
        resolved.push_str(&cursor[..opening]);
        let remainder = &cursor[opening + 2..];

        let Some(closing) = remainder.find('}') else {
            // Llave sin cierre: materia literal, no placeholder.
            resolved.push_str(&cursor[opening..]);
            cursor = "";
            break;
        };

        let variable_name = &remainder[..closing];
        match std::env::var(variable_name) {
            Ok(ambient_value) => resolved.push_str(&ambient_value),
            Err(_) => {
                return Err(ConfigurationError::UnresolvedEnvReference(
                    variable_name.to_string(),
                    document_label.to_string(),
                ));
            }
        }

        cursor = &remainder[closing + 1..];
    }

    resolved.push_str(cursor);
    Ok(resolved)
}

fn validate_system(system: &LibrarySystem) -> Result<(), ConfigurationError> {
    let system_label = system.id.to_string();
    let invariant_fault =
        |detail: String| ConfigurationError::SystemInvariant(system_label.clone(), detail);

    if system.id.as_str().trim().is_empty() {
        return Err(invariant_fault("system id is blank".to_string()));
    }
    if system.branches.is_empty() {
        return Err(invariant_fault("branch list is empty".to_string()));
    }
    if system.adapters.is_empty() {
        return Err(invariant_fault("adapter list is empty".to_string()));
    }

    // Unicidad de sucursales dentro del sistema.
    let mut seen_branches = HashSet::new();
    for branch in &system.branches {
        if !seen_branches.insert(branch.id.clone()) {
            return Err(invariant_fault(format!("duplicate branch id '{}'", branch.id)));
        }
    }

    // URLs absolutas (catálogo y cada base de adaptador).
    if Url::parse(&system.catalog_url).is_err() {
        return Err(invariant_fault(format!("catalogUrl '{}' is not absolute", system.catalog_url)));
    }
    for adapter in &system.adapters {
        if Url::parse(&adapter.base_url).is_err() {
            return Err(invariant_fault(format!(
                "adapter '{}' baseUrl '{}' is not absolute",
                adapter.protocol.label(),
                adapter.base_url
            )));
        }

        // Referencias de secreto resolubles desde el entorno ambiente.
        for secret_reference in [&adapter.client_key_env_var, &adapter.client_secret_env_var]
            .into_iter()
            .flatten()
        {
            if std::env::var(secret_reference).is_err() {
                return Err(invariant_fault(format!(
                    "secret reference '{}' has no value in the ambient environment",
                    secret_reference
                )));
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const NOMINAL_DOCUMENT: &str = r#"
id: harris-county
name: Harris County Public Library
vendor: koha
region: TX
catalogUrl: https://catalog.hcpl.net
branches:
  - id: main
    name: Main Library
    code: MAIN
  - id: west
    name: West Branch
    code: WB
adapters:
  - protocol: koha
    baseUrl: https://catalog.hcpl.net/cgi-bin/koha/sru
    timeoutMs: 8000
"#;

    fn write_document(directory: &Path, file_name: &str, material: &str) {
        let mut file = std::fs::File::create(directory.join(file_name)).expect("document creation");
        file.write_all(material.as_bytes()).expect("document write");
    }

    /**
     * CERTIFICACIÓN: Carga nominal con aislamiento de documento corrupto.
     */
    #[test]
    fn certify_nominal_load_with_file_isolation() {
        let vault = tempfile::tempdir().expect("temp registry vault");
        write_document(vault.path(), "01-harris.yml", NOMINAL_DOCUMENT);
        write_document(vault.path(), "02-broken.yml", "id: [unterminated");

        let registry = load_registry(vault.path()).expect("CRITICAL_FAULT: nominal load rejected");
        assert_eq!(registry.len(), 1, "broken document must be skipped, not fatal");

        let system = registry
            .system(&LibrarySystemId::new("harris-county"))
            .expect("harris-county must crystallize");
        assert_eq!(system.branches.len(), 2);
        assert_eq!(system.adapters[0].timeout_ms, 8_000);
        assert!(system.enabled, "enabled defaults to true");
    }

    /**
     * CERTIFICACIÓN: Interpolación '${ENV}' y fallo del documento ante
     * referencia sin valor.
     */
    #[test]
    fn certify_environment_interpolation() {
        std::env::set_var("PANOPTES_TEST_BASE", "https://aspen.example.org");

        let resolved = interpolate_environment(
            "baseUrl: ${PANOPTES_TEST_BASE}/api",
            "inline-document",
        )
        .expect("resolvable placeholder");
        assert_eq!(resolved, "baseUrl: https://aspen.example.org/api");

        let fault = interpolate_environment(
            "baseUrl: ${PANOPTES_TEST_MISSING_VOID}/api",
            "inline-document",
        )
        .expect_err("unresolved placeholder must fail the document");
        assert!(fault.to_string().contains("PANOPTES_TEST_MISSING_VOID"));
    }

    /**
     * CERTIFICACIÓN: El muro de invariantes rechaza URLs relativas.
     */
    #[test]
    fn certify_invariant_wall_relative_url() {
        let vault = tempfile::tempdir().expect("temp registry vault");
        write_document(
            vault.path(),
            "01-bad-url.yml",
            &NOMINAL_DOCUMENT.replace("https://catalog.hcpl.net/cgi-bin/koha/sru", "cgi-bin/koha/sru"),
        );

        let outcome = load_registry(vault.path());
        assert!(
            matches!(outcome, Err(ConfigurationError::EmptyRegistry(_))),
            "sole invalid document must leave the registry void"
        );
    }

    /**
     * CERTIFICACIÓN: La colisión de identidades es fatal.
     */
    #[test]
    fn certify_identity_collision_fatal() {
        let vault = tempfile::tempdir().expect("temp registry vault");
        write_document(vault.path(), "01-harris.yml", NOMINAL_DOCUMENT);
        write_document(vault.path(), "02-harris-clone.yml", NOMINAL_DOCUMENT);

        let outcome = load_registry(vault.path());
        assert!(matches!(outcome, Err(ConfigurationError::DuplicateSystemId(_))));
    }
}
