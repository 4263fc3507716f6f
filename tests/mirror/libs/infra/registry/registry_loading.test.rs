// [tests/mirror/libs/infra/registry/registry_loading.test.rs]
/**
 * =================================================================
 * APARATO: REGISTRY LOADING MIRROR TEST (V3.0)
 * CLASIFICACIÓN: TRINITY EVIDENCE (ESTRATO L3-REGISTRY)
 * OBJETIVO: Certificar la interpolación de entorno, el aislamiento
 *          por documento y el muro de invariantes en carga real
 *          desde disco.
 * =================================================================
 */

use panoptes_domain_models::LibrarySystemId;
use panoptes_infra_registry::load_registry;
use std::io::Write;
use std::path::Path;

fn write_document(directory: &Path, file_name: &str, material: &str) {
    let mut file = std::fs::File::create(directory.join(file_name)).expect("document creation");
    file.write_all(material.as_bytes()).expect("document write");
}

const ASPEN_DOCUMENT: &str = r#"
id: mountain-vista
name: Mountain Vista Library District
vendor: aspen
region: CO
catalogUrl: https://catalog.mountainvista.example.org
branches:
  - id: vista-main
    name: Vista Main
    code: VM
adapters:
  - protocol: aspen
    baseUrl: ${PANOPTES_MIRROR_ASPEN_BASE}
    timeoutMs: 6000
    maxConcurrency: 3
"#;

const KOHA_DOCUMENT: &str = r#"
id: riverbend
name: Riverbend Public Library
vendor: koha
region: TX
catalogUrl: https://koha.riverbend.example.org
enabled: false
branches:
  - id: main
    name: Main Library
    code: MAIN
adapters:
  - protocol: koha
    baseUrl: https://koha.riverbend.example.org/cgi-bin/koha/sru
"#;

/**
 * CERTIFICACIÓN: Interpolación '${ENV}', defaults del esquema y
 * aislamiento del documento con referencia irresoluble.
 */
#[test]
fn certify_environment_interpolation_and_isolation() {
    std::env::set_var(
        "PANOPTES_MIRROR_ASPEN_BASE",
        "https://aspen.mountainvista.example.org",
    );

    let vault = tempfile::tempdir().expect("temp registry vault");
    write_document(vault.path(), "01-mountain.yml", ASPEN_DOCUMENT);
    write_document(vault.path(), "02-riverbend.yml", KOHA_DOCUMENT);
    // Documento con placeholder sin valor: debe aislarse, no hundir la carga.
    write_document(
        vault.path(),
        "03-ghost.yml",
        &ASPEN_DOCUMENT
            .replace("mountain-vista", "ghost-system")
            .replace("PANOPTES_MIRROR_ASPEN_BASE", "PANOPTES_MIRROR_VOID_REFERENCE"),
    );

    let registry = load_registry(vault.path()).expect("CRITICAL_FAULT: registry load collapsed");

    assert_eq!(registry.len(), 2, "ghost document must be isolated");

    let mountain = registry
        .system(&LibrarySystemId::new("mountain-vista"))
        .expect("mountain-vista must crystallize");
    assert_eq!(
        mountain.adapters[0].base_url, "https://aspen.mountainvista.example.org",
        "ENV placeholder must resolve before schema parse"
    );
    assert_eq!(mountain.adapters[0].timeout_ms, 6_000);
    assert_eq!(mountain.adapters[0].max_concurrency, 3);

    // 'enabled: false' excluye del fan-out sin borrar el documento.
    assert_eq!(registry.enabled_systems().count(), 1);

    println!("✅ REGISTRY: Interpolation and per-document isolation certified.");
}

/**
 * CERTIFICACIÓN: El adaptador sin timeout declara el default de 10s.
 */
#[test]
fn certify_schema_defaults() {
    let vault = tempfile::tempdir().expect("temp registry vault");
    write_document(vault.path(), "01-riverbend.yml", KOHA_DOCUMENT);

    let registry = load_registry(vault.path()).expect("CRITICAL_FAULT: registry load collapsed");
    let riverbend = registry
        .system(&LibrarySystemId::new("riverbend"))
        .expect("riverbend must crystallize");

    assert_eq!(riverbend.adapters[0].timeout_ms, 10_000, "default timeout drifted");
    assert_eq!(riverbend.adapters[0].max_concurrency, 2, "default concurrency drifted");
    assert!(!riverbend.enabled);

    println!("✅ REGISTRY: Schema defaults certified.");
}
