// [tests/mirror/libs/domain/search/coordinator_fanout.test.rs]
/**
 * =================================================================
 * APARATO: COORDINATOR FAN-OUT MIRROR TEST (V4.0)
 * CLASIFICACIÓN: TRINITY EVIDENCE (ESTRATO L2-SEARCH)
 * OBJETIVO: Certificar el fan-out con éxito parcial de sistemas,
 *          la recuperación de fallos categorizados y la honestidad
 *          del sello parcial bajo deadline global.
 * =================================================================
 */

use async_trait::async_trait;
use panoptes_core_isbn::{parse, Isbn13};
use panoptes_domain_adapters::{AdapterError, AdapterRegistry, CatalogAdapter};
use panoptes_domain_models::{
    AdapterConfig, AdapterErrorKind, AdapterProtocol, BookHolding, Branch, BranchId,
    HoldingSource, ItemStatus, LibrarySystem, LibrarySystemId, MaterialType,
};
use panoptes_domain_search::{SearchConfig, SearchCoordinator};
use panoptes_infra_registry::LibraryRegistry;
use panoptes_infra_resilience::HealthTracker;
use std::collections::HashMap;
use std::sync::Arc;
use uuid::Uuid;

fn probe_config(protocol: AdapterProtocol) -> AdapterConfig {
    AdapterConfig {
        protocol,
        base_url: "https://probe.example.org".to_string(),
        port: None,
        database_name: None,
        client_key_env_var: None,
        client_secret_env_var: None,
        timeout_ms: 1_000,
        max_concurrency: 2,
        extra: HashMap::new(),
    }
}

fn probe_system(identifier: &str) -> LibrarySystem {
    LibrarySystem {
        id: LibrarySystemId::new(identifier),
        name: format!("{} Public Library", identifier),
        vendor: "probe".to_string(),
        region: "TX".to_string(),
        catalog_url: "https://probe.example.org".to_string(),
        enabled: true,
        branches: vec![Branch {
            id: BranchId::new("main"),
            name: "Main".to_string(),
            code: "MAIN".to_string(),
            address: None,
            city: None,
        }],
        adapters: vec![probe_config(AdapterProtocol::Aspen)],
    }
}

/// Adaptador centinela: una cosecha fija de un ejemplar disponible.
struct FixedHarvestAdapter {
    config: AdapterConfig,
}

#[async_trait]
impl CatalogAdapter for FixedHarvestAdapter {
    fn protocol(&self) -> AdapterProtocol {
        AdapterProtocol::Aspen
    }

    fn config(&self) -> &AdapterConfig {
        &self.config
    }

    async fn execute_search(
        &self,
        isbn: &Isbn13,
        system: &LibrarySystem,
    ) -> Result<Vec<BookHolding>, AdapterError> {
        Ok(vec![BookHolding {
            fingerprint: BookHolding::compute_fingerprint(
                &system.id,
                isbn,
                "MAIN",
                None,
                Some("FIC SMI"),
            ),
            isbn: isbn.clone(),
            system_id: system.id.clone(),
            branch_id: BranchId::new("main"),
            system_name: system.name.clone(),
            branch_name: "Main".to_string(),
            call_number: Some("FIC SMI".to_string()),
            status: ItemStatus::Available,
            material_type: MaterialType::Book,
            due_date: None,
            hold_count: None,
            copy_count: None,
            catalog_url: system.catalog_url.clone(),
            collection: None,
            volume: None,
            raw_status: "Available".to_string(),
            source: HoldingSource::Direct,
        }])
    }
}

/// Adaptador centinela: la red siempre colapsa.
struct UnreachableAdapter {
    config: AdapterConfig,
}

#[async_trait]
impl CatalogAdapter for UnreachableAdapter {
    fn protocol(&self) -> AdapterProtocol {
        AdapterProtocol::Aspen
    }

    fn config(&self) -> &AdapterConfig {
        &self.config
    }

    async fn execute_search(
        &self,
        _isbn: &Isbn13,
        _system: &LibrarySystem,
    ) -> Result<Vec<BookHolding>, AdapterError> {
        Err(AdapterError::Connection("connection refused".to_string()))
    }
}

/// Adaptador centinela: cuelga hasta la cancelación.
struct HangingAdapter {
    config: AdapterConfig,
}

#[async_trait]
impl CatalogAdapter for HangingAdapter {
    fn protocol(&self) -> AdapterProtocol {
        AdapterProtocol::Aspen
    }

    fn config(&self) -> &AdapterConfig {
        &self.config
    }

    async fn execute_search(
        &self,
        _isbn: &Isbn13,
        _system: &LibrarySystem,
    ) -> Result<Vec<BookHolding>, AdapterError> {
        std::future::pending().await
    }
}

fn probe_engine_config() -> SearchConfig {
    SearchConfig {
        max_retries: 1,
        retry_base_delay_ms: 10,
        global_timeout_ms: 5_000,
        per_system_timeout_ms: 2_000,
        cache_enabled: false,
        ..SearchConfig::default()
    }
}

fn build_coordinator(
    systems: Vec<LibrarySystem>,
    fleets: HashMap<LibrarySystemId, Vec<Arc<dyn CatalogAdapter>>>,
    config: SearchConfig,
) -> SearchCoordinator {
    SearchCoordinator::new(
        Arc::new(LibraryRegistry::from_systems(systems)),
        Arc::new(AdapterRegistry::from_parts(fleets)),
        Arc::new(HealthTracker::new()),
        config,
    )
}

/**
 * CERTIFICACIÓN: Dos sistemas, uno con cosecha y otro con la red
 * caída agotando reintentos -> 1 ejemplar, 1 éxito, 1 fallo, una
 * entrada 'connection' y sello completo (no parcial).
 */
#[tokio::test]
async fn certify_partial_system_failure_recovery() {
    let alpha = probe_system("alpha");
    let beta = probe_system("beta");

    let mut fleets: HashMap<LibrarySystemId, Vec<Arc<dyn CatalogAdapter>>> = HashMap::new();
    fleets.insert(
        alpha.id.clone(),
        vec![Arc::new(FixedHarvestAdapter { config: probe_config(AdapterProtocol::Aspen) })],
    );
    fleets.insert(
        beta.id.clone(),
        vec![Arc::new(UnreachableAdapter { config: probe_config(AdapterProtocol::Aspen) })],
    );

    let coordinator = build_coordinator(vec![alpha, beta], fleets, probe_engine_config());
    let isbn = parse("9780306406157").expect("reference vector").isbn13;

    let result = coordinator
        .search("9780306406157".to_string(), isbn, Uuid::new_v4())
        .await;

    assert_eq!(result.holdings.len(), 1, "alpha harvest must survive beta's collapse");
    assert_eq!(result.systems_searched, 2);
    assert_eq!(result.systems_succeeded, 1);
    assert_eq!(result.systems_failed, 1);
    assert_eq!(result.systems_timed_out, 0);
    assert!(!result.is_partial);
    assert!(!result.from_cache);

    assert_eq!(result.errors.len(), 1, "one categorized entry per failed attempt chain");
    assert_eq!(result.errors[0].error_type, AdapterErrorKind::Connection);
    assert_eq!(result.errors[0].system_id, LibrarySystemId::new("beta"));

    // Consolidado: el único ejemplar disponible gobierna las sumas.
    assert_eq!(result.aggregate.total_copies, 1);
    assert_eq!(result.aggregate.total_available, 1);

    println!("✅ COORDINATOR: Partial system failure recovery certified.");
}

/**
 * CERTIFICACIÓN: Deadline global vencida con un sistema colgado ->
 * sello parcial honesto y conservación de conteos:
 * searched == succeeded + failed + timed_out.
 */
#[tokio::test]
async fn certify_global_deadline_partial_seal() {
    let alpha = probe_system("alpha");
    let stuck = probe_system("stuck");

    let mut fleets: HashMap<LibrarySystemId, Vec<Arc<dyn CatalogAdapter>>> = HashMap::new();
    fleets.insert(
        alpha.id.clone(),
        vec![Arc::new(FixedHarvestAdapter { config: probe_config(AdapterProtocol::Aspen) })],
    );
    fleets.insert(
        stuck.id.clone(),
        vec![Arc::new(HangingAdapter { config: probe_config(AdapterProtocol::Aspen) })],
    );

    let config = SearchConfig {
        global_timeout_ms: 300,
        per_system_timeout_ms: 10_000,
        ..probe_engine_config()
    };
    let coordinator = build_coordinator(vec![alpha, stuck], fleets, config);
    let isbn = parse("9780306406157").expect("reference vector").isbn13;

    let result = coordinator
        .search("9780306406157".to_string(), isbn, Uuid::new_v4())
        .await;

    assert!(result.is_partial, "elapsed global deadline must seal as partial");
    assert_eq!(result.systems_timed_out, 1);
    assert_eq!(
        result.systems_searched,
        result.systems_succeeded + result.systems_failed + result.systems_timed_out,
        "COUNT_CONSERVATION breach"
    );
    assert!(
        result
            .errors
            .iter()
            .any(|entry| entry.error_type == AdapterErrorKind::TimedOut),
        "the hung system must contribute a timed_out entry"
    );
    assert_eq!(result.holdings.len(), 1, "partial results gathered before the deadline remain valid");

    println!("✅ COORDINATOR: Global deadline partial seal certified.");
}
