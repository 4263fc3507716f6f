// [libs/domain/search/src/coordinator.rs]
/*!
 * =================================================================
 * APARATO: FEDERATED SEARCH COORDINATOR (V19.0 - TRIPLE SHIELD)
 * CLASIFICACIÓN: DOMAIN ENGINE (ESTRATO L2)
 * RESPONSABILIDAD: ORQUESTACIÓN DEL FAN-OUT BAJO DEADLINE GLOBAL
 *
 * VISION HIPER-HOLÍSTICA 2026:
 * 1. FLIGHT DISCIPLINE: caché -> single-flight -> fan-out. Cada
 *    sistema habilitado vuela como tarea propia del JoinSet; el
 *    vencimiento del reloj global aborta las tareas restantes y
 *    sella el resultado como parcial.
 * 2. ORDERED FLEET WALK: Dentro de un sistema, el primario vuela
 *    primero; los fallbacks sólo despegan ante fallos que lo admiten
 *    (jamás auth ni rate-limit).
 * 3. SYNTHETIC FAULTS: Un breaker abierto no llega a la red: emite
 *    un fallo sintético 'circuit_open' y cede el turno al fallback.
 * 4. LEDGER ATOMICITY: La bitácora compartida del fan-out se muta
 *    bajo cerrojo con secciones críticas sin suspensión.
 * =================================================================
 */

use crate::aggregator::aggregate_holdings;
use crate::cache::{FlightPlan, SearchCache};
use crate::config::SearchConfig;
use chrono::Utc;
use panoptes_core_isbn::Isbn13;
use panoptes_domain_adapters::{run_guarded_search, AdapterRegistry, CatalogAdapter};
use panoptes_domain_models::{
    AdapterErrorKind, AdapterProtocol, BookHolding, LibrarySystem, LibrarySystemId, SearchError,
    SearchResult,
};
use panoptes_infra_registry::LibraryRegistry;
use panoptes_infra_resilience::{CircuitBreaker, ConcurrencyGovernor, HealthTracker, RetryPolicy};
use std::collections::{HashMap, HashSet};
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};
use tokio::task::JoinSet;
use tracing::{debug, info, warn};
use uuid::Uuid;

/// Bitácora compartida de un fan-out en curso.
#[derive(Default)]
struct FanoutLedger {
    holdings: Vec<BookHolding>,
    errors: Vec<SearchError>,
    succeeded: u32,
    failed: u32,
    completed: HashSet<LibrarySystemId>,
}

impl FanoutLedger {
    fn push_error(
        &mut self,
        system_id: &LibrarySystemId,
        protocol: AdapterProtocol,
        kind: AdapterErrorKind,
        message: String,
    ) {
        self.errors.push(SearchError {
            system_id: system_id.clone(),
            protocol: protocol.label().to_string(),
            error_type: kind,
            message,
            occurred_at: Utc::now(),
        });
    }
}

/// Coordinador del motor de búsqueda federada.
pub struct SearchCoordinator {
    registry: Arc<LibraryRegistry>,
    adapters: Arc<AdapterRegistry>,
    governor: Arc<ConcurrencyGovernor>,
    breakers: Arc<HashMap<String, Arc<CircuitBreaker>>>,
    health: Arc<HealthTracker>,
    cache: Arc<SearchCache>,
    config: SearchConfig,
}

impl SearchCoordinator {
    /**
     * Forja el coordinador cristalizando un breaker por instancia de
     * adaptador y el gobernador bicapa de concurrencia.
     */
    #[must_use]
    pub fn new(
        registry: Arc<LibraryRegistry>,
        adapters: Arc<AdapterRegistry>,
        health: Arc<HealthTracker>,
        config: SearchConfig,
    ) -> Self {
        let mut breakers: HashMap<String, Arc<CircuitBreaker>> = HashMap::new();
        for system in registry.all_systems() {
            for adapter in adapters.fleet(&system.id) {
                breakers.insert(
                    Self::breaker_key(&system.id, adapter.protocol()),
                    Arc::new(CircuitBreaker::new(
                        config.breaker_failure_threshold,
                        Duration::from_millis(config.breaker_reset_timeout_ms),
                    )),
                );
            }
        }

        let cache = Arc::new(SearchCache::new(
            config.cache_enabled,
            config.cache_max_entries,
            Duration::from_millis(config.cache_ttl_ms),
        ));

        Self {
            registry,
            adapters,
            governor: Arc::new(ConcurrencyGovernor::new(config.max_concurrency)),
            breakers: Arc::new(breakers),
            health,
            cache,
            config,
        }
    }

    fn breaker_key(system_id: &LibrarySystemId, protocol: AdapterProtocol) -> String {
        format!("{}::{}", system_id, protocol.label())
    }

    /// Rastreador de salud observado por este coordinador.
    #[must_use]
    pub fn health(&self) -> &Arc<HealthTracker> {
        &self.health
    }

    /// Registro declarativo servido por este coordinador.
    #[must_use]
    pub fn registry(&self) -> &Arc<LibraryRegistry> {
        &self.registry
    }

    /**
     * Búsqueda federada completa de un ISBN ya validado.
     *
     * Disciplina de vuelo: acierto de caché -> retorno inmediato con
     * 'from_cache'; vuelo en curso del mismo ISBN -> adhesión a su
     * difusión; en otro caso este llamante lidera el fan-out.
     */
    pub async fn search(
        &self,
        original_isbn: String,
        isbn: Isbn13,
        request_id: Uuid,
    ) -> Arc<SearchResult> {
        // 1. CONSULTA DE CACHÉ
        if let Some(resident) = self.cache.lookup(&isbn) {
            debug!("🗄️  [SEARCH_CACHE]: Resident result for [{}].", isbn);
            let mut replay = (*resident).clone();
            replay.from_cache = true;
            return Arc::new(replay);
        }

        // 2. DISCIPLINA SINGLE-FLIGHT
        match self.cache.plan_flight(&isbn) {
            FlightPlan::Leader(flight_sender) => {
                let result = Arc::new(self.perform_fanout(original_isbn, isbn.clone(), request_id).await);
                self.cache.seal_flight(&isbn, result.clone(), &flight_sender);
                result
            }
            FlightPlan::Follower(mut flight_receiver) => {
                debug!("🤝 [SINGLE_FLIGHT]: Joining in-flight search for [{}].", isbn);

                let already_sealed = flight_receiver.borrow().clone();
                if let Some(result) = already_sealed {
                    return result;
                }

                if flight_receiver.changed().await.is_ok() {
                    let sealed = flight_receiver.borrow().clone();
                    if let Some(result) = sealed {
                        return result;
                    }
                }

                // Líder caído sin sellar: vuelo propio sin coalescencia.
                warn!("🪂 [SINGLE_FLIGHT]: Leader vanished for [{}]; flying solo.", isbn);
                Arc::new(self.perform_fanout(original_isbn, isbn, request_id).await)
            }
        }
    }

    /**
     * Ejecuta el fan-out completo bajo el reloj global.
     */
    async fn perform_fanout(
        &self,
        original_isbn: String,
        isbn: Isbn13,
        request_id: Uuid,
    ) -> SearchResult {
        let mut result = SearchResult::scaffold(request_id, original_isbn, isbn.clone());
        let systems: Vec<LibrarySystem> = self.registry.enabled_systems().cloned().collect();
        result.systems_searched = systems.len() as u32;

        info!(
            "🛰️  [FAN_OUT]: Dispatching [{}] across {} systems (request {}).",
            isbn,
            systems.len(),
            request_id
        );

        let ledger = Arc::new(Mutex::new(FanoutLedger::default()));
        let retry_policy = RetryPolicy {
            max_retries: self.config.max_retries,
            base_delay_ms: self.config.retry_base_delay_ms,
        };

        // 3. DESPEGUE: una tarea por sistema habilitado.
        let mut flight_deck: JoinSet<()> = JoinSet::new();
        for system in systems.iter().cloned() {
            let fleet: Vec<Arc<dyn CatalogAdapter>> = self.adapters.fleet(&system.id).to_vec();
            flight_deck.spawn(search_system_task(
                system,
                fleet,
                isbn.clone(),
                self.governor.clone(),
                self.breakers.clone(),
                self.health.clone(),
                ledger.clone(),
                retry_policy,
                self.config.per_system_timeout_ms,
            ));
        }

        // 4. ESPERA BAJO EL RELOJ GLOBAL
        let global_deadline =
            tokio::time::sleep(Duration::from_millis(self.config.global_timeout_ms));
        tokio::pin!(global_deadline);

        loop {
            tokio::select! {
                () = &mut global_deadline => {
                    warn!("⏳ [GLOBAL_DEADLINE]: Elapsed with flights outstanding; aborting.");
                    flight_deck.abort_all();
                    result.is_partial = true;
                    break;
                }
                joined = flight_deck.join_next() => {
                    if joined.is_none() {
                        break;
                    }
                }
            }
        }

        // Drenaje de tareas abortadas (liberan permisos al caer).
        while flight_deck.join_next().await.is_some() {}

        // 5. SELLADO DE LA BITÁCORA
        {
            let mut ledger_guard = ledger.lock().expect("FANOUT_LEDGER_POISONED");

            for system in &systems {
                if !ledger_guard.completed.contains(&system.id) {
                    result.systems_timed_out += 1;
                    let protocol = system
                        .primary_adapter()
                        .map(|config| config.protocol)
                        .unwrap_or(AdapterProtocol::SruGeneric);
                    ledger_guard.push_error(
                        &system.id,
                        protocol,
                        AdapterErrorKind::TimedOut,
                        "global fan-out deadline elapsed before completion".to_string(),
                    );
                }
            }

            result.systems_succeeded = ledger_guard.succeeded;
            result.systems_failed = ledger_guard.failed;
            result.errors = std::mem::take(&mut ledger_guard.errors);

            let raw_holdings = std::mem::take(&mut ledger_guard.holdings);
            let (survivors, aggregate) = aggregate_holdings(raw_holdings);
            result.holdings = survivors;
            result.aggregate = aggregate;
        }

        result.completed_at = Some(Utc::now());
        info!(
            "🏁 [FAN_OUT_SEALED]: {} holdings, {} errors ({} ok / {} failed / {} timed out){}.",
            result.holdings.len(),
            result.errors.len(),
            result.systems_succeeded,
            result.systems_failed,
            result.systems_timed_out,
            if result.is_partial { " [PARTIAL]" } else { "" }
        );

        result
    }
}

/**
 * Vuelo de UN sistema: camina la flota ordenada bajo la deadline por
 * sistema, registrando cada desenlace en la bitácora compartida.
 */
#[allow(clippy::too_many_arguments)]
async fn search_system_task(
    system: LibrarySystem,
    fleet: Vec<Arc<dyn CatalogAdapter>>,
    isbn: Isbn13,
    governor: Arc<ConcurrencyGovernor>,
    breakers: Arc<HashMap<String, Arc<CircuitBreaker>>>,
    health: Arc<HealthTracker>,
    ledger: Arc<Mutex<FanoutLedger>>,
    retry_policy: RetryPolicy,
    per_system_timeout_ms: u64,
) {
    let system_id = system.id.clone();

    let fleet_walk = walk_ordered_fleet(
        &system,
        &fleet,
        &isbn,
        &governor,
        &breakers,
        &health,
        &ledger,
        retry_policy,
    );

    match tokio::time::timeout(Duration::from_millis(per_system_timeout_ms), fleet_walk).await {
        Ok(succeeded) => {
            let mut ledger_guard = ledger.lock().expect("FANOUT_LEDGER_POISONED");
            if succeeded {
                ledger_guard.succeeded += 1;
            } else {
                ledger_guard.failed += 1;
            }
            ledger_guard.completed.insert(system_id);
        }
        Err(_per_system_deadline) => {
            let protocol = fleet
                .first()
                .map(|adapter| adapter.protocol())
                .unwrap_or(AdapterProtocol::SruGeneric);
            let mut ledger_guard = ledger.lock().expect("FANOUT_LEDGER_POISONED");
            ledger_guard.push_error(
                &system_id,
                protocol,
                AdapterErrorKind::Timeout,
                "per-system deadline elapsed across the adapter fleet".to_string(),
            );
            ledger_guard.failed += 1;
            ledger_guard.completed.insert(system_id);
        }
    }
}

/**
 * Camina la flota ordenada del sistema. Retorna true al primer
 * adaptador con cosecha exitosa; false con la flota agotada.
 */
#[allow(clippy::too_many_arguments)]
async fn walk_ordered_fleet(
    system: &LibrarySystem,
    fleet: &[Arc<dyn CatalogAdapter>],
    isbn: &Isbn13,
    governor: &ConcurrencyGovernor,
    breakers: &HashMap<String, Arc<CircuitBreaker>>,
    health: &HealthTracker,
    ledger: &Mutex<FanoutLedger>,
    retry_policy: RetryPolicy,
) -> bool {
    if fleet.is_empty() {
        let mut ledger_guard = ledger.lock().expect("FANOUT_LEDGER_POISONED");
        ledger_guard.push_error(
            &system.id,
            AdapterProtocol::SruGeneric,
            AdapterErrorKind::Unknown,
            "no adapters crystallized for this system".to_string(),
        );
        return false;
    }

    for adapter in fleet {
        let breaker_key = SearchCoordinator::breaker_key(&system.id, adapter.protocol());
        let Some(breaker) = breakers.get(&breaker_key) else {
            continue;
        };

        // FALLO SINTÉTICO: el breaker abierto jamás llega a la red.
        if breaker.is_open() {
            debug!(
                "⛔ [BREAKER_OPEN]: Skipping {} for [{}].",
                adapter.protocol().label(),
                system.id
            );
            let mut ledger_guard = ledger.lock().expect("FANOUT_LEDGER_POISONED");
            ledger_guard.push_error(
                &system.id,
                adapter.protocol(),
                AdapterErrorKind::CircuitOpen,
                "circuit breaker open; call skipped".to_string(),
            );
            continue;
        }

        let flight_started = Instant::now();

        // Orden estricto de permisos: sistema primero, global después.
        let flight_permit = governor
            .acquire(&system.id, adapter.config().max_concurrency)
            .await;
        let outcome = run_guarded_search(adapter.as_ref(), isbn, system, retry_policy).await;
        drop(flight_permit);

        let observed_duration_ms = flight_started.elapsed().as_millis() as u64;

        match outcome {
            Ok(search_outcome) => {
                breaker.record_success();
                health.record_success(&system.id, search_outcome.response_time_ms);

                let mut ledger_guard = ledger.lock().expect("FANOUT_LEDGER_POISONED");
                ledger_guard.holdings.extend(search_outcome.holdings);
                return true;
            }
            Err(adapter_fault) => {
                breaker.record_failure();
                health.record_failure(&system.id, &adapter_fault.to_string(), observed_duration_ms);

                let admits_fallback = adapter_fault.admits_fallback();
                {
                    let mut ledger_guard = ledger.lock().expect("FANOUT_LEDGER_POISONED");
                    ledger_guard.push_error(
                        &system.id,
                        adapter.protocol(),
                        adapter_fault.kind(),
                        adapter_fault.to_string(),
                    );
                }

                // Auth y rate-limit se registran SIN fallback.
                if !admits_fallback {
                    return false;
                }
            }
        }
    }

    false
}
