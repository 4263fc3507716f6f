// INICIO DEL ARCHIVO [apps/gateway/src/routes.rs]
/*!
 * =================================================================
 * APARATO: SOVEREIGN ROUTING MATRIX (V14.0 - PANOPTICON TOPOLOGY)
 * CLASIFICACIÓN: API ADAPTER LAYER (ESTRATO L4)
 * RESPONSABILIDAD: COMPOSICIÓN DE ESTRATOS DE BÚSQUEDA Y SALUD
 *
 * VISION HIPER-HOLÍSTICA:
 * La topología soporta:
 * 1. Búsqueda federada (GET/POST /search + sondeo) bajo el guardia
 *    de presupuesto por ventana.
 * 2. Salud (proceso y federación) sin rate-limit: las sondas de
 *    infraestructura no consumen presupuesto de búsqueda.
 * 3. Identidad de petición y CORS como escudo global.
 * =================================================================
 */

use crate::handlers::{health, search, visual};
use crate::middleware::{rate_limit_guard, request_identity_guard};
use crate::state::AppState;
use axum::{
    http::{header, Method},
    middleware,
    routing::get,
    Router,
};
use std::time::Duration;
use tower_http::cors::{Any, CorsLayer};

/**
 * Compone el enrutador soberano completo del gateway.
 */
pub fn create_sovereign_router(application_shared_state: AppState) -> Router {
    // Escudo de Red: CORS permisivo para el consumidor de visualización.
    let network_security_shield = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::AUTHORIZATION, header::CONTENT_TYPE])
        .max_age(Duration::from_secs(3600));

    // ESTRATO DE BÚSQUEDA FEDERADA (presupuesto por ventana activo)
    let search_stratum = Router::new()
        .route(
            "/search",
            get(search::handle_synchronous_search).post(search::handle_asynchronous_search),
        )
        .route("/search/:search_id", get(search::handle_search_poll))
        .layer(middleware::from_fn_with_state(
            application_shared_state.clone(),
            rate_limit_guard,
        ));

    // ESTRATO DE SALUD (sin presupuesto: sondas de infraestructura)
    let health_stratum = Router::new()
        .route("/health", get(health::handle_liveness))
        .route("/health/systems", get(health::handle_systems_health))
        .route("/health/systems/:system_id", get(health::handle_single_system_health));

    // COMPOSICIÓN GLOBAL (Root Topology)
    Router::new()
        .route("/", get(visual::handle_landing))
        .merge(search_stratum)
        .merge(health_stratum)
        .layer(middleware::from_fn(request_identity_guard))
        .layer(network_security_shield)
        .with_state(application_shared_state)
}
// FIN DEL ARCHIVO [apps/gateway/src/routes.rs]
