// [apps/gateway/src/handlers/health.rs]
/*!
 * =================================================================
 * APARATO: HEALTH HANDLERS (V10.0 - PANOPTICON SNAPSHOTS)
 * CLASIFICACIÓN: API ADAPTER LAYER (ESTRATO L4)
 * RESPONSABILIDAD: LIVENESS DEL PROCESO Y SALUD POR SISTEMA
 * =================================================================
 */

use crate::errors::ApiError;
use crate::state::AppState;
use axum::{
    extract::{Path, State},
    response::IntoResponse,
    Json,
};
use chrono::Utc;
use panoptes_domain_models::LibrarySystemId;
use serde_json::json;

/**
 * Endpoint: GET /health
 * Liveness del proceso: uptime y marcas temporales.
 */
pub async fn handle_liveness(State(state): State<AppState>) -> impl IntoResponse {
    Json(json!({
        "status": "ok",
        "uptimeSeconds": state.uptime_seconds(),
        "ignitedAt": state.ignited_at_utc,
        "timestamp": Utc::now()
    }))
}

/**
 * Endpoint: GET /health/systems
 * Snapshot defensivo de salud de toda la federación.
 */
pub async fn handle_systems_health(State(state): State<AppState>) -> impl IntoResponse {
    let health_snapshot = state.coordinator.health().all_health();
    let registry = state.coordinator.registry();

    let per_system: Vec<serde_json::Value> = registry
        .all_systems()
        .iter()
        .map(|system| {
            let record = health_snapshot.get(&system.id);
            json!({
                "systemId": system.id,
                "name": system.name,
                "vendor": system.vendor,
                "enabled": system.enabled,
                "successRate": record.map(|r| r.success_rate()).unwrap_or(0.0),
                "health": record,
            })
        })
        .collect();

    Json(json!({
        "systems": per_system,
        "totalSystems": registry.len(),
        "timestamp": Utc::now()
    }))
}

/**
 * Endpoint: GET /health/systems/:systemId
 * Snapshot puntual de un sistema declarado.
 *
 * # Errors:
 * - 404: sistema fuera del registro declarativo.
 */
pub async fn handle_single_system_health(
    State(state): State<AppState>,
    Path(raw_system_id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let system_id = LibrarySystemId::new(raw_system_id);
    let registry = state.coordinator.registry();

    let Some(system) = registry.system(&system_id) else {
        return Err(ApiError::NotFound("unknown library system".to_string()));
    };

    let record = state.coordinator.health().system_health(&system_id);
    Ok(Json(json!({
        "systemId": system.id,
        "name": system.name,
        "vendor": system.vendor,
        "enabled": system.enabled,
        "successRate": record.as_ref().map(|r| r.success_rate()).unwrap_or(0.0),
        "health": record,
        "timestamp": Utc::now()
    })))
}
