// [apps/gateway/src/handlers/visual.rs]
/*!
 * =================================================================
 * APARATO: VISUAL LANDING HANDLER (V5.0 - IDENTITY CARD)
 * CLASIFICACIÓN: API ADAPTER LAYER (ESTRATO L4)
 * RESPONSABILIDAD: TARJETA DE IDENTIDAD DEL SERVICIO EN LA RAÍZ
 * =================================================================
 */

use axum::{response::IntoResponse, Json};
use serde_json::json;

/**
 * Endpoint: GET /
 * Tarjeta mínima de identidad para operadores y sondas externas.
 */
pub async fn handle_landing() -> impl IntoResponse {
    Json(json!({
        "service": "argus-panoptes-gateway",
        "description": "federated library holdings search",
        "version": env!("CARGO_PKG_VERSION")
    }))
}
