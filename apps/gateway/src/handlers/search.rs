// [apps/gateway/src/handlers/search.rs]
/*!
 * =================================================================
 * APARATO: SEARCH HANDLERS (V15.0 - DUAL MODE DISPATCH)
 * CLASIFICACIÓN: API ADAPTER LAYER (ESTRATO L4)
 * RESPONSABILIDAD: BÚSQUEDA SÍNCRONA, ASÍNCRONA Y SONDEO
 *
 * VISION HIPER-HOLÍSTICA 2026:
 * 1. SYNC MODE: GET /search valida, delega al coordinador bajo un
 *    tope duro y entrega el resultado consolidado.
 * 2. ASYNC MODE: POST /search responde 202 con searchId y despacha
 *    el fan-out al fondo; el sellado cae en la bóveda acotada.
 * 3. POLL HARDENING: GET /search/:id exige formato UUID estricto
 *    antes de tocar la bóveda (blindaje de logs y reflexión).
 * =================================================================
 */

use crate::errors::ApiError;
use crate::middleware::RequestIdentity;
use crate::state::async_vault::AsyncSearchStatus;
use crate::state::AppState;
use axum::{
    extract::{Extension, Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use panoptes_core_isbn::parse;
use serde::Deserialize;
use serde_json::json;
use std::time::Duration;
use tracing::{error, info, instrument};
use uuid::Uuid;

/// Parámetros de la búsqueda síncrona.
#[derive(Debug, Deserialize)]
pub struct SearchQueryParams {
    /// Materia prima del ISBN (admite guiones y espacios).
    pub isbn: String,
}

/// Cuerpo de la búsqueda asíncrona.
#[derive(Debug, Deserialize)]
pub struct AsyncSearchPayload {
    /// Materia prima del ISBN (admite guiones y espacios).
    pub isbn: String,
}

/**
 * Endpoint: GET /search?isbn=<raw>
 *
 * Búsqueda federada síncrona. El tope duro del estado protege al
 * consumidor de un coordinador colgado más allá del reloj global.
 *
 * # Errors:
 * - 400: materia prima de ISBN rechazada (mensaje textual).
 * - 504: tope duro vencido sin resultado.
 */
#[instrument(skip_all, fields(isbn = %params.isbn))]
pub async fn handle_synchronous_search(
    State(state): State<AppState>,
    Extension(request_identity): Extension<RequestIdentity>,
    Query(params): Query<SearchQueryParams>,
) -> Result<impl IntoResponse, ApiError> {
    let parsed = parse(&params.isbn).map_err(ApiError::Validation)?;
    let request_id = Uuid::new_v4();

    info!(
        "🔭 [SEARCH_SYNC]: [{}] dispatched (request {} / trace {}).",
        parsed.isbn13, request_id, request_identity.0
    );

    let flight = state
        .coordinator
        .search(params.isbn.clone(), parsed.isbn13, request_id);

    match tokio::time::timeout(Duration::from_millis(state.synchronous_ceiling_ms), flight).await {
        Ok(result) => Ok(Json((*result).clone())),
        Err(_ceiling_elapsed) => Err(ApiError::SearchTimeout),
    }
}

/**
 * Endpoint: POST /search  body {isbn}
 *
 * Despacha el fan-out al fondo y responde 202 con el searchId de
 * sondeo. El resultado cae sellado en la bóveda acotada.
 */
#[instrument(skip_all)]
pub async fn handle_asynchronous_search(
    State(state): State<AppState>,
    Json(payload): Json<AsyncSearchPayload>,
) -> Result<impl IntoResponse, ApiError> {
    let parsed = parse(&payload.isbn).map_err(ApiError::Validation)?;
    let search_id = Uuid::new_v4();

    state.async_vault.open(search_id);

    let coordinator = state.coordinator.clone();
    let async_vault = state.async_vault.clone();
    let original_isbn = payload.isbn.clone();
    let isbn13 = parsed.isbn13.clone();

    tokio::spawn(async move {
        let result = coordinator.search(original_isbn, isbn13, search_id).await;
        async_vault.seal(search_id, result);
        info!("📦 [SEARCH_ASYNC]: Vault sealed for searchId [{}].", search_id);
    });

    Ok((
        StatusCode::ACCEPTED,
        Json(json!({ "searchId": search_id, "status": "pending" })),
    ))
}

/**
 * Endpoint: GET /search/:searchId
 *
 * Sondeo del resultado asíncrono. El identificador DEBE cumplir el
 * formato UUID; cualquier otra materia se rechaza sin tocar logs
 * con texto arbitrario del consumidor.
 *
 * # Errors:
 * - 400: searchId fuera del formato UUID.
 * - 404: slot desconocido o vencido.
 */
#[instrument(skip_all)]
pub async fn handle_search_poll(
    State(state): State<AppState>,
    Path(raw_search_id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let Ok(search_id) = Uuid::parse_str(&raw_search_id) else {
        error!("🛑 [POLL_REJECTED]: searchId outside UUID format.");
        return Err(ApiError::BadRequest("searchId must be a UUID".to_string()));
    };

    match state.async_vault.status(&search_id) {
        None => Err(ApiError::NotFound("unknown or expired searchId".to_string())),
        Some(AsyncSearchStatus::Pending) => Ok((
            StatusCode::OK,
            Json(json!({ "searchId": search_id, "status": "pending" })),
        )
            .into_response()),
        Some(AsyncSearchStatus::Complete(result)) => Ok(Json((*result).clone()).into_response()),
    }
}
