// [apps/gateway/src/middleware.rs]
/*!
 * =================================================================
 * APARATO: PERIMETER GUARDS (V13.0 - IDENTITY & BUDGET)
 * CLASIFICACIÓN: SECURITY STRATUM (ESTRATO L4)
 * RESPONSABILIDAD: IDENTIDAD DE PETICIÓN Y RATE-LIMIT PERIMETRAL
 *
 * VISION HIPER-HOLÍSTICA 2026:
 * 1. REQUEST IDENTITY: Un 'X-Request-ID' entrante sólo se honra si
 *    cumple '^[A-Za-z0-9_-]{1,128}$' (blindaje contra inyección de
 *    logs y reflexión); en otro caso se forja un UUID. El
 *    identificador se inyecta en extensiones y se ecoa en la salida.
 * 2. CLIENT IDENTITY: La dirección de conexión es la identidad por
 *    defecto; 'X-Forwarded-For'/'X-Real-IP' sólo se honran con el
 *    interruptor explícito de proxy confiable.
 * 3. WINDOW BUDGET: El presupuesto por ventana fija responde 429 con
 *    Retry-After honesto al agotarse.
 * =================================================================
 */

use crate::errors::ApiError;
use crate::state::AppState;
use axum::{
    extract::{ConnectInfo, Request, State},
    http::{header::HeaderName, HeaderValue},
    middleware::Next,
    response::{IntoResponse, Response},
};
use panoptes_shared_heimdall::redaction::redact_value;
use std::net::SocketAddr;
use tracing::debug;
use uuid::Uuid;

/// Cabecera de identidad de petición.
pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// Identidad de petición inyectada en las extensiones del request.
#[derive(Debug, Clone)]
pub struct RequestIdentity(pub String);

/**
 * Valida el alfabeto y la longitud de un identificador entrante.
 */
fn is_acceptable_request_id(candidate: &str) -> bool {
    !candidate.is_empty()
        && candidate.len() <= 128
        && candidate
            .chars()
            .all(|character| character.is_ascii_alphanumeric() || character == '_' || character == '-')
}

/**
 * Guardia de Identidad: honra o forja el identificador de petición
 * y lo ecoa en la cabecera de respuesta.
 */
pub async fn request_identity_guard(mut request: Request, next: Next) -> Response {
    let request_identity = request
        .headers()
        .get(REQUEST_ID_HEADER)
        .and_then(|header_value| header_value.to_str().ok())
        .filter(|candidate| is_acceptable_request_id(candidate))
        .map(str::to_string)
        .unwrap_or_else(|| Uuid::new_v4().to_string());

    request
        .extensions_mut()
        .insert(RequestIdentity(request_identity.clone()));

    // Rastro de cabeceras con material sensible neutralizado
    // (Authorization y compañía jamás cristalizan en el Panóptico).
    let redacted_headers: Vec<(String, String)> = request
        .headers()
        .iter()
        .map(|(header_name, header_value)| {
            let name = header_name.as_str();
            let visible_value = header_value.to_str().unwrap_or("<binary>");
            (name.to_string(), redact_value(name, visible_value).to_string())
        })
        .collect();
    debug!(
        trace = %request_identity,
        headers = ?redacted_headers,
        "📨 [REQUEST_INBOUND]"
    );

    let mut response = next.run(request).await;

    if let Ok(echo_value) = HeaderValue::from_str(&request_identity) {
        response
            .headers_mut()
            .insert(HeaderName::from_static(REQUEST_ID_HEADER), echo_value);
    }
    response
}

/**
 * Resuelve la identidad del cliente para el presupuesto de ventana.
 * Las cabeceras de proxy sólo se honran con el interruptor explícito.
 */
fn resolve_client_identity(state: &AppState, request: &Request) -> String {
    if state.trust_proxy {
        let forwarded = request
            .headers()
            .get("x-forwarded-for")
            .and_then(|header_value| header_value.to_str().ok())
            .and_then(|chain| chain.split(',').next())
            .map(str::trim)
            .filter(|candidate| !candidate.is_empty());

        if let Some(proxied_identity) = forwarded {
            return proxied_identity.to_string();
        }

        if let Some(real_ip) = request
            .headers()
            .get("x-real-ip")
            .and_then(|header_value| header_value.to_str().ok())
            .map(str::trim)
            .filter(|candidate| !candidate.is_empty())
        {
            return real_ip.to_string();
        }
    }

    request
        .extensions()
        .get::<ConnectInfo<SocketAddr>>()
        .map(|connect_info| connect_info.0.ip().to_string())
        .unwrap_or_else(|| "unknown-client".to_string())
}

/**
 * Guardia de Presupuesto: rate-limit de ventana fija por cliente.
 */
pub async fn rate_limit_guard(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Response {
    let client_identity = resolve_client_identity(&state, &request);

    match state.rate_limiter.consume(&client_identity) {
        Ok(()) => next.run(request).await,
        Err(retry_after_seconds) => {
            debug!(
                "🚦 [RATE_WINDOW]: Budget exhausted for client [{}]; {}s remaining.",
                client_identity, retry_after_seconds
            );
            ApiError::RateLimited { retry_after_seconds }.into_response()
        }
    }
}
