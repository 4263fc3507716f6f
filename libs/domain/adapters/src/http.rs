// [libs/domain/adapters/src/http.rs]
/*!
 * =================================================================
 * APARATO: OUTBOUND HTTP TUNNEL (V12.0 - FAULT CLASSIFIER)
 * CLASIFICACIÓN: DOMAIN ADAPTERS (ESTRATO L3)
 * RESPONSABILIDAD: TÚNEL COMPARTIDO Y CLASIFICACIÓN DE FALLOS DE RED
 *
 * VISION HIPER-HOLÍSTICA:
 * 1. ONE CLIENT: Un único 'reqwest::Client' con pool de conexiones
 *    compartido alimenta a todos los adaptadores del registro.
 * 2. STATUS TAXONOMY: 401/403 -> Auth; 429 (+Retry-After) -> RateLimit;
 *    5xx -> Connection; otros 4xx -> Parse (contrato roto del vendor).
 * 3. NETWORK TAXONOMY: timeout de socket -> Timeout; fallo de conexión
 *    o DNS -> Connection; el resto -> Unknown (transitorio).
 * =================================================================
 */

use crate::errors::AdapterError;
use reqwest::{Client, Response, StatusCode};
use serde::de::DeserializeOwned;
use std::time::Duration;

/// Identidad de agente del túnel saliente.
const USER_AGENT_SIGNATURE: &str = "ArgusPanoptes-FederatedSearch/0.9";

/// Red de seguridad exterior: ningún socket vive más allá de este tope,
/// por encima de cualquier timeout por petición configurado.
const OUTER_SOCKET_CEILING_SECS: u64 = 45;

/**
 * Construye el túnel HTTP compartido del registro de adaptadores.
 */
#[must_use]
pub fn build_shared_client() -> Client {
    Client::builder()
        .user_agent(USER_AGENT_SIGNATURE)
        .timeout(Duration::from_secs(OUTER_SOCKET_CEILING_SECS))
        .build()
        .expect("FATAL: outbound HTTP tunnel initialization failed")
}

/**
 * Clasifica un fallo de transporte de reqwest según la taxonomía.
 */
#[must_use]
pub fn classify_network_fault(network_fault: &reqwest::Error, timeout_ms: u64) -> AdapterError {
    if network_fault.is_timeout() {
        AdapterError::Timeout(timeout_ms)
    } else if network_fault.is_connect() || network_fault.is_request() {
        AdapterError::Connection(network_fault.to_string())
    } else {
        AdapterError::Unknown(network_fault.to_string())
    }
}

/**
 * Audita el código de estado de una respuesta del vendor.
 * Retorna el fallo categorizado para códigos no exitosos.
 */
pub fn audit_response_status(response: &Response) -> Result<(), AdapterError> {
    let status = response.status();
    if status.is_success() {
        return Ok(());
    }

    match status {
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
            Err(AdapterError::Auth(format!("HTTP_{}", status.as_u16())))
        }
        StatusCode::TOO_MANY_REQUESTS => {
            let retry_after_seconds = response
                .headers()
                .get(reqwest::header::RETRY_AFTER)
                .and_then(|header_value| header_value.to_str().ok())
                .and_then(|window| window.trim().parse::<u64>().ok());
            Err(AdapterError::RateLimit { retry_after_seconds })
        }
        server_fault if server_fault.is_server_error() => {
            Err(AdapterError::Connection(format!("HTTP_{}", status.as_u16())))
        }
        broken_contract => {
            Err(AdapterError::Parse(format!("unexpected HTTP_{}", broken_contract.as_u16())))
        }
    }
}

/**
 * GET del cuerpo textual (XML/HTML) con auditoría de estado.
 *
 * # Errors:
 * `AdapterError` categorizado por transporte o por código de estado.
 */
pub async fn fetch_text(
    http_client: &Client,
    url: &str,
    timeout_ms: u64,
) -> Result<String, AdapterError> {
    let response = http_client
        .get(url)
        .send()
        .await
        .map_err(|fault| classify_network_fault(&fault, timeout_ms))?;

    audit_response_status(&response)?;

    response
        .text()
        .await
        .map_err(|fault| classify_network_fault(&fault, timeout_ms))
}

/**
 * Despacha una petición ya armada y proyecta el cuerpo JSON tipado.
 * Un cuerpo que no cumple el esquema del vendor es RESPONSE_CORRUPTION.
 */
pub async fn fetch_json<T: DeserializeOwned>(
    request: reqwest::RequestBuilder,
    timeout_ms: u64,
) -> Result<T, AdapterError> {
    let response = request
        .send()
        .await
        .map_err(|fault| classify_network_fault(&fault, timeout_ms))?;

    audit_response_status(&response)?;

    let raw_body = response
        .text()
        .await
        .map_err(|fault| classify_network_fault(&fault, timeout_ms))?;

    serde_json::from_str::<T>(&raw_body).map_err(|schema_fault| {
        AdapterError::Parse(format!("vendor schema mismatch: {}", schema_fault))
    })
}
