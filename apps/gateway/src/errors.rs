// [apps/gateway/src/errors.rs]
/*!
 * =================================================================
 * APARATO: API FAULT MAPPER (V9.0 - SCRUBBED SURFACE)
 * CLASIFICACIÓN: API ADAPTER LAYER (ESTRATO L4)
 * RESPONSABILIDAD: PROYECCIÓN DE FALLOS A CÓDIGOS HTTP Y JSON
 *
 * VISION HIPER-HOLÍSTICA:
 * 1. TAXONOMY MAPPING: validación -> 400; rate-limit -> 429 con
 *    Retry-After; deadline de búsqueda -> 504; resto -> 500.
 * 2. PRODUCTION SCRUBBING: En producción los mensajes internos
 *    colapsan a texto genérico. La única excepción es la validación
 *    de ISBN: su materia prima vino del consumidor y el mensaje
 *    nombra la regla que éste violó.
 * 3. JSON SHAPE: Todo fallo responde '{error, type, ...}'.
 * =================================================================
 */

use axum::http::{header, HeaderValue, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;
use panoptes_core_isbn::IsbnError;
use serde_json::json;

/// Catálogo de fallos de la superficie HTTP.
#[derive(Debug)]
pub enum ApiError {
    /// Materia prima de ISBN rechazada; el mensaje viaja textual.
    Validation(IsbnError),
    /// Parámetro malformado ajeno al ISBN (p.ej. searchId no-UUID).
    BadRequest(String),
    /// Presupuesto de ventana agotado.
    RateLimited {
        /// Segundos restantes de la ventana vigente.
        retry_after_seconds: u64,
    },
    /// El tope duro del endpoint síncrono venció sin resultado.
    SearchTimeout,
    /// Recurso inexistente o vencido (searchId desconocido).
    NotFound(String),
    /// Fallo interno; el mensaje ya llega depurado según el modo.
    Internal(String),
}

impl ApiError {
    /**
     * Forja un fallo interno depurando el detalle en producción.
     */
    #[must_use]
    pub fn internal(detail: String, production_mode: bool) -> Self {
        if production_mode {
            Self::Internal("internal server error".to_string())
        } else {
            Self::Internal(detail)
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            Self::Validation(isbn_fault) => (
                StatusCode::BAD_REQUEST,
                Json(json!({ "error": isbn_fault.to_string(), "type": "validation" })),
            )
                .into_response(),

            Self::BadRequest(detail) => (
                StatusCode::BAD_REQUEST,
                Json(json!({ "error": detail, "type": "validation" })),
            )
                .into_response(),

            Self::RateLimited { retry_after_seconds } => {
                let mut response = (
                    StatusCode::TOO_MANY_REQUESTS,
                    Json(json!({
                        "error": "rate limit exceeded",
                        "type": "rate_limit",
                        "retryAfter": retry_after_seconds
                    })),
                )
                    .into_response();

                if let Ok(window_header) = HeaderValue::from_str(&retry_after_seconds.to_string()) {
                    response.headers_mut().insert(header::RETRY_AFTER, window_header);
                }
                response
            }

            Self::SearchTimeout => (
                StatusCode::GATEWAY_TIMEOUT,
                Json(json!({ "error": "federated search deadline elapsed", "type": "search_timeout" })),
            )
                .into_response(),

            Self::NotFound(detail) => (
                StatusCode::NOT_FOUND,
                Json(json!({ "error": detail, "type": "not_found" })),
            )
                .into_response(),

            Self::Internal(detail) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "error": detail, "type": "internal" })),
            )
                .into_response(),
        }
    }
}
