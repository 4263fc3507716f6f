// [tests/mirror/apps/gateway/request_identity.test.rs]
/**
 * =================================================================
 * APARATO: REQUEST IDENTITY MIRROR TEST (V4.0)
 * CLASIFICACIÓN: TRINITY EVIDENCE (ESTRATO L4-GATEWAY)
 * OBJETIVO: Certificar el guardia de identidad de petición y el
 *          mapeo de fallos de validación sobre el enrutador real.
 * =================================================================
 */

use axum::body::Body;
use axum::http::{header::CONTENT_TYPE, Request, StatusCode};
use panoptes_domain_adapters::AdapterRegistry;
use panoptes_domain_search::{SearchConfig, SearchCoordinator};
use panoptes_gateway::routes::create_sovereign_router;
use panoptes_gateway::state::AppState;
use panoptes_infra_registry::LibraryRegistry;
use panoptes_infra_resilience::HealthTracker;
use std::collections::HashMap;
use std::sync::Arc;
use tower::util::ServiceExt;
use uuid::Uuid;

fn probe_router() -> axum::Router {
    let coordinator = Arc::new(SearchCoordinator::new(
        Arc::new(LibraryRegistry::from_systems(Vec::new())),
        Arc::new(AdapterRegistry::from_parts(HashMap::new())),
        Arc::new(HealthTracker::new()),
        SearchConfig { cache_enabled: false, ..SearchConfig::default() },
    ));

    let state = AppState::new(coordinator, 60, false, false, 5_000);
    create_sovereign_router(state)
}

/**
 * CERTIFICACIÓN: Sin cabecera entrante se forja un UUID y se ecoa.
 */
#[tokio::test]
async fn certify_forged_identity_echo() {
    let response = probe_router()
        .oneshot(Request::builder().uri("/").body(Body::empty()).expect("request"))
        .await
        .expect("router must answer");

    assert_eq!(response.status(), StatusCode::OK);

    let echoed = response
        .headers()
        .get("x-request-id")
        .and_then(|value| value.to_str().ok())
        .expect("identity header must echo");
    assert!(Uuid::parse_str(echoed).is_ok(), "forged identity must be a UUID");

    println!("✅ IDENTITY: Forged identity echo certified.");
}

/**
 * CERTIFICACIÓN: Una identidad entrante legal se honra textual; una
 * fuera del alfabeto se reemplaza (blindaje de inyección de logs).
 */
#[tokio::test]
async fn certify_incoming_identity_policy() {
    let router = probe_router();

    let honored = router
        .clone()
        .oneshot(
            Request::builder()
                .uri("/")
                .header("x-request-id", "trace-01_ABC")
                .body(Body::empty())
                .expect("request"),
        )
        .await
        .expect("router must answer");
    assert_eq!(
        honored.headers().get("x-request-id").and_then(|v| v.to_str().ok()),
        Some("trace-01_ABC")
    );

    let replaced = router
        .oneshot(
            Request::builder()
                .uri("/")
                .header("x-request-id", "bad id with spaces")
                .body(Body::empty())
                .expect("request"),
        )
        .await
        .expect("router must answer");
    let replacement = replaced
        .headers()
        .get("x-request-id")
        .and_then(|value| value.to_str().ok())
        .expect("identity header must echo");
    assert_ne!(replacement, "bad id with spaces");
    assert!(Uuid::parse_str(replacement).is_ok());

    println!("✅ IDENTITY: Incoming identity policy certified.");
}

/**
 * CERTIFICACIÓN: La materia prima de ISBN rechazada responde 400 con
 * la regla violada textual y forma '{error, type}'.
 */
#[tokio::test]
async fn certify_validation_fault_mapping() {
    let response = probe_router()
        .oneshot(
            Request::builder()
                .uri("/search?isbn=12345")
                .body(Body::empty())
                .expect("request"),
        )
        .await
        .expect("router must answer");

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let raw_body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("body must collect");
    let payload: serde_json::Value = serde_json::from_slice(&raw_body).expect("JSON shape");

    assert_eq!(payload["type"], "validation");
    assert!(
        payload["error"].as_str().unwrap_or("").contains("length"),
        "the violated rule must surface verbatim"
    );

    println!("✅ IDENTITY: Validation fault mapping certified.");
}

/**
 * CERTIFICACIÓN: El sondeo con searchId fuera del formato UUID se
 * rechaza sin tocar la bóveda.
 */
#[tokio::test]
async fn certify_poll_uuid_hardening() {
    let response = probe_router()
        .oneshot(
            Request::builder()
                .uri("/search/not-a-uuid")
                .header(CONTENT_TYPE, "application/json")
                .body(Body::empty())
                .expect("request"),
        )
        .await
        .expect("router must answer");

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    println!("✅ IDENTITY: Poll UUID hardening certified.");
}
