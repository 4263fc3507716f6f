// [apps/gateway/src/lib.rs]
/*!
 * =================================================================
 * APARATO: GATEWAY LIBRARY ROOT (V10.0 - SOVEREIGN AUTHORITY)
 * CLASIFICACIÓN: CRATE ROOT (ESTRATO L4)
 * RESPONSABILIDAD: DEFINICIÓN SUPREMA DEL ÁRBOL DE MÓDULOS
 *
 * VISION HIPER-HOLÍSTICA 2026:
 * 1. MODULE HIERARCHY HARDENING: Establece la autoridad única de
 *    módulos, permitiendo que 'crate::' sea resuelto de forma
 *    determinista tanto en la librería como en el binario.
 * 2. PUBLIC INTERFACE: Expone 'prelude' para facilitar la ignición
 *    del Kernel desde el binario 'main.rs'.
 * =================================================================
 */

// --- ESTRATO DE TRANSPORTE Y ACCIÓN ---
/// Catálogo de fallos HTTP y su proyección a códigos de estado.
pub mod errors;
/// Adaptadores de entrada para ráfagas HTTP.
pub mod handlers;
/// Núcleo de mando para la ignición de servicios.
pub mod kernel;
/// Guardias perimetrales: identidad de petición y rate-limit.
pub mod middleware;
/// Matriz de enrutamiento soberana.
pub mod routes;

// --- ESTRATO DE ESTADO Y SERVICIOS ---
/// Daemons de mantenimiento (barrido de bóveda).
pub mod services;
/// Estado compartido del gateway.
pub mod state;

/// Exportaciones nominales para la ignición del binario.
pub mod prelude {
    pub use crate::kernel::GatewayKernel;
}
