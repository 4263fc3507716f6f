// [apps/gateway/src/handlers/mod.rs]
/*!
 * =================================================================
 * APARATO: HANDLER ORCHESTRATION HUB (V8.0 - COMPLETE MATRIX)
 * CLASIFICACIÓN: APPLICATION ADAPTERS (ESTRATO L4)
 * RESPONSABILIDAD: EXPOSICIÓN NOMINAL DE PUNTOS DE ENTRADA
 *
 * # Topología de Módulos:
 * - health: Liveness del proceso y salud por sistema federado.
 * - search: Búsqueda síncrona, asíncrona y sondeo por searchId.
 * - visual: Tarjeta de identidad del servicio (raíz).
 * =================================================================
 */

pub mod health;
pub mod search;
pub mod visual;
