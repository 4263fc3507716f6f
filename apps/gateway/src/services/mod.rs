// [apps/gateway/src/services/mod.rs]
/*!
 * =================================================================
 * APARATO: SERVICE ORCHESTRATION HUB (V6.0)
 * CLASIFICACIÓN: APPLICATION SERVICES (ESTRATO L4)
 * RESPONSABILIDAD: EXPOSICIÓN NOMINAL DE DAEMONS DE MANTENIMIENTO
 * =================================================================
 */

pub mod vault_sweeper;

pub use vault_sweeper::spawn_vault_sweeper;
