use std::sync::Arc;

use basera_core::payment::PaymentGateway;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: basera_db::DbPool,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// Payment authorization capability. Production wires the simulator;
    /// tests inject deterministic approve/decline gateways.
    pub payment_gateway: Arc<dyn PaymentGateway>,
}
