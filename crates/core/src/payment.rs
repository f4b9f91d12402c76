//! Payment authorization capability for the premium upgrade flow.
//!
//! The marketplace never talks to a real processor; authorization is a
//! trait so the HTTP layer can inject the simulator in production and a
//! deterministic gateway in tests.

use std::time::Duration;

use async_trait::async_trait;
use rand::Rng;

/// External payment authorization.
///
/// Returns `true` when the charge is approved. Declines are not errors at
/// this level; the caller decides how a declined authorization surfaces.
#[async_trait]
pub trait PaymentGateway: Send + Sync {
    async fn authorize(&self, amount: i32, method: &str) -> bool;
}

/// Simulated gateway: waits out a processing delay, then approves with a
/// fixed probability.
///
/// `success_rate` of 1.0 or 0.0 makes the outcome deterministic, which is
/// what the integration tests rely on.
#[derive(Debug, Clone)]
pub struct SimulatedGateway {
    success_rate: f64,
    delay: Duration,
}

impl SimulatedGateway {
    pub fn new(success_rate: f64, delay: Duration) -> Self {
        Self {
            success_rate: success_rate.clamp(0.0, 1.0),
            delay,
        }
    }

    /// Always-approve gateway with no delay.
    pub fn always_approve() -> Self {
        Self::new(1.0, Duration::ZERO)
    }

    /// Always-decline gateway with no delay.
    pub fn always_decline() -> Self {
        Self::new(0.0, Duration::ZERO)
    }
}

impl Default for SimulatedGateway {
    /// Production defaults matching the original simulator: a 2-second
    /// processing delay and a 90% approval rate.
    fn default() -> Self {
        Self::new(0.9, Duration::from_secs(2))
    }
}

#[async_trait]
impl PaymentGateway for SimulatedGateway {
    async fn authorize(&self, _amount: i32, _method: &str) -> bool {
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }
        rand::rng().random_bool(self.success_rate)
    }
}
