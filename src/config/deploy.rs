//! Timings and placeholder output for the simulated deployment.

use std::time::Duration;

/// Delay from entering the monitor until the run shows "deploying".
pub const DEPLOYING_AFTER: Duration = Duration::from_secs(2);

/// Delay from entering the monitor until the run shows "completed".
pub const COMPLETED_AFTER: Duration = Duration::from_secs(6);

/// How often the monitor view asks for a repaint while a run is active.
pub const MONITOR_REPAINT_INTERVAL: Duration = Duration::from_millis(250);

// The monitor never submits a transaction; these are the illustrative
// values rendered once the run completes.
pub const PLACEHOLDER_CONTRACT_ADDRESS: &str = "0x742d35Cc6634C0532925a3b844Bc454e4438f44e";
pub const PLACEHOLDER_TX_HASH: &str = "0x9f31a2e8b54c7d90e1f3a6b8c2d4e5f60718293a4b5c6d7e8f90a1b2c3d4e6b2";
