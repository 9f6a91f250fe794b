//! Configuration module for the token-forge application.

pub mod ai;
pub mod deploy;
pub mod networks;

mod debug; // Private with a public re-export. Forces files to use crate::config::debug flags through one path
pub use debug::*;

// Re-export commonly used items
pub use ai::{GEMINI_API_URL, GEMINI_ENV_KEY, GEMINI_MODEL};
pub use deploy::{
    COMPLETED_AFTER, DEPLOYING_AFTER, MONITOR_REPAINT_INTERVAL, PLACEHOLDER_CONTRACT_ADDRESS,
    PLACEHOLDER_TX_HASH,
};
pub use networks::seed_networks;

/// Default decimals for a fungible token.
pub const DEFAULT_DECIMALS: u8 = 18;

/// Percentage sums are compared against 100 within this tolerance so that
/// AI-proposed breakdowns like 33.3/33.3/33.4 still register as complete.
pub const ALLOCATION_EPSILON: f64 = 1e-6;
