//! Debugging feature flags.
//!
//! Toggle individual diagnostics here; keep the noisy ones `false` by default
//! so release builds remain quiet.

/// Emit UI interaction logs (step changes, form commits, manual actions).
pub const PRINT_UI_INTERACTIONS: bool = true;

/// Emit the assembled prompt and raw response body for AI requests.
pub const PRINT_AI_TRAFFIC: bool = false;

/// Emit deployment monitor phase transitions.
pub const PRINT_DEPLOY_PHASES: bool = false;
