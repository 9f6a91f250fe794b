// AI assist: one request per user-initiated "generate" action, returning a
// structured tokenomics suggestion that is overlaid (never authoritative)
// onto the session draft.
pub mod client;
pub mod proposal;

pub use client::{AiConfig, AiError};
pub use proposal::{AllocationBreakdown, TokenomicsProposal, VestingRecommendations};
