pub mod allocation;
pub mod deploy;
pub mod network;
pub mod token;

pub use allocation::{AllocationBook, AllocationCategory, AllocationEntry, AllocationReject};
pub use deploy::{DeployPhase, DeploySettings, DeploymentRecord, DeploymentRun, GasStrategy};
pub use network::{NetworkBook, NetworkOption};
pub use token::{DraftField, DraftStage, TokenDraft, TokenFeatures, TokenType};
