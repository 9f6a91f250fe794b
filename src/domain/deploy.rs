//! Mock deployment: step-local settings and the timer-driven monitor.
//!
//! Nothing here touches a chain. The monitor is a cosmetic finite-state
//! machine `Pending -> Deploying -> Completed` driven by two fixed delays
//! measured from the instant the run started. Leaving the monitor step drops
//! the run, which is the only cancellation path; a dropped run can no longer
//! mutate anything.

use std::fmt;
use std::time::Duration;

use strum_macros::EnumIter;

use crate::config::{
    COMPLETED_AFTER, DEPLOYING_AFTER, PLACEHOLDER_CONTRACT_ADDRESS, PLACEHOLDER_TX_HASH,
};
use crate::utils::app_time::{AppInstant, now};

#[derive(Copy, Clone, Debug, PartialEq, Eq, Default, EnumIter)]
pub enum GasStrategy {
    #[default]
    Standard,
    Fast,
    Custom,
}

impl fmt::Display for GasStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            GasStrategy::Standard => "Standard",
            GasStrategy::Fast => "Fast",
            GasStrategy::Custom => "Custom",
        };
        write!(f, "{}", label)
    }
}

/// Local selections on the settings step. Defaults are always valid and
/// "Deploy" always succeeds, so there is no validation here.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DeploySettings {
    pub network_id: String,
    pub owner_address: String,
    pub gas_strategy: GasStrategy,
    pub front_run_protection: bool,
}

impl DeploySettings {
    pub fn for_network(network_id: &str) -> Self {
        Self {
            network_id: network_id.to_string(),
            owner_address: String::new(),
            gas_strategy: GasStrategy::default(),
            front_run_protection: true,
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum DeployPhase {
    Pending,
    Deploying,
    Completed,
}

impl fmt::Display for DeployPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            DeployPhase::Pending => "PENDING",
            DeployPhase::Deploying => "DEPLOYING",
            DeployPhase::Completed => "COMPLETED",
        };
        write!(f, "{}", label)
    }
}

impl DeployPhase {
    /// Phase as a pure function of time since the run started.
    pub fn at(elapsed: Duration) -> Self {
        if elapsed >= COMPLETED_AFTER {
            DeployPhase::Completed
        } else if elapsed >= DEPLOYING_AFTER {
            DeployPhase::Deploying
        } else {
            DeployPhase::Pending
        }
    }
}

/// Illustrative output captured when a run completes; shown on the dashboard.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DeploymentRecord {
    pub contract_address: String,
    pub tx_hash: String,
    pub network_name: String,
}

/// One simulated deployment, started on entering the monitor step.
#[derive(Clone, Debug)]
pub struct DeploymentRun {
    started_at: AppInstant,
    phase: DeployPhase,
    pub network_name: String,
}

impl DeploymentRun {
    pub fn start(network_name: String) -> Self {
        Self {
            started_at: now(),
            phase: DeployPhase::Pending,
            network_name,
        }
    }

    pub fn phase(&self) -> DeployPhase {
        self.phase
    }

    pub fn is_completed(&self) -> bool {
        self.phase == DeployPhase::Completed
    }

    /// Advances the phase monotonically from elapsed wall time. Returns the
    /// new phase when a transition occurred.
    pub fn tick(&mut self) -> Option<DeployPhase> {
        let next = DeployPhase::at(self.started_at.elapsed());
        if next > self.phase {
            self.phase = next;
            Some(next)
        } else {
            None
        }
    }

    /// The placeholder record for a completed run.
    pub fn record(&self) -> DeploymentRecord {
        DeploymentRecord {
            contract_address: PLACEHOLDER_CONTRACT_ADDRESS.to_string(),
            tx_hash: PLACEHOLDER_TX_HASH.to_string(),
            network_name: self.network_name.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_phase_thresholds() {
        assert_eq!(DeployPhase::at(Duration::ZERO), DeployPhase::Pending);
        assert_eq!(
            DeployPhase::at(DEPLOYING_AFTER - Duration::from_millis(1)),
            DeployPhase::Pending
        );
        assert_eq!(DeployPhase::at(DEPLOYING_AFTER), DeployPhase::Deploying);
        assert_eq!(
            DeployPhase::at(COMPLETED_AFTER - Duration::from_millis(1)),
            DeployPhase::Deploying
        );
        assert_eq!(DeployPhase::at(COMPLETED_AFTER), DeployPhase::Completed);
    }

    #[test]
    fn test_fresh_run_stays_pending_before_first_delay() {
        // Mount-then-immediate-tick: no transition fires, so dropping the run
        // here mutates nothing outside it.
        let mut run = DeploymentRun::start("Ethereum Mainnet".to_string());
        assert_eq!(run.phase(), DeployPhase::Pending);
        assert_eq!(run.tick(), None);
        assert!(!run.is_completed());
        drop(run);
    }

    #[test]
    fn test_record_carries_network_and_placeholders() {
        let run = DeploymentRun::start("Sepolia Testnet".to_string());
        let record = run.record();
        assert_eq!(record.network_name, "Sepolia Testnet");
        assert!(record.contract_address.starts_with("0x"));
        assert!(record.tx_hash.starts_with("0x"));
    }

    #[test]
    fn test_default_settings() {
        let settings = DeploySettings::for_network("eth-mainnet");
        assert_eq!(settings.gas_strategy, GasStrategy::Standard);
        assert!(settings.front_run_protection);
        assert!(settings.owner_address.is_empty());
    }
}
