//! The six-step wizard controller.
//!
//! A step may only be entered from its immediate neighbour: `advance` and
//! `retreat` each move exactly one step and clamp at the ends. There is no
//! terminal state; `Dashboard` simply has no forward transition.

use std::fmt;
use strum_macros::EnumIter;

#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Default, EnumIter)]
pub enum WizardStep {
    #[default]
    Definition,
    Allocation,
    Contract,
    Settings,
    Deploy,
    Dashboard,
}

impl fmt::Display for WizardStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            WizardStep::Definition => "Definition",
            WizardStep::Allocation => "Tokenomics",
            WizardStep::Contract => "Contract",
            WizardStep::Settings => "Settings",
            WizardStep::Deploy => "Deploy",
            WizardStep::Dashboard => "Dashboard",
        };
        write!(f, "{}", label)
    }
}

impl WizardStep {
    pub const COUNT: usize = 6;

    pub fn index(&self) -> usize {
        *self as usize
    }

    fn from_index(index: usize) -> Self {
        match index {
            0 => WizardStep::Definition,
            1 => WizardStep::Allocation,
            2 => WizardStep::Contract,
            3 => WizardStep::Settings,
            4 => WizardStep::Deploy,
            _ => WizardStep::Dashboard,
        }
    }
}

/// Holds the current step and enforces one-step-at-a-time navigation.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Wizard {
    current: WizardStep,
}

impl Wizard {
    pub fn current(&self) -> WizardStep {
        self.current
    }

    /// Move forward one step; no-op at the dashboard.
    pub fn advance(&mut self) {
        if self.current.index() + 1 < WizardStep::COUNT {
            self.current = WizardStep::from_index(self.current.index() + 1);
        }
    }

    /// Move back one step; no-op at the first step.
    pub fn retreat(&mut self) {
        if self.current.index() > 0 {
            self.current = WizardStep::from_index(self.current.index() - 1);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_step_is_definition() {
        assert_eq!(Wizard::default().current(), WizardStep::Definition);
    }

    #[test]
    fn test_advance_clamps_at_dashboard() {
        let mut wizard = Wizard::default();
        for _ in 0..20 {
            wizard.advance();
        }
        assert_eq!(wizard.current(), WizardStep::Dashboard);
    }

    #[test]
    fn test_retreat_clamps_at_definition() {
        let mut wizard = Wizard::default();
        wizard.retreat();
        assert_eq!(wizard.current(), WizardStep::Definition);

        wizard.advance();
        wizard.retreat();
        wizard.retreat();
        assert_eq!(wizard.current(), WizardStep::Definition);
    }

    #[test]
    fn test_any_sequence_stays_in_bounds_and_moves_one_step() {
        // Pseudo-random walk: the step index must stay in [0, 5] and never
        // jump by more than one per call.
        let mut wizard = Wizard::default();
        let mut prev = wizard.current().index();
        for i in 0..200 {
            if (i * 7 + 3) % 5 < 3 {
                wizard.advance();
            } else {
                wizard.retreat();
            }
            let cur = wizard.current().index();
            assert!(cur < WizardStep::COUNT);
            assert!(cur.abs_diff(prev) <= 1);
            prev = cur;
        }
    }

    #[test]
    fn test_step_order_matches_flow() {
        let mut wizard = Wizard::default();
        let expected = [
            WizardStep::Definition,
            WizardStep::Allocation,
            WizardStep::Contract,
            WizardStep::Settings,
            WizardStep::Deploy,
            WizardStep::Dashboard,
        ];
        for (i, step) in expected.iter().enumerate() {
            assert_eq!(wizard.current(), *step);
            assert_eq!(wizard.current().index(), i);
            wizard.advance();
        }
    }
}
