//! Supply allocation entries and the 100% invariant.
//!
//! Percentages are independent of each other; the derived `amount` is fixed
//! at add time from the draft's total supply. The wizard may only proceed
//! past the allocation step once the percentages sum to exactly 100, and an
//! add that would push the running total above 100 is rejected outright.

use std::fmt;

use serde::{Deserialize, Serialize};
use strum_macros::EnumIter;

use crate::config::ALLOCATION_EPSILON;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Default, Serialize, Deserialize, EnumIter)]
pub enum AllocationCategory {
    #[default]
    Team,
    Investors,
    Ecosystem,
    Treasury,
    Advisors,
    Marketing,
    Liquidity,
    StakingRewards,
    Community,
    Airdrop,
}

impl fmt::Display for AllocationCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            AllocationCategory::Team => "Team",
            AllocationCategory::Investors => "Investors",
            AllocationCategory::Ecosystem => "Ecosystem",
            AllocationCategory::Treasury => "Treasury",
            AllocationCategory::Advisors => "Advisors",
            AllocationCategory::Marketing => "Marketing",
            AllocationCategory::Liquidity => "Liquidity",
            AllocationCategory::StakingRewards => "Staking Rewards",
            AllocationCategory::Community => "Community",
            AllocationCategory::Airdrop => "Airdrop",
        };
        write!(f, "{}", label)
    }
}

impl AllocationCategory {
    /// Maps an AI-provided category label (e.g. "team", "TREASURY") onto the
    /// enumeration, normalising case. Unknown labels fall back to Community
    /// so a proposal row is never silently dropped.
    pub fn from_label(label: &str) -> Self {
        match label.trim().to_ascii_lowercase().as_str() {
            "team" => AllocationCategory::Team,
            "investors" => AllocationCategory::Investors,
            "ecosystem" => AllocationCategory::Ecosystem,
            "treasury" => AllocationCategory::Treasury,
            "advisors" => AllocationCategory::Advisors,
            "marketing" => AllocationCategory::Marketing,
            "liquidity" => AllocationCategory::Liquidity,
            "staking rewards" | "staking" => AllocationCategory::StakingRewards,
            "airdrop" => AllocationCategory::Airdrop,
            _ => AllocationCategory::Community,
        }
    }
}

/// One line item of the supply distribution.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AllocationEntry {
    pub category: AllocationCategory,
    pub percentage: f64,
    /// Derived: percentage / 100 × total supply at add time.
    pub amount: f64,
}

/// Why an add was refused. Surfaced as an inline message under the add form;
/// the book itself is never touched by a rejected add.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum AllocationReject {
    NonPositivePercentage,
    ExceedsFullAllocation,
}

impl fmt::Display for AllocationReject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AllocationReject::NonPositivePercentage => {
                write!(f, "Percentage must be greater than 0")
            }
            AllocationReject::ExceedsFullAllocation => {
                write!(f, "Total allocation cannot exceed 100%")
            }
        }
    }
}

/// Ordered collection of allocation entries.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AllocationBook {
    entries: Vec<AllocationEntry>,
}

impl AllocationBook {
    pub fn entries(&self) -> &[AllocationEntry] {
        &self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn total_pct(&self) -> f64 {
        self.entries.iter().map(|e| e.percentage).sum()
    }

    /// True once the percentages sum to exactly 100 (within epsilon); gates
    /// forward navigation out of the allocation step.
    pub fn is_fully_allocated(&self) -> bool {
        (self.total_pct() - 100.0).abs() < ALLOCATION_EPSILON
    }

    /// Appends an entry with its amount derived from `total_supply`.
    pub fn add(
        &mut self,
        category: AllocationCategory,
        percentage: f64,
        total_supply: f64,
    ) -> Result<(), AllocationReject> {
        if percentage <= 0.0 {
            return Err(AllocationReject::NonPositivePercentage);
        }
        if self.total_pct() + percentage > 100.0 + ALLOCATION_EPSILON {
            return Err(AllocationReject::ExceedsFullAllocation);
        }

        self.entries.push(AllocationEntry {
            category,
            percentage,
            amount: percentage / 100.0 * total_supply,
        });
        Ok(())
    }

    /// Synthesizes entries one-for-one from a proposal's category/percentage
    /// pairs. Only runs when the book is empty; the proposal is a suggestion,
    /// so its percentages are taken as-is without the add-time checks.
    pub fn seed(
        &mut self,
        pairs: impl IntoIterator<Item = (AllocationCategory, f64)>,
        total_supply: f64,
    ) -> bool {
        if !self.entries.is_empty() {
            return false;
        }
        for (category, percentage) in pairs {
            self.entries.push(AllocationEntry {
                category,
                percentage,
                amount: percentage / 100.0 * total_supply,
            });
        }
        true
    }

    /// Deletes by position. Remaining entries keep their percentages and
    /// amounts; nothing needs recomputing.
    pub fn remove(&mut self, index: usize) {
        if index < self.entries.len() {
            self.entries.remove(index);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_amount_derived_from_total_supply() {
        let mut book = AllocationBook::default();
        book.add(AllocationCategory::Team, 40.0, 1_000_000.0).unwrap();
        assert_eq!(book.entries()[0].amount, 400_000.0);
        assert_eq!(book.total_pct(), 40.0);
    }

    #[test]
    fn test_non_positive_percentage_rejected() {
        let mut book = AllocationBook::default();
        assert_eq!(
            book.add(AllocationCategory::Team, 0.0, 1_000_000.0),
            Err(AllocationReject::NonPositivePercentage)
        );
        assert_eq!(
            book.add(AllocationCategory::Team, -5.0, 1_000_000.0),
            Err(AllocationReject::NonPositivePercentage)
        );
        assert!(book.is_empty());
    }

    #[test]
    fn test_full_allocation_gates_and_overflow_rejected() {
        let mut book = AllocationBook::default();
        book.add(AllocationCategory::Team, 60.0, 1_000_000.0).unwrap();
        assert!(!book.is_fully_allocated());

        book.add(AllocationCategory::Liquidity, 40.0, 1_000_000.0)
            .unwrap();
        assert!(book.is_fully_allocated());

        // One more entry after the sum reached 100 is refused and the sum
        // stays at 100.
        assert_eq!(
            book.add(AllocationCategory::Marketing, 1.0, 1_000_000.0),
            Err(AllocationReject::ExceedsFullAllocation)
        );
        assert_eq!(book.total_pct(), 100.0);
        assert_eq!(book.entries().len(), 2);
    }

    #[test]
    fn test_partial_overflow_rejected() {
        let mut book = AllocationBook::default();
        book.add(AllocationCategory::Team, 70.0, 100.0).unwrap();
        assert_eq!(
            book.add(AllocationCategory::Treasury, 31.0, 100.0),
            Err(AllocationReject::ExceedsFullAllocation)
        );
        assert_eq!(book.total_pct(), 70.0);
    }

    #[test]
    fn test_remove_by_position_leaves_others_untouched() {
        let mut book = AllocationBook::default();
        book.add(AllocationCategory::Team, 20.0, 1000.0).unwrap();
        book.add(AllocationCategory::Treasury, 30.0, 1000.0).unwrap();
        book.add(AllocationCategory::Liquidity, 10.0, 1000.0).unwrap();

        book.remove(1);
        assert_eq!(book.entries().len(), 2);
        assert_eq!(book.entries()[0].category, AllocationCategory::Team);
        assert_eq!(book.entries()[1].category, AllocationCategory::Liquidity);
        assert_eq!(book.entries()[1].amount, 100.0);

        // Out-of-range removal is a no-op
        book.remove(10);
        assert_eq!(book.entries().len(), 2);
    }

    #[test]
    fn test_seed_only_fills_an_empty_book() {
        let mut book = AllocationBook::default();
        let pairs = [
            (AllocationCategory::Team, 60.0),
            (AllocationCategory::Liquidity, 40.0),
        ];
        assert!(book.seed(pairs, 500_000_000.0));
        assert_eq!(book.entries().len(), 2);
        assert_eq!(book.entries()[0].amount, 300_000_000.0);
        assert!(book.is_fully_allocated());

        // A second proposal must not replace existing entries
        assert!(!book.seed([(AllocationCategory::Airdrop, 100.0)], 1000.0));
        assert_eq!(book.entries().len(), 2);
    }

    #[test]
    fn test_category_label_normalisation() {
        assert_eq!(
            AllocationCategory::from_label("team"),
            AllocationCategory::Team
        );
        assert_eq!(
            AllocationCategory::from_label(" TREASURY "),
            AllocationCategory::Treasury
        );
        assert_eq!(AllocationCategory::Team.to_string(), "Team");
        assert_eq!(
            AllocationCategory::StakingRewards.to_string(),
            "Staking Rewards"
        );
    }
}
