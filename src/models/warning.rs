//! Budget warning tiers
//!
//! Both tiers are informational; nothing blocks spending past the budget.

use serde::Serialize;
use std::fmt;

use super::money::Money;

/// Warning signal raised after an expense is added
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum WarningLevel {
    Normal,
    Elevated,
    Critical,
    Exceeded,
}

impl WarningLevel {
    /// Derive the level from the remaining budget and percentage used
    pub fn evaluate(remaining: Money, used_percentage: f64) -> Self {
        if remaining.is_negative() {
            Self::Exceeded
        } else if used_percentage >= 90.0 {
            Self::Critical
        } else if used_percentage >= 75.0 {
            Self::Elevated
        } else {
            Self::Normal
        }
    }

    /// User-facing notice for this level, if any
    pub fn message(&self) -> Option<&'static str> {
        match self {
            Self::Normal => None,
            Self::Elevated => Some("Info: You have used 75% of your budget"),
            Self::Critical => Some("Warning: You are close to your budget limit!"),
            Self::Exceeded => Some("Warning: You have exceeded your monthly budget!"),
        }
    }
}

impl fmt::Display for WarningLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Normal => write!(f, "Normal"),
            Self::Elevated => write!(f, "Elevated"),
            Self::Critical => write!(f, "Critical"),
            Self::Exceeded => write!(f, "Exceeded"),
        }
    }
}

/// Display tier of the overview (progress bar and cards)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BudgetHealth {
    Healthy,
    Warning,
    Danger,
}

impl BudgetHealth {
    pub fn from_percentage(used_percentage: f64) -> Self {
        if used_percentage >= 100.0 {
            Self::Danger
        } else if used_percentage >= 80.0 {
            Self::Warning
        } else {
            Self::Healthy
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_levels() {
        let plenty = Money::from_cents(5000);
        assert_eq!(WarningLevel::evaluate(plenty, 10.0), WarningLevel::Normal);
        assert_eq!(WarningLevel::evaluate(plenty, 74.99), WarningLevel::Normal);
        assert_eq!(WarningLevel::evaluate(plenty, 75.0), WarningLevel::Elevated);
        assert_eq!(WarningLevel::evaluate(plenty, 90.0), WarningLevel::Critical);
        assert_eq!(WarningLevel::evaluate(Money::zero(), 100.0), WarningLevel::Critical);
        assert_eq!(
            WarningLevel::evaluate(Money::from_cents(-1), 100.01),
            WarningLevel::Exceeded
        );
    }

    #[test]
    fn test_messages() {
        assert!(WarningLevel::Normal.message().is_none());
        assert!(WarningLevel::Exceeded.message().unwrap().contains("exceeded"));
    }

    #[test]
    fn test_health_tiers() {
        assert_eq!(BudgetHealth::from_percentage(79.9), BudgetHealth::Healthy);
        assert_eq!(BudgetHealth::from_percentage(80.0), BudgetHealth::Warning);
        assert_eq!(BudgetHealth::from_percentage(100.0), BudgetHealth::Danger);
    }
}
