//! Strength categories
//!
//! Five mutually exclusive tiers plus a neutral fallback for levels outside
//! the service contract.

use serde::Serialize;
use std::fmt;

/// Visual category of a strength level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum StrengthCategory {
    /// Level 1
    VeryWeak,
    /// Level 2
    Weak,
    /// Level 3
    Good,
    /// Level 4
    Strong,
    /// Level 5
    VeryStrong,
    /// Any other level
    Unknown,
}

impl StrengthCategory {
    /// The five categories the service may select, in level order
    pub const DEFINED: [Self; 5] = [
        Self::VeryWeak,
        Self::Weak,
        Self::Good,
        Self::Strong,
        Self::VeryStrong,
    ];

    /// Map a service strength level
    #[inline]
    #[must_use]
    pub fn from_level(level: i64) -> Self {
        match level {
            1 => Self::VeryWeak,
            2 => Self::Weak,
            3 => Self::Good,
            4 => Self::Strong,
            5 => Self::VeryStrong,
            _ => Self::Unknown,
        }
    }

    /// Category identifier
    #[inline]
    #[must_use]
    pub fn id(self) -> &'static str {
        match self {
            Self::VeryWeak => "very-weak",
            Self::Weak => "weak",
            Self::Good => "good",
            Self::Strong => "strong",
            Self::VeryStrong => "very-strong",
            Self::Unknown => "unknown",
        }
    }

    /// Styling class applied to the strength label
    #[inline]
    #[must_use]
    pub fn css_class(self) -> &'static str {
        match self {
            Self::VeryWeak => "strength-very-weak",
            Self::Weak => "strength-weak",
            Self::Good => "strength-good",
            Self::Strong => "strength-strong",
            Self::VeryStrong => "strength-very-strong",
            Self::Unknown => "strength-unknown",
        }
    }

    /// Whether this is one of the five defined tiers
    #[inline]
    #[must_use]
    pub fn is_defined(self) -> bool {
        !matches!(self, Self::Unknown)
    }
}

impl fmt::Display for StrengthCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn levels_map_to_table() {
        assert_eq!(StrengthCategory::from_level(1), StrengthCategory::VeryWeak);
        assert_eq!(StrengthCategory::from_level(2), StrengthCategory::Weak);
        assert_eq!(StrengthCategory::from_level(3), StrengthCategory::Good);
        assert_eq!(StrengthCategory::from_level(4), StrengthCategory::Strong);
        assert_eq!(StrengthCategory::from_level(5), StrengthCategory::VeryStrong);
    }

    #[test]
    fn classes_are_distinct() {
        let mut classes: Vec<_> = StrengthCategory::DEFINED
            .iter()
            .map(|c| c.css_class())
            .collect();
        classes.sort_unstable();
        classes.dedup();
        assert_eq!(classes.len(), 5);
    }

    proptest! {
        #[test]
        fn defined_levels_select_defined_category(level in 1i64..=5) {
            let category = StrengthCategory::from_level(level);
            prop_assert!(category.is_defined());
            prop_assert_eq!(category, StrengthCategory::DEFINED[(level - 1) as usize]);
            prop_assert_eq!(category, StrengthCategory::from_level(level));
        }

        #[test]
        fn other_levels_fail_closed(
            level in any::<i64>().prop_filter("outside 1..=5", |l| !(1..=5).contains(l))
        ) {
            prop_assert_eq!(StrengthCategory::from_level(level), StrengthCategory::Unknown);
        }
    }
}
