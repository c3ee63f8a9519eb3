//! Board-pattern features scored by the evaluator.
//!
//! Only the names and their order are defined here; counting patterns on a
//! real board is the engine's job.

use std::fmt;

/// Number of features in a board vector and of weights in an export.
pub const FEATURE_COUNT: usize = 6;

/// A counted Gomoku pattern. The discriminant is the position in the
/// feature vector.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Feature {
    /// Five in a row.
    Five = 0,
    /// Four with both ends open.
    Live4 = 1,
    /// Four with one end blocked.
    Block4 = 2,
    /// Three with both ends open.
    Live3 = 3,
    /// Three with one end blocked.
    Block3 = 4,
    /// Two with both ends open.
    Live2 = 5,
}

impl Feature {
    /// All features in vector order.
    pub const ALL: [Feature; FEATURE_COUNT] = [
        Feature::Five,
        Feature::Live4,
        Feature::Block4,
        Feature::Live3,
        Feature::Block3,
        Feature::Live2,
    ];

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn name(self) -> &'static str {
        match self {
            Feature::Five => "five",
            Feature::Live4 => "live4",
            Feature::Block4 => "block4",
            Feature::Live3 => "live3",
            Feature::Block3 => "block3",
            Feature::Live2 => "live2",
        }
    }
}

impl fmt::Display for Feature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_feature_order() {
        let names: Vec<&str> = Feature::ALL.iter().map(|f| f.name()).collect();
        assert_eq!(
            names,
            vec!["five", "live4", "block4", "live3", "block3", "live2"]
        );
    }

    #[test]
    fn test_index_matches_position() {
        for (i, feature) in Feature::ALL.iter().enumerate() {
            assert_eq!(feature.index(), i);
        }
    }

    #[test]
    fn test_display_uses_name() {
        assert_eq!(Feature::Block3.to_string(), "block3");
    }
}
