use serde::Serialize;
use std::fmt;

/// Weight of a directed edge, or an accumulated path distance.
///
/// Carries the sentinel `Weight::INFINITE` representing "no edge between
/// this pair" and "destination unreachable". Edge weights are validated to
/// be finite and non-negative at insertion, so arithmetic on stored weights
/// never produces NaN.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize)]
#[serde(transparent)]
pub struct Weight(f64);

impl Weight {
    pub const ZERO: Weight = Weight(0.0);
    pub const INFINITE: Weight = Weight(f64::INFINITY);

    pub fn new(value: f64) -> Self {
        Weight(value)
    }

    pub fn value(&self) -> f64 {
        self.0
    }

    pub fn is_finite(&self) -> bool {
        self.0.is_finite()
    }

    /// Nearest-integer rendering used by the targeted shortest-path query.
    /// The sentinel passes through unchanged.
    pub fn rounded(&self) -> Weight {
        if self.0.is_finite() {
            Weight(self.0.round())
        } else {
            *self
        }
    }
}

impl Default for Weight {
    fn default() -> Self {
        Weight::ZERO
    }
}

impl std::ops::Add for Weight {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Weight(self.0 + other.0)
    }
}

impl From<f64> for Weight {
    fn from(value: f64) -> Self {
        Weight(value)
    }
}

impl fmt::Display for Weight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_weight_addition() {
        let sum = Weight::new(2.0) + Weight::new(6.0);
        assert_eq!(sum.value(), 8.0);
    }

    #[test]
    fn test_weight_fractional_addition() {
        let sum = Weight::new(1.5) + Weight::new(2.25);
        assert_eq!(sum.value(), 3.75);
    }

    #[test]
    fn test_weight_infinite_sentinel() {
        assert!(!Weight::INFINITE.is_finite());
        assert!(Weight::new(1e12) < Weight::INFINITE);
        assert!((Weight::INFINITE + Weight::new(1.0)) == Weight::INFINITE);
    }

    #[test]
    fn test_weight_rounded() {
        assert_eq!(Weight::new(7.6).rounded().value(), 8.0);
        assert_eq!(Weight::new(7.4).rounded().value(), 7.0);
        assert_eq!(Weight::INFINITE.rounded(), Weight::INFINITE);
    }

    #[test]
    fn test_weight_display() {
        assert_eq!(Weight::new(8.0).to_string(), "8");
        assert_eq!(Weight::new(2.5).to_string(), "2.5");
        assert_eq!(Weight::INFINITE.to_string(), "inf");
    }
}
