/// A closed range of reals, used to bound the accepted ray parameter `t`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Interval {
    pub min: f64,
    pub max: f64,
}

impl Default for Interval {
    fn default() -> Self {
        Interval::EMPTY
    }
}

impl Interval {
    pub const EMPTY: Interval = Interval {
        min: f64::INFINITY,
        max: f64::NEG_INFINITY,
    };

    pub const UNIVERSE: Interval = Interval {
        min: f64::NEG_INFINITY,
        max: f64::INFINITY,
    };

    pub fn new(min: f64, max: f64) -> Interval {
        Interval { min, max }
    }

    pub fn size(&self) -> f64 {
        self.max - self.min
    }

    /// Inclusive on both ends.
    pub fn contains(&self, x: f64) -> bool {
        self.min <= x && x <= self.max
    }

    /// Exclusive on both ends.
    pub fn surrounds(&self, x: f64) -> bool {
        self.min < x && x < self.max
    }

    pub fn clamp(&self, x: f64) -> f64 {
        if x < self.min {
            self.min
        } else if x > self.max {
            self.max
        } else {
            x
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn contains_includes_bounds() {
        let interval = Interval::new(0.0, 1.0);
        assert!(interval.contains(0.0));
        assert!(interval.contains(1.0));
        assert!(interval.contains(0.5));
        assert!(!interval.contains(-0.001));
        assert!(!interval.contains(1.001));
    }

    #[test]
    fn surrounds_excludes_bounds() {
        let interval = Interval::new(0.0, 1.0);
        assert!(!interval.surrounds(0.0));
        assert!(!interval.surrounds(1.0));
        assert!(interval.surrounds(0.5));
    }

    #[test]
    fn clamp_saturates() {
        let interval = Interval::new(0.0, 0.999);
        assert_eq!(interval.clamp(-3.0), 0.0);
        assert_eq!(interval.clamp(2.0), 0.999);
        assert_eq!(interval.clamp(0.25), 0.25);
    }

    #[test]
    fn empty_and_universe() {
        assert!(!Interval::EMPTY.contains(0.0));
        assert!(Interval::UNIVERSE.contains(1e300));
        assert_eq!(Interval::new(2.0, 5.0).size(), 3.0);
        assert!(Interval::EMPTY.size() < 0.0);
    }
}
