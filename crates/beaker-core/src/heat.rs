//! Radius-to-heat-class bucketing.
//!
//! The classifier is pure and shared: both the interaction rules and the
//! statistics subsystem classify through the same instance, so they can
//! never disagree about which ecological band a body belongs to.

use crate::id::HeatClass;

/// Partitions `[min_radius, max_radius]` into equal-width heat bands.
///
/// Radii at or below `min_radius` map to bucket 0; radii at or above
/// `max_radius` map to the last bucket; everything else maps to the band
/// containing it. Classification is monotonic non-decreasing in radius.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HeatClassifier {
    min_radius: f64,
    max_radius: f64,
    buckets: usize,
}

impl HeatClassifier {
    /// Create a classifier over `[min_radius, max_radius]` with `buckets`
    /// equal-width bands.
    ///
    /// Callers are expected to have validated the inputs via
    /// [`WorldConfig::validate()`](crate::config::WorldConfig::validate);
    /// a degenerate range or zero bucket count is a construction bug.
    pub fn new(min_radius: f64, max_radius: f64, buckets: usize) -> Self {
        debug_assert!(buckets > 0, "heat classifier needs at least one bucket");
        debug_assert!(min_radius < max_radius, "empty radius range");
        Self {
            min_radius,
            max_radius,
            buckets,
        }
    }

    /// Number of heat buckets.
    pub fn buckets(&self) -> usize {
        self.buckets
    }

    /// Map a radius to its heat class.
    pub fn classify(&self, radius: f64) -> HeatClass {
        if radius <= self.min_radius {
            return HeatClass(0);
        }
        if radius >= self.max_radius {
            return HeatClass(self.buckets - 1);
        }
        let span = self.max_radius - self.min_radius;
        let band = ((radius - self.min_radius) / span * self.buckets as f64) as usize;
        // A radius just below max_radius can land exactly on the bucket
        // count after the float multiply.
        HeatClass(band.min(self.buckets - 1))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn classifier() -> HeatClassifier {
        HeatClassifier::new(4.0, 8.0, 6)
    }

    #[test]
    fn min_radius_maps_to_first_bucket() {
        assert_eq!(classifier().classify(4.0), HeatClass(0));
        assert_eq!(classifier().classify(1.0), HeatClass(0));
    }

    #[test]
    fn max_radius_maps_to_last_bucket() {
        assert_eq!(classifier().classify(8.0), HeatClass(5));
        assert_eq!(classifier().classify(100.0), HeatClass(5));
    }

    #[test]
    fn interior_radii_map_to_containing_band() {
        let c = classifier();
        // Bands are 2/3 wide: (4, 4.667], (4.667, 5.333], ...
        assert_eq!(c.classify(4.5), HeatClass(0));
        assert_eq!(c.classify(5.0), HeatClass(1));
        assert_eq!(c.classify(6.0), HeatClass(3));
        assert_eq!(c.classify(7.9), HeatClass(5));
    }

    #[test]
    fn single_bucket_classifier_is_constant() {
        let c = HeatClassifier::new(1.0, 2.0, 1);
        assert_eq!(c.classify(0.5), HeatClass(0));
        assert_eq!(c.classify(1.5), HeatClass(0));
        assert_eq!(c.classify(3.0), HeatClass(0));
    }

    proptest! {
        #[test]
        fn classify_is_monotonic(a in 4.0f64..8.0, b in 4.0f64..8.0) {
            let c = classifier();
            let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
            prop_assert!(c.classify(lo) <= c.classify(hi));
        }

        #[test]
        fn classify_is_in_range(r in -10.0f64..20.0) {
            let c = classifier();
            prop_assert!(c.classify(r).0 < c.buckets());
        }
    }
}
