use crate::domain::profile::ProfileSample;

/// Locates the freezing level: the lowest altitude where the temperature
/// profile crosses 0 °C, linearly interpolated between the two bracketing
/// samples. Returns `None` when every sample is on the same side of zero.
/// Higher crossings from temperature inversions are ignored; only the
/// first one carries the marker.
#[must_use]
pub fn zero_crossing(profile: &[ProfileSample]) -> Option<f32> {
    for pair in profile.windows(2) {
        let (lower, upper) = (pair[0], pair[1]);
        let crosses = (lower.temperature_c >= 0.0 && upper.temperature_c < 0.0)
            || (lower.temperature_c < 0.0 && upper.temperature_c >= 0.0);
        if crosses {
            let fraction =
                (0.0 - lower.temperature_c) / (upper.temperature_c - lower.temperature_c);
            return Some(
                lower.relative_altitude_m
                    + fraction * (upper.relative_altitude_m - lower.relative_altitude_m),
            );
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn midpoint_crossing() {
        let profile = [
            ProfileSample::new(0.0, 2.0),
            ProfileSample::new(500.0, -2.0),
        ];
        assert_eq!(zero_crossing(&profile), Some(250.0));
    }

    #[test]
    fn all_positive_has_no_crossing() {
        let profile = [
            ProfileSample::new(0.0, 5.0),
            ProfileSample::new(1000.0, 1.0),
        ];
        assert_eq!(zero_crossing(&profile), None);
    }

    #[test]
    fn all_negative_has_no_crossing() {
        let profile = [
            ProfileSample::new(0.0, -1.0),
            ProfileSample::new(1000.0, -8.0),
        ];
        assert_eq!(zero_crossing(&profile), None);
    }

    #[test]
    fn sample_exactly_at_zero_anchors_the_crossing() {
        let profile = [
            ProfileSample::new(300.0, 0.0),
            ProfileSample::new(800.0, -3.0),
        ];
        assert_eq!(zero_crossing(&profile), Some(300.0));
    }

    #[test]
    fn only_first_crossing_is_reported() {
        // Inversion: warm layer aloft crosses zero twice.
        let profile = [
            ProfileSample::new(0.0, -1.0),
            ProfileSample::new(500.0, 1.0),
            ProfileSample::new(1500.0, -2.0),
        ];
        assert_eq!(zero_crossing(&profile), Some(250.0));
    }

    #[test]
    fn empty_and_single_sample() {
        assert_eq!(zero_crossing(&[]), None);
        assert_eq!(zero_crossing(&[ProfileSample::new(0.0, 0.0)]), None);
    }
}
