use serde::{Deserialize, Serialize};

/// One level of the vertical atmosphere, altitude relative to the
/// reference elevation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProfileSample {
    pub relative_altitude_m: f32,
    pub temperature_c: f32,
}

impl ProfileSample {
    #[must_use]
    pub fn new(relative_altitude_m: f32, temperature_c: f32) -> Self {
        Self {
            relative_altitude_m,
            temperature_c,
        }
    }
}

/// Everything one displayed hour needs to plot its profile. Samples are
/// ordered by non-decreasing altitude; the snow fall limit, when the
/// forecast supplies one, is in absolute metres above sea level.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VisualizationInput {
    pub profile: Vec<ProfileSample>,
    pub reference_elevation_m: f32,
    pub snow_fall_limit_m: Option<f32>,
}

impl VisualizationInput {
    #[must_use]
    pub fn new(
        profile: Vec<ProfileSample>,
        reference_elevation_m: f32,
        snow_fall_limit_m: Option<f32>,
    ) -> Self {
        Self {
            profile,
            reference_elevation_m,
            snow_fall_limit_m,
        }
    }

    /// Snow fall limit as an offset from the reference elevation.
    #[must_use]
    pub fn snow_fall_limit_relative(&self) -> Option<f32> {
        self.snow_fall_limit_m
            .map(|asl| asl - self.reference_elevation_m)
    }
}
