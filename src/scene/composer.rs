#![allow(clippy::cast_precision_loss, clippy::cast_possible_truncation, clippy::cast_sign_loss)]

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::domain::weather::{AmbientSceneInput, LayerKind, precipitation_intensity};
use crate::scene::particles::{ParticlePools, ParticleSpec};

/// Activation for one particle layer. `intensity` is the scene-wide
/// precipitation scalar; `visible_count` is the prefix of the layer's pool
/// the renderer shows.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LayerState {
    pub active: bool,
    pub intensity: f32,
    pub visible_count: usize,
}

impl LayerState {
    pub const INACTIVE: LayerState = LayerState {
        active: false,
        intensity: 0.0,
        visible_count: 0,
    };
}

/// Scene parameters for one composition: gradient/celestial opacities plus
/// per-layer activation. Day and night opacities deliberately do not sum
/// to 1 under overcast skies, where night is forced to full.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AmbientSceneOutput {
    pub day_gradient_opacity: f32,
    pub night_gradient_opacity: f32,
    pub star_opacity: f32,
    pub sun_opacity: f32,
    pub layers: BTreeMap<LayerKind, LayerState>,
}

impl AmbientSceneOutput {
    #[must_use]
    pub fn layer(&self, kind: LayerKind) -> LayerState {
        self.layers.get(&kind).copied().unwrap_or(LayerState::INACTIVE)
    }
}

/// Daylight ramp over the hour of day: zero through the night, a linear
/// sunrise ramp 05-09, full day 09-17, a linear sunset ramp 17-21.
#[must_use]
pub fn day_intensity(hour_of_day: f32) -> f32 {
    let h = hour_of_day.rem_euclid(24.0);
    if h < 5.0 {
        0.0
    } else if h < 9.0 {
        (h - 5.0) / 4.0
    } else if h < 17.0 {
        1.0
    } else if h < 21.0 {
        1.0 - (h - 17.0) / 4.0
    } else {
        0.0
    }
}

#[must_use]
pub fn night_intensity(hour_of_day: f32) -> f32 {
    1.0 - day_intensity(hour_of_day)
}

/// One mounted ambient scene. Owns its particle pools for as long as the
/// scene is displayed; a new location search replaces the whole scene.
#[derive(Debug, Clone)]
pub struct AmbientScene {
    pools: ParticlePools,
}

impl AmbientScene {
    #[must_use]
    pub fn new(pools: ParticlePools) -> Self {
        Self { pools }
    }

    #[must_use]
    pub fn from_seed(seed: u64) -> Self {
        Self::new(ParticlePools::from_seed(seed))
    }

    #[must_use]
    pub fn new_random() -> Self {
        Self::new(ParticlePools::new_random())
    }

    #[must_use]
    pub fn pools(&self) -> &ParticlePools {
        &self.pools
    }

    /// Recomposes the scene for a new hour/condition/precipitation triple.
    /// Runs on every scroll tick, so it only computes scalars and prefix
    /// sizes; the pools are never touched.
    #[must_use]
    pub fn compose(&self, input: &AmbientSceneInput) -> AmbientSceneOutput {
        let day = day_intensity(input.hour_of_day);
        let night = 1.0 - day;

        // Overcast or precipitating skies darken fully regardless of the
        // clock; stars and sun only exist on clear or partly cloudy skies.
        let (day_gradient_opacity, night_gradient_opacity, star_opacity, sun_opacity) =
            if input.condition.clear_or_partly() {
                (day, night, night, day)
            } else {
                (0.0, 1.0, 0.0, 0.0)
            };

        let intensity = precipitation_intensity(input.precipitation_mm);
        let layers = LayerKind::ALL
            .iter()
            .map(|&kind| {
                let active = input.condition.layer_active(kind);
                let visible_count = if active {
                    (kind.pool_capacity() as f32 * intensity).floor() as usize
                } else {
                    0
                };
                (
                    kind,
                    LayerState {
                        active,
                        intensity,
                        visible_count,
                    },
                )
            })
            .collect();

        AmbientSceneOutput {
            day_gradient_opacity,
            night_gradient_opacity,
            star_opacity,
            sun_opacity,
            layers,
        }
    }

    /// The visible prefix of one layer's stable pool for a composed scene.
    #[must_use]
    pub fn visible_particles(
        &self,
        kind: LayerKind,
        output: &AmbientSceneOutput,
    ) -> &[ParticleSpec] {
        let pool = self.pools.layer(kind);
        let count = output.layer(kind).visible_count.min(pool.len());
        &pool[..count]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::weather::WeatherCondition;

    fn scene() -> AmbientScene {
        AmbientScene::from_seed(9)
    }

    #[test]
    fn day_intensity_anchors() {
        assert_eq!(day_intensity(0.0), 0.0);
        assert_eq!(day_intensity(5.0), 0.0);
        assert_eq!(day_intensity(7.0), 0.5);
        assert_eq!(day_intensity(9.0), 1.0);
        assert_eq!(day_intensity(12.0), 1.0);
        assert_eq!(day_intensity(19.0), 0.5);
        assert_eq!(day_intensity(21.0), 0.0);
        assert_eq!(day_intensity(23.9), 0.0);
    }

    #[test]
    fn day_intensity_wraps_out_of_range_hours() {
        assert_eq!(day_intensity(36.0), day_intensity(12.0));
        assert_eq!(day_intensity(-12.0), day_intensity(12.0));
    }

    #[test]
    fn clear_midday_is_full_sun() {
        let input = AmbientSceneInput::new(WeatherCondition::from_text("clear sky"), 12.0, None);
        let out = scene().compose(&input);
        assert_eq!(out.day_gradient_opacity, 1.0);
        assert_eq!(out.night_gradient_opacity, 0.0);
        assert_eq!(out.sun_opacity, 1.0);
        assert_eq!(out.star_opacity, 0.0);
    }

    #[test]
    fn clear_night_shows_stars() {
        let input = AmbientSceneInput::new(WeatherCondition::from_text("clear sky"), 2.0, None);
        let out = scene().compose(&input);
        assert_eq!(out.star_opacity, 1.0);
        assert_eq!(out.night_gradient_opacity, 1.0);
        assert_eq!(out.sun_opacity, 0.0);
    }

    #[test]
    fn overcast_forces_night_even_at_midday() {
        let input = AmbientSceneInput::new(WeatherCondition::from_text("overcast"), 12.0, None);
        let out = scene().compose(&input);
        assert_eq!(out.night_gradient_opacity, 1.0);
        assert_eq!(out.day_gradient_opacity, 0.0);
        assert_eq!(out.sun_opacity, 0.0);
        assert_eq!(out.star_opacity, 0.0);
    }

    #[test]
    fn light_snow_activates_snow_at_low_intensity() {
        let input =
            AmbientSceneInput::new(WeatherCondition::from_text("light snow"), 12.0, Some(0.2));
        let out = scene().compose(&input);
        let snow = out.layer(LayerKind::Snow);
        assert!(snow.active);
        assert_eq!(snow.intensity, 0.3);
        assert_eq!(snow.visible_count, 45);
        assert!(!out.layer(LayerKind::WetSnow).active);
        assert!(out.layer(LayerKind::Cloud).active);
    }

    #[test]
    fn heavy_wet_snow_fills_the_pool() {
        let input =
            AmbientSceneInput::new(WeatherCondition::from_text("wet snow"), 12.0, Some(3.0));
        let out = scene().compose(&input);
        let wet = out.layer(LayerKind::WetSnow);
        assert!(wet.active);
        assert_eq!(wet.intensity, 1.0);
        assert_eq!(wet.visible_count, LayerKind::WetSnow.pool_capacity());
        assert!(!out.layer(LayerKind::Snow).active);
        assert_eq!(out.layer(LayerKind::Snow).visible_count, 0);
    }

    #[test]
    fn missing_precipitation_defaults_to_half_density() {
        let input = AmbientSceneInput::new(WeatherCondition::from_text("rain"), 12.0, None);
        let out = scene().compose(&input);
        assert_eq!(out.layer(LayerKind::Rain).visible_count, 75);
    }

    #[test]
    fn visible_particles_match_the_reported_count() {
        let scene = scene();
        let input =
            AmbientSceneInput::new(WeatherCondition::from_text("light snow"), 12.0, Some(0.2));
        let out = scene.compose(&input);
        let visible = scene.visible_particles(LayerKind::Snow, &out);
        assert_eq!(visible.len(), out.layer(LayerKind::Snow).visible_count);
        assert!(scene
            .visible_particles(LayerKind::Rain, &out)
            .is_empty());
    }
}
