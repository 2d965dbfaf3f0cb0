use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

use crate::domain::weather::LayerKind;

/// One animated particle. `x`/`y` are viewport fractions, `size` is in
/// pixels (streak length for rain), timing is in seconds. Cloud delays are
/// negative so the drift loop starts mid-flight instead of in lockstep.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ParticleSpec {
    pub x: f32,
    pub y: f32,
    pub size: f32,
    pub duration_s: f32,
    pub delay_s: f32,
    pub opacity: f32,
}

/// Fixed pools of particle descriptors, one per layer, generated once per
/// scene mount. Nothing here is mutated afterwards: changing intensity
/// only changes how long a prefix of each pool the renderer shows, so
/// already-visible particles never jump or get re-randomized.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParticlePools {
    snow: Vec<ParticleSpec>,
    rain: Vec<ParticleSpec>,
    ice_pellets: Vec<ParticleSpec>,
    wet_snow: Vec<ParticleSpec>,
    clouds: Vec<ParticleSpec>,
    stars: Vec<ParticleSpec>,
}

impl ParticlePools {
    /// Draws every pool from the given source. Injectable so callers can
    /// seed it and assert exact layouts.
    pub fn generate<R: Rng>(rng: &mut R) -> Self {
        Self {
            snow: pool(rng, LayerKind::Snow),
            rain: pool(rng, LayerKind::Rain),
            ice_pellets: pool(rng, LayerKind::IcePellet),
            wet_snow: pool(rng, LayerKind::WetSnow),
            clouds: pool(rng, LayerKind::Cloud),
            stars: pool(rng, LayerKind::Star),
        }
    }

    #[must_use]
    pub fn from_seed(seed: u64) -> Self {
        Self::generate(&mut StdRng::seed_from_u64(seed))
    }

    #[must_use]
    pub fn new_random() -> Self {
        Self::generate(&mut rand::rng())
    }

    #[must_use]
    pub fn layer(&self, kind: LayerKind) -> &[ParticleSpec] {
        match kind {
            LayerKind::Snow => &self.snow,
            LayerKind::Rain => &self.rain,
            LayerKind::IcePellet => &self.ice_pellets,
            LayerKind::WetSnow => &self.wet_snow,
            LayerKind::Cloud => &self.clouds,
            LayerKind::Star => &self.stars,
        }
    }
}

fn pool<R: Rng>(rng: &mut R, kind: LayerKind) -> Vec<ParticleSpec> {
    (0..kind.pool_capacity()).map(|_| spawn(rng, kind)).collect()
}

fn spawn<R: Rng>(rng: &mut R, kind: LayerKind) -> ParticleSpec {
    let x = rng.random_range(0.0..1.0);
    match kind {
        LayerKind::Snow => ParticleSpec {
            x,
            y: 0.0,
            size: rng.random_range(3.0..7.0),
            duration_s: rng.random_range(3.0..8.0),
            delay_s: rng.random_range(0.0..5.0),
            opacity: rng.random_range(0.6..1.0),
        },
        LayerKind::Rain => ParticleSpec {
            x,
            y: 0.0,
            size: rng.random_range(15.0..35.0),
            duration_s: rng.random_range(0.4..0.8),
            delay_s: rng.random_range(0.0..2.0),
            opacity: 1.0,
        },
        LayerKind::IcePellet => ParticleSpec {
            x,
            y: 0.0,
            size: rng.random_range(3.0..6.0),
            duration_s: rng.random_range(0.8..1.8),
            delay_s: rng.random_range(0.0..2.0),
            opacity: 0.8,
        },
        LayerKind::WetSnow => ParticleSpec {
            x,
            y: 0.0,
            size: rng.random_range(6.0..11.0),
            duration_s: rng.random_range(1.5..3.0),
            delay_s: rng.random_range(0.0..3.0),
            opacity: rng.random_range(0.7..1.0),
        },
        LayerKind::Cloud => ParticleSpec {
            x,
            y: rng.random_range(0.05..0.45),
            size: rng.random_range(200.0..500.0),
            duration_s: rng.random_range(25.0..40.0),
            delay_s: rng.random_range(-20.0..0.0),
            opacity: 0.8,
        },
        LayerKind::Star => ParticleSpec {
            x,
            y: rng.random_range(0.0..0.7),
            size: rng.random_range(2.0..5.0),
            duration_s: rng.random_range(2.0..5.0),
            delay_s: rng.random_range(0.0..3.0),
            opacity: 1.0,
        },
    }
}
