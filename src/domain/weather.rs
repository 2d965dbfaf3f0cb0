use chrono::{NaiveDateTime, Timelike};
use serde::{Deserialize, Serialize};

/// Particle layers the ambient scene can play.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum LayerKind {
    Snow,
    Rain,
    IcePellet,
    WetSnow,
    Cloud,
    Star,
}

impl LayerKind {
    pub const ALL: [LayerKind; 6] = [
        LayerKind::Snow,
        LayerKind::Rain,
        LayerKind::IcePellet,
        LayerKind::WetSnow,
        LayerKind::Cloud,
        LayerKind::Star,
    ];

    /// Fixed pool size for this layer. Pools are allocated once per scene
    /// and never regenerated; intensity only selects a visible prefix.
    #[must_use]
    pub const fn pool_capacity(self) -> usize {
        match self {
            LayerKind::Snow | LayerKind::Rain => 150,
            LayerKind::IcePellet => 100,
            LayerKind::WetSnow => 120,
            LayerKind::Cloud => 15,
            LayerKind::Star => 60,
        }
    }
}

/// Typed weather classification. Built exactly once from the provider's
/// free-text summary via [`WeatherCondition::from_text`]; everything
/// downstream consumes the flags, never the prose.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct WeatherCondition {
    pub wet_snow: bool,
    pub snow: bool,
    pub rain: bool,
    pub ice_pellets: bool,
    pub partly_cloudy: bool,
    pub cloudy: bool,
    pub clear: bool,
}

impl WeatherCondition {
    /// Substring-cue classification of a forecast summary. Wet snow wins
    /// over plain snow and rain; "ice" counts as snow while "pellets" and
    /// "hail" select the ice-pellet layer. Unrecognized text leaves every
    /// flag off.
    #[must_use]
    pub fn from_text(text: &str) -> Self {
        let t = text.to_lowercase();
        let has = |cue: &str| t.contains(cue);

        let wet_snow = has("wet") || has("mix") || (has("snow") && has("rain"));
        Self {
            wet_snow,
            snow: (has("snow") || has("ice")) && !wet_snow,
            rain: (has("rain") || has("drizzle") || has("freezing")) && !wet_snow,
            ice_pellets: has("pellets") || has("hail"),
            partly_cloudy: has("partly"),
            cloudy: has("cloud") || has("overcast"),
            clear: has("clear") || has("sunny"),
        }
    }

    #[must_use]
    pub fn clear_or_partly(self) -> bool {
        self.clear || self.partly_cloudy
    }

    #[must_use]
    pub fn precipitating(self) -> bool {
        self.snow || self.rain || self.wet_snow || self.ice_pellets
    }

    /// Whether a particle layer plays under this condition. Any
    /// precipitation implies the cloud layer; stars only appear on clear
    /// or partly cloudy skies.
    #[must_use]
    pub fn layer_active(self, kind: LayerKind) -> bool {
        match kind {
            LayerKind::Snow => self.snow,
            LayerKind::Rain => self.rain,
            LayerKind::IcePellet => self.ice_pellets,
            LayerKind::WetSnow => self.wet_snow,
            LayerKind::Cloud => self.cloudy || self.partly_cloudy || self.precipitating(),
            LayerKind::Star => self.clear_or_partly(),
        }
    }
}

/// Scene-density scalar derived from the hourly precipitation amount.
/// Missing amounts fall back to the middle tier.
#[must_use]
pub fn precipitation_intensity(precipitation_mm: Option<f32>) -> f32 {
    match precipitation_mm {
        None => 0.5,
        Some(mm) if mm < 0.5 => 0.3,
        Some(mm) if mm < 2.0 => 0.6,
        Some(_) => 1.0,
    }
}

/// Input for one ambient scene composition: the typed condition, the
/// scroll-selected hour (fractional, wrapped modulo 24 downstream), and
/// the precipitation amount for that hour.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AmbientSceneInput {
    pub condition: WeatherCondition,
    pub hour_of_day: f32,
    pub precipitation_mm: Option<f32>,
}

impl AmbientSceneInput {
    #[must_use]
    pub fn new(condition: WeatherCondition, hour_of_day: f32, precipitation_mm: Option<f32>) -> Self {
        Self {
            condition,
            hour_of_day,
            precipitation_mm,
        }
    }

    #[must_use]
    pub fn at_time(
        condition: WeatherCondition,
        time: NaiveDateTime,
        precipitation_mm: Option<f32>,
    ) -> Self {
        Self::new(condition, fractional_hour(time), precipitation_mm)
    }
}

/// Hour of day including the minute fraction, e.g. 07:30 -> 7.5.
#[must_use]
pub fn fractional_hour(time: NaiveDateTime) -> f32 {
    time.hour() as f32 + time.minute() as f32 / 60.0
}
