use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::profile::VisualizationInput;
use crate::profile::isotherm::zero_crossing;
use crate::profile::spline::{DEFAULT_TENSION, PathCommand, Point, catmull_rom_path};

/// Altitude padding kept around markers when the domain expands to fit them.
const DOMAIN_GUARD_M: f32 = 200.0;
/// The altitude window never shrinks below this span.
const MIN_ALTITUDE_SPAN_M: f32 = 1200.0;
/// Default relative-altitude window before any marker expansion.
const DEFAULT_WINDOW_M: (f32, f32) = (-200.0, 1000.0);
const TEMPERATURE_PAD_C: f32 = 2.0;
/// Ticks this close to the frame edge would collide with it and are dropped.
const TICK_EDGE_MARGIN: f32 = 10.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GeometryError {
    /// Fewer than two samples: the hour has nothing to plot and the caller
    /// should skip it, not fail.
    #[error("profile needs at least 2 samples, got {0}")]
    InsufficientData(usize),
}

/// Plot surface the geometry is projected onto. The curve and markers land
/// inside the padded inner rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlotFrame {
    pub width: f32,
    pub height: f32,
    pub padding: f32,
}

impl Default for PlotFrame {
    fn default() -> Self {
        Self {
            width: 280.0,
            height: 300.0,
            padding: 30.0,
        }
    }
}

/// Y-axis tick in absolute metres above sea level.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AxisTick {
    pub altitude_asl_m: f32,
    pub y: f32,
}

/// Horizontal marker lines. The reference elevation (relative altitude 0)
/// is always inside the domain; the other two appear only when the data
/// supports them.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Markers {
    pub reference_elevation_y: f32,
    pub zero_isotherm_y: Option<f32>,
    pub zero_isotherm_asl_m: Option<f32>,
    pub snow_fall_limit_y: Option<f32>,
}

/// One profile sample projected into plot coordinates. `below_freezing`
/// lets the renderer color the dot without re-deriving the sign.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SamplePoint {
    pub x: f32,
    pub y: f32,
    pub below_freezing: bool,
}

/// Renderable geometry for one hour's vertical profile.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProfileGeometry {
    pub path: Vec<PathCommand>,
    pub sample_points: Vec<SamplePoint>,
    /// `(min, max)` in °C, strictly containing 0 and every sample.
    pub temperature_domain: (f32, f32),
    /// `(min, max)` relative altitude in metres, span >= 1200.
    pub altitude_domain: (f32, f32),
    /// X of the vertical 0 °C grid line.
    pub zero_temp_x: f32,
    pub markers: Markers,
    pub ticks: Vec<AxisTick>,
}

#[derive(Debug, Clone, Copy)]
struct LinearScale {
    domain: (f32, f32),
    range: (f32, f32),
}

impl LinearScale {
    fn map(self, value: f32) -> f32 {
        let (d0, d1) = self.domain;
        let (r0, r1) = self.range;
        r0 + (value - d0) / (d1 - d0) * (r1 - r0)
    }
}

/// Projects a [`VisualizationInput`] into plot-space geometry: auto-scaled
/// domains, the smoothed curve, marker lines, and axis ticks.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProfileGeometryBuilder {
    pub frame: PlotFrame,
    pub tension: f32,
}

impl Default for ProfileGeometryBuilder {
    fn default() -> Self {
        Self {
            frame: PlotFrame::default(),
            tension: DEFAULT_TENSION,
        }
    }
}

impl ProfileGeometryBuilder {
    #[must_use]
    pub fn new(frame: PlotFrame, tension: f32) -> Self {
        Self { frame, tension }
    }

    pub fn build(&self, input: &VisualizationInput) -> Result<ProfileGeometry, GeometryError> {
        let samples = &input.profile;
        if samples.len() < 2 {
            return Err(GeometryError::InsufficientData(samples.len()));
        }

        let temperature_domain = temperature_domain(input);
        let crossing = zero_crossing(samples);
        let sfl_rel = input.snow_fall_limit_relative();
        let altitude_domain = altitude_domain(sfl_rel, crossing);

        let frame = self.frame;
        let x_scale = LinearScale {
            domain: temperature_domain,
            range: (frame.padding, frame.width - frame.padding),
        };
        // Inverted: higher altitude maps to a smaller y.
        let y_scale = LinearScale {
            domain: altitude_domain,
            range: (frame.height - frame.padding, frame.padding),
        };

        let mapped: Vec<Point> = samples
            .iter()
            .map(|s| {
                Point::new(
                    x_scale.map(s.temperature_c),
                    y_scale.map(s.relative_altitude_m),
                )
            })
            .collect();
        let sample_points = mapped
            .iter()
            .zip(samples)
            .map(|(p, s)| SamplePoint {
                x: p.x,
                y: p.y,
                below_freezing: s.temperature_c < 0.0,
            })
            .collect();

        let markers = Markers {
            reference_elevation_y: y_scale.map(0.0),
            zero_isotherm_y: crossing.map(|rel| y_scale.map(rel)),
            zero_isotherm_asl_m: crossing.map(|rel| input.reference_elevation_m + rel),
            snow_fall_limit_y: sfl_rel
                .filter(|rel| (altitude_domain.0..=altitude_domain.1).contains(rel))
                .map(|rel| y_scale.map(rel)),
        };

        Ok(ProfileGeometry {
            path: catmull_rom_path(&mapped, self.tension),
            sample_points,
            temperature_domain,
            altitude_domain,
            zero_temp_x: x_scale.map(0.0),
            markers,
            ticks: axis_ticks(input.reference_elevation_m, altitude_domain, y_scale, frame),
        })
    }
}

/// Min/max temperature folded together with 0 °C, then padded, so the
/// domain strictly contains zero and every sample.
fn temperature_domain(input: &VisualizationInput) -> (f32, f32) {
    let mut min_t = 0.0f32;
    let mut max_t = 0.0f32;
    for sample in &input.profile {
        min_t = min_t.min(sample.temperature_c);
        max_t = max_t.max(sample.temperature_c);
    }
    (min_t - TEMPERATURE_PAD_C, max_t + TEMPERATURE_PAD_C)
}

/// Starts from the default window, grows to keep the snow fall limit and
/// the freezing level in view with a guard band, then grows symmetrically
/// about the center until the minimum span holds.
fn altitude_domain(sfl_rel: Option<f32>, crossing: Option<f32>) -> (f32, f32) {
    let (mut min_rel, mut max_rel) = DEFAULT_WINDOW_M;
    for marker in [sfl_rel, crossing].into_iter().flatten() {
        min_rel = min_rel.min(marker - DOMAIN_GUARD_M);
        max_rel = max_rel.max(marker + DOMAIN_GUARD_M);
    }

    let span = max_rel - min_rel;
    if span < MIN_ALTITUDE_SPAN_M {
        let grow = (MIN_ALTITUDE_SPAN_M - span) / 2.0;
        min_rel -= grow;
        max_rel += grow;
    }
    (min_rel, max_rel)
}

/// Ticks in absolute metres: 500 m steps once the visible range exceeds
/// 2000 m, else 250 m, clipped away from the frame edges.
fn axis_ticks(
    reference_elevation_m: f32,
    altitude_domain: (f32, f32),
    y_scale: LinearScale,
    frame: PlotFrame,
) -> Vec<AxisTick> {
    let min_asl = reference_elevation_m + altitude_domain.0;
    let max_asl = reference_elevation_m + altitude_domain.1;
    let interval = if max_asl - min_asl > 2000.0 {
        500.0
    } else {
        250.0
    };

    let mut ticks = Vec::new();
    let mut altitude = (min_asl / interval).ceil() * interval;
    while altitude < max_asl {
        let y = y_scale.map(altitude - reference_elevation_m);
        if y >= TICK_EDGE_MARGIN && y <= frame.height - TICK_EDGE_MARGIN {
            ticks.push(AxisTick {
                altitude_asl_m: altitude,
                y,
            });
        }
        altitude += interval;
    }
    ticks
}
