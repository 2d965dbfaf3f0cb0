//! Computational core for a snow forecast dashboard.
//!
//! Two transforms live here: [`profile`] turns an hourly temperature/altitude
//! profile into renderable curve geometry (smoothed path, domains, markers,
//! axis ticks), and [`scene`] turns a weather condition, hour of day, and
//! precipitation amount into ambient scene parameters (sky gradient and
//! celestial opacities, particle layer activation).
//!
//! Everything is pure and synchronous. Fetching forecasts, painting pixels,
//! and persisting search history belong to external collaborators; this crate
//! only fixes the numbers they render.

pub mod domain;
pub mod profile;
pub mod scene;
