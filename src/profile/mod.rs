pub mod geometry;
pub mod isotherm;
pub mod spline;
