use std::fmt::Write as _;

use serde::{Deserialize, Serialize};

pub const DEFAULT_TENSION: f32 = 0.5;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    #[must_use]
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum PathCommand {
    MoveTo(Point),
    CurveTo {
        ctrl1: Point,
        ctrl2: Point,
        to: Point,
    },
}

/// Fits a Catmull-Rom spline through `points` and emits it as cubic Bezier
/// commands: one `MoveTo` followed by one `CurveTo` per input segment.
///
/// The first and last point are duplicated to give the boundary segments
/// well-defined tangents, so the curve passes exactly through every input
/// point. Fewer than two points yield an empty path.
#[must_use]
pub fn catmull_rom_path(points: &[Point], tension: f32) -> Vec<PathCommand> {
    if points.len() < 2 {
        return Vec::new();
    }

    let first = points[0];
    let last = points[points.len() - 1];
    let mut path = Vec::with_capacity(points.len());
    path.push(PathCommand::MoveTo(first));

    for i in 0..points.len() - 1 {
        let p0 = if i == 0 { first } else { points[i - 1] };
        let p1 = points[i];
        let p2 = points[i + 1];
        let p3 = if i + 2 < points.len() {
            points[i + 2]
        } else {
            last
        };

        let ctrl1 = Point::new(
            p1.x + (p2.x - p0.x) / 6.0 * tension,
            p1.y + (p2.y - p0.y) / 6.0 * tension,
        );
        let ctrl2 = Point::new(
            p2.x - (p3.x - p1.x) / 6.0 * tension,
            p2.y - (p3.y - p1.y) / 6.0 * tension,
        );
        path.push(PathCommand::CurveTo {
            ctrl1,
            ctrl2,
            to: p2,
        });
    }

    path
}

/// SVG path data for a command list, e.g. `M 1,2 C 3,4 5,6 7,8`.
#[must_use]
pub fn to_svg_path(commands: &[PathCommand]) -> String {
    let mut data = String::new();
    for command in commands {
        if !data.is_empty() {
            data.push(' ');
        }
        match command {
            PathCommand::MoveTo(p) => {
                let _ = write!(data, "M {},{}", p.x, p.y);
            }
            PathCommand::CurveTo { ctrl1, ctrl2, to } => {
                let _ = write!(
                    data,
                    "C {},{} {},{} {},{}",
                    ctrl1.x, ctrl1.y, ctrl2.x, ctrl2.y, to.x, to.y
                );
            }
        }
    }
    data
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_and_single_point_yield_empty_path() {
        assert!(catmull_rom_path(&[], DEFAULT_TENSION).is_empty());
        assert!(catmull_rom_path(&[Point::new(1.0, 1.0)], DEFAULT_TENSION).is_empty());
    }

    #[test]
    fn two_points_produce_one_segment() {
        let points = [Point::new(0.0, 0.0), Point::new(10.0, 5.0)];
        let path = catmull_rom_path(&points, DEFAULT_TENSION);
        assert_eq!(path.len(), 2);
        assert_eq!(path[0], PathCommand::MoveTo(points[0]));
        match path[1] {
            PathCommand::CurveTo { to, .. } => assert_eq!(to, points[1]),
            PathCommand::MoveTo(_) => panic!("expected a curve segment"),
        }
    }

    #[test]
    fn curve_visits_every_input_point() {
        let points = [
            Point::new(0.0, 0.0),
            Point::new(4.0, 9.0),
            Point::new(8.0, 3.0),
            Point::new(12.0, 7.0),
        ];
        let path = catmull_rom_path(&points, DEFAULT_TENSION);
        assert_eq!(path.len(), points.len());
        assert_eq!(path[0], PathCommand::MoveTo(points[0]));
        for (command, expected) in path[1..].iter().zip(&points[1..]) {
            match command {
                PathCommand::CurveTo { to, .. } => assert_eq!(to, expected),
                PathCommand::MoveTo(_) => panic!("unexpected MoveTo"),
            }
        }
    }

    #[test]
    fn zero_tension_degenerates_to_straight_control_points() {
        let points = [Point::new(0.0, 0.0), Point::new(10.0, 0.0)];
        let path = catmull_rom_path(&points, 0.0);
        match path[1] {
            PathCommand::CurveTo { ctrl1, ctrl2, .. } => {
                assert_eq!(ctrl1, points[0]);
                assert_eq!(ctrl2, points[1]);
            }
            PathCommand::MoveTo(_) => panic!("expected a curve segment"),
        }
    }

    #[test]
    fn svg_path_format() {
        let points = [Point::new(0.0, 0.0), Point::new(6.0, 6.0)];
        let path = catmull_rom_path(&points, 0.0);
        assert_eq!(to_svg_path(&path), "M 0,0 C 0,0 6,6 6,6");
    }
}
