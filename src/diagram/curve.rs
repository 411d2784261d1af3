//! Motion math: the arc the speech capsule follows and the easing applied to
//! its progress along it.

/// 2D point in SVG user units.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Quadratic Bezier segment: start, one control point, end.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct QuadBezier {
    pub p0: Point,
    pub p1: Point,
    pub p2: Point,
}

impl QuadBezier {
    pub const fn new(p0: Point, p1: Point, p2: Point) -> Self {
        Self { p0, p1, p2 }
    }

    /// Evaluate the curve at `t`. Callers clamp `t` to [0, 1]; the evaluation
    /// is exact at both endpoints (`t = 0` yields `p0`, `t = 1` yields `p2`).
    pub fn point_at(&self, t: f64) -> Point {
        let u = 1.0 - t;
        Point::new(
            u * u * self.p0.x + 2.0 * u * t * self.p1.x + t * t * self.p2.x,
            u * u * self.p0.y + 2.0 * u * t * self.p1.y + t * t * self.p2.y,
        )
    }
}

/// Cosine ease-in-out on [0, 1]: slow start, slow stop, never reversing.
/// Input is clamped, so late or early frames stay pinned to the endpoints.
pub fn ease_in_out(t: f64) -> f64 {
    let t = t.clamp(0.0, 1.0);
    0.5 - 0.5 * (std::f64::consts::PI * t).cos()
}
