//! Regular polygon described by vertex count and circumradius.
//!
//! Purpose
//! - Closed-form derived properties (interior angle, side, apothem, area,
//!   perimeter, efficiency) and vertex coordinates, recomputed on each access.
//! - Explicit comparison methods: `equals` (vertex count and radius) and
//!   `is_greater_than` (vertex count only).
//!
//! Notes
//! - `is_greater_than` is deliberately not a `PartialOrd`: two polygons with
//!   equal vertex counts and different radii are unequal yet neither compares
//!   greater, which `PartialOrd` consistency with `PartialEq` would forbid.

use std::f64::consts::PI;
use std::fmt;

use nalgebra::Vector2;

use crate::cfg::PolyCfg;
use crate::error::PolygonError;

/// Regular polygon inscribed in a circle of radius `circumradius`.
///
/// Invariants:
/// - `vertex_count >= 3`.
/// - `circumradius` is finite and `> 0`.
/// - Immutable after construction.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Polygon {
    vertex_count: usize,
    circumradius: f64,
}

/// Shared radius check for `Polygon` and `PolygonSequence` constructors.
pub(crate) fn check_circumradius(circumradius: f64) -> Result<(), PolygonError> {
    if !circumradius.is_finite() {
        return Err(PolygonError::invalid("circumradius must be finite"));
    }
    if circumradius <= 0.0 {
        return Err(PolygonError::invalid("circumradius must be > 0"));
    }
    Ok(())
}

impl Polygon {
    pub fn new(vertex_count: usize, circumradius: f64) -> Result<Self, PolygonError> {
        if vertex_count < 3 {
            return Err(PolygonError::invalid(
                "polygon must have at least 3 vertices",
            ));
        }
        check_circumradius(circumradius)?;
        Ok(Self {
            vertex_count,
            circumradius,
        })
    }

    #[inline]
    pub fn count_vertices(&self) -> usize {
        self.vertex_count
    }

    /// Same as `count_vertices` for a closed polygon.
    #[inline]
    pub fn count_edges(&self) -> usize {
        self.vertex_count
    }

    #[inline]
    pub fn circumradius(&self) -> f64 {
        self.circumradius
    }

    /// Interior angle in degrees: `(n - 2) * 180 / n`.
    #[inline]
    pub fn interior_angle(&self) -> f64 {
        let n = self.vertex_count as f64;
        (n - 2.0) * 180.0 / n
    }

    /// `2 R sin(π/n)`.
    #[inline]
    pub fn side_length(&self) -> f64 {
        2.0 * self.circumradius * (PI / self.vertex_count as f64).sin()
    }

    /// Distance from the center to the midpoint of a side: `R cos(π/n)`.
    #[inline]
    pub fn apothem(&self) -> f64 {
        self.circumradius * (PI / self.vertex_count as f64).cos()
    }

    #[inline]
    pub fn area(&self) -> f64 {
        0.5 * self.vertex_count as f64 * self.side_length() * self.apothem()
    }

    #[inline]
    pub fn perimeter(&self) -> f64 {
        self.vertex_count as f64 * self.side_length()
    }

    /// Area per unit of boundary length (`area / perimeter`).
    #[inline]
    pub fn efficiency(&self) -> f64 {
        self.area() / self.perimeter()
    }

    /// Vertices on the circumcircle, counterclockwise, the first at angle `rotation`.
    pub fn vertices(&self, rotation: f64) -> Vec<Vector2<f64>> {
        let step = 2.0 * PI / self.vertex_count as f64;
        (0..self.vertex_count)
            .map(|k| {
                let theta = rotation + step * k as f64;
                Vector2::new(theta.cos(), theta.sin()) * self.circumradius
            })
            .collect()
    }

    /// Exact equality on vertex count and circumradius (same as `==`).
    #[inline]
    pub fn equals(&self, other: &Polygon) -> bool {
        self == other
    }

    /// Equal vertex counts and radii within `eps` (absolute).
    #[inline]
    pub fn equals_eps(&self, other: &Polygon, eps: f64) -> bool {
        self.vertex_count == other.vertex_count
            && (self.circumradius - other.circumradius).abs() <= eps
    }

    #[inline]
    pub fn equals_cfg(&self, other: &Polygon, cfg: PolyCfg) -> bool {
        self.equals_eps(other, cfg.eps_radius)
    }

    /// More vertices than `other`. The radius is ignored.
    #[inline]
    pub fn is_greater_than(&self, other: &Polygon) -> bool {
        self.vertex_count > other.vertex_count
    }
}

impl fmt::Display for Polygon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Polygon(n={}, R={})", self.vertex_count, self.circumradius)
    }
}
