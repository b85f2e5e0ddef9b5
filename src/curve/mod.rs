//! Membership of grid points in "ghost" curves.
//!
//! A point on a discrete grid almost never lands exactly on a continuous curve, so both predicates
//! accept anything within `tolerance` of the curve equation. Bounds are strict on both sides.

use crate::geometry::P2;


/// Is `p` within `tolerance` of the circle, measured on squared distance.
pub fn is_circumference(p: P2, center: P2, radius: f64, tolerance: f64) -> bool {
  // x^2 + y^2 = r^2
  let t = (p - center).to_f64().square_length();
  let rr = radius.powi(2);
  t > rr - tolerance && t < rr + tolerance
}

/// Is `p` within `tolerance` of the normalized ellipse equation.
///
/// `b` divides the horizontal term and `a` the vertical one.
pub fn is_ellipse(p: P2, center: P2, a: f64, b: f64, tolerance: f64) -> bool {
  // (x-h)^2 / b^2 + (y-k)^2 / a^2 = 1
  let delta = (p - center).to_f64();
  let t = delta.x.powi(2) / b.powi(2) + delta.y.powi(2) / a.powi(2);
  t > 1.0 - tolerance && t < 1.0 + tolerance
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub enum Curve {
  Circle { center: P2, radius: f64 },
  Ellipse { center: P2, a: f64, b: f64 },
}

impl Curve {
  pub fn passes_through(&self, p: P2, tolerance: f64) -> bool {
    match *self {
      Curve::Circle { center, radius } => is_circumference(p, center, radius, tolerance),
      Curve::Ellipse { center, a, b } => is_ellipse(p, center, a, b, tolerance),
    }
  }
}

/// `offset + slope * d`
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Affine {
  pub offset: f64,
  pub slope: f64,
}

impl Affine {
  pub const IDENTITY: Self = Self { offset: 0.0, slope: 1.0 };

  pub fn new(offset: f64, slope: f64) -> Self {
    Self { offset, slope }
  }

  pub fn eval(&self, d: f64) -> f64 {
    self.offset + self.slope * d
  }
}

/// A one-parameter family of concentric curves, indexed by the sweep value `d`.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum Family {
  Circle { center: P2, radius: Affine },
  Ellipse { center: P2, a: Affine, b: Affine },
}

impl Family {
  pub fn at(&self, d: f64) -> Curve {
    match *self {
      Family::Circle { center, radius } => Curve::Circle { center, radius: radius.eval(d) },
      Family::Ellipse { center, a, b } => Curve::Ellipse { center, a: a.eval(d), b: b.eval(d) },
    }
  }
}
