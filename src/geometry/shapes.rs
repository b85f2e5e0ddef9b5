use {
  super::{P2, V2, rotate, truncate},
  euclid::Point2D
};

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Triangle {
  pub a: P2,
  pub b: P2,
  pub c: P2,
}

impl Triangle {
  pub fn new(a: P2, b: P2, c: P2) -> Self {
    Self { a, b, c }
  }

  /// Equilateral triangle with its centroid at `center`.
  /// Apex points down the `y` axis, the base lies above the center.
  pub fn from_center(center: P2, side: i32) -> Self {
    // https://math.stackexchange.com/a/1344707
    let (cx, cy, side) = (center.x as f64, center.y as f64, side as f64);
    let sqrt_3 = 3f64.sqrt();
    let base_y = cy - sqrt_3 / 6.0 * side;
    Self {
      a: P2::new(center.x, (cy + sqrt_3 / 3.0 * side) as i32),
      b: truncate(Point2D::new(cx - side / 2.0, base_y)),
      c: truncate(Point2D::new(cx + side / 2.0, base_y)),
    }
  }

  pub fn vertices(&self) -> [P2; 3] {
    [self.a, self.b, self.c]
  }

  /// Vertex average, truncated.
  pub fn centroid(&self) -> P2 {
    let sum = self.a.to_vector() + self.b.to_vector() + self.c.to_vector();
    (sum / 3).to_point()
  }
}

/// Four vertices in drawing order. Used both for axis aligned rectangles and for rhombus faces.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Quad {
  pub a: P2,
  pub b: P2,
  pub c: P2,
  pub d: P2,
}

impl Quad {
  pub fn new(a: P2, b: P2, c: P2, d: P2) -> Self {
    Self { a, b, c, d }
  }

  pub fn vertices(&self) -> [P2; 4] {
    [self.a, self.b, self.c, self.d]
  }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Ellipse {
  pub center: P2,
  pub radii: V2,
}

/// Three rhombus faces approximating a cube in isometric projection.
///
/// Faces share vertices instead of computing them independently, so edges always meet.
/// `left.a`, `left.b` and `top.c` are not derived from the origin and stay at zero until
/// supplied through [`IsometricCube::with_open_vertices`]. `top.d` shares `left.a`, so it is
/// zero as well until then: `from_origin` leaves four zero vertices in total.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct IsometricCube {
  pub top: Quad,
  pub left: Quad,
  pub right: Quad,
}

impl IsometricCube {
  /// Skew applied to the right face. Taken as radians, although 30° looks like the intent.
  pub const SKEW: f64 = 30.0;

  pub fn from_origin(origin: P2, side: i32) -> Self {
    let down = V2::new(0, side);
    let (_, far) = rotate(origin, origin + V2::new(side, 0), Self::SKEW);
    let right = Quad::new(origin, far, far + down, origin + down);
    let left = Quad::new(P2::zero(), P2::zero(), right.d, right.a);
    let top = Quad::new(right.a, right.b, P2::zero(), left.a);
    Self { top, left, right }
  }

  /// Fill in the vertices the origin alone does not determine.
  pub fn with_open_vertices(mut self, left_a: P2, left_b: P2, top_c: P2) -> Self {
    self.left.a = left_a;
    self.left.b = left_b;
    self.top.c = top_c;
    self.top.d = left_a;
    self
  }

  pub fn faces(&self) -> [Quad; 3] {
    [self.top, self.left, self.right]
  }
}
