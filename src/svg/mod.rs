//! Markup serialization.
//!
//! Every [`Shape`] renders to exactly one line of SVG (an isometric cube renders to three), and a
//! [`Canvas`] stitches those lines into a document.

use {
  crate::geometry::{P2, Triangle, Quad, Ellipse, IsometricCube},
  itertools::Itertools,
  std::fmt
};

mod canvas;
pub use canvas::{Canvas, Template};

#[cfg(test)] mod tests;

/// Presentation attributes. Colors are passed through verbatim, e.g. `white`, `#FFFFFF` or
/// `rgb(12,80,80)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Style {
  pub fill: String,
  pub stroke: String,
  pub stroke_width: u32,
}

impl Style {
  pub fn new(fill: impl Into<String>, stroke: impl Into<String>, stroke_width: u32) -> Self {
    Self { fill: fill.into(), stroke: stroke.into(), stroke_width }
  }
}

impl fmt::Display for Style {
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
    write!(f, "fill:{};stroke:{};stroke-width:{}", self.fill, self.stroke, self.stroke_width)
  }
}

/// A geometric shape with presentation attributes attached.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Styled<S> {
  pub shape: S,
  pub style: Style,
}

pub trait Stylize: Sized {
  fn style(self, style: Style) -> Styled<Self> {
    Styled { shape: self, style }
  }
}
impl Stylize for Triangle {}
impl Stylize for Quad {}
impl Stylize for Ellipse {}
impl Stylize for IsometricCube {}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Shape {
  /// Bare coordinate pair, a building block rather than a drawable element.
  Point(P2),
  Triangle(Styled<Triangle>),
  Rectangle(Styled<Quad>),
  Ellipse(Styled<Ellipse>),
  IsometricCube {
    top: Styled<Quad>,
    left: Styled<Quad>,
    right: Styled<Quad>
  },
}

impl Shape {
  pub fn markup(&self) -> String {
    match self {
      Shape::Point(p) => coords(*p),
      Shape::Triangle(Styled { shape, style }) => polygon(&shape.vertices(), style),
      Shape::Rectangle(Styled { shape, style }) => polygon(&shape.vertices(), style),
      Shape::Ellipse(Styled { shape, style }) => format!(
        r#"<ellipse rx="{}" ry="{}" cx="{}" cy="{}" style="{}" />"#,
        shape.radii.x, shape.radii.y, shape.center.x, shape.center.y, style
      ),
      Shape::IsometricCube { top, left, right } => [top, left, right]
        .iter()
        .map(|face| polygon(&face.shape.vertices(), &face.style))
        .join("\n"),
    }
  }
}

fn coords(p: P2) -> String {
  format!("{},{}", p.x, p.y)
}

fn polygon(vertices: &[P2], style: &Style) -> String {
  format!(
    r#"<polygon points="{}" style="{}" />"#,
    vertices.iter().cloned().map(coords).join(" "),
    style
  )
}

impl From<P2> for Shape {
  fn from(p: P2) -> Self { Shape::Point(p) } }
impl From<Styled<Triangle>> for Shape {
  fn from(t: Styled<Triangle>) -> Self { Shape::Triangle(t) } }
impl From<Styled<Quad>> for Shape {
  fn from(q: Styled<Quad>) -> Self { Shape::Rectangle(q) } }
impl From<Styled<Ellipse>> for Shape {
  fn from(e: Styled<Ellipse>) -> Self { Shape::Ellipse(e) } }

/// Same style on all three faces.
impl From<Styled<IsometricCube>> for Shape {
  fn from(Styled { shape, style }: Styled<IsometricCube>) -> Self {
    Shape::IsometricCube {
      top: shape.top.style(style.clone()),
      left: shape.left.style(style.clone()),
      right: shape.right.style(style)
    }
  }
}
