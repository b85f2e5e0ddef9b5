//! Brute force sampler.
//!
//! For every sweep value `d` the whole grid is scanned; points lying on the ghost curve for that
//! `d` pass through a random density gate, an optional cleanup gate, get jittered and become a
//! glyph. Selectivity of both gates is a function of `d`, not a fixed ratio.

use {
  crate::{
    curve::{Affine, Family},
    geometry::{P2, V2, PixelSpace, Triangle, Quad},
    svg::{Shape, Style, Stylize},
    profile
  },
  euclid::Size2D,
  itertools::iproduct,
  rand::prelude::*,
  rand_pcg::Pcg64,
  std::ops::Range
};


/// Accepts a point when a uniform draw from `[0, (d / divisor)^exponent)` hits `sentinel`.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct DensityGate {
  pub divisor: f64,
  pub exponent: i32,
  pub sentinel: u32,
}

impl DensityGate {
  /// Upper bound of the draw, never below 1.
  pub fn bound(&self, d: f64) -> u32 {
    ((d / self.divisor).powi(self.exponent) as u32).max(1)
  }

  pub fn draw(&self, d: f64, rng: &mut impl Rng) -> bool {
    rng.gen_range(0..self.bound(d)) == self.sentinel
  }
}

/// Thins out a region of the silhouette: once `d > min_d`, points above `max_y` are dropped
/// unless `gate` happens to favour them.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Cleanup {
  pub min_d: f64,
  pub max_y: i32,
  pub gate: DensityGate,
}

impl Cleanup {
  pub fn discards(&self, d: f64, y: i32, rng: &mut impl Rng) -> bool {
    let favoured = self.gate.draw(d, rng);
    d > self.min_d && y < self.max_y && !favoured
  }
}

/// Positional noise in `[-amplitude, amplitude]` on both axes,
/// with `amplitude = trunc((d / divisor)^exponent)`, never below 0.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Jitter {
  pub divisor: f64,
  pub exponent: i32,
}

impl Jitter {
  pub const NONE: Self = Self { divisor: f64::INFINITY, exponent: 1 };

  pub fn amplitude(&self, d: f64) -> i32 {
    ((d / self.divisor).powi(self.exponent) as i32).max(0)
  }

  pub fn offset(&self, d: f64, rng: &mut impl Rng) -> V2 {
    let amplitude = self.amplitude(d);
    let x = rng.gen_range(-amplitude..=amplitude);
    let y = rng.gen_range(-amplitude..=amplitude);
    V2::new(x, y)
  }
}

/// What gets drawn at a kept point.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum Glyph {
  /// Vertical bar anchored at its top-left corner. The vertical jitter stretches it.
  Bar { width: i32, height: i32 },
  /// Equilateral triangle centered on the point.
  Triangle { side: i32 },
}

impl Glyph {
  pub fn place(&self, anchor: P2, jitter: V2, style: Style) -> Shape {
    match *self {
      Glyph::Bar { width, height } => {
        let height = height + jitter.y;
        Quad::new(
          anchor,
          anchor + V2::new(width, 0),
          anchor + V2::new(width, height),
          anchor + V2::new(0, height)
        ).style(style).into()
      },
      Glyph::Triangle { side } => Triangle::from_center(anchor, side)
        .style(style)
        .into()
    }
  }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Palette {
  /// `rgb(y % modulus, d % modulus, d % modulus)`, on the unjittered grid row.
  Gradient { modulus: i32, stroke: String, stroke_width: u32 },
  Fixed(Style),
}

impl Palette {
  pub fn style(&self, y: i32, d: i32) -> Style {
    match self {
      Palette::Gradient { modulus, stroke, stroke_width } => Style::new(
        format!("rgb({},{},{})", y % modulus, d % modulus, d % modulus),
        stroke.as_str(),
        *stroke_width
      ),
      Palette::Fixed(style) => style.clone()
    }
  }
}

/// Everything that shapes a run. There is no runtime configuration, pick a preset or adjust
/// one with the `with_*` methods and recompile.
#[derive(Debug, Clone, PartialEq)]
pub struct Params {
  /// `None` draws a fresh seed on every run.
  pub seed: Option<u64>,
  /// Values of `d`, step 1.
  pub sweep: Range<i32>,
  pub grid: Size2D<i32, PixelSpace>,
  pub family: Family,
  pub tolerance: f64,
  pub density: DensityGate,
  pub cleanup: Option<Cleanup>,
  pub jitter: Jitter,
  pub glyph: Glyph,
  pub palette: Palette,
}

impl Default for Params {
  fn default() -> Self {
    Self::ellipse_bars()
  }
}

impl Params {
  /// Stacked ellipses drawn with short colored bars, upper half thinned out.
  pub fn ellipse_bars() -> Self {
    let center = P2::new(450, 450);
    Self {
      seed: None,
      sweep: 80..300,
      grid: Size2D::new(900, 900),
      family: Family::Ellipse {
        center,
        a: Affine::new(1.0, 0.5),
        b: Affine::new(90.0, 1.0)
      },
      tolerance: 0.01,
      density: DensityGate { divisor: 30.0, exponent: 2, sentinel: 1 },
      cleanup: Some(Cleanup {
        min_d: 80.0,
        max_y: 405,
        gate: DensityGate { divisor: 30.0, exponent: 2, sentinel: 1 }
      }),
      jitter: Jitter { divisor: 80.0, exponent: 3 },
      glyph: Glyph::Bar { width: 2, height: 5 },
      palette: Palette::Gradient { modulus: 200, stroke: "#FFFFFF".into(), stroke_width: 1 },
    }
  }

  /// Concentric circles of small outlined triangles.
  pub fn circle_triangles() -> Self {
    Self {
      family: Family::Circle { center: P2::new(450, 450), radius: Affine::IDENTITY },
      tolerance: 90.0,
      density: DensityGate { divisor: 40.0, exponent: 2, sentinel: 1 },
      cleanup: None,
      glyph: Glyph::Triangle { side: 5 },
      palette: Palette::Fixed(Style::new("white", "black", 1)),
      ..Self::ellipse_bars()
    }
  }

  pub fn with_seed(self, seed: u64) -> Self { Self { seed: Some(seed), ..self } }
  pub fn with_sweep(self, sweep: Range<i32>) -> Self { Self { sweep, ..self } }
  pub fn with_grid(self, grid: Size2D<i32, PixelSpace>) -> Self { Self { grid, ..self } }
  pub fn with_family(self, family: Family) -> Self { Self { family, ..self } }
  pub fn with_tolerance(self, tolerance: f64) -> Self { Self { tolerance, ..self } }
  pub fn with_density(self, density: DensityGate) -> Self { Self { density, ..self } }
  pub fn with_cleanup(self, cleanup: Option<Cleanup>) -> Self { Self { cleanup, ..self } }
  pub fn with_jitter(self, jitter: Jitter) -> Self { Self { jitter, ..self } }
  pub fn with_glyph(self, glyph: Glyph) -> Self { Self { glyph, ..self } }
  pub fn with_palette(self, palette: Palette) -> Self { Self { palette, ..self } }

  /// Generator for this run. The seed is logged so a run can be replayed via [`Params::with_seed`].
  pub fn rng(&self) -> Pcg64 {
    let seed = self.seed.unwrap_or_else(rand::random);
    log::info!("seed: {}", seed);
    Pcg64::seed_from_u64(seed)
  }
}

/// Lazily scan `sweep × grid`, `x` before `y`, yielding one shape per kept point.
pub fn sample<'a, R: Rng>(params: &'a Params, rng: &'a mut R) -> impl Iterator<Item = Shape> + 'a {
  iproduct!(params.sweep.clone(), 0..params.grid.width, 0..params.grid.height)
    .filter_map(move |(d_int, x, y)| {
      let d = d_int as f64;
      let point = P2::new(x, y);
      if !params.family.at(d).passes_through(point, params.tolerance) ||
         !params.density.draw(d, rng) {
        return None;
      }
      let jitter = params.jitter.offset(d, rng);
      if let Some(cleanup) = &params.cleanup {
        if cleanup.discards(d, y, rng) {
          return None;
        }
      }
      Some(params.glyph.place(point + jitter, jitter, params.palette.style(y, d_int)))
    })
}

pub fn generate<R: Rng>(params: &Params, rng: &mut R) -> Vec<Shape> {
  let shapes = profile!("generate", sample(params, rng).collect::<Vec<_>>());
  log::info!("{} shapes kept, d in {:?}", shapes.len(), params.sweep);
  shapes
}
