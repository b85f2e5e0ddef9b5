//! Stippled vector art from points sampled along "ghost" curves.
//!
//! A family of concentric curves (circles or ellipses) is swept over a fixed pixel grid. Grid
//! points that fall on the current curve, within tolerance, are randomly thinned and jittered,
//! and each survivor becomes a small polygon in an SVG document.
//!
//! It is split into [`generator`] for picking the points, [`svg`] for turning shapes into
//! markup, with [`geometry`] and [`curve`] underneath.
//!
//! # Basic usage
//! ```no_run
//! # use ghost_circle::{
//! #   error::Result,
//! #   generator::{self, Params},
//! #   svg::{Canvas, Template}
//! # };
//! # fn main() -> Result<()> {
//! let params = Params::ellipse_bars().with_seed(0);
//! let mut rng = params.rng();
//!
//! Canvas::new(Template::default())
//!   .with_shapes(generator::sample(&params, &mut rng))
//!   .save("art.svg")?;
//! #   Ok(())
//! # }
//! ```
//! Shapes can also be placed by hand:
//! ```
//! # use ghost_circle::{
//! #   geometry::{P2, Triangle},
//! #   svg::{Canvas, Style, Stylize}
//! # };
//! let mut canvas = Canvas::default();
//! canvas.push(Triangle::from_center(P2::new(100, 100), 10)
//!   .style(Style::new("white", "black", 1)));
//! assert!(canvas.serialize().contains(r#"<polygon points="100,105 95,97 105,97""#));
//! ```

pub mod error;
pub mod geometry;
pub mod curve;
pub mod svg;
pub mod generator;
pub mod util;
