use ghost_circle::{
  error::Result,
  generator::{self, Params},
  svg::{Canvas, Template}
};

const OUTPUT: &str = "art.svg";

fn main() -> Result<()> {
  env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

  let params = Params::default();
  let mut rng = params.rng();

  Canvas::new(Template::default())
    .with_shapes(generator::generate(&params, &mut rng))
    .save(OUTPUT)
}
