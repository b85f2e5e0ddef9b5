use {
  super::Shape,
  crate::{
    error::{Context, Result},
    geometry::PixelSpace
  },
  euclid::{Box2D, Size2D},
  std::{
    fs::File,
    io::{BufWriter, Write},
    path::Path
  }
};

/// Fixed document frame around the shape fragments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template {
  pub size: Size2D<u32, PixelSpace>,
  /// When set, the document is cropped to this region and `size` is ignored.
  pub view_box: Option<Box2D<i32, PixelSpace>>,
  /// Full canvas rectangle painted under every shape.
  pub background: Option<String>,
}

impl Default for Template {
  fn default() -> Self {
    Self {
      size: Size2D::new(900, 900),
      view_box: None,
      background: Some("#ffffff".into())
    }
  }
}

impl Template {
  pub fn cropped(view_box: Box2D<i32, PixelSpace>) -> Self {
    Self { view_box: Some(view_box), background: None, ..Self::default() }
  }

  pub fn with_background(self, background: impl Into<String>) -> Self {
    Self { background: Some(background.into()), ..self }
  }

  pub fn render(&self, content: &str) -> String {
    let (root, area) = match self.view_box {
      Some(view_box) => (
        format!(
          r#"<svg version="1.1" viewBox="{} {} {} {}" xmlns="http://www.w3.org/2000/svg">"#,
          view_box.min.x, view_box.min.y, view_box.width(), view_box.height()
        ),
        view_box
      ),
      None => (
        format!(
          r#"<svg version="1.1" width="{}" height="{}" xmlns="http://www.w3.org/2000/svg">"#,
          self.size.width, self.size.height
        ),
        Box2D::from_size(self.size.to_i32())
      )
    };
    let background = match &self.background {
      Some(fill) => format!(
        "<rect width=\"{}\" height=\"{}\" x=\"{}\" y=\"{}\" fill=\"{}\" />\n",
        area.width(), area.height(), area.min.x, area.min.y, fill
      ),
      None => String::new()
    };
    format!("<?xml version=\"1.0\" encoding=\"UTF-8\" ?>\n{}\n{}{}\n</svg>", root, background, content)
  }
}

/// Ordered shape list. Later shapes paint over earlier ones.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Canvas {
  pub template: Template,
  pub shapes: Vec<Shape>,
}

impl Canvas {
  pub fn new(template: Template) -> Self {
    Self { template, shapes: vec![] }
  }

  pub fn with_shapes(mut self, shapes: impl IntoIterator<Item = Shape>) -> Self {
    self.extend(shapes);
    self
  }

  pub fn push(&mut self, shape: impl Into<Shape>) {
    self.shapes.push(shape.into());
  }

  /// Full document text. Each fragment is followed by a newline.
  pub fn serialize(&self) -> String {
    let content = self.shapes.iter()
      .fold(String::new(), |mut acc, shape| {
        acc.push_str(&shape.markup());
        acc.push('\n');
        acc
      });
    self.template.render(&content)
  }

  /// Create or truncate `path` and write the document into it.
  pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    let document = self.serialize();
    let file = File::create(path)
      .with_context(|| format!("unable to create {}", path.display()))?;
    let mut writer = BufWriter::new(file);
    writer.write_all(document.as_bytes())
      .and_then(|_| writer.flush())
      .with_context(|| format!("unable to write {}", path.display()))?;
    log::info!("{} shapes, {} bytes written to {}", self.shapes.len(), document.len(), path.display());
    Ok(())
  }
}

impl Extend<Shape> for Canvas {
  fn extend<I: IntoIterator<Item = Shape>>(&mut self, iter: I) {
    self.shapes.extend(iter)
  }
}
