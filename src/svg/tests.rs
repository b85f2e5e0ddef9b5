use {
  super::*,
  crate::{
    error::Result,
    geometry::V2
  },
  euclid::Box2D,
  regex::Regex
};

const EMPTY_DOCUMENT: &str = r##"<?xml version="1.0" encoding="UTF-8" ?>
<svg version="1.1" width="900" height="900" xmlns="http://www.w3.org/2000/svg">
<rect width="900" height="900" x="0" y="0" fill="#ffffff" />

</svg>"##;

fn white_black() -> Style {
  Style::new("white", "black", 1)
}

#[test] fn point_markup() {
  assert_eq!(Shape::Point(P2::new(3, -4)).markup(), "3,-4");
}

#[test] fn triangle_markup() {
  let shape: Shape = Triangle::new(P2::new(100, 10), P2::new(150, 190), P2::new(50, 190))
    .style(Style::new("lime", "purple", 3))
    .into();
  assert_eq!(
    shape.markup(),
    r#"<polygon points="100,10 150,190 50,190" style="fill:lime;stroke:purple;stroke-width:3" />"#
  );
}

#[test] fn rectangle_markup() {
  let shape: Shape = Quad::new(P2::new(0, 0), P2::new(2, 0), P2::new(2, 5), P2::new(0, 5))
    .style(Style::new("rgb(10,80,80)", "#FFFFFF", 1))
    .into();
  assert_eq!(
    shape.markup(),
    r#"<polygon points="0,0 2,0 2,5 0,5" style="fill:rgb(10,80,80);stroke:#FFFFFF;stroke-width:1" />"#
  );
}

#[test] fn ellipse_markup() {
  let shape: Shape = Ellipse { center: P2::new(450, 450), radii: V2::new(170, 41) }
    .style(Style::new("none", "red", 0))
    .into();
  assert_eq!(
    shape.markup(),
    r#"<ellipse rx="170" ry="41" cx="450" cy="450" style="fill:none;stroke:red;stroke-width:0" />"#
  );
}

#[test] fn cube_markup_is_three_faces() {
  let cube = IsometricCube::from_origin(P2::new(100, 100), 10);
  let shape: Shape = cube.style(white_black()).into();
  let markup = shape.markup();
  let lines = markup.lines().collect::<Vec<_>>();
  assert_eq!(lines.len(), 3);
  assert!(lines.iter().all(|line| line.starts_with("<polygon ")));
  assert!(lines[2].contains(r#"points="100,100 101,90 101,100 100,110""#));
}

#[test] fn empty_canvas() {
  assert_eq!(Canvas::default().serialize(), EMPTY_DOCUMENT);
}

#[test] fn fragments_in_order() {
  let mut canvas = Canvas::new(Template::default());
  canvas.push(Triangle::from_center(P2::new(10, 10), 4).style(white_black()));
  canvas.push(Ellipse { center: P2::new(5, 5), radii: V2::new(1, 2) }.style(white_black()));
  canvas.push(Triangle::from_center(P2::new(20, 20), 4).style(white_black()));

  let document = canvas.serialize();
  let expected = canvas.shapes.iter()
    .map(|shape| format!("{}\n", shape.markup()))
    .collect::<String>();
  let (head, tail) = EMPTY_DOCUMENT.split_at(EMPTY_DOCUMENT.len() - "\n</svg>".len());
  assert_eq!(document, format!("{}{}{}", head, expected, tail));
}

#[test] fn with_shapes_appends() {
  let mut canvas = Canvas::default();
  canvas.push(P2::new(1, 2));
  let canvas = canvas.with_shapes(vec![Shape::Point(P2::new(3, 4)), Shape::Point(P2::new(5, 6))]);
  assert_eq!(canvas.shapes, [P2::new(1, 2), P2::new(3, 4), P2::new(5, 6)].map(Shape::Point));
}

#[test] fn cropped_template() {
  let canvas = Canvas::new(Template::cropped(Box2D::new(P2::new(100, 200), P2::new(800, 700))));
  assert_eq!(
    canvas.serialize(),
    "<?xml version=\"1.0\" encoding=\"UTF-8\" ?>\n\
     <svg version=\"1.1\" viewBox=\"100 200 700 500\" xmlns=\"http://www.w3.org/2000/svg\">\n\
     \n</svg>"
  );

  let canvas = Canvas::new(Template::cropped(Box2D::new(P2::new(100, 200), P2::new(800, 700)))
    .with_background("black"));
  assert!(canvas.serialize()
    .contains(r#"<rect width="700" height="500" x="100" y="200" fill="black" />"#));
}

#[test] fn single_triangle_document() -> Result<()> {
  let path = std::env::temp_dir().join("ghost_circle_single_triangle.svg");
  let mut canvas = Canvas::new(Template::default());
  canvas.push(Triangle::from_center(P2::new(100, 100), 10).style(white_black()));
  canvas.save(&path)?;

  let document = std::fs::read_to_string(&path)?;
  assert_eq!(document, canvas.serialize());

  let polygon = Regex::new(r#"<polygon points="(-?\d+),(-?\d+) (-?\d+),(-?\d+) (-?\d+),(-?\d+)" style="([^"]*)" />"#)?;
  let matches = polygon.captures_iter(&document).collect::<Vec<_>>();
  assert_eq!(matches.len(), 1);
  let coords = (1..=6)
    .map(|i| matches[0][i].parse::<i32>())
    .collect::<std::result::Result<Vec<_>, _>>()?;
  assert_eq!(coords, [100, 105, 95, 97, 105, 97]);
  assert_eq!(&matches[0][7], "fill:white;stroke:black;stroke-width:1");

  std::fs::remove_file(&path)?;
  Ok(())
}

#[test] fn save_overwrites() -> Result<()> {
  let path = std::env::temp_dir().join("ghost_circle_overwrite.svg");
  std::fs::write(&path, "x".repeat(4096))?;
  Canvas::default().save(&path)?;
  assert_eq!(std::fs::read_to_string(&path)?, EMPTY_DOCUMENT);
  std::fs::remove_file(&path)?;
  Ok(())
}

#[test] fn save_reports_path() {
  let path = std::env::temp_dir().join("ghost_circle_missing_dir").join("art.svg");
  let err = Canvas::default().save(&path).unwrap_err();
  assert!(err.to_string().contains("ghost_circle_missing_dir"), "{}", err);
}
