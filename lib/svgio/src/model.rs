use indexmap::IndexMap;
use ordered_float::OrderedFloat;

//
// station map
//

/// Point in normalised coordinates, origin bottom-left.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pos {
    pub x: f64,
    pub y: f64,
}

impl Pos {
    pub fn new(x: f64, y: f64) -> Self {
        Pos { x, y }
    }
}

/// Stations in the order they first appear in the map source.
/// Inserting a name twice keeps the first slot and the last position.
#[derive(Debug, Clone, Default)]
pub struct StationMap {
    stations: IndexMap<String, Pos>,
}

impl StationMap {
    pub fn new() -> Self {
        Default::default()
    }

    pub fn insert(&mut self, name: String, pos: Pos) {
        self.stations.insert(name, pos);
    }

    pub fn get(&self, name: &str) -> Option<Pos> {
        self.stations.get(name).copied()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.stations.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.stations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stations.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, Pos)> {
        self.stations.iter().map(|(name, pos)| (name.as_str(), *pos))
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.stations.keys().map(|name| name.as_str())
    }

    /// Largest x or y value over all stations.
    pub fn extent(&self) -> Option<f64> {
        self.stations
            .values()
            .flat_map(|p| vec![p.x, p.y])
            .map(OrderedFloat)
            .max()
            .map(|m| m.into_inner())
    }

    /// Divides every coordinate by `factor`.
    pub fn scale_down(&mut self, factor: f64) {
        for pos in self.stations.values_mut() {
            pos.x /= factor;
            pos.y /= factor;
        }
    }
}

//
// drawing primitives
//

#[derive(Debug, Clone, PartialEq)]
pub struct Style {
    pub fill: String,
    pub stroke: String,
    /// Stroke width in points.
    pub stroke_width: f64,
}

impl Style {
    pub fn new(fill: &str, stroke: &str, stroke_width: f64) -> Self {
        Style {
            fill: fill.to_string(),
            stroke: stroke.to_string(),
            stroke_width,
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Baseline {
    Alphabetic,
    Central,
}

/// Shapes are in normalised page units. Text is always centred horizontally.
#[derive(Debug, Clone, PartialEq)]
pub enum Shape {
    Rect {
        lower_left: Pos,
        width: f64,
        height: f64,
        style: Style,
    },
    Ellipse {
        center: Pos,
        width: f64,
        height: f64,
        style: Style,
    },
    Text {
        at: Pos,
        content: String,
        font_size: f64,
        baseline: Baseline,
    },
}

/// One output page. Shapes paint in the order they were added.
#[derive(Debug, Clone)]
pub struct Page {
    pub title: String,
    pub width_mm: f64,
    pub height_mm: f64,
    pub font_family: String,
    shapes: Vec<Shape>,
}

impl Page {
    pub fn new(title: String, (width_mm, height_mm): (f64, f64), font_family: &str) -> Self {
        Page {
            title,
            width_mm,
            height_mm,
            font_family: font_family.to_string(),
            shapes: Vec::new(),
        }
    }

    pub fn rect(&mut self, lower_left: Pos, width: f64, height: f64, style: &Style) {
        self.shapes.push(Shape::Rect {
            lower_left,
            width,
            height,
            style: style.clone(),
        });
    }

    /// Axis-aligned rect given by its centre.
    pub fn centered_rect(&mut self, center: Pos, width: f64, height: f64, style: &Style) {
        let lower_left = Pos::new(center.x - width / 2.0, center.y - height / 2.0);
        self.rect(lower_left, width, height, style);
    }

    pub fn ellipse(&mut self, center: Pos, width: f64, height: f64, style: &Style) {
        self.shapes.push(Shape::Ellipse {
            center,
            width,
            height,
            style: style.clone(),
        });
    }

    pub fn text(&mut self, at: Pos, content: &str, font_size: f64, baseline: Baseline) {
        self.shapes.push(Shape::Text {
            at,
            content: content.to_string(),
            font_size,
            baseline,
        });
    }

    pub fn shapes(&self) -> &[Shape] {
        &self.shapes
    }

    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }
}
