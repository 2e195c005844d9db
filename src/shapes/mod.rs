//! # Shapes
//!
//! Drawable 2D shapes: open polylines and closed polygons with a draw
//! style. Shapes serialize to JSON for the browser viewer and implement
//! `Transformable` so scene transforms can move them around.

use serde::{Deserialize, Serialize};

use crate::geometry::{Transformable, Vector2};

/// Draw style for a shape
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Style {
    /// Fill color; `None` means no fill
    pub fill: Option<String>,
    /// Stroke color; `None` means no stroke
    pub stroke: Option<String>,
    /// Stroke width in viewer pixels
    pub stroke_width: Option<u32>,
}

impl Default for Style {
    fn default() -> Self {
        Self {
            fill: Some("white".to_string()),
            stroke: Some("black".to_string()),
            stroke_width: Some(1),
        }
    }
}

/// A drawable shape: an ordered list of vertices plus a style
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Shape {
    pub vertices: Vec<Vector2>,
    pub style: Style,
    /// Whether the path is closed back to the first vertex when drawn
    pub closed: bool,
}

impl Shape {
    /// An open line segment from `start` to `end`
    pub fn line(start: Vector2, end: Vector2) -> Self {
        Self {
            vertices: vec![start, end],
            style: Style::default(),
            closed: false,
        }
    }

    /// A closed polygon from an ordered vertex list
    pub fn polygon(vertices: Vec<Vector2>) -> Self {
        Self {
            vertices,
            style: Style::default(),
            closed: true,
        }
    }

    /// An axis-aligned rectangle from its origin corner and extent,
    /// expanded counterclockwise into four corner vertices
    pub fn rect(origin: Vector2, extent: Vector2) -> Self {
        Self::polygon(vec![
            origin,
            Vector2::new(origin.x + extent.x, origin.y),
            Vector2::new(origin.x + extent.x, origin.y + extent.y),
            Vector2::new(origin.x, origin.y + extent.y),
        ])
    }

    /// Replace the style, builder-style
    pub fn with_style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    /// Append a vertex
    pub fn push_vertex(&mut self, vertex: Vector2) {
        self.vertices.push(vertex);
    }

    /// First vertex of a line
    pub fn start(&self) -> Option<Vector2> {
        self.vertices.first().copied()
    }

    /// Last vertex of a line
    pub fn end(&self) -> Option<Vector2> {
        self.vertices.last().copied()
    }
}

impl Transformable for Shape {
    fn map_points(&self, f: &mut dyn FnMut(Vector2) -> Vector2) -> Self {
        Self {
            vertices: self.vertices.iter().map(|&v| f(v)).collect(),
            style: self.style.clone(),
            closed: self.closed,
        }
    }
}
