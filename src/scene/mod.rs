//! # Scene
//!
//! A tree of named components, each holding named shapes, named children,
//! and a local affine transform. `world_shapes` flattens the tree into
//! world coordinates by applying every ancestor transform on the way down.
//!
//! Iteration order is deterministic (sorted by name), so two identical
//! trees always flatten to the same shape list.

mod errors;

use std::collections::BTreeMap;

use crate::geometry::AffineTransform;
use crate::shapes::Shape;

pub use errors::{SceneError, SceneResult};

/// A named node in the scene tree
#[derive(Debug, Clone, PartialEq)]
pub struct Component {
    name: String,
    transform: AffineTransform,
    shapes: BTreeMap<String, Shape>,
    children: BTreeMap<String, Component>,
}

impl Component {
    /// Create an empty component
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            transform: AffineTransform::identity(),
            shapes: BTreeMap::new(),
            children: BTreeMap::new(),
        }
    }

    /// Component name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Local transform of this node
    pub fn transform(&self) -> AffineTransform {
        self.transform
    }

    /// Replace the local transform
    pub fn set_transform(&mut self, transform: AffineTransform) {
        self.transform = transform;
    }

    /// Compose another transform on top of the local one
    pub fn apply_transform(&mut self, transform: &AffineTransform) {
        self.transform = self.transform.then(transform);
    }

    // ==================
    // Shapes
    // ==================

    /// Whether a shape with this name exists
    pub fn has_shape(&self, name: &str) -> bool {
        self.shapes.contains_key(name)
    }

    /// Add a new shape; the name must be free
    pub fn add_shape(&mut self, name: impl Into<String>, shape: Shape) -> SceneResult<()> {
        let name = name.into();
        if self.has_shape(&name) {
            return Err(SceneError::ShapeExists {
                component: self.name.clone(),
                shape: name,
            });
        }
        self.shapes.insert(name, shape);
        Ok(())
    }

    /// Replace an existing shape; the name must be taken
    pub fn update_shape(&mut self, name: &str, shape: Shape) -> SceneResult<()> {
        if !self.has_shape(name) {
            return Err(SceneError::ShapeMissing {
                component: self.name.clone(),
                shape: name.to_string(),
            });
        }
        self.shapes.insert(name.to_string(), shape);
        Ok(())
    }

    /// Add or replace a shape unconditionally
    pub fn upsert_shape(&mut self, name: impl Into<String>, shape: Shape) {
        self.shapes.insert(name.into(), shape);
    }

    /// Add or replace a shape, builder-style
    pub fn with_shape(mut self, name: impl Into<String>, shape: Shape) -> Self {
        self.upsert_shape(name, shape);
        self
    }

    /// Look up a shape by name
    pub fn shape(&self, name: &str) -> Option<&Shape> {
        self.shapes.get(name)
    }

    /// Iterate shapes in name order
    pub fn shapes(&self) -> impl Iterator<Item = (&str, &Shape)> {
        self.shapes.iter().map(|(name, shape)| (name.as_str(), shape))
    }

    // ==================
    // Children
    // ==================

    /// Whether a child with this name exists
    pub fn has_child(&self, name: &str) -> bool {
        self.children.contains_key(name)
    }

    /// Add a new child; the name must be free
    pub fn add_child(&mut self, name: impl Into<String>, child: Component) -> SceneResult<()> {
        let name = name.into();
        if self.has_child(&name) {
            return Err(SceneError::ChildExists {
                component: self.name.clone(),
                child: name,
            });
        }
        self.children.insert(name, child);
        Ok(())
    }

    /// Replace an existing child; the name must be taken
    pub fn update_child(&mut self, name: &str, child: Component) -> SceneResult<()> {
        if !self.has_child(name) {
            return Err(SceneError::ChildMissing {
                component: self.name.clone(),
                child: name.to_string(),
            });
        }
        self.children.insert(name.to_string(), child);
        Ok(())
    }

    /// Add or replace a child unconditionally
    pub fn upsert_child(&mut self, name: impl Into<String>, child: Component) {
        self.children.insert(name.into(), child);
    }

    /// Add or replace a child, builder-style
    pub fn with_child(mut self, name: impl Into<String>, child: Component) -> Self {
        self.upsert_child(name, child);
        self
    }

    /// Look up a child by name
    pub fn child(&self, name: &str) -> Option<&Component> {
        self.children.get(name)
    }

    /// Look up a child by name, mutably
    pub fn child_mut(&mut self, name: &str) -> Option<&mut Component> {
        self.children.get_mut(name)
    }

    /// Iterate children in name order
    pub fn children(&self) -> impl Iterator<Item = &Component> {
        self.children.values()
    }

    // ==================
    // Flattening
    // ==================

    /// Flatten the tree into world coordinates.
    ///
    /// Every shape of this node and of every descendant is returned with
    /// all ancestor transforms applied, own shapes first, then children in
    /// name order.
    pub fn world_shapes(&self) -> Vec<Shape> {
        let mut out = Vec::new();

        for shape in self.shapes.values() {
            out.push(self.transform.apply(shape));
        }

        for child in self.children.values() {
            for shape in child.world_shapes() {
                out.push(self.transform.apply(&shape));
            }
        }

        out
    }
}
