//! Shared test utilities for archdim integration tests.
//!
//! [`MockHost`] stands in for the host application: it answers both the
//! selection and the geometry queries from plain maps that each test fills
//! through the builder methods.

#![allow(dead_code)]

pub mod builders;

use archdim::selection::{GeometrySource, InteractionMode, ObjectKind, SelectionSource};
use archdim::{IndexEntry, ObjectId, Vector3};
use std::collections::HashMap;

/// Scene and selection state of a fake host
#[derive(Debug, Clone)]
pub struct MockHost {
    pub in_viewport: bool,
    pub mode: InteractionMode,
    pub active: Option<ObjectId>,
    pub selected: Vec<ObjectId>,
    pub edit_objects: Vec<ObjectId>,
    pub kinds: HashMap<ObjectId, ObjectKind>,
    pub locations: HashMap<ObjectId, Vector3>,
    /// Vertex positions relative to the object location
    pub vertices: HashMap<ObjectId, Vec<Vector3>>,
    pub smart_edges: HashMap<ObjectId, Vec<[u32; 2]>>,
    pub selected_vertices: HashMap<ObjectId, Vec<u32>>,
    pub history: HashMap<ObjectId, Vec<u32>>,
}

impl Default for MockHost {
    fn default() -> Self {
        Self {
            in_viewport: true,
            mode: InteractionMode::Object,
            active: None,
            selected: Vec::new(),
            edit_objects: Vec::new(),
            kinds: HashMap::new(),
            locations: HashMap::new(),
            vertices: HashMap::new(),
            smart_edges: HashMap::new(),
            selected_vertices: HashMap::new(),
            history: HashMap::new(),
        }
    }
}

impl MockHost {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a mesh object
    pub fn with_mesh(mut self, object: ObjectId, location: Vector3, vertices: Vec<Vector3>) -> Self {
        self.kinds.insert(object, ObjectKind::Mesh);
        self.locations.insert(object, location);
        self.vertices.insert(object, vertices);
        self
    }

    /// Add a vertex-less object
    pub fn with_object(mut self, object: ObjectId, kind: ObjectKind, location: Vector3) -> Self {
        self.kinds.insert(object, kind);
        self.locations.insert(object, location);
        self
    }

    /// Enter edit-mesh mode on the given objects, the first one active
    pub fn edit(mut self, objects: &[ObjectId]) -> Self {
        self.mode = InteractionMode::EditMesh;
        self.active = objects.first().copied();
        self.edit_objects = objects.to_vec();
        self.selected = objects.to_vec();
        self
    }

    /// Object mode with an active object and a selection
    pub fn select_objects(mut self, active: ObjectId, selected: &[ObjectId]) -> Self {
        self.mode = InteractionMode::Object;
        self.active = Some(active);
        self.selected = selected.to_vec();
        self
    }

    pub fn select_vertices(mut self, object: ObjectId, vertices: &[u32]) -> Self {
        self.selected_vertices.insert(object, vertices.to_vec());
        self
    }

    pub fn select_edges(mut self, object: ObjectId, edges: &[[u32; 2]]) -> Self {
        self.smart_edges.insert(object, edges.to_vec());
        self
    }

    pub fn click(mut self, object: ObjectId, vertices: &[u32]) -> Self {
        self.history.insert(object, vertices.to_vec());
        self
    }

    pub fn outside_viewport(mut self) -> Self {
        self.in_viewport = false;
        self
    }
}

impl SelectionSource for MockHost {
    fn in_viewport(&self) -> bool {
        self.in_viewport
    }

    fn mode(&self) -> InteractionMode {
        self.mode
    }

    fn active_object(&self) -> Option<ObjectId> {
        self.active
    }

    fn selected_objects(&self) -> Vec<ObjectId> {
        self.selected.clone()
    }

    fn objects_in_edit_mode(&self) -> Vec<ObjectId> {
        self.edit_objects.clone()
    }

    fn smart_selected_vertices(&self, object: ObjectId) -> Vec<[u32; 2]> {
        self.smart_edges.get(&object).cloned().unwrap_or_default()
    }

    fn selected_vertices(&self, object: ObjectId) -> Vec<u32> {
        self.selected_vertices.get(&object).cloned().unwrap_or_default()
    }

    fn selected_vertex_history(&self, object: ObjectId) -> Vec<u32> {
        self.history.get(&object).cloned().unwrap_or_default()
    }
}

impl GeometrySource for MockHost {
    fn object_kind(&self, object: ObjectId) -> Option<ObjectKind> {
        self.kinds.get(&object).copied()
    }

    fn object_location(&self, object: ObjectId) -> Option<Vector3> {
        self.locations.get(&object).copied()
    }

    fn vertex_position(&self, object: ObjectId, vertex: u32) -> Option<Vector3> {
        let location = self.locations.get(&object)?;
        let local = self.vertices.get(&object)?.get(vertex as usize)?;
        Some(*location + *local)
    }

    fn object_vertices(&self, object: ObjectId) -> Vec<Vector3> {
        match (self.locations.get(&object), self.vertices.get(&object)) {
            (Some(location), Some(vertices)) => vertices.iter().map(|v| *location + *v).collect(),
            _ => Vec::new(),
        }
    }
}

/// Unit square in the XY plane: 0 (0,0) 1 (1,0) 2 (1,1) 3 (0,1)
pub fn unit_square() -> Vec<Vector3> {
    vec![
        Vector3::new(0.0, 0.0, 0.0),
        Vector3::new(1.0, 0.0, 0.0),
        Vector3::new(1.0, 1.0, 0.0),
        Vector3::new(0.0, 1.0, 0.0),
    ]
}

/// `(kind, index)` pairs of a registry's entries, in order
pub fn keys(entries: &[IndexEntry]) -> Vec<(archdim::DimensionKind, usize)> {
    entries.iter().map(IndexEntry::key).collect()
}

/// Assert two floats are equal within 1e-9
pub fn assert_near(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-9,
        "expected {expected}, got {actual}"
    );
}
