//! Host collaborator interfaces
//!
//! The registry never talks to the host scene directly. Operators read the
//! user's selection through [`SelectionSource`] and measurements read
//! positions through [`GeometrySource`].

use crate::dimensions::VertexRef;
use crate::types::{ObjectId, Vector3};

/// Editing mode of the host at the time an operator runs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InteractionMode {
    /// Whole objects are selected
    #[default]
    Object,
    /// Mesh vertices/edges/faces are selected
    EditMesh,
    /// Any other mode (sculpt, paint, ...)
    Other,
}

/// Type of a host object
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ObjectKind {
    Mesh,
    Empty,
    Camera,
    Light,
    Other,
}

/// Read access to the user's current selection
pub trait SelectionSource {
    /// Whether the action was triggered from a 3D viewport
    fn in_viewport(&self) -> bool;

    /// Current editing mode
    fn mode(&self) -> InteractionMode;

    /// Active object, if any
    fn active_object(&self) -> Option<ObjectId>;

    /// Selected objects in object mode (active one included)
    fn selected_objects(&self) -> Vec<ObjectId>;

    /// Objects currently in edit mode
    fn objects_in_edit_mode(&self) -> Vec<ObjectId>;

    /// Vertex pairs of selected edges, in selection order
    fn smart_selected_vertices(&self, object: ObjectId) -> Vec<[u32; 2]>;

    /// Selected vertex indices
    fn selected_vertices(&self, object: ObjectId) -> Vec<u32>;

    /// Up to three most recently clicked vertices, in click order
    fn selected_vertex_history(&self, object: ObjectId) -> Vec<u32>;
}

/// Read access to scene geometry
pub trait GeometrySource {
    /// Type of an object
    fn object_kind(&self, object: ObjectId) -> Option<ObjectKind>;

    /// World-space location of an object's origin
    fn object_location(&self, object: ObjectId) -> Option<Vector3>;

    /// World-space position of a mesh vertex
    fn vertex_position(&self, object: ObjectId, vertex: u32) -> Option<Vector3>;

    /// World-space positions of every vertex of an object
    fn object_vertices(&self, object: ObjectId) -> Vec<Vector3>;

    /// Position of a vertex reference (origin when no vertex is set)
    fn position(&self, point: VertexRef) -> Option<Vector3> {
        match point.vertex {
            Some(vertex) => self.vertex_position(point.object, vertex),
            None => self.object_location(point.object),
        }
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use super::*;
    use std::collections::HashMap;

    /// Fixed geometry for unit tests
    #[derive(Debug, Default)]
    pub(crate) struct PointCloud {
        pub locations: HashMap<ObjectId, Vector3>,
        pub vertices: HashMap<ObjectId, Vec<Vector3>>,
    }

    impl PointCloud {
        pub fn with_mesh(object: ObjectId, vertices: Vec<Vector3>) -> Self {
            let mut cloud = PointCloud::default();
            cloud.locations.insert(object, Vector3::ZERO);
            cloud.vertices.insert(object, vertices);
            cloud
        }
    }

    impl GeometrySource for PointCloud {
        fn object_kind(&self, object: ObjectId) -> Option<ObjectKind> {
            self.locations.get(&object).map(|_| ObjectKind::Mesh)
        }

        fn object_location(&self, object: ObjectId) -> Option<Vector3> {
            self.locations.get(&object).copied()
        }

        fn vertex_position(&self, object: ObjectId, vertex: u32) -> Option<Vector3> {
            self.vertices.get(&object)?.get(vertex as usize).copied()
        }

        fn object_vertices(&self, object: ObjectId) -> Vec<Vector3> {
            self.vertices.get(&object).cloned().unwrap_or_default()
        }
    }
}
