//! Selection-driven dimension creation
//!
//! Each `add_*` function reads the host selection, validates all of it, and
//! only then creates records. A [`DimensionError::Selection`] or
//! [`DimensionError::Context`] error therefore leaves the document untouched.

use crate::config::DistanceScaledSizes;
use crate::dimensions::{
    AlignedDimension, AngleDimension, ArcDimension, AxisDimension, AxisFlags, BoundsDimension,
    DimensionKind, DimensionRecord, VertexRef,
};
use crate::document::DimensionDocument;
use crate::error::{DimensionError, Result};
use crate::notification::{NotificationCollection, NotificationType};
use crate::registry::IndexEntry;
use crate::selection::{GeometrySource, InteractionMode, ObjectKind, SelectionSource};
use crate::types::{ObjectId, Vector3};
use tracing::{debug, warn};

/// Name given to every new bounding box record
pub const BOUNDS_DIMENSION_NAME: &str = "Bounding Box Dimension";

/// Outcome of a successful operator run
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CreationReport {
    /// Created records, with the object whose registry holds them
    pub created: Vec<(ObjectId, IndexEntry)>,
    /// Non-fatal conditions met while creating
    pub notifications: NotificationCollection,
}

impl CreationReport {
    /// Number of records created
    pub fn len(&self) -> usize {
        self.created.len()
    }

    /// Check if nothing was created
    pub fn is_empty(&self) -> bool {
        self.created.is_empty()
    }
}

/// A validated segment waiting to be committed
#[derive(Debug, Clone, Copy)]
struct SegmentPlan {
    owner: ObjectId,
    point_a: VertexRef,
    point_b: VertexRef,
    distance: f64,
}

// ==================== Poll ====================

fn active_kind(selection: &dyn SelectionSource, geometry: &dyn GeometrySource) -> Option<ObjectKind> {
    selection
        .active_object()
        .and_then(|object| geometry.object_kind(object))
}

/// Whether [`add_aligned`] can run
pub fn poll_aligned(selection: &dyn SelectionSource, geometry: &dyn GeometrySource) -> bool {
    matches!(
        active_kind(selection, geometry),
        Some(ObjectKind::Mesh | ObjectKind::Empty | ObjectKind::Camera | ObjectKind::Light)
    )
}

/// Whether [`add_axis`] can run
pub fn poll_axis(selection: &dyn SelectionSource, geometry: &dyn GeometrySource) -> bool {
    poll_aligned(selection, geometry)
}

/// Whether [`add_bounds`] can run
pub fn poll_bounds(selection: &dyn SelectionSource, geometry: &dyn GeometrySource) -> bool {
    active_kind(selection, geometry) == Some(ObjectKind::Mesh)
}

/// Whether [`add_angle`] can run
pub fn poll_angle(selection: &dyn SelectionSource, geometry: &dyn GeometrySource) -> bool {
    selection.mode() == InteractionMode::EditMesh
        && active_kind(selection, geometry) == Some(ObjectKind::Mesh)
}

/// Whether [`add_arc`] can run
pub fn poll_arc(selection: &dyn SelectionSource, geometry: &dyn GeometrySource) -> bool {
    poll_angle(selection, geometry)
}

fn check_context(selection: &dyn SelectionSource, polled: bool, operator: &str) -> Result<()> {
    if !selection.in_viewport() {
        return Err(DimensionError::Context(
            "View3D not found, cannot run operator".to_string(),
        ));
    }
    if !polled {
        return Err(DimensionError::Context(format!(
            "{} dimensions cannot be added to the current selection",
            operator
        )));
    }
    Ok(())
}

// ==================== Aligned / Axis ====================

/// Add aligned dimensions from the current selection
///
/// In edit-mesh mode every selected vertex pair of every object in edit
/// mode gets a record; pairs already spanned by an aligned record are
/// skipped with a [`NotificationType::DuplicateSkipped`] notification. In
/// object mode the active and the other selected object are linked, each
/// through its single selected vertex or, without one, its origin.
pub fn add_aligned(
    document: &mut DimensionDocument,
    selection: &dyn SelectionSource,
    geometry: &dyn GeometrySource,
) -> Result<CreationReport> {
    check_context(selection, poll_aligned(selection, geometry), "Aligned")?;
    add_segments(document, selection, geometry, DimensionKind::Aligned)
}

/// Add axis dimensions from the current selection
///
/// Same selection rules as [`add_aligned`]; the measured axis comes from
/// the document defaults.
pub fn add_axis(
    document: &mut DimensionDocument,
    selection: &dyn SelectionSource,
    geometry: &dyn GeometrySource,
) -> Result<CreationReport> {
    check_context(selection, poll_axis(selection, geometry), "Axis")?;
    add_segments(document, selection, geometry, DimensionKind::Axis)
}

fn add_segments(
    document: &mut DimensionDocument,
    selection: &dyn SelectionSource,
    geometry: &dyn GeometrySource,
    kind: DimensionKind,
) -> Result<CreationReport> {
    let mut report = CreationReport::default();
    let plans = match selection.mode() {
        InteractionMode::EditMesh => edit_mode_segments(selection, geometry)?,
        InteractionMode::Object => {
            vec![object_mode_segment(selection, geometry, &mut report.notifications)?]
        }
        InteractionMode::Other => {
            return Err(DimensionError::Context(
                "Dimensions can only be added in object or edit mode".to_string(),
            ))
        }
    };

    // Everything is validated; commit.
    let defaults = document.defaults.clone();
    for plan in plans {
        let registry = document.registry_or_insert(plan.owner);
        let name = match kind {
            DimensionKind::Axis => format!("Axis {}", registry.count(kind) + 1),
            _ => format!("Dimension {}", registry.count(kind) + 1),
        };
        let mut record: DimensionRecord = match kind {
            DimensionKind::Axis => {
                AxisDimension::new(name, plan.point_a, plan.point_b, defaults.axis).into()
            }
            _ => AlignedDimension::new(name, plan.point_a, plan.point_b).into(),
        };

        if let Err(err) = registry.ensure_unique_segment(&record) {
            warn!(owner = %plan.owner, "{}", err);
            report
                .notifications
                .notify(NotificationType::DuplicateSkipped, plan.owner, err.to_string());
            continue;
        }

        defaults.apply_segment(record.common_mut());
        DistanceScaledSizes::from_distance(plan.distance).apply(record.common_mut());
        let entry = registry.create(record);
        report.created.push((plan.owner, entry));
    }

    debug!(
        %kind,
        created = report.created.len(),
        skipped = report.notifications.of_type(NotificationType::DuplicateSkipped).len(),
        "added segment dimensions"
    );
    Ok(report)
}

fn edit_mode_segments(
    selection: &dyn SelectionSource,
    geometry: &dyn GeometrySource,
) -> Result<Vec<SegmentPlan>> {
    let objects = selection.objects_in_edit_mode();
    if objects.is_empty() {
        return Err(DimensionError::Selection(
            "No object is in edit mode".to_string(),
        ));
    }

    let mut plans = Vec::new();
    for object in objects {
        let mut vertices: Vec<u32> = selection
            .smart_selected_vertices(object)
            .into_iter()
            .flatten()
            .collect();
        if vertices.len() < 2 {
            vertices = selection.selected_vertices(object);
        }
        if vertices.len() < 2 {
            return Err(DimensionError::Selection(format!(
                "Select at least two vertices for creating measure segment on {}",
                object
            )));
        }

        for pair in vertices.chunks_exact(2) {
            let point_a = VertexRef::vertex(object, pair[1]);
            let point_b = VertexRef::vertex(object, pair[0]);
            let a = position(geometry, point_a)?;
            let b = position(geometry, point_b)?;
            plans.push(SegmentPlan {
                owner: object,
                point_a,
                point_b,
                distance: a.distance(&b),
            });
        }
    }
    Ok(plans)
}

fn object_mode_segment(
    selection: &dyn SelectionSource,
    geometry: &dyn GeometrySource,
    notifications: &mut NotificationCollection,
) -> Result<SegmentPlan> {
    let main = selection
        .active_object()
        .ok_or_else(|| DimensionError::Selection("No active object".to_string()))?;
    let selected = selection.selected_objects();
    let link = match selected.as_slice() {
        [first, second] if first != second => {
            if *first == main {
                *second
            } else {
                *first
            }
        }
        _ => {
            return Err(DimensionError::Selection(
                "Select two objects only, and optionally 1 vertex or 2 vertices \
                 (one of each object)"
                    .to_string(),
            ))
        }
    };

    let point_b = single_vertex(selection, link, "destination object", notifications)?;
    let point_a = single_vertex(selection, main, "active object", notifications)?;

    let a = location(geometry, main)?;
    let b = location(geometry, link)?;
    Ok(SegmentPlan {
        owner: main,
        point_a,
        point_b,
        distance: a.distance(&b),
    })
}

/// The object's only selected vertex, or its origin when none is selected
fn single_vertex(
    selection: &dyn SelectionSource,
    object: ObjectId,
    role: &str,
    notifications: &mut NotificationCollection,
) -> Result<VertexRef> {
    match selection.selected_vertices(object).as_slice() {
        [] => {
            notifications.notify(
                NotificationType::OriginFallback,
                object,
                format!("No vertex selected on the {}, using its origin", role),
            );
            Ok(VertexRef::origin(object))
        }
        [vertex] => Ok(VertexRef::vertex(object, *vertex)),
        _ => Err(DimensionError::Selection(format!(
            "The {} has more than one vertex selected. Select only 1",
            role
        ))),
    }
}

fn position(geometry: &dyn GeometrySource, point: VertexRef) -> Result<Vector3> {
    geometry
        .position(point)
        .ok_or_else(|| DimensionError::Selection(format!("Vertex {} does not exist", point)))
}

fn location(geometry: &dyn GeometrySource, object: ObjectId) -> Result<Vector3> {
    geometry
        .object_location(object)
        .ok_or_else(|| DimensionError::Selection(format!("Object {} has no location", object)))
}

// ==================== Angle / Arc ====================

/// The three most recently clicked vertices of the active mesh
fn clicked_triple(
    selection: &dyn SelectionSource,
    geometry: &dyn GeometrySource,
    measure: &str,
) -> Result<(ObjectId, [u32; 3])> {
    let object = selection
        .active_object()
        .ok_or_else(|| DimensionError::Selection("No active object".to_string()))?;
    let history = selection.selected_vertex_history(object);
    let triple = <[u32; 3]>::try_from(history.as_slice()).map_err(|_| {
        DimensionError::Selection(format!(
            "Select three vertices for creating {} measure",
            measure
        ))
    })?;
    for vertex in triple {
        position(geometry, VertexRef::vertex(object, vertex))?;
    }
    Ok((object, triple))
}

/// Add an angle dimension over the last three clicked vertices
///
/// The second vertex is the angle's vertex.
pub fn add_angle(
    document: &mut DimensionDocument,
    selection: &dyn SelectionSource,
    geometry: &dyn GeometrySource,
) -> Result<CreationReport> {
    check_context(selection, poll_angle(selection, geometry), "Angle")?;
    let (object, [a, b, c]) = clicked_triple(selection, geometry, "angle")?;

    let count = document
        .registry(object)
        .map_or(0, |r| r.count(DimensionKind::Angle));
    let mut angle = AngleDimension::new(format!("Angle {}", count + 1), a, b, c);
    angle.radius = document.defaults.angle_radius;
    document.defaults.apply_angle(&mut angle.common);

    let entry = document.registry_or_insert(object).create(angle);
    debug!(%object, index = entry.index, "added angle dimension");
    Ok(CreationReport {
        created: vec![(object, entry)],
        notifications: NotificationCollection::new(),
    })
}

/// Add an arc dimension over the last three clicked vertices
///
/// The first and third vertices are the arc's ends.
pub fn add_arc(
    document: &mut DimensionDocument,
    selection: &dyn SelectionSource,
    geometry: &dyn GeometrySource,
) -> Result<CreationReport> {
    check_context(selection, poll_arc(selection, geometry), "Arc")?;
    let (object, [a, b, c]) = clicked_triple(selection, geometry, "arc")?;

    let count = document
        .registry(object)
        .map_or(0, |r| r.count(DimensionKind::Arc));
    let arc = ArcDimension::new(format!("Arc {}", count + 1), a, b, c);

    let entry = document.registry_or_insert(object).create(arc);
    debug!(%object, index = entry.index, "added arc dimension");
    Ok(CreationReport {
        created: vec![(object, entry)],
        notifications: NotificationCollection::new(),
    })
}

// ==================== Bounds ====================

/// Add a bounding box dimension to the active mesh
pub fn add_bounds(
    document: &mut DimensionDocument,
    selection: &dyn SelectionSource,
    geometry: &dyn GeometrySource,
) -> Result<CreationReport> {
    check_context(selection, poll_bounds(selection, geometry), "Bounding box")?;
    if selection.mode() != InteractionMode::Object {
        return Err(DimensionError::Context(
            "Bounding box dimensions are added in object mode".to_string(),
        ));
    }
    if selection.selected_objects().len() > 1 {
        return Err(DimensionError::Selection(
            "Select one object only".to_string(),
        ));
    }
    let object = selection
        .active_object()
        .ok_or_else(|| DimensionError::Selection("No active object".to_string()))?;

    let bounds = BoundsDimension::new(
        BOUNDS_DIMENSION_NAME,
        AxisFlags::from_bools(document.defaults.bound_axes),
    );
    let entry = document.registry_or_insert(object).create(bounds);
    debug!(%object, index = entry.index, "added bounding box dimension");
    Ok(CreationReport {
        created: vec![(object, entry)],
        notifications: NotificationCollection::new(),
    })
}
