//! Creation-time defaults
//!
//! [`DimensionDefaults`] holds the scene-level settings new records are
//! initialized from. It is passed explicitly to the operators and can be
//! loaded from / saved to JSON.

use crate::dimensions::{DimensionCommon, ViewPlane};
use crate::error::{DimensionError, Result};
use crate::style::TextAlignment;
use crate::types::{MeasureAxis, ObjectId};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::debug;

/// Scene-level defaults applied to newly created records
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DimensionDefaults {
    /// Shared style linked by new records (`None` keeps local styling)
    pub default_style: Option<String>,
    /// Scene camera; new records are only drawn through it
    pub camera: Option<ObjectId>,
    /// Plane constraint of new aligned and axis records
    pub view_plane: ViewPlane,
    /// Axis measured by new axis records
    pub axis: MeasureAxis,
    /// Axes drawn by new bounding box records (X, Y, Z)
    pub bound_axes: [bool; 3],
    /// Line weight of new records
    pub line_weight: u32,
    /// Arc radius of new angle records
    pub angle_radius: f64,
    /// Font size of new angle records
    pub angle_font_size: u32,
    /// Text resolution of new angle records
    pub angle_text_resolution: u32,
}

impl Default for DimensionDefaults {
    fn default() -> Self {
        Self {
            default_style: None,
            camera: None,
            view_plane: ViewPlane::None,
            axis: MeasureAxis::X,
            bound_axes: [true, true, true],
            line_weight: 1,
            angle_radius: 0.25,
            angle_font_size: 7,
            angle_text_resolution: 72,
        }
    }
}

impl DimensionDefaults {
    /// Create defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder: Link new records to a shared style
    pub fn with_style(mut self, name: impl Into<String>) -> Self {
        self.default_style = Some(name.into());
        self
    }

    /// Builder: Gate new records on a camera
    pub fn with_camera(mut self, camera: ObjectId) -> Self {
        self.camera = Some(camera);
        self
    }

    /// Parse defaults from a JSON document
    ///
    /// Missing fields keep their default values.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let defaults: Self = serde_json::from_str(json)?;
        defaults.validate()?;
        Ok(defaults)
    }

    /// Serialize to pretty-printed JSON
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Load defaults from a JSON file
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let defaults = Self::from_json_str(&content)?;
        debug!(path = %path.display(), "loaded dimension defaults");
        Ok(defaults)
    }

    /// Save defaults to a JSON file
    pub fn save_to_file(&self, path: &Path) -> Result<()> {
        self.validate()?;
        std::fs::write(path, self.to_json()?)?;
        Ok(())
    }

    /// Validate value ranges
    pub fn validate(&self) -> Result<()> {
        if self.line_weight == 0 {
            return Err(DimensionError::InvalidConfig(
                "line_weight must be > 0".to_string(),
            ));
        }
        if !self.angle_radius.is_finite() || self.angle_radius <= 0.0 {
            return Err(DimensionError::InvalidConfig(format!(
                "angle_radius must be a positive number, got {}",
                self.angle_radius
            )));
        }
        if self.default_style.as_deref() == Some("") {
            return Err(DimensionError::InvalidConfig(
                "default_style must not be empty; omit it instead".to_string(),
            ));
        }
        Ok(())
    }

    /// Apply the settings shared by aligned and axis records
    pub(crate) fn apply_segment(&self, common: &mut DimensionCommon) {
        common.style = self.default_style.clone();
        common.local_style.line_weight = self.line_weight;
        common.local_style.text_alignment = TextAlignment::Center;
        common.visible_in_view = self.camera;
        common.view_plane = self.view_plane;
    }

    /// Apply the settings of angle records
    pub(crate) fn apply_angle(&self, common: &mut DimensionCommon) {
        common.style = self.default_style.clone();
        common.local_style.line_weight = self.line_weight;
        common.local_style.font_size = self.angle_font_size;
        common.local_style.text_resolution = self.angle_text_resolution;
        common.local_style.text_alignment = TextAlignment::Center;
        common.visible_in_view = self.camera;
    }
}

/// Sizes derived from the measured distance of a new segment record
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DistanceScaledSizes {
    /// `ceil(3 * d)`
    pub endcap_size: u32,
    /// `ceil(15 * d)`
    pub font_size: u32,
    /// `d / 4`
    pub offset: f64,
    /// `d / 30`
    pub leader_offset: f64,
}

impl DistanceScaledSizes {
    /// Compute sizes for a distance
    pub fn from_distance(distance: f64) -> Self {
        let distance = distance.abs();
        Self {
            endcap_size: (distance * 3.0).ceil() as u32,
            font_size: (distance * 15.0).ceil() as u32,
            offset: distance / 4.0,
            leader_offset: distance / 30.0,
        }
    }

    /// Write the sizes into a record's fields
    pub fn apply(&self, common: &mut DimensionCommon) {
        common.local_style.endcap_size = self.endcap_size;
        common.local_style.font_size = self.font_size;
        common.offset = self.offset;
        common.leader_offset = self.leader_offset;
    }
}
