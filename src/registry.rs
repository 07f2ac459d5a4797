//! Per-object dimension registry
//!
//! Records are stored partitioned by kind, one typed `Vec` per kind, while a
//! single ordered list of [`IndexEntry`] values describes the display order
//! across all kinds. Each entry carries its kind and its *intra-kind index*:
//! the position of its record inside that kind's `Vec`.
//!
//! Invariant, restored by every mutating method before it returns: for every
//! kind K, the entries tagged K, read in display order, carry the indices
//! `0, 1, ..., count(K) - 1`, and entry `i` of kind K refers to record `i`
//! of K's storage.

use crate::dimensions::{
    AlignedDimension, AngleDimension, ArcDimension, AxisDimension, BoundsDimension, DimensionCommon,
    DimensionKind, DimensionRecord, DimensionRef, DimensionRefMut,
};
use crate::error::{DimensionError, Result};
use crate::types::{DimensionId, ObjectId};
use tracing::debug;

/// One slot of the unified, ordered dimension list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct IndexEntry {
    /// Kind of the referenced record
    pub kind: DimensionKind,
    /// Position of the record among records of the same kind
    pub index: usize,
    /// Identity of the referenced record
    ///
    /// [`DimensionId::NULL`] skips the identity check in
    /// [`DimensionRegistry::resolve`].
    pub id: DimensionId,
}

impl IndexEntry {
    /// Create a positional entry without an identity
    pub fn new(kind: DimensionKind, index: usize) -> Self {
        Self {
            kind,
            index,
            id: DimensionId::NULL,
        }
    }

    /// Kind and intra-kind index as a pair
    pub fn key(&self) -> (DimensionKind, usize) {
        (self.kind, self.index)
    }
}

/// Dimension records of one annotated object
#[derive(Debug, Clone)]
pub struct DimensionRegistry {
    owner: ObjectId,
    aligned: Vec<AlignedDimension>,
    angle: Vec<AngleDimension>,
    axis: Vec<AxisDimension>,
    bounds: Vec<BoundsDimension>,
    arc: Vec<ArcDimension>,
    entries: Vec<IndexEntry>,
    active: usize,
    last_id: u64,
}

impl DimensionRegistry {
    /// Create an empty registry for an object
    pub fn new(owner: ObjectId) -> Self {
        Self {
            owner,
            aligned: Vec::new(),
            angle: Vec::new(),
            axis: Vec::new(),
            bounds: Vec::new(),
            arc: Vec::new(),
            entries: Vec::new(),
            active: 0,
            last_id: 0,
        }
    }

    /// Object the dimensions annotate
    pub fn owner(&self) -> ObjectId {
        self.owner
    }

    // ==================== Reading ====================

    /// Index entries in display order
    pub fn entries(&self) -> &[IndexEntry] {
        &self.entries
    }

    /// Total number of records
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the registry holds no records
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of records of one kind
    pub fn count(&self, kind: DimensionKind) -> usize {
        match kind {
            DimensionKind::Aligned => self.aligned.len(),
            DimensionKind::Angle => self.angle.len(),
            DimensionKind::Axis => self.axis.len(),
            DimensionKind::Bounds => self.bounds.len(),
            DimensionKind::Arc => self.arc.len(),
        }
    }

    /// Aligned records in intra-kind order
    pub fn aligned(&self) -> &[AlignedDimension] {
        &self.aligned
    }

    /// Angle records in intra-kind order
    pub fn angles(&self) -> &[AngleDimension] {
        &self.angle
    }

    /// Axis records in intra-kind order
    pub fn axes(&self) -> &[AxisDimension] {
        &self.axis
    }

    /// Bounding box records in intra-kind order
    pub fn bounds(&self) -> &[BoundsDimension] {
        &self.bounds
    }

    /// Arc records in intra-kind order
    pub fn arcs(&self) -> &[ArcDimension] {
        &self.arc
    }

    /// Iterate over entries and their records in display order
    pub fn iter(&self) -> impl Iterator<Item = (IndexEntry, DimensionRef<'_>)> + '_ {
        self.entries
            .iter()
            .filter_map(move |entry| self.slot(entry.kind, entry.index).map(|r| (*entry, r)))
    }

    /// Common fields of every record, in storage order
    pub fn commons_mut(&mut self) -> impl Iterator<Item = &mut DimensionCommon> + '_ {
        self.aligned
            .iter_mut()
            .map(|d| &mut d.common)
            .chain(self.angle.iter_mut().map(|d| &mut d.common))
            .chain(self.axis.iter_mut().map(|d| &mut d.common))
            .chain(self.bounds.iter_mut().map(|d| &mut d.common))
            .chain(self.arc.iter_mut().map(|d| &mut d.common))
    }

    /// Look up the record an entry refers to
    ///
    /// Fails with [`DimensionError::OutOfRange`] when the intra-kind index is
    /// outside the kind's storage and with [`DimensionError::StaleEntry`]
    /// when the slot now holds a different record.
    pub fn resolve(&self, entry: &IndexEntry) -> Result<DimensionRef<'_>> {
        let record = self
            .slot(entry.kind, entry.index)
            .ok_or_else(|| self.out_of_range(entry))?;
        if !entry.id.is_null() && record.common().id != entry.id {
            return Err(DimensionError::StaleEntry {
                kind: entry.kind,
                index: entry.index,
            });
        }
        Ok(record)
    }

    /// Look up the record an entry refers to, mutably
    pub fn resolve_mut(&mut self, entry: &IndexEntry) -> Result<DimensionRefMut<'_>> {
        // Validate through the shared path first
        self.resolve(entry)?;
        let err = self.out_of_range(entry);
        self.slot_mut(entry.kind, entry.index).ok_or(err)
    }

    /// Record at a display position
    pub fn resolve_at(&self, position: usize) -> Result<DimensionRef<'_>> {
        let entry = self.entry_at(position)?;
        self.resolve(&entry)
    }

    /// Current entry for a record id
    pub fn find(&self, id: DimensionId) -> Option<IndexEntry> {
        self.entries.iter().copied().find(|e| e.id == id)
    }

    /// Display position of an entry
    pub fn position_of(&self, entry: &IndexEntry) -> Option<usize> {
        self.entries
            .iter()
            .position(|e| e.key() == entry.key() && (entry.id.is_null() || e.id == entry.id))
    }

    /// Check whether a segment record of the same kind already spans the
    /// candidate's vertex pair, in either order
    ///
    /// Axis records only collide when they also measure the same axis.
    /// Non-segment kinds never collide.
    pub fn exists_segment(&self, candidate: &DimensionRecord) -> bool {
        match candidate {
            DimensionRecord::Aligned(c) => self.aligned.iter().any(|d| d.spans(c.point_a, c.point_b)),
            DimensionRecord::Axis(c) => self
                .axis
                .iter()
                .any(|d| d.axis == c.axis && d.spans(c.point_a, c.point_b)),
            _ => false,
        }
    }

    /// Fail with [`DimensionError::DuplicateSegment`] when
    /// [`exists_segment`](Self::exists_segment) holds
    pub fn ensure_unique_segment(&self, candidate: &DimensionRecord) -> Result<()> {
        let (a, b) = match candidate {
            DimensionRecord::Aligned(c) => (c.point_a, c.point_b),
            DimensionRecord::Axis(c) => (c.point_a, c.point_b),
            _ => return Ok(()),
        };
        if self.exists_segment(candidate) {
            return Err(DimensionError::DuplicateSegment {
                kind: candidate.kind(),
                a,
                b,
            });
        }
        Ok(())
    }

    /// Check the index invariant and the record/entry pairing
    pub fn is_consistent(&self) -> bool {
        let mut counters = [0usize; 5];
        for entry in &self.entries {
            let slot = entry.kind.slot();
            if entry.index != counters[slot] {
                return false;
            }
            counters[slot] += 1;
            match self.slot(entry.kind, entry.index) {
                Some(record) if record.common().id == entry.id => {}
                _ => return false,
            }
        }
        DimensionKind::ALL
            .iter()
            .all(|kind| counters[kind.slot()] == self.count(*kind))
    }

    // ==================== Mutation ====================

    /// Append a record and its index entry
    ///
    /// The record receives a fresh id. Returns the new entry; use
    /// [`resolve_mut`](Self::resolve_mut) to keep populating the record.
    pub fn create(&mut self, record: impl Into<DimensionRecord>) -> IndexEntry {
        let record = self.with_fresh_id(record.into());
        let position = self.entries.len();
        let entry = self.place(position, record);
        self.reindex();
        debug!(owner = %self.owner, kind = %entry.kind, index = entry.index, "created dimension");
        debug_assert!(self.is_consistent());
        entry
    }

    /// Insert a record at a display position
    pub fn insert(&mut self, position: usize, record: impl Into<DimensionRecord>) -> Result<IndexEntry> {
        if position > self.entries.len() {
            return Err(DimensionError::PositionOutOfRange {
                position,
                len: self.entries.len(),
            });
        }
        let record = self.with_fresh_id(record.into());
        let entry = self.place(position, record);
        if position <= self.active && self.entries.len() > 1 {
            self.active += 1;
        }
        self.reindex();
        debug_assert!(self.is_consistent());
        Ok(entry)
    }

    /// Recompute every intra-kind index from display order
    ///
    /// Single pass, one counter per kind. Idempotent.
    pub fn reindex(&mut self) {
        let mut counters = [0usize; 5];
        for entry in &mut self.entries {
            let slot = entry.kind.slot();
            entry.index = counters[slot];
            counters[slot] += 1;
        }
    }

    /// Remove the record an entry refers to, together with the entry
    pub fn delete(&mut self, entry: &IndexEntry) -> Result<DimensionRecord> {
        self.resolve(entry)?;
        let position = self
            .position_of(entry)
            .ok_or_else(|| self.out_of_range(entry))?;
        self.delete_at(position)
    }

    /// Remove the record at a display position
    pub fn delete_at(&mut self, position: usize) -> Result<DimensionRecord> {
        let record = self.take(position)?;
        self.reindex();
        if position < self.active {
            self.active -= 1;
        }
        self.clamp_active();
        debug!(owner = %self.owner, kind = %record.kind(), position, "deleted dimension");
        debug_assert!(self.is_consistent());
        Ok(record)
    }

    /// Remove every record, or every record of one kind
    ///
    /// Returns the number of records removed.
    pub fn delete_all(&mut self, kind: Option<DimensionKind>) -> usize {
        let removed = match kind {
            None => {
                let removed = self.entries.len();
                self.entries.clear();
                self.aligned.clear();
                self.angle.clear();
                self.axis.clear();
                self.bounds.clear();
                self.arc.clear();
                removed
            }
            Some(kind) => {
                let removed = self.count(kind);
                self.entries.retain(|e| e.kind != kind);
                match kind {
                    DimensionKind::Aligned => self.aligned.clear(),
                    DimensionKind::Angle => self.angle.clear(),
                    DimensionKind::Axis => self.axis.clear(),
                    DimensionKind::Bounds => self.bounds.clear(),
                    DimensionKind::Arc => self.arc.clear(),
                }
                removed
            }
        };
        self.reindex();
        self.clamp_active();
        debug!(owner = %self.owner, ?kind, removed, "deleted dimensions");
        debug_assert!(self.is_consistent());
        removed
    }

    /// Replace the entry at a position with a record of any kind
    ///
    /// Same outcome as [`delete_at`](Self::delete_at) followed by
    /// [`insert`](Self::insert) at the same position. Returns the replaced
    /// record.
    pub fn retag(&mut self, position: usize, record: impl Into<DimensionRecord>) -> Result<DimensionRecord> {
        let active = self.active;
        let old = self.delete_at(position)?;
        self.insert(position, record)?;
        self.active = active;
        debug!(owner = %self.owner, from = %old.kind(), position, "retagged dimension");
        Ok(old)
    }

    /// Move an entry, and its record, to another display position
    pub fn move_entry(&mut self, from: usize, to: usize) -> Result<()> {
        let len = self.entries.len();
        if to >= len {
            return Err(DimensionError::PositionOutOfRange { position: to, len });
        }
        let record = self.take(from)?;
        self.place(to, record);
        self.reindex();
        if self.active == from {
            self.active = to;
        } else if from < self.active && self.active <= to {
            self.active -= 1;
        } else if to <= self.active && self.active < from {
            self.active += 1;
        }
        debug_assert!(self.is_consistent());
        Ok(())
    }

    // ==================== Active entry ====================

    /// Display position of the active entry
    pub fn active_position(&self) -> Option<usize> {
        (self.active < self.entries.len()).then_some(self.active)
    }

    /// Set the active entry
    pub fn set_active(&mut self, position: usize) -> Result<()> {
        self.entry_at(position)?;
        self.active = position;
        Ok(())
    }

    /// Active entry and its record
    pub fn active(&self) -> Option<(IndexEntry, DimensionRef<'_>)> {
        let position = self.active_position()?;
        let entry = self.entries[position];
        self.slot(entry.kind, entry.index).map(|r| (entry, r))
    }

    /// Remove the active entry's record
    pub fn delete_active(&mut self) -> Result<DimensionRecord> {
        self.delete_at(self.active)
    }

    // ==================== Internals ====================

    fn entry_at(&self, position: usize) -> Result<IndexEntry> {
        self.entries
            .get(position)
            .copied()
            .ok_or(DimensionError::PositionOutOfRange {
                position,
                len: self.entries.len(),
            })
    }

    fn out_of_range(&self, entry: &IndexEntry) -> DimensionError {
        DimensionError::OutOfRange {
            kind: entry.kind,
            index: entry.index,
            len: self.count(entry.kind),
        }
    }

    fn with_fresh_id(&mut self, mut record: DimensionRecord) -> DimensionRecord {
        self.last_id += 1;
        record.common_mut().id = DimensionId::new(self.last_id);
        record
    }

    fn clamp_active(&mut self) {
        if self.active >= self.entries.len() {
            self.active = self.entries.len().saturating_sub(1);
        }
    }

    /// Insert entry and record without reindexing
    ///
    /// The record goes to the storage slot matching its ordinal among the
    /// same-kind entries before `position`, so storage order keeps following
    /// display order.
    fn place(&mut self, position: usize, record: DimensionRecord) -> IndexEntry {
        let kind = record.kind();
        let ordinal = self.entries[..position]
            .iter()
            .filter(|e| e.kind == kind)
            .count();
        let entry = IndexEntry {
            kind,
            index: ordinal,
            id: record.common().id,
        };
        match record {
            DimensionRecord::Aligned(d) => self.aligned.insert(ordinal, d),
            DimensionRecord::Angle(d) => self.angle.insert(ordinal, d),
            DimensionRecord::Axis(d) => self.axis.insert(ordinal, d),
            DimensionRecord::Bounds(d) => self.bounds.insert(ordinal, d),
            DimensionRecord::Arc(d) => self.arc.insert(ordinal, d),
        }
        self.entries.insert(position, entry);
        entry
    }

    /// Remove entry and record without reindexing
    fn take(&mut self, position: usize) -> Result<DimensionRecord> {
        let entry = self.entry_at(position)?;
        if entry.index >= self.count(entry.kind) {
            return Err(self.out_of_range(&entry));
        }
        self.entries.remove(position);
        let record = match entry.kind {
            DimensionKind::Aligned => self.aligned.remove(entry.index).into(),
            DimensionKind::Angle => self.angle.remove(entry.index).into(),
            DimensionKind::Axis => self.axis.remove(entry.index).into(),
            DimensionKind::Bounds => self.bounds.remove(entry.index).into(),
            DimensionKind::Arc => self.arc.remove(entry.index).into(),
        };
        Ok(record)
    }

    fn slot(&self, kind: DimensionKind, index: usize) -> Option<DimensionRef<'_>> {
        match kind {
            DimensionKind::Aligned => self.aligned.get(index).map(DimensionRef::Aligned),
            DimensionKind::Angle => self.angle.get(index).map(DimensionRef::Angle),
            DimensionKind::Axis => self.axis.get(index).map(DimensionRef::Axis),
            DimensionKind::Bounds => self.bounds.get(index).map(DimensionRef::Bounds),
            DimensionKind::Arc => self.arc.get(index).map(DimensionRef::Arc),
        }
    }

    fn slot_mut(&mut self, kind: DimensionKind, index: usize) -> Option<DimensionRefMut<'_>> {
        match kind {
            DimensionKind::Aligned => self.aligned.get_mut(index).map(DimensionRefMut::Aligned),
            DimensionKind::Angle => self.angle.get_mut(index).map(DimensionRefMut::Angle),
            DimensionKind::Axis => self.axis.get_mut(index).map(DimensionRefMut::Axis),
            DimensionKind::Bounds => self.bounds.get_mut(index).map(DimensionRefMut::Bounds),
            DimensionKind::Arc => self.arc.get_mut(index).map(DimensionRefMut::Arc),
        }
    }
}
