//! Scale geometry: the boundary table built once from the scale and track width.
//!
//! The track spans `[0, width]` pixels and is split into one interval per
//! scale value. Interior values own a segment centred on their tick; the first
//! and last values own half a segment at each end of the track. Every interval
//! is half-open except the last, which is closed at `width`, so the intervals
//! partition the track exactly.
//!
//! Adjacent intervals share a single computed boundary value. The end of one
//! interval and the start of the next are therefore bit-identical, and no
//! floating-point drift between them can open a gap or an overlap.

#[cfg(test)]
#[path = "geometry_test.rs"]
mod geometry_test;

use crate::error::RulerError;

/// Ordered scale values, at least two. Immutable once constructed.
#[derive(Debug, Clone, PartialEq)]
pub struct ScaleSpec<V> {
    values: Vec<V>,
}

impl<V> ScaleSpec<V> {
    /// Validate and wrap a scale.
    ///
    /// # Errors
    ///
    /// Returns [`RulerError::InvalidScale`] when fewer than two values are given.
    pub fn new(values: Vec<V>) -> Result<Self, RulerError> {
        if values.len() < 2 {
            return Err(RulerError::InvalidScale { len: values.len() });
        }
        Ok(Self { values })
    }

    #[must_use]
    pub fn values(&self) -> &[V] {
        &self.values
    }
}

/// Pixel metrics derived from the track width and the number of values.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrackGeometry {
    /// Track width in pixels.
    pub width: f64,
    /// Distance between adjacent ticks: `width / (N - 1)`.
    pub segment_width: f64,
    /// Half of `segment_width`; the reach of each tick's interval on either side.
    pub half_segment: f64,
}

impl TrackGeometry {
    /// Compute metrics for `count` values spread over `width` pixels.
    ///
    /// # Errors
    ///
    /// Returns [`RulerError::InvalidScale`] for fewer than two values and
    /// [`RulerError::InvalidWidth`] for a non-finite or non-positive width.
    pub fn new(width: f64, count: usize) -> Result<Self, RulerError> {
        if count < 2 {
            return Err(RulerError::InvalidScale { len: count });
        }
        if !width.is_finite() || width <= 0.0 {
            return Err(RulerError::InvalidWidth(width));
        }
        #[allow(clippy::cast_precision_loss)]
        let segment_width = width / (count - 1) as f64;
        Ok(Self { width, segment_width, half_segment: segment_width / 2.0 })
    }
}

/// The pixel interval owned by one scale value.
#[derive(Debug, Clone, PartialEq)]
pub struct BoundaryEntry<V> {
    pub value: V,
    /// Inclusive lower bound.
    pub start: f64,
    /// Upper bound; exclusive unless `closed`.
    pub end: f64,
    /// Set only on the last entry, whose upper bound is the track width itself.
    pub closed: bool,
}

impl<V> BoundaryEntry<V> {
    /// Lower bound truncated to a whole pixel.
    #[must_use]
    pub fn start_px(&self) -> f64 {
        self.start.trunc()
    }

    /// Upper bound truncated to a whole pixel.
    #[must_use]
    pub fn end_px(&self) -> f64 {
        self.end.trunc()
    }

    /// Whether `x` falls in this interval.
    ///
    /// Bounds are compared as whole pixels. The closed upper bound of the last
    /// entry is compared untruncated so a fractional track width keeps its
    /// final partial pixel.
    #[must_use]
    pub fn contains(&self, x: f64) -> bool {
        if x < self.start_px() {
            return false;
        }
        if self.closed { x <= self.end } else { x < self.end_px() }
    }
}

/// A tick mark and its label slot, for hosts that lay out the scale labels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tick<'a, V> {
    pub value: &'a V,
    /// Pixel position of the tick on the track.
    pub position: f64,
    /// Width of the label slot for this tick.
    pub label_width: f64,
}

/// The full boundary table: metrics plus one entry per scale value.
#[derive(Debug, Clone, PartialEq)]
pub struct ScaleGeometry<V> {
    track: TrackGeometry,
    entries: Vec<BoundaryEntry<V>>,
}

/// Build the boundary table for `values` over a track `width` pixels wide.
///
/// # Errors
///
/// Returns [`RulerError::InvalidScale`] for fewer than two values and
/// [`RulerError::InvalidWidth`] for a non-finite or non-positive width.
pub fn build<V>(values: Vec<V>, width: f64) -> Result<ScaleGeometry<V>, RulerError> {
    ScaleGeometry::new(ScaleSpec::new(values)?, width)
}

impl<V> ScaleGeometry<V> {
    /// Build the boundary table for a validated scale.
    ///
    /// # Errors
    ///
    /// Returns [`RulerError::InvalidWidth`] for a non-finite or non-positive width.
    pub fn new(spec: ScaleSpec<V>, width: f64) -> Result<Self, RulerError> {
        let count = spec.values.len();
        let track = TrackGeometry::new(width, count)?;
        let last = count - 1;

        let boundary = |i: usize| -> f64 {
            if i == 0 {
                0.0
            } else if i == last {
                track.width - track.half_segment
            } else if i > last {
                track.width
            } else {
                #[allow(clippy::cast_precision_loss)]
                let tick = track.segment_width * i as f64;
                tick - track.half_segment
            }
        };

        let entries = spec
            .values
            .into_iter()
            .enumerate()
            .map(|(i, value)| BoundaryEntry { value, start: boundary(i), end: boundary(i + 1), closed: i == last })
            .collect();

        Ok(Self { track, entries })
    }

    #[must_use]
    pub fn track(&self) -> TrackGeometry {
        self.track
    }

    #[must_use]
    pub fn width(&self) -> f64 {
        self.track.width
    }

    /// Boundary entries in scale order.
    #[must_use]
    pub fn entries(&self) -> &[BoundaryEntry<V>] {
        &self.entries
    }

    /// Tick positions and label widths, one per value.
    ///
    /// The last tick sits exactly on the track width.
    pub fn ticks(&self) -> impl Iterator<Item = Tick<'_, V>> {
        let track = self.track;
        let last = self.entries.len() - 1;
        self.entries.iter().enumerate().map(move |(i, entry)| {
            #[allow(clippy::cast_precision_loss)]
            let position = if i == last { track.width } else { track.segment_width * i as f64 };
            Tick { value: &entry.value, position, label_width: track.segment_width }
        })
    }
}
