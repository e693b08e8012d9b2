//! Position resolver: maps a pixel offset on the track to a scale value.
//!
//! Resolution is a pure function of the offset and the boundary table built
//! by [`crate::geometry`]. Offsets left of the track clamp to the first value
//! and offsets at or beyond the track width clamp to the last; neither is an
//! error.

#[cfg(test)]
#[path = "resolve_test.rs"]
mod resolve_test;

use serde::{Deserialize, Serialize};

use crate::geometry::{BoundaryEntry, ScaleGeometry};

/// A resolved selection: the chosen value and the pixel the handle rests at.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SelectionState<V> {
    pub value: V,
    /// `0` for the first value, the track width for the last, and the
    /// interval midpoint for everything in between.
    pub snap_position: f64,
}

/// Resolve the pixel offset `x` against `geometry`.
#[must_use]
pub fn resolve<V: Clone>(x: f64, geometry: &ScaleGeometry<V>) -> SelectionState<V> {
    resolve_in(geometry.entries(), geometry.width(), x)
}

/// Index of the interval containing `x`, if any.
///
/// When more than one interval contains `x` the last one in scale order wins.
/// Entries must be sorted by start.
#[must_use]
pub fn locate<V>(entries: &[BoundaryEntry<V>], x: f64) -> Option<usize> {
    let upto = entries.partition_point(|e| e.start_px() <= x);
    entries[..upto].iter().rposition(|e| e.contains(x))
}

/// Resolve against a raw boundary table. `entries` must hold at least one entry.
pub(crate) fn resolve_in<V: Clone>(entries: &[BoundaryEntry<V>], width: f64, x: f64) -> SelectionState<V> {
    let last = entries.len() - 1;

    if x.is_nan() || x < 0.0 {
        return SelectionState { value: entries[0].value.clone(), snap_position: 0.0 };
    }
    if x >= width {
        return SelectionState { value: entries[last].value.clone(), snap_position: width };
    }

    let found = locate(entries, x);
    debug_assert!(found.is_some(), "boundary table has a gap at x = {x}");
    let index = match found {
        Some(index) => index,
        None => {
            let fallback = entries.partition_point(|e| e.start_px() <= x).saturating_sub(1);
            tracing::error!(x, fallback, "no boundary interval contains in-range offset");
            fallback
        }
    };

    let entry = &entries[index];
    let snap_position = if index == 0 {
        0.0
    } else if index == last {
        width
    } else {
        (entry.start_px() + entry.end_px()) / 2.0
    };
    SelectionState { value: entry.value.clone(), snap_position }
}
