//! Input model: pointer coordinates and the per-interaction state machine.
//!
//! `InteractionState` is the single interaction being tracked between a
//! pointer-down on the handle or the track and the matching pointer-up. Each
//! variant carries everything the next transition needs, so nothing leaks from
//! one interaction into the next: a new start simply replaces the state.

#[cfg(test)]
#[path = "input_test.rs"]
mod input_test;

use crate::resolve::SelectionState;

/// A point in page or track space, in CSS pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Both coordinates rounded to the nearest whole pixel.
    #[must_use]
    pub fn rounded(self) -> Self {
        Self { x: self.x.round(), y: self.y.round() }
    }

    /// Both coordinates truncated to whole pixels.
    #[must_use]
    pub fn truncated(self) -> Self {
        Self { x: self.x.trunc(), y: self.y.trunc() }
    }

    /// Component-wise difference `self - other`.
    #[must_use]
    pub fn minus(self, other: Self) -> Self {
        Self { x: self.x - other.x, y: self.y - other.y }
    }

    /// Whether the horizontal component is at least as large as the vertical one.
    #[must_use]
    pub fn is_horizontal(self) -> bool {
        self.x.abs() >= self.y.abs()
    }
}

/// Which region received the pointer-down.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Surface {
    /// The draggable handle.
    Handle,
    /// The bare track around the handle.
    Track,
}

/// Coarse state reported to hosts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    /// Nothing pending.
    #[default]
    Idle,
    /// An interaction holds an uncommitted sample.
    Dragging,
    /// The last commit's settle animation was handed to the visual adapter.
    Settling,
}

/// Internal state for the interaction state machine.
#[derive(Debug, Clone, PartialEq)]
pub enum InteractionState<V> {
    /// No interaction in progress.
    Idle,
    /// The handle is pressed.
    DraggingHandle {
        /// Pointer position minus handle position at press time. Subtracting it
        /// from a later pointer position gives the handle's would-be offset.
        origin: Point,
        /// Latest horizontal sample; `None` until the first horizontal move.
        pending: Option<SelectionState<V>>,
    },
    /// The track was tapped; the sample was resolved at press time.
    PressingTrack { pending: SelectionState<V> },
    /// A commit animated the visuals towards `target`.
    Settling { target: f64 },
}

impl<V> Default for InteractionState<V> {
    fn default() -> Self {
        Self::Idle
    }
}

impl<V> InteractionState<V> {
    /// The uncommitted sample, if any.
    #[must_use]
    pub fn pending(&self) -> Option<&SelectionState<V>> {
        match self {
            Self::DraggingHandle { pending, .. } => pending.as_ref(),
            Self::PressingTrack { pending } => Some(pending),
            Self::Idle | Self::Settling { .. } => None,
        }
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        match self {
            Self::Settling { .. } => Phase::Settling,
            _ if self.pending().is_some() => Phase::Dragging,
            _ => Phase::Idle,
        }
    }

    /// Remove the pending sample, leaving the state idle.
    pub fn take_pending(&mut self) -> Option<SelectionState<V>> {
        match std::mem::take(self) {
            Self::DraggingHandle { pending, .. } => pending,
            Self::PressingTrack { pending } => Some(pending),
            Self::Idle | Self::Settling { .. } => None,
        }
    }
}
