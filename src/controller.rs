//! Interaction controller: turns pointer events into previews and commits.
//!
//! `RulerCore` owns the boundary table, the visual adapter, the commit
//! callback and the state of the current interaction. Two input surfaces feed
//! it: the handle (press, any number of moves, release) and the bare track
//! (press, release). Every resolved sample is held as pending until release,
//! when the visuals settle on its snap position and the callback fires once.

#[cfg(test)]
#[path = "controller_test.rs"]
mod controller_test;

use std::fmt;

use tracing::{debug, trace};

use crate::config::RulerConfig;
use crate::error::RulerError;
use crate::geometry::{self, ScaleGeometry};
use crate::input::{InteractionState, Phase, Point};
use crate::resolve::{SelectionState, resolve};
use crate::visual::VisualAdapter;

/// Callback invoked with every committed selection.
pub type CommitCallback<V> = Box<dyn FnMut(&SelectionState<V>)>;

/// Ruler state and logic, independent of any concrete UI toolkit.
pub struct RulerCore<V, A> {
    geometry: ScaleGeometry<V>,
    visual: A,
    on_commit: CommitCallback<V>,
    input: InteractionState<V>,
    committed: Option<SelectionState<V>>,
}

impl<V, A> RulerCore<V, A>
where
    V: Clone + fmt::Debug,
    A: VisualAdapter,
{
    /// Build the boundary table and commit `config.initial_index`.
    ///
    /// The initial selection goes through the same visual update and callback
    /// as a pointer release, so `on_commit` has fired once by the time this
    /// returns.
    ///
    /// # Errors
    ///
    /// Returns [`RulerError::InvalidScale`] for fewer than two scale values and
    /// [`RulerError::InvalidWidth`] for a non-finite or non-positive width.
    pub fn new<F>(config: &RulerConfig<V>, track_width: f64, visual: A, on_commit: F) -> Result<Self, RulerError>
    where
        F: FnMut(&SelectionState<V>) + 'static,
    {
        let geometry = geometry::build(config.scale.clone(), track_width)?;
        debug!(values = config.scale.len(), width = track_width, "ruler constructed");

        let mut core = Self {
            geometry,
            visual,
            on_commit: Box::new(on_commit),
            input: InteractionState::Idle,
            committed: None,
        };
        core.select_index(config.initial_index);
        Ok(core)
    }

    /// Commit the value at 1-based `index` without any pointer interaction.
    ///
    /// Indices outside the scale clamp to its first or last value. Any
    /// interaction in progress is discarded.
    pub fn select_index(&mut self, index: usize) {
        #[allow(clippy::cast_precision_loss)]
        let steps = index as f64 - 1.0;
        let x = self.geometry.track().segment_width * steps;
        let sample = resolve(x, &self.geometry);
        self.input = InteractionState::Idle;
        self.commit(sample);
    }

    // --- Handle ---

    /// Pointer pressed on the handle at page position `pointer` while the
    /// handle sits at `handle_pos` in track space.
    ///
    /// Nothing is resolved until the first horizontal move.
    pub fn handle_start(&mut self, pointer: Point, handle_pos: Point) {
        let origin = pointer.rounded().minus(handle_pos.truncated());
        trace!(origin_x = origin.x, origin_y = origin.y, "handle pressed");
        self.input = InteractionState::DraggingHandle { origin, pending: None };
    }

    /// Pointer moved while the handle is pressed.
    ///
    /// Moves whose vertical component dominates are ignored so a scroll
    /// gesture passes through. Horizontal moves update the pending sample and
    /// place the visuals under the pointer, clamped to the track.
    pub fn handle_move(&mut self, pointer: Point) {
        let InteractionState::DraggingHandle { origin, pending } = &mut self.input else {
            trace!("move without a pressed handle ignored");
            return;
        };

        let offset = pointer.rounded().minus(*origin);
        if !offset.is_horizontal() {
            trace!(dx = offset.x, dy = offset.y, "vertical move ignored");
            return;
        }

        let sample = resolve(offset.x, &self.geometry);
        trace!(x = offset.x, value = ?sample.value, "handle moved");
        self.visual.set_immediate(offset.x.clamp(0.0, self.geometry.width()));
        *pending = Some(sample);
    }

    // --- Track ---

    /// Pointer pressed on the bare track at page position `pointer`; the
    /// track's left edge is at `track_left` in page space.
    ///
    /// The tapped offset is resolved immediately and committed on release.
    pub fn track_start(&mut self, pointer: Point, track_left: f64) {
        let x = pointer.x.round() - track_left;
        let pending = resolve(x, &self.geometry);
        trace!(x, value = ?pending.value, "track pressed");
        self.input = InteractionState::PressingTrack { pending };
    }

    // --- Release ---

    /// Pointer released on either surface.
    ///
    /// Commits the pending sample if there is one. A handle press that never
    /// produced a horizontal move leaves nothing to commit and is a no-op.
    pub fn end(&mut self) {
        match self.input.take_pending() {
            Some(sample) => self.commit(sample),
            None => trace!("release without a pending sample"),
        }
    }

    fn commit(&mut self, sample: SelectionState<V>) {
        let target = sample.snap_position;
        self.visual.animate_to(target);
        (self.on_commit)(&sample);
        debug!(value = ?sample.value, snap = target, "selection committed");
        self.input = InteractionState::Settling { target };
        self.committed = Some(sample);
    }

    // --- Queries ---

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.input.phase()
    }

    /// The uncommitted sample of the interaction in progress.
    #[must_use]
    pub fn pending(&self) -> Option<&SelectionState<V>> {
        self.input.pending()
    }

    /// The most recently committed selection.
    #[must_use]
    pub fn selection(&self) -> Option<&SelectionState<V>> {
        self.committed.as_ref()
    }

    #[must_use]
    pub fn geometry(&self) -> &ScaleGeometry<V> {
        &self.geometry
    }

    #[must_use]
    pub fn visual(&self) -> &A {
        &self.visual
    }
}
