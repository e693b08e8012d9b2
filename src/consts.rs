//! Shared constants for the ruler crate.

// ── Interaction ─────────────────────────────────────────────────

/// 1-based index selected at construction when the config names none.
pub const DEFAULT_INITIAL_INDEX: usize = 1;

// ── Animation ───────────────────────────────────────────────────

/// Duration of the settle animation after a commit, in milliseconds.
pub const SETTLE_DURATION_MS: u32 = 200;

// ── Default element selectors ───────────────────────────────────

/// The track element; its width defines the pixel range of the scale.
pub const DEFAULT_TRACK_SELECTOR: &str = ".ruler-line";

/// The draggable handle, positioned with `left`.
pub const DEFAULT_HANDLE_SELECTOR: &str = ".ruler-btn-point";

/// The fill bar behind the handle, sized with `width`.
pub const DEFAULT_FILL_SELECTOR: &str = ".ruler-follow";
