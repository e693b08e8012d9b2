//! Draggable linear-scale selector ("ruler") for touch and pointer hosts.
//!
//! A horizontal track is divided into segments, one per value of a
//! caller-supplied ordered scale. Dragging the handle (or tapping the track)
//! previews the nearest value; releasing commits it and reports the chosen
//! value together with the pixel the handle settles at.
//!
//! This crate owns the coordinate-to-value mapping and the drag/commit state
//! machine. Drawing the track, handle and labels belongs to the host; the
//! controller talks to it only through [`visual::VisualAdapter`]. The [`dom`]
//! module provides a ready-made binding for browser hosts.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`geometry`] | Boundary table built once from the scale and track width |
//! | [`resolve`] | Pure pixel offset to [`resolve::SelectionState`] mapping |
//! | [`controller`] | Pointer-driven [`controller::RulerCore`] state machine |
//! | [`input`] | Pointer coordinates and per-interaction state |
//! | [`visual`] | Visual adapter seam between the controller and the host |
//! | [`dom`] | `web-sys` binding: element lookup, geometry reads, style updates |
//! | [`config`] | Construction input, JSON-loadable |
//! | [`error`] | [`error::RulerError`] |
//! | [`consts`] | Shared constants (animation duration, defaults) |

pub mod config;
pub mod consts;
pub mod controller;
pub mod dom;
pub mod error;
pub mod geometry;
pub mod input;
pub mod resolve;
pub mod visual;
