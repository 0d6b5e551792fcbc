//! cinefx: host-side control plane for screen-space post-process effects.
//!
//! The rendering backend owns the shaders; this crate owns everything that
//! decides what numbers those shaders see each frame:
//!
//!   - [`easing`] — pure interpolation curves.
//!   - [`transition`] — per-parameter time-based animator.
//!   - [`effects`] — one toggle state machine per effect, with persistent
//!     phase memory where the effect alternates direction.
//!   - [`noise`] — the block-glitch noise grid with run-length coherence.
//!   - [`profile`] — persisted per-effect settings and trigger bindings.
//!   - [`controller`] — binding resolution and per-frame dispatch.
//!
//! Everything is single-threaded and frame-stepped: the host calls
//! [`controller::PostProcessController::tick`] exactly once per rendered
//! frame and delivers triggers synchronously on the same thread.

pub mod controller;
pub mod easing;
pub mod effects;
pub mod noise;
pub mod params;
pub mod profile;
pub mod rng;
pub mod transition;
