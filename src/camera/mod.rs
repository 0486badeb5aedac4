//! First-person camera for the ray tracer.
//!
//! [`CameraState`] turns per-frame [`FrameInput`] (held movement keys,
//! pointer position while look capture is engaged, viewport size) into a
//! position and an orthonormal view basis, and [`CameraUniform`] packs that
//! state for the GPU.

/// View basis derivation from yaw and pitch.
pub mod basis;
/// Camera state and per-frame input processing.
pub mod core;
/// Per-frame input snapshot types.
pub mod input;
/// GPU uniform layout.
pub mod uniform;

pub use basis::{derive_basis, orientation_from_angles, Basis, WORLD_UP};
pub use core::{CameraState, PITCH_LIMIT};
pub use input::{FrameInput, MoveDirection, MovementSet};
pub use uniform::CameraUniform;
