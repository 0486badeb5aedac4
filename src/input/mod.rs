//! Input handling: platform-agnostic event types and the processor that
//! folds them into per-frame camera input.

/// Platform-agnostic input events.
pub mod event;
/// Converts raw events into [`FrameInput`](crate::camera::FrameInput)
/// snapshots.
pub mod processor;

pub use event::{InputEvent, MouseButton};
pub use processor::{InputProcessor, KeyAction};
