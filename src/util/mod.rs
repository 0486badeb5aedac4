//! Shared utilities for the viewer loop.

pub mod frame_timing;

pub use frame_timing::FrameTiming;
