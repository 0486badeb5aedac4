// -- Lint policy ---------------------------------------------------------
// This is the single source of truth for crate-wide lints.

// Broad lint groups
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![deny(clippy::nursery)]
// Documentation
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]
#![deny(rustdoc::bare_urls)]
// No panicking in library code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![deny(clippy::todo)]
#![deny(clippy::unimplemented)]
// No debug/print artifacts
#![deny(clippy::dbg_macro)]
#![deny(clippy::print_stdout)]
#![deny(clippy::print_stderr)]
// Import hygiene
#![deny(clippy::wildcard_imports)]
// Complexity limits (thresholds in clippy.toml)
#![deny(clippy::cognitive_complexity)]
#![deny(clippy::too_many_lines)]
#![deny(clippy::excessive_nesting)]
// Function signature hygiene
#![deny(clippy::too_many_arguments)]
#![deny(clippy::fn_params_excessive_bools)]
// Clone / pass-by-value hygiene
#![deny(clippy::needless_pass_by_value)]
#![deny(clippy::implicit_clone)]
// String hygiene
#![deny(clippy::inefficient_to_string)]
#![deny(clippy::redundant_closure_for_method_calls)]
#![deny(clippy::manual_string_new)]
#![deny(clippy::str_to_string)]
// Cargo lints (warn, not deny since cargo lints can be noisy)
#![warn(clippy::cargo)]
// Unused / redundant code
#![deny(unused_results)]
#![deny(unused_qualifications)]
// Cast hygiene
#![deny(trivial_casts)]
#![deny(trivial_numeric_casts)]

//! Scene ingestion and camera state for the Refraction GPU ray tracer.
//!
//! Refraction traces a single triangle mesh plus a small list of analytic
//! spheres. This crate holds everything the viewer needs before a frame
//! reaches the GPU.
//!
//! # Key entry points
//!
//! - [`mesh::decode`] - load the first triangle primitive of a `.glb` or
//!   `.gltf` asset into a [`mesh::Mesh`]
//! - [`camera::CameraState`] - first-person camera driven by per-frame
//!   [`camera::FrameInput`]
//! - [`input::InputProcessor`] - folds window events into `FrameInput`
//! - [`options::Options`] - runtime configuration (camera, tracing, window,
//!   debug display, keybindings) with TOML presets
//! - [`scene::SphereList`] - bounded sphere list uploaded as a storage
//!   buffer
//!
//! # Frame flow
//!
//! Window events go to the input processor. Once per frame its snapshot is
//! applied to the camera, the pointer is warped to
//! [`camera::CameraState::recenter_target`] while look capture is held, and
//! [`camera::CameraUniform`] is refreshed from the camera and options.

pub mod camera;
pub mod error;
pub mod input;
pub mod mesh;
pub mod options;
pub mod scene;
pub mod shader;
pub mod util;
