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
// Unused / redundant code
#![deny(unused_results)]
#![deny(unused_qualifications)]
// Cast hygiene
#![deny(trivial_casts)]
#![deny(trivial_numeric_casts)]

//! Interactive 3D/2D visualizer core for a fixed catalog of apartment
//! units in a single building.
//!
//! Showflat owns the *state* of the viewer — the apartment catalog, the
//! orbit-camera interaction state machine, cross-view selection, and the
//! 2D list/grid presentation — and drives two external collaborators
//! through trait seams: a [`scene::RenderSurface`] (the host's 3D
//! rendering engine) and a [`view::PanelSurface`] (the host's DOM). It
//! supplies no rendering algorithms of its own.
//!
//! # Key entry points
//!
//! - [`engine::ViewerEngine`] - the application shell tying everything
//!   together
//! - [`engine::ViewerCommand`] - the complete interactive vocabulary
//! - [`catalog::Catalog`] - the immutable apartment catalog
//! - [`options::Options`] - runtime configuration (camera, colors, shell)
//!
//! # Architecture
//!
//! User input enters as platform-agnostic [`input::InputEvent`]s, is
//! interpreted into [`engine::ViewerCommand`]s, and dispatched through
//! [`engine::ViewerEngine::execute`]. The engine keeps the scene
//! controller (3D markers + camera) and the view controller (list +
//! floor grid) in sync by direct method calls; both mirror a single
//! at-most-one selection. The host schedules frames and calls
//! [`engine::ViewerEngine::tick`] once per frame.
//!
//! With the `web` feature enabled, the `web` module provides a browser
//! shell built on `wasm-bindgen`/`web-sys`.

pub mod camera;
pub mod catalog;
pub mod engine;
mod error;
pub mod input;
pub mod options;
pub mod picking;
pub mod scene;
pub mod util;
pub mod view;
#[cfg(feature = "web")]
pub mod web;

pub use engine::{ViewerCommand, ViewerEngine};
pub use error::ViewerError;
pub use input::{InputEvent, PointerButton};
