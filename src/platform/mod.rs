//! Platform abstraction layer
//!
//! Browser implementations of the host collaborators:
//! - Frame scheduling (`requestAnimationFrame` / `cancelAnimationFrame`)
//! - Presenting snapshots (HUD text plus a JS render hook)
//!
//! Native builds drive the game headlessly with
//! [`ManualScheduler`](crate::frame::ManualScheduler) instead.

#[cfg(target_arch = "wasm32")]
pub mod web;

#[cfg(target_arch = "wasm32")]
pub use web::{DomPresenter, WebFrameScheduler};
