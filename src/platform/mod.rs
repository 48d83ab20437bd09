//! Platform abstraction layer
//!
//! Browser implementations of the core's seams:
//! - Image loading (`ResourceRepository` over `HtmlImageElement`)
//! - Time (`Clock` over `performance.now()`)
//! - Keyboard, mouse and window listeners feeding `Input`
//!
//! Native runs use the in-memory doubles (`SpriteSheet`, `ManualClock`)
//! instead, so there is no native module here.

#[cfg(target_arch = "wasm32")]
pub mod web;

#[cfg(target_arch = "wasm32")]
pub use web::{PerformanceClock, SharedImages, WebRepository, install_input_listeners};
