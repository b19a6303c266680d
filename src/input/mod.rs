//! Mouse and scroll input handling for the canvas.
//!
//! All interaction logic lives in a headless engine driven with page
//! coordinates; the GPUI handlers here only convert window events and apply
//! the engine's update batches to the document.
//!
//! ## Architecture
//!
//! The gesture is tracked by an explicit state machine (`GestureState`),
//! making impossible states unrepresentable. Exactly one gesture is active
//! at a time; pointer-up is the single cleanup path however the gesture
//! ends.
//!
//! ## Modules
//!
//! - `state` - Gesture state machine enum and helper methods
//! - `engine` - Headless pointer engine (hit resolution, selection,
//!   snapshots, update batches)
//! - `coords` - Screen/page coordinate conversion
//! - `mouse_down` - Mouse down event handling (gesture start)
//! - `mouse_up` - Mouse up event handling (commit, index refresh, autosave)
//! - `drag` - Mouse move handling (drag and resize updates)
//! - `transform` - Canvas transformations (scroll, zoom)

pub mod coords;
pub mod engine;
pub mod state;

mod drag;
mod mouse_down;
mod mouse_up;
mod transform;

pub use engine::InteractionEngine;
pub use state::GestureState;
