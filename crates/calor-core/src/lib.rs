//! Hardware-independent rendering core for the calor-rs heating controller
//! display.
//!
//! Maps one frame of controller state (seven heating zones, circulation
//! pump, network status) onto the fixed 320x240 layout of the device's TFT,
//! drawing through any `embedded-graphics` `DrawTarget`.
//!
//! It is `#![no_std]` with `extern crate alloc` so it compiles on both
//! embedded targets and desktop hosts (for mockup generation and tests).

#![no_std]

extern crate alloc;

pub mod framebuffer;
pub mod render;
pub mod state;
pub mod ui;

pub use framebuffer::FrameBuffer;
pub use render::DisplayRenderer;
pub use state::{ControllerState, ZoneState};
