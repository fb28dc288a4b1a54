//! Visual styling for the display.

pub mod colors;
