//! UI building blocks shared by the renderer: color palette and font
//! resolution.

pub mod fonts;
pub mod styling;

pub use fonts::{DefaultFonts, FontProvider, FontSize};
