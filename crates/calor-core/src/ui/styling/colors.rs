//! Color palette for the controller display
//!
//! RGB565 constants converted from the device's RGB888 design values.
//!
//! # RGB565 Format
//! - Red: 5 bits (0-31)
//! - Green: 6 bits (0-63)
//! - Blue: 5 bits (0-31)
//!
//! To convert from 8-bit RGB: R>>3, G>>2, B>>3

use embedded_graphics::pixelcolor::Rgb565;

/// Default outline and primary text color
pub const WHITE: Rgb565 = Rgb565::new(255 >> 3, 255 >> 2, 255 >> 3);

/// Canvas background
pub const BLACK: Rgb565 = Rgb565::new(0, 0, 0);

/// Error and alert color, also the sensor-fault outline
pub const RED: Rgb565 = Rgb565::new(255 >> 3, 0, 0);

/// Temperature trace, relay indicator, and connected-IP color
pub const GREEN: Rgb565 = Rgb565::new(0, 255 >> 2, 0);

/// Pump and valve color - medium blue
pub const BLUE: Rgb565 = Rgb565::new(0, 120 >> 2, 255 >> 3);

/// Heating-active color
pub const ORANGE: Rgb565 = Rgb565::new(255 >> 3, 165 >> 2, 0);

/// Unavailable sensor and unlit indicator color
pub const GRAY: Rgb565 = Rgb565::new(128 >> 3, 128 >> 2, 128 >> 3);

/// Neutral box background; also the dimmed outline of an empty graph panel
pub const DARK_GRAY: Rgb565 = Rgb565::new(48 >> 3, 48 >> 2, 48 >> 3);

/// Graph panel outline
pub const LIGHT_GRAY: Rgb565 = Rgb565::new(80 >> 3, 80 >> 2, 80 >> 3);

/// Disabled-zone background
pub const DARK_RED: Rgb565 = Rgb565::new(80 >> 3, 0, 0);
