//! Fixed-layout renderer for the controller display
//!
//! Walks the fixed regions of the 320x240 canvas in a set order: seven zone
//! columns, the pump column, then the status bar. Rendering is a pure
//! function of the state; the only error channel is the surface's own error
//! type, and no state is retained between frames. Callers supply a fresh
//! surface per render so no stale pixels carry over.

pub mod constants;
mod graph;
mod pump_box;
mod status;
mod status_bar;
mod zone_box;

pub use graph::{guide_line_y, sample_to_x, trace_points, value_to_y};
pub use status::{ZoneBoxColors, ZoneStatus};

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{
    Circle, PrimitiveStyle, PrimitiveStyleBuilder, StrokeAlignment,
};
use log::debug;

use constants::INDICATOR_DIAMETER_PX;

use crate::state::ControllerState;
use crate::ui::fonts::{DefaultFonts, FontProvider};
use crate::ui::styling::colors::{BLACK, GRAY};

/// Renders a [`ControllerState`] frame onto any `Rgb565` draw target.
///
/// Fonts are resolved through the provider given at construction, never per
/// draw call.
pub struct DisplayRenderer<P: FontProvider = DefaultFonts> {
    fonts: P,
}

impl DisplayRenderer<DefaultFonts> {
    /// Renderer with the standard mono-font mapping.
    pub fn new() -> Self {
        Self { fonts: DefaultFonts }
    }
}

impl Default for DisplayRenderer<DefaultFonts> {
    fn default() -> Self {
        Self::new()
    }
}

impl<P: FontProvider> DisplayRenderer<P> {
    /// Renderer with a custom font provider.
    pub fn with_fonts(fonts: P) -> Self {
        Self { fonts }
    }

    /// Render one complete frame.
    pub fn render<D: DrawTarget<Color = Rgb565>>(
        &self,
        state: &ControllerState,
        display: &mut D,
    ) -> Result<(), D::Error> {
        debug!(
            "Rendering frame: {} zone(s) heating, pump {}, wifi {}",
            state.heating_zone_count(),
            if state.pump_on { "on" } else { "off" },
            if state.wifi_connected {
                "connected"
            } else {
                "disconnected"
            },
        );

        display.clear(BLACK)?;

        for (index, zone) in state.zones.iter().enumerate() {
            zone_box::draw_zone_box(index, zone, state.hysteresis, &self.fonts, display)?;
        }

        pump_box::draw_pump_box(state, &self.fonts, display)?;
        status_bar::draw_status_bar(state, &self.fonts, display)
    }
}

/// Filled box with a one-pixel outline kept inside the bounds.
pub(crate) fn box_style(fill: Rgb565, outline: Rgb565) -> PrimitiveStyle<Rgb565> {
    PrimitiveStyleBuilder::new()
        .fill_color(fill)
        .stroke_color(outline)
        .stroke_width(1)
        .stroke_alignment(StrokeAlignment::Inside)
        .build()
}

/// Draw a status disc: filled in the given color when lit, a gray outline
/// when not.
pub(crate) fn draw_indicator<D: DrawTarget<Color = Rgb565>>(
    top_left: Point,
    lit: bool,
    lit_color: Rgb565,
    display: &mut D,
) -> Result<(), D::Error> {
    let style = if lit {
        PrimitiveStyle::with_fill(lit_color)
    } else {
        PrimitiveStyle::with_stroke(GRAY, 1)
    };

    Circle::new(top_left, INDICATOR_DIAMETER_PX)
        .into_styled(style)
        .draw(display)
}
