//! Graph sub-panel rendering
//!
//! Zone panels plot the temperature trace against a +/-6C band around the
//! zone setpoint; the pump panel draws duty bars. Both share the same
//! index-to-pixel mapping so samples line up across columns.
//!
//! The mapping functions are standalone and pure; the draw functions apply
//! them at a column origin.

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{Line, PrimitiveStyle, Rectangle};

extern crate alloc;
use alloc::vec::Vec;

use super::box_style;
use super::constants::{
    BOX_WIDTH_PX, GRAPH_HEIGHT_PX, GRAPH_RANGE_C, GUIDE_DOT_SPACING_PX, HISTORY_SANITY_MAX_C,
    HISTORY_SANITY_MIN_C,
};
use crate::state::{HISTORY_WINDOW, ZoneState};
use crate::ui::styling::colors::{BLACK, BLUE, DARK_GRAY, GRAY, GREEN, LIGHT_GRAY};

/// Map a 0-based sample index within the last-40 window to an x offset
/// inside a graph panel.
///
/// Index 0 lands one pixel inside the left border and index 39 one pixel
/// inside the right border. The divisor is fixed at the window size, so a
/// partially filled window still uses the same spacing.
pub fn sample_to_x(index: usize, panel_width: u32) -> i32 {
    1 + (index as i32 * (panel_width as i32 - 3)) / (HISTORY_WINDOW as i32 - 1)
}

/// Map a temperature to a y offset inside a panel.
///
/// Linear over `[setpoint - 6, setpoint + 6]`, clamped to the panel's inner
/// rows so out-of-band values pin to the nearest edge instead of leaving
/// the panel.
pub fn value_to_y(value: f32, setpoint: f32, panel_height: u32) -> i32 {
    unclamped_y(value, setpoint, panel_height).clamp(1, panel_height as i32 - 2)
}

/// Unclamped variant of [`value_to_y`], used for the hysteresis guides.
///
/// The caller clips the result; a guide entirely outside `[0, height)` is
/// omitted rather than pinned.
pub fn guide_line_y(value: f32, setpoint: f32, panel_height: u32) -> i32 {
    unclamped_y(value, setpoint, panel_height)
}

fn unclamped_y(value: f32, setpoint: f32, panel_height: u32) -> i32 {
    let top = setpoint + GRAPH_RANGE_C;
    let range = GRAPH_RANGE_C * 2.0;
    ((top - value) / range * panel_height as f32) as i32
}

/// Collect the screen points of a temperature trace.
///
/// A sample that is `None`, non-finite, or outside the absolute sanity
/// bounds is dropped; its valid neighbors stay connected, so a bad sample
/// reads as a gap in the data rather than a spike. Values inside the bounds
/// but outside the display band are clamped by [`value_to_y`].
pub fn trace_points(
    history: &[Option<f32>],
    setpoint: f32,
    panel_width: u32,
    panel_height: u32,
) -> Vec<Point> {
    let mut points = Vec::with_capacity(history.len());

    for (index, sample) in history.iter().enumerate() {
        let Some(value) = *sample else {
            continue;
        };

        if !value.is_finite()
            || !(HISTORY_SANITY_MIN_C..=HISTORY_SANITY_MAX_C).contains(&value)
        {
            continue;
        }

        points.push(Point::new(
            sample_to_x(index, panel_width),
            value_to_y(value, setpoint, panel_height),
        ));
    }

    points
}

/// Draw one zone's graph panel at the given column origin.
pub(crate) fn draw_zone_graph<D: DrawTarget<Color = Rgb565>>(
    origin: Point,
    zone: &ZoneState,
    hysteresis: f32,
    display: &mut D,
) -> Result<(), D::Error> {
    let width = BOX_WIDTH_PX - 1;
    let height = GRAPH_HEIGHT_PX;

    let sensor_missing = zone.temperature.is_none();
    // An empty panel gets the dimmer outline.
    let outline = if sensor_missing { DARK_GRAY } else { LIGHT_GRAY };

    Rectangle::new(origin, Size::new(width, height))
        .into_styled(box_style(BLACK, outline))
        .draw(display)?;

    if sensor_missing || zone.history.is_empty() {
        return Ok(());
    }

    let setpoint = zone.setpoint;

    // Solid center line at the setpoint.
    let center_y = origin.y + height as i32 / 2;
    Line::new(
        Point::new(origin.x + 1, center_y),
        Point::new(origin.x + width as i32 - 2, center_y),
    )
    .into_styled(PrimitiveStyle::with_stroke(GRAY, 1))
    .draw(display)?;

    // Dotted guides at setpoint +/- hysteresis, each clipped independently.
    for guide in [setpoint + hysteresis, setpoint - hysteresis] {
        let y = guide_line_y(guide, setpoint, height);
        if y < 0 || y >= height as i32 {
            continue;
        }

        let mut x = origin.x + 2;
        while x < origin.x + width as i32 - 2 {
            Pixel(Point::new(x, origin.y + y), LIGHT_GRAY).draw(display)?;
            x += GUIDE_DOT_SPACING_PX;
        }
    }

    // Temperature trace over the last-40 window.
    let points = trace_points(zone.recent_history(), setpoint, width, height);
    let segment_style = PrimitiveStyle::with_stroke(GREEN, 1);
    for pair in points.windows(2) {
        Line::new(origin + pair[0], origin + pair[1])
            .into_styled(segment_style)
            .draw(display)?;
    }

    Ok(())
}

/// Draw the pump duty panel: a vertical bar per true sample, blank columns
/// for false samples.
pub(crate) fn draw_pump_graph<D: DrawTarget<Color = Rgb565>>(
    origin: Point,
    history: &[bool],
    display: &mut D,
) -> Result<(), D::Error> {
    let width = BOX_WIDTH_PX - 1;
    let height = GRAPH_HEIGHT_PX;

    Rectangle::new(origin, Size::new(width, height))
        .into_styled(box_style(BLACK, LIGHT_GRAY))
        .draw(display)?;

    let bar_style = PrimitiveStyle::with_stroke(BLUE, 1);
    for (index, on) in history.iter().enumerate() {
        if !on {
            continue;
        }

        let x = origin.x + sample_to_x(index, width);
        Line::new(
            Point::new(x, origin.y + 2),
            Point::new(x, origin.y + height as i32 - 3),
        )
        .into_styled(bar_style)
        .draw(display)?;
    }

    Ok(())
}
