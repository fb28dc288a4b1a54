//! Zone column rendering
//!
//! One 40-pixel column per zone: status box on top, temperature graph
//! panel below. All coordinates are fixed offsets from the column origin.

use core::fmt::Write;

use embedded_graphics::mono_font::MonoTextStyle;
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::Rectangle;
use embedded_graphics::text::{Baseline, Text};
use heapless::String;

use super::constants::{BOX_HEIGHT_PX, BOX_WIDTH_PX, GRAPH_TOP_PX};
use super::graph;
use super::status::ZoneStatus;
use super::{box_style, draw_indicator};
use crate::state::ZoneState;
use crate::ui::fonts::{FontProvider, FontSize};
use crate::ui::styling::colors::{BLUE, GRAY, RED};

pub(crate) fn draw_zone_box<P, D>(
    index: usize,
    zone: &ZoneState,
    hysteresis: f32,
    fonts: &P,
    display: &mut D,
) -> Result<(), D::Error>
where
    P: FontProvider,
    D: DrawTarget<Color = Rgb565>,
{
    let x = index as i32 * BOX_WIDTH_PX as i32;
    let status = ZoneStatus::classify(zone);
    let colors = status.colors();

    Rectangle::new(Point::new(x, 0), Size::new(BOX_WIDTH_PX - 1, BOX_HEIGHT_PX))
        .into_styled(box_style(colors.background, colors.outline))
        .draw(display)?;

    // Zone number, top left.
    let tiny = fonts.font(FontSize::Tiny);
    let mut label = String::<4>::new();
    let _ = write!(label, "Z{}", index + 1);
    Text::with_baseline(
        &label,
        Point::new(x + 2, 1),
        MonoTextStyle::new(tiny, colors.text),
        Baseline::Top,
    )
    .draw(display)?;

    if status == ZoneStatus::Disabled {
        Text::with_baseline(
            "DIS",
            Point::new(x + 22, 1),
            MonoTextStyle::new(tiny, RED),
            Baseline::Top,
        )
        .draw(display)?;
    }

    // Temperature readout, or the placeholder when no sensor delivers.
    match zone.temperature {
        Some(temperature) => {
            let mut value = String::<8>::new();
            let _ = write!(value, "{:.0}", temperature);
            Text::with_baseline(
                &value,
                Point::new(x + 3, 10),
                MonoTextStyle::new(fonts.font(FontSize::XLarge), colors.text),
                Baseline::Top,
            )
            .draw(display)?;
        }
        None => {
            Text::with_baseline(
                "--",
                Point::new(x + 8, 14),
                MonoTextStyle::new(fonts.font(FontSize::Large), GRAY),
                Baseline::Top,
            )
            .draw(display)?;
        }
    }

    // Setpoint.
    let mut setpoint_label = String::<12>::new();
    let _ = write!(setpoint_label, "set:{:.0}", zone.setpoint);
    Text::with_baseline(
        &setpoint_label,
        Point::new(x + 2, 32),
        MonoTextStyle::new(fonts.font(FontSize::Small), colors.text),
        Baseline::Top,
    )
    .draw(display)?;

    // Heating and valve indicators, disc plus matching label.
    draw_indicator(Point::new(x + 3, 49), zone.is_heating, RED, display)?;
    let heat_color = if zone.is_heating { RED } else { GRAY };
    Text::with_baseline(
        "HEAT",
        Point::new(x + 12, 48),
        MonoTextStyle::new(tiny, heat_color),
        Baseline::Top,
    )
    .draw(display)?;

    draw_indicator(Point::new(x + 3, 63), zone.valve_open, BLUE, display)?;
    let valve_color = if zone.valve_open { BLUE } else { GRAY };
    Text::with_baseline(
        "VALV",
        Point::new(x + 12, 62),
        MonoTextStyle::new(tiny, valve_color),
        Baseline::Top,
    )
    .draw(display)?;

    graph::draw_zone_graph(Point::new(x, GRAPH_TOP_PX), zone, hysteresis, display)
}
