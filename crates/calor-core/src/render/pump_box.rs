//! Pump column rendering
//!
//! The eighth column shows the circulation pump: relay state, demand and
//! relay indicators, and a duty-bar graph of the recent relay history.

use embedded_graphics::mono_font::MonoTextStyle;
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::Rectangle;
use embedded_graphics::text::{Baseline, Text};

use super::constants::{BOX_HEIGHT_PX, BOX_WIDTH_PX, GRAPH_TOP_PX};
use super::graph;
use super::{box_style, draw_indicator};
use crate::state::{ControllerState, ZONE_COUNT};
use crate::ui::fonts::{FontProvider, FontSize};
use crate::ui::styling::colors::{BLUE, DARK_GRAY, GRAY, GREEN, ORANGE, WHITE};

pub(crate) fn draw_pump_box<P, D>(
    state: &ControllerState,
    fonts: &P,
    display: &mut D,
) -> Result<(), D::Error>
where
    P: FontProvider,
    D: DrawTarget<Color = Rgb565>,
{
    let x = ZONE_COUNT as i32 * BOX_WIDTH_PX as i32;
    let background = if state.pump_on { BLUE } else { DARK_GRAY };

    Rectangle::new(Point::new(x, 0), Size::new(BOX_WIDTH_PX - 1, BOX_HEIGHT_PX))
        .into_styled(box_style(background, WHITE))
        .draw(display)?;

    Text::with_baseline(
        "PUMP",
        Point::new(x + 4, 2),
        MonoTextStyle::new(fonts.font(FontSize::Small), WHITE),
        Baseline::Top,
    )
    .draw(display)?;

    let (status_word, status_color) = if state.pump_on {
        ("ON", WHITE)
    } else {
        ("OFF", GRAY)
    };
    Text::with_baseline(
        status_word,
        Point::new(x + 6, 18),
        MonoTextStyle::new(fonts.font(FontSize::Large), status_color),
        Baseline::Top,
    )
    .draw(display)?;

    let tiny = fonts.font(FontSize::Tiny);

    // Demand indicator: any zone asking for heat.
    draw_indicator(Point::new(x + 3, 49), state.pump_demand, ORANGE, display)?;
    let demand_color = if state.pump_demand { ORANGE } else { GRAY };
    Text::with_baseline(
        "DMD",
        Point::new(x + 12, 48),
        MonoTextStyle::new(tiny, demand_color),
        Baseline::Top,
    )
    .draw(display)?;

    // Relay indicator: the pump output itself.
    draw_indicator(Point::new(x + 3, 63), state.pump_on, GREEN, display)?;
    let relay_color = if state.pump_on { GREEN } else { GRAY };
    Text::with_baseline(
        "RLY",
        Point::new(x + 12, 62),
        MonoTextStyle::new(tiny, relay_color),
        Baseline::Top,
    )
    .draw(display)?;

    graph::draw_pump_graph(
        Point::new(x, GRAPH_TOP_PX),
        state.recent_pump_history(),
        display,
    )
}
