//! Status bar rendering
//!
//! Three fixed text lines below the graph row: network, time/setpoint, and
//! the aggregate demand/valve/zone summary.

use core::fmt::Write;

use embedded_graphics::mono_font::MonoTextStyle;
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::text::{Baseline, Text};
use heapless::String;

use super::constants::{STATUS_LINE_PITCH_PX, STATUS_TOP_PX};
use crate::state::ControllerState;
use crate::ui::fonts::{FontProvider, FontSize};
use crate::ui::styling::colors::{GRAY, GREEN, ORANGE, RED, WHITE};

pub(crate) fn draw_status_bar<P, D>(
    state: &ControllerState,
    fonts: &P,
    display: &mut D,
) -> Result<(), D::Error>
where
    P: FontProvider,
    D: DrawTarget<Color = Rgb565>,
{
    let small = fonts.font(FontSize::Small);
    let tiny = fonts.font(FontSize::Tiny);
    let y = STATUS_TOP_PX;

    // Line 1: network. The signal readout only exists while connected.
    Text::with_baseline(
        "Net:",
        Point::new(5, y),
        MonoTextStyle::new(small, WHITE),
        Baseline::Top,
    )
    .draw(display)?;

    if state.wifi_connected {
        Text::with_baseline(
            &state.ip_address,
            Point::new(30, y),
            MonoTextStyle::new(small, GREEN),
            Baseline::Top,
        )
        .draw(display)?;

        let mut rssi = String::<12>::new();
        let _ = write!(rssi, "RSSI:{}", state.rssi);
        Text::with_baseline(
            &rssi,
            Point::new(145, y),
            MonoTextStyle::new(tiny, GRAY),
            Baseline::Top,
        )
        .draw(display)?;
    } else {
        Text::with_baseline(
            "DISCONNECTED",
            Point::new(30, y),
            MonoTextStyle::new(small, RED),
            Baseline::Top,
        )
        .draw(display)?;
    }

    // Line 2: wall clock and global setpoint.
    let y2 = y + STATUS_LINE_PITCH_PX;
    Text::with_baseline(
        &state.timestamp,
        Point::new(5, y2),
        MonoTextStyle::new(small, WHITE),
        Baseline::Top,
    )
    .draw(display)?;

    let mut setpoint = String::<16>::new();
    let _ = write!(setpoint, "Set:{:.1}C", state.global_setpoint);
    Text::with_baseline(
        &setpoint,
        Point::new(200, y2),
        MonoTextStyle::new(small, WHITE),
        Baseline::Top,
    )
    .draw(display)?;

    // Line 3: aggregate summary.
    let y3 = y2 + STATUS_LINE_PITCH_PX;
    Text::with_baseline(
        "Demand:",
        Point::new(5, y3),
        MonoTextStyle::new(small, WHITE),
        Baseline::Top,
    )
    .draw(display)?;

    let (demand_word, demand_color) = if state.pump_demand {
        ("ACTIVE", ORANGE)
    } else {
        ("idle", GRAY)
    };
    Text::with_baseline(
        demand_word,
        Point::new(55, y3),
        MonoTextStyle::new(small, demand_color),
        Baseline::Top,
    )
    .draw(display)?;

    Text::with_baseline(
        "Valves:",
        Point::new(120, y3),
        MonoTextStyle::new(small, WHITE),
        Baseline::Top,
    )
    .draw(display)?;

    let (valve_word, valve_color) = if state.any_valve_open() {
        ("OPEN", GREEN)
    } else {
        ("closed", GRAY)
    };
    Text::with_baseline(
        valve_word,
        Point::new(170, y3),
        MonoTextStyle::new(small, valve_color),
        Baseline::Top,
    )
    .draw(display)?;

    let heating_count = state.heating_zone_count();
    let mut zones = String::<12>::new();
    let _ = write!(zones, "Zones:{}", heating_count);
    let zones_color = if heating_count > 0 { ORANGE } else { GRAY };
    Text::with_baseline(
        &zones,
        Point::new(240, y3),
        MonoTextStyle::new(small, zones_color),
        Baseline::Top,
    )
    .draw(display)?;

    Ok(())
}
