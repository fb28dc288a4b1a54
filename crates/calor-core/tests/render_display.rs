//! Full-frame rendering tests.
//!
//! Renders complete controller states into the in-memory [`FrameBuffer`]
//! and asserts on the pixels that encode each visual rule, rather than on
//! golden images.

use calor_core::render::constants::{
    BOX_WIDTH_PX, GRAPH_TOP_PX, STATUS_LINE_PITCH_PX, STATUS_TOP_PX,
};
use calor_core::ui::styling::colors::{
    BLACK, BLUE, DARK_GRAY, DARK_RED, GRAY, GREEN, LIGHT_GRAY, ORANGE, RED, WHITE,
};
use calor_core::{ControllerState, DisplayRenderer, FrameBuffer, ZoneState};

use embedded_graphics::pixelcolor::Rgb565;

fn render(state: &ControllerState) -> FrameBuffer {
    let renderer = DisplayRenderer::new();
    let mut fb = FrameBuffer::new();
    renderer.render(state, &mut fb).unwrap();
    fb
}

/// Count pixels of `color` in the half-open rect [x0, x1) x [y0, y1).
fn count_color(fb: &FrameBuffer, x0: u32, y0: u32, x1: u32, y1: u32, color: Rgb565) -> usize {
    let mut count = 0;
    for y in y0..y1 {
        for x in x0..x1 {
            if fb.pixel(x, y) == Some(color) {
                count += 1;
            }
        }
    }
    count
}

fn has_color(fb: &FrameBuffer, x0: u32, y0: u32, x1: u32, y1: u32, color: Rgb565) -> bool {
    count_color(fb, x0, y0, x1, y1, color) > 0
}

fn zone_with_temperature(temperature: f32) -> ZoneState {
    ZoneState {
        temperature: Some(temperature),
        ..ZoneState::default()
    }
}

/// Interior background probe point of zone box `i`, clear of all text and
/// indicator sub-regions.
fn background_probe(index: u32) -> (u32, u32) {
    (index * BOX_WIDTH_PX + 35, 44)
}

#[test]
fn missing_sensor_zone_has_gray_outline_and_no_white_text() {
    // Zone 0 has no sensor but every other flag set; none may override the
    // unavailable styling of the reading area.
    let mut state = ControllerState::default();
    state.zones[0].is_heating = true;
    state.zones[0].error_score = 100;
    state.zones[0].history = vec![Some(20.0); 40];

    let fb = render(&state);

    // Outline corner pixel takes the unavailable color.
    assert_eq!(fb.pixel(0, 0), Some(GRAY));

    // No numeric reading: the readout region contains no white pixels.
    assert!(!has_color(&fb, 0, 8, 38, 31, WHITE));

    // And the stored history is not plotted.
    assert!(!has_color(&fb, 0, GRAPH_TOP_PX as u32, 39, 162, GREEN));
}

#[test]
fn disabled_beats_safety_error() {
    let mut state = ControllerState::default();
    state.zones[0] = ZoneState {
        temperature: Some(18.5),
        is_disabled: true,
        error_score: 100,
        ..ZoneState::default()
    };

    let fb = render(&state);
    let (bx, by) = background_probe(0);

    // Disabled background, not the safety-error background.
    assert_eq!(fb.pixel(bx, by), Some(DARK_RED));
    assert_eq!(fb.pixel(0, 0), Some(RED));

    // The DIS badge is present.
    assert!(has_color(&fb, 22, 1, 34, 7, RED));
}

#[test]
fn fault_band_outlines_in_red() {
    let mut state = ControllerState::default();
    state.zones[0] = zone_with_temperature(85.0);
    state.zones[1] = zone_with_temperature(84.4);
    state.zones[2] = zone_with_temperature(85.6);

    let fb = render(&state);

    assert_eq!(fb.pixel(0, 0), Some(RED));
    assert_eq!(fb.pixel(BOX_WIDTH_PX, 0), Some(WHITE));
    assert_eq!(fb.pixel(2 * BOX_WIDTH_PX, 0), Some(WHITE));

    // The fault state keeps the neutral background.
    let (bx, by) = background_probe(0);
    assert_eq!(fb.pixel(bx, by), Some(DARK_GRAY));
}

#[test]
fn out_of_band_history_clamps_to_the_top_inner_row() {
    let mut state = ControllerState::default();
    state.zones[0] = ZoneState {
        temperature: Some(27.0),
        history: vec![Some(27.0); 40],
        ..ZoneState::default()
    };

    let fb = render(&state);
    let top_inner = GRAPH_TOP_PX as u32 + 1;

    // The whole trace pins to the top inner row of the panel.
    assert_eq!(fb.pixel(1, top_inner), Some(GREEN));
    assert_eq!(fb.pixel(19, top_inner), Some(GREEN));
    assert_eq!(fb.pixel(37, top_inner), Some(GREEN));

    // The panel's top border row stays the outline color.
    assert_eq!(fb.pixel(5, GRAPH_TOP_PX as u32), Some(LIGHT_GRAY));

    // Nothing leaks above the panel into the zone box.
    assert!(!has_color(&fb, 0, 70, 39, GRAPH_TOP_PX as u32, GREEN));
}

#[test]
fn pump_history_renders_one_bar_per_true_sample() {
    let mut state = ControllerState::default();
    let mut history = vec![false; 39];
    history.push(true);
    state.pump_history = history;

    let fb = render(&state);

    // One bar of 80 pixels at the rightmost mapped column; with the pump
    // off and all valves closed, nothing else on screen is blue.
    let bar_x = 7 * BOX_WIDTH_PX + 37;
    assert_eq!(fb.pixel(bar_x, 100), Some(BLUE));
    assert_eq!(count_color(&fb, 0, 0, 320, 240, BLUE), 80);
}

#[test]
fn valve_summary_aggregates_over_all_zones() {
    let line3 = (STATUS_TOP_PX + 2 * STATUS_LINE_PITCH_PX) as u32;

    let state = ControllerState::default();
    let fb = render(&state);
    // All valves closed: the summary word renders gray, never green.
    assert!(!has_color(&fb, 170, line3, 320, line3 + 8, GREEN));
    assert!(has_color(&fb, 170, line3, 210, line3 + 8, GRAY));

    let mut state = ControllerState::default();
    state.zones[6].valve_open = true;
    let fb = render(&state);
    assert!(has_color(&fb, 170, line3, 210, line3 + 8, GREEN));
}

#[test]
fn disconnected_network_omits_the_signal_readout() {
    let line1 = STATUS_TOP_PX as u32;

    let mut state = ControllerState::default();
    state.wifi_connected = false;

    let fb = render(&state);

    // The disconnected marker is drawn in the error color.
    assert!(has_color(&fb, 30, line1, 110, line1 + 8, RED));

    // The RSSI area is untouched, not rendered as zero or blank text.
    assert_eq!(
        count_color(&fb, 145, line1, 320, line1 + 8, BLACK),
        ((320 - 145) * 8) as usize
    );

    // Connected control case: the readout is present.
    let state = ControllerState::default();
    let fb = render(&state);
    assert!(has_color(&fb, 145, line1, 200, line1 + 8, GRAY));
}

#[test]
fn render_is_pixel_identical_across_fresh_surfaces() {
    let mut state = ControllerState::default();
    state.zones[0] = ZoneState {
        temperature: Some(19.5),
        is_heating: true,
        valve_open: true,
        history: (0..40).map(|i| Some(19.0 + i as f32 * 0.02)).collect(),
        ..ZoneState::default()
    };
    state.zones[3] = zone_with_temperature(85.0);
    state.zones[5] = ZoneState {
        temperature: Some(17.5),
        is_disabled: true,
        error_score: 100,
        ..ZoneState::default()
    };
    state.pump_on = true;
    state.pump_demand = true;
    state.pump_history = (0..40).map(|i| i >= 10).collect();

    let first = render(&state);
    let second = render(&state);

    assert_eq!(first.pixels(), second.pixels());
}

#[test]
fn heating_zone_gets_the_active_background() {
    let mut state = ControllerState::default();
    state.zones[2] = ZoneState {
        temperature: Some(19.2),
        is_heating: true,
        ..ZoneState::default()
    };

    let fb = render(&state);
    let (bx, by) = background_probe(2);

    assert_eq!(fb.pixel(bx, by), Some(ORANGE));
}
