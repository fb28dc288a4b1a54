//! Mockup generator for the calor-rs controller display.
//!
//! Renders the scripted demo states to PNG files for documentation. Each
//! state is drawn onto a fresh surface and upscaled with nearest-neighbor
//! sampling, so edges stay crisp and regenerated images are byte-identical
//! across runs.
//!
//! ```text
//! calor-mockup [OUTPUT_DIR] [--scale N]
//! ```

use std::fs;
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics_simulator::{OutputSettingsBuilder, SimulatorDisplay};
use log::info;

use calor_core::DisplayRenderer;
use calor_core::render::constants::{DISPLAY_HEIGHT_PX, DISPLAY_WIDTH_PX};
use calor_core::state::{ControllerState, HISTORY_WINDOW, ZoneState};

/// Render reference mockups of the controller display.
#[derive(Parser)]
#[command(name = "calor-mockup")]
struct Args {
    /// Directory the PNG files are written to.
    #[arg(default_value = "docs/images")]
    output_dir: PathBuf,

    /// Integer upscale factor (nearest-neighbor).
    #[arg(long, default_value_t = 2)]
    scale: u32,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    fs::create_dir_all(&args.output_dir)
        .with_context(|| format!("creating {}", args.output_dir.display()))?;

    let renderer = DisplayRenderer::new();
    let output_settings = OutputSettingsBuilder::new()
        .scale(args.scale.max(1))
        .pixel_spacing(0)
        .build();

    let states = [
        ("display_idle", idle_state()),
        ("display_heating", heating_state()),
        ("display_error", error_state()),
        ("display_mixed", mixed_state()),
    ];

    for (name, state) in &states {
        // One fresh surface per frame.
        let mut display = SimulatorDisplay::<Rgb565>::new(Size::new(
            DISPLAY_WIDTH_PX,
            DISPLAY_HEIGHT_PX,
        ));
        renderer.render(state, &mut display)?;

        let path = args.output_dir.join(format!("{name}.png"));
        display
            .to_rgb_output_image(&output_settings)
            .save_png(&path)
            .with_context(|| format!("writing {}", path.display()))?;

        info!("Generated {}", path.display());
    }

    info!("All images saved to {}", args.output_dir.display());
    Ok(())
}

// ---------------------------------------------------------------------------
// Synthetic history
// ---------------------------------------------------------------------------

/// Synthesize a plausible temperature history ending near `latest`.
///
/// A heating zone ramps up toward the reading; an idle zone drifts around
/// it. Deterministic, so regenerated mockups do not churn in version
/// control.
fn synth_history(latest: f32, heating: bool, samples: usize) -> Vec<Option<f32>> {
    (0..samples)
        .map(|i| {
            let t = i as f32;
            let remaining = (samples - 1 - i) as f32;
            let value = if heating {
                latest - remaining * 0.05 + 0.06 * (t / 3.0).sin()
            } else {
                latest + 0.25 * (t / 7.0).sin() + 0.1 * (t / 2.3).cos()
            };
            Some(value)
        })
        .collect()
}

/// Zone with a live sensor and synthesized history.
fn sensor_zone(temperature: f32, setpoint: f32, heating: bool, valve_open: bool) -> ZoneState {
    ZoneState {
        temperature: Some(temperature),
        setpoint,
        is_heating: heating,
        valve_open,
        history: synth_history(temperature, heating, HISTORY_WINDOW),
        ..ZoneState::default()
    }
}

/// Zone with no sensor attached.
fn bare_zone(setpoint: f32) -> ZoneState {
    ZoneState {
        setpoint,
        ..ZoneState::default()
    }
}

// ---------------------------------------------------------------------------
// Demo states
// ---------------------------------------------------------------------------

/// Normal operation: two sensed zones at setpoint, the rest unpopulated.
fn idle_state() -> ControllerState {
    ControllerState {
        zones: [
            sensor_zone(20.3, 20.0, false, false),
            sensor_zone(20.7, 20.0, false, false),
            bare_zone(20.0),
            bare_zone(20.0),
            bare_zone(20.0),
            bare_zone(20.0),
            bare_zone(20.0),
        ],
        ..ControllerState::default()
    }
}

/// Active heating: zone 1 below setpoint with its valve open, pump running.
fn heating_state() -> ControllerState {
    let mut pump_history = vec![false; 20];
    pump_history.extend(std::iter::repeat(true).take(20));

    ControllerState {
        zones: [
            sensor_zone(19.2, 20.0, true, true),
            sensor_zone(20.3, 20.0, false, false),
            bare_zone(20.0),
            bare_zone(20.0),
            bare_zone(20.0),
            bare_zone(20.0),
            bare_zone(20.0),
        ],
        pump_on: true,
        pump_demand: true,
        pump_history,
        ..ControllerState::default()
    }
}

/// Safety conditions: a disabled zone and a zone over the error threshold.
fn error_state() -> ControllerState {
    let disabled = ZoneState {
        is_disabled: true,
        error_score: 100,
        ..sensor_zone(18.5, 20.0, false, false)
    };

    // Heating but the valve is not opening.
    let failing = ZoneState {
        error_score: 65,
        ..sensor_zone(19.0, 20.0, true, false)
    };

    ControllerState {
        zones: [
            disabled,
            failing,
            bare_zone(20.0),
            bare_zone(20.0),
            bare_zone(20.0),
            bare_zone(20.0),
            bare_zone(20.0),
        ],
        ..ControllerState::default()
    }
}

/// One of everything, for the documentation overview image.
fn mixed_state() -> ControllerState {
    let fault = ZoneState {
        temperature: Some(85.0),
        setpoint: 20.0,
        history: vec![Some(85.0); HISTORY_WINDOW],
        ..ZoneState::default()
    };

    let warning = ZoneState {
        error_score: 55,
        ..sensor_zone(18.0, 20.0, true, true)
    };

    let disabled = ZoneState {
        is_disabled: true,
        error_score: 100,
        ..sensor_zone(17.5, 20.0, false, false)
    };

    let mut pump_history = vec![false; 10];
    pump_history.extend(std::iter::repeat(true).take(30));

    ControllerState {
        zones: [
            sensor_zone(19.5, 20.0, true, true),
            sensor_zone(20.8, 21.0, false, false),
            bare_zone(20.0),
            fault,
            warning,
            disabled,
            bare_zone(20.0),
        ],
        pump_on: true,
        pump_demand: true,
        pump_history,
        ..ControllerState::default()
    }
}
