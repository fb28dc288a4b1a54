//! Zone status classification
//!
//! The visual state of a zone box follows a strict precedence. The ordered
//! chain in [`ZoneStatus::classify`] is the single source of that ordering,
//! kept separate from the drawing code so it can be audited and tested on
//! its own.

use embedded_graphics::pixelcolor::Rgb565;

use super::constants::{SAFETY_ERROR_THRESHOLD, SENSOR_FAULT_MAX_C, SENSOR_FAULT_MIN_C};
use crate::state::ZoneState;
use crate::ui::styling::colors::{DARK_GRAY, DARK_RED, GRAY, ORANGE, RED, WHITE};

/// Visual condition of a zone box.
///
/// Variants are listed in precedence order; classification takes the first
/// that applies and later conditions cannot override it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ZoneStatus {
    /// Zone locked out by the safety monitor.
    Disabled,
    /// No temperature sensor is delivering readings.
    SensorMissing,
    /// Reading inside the sensor driver's reserved fault band.
    SensorFault,
    /// Accumulated error score crossed the safety threshold.
    SafetyError,
    /// Heating relay on.
    Heating,
    Idle,
}

/// Box colors derived from a zone's status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ZoneBoxColors {
    pub background: Rgb565,
    pub outline: Rgb565,
    pub text: Rgb565,
}

impl ZoneStatus {
    /// Classify a zone. Evaluated top to bottom, first match wins.
    pub fn classify(zone: &ZoneState) -> Self {
        if zone.is_disabled {
            return Self::Disabled;
        }

        let Some(temperature) = zone.temperature else {
            return Self::SensorMissing;
        };

        if in_fault_band(temperature) {
            Self::SensorFault
        } else if zone.error_score >= SAFETY_ERROR_THRESHOLD {
            Self::SafetyError
        } else if zone.is_heating {
            Self::Heating
        } else {
            Self::Idle
        }
    }

    /// Box colors for this status.
    pub fn colors(self) -> ZoneBoxColors {
        match self {
            Self::Disabled => ZoneBoxColors {
                background: DARK_RED,
                outline: RED,
                text: WHITE,
            },
            Self::SensorMissing => ZoneBoxColors {
                background: DARK_GRAY,
                outline: GRAY,
                text: GRAY,
            },
            Self::SensorFault => ZoneBoxColors {
                background: DARK_GRAY,
                outline: RED,
                text: WHITE,
            },
            Self::SafetyError => ZoneBoxColors {
                background: RED,
                outline: WHITE,
                text: WHITE,
            },
            Self::Heating => ZoneBoxColors {
                background: ORANGE,
                outline: WHITE,
                text: WHITE,
            },
            Self::Idle => ZoneBoxColors {
                background: DARK_GRAY,
                outline: WHITE,
                text: WHITE,
            },
        }
    }
}

/// Reading falls inside the sensor driver's fault band.
fn in_fault_band(temperature: f32) -> bool {
    (SENSOR_FAULT_MIN_C..=SENSOR_FAULT_MAX_C).contains(&temperature)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn zone_with_temperature(temperature: f32) -> ZoneState {
        ZoneState {
            temperature: Some(temperature),
            ..ZoneState::default()
        }
    }

    #[test]
    fn disabled_wins_over_everything() {
        let zone = ZoneState {
            temperature: Some(19.0),
            is_disabled: true,
            error_score: 100,
            is_heating: true,
            ..ZoneState::default()
        };

        assert_eq!(ZoneStatus::classify(&zone), ZoneStatus::Disabled);
    }

    #[test]
    fn missing_sensor_wins_over_error_score() {
        let zone = ZoneState {
            temperature: None,
            error_score: 100,
            is_heating: true,
            ..ZoneState::default()
        };

        assert_eq!(ZoneStatus::classify(&zone), ZoneStatus::SensorMissing);
    }

    #[test]
    fn fault_band_is_inclusive_on_both_edges() {
        assert_eq!(
            ZoneStatus::classify(&zone_with_temperature(84.5)),
            ZoneStatus::SensorFault
        );
        assert_eq!(
            ZoneStatus::classify(&zone_with_temperature(85.0)),
            ZoneStatus::SensorFault
        );
        assert_eq!(
            ZoneStatus::classify(&zone_with_temperature(85.5)),
            ZoneStatus::SensorFault
        );

        assert_eq!(
            ZoneStatus::classify(&zone_with_temperature(84.4)),
            ZoneStatus::Idle
        );
        assert_eq!(
            ZoneStatus::classify(&zone_with_temperature(85.6)),
            ZoneStatus::Idle
        );
    }

    #[test]
    fn fault_band_wins_over_error_score() {
        let zone = ZoneState {
            temperature: Some(85.0),
            error_score: 100,
            ..ZoneState::default()
        };

        assert_eq!(ZoneStatus::classify(&zone), ZoneStatus::SensorFault);
    }

    #[test]
    fn safety_error_starts_at_threshold() {
        let mut zone = zone_with_temperature(19.0);
        zone.error_score = 49;
        assert_eq!(ZoneStatus::classify(&zone), ZoneStatus::Idle);

        zone.error_score = 50;
        assert_eq!(ZoneStatus::classify(&zone), ZoneStatus::SafetyError);
    }

    #[test]
    fn safety_error_wins_over_heating() {
        let zone = ZoneState {
            temperature: Some(18.0),
            error_score: 65,
            is_heating: true,
            ..ZoneState::default()
        };

        assert_eq!(ZoneStatus::classify(&zone), ZoneStatus::SafetyError);
    }

    #[test]
    fn heating_otherwise() {
        let zone = ZoneState {
            temperature: Some(19.2),
            is_heating: true,
            ..ZoneState::default()
        };

        assert_eq!(ZoneStatus::classify(&zone), ZoneStatus::Heating);
    }

    #[test]
    fn disabled_colors_are_not_the_safety_error_colors() {
        let disabled = ZoneStatus::Disabled.colors();
        let safety = ZoneStatus::SafetyError.colors();

        assert_eq!(disabled.background, DARK_RED);
        assert_eq!(safety.background, RED);
        assert_ne!(disabled.background, safety.background);
    }

    #[test]
    fn missing_sensor_grays_out_text_and_outline() {
        let colors = ZoneStatus::SensorMissing.colors();
        assert_eq!(colors.outline, GRAY);
        assert_eq!(colors.text, GRAY);
    }
}
