//! Controller state consumed by the renderer
//!
//! One immutable frame of the heating controller: per-zone readings and
//! flags, pump state, network status. Built once per frame by the caller
//! and read-only during rendering.

extern crate alloc;

use alloc::vec;
use alloc::vec::Vec;
use heapless::String;

/// Number of heating zones on the display.
pub const ZONE_COUNT: usize = 7;

/// History samples shown in a graph panel (the last-40 window).
pub const HISTORY_WINDOW: usize = 40;

/// State of a single heating zone.
#[derive(Debug, Clone, PartialEq)]
pub struct ZoneState {
    /// Latest reading in degrees C. `None` when no sensor is delivering.
    pub temperature: Option<f32>,
    /// Per-zone target temperature in degrees C.
    pub setpoint: f32,
    /// Heating relay currently commanded on.
    pub is_heating: bool,
    /// Zone valve currently open.
    pub valve_open: bool,
    /// Accumulated safety-monitor score. Crossing the threshold switches
    /// the box into the safety-error state.
    pub error_score: u32,
    /// Zone locked out by the safety monitor.
    pub is_disabled: bool,
    /// Temperature history, most-recent-last. `None` entries are samples
    /// the sensor failed to deliver. Storage is unbounded; rendering only
    /// reads the window returned by [`recent_history`](Self::recent_history).
    pub history: Vec<Option<f32>>,
}

impl Default for ZoneState {
    fn default() -> Self {
        Self {
            temperature: None,
            setpoint: 20.0,
            is_heating: false,
            valve_open: false,
            error_score: 0,
            is_disabled: false,
            history: Vec::new(),
        }
    }
}

impl ZoneState {
    /// The last [`HISTORY_WINDOW`] samples, oldest first.
    pub fn recent_history(&self) -> &[Option<f32>] {
        let start = self.history.len().saturating_sub(HISTORY_WINDOW);
        &self.history[start..]
    }
}

/// One complete display frame.
#[derive(Debug, Clone, PartialEq)]
pub struct ControllerState {
    /// Exactly seven zones, left to right.
    pub zones: [ZoneState; ZONE_COUNT],
    /// Circulation pump relay state.
    pub pump_on: bool,
    /// At least one zone is demanding heat.
    pub pump_demand: bool,
    /// Pump relay history, most-recent-last, same logical window as the
    /// zone histories.
    pub pump_history: Vec<bool>,
    /// Controller-wide target temperature in degrees C.
    pub global_setpoint: f32,
    /// Switching band around the setpoint in degrees C.
    pub hysteresis: f32,
    pub ip_address: String<16>,
    /// WiFi signal strength in dBm.
    pub rssi: i16,
    pub wifi_connected: bool,
    /// Pre-formatted wall-clock string; opaque to the renderer.
    pub timestamp: String<32>,
}

impl Default for ControllerState {
    fn default() -> Self {
        let mut ip_address = String::new();
        ip_address.push_str("192.168.1.43").ok();

        let mut timestamp = String::new();
        timestamp.push_str("2025-01-02 14:30:00").ok();

        Self {
            zones: core::array::from_fn(|_| ZoneState::default()),
            pump_on: false,
            pump_demand: false,
            pump_history: vec![false; HISTORY_WINDOW],
            global_setpoint: 20.0,
            hysteresis: 0.5,
            ip_address,
            rssi: -65,
            wifi_connected: true,
            timestamp,
        }
    }
}

impl ControllerState {
    /// The last [`HISTORY_WINDOW`] pump samples, oldest first.
    pub fn recent_pump_history(&self) -> &[bool] {
        let start = self.pump_history.len().saturating_sub(HISTORY_WINDOW);
        &self.pump_history[start..]
    }

    /// True when any zone's valve is open.
    pub fn any_valve_open(&self) -> bool {
        self.zones.iter().any(|zone| zone.valve_open)
    }

    /// Number of zones currently heating.
    pub fn heating_zone_count(&self) -> usize {
        self.zones.iter().filter(|zone| zone.is_heating).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    #[test]
    fn recent_history_returns_whole_short_buffer() {
        let zone = ZoneState {
            history: vec![Some(20.0), Some(20.1)],
            ..ZoneState::default()
        };

        assert_eq!(zone.recent_history().len(), 2);
    }

    #[test]
    fn recent_history_caps_at_window() {
        let zone = ZoneState {
            history: (0..100).map(|i| Some(i as f32)).collect(),
            ..ZoneState::default()
        };

        let recent = zone.recent_history();
        assert_eq!(recent.len(), HISTORY_WINDOW);
        // Oldest retained sample is number 60, newest is 99.
        assert_eq!(recent[0], Some(60.0));
        assert_eq!(recent[HISTORY_WINDOW - 1], Some(99.0));
    }

    #[test]
    fn recent_pump_history_caps_at_window() {
        let state = ControllerState {
            pump_history: vec![true; 55],
            ..ControllerState::default()
        };

        assert_eq!(state.recent_pump_history().len(), HISTORY_WINDOW);
    }

    #[test]
    fn any_valve_open_is_an_aggregate() {
        let mut state = ControllerState::default();
        assert!(!state.any_valve_open());

        state.zones[6].valve_open = true;
        assert!(state.any_valve_open());
    }

    #[test]
    fn heating_zone_count_counts_all_zones() {
        let mut state = ControllerState::default();
        assert_eq!(state.heating_zone_count(), 0);

        state.zones[0].is_heating = true;
        state.zones[3].is_heating = true;
        assert_eq!(state.heating_zone_count(), 2);
    }
}
