//! Layout and behavior constants for the display
//!
//! All magic numbers are defined here with descriptive names and units.

/// Display width in pixels (ILI9341 in landscape mode).
pub const DISPLAY_WIDTH_PX: u32 = 320;

/// Display height in pixels.
pub const DISPLAY_HEIGHT_PX: u32 = 240;

/// Horizontal stride of one zone/pump column. The drawn box is one pixel
/// narrower, leaving a gutter between columns.
pub const BOX_WIDTH_PX: u32 = 40;

/// Height of the upper status box of each column.
pub const BOX_HEIGHT_PX: u32 = 78;

/// Height of the graph sub-panel below each box.
pub const GRAPH_HEIGHT_PX: u32 = 84;

/// Top row of the graph sub-panels.
pub const GRAPH_TOP_PX: i32 = BOX_HEIGHT_PX as i32;

/// First status-bar text row.
pub const STATUS_TOP_PX: i32 = BOX_HEIGHT_PX as i32 + GRAPH_HEIGHT_PX as i32 + 4;

/// Vertical pitch between status-bar lines.
pub const STATUS_LINE_PITCH_PX: i32 = 14;

/// Half-height of a graph's vertical range around the setpoint, degrees C.
pub const GRAPH_RANGE_C: f32 = 6.0;

/// Lower edge of the reserved band the upstream sensor driver reports on a
/// bus fault. Readings inside the band are flagged rather than trusted.
pub const SENSOR_FAULT_MIN_C: f32 = 84.5;

/// Upper edge of the sensor driver's fault band.
pub const SENSOR_FAULT_MAX_C: f32 = 85.5;

/// Error score at which a zone is shown in the safety-error state.
pub const SAFETY_ERROR_THRESHOLD: u32 = 50;

/// Absolute sanity bound for history samples. Values outside are dropped
/// from the trace instead of clamped; this is distinct from the +/-6C
/// display clamp.
pub const HISTORY_SANITY_MIN_C: f32 = 0.0;

/// Upper absolute sanity bound for history samples.
pub const HISTORY_SANITY_MAX_C: f32 = 100.0;

/// Horizontal spacing of the dotted hysteresis guide lines.
pub const GUIDE_DOT_SPACING_PX: i32 = 3;

/// Diameter of the heat/valve/demand/relay indicator discs.
pub const INDICATOR_DIAMETER_PX: u32 = 7;
