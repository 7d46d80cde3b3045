//! Sub-hour positions inside a calendar hour cell.
//!
//! The console's scheduler draws one row per hour. Drivers land on the
//! vertical center of a row, so positions are expressed relative to that
//! center, in units of the row height: `-0.5` is the top edge, `0.5` the
//! bottom edge.

use serde::{Deserialize, Serialize};

/// Row height the lookup table was measured against, in pixels.
pub const REFERENCE_CELL_HEIGHT: f64 = 67.0;

/// Distance from the row top to its center in the reference row.
const CENTERING_PX: f64 = 34.0;

/// Measured click offsets from the row center, in reference pixels.
const MEASURED_OFFSETS_PX: [(u8, f64); 7] = [
    (0, -34.0),
    (5, -28.0),
    (10, -22.0),
    (15, -17.0),
    (20, -11.0),
    (30, 0.0),
    (50, 22.0),
];

/// Position of a minute inside an hour cell.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SlotOffset {
    /// Offset from the cell center, as a fraction of the cell height.
    pub fraction: f64,
}

impl SlotOffset {
    /// Offset for `minute` past the hour; minutes past 59 are clamped.
    pub fn for_minute(minute: u8) -> Self {
        let minute = minute.min(59);
        let px = MEASURED_OFFSETS_PX
            .iter()
            .find(|(m, _)| *m == minute)
            .map(|(_, px)| *px)
            // Whole pixels from the row top, then centered.
            .unwrap_or_else(|| {
                (f64::from(minute) / 60.0 * REFERENCE_CELL_HEIGHT).trunc() - CENTERING_PX
            });
        Self {
            fraction: px / REFERENCE_CELL_HEIGHT,
        }
    }

    /// Pixel offset from the center of a cell `cell_height` pixels tall.
    pub fn to_pixels(&self, cell_height: f64) -> i32 {
        (self.fraction * cell_height).round() as i32
    }
}
