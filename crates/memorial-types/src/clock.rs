//! Clock face types.

use serde::{Deserialize, Serialize};

/// Rotation of each clock hand, in degrees.
///
/// Angles are measured clockwise from the 3 o'clock position, so the
/// 12 o'clock position is -90.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HandAngles {
    pub hour: f64,
    pub minute: f64,
    pub second: f64,
}

impl HandAngles {
    /// The same angles normalized into `[0, 360)`.
    pub fn normalized(self) -> Self {
        Self {
            hour: self.hour.rem_euclid(360.0),
            minute: self.minute.rem_euclid(360.0),
            second: self.second.rem_euclid(360.0),
        }
    }
}
