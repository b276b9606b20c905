use crate::constants::{ROTATE_X_FROM, ROTATE_X_TO, ROTATE_Y_FROM, ROTATE_Y_TO};

/// Normalized pointer interval every tilt range is indexed by.
pub const INPUT_MIN: f32 = -0.5;
pub const INPUT_MAX: f32 = 0.5;

/// Output angles (degrees) at the two ends of the input interval.
/// `from` may be larger than `to`; the mapping is then decreasing.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AngleRange {
    pub from: f32,
    pub to: f32,
}

impl AngleRange {
    pub const fn new(from: f32, to: f32) -> Self {
        Self { from, to }
    }

    pub fn min(&self) -> f32 {
        self.from.min(self.to)
    }

    pub fn max(&self) -> f32 {
        self.from.max(self.to)
    }

    /// Linear interpolation, saturating outside the input interval.
    #[inline]
    pub fn map(&self, input: f32) -> f32 {
        let t = ((input - INPUT_MIN) / (INPUT_MAX - INPUT_MIN)).clamp(0.0, 1.0);
        self.from + (self.to - self.from) * t
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TiltRanges {
    /// Rotation about X, driven by the vertical pointer spring.
    pub rotate_x: AngleRange,
    /// Rotation about Y, driven by the horizontal pointer spring.
    pub rotate_y: AngleRange,
}

impl Default for TiltRanges {
    fn default() -> Self {
        Self {
            rotate_x: AngleRange::new(ROTATE_X_FROM, ROTATE_X_TO),
            rotate_y: AngleRange::new(ROTATE_Y_FROM, ROTATE_Y_TO),
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct TiltAngles {
    pub rotate_x: f32,
    pub rotate_y: f32,
}

#[inline]
pub fn map_tilt(spring_x: f32, spring_y: f32, ranges: &TiltRanges) -> TiltAngles {
    TiltAngles {
        rotate_x: ranges.rotate_x.map(spring_y),
        rotate_y: ranges.rotate_y.map(spring_x),
    }
}
