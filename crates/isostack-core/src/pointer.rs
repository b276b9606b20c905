use glam::Vec2;

use crate::spring::{Axis, MotionEngine};

/// Client-space pointer coordinates of a single event.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PointerSample {
    pub x: f32,
    pub y: f32,
}

/// Bounding rectangle of the tracked container, in the same space as
/// [`PointerSample`].
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ContainerRect {
    pub left: f32,
    pub top: f32,
    pub width: f32,
    pub height: f32,
}

impl ContainerRect {
    /// A rectangle is measurable once it has a finite, positive size.
    #[inline]
    pub fn is_measurable(&self) -> bool {
        self.left.is_finite()
            && self.top.is_finite()
            && self.width.is_finite()
            && self.height.is_finite()
            && self.width > 0.0
            && self.height > 0.0
    }
}

/// Pointer position relative to the container centre; -0.5 .. 0.5 while the
/// pointer is inside. Values are deliberately not clamped.
pub type NormalizedPointer = Vec2;

#[inline]
pub fn normalize(sample: PointerSample, rect: ContainerRect) -> Option<NormalizedPointer> {
    if !rect.is_measurable() {
        return None;
    }
    let nx = (sample.x - rect.left) / rect.width - 0.5;
    let ny = (sample.y - rect.top) / rect.height - 0.5;
    Some(Vec2::new(nx, ny))
}

/// Forwards pointer samples into the motion springs.
///
/// `rect` is `None` until the host has a mounted, measured container; such
/// samples are dropped and the next move event retries naturally.
pub fn track(
    engine: &mut MotionEngine,
    sample: PointerSample,
    rect: Option<ContainerRect>,
) -> Option<NormalizedPointer> {
    let p = normalize(sample, rect?)?;
    engine.set_target(Axis::X, p.x);
    engine.set_target(Axis::Y, p.y);
    Some(p)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::spring::SpringParams;

    const RECT: ContainerRect = ContainerRect {
        left: 100.0,
        top: 50.0,
        width: 400.0,
        height: 600.0,
    };

    #[test]
    fn centre_maps_to_origin() {
        let p = normalize(PointerSample { x: 300.0, y: 350.0 }, RECT).unwrap();
        assert!(p.length() < 1e-6);
    }

    #[test]
    fn corners_map_to_half_extents() {
        let tl = normalize(PointerSample { x: 100.0, y: 50.0 }, RECT).unwrap();
        assert_eq!(tl, Vec2::new(-0.5, -0.5));
        let br = normalize(PointerSample { x: 500.0, y: 650.0 }, RECT).unwrap();
        assert_eq!(br, Vec2::new(0.5, 0.5));
    }

    #[test]
    fn outside_points_are_not_clamped() {
        let p = normalize(PointerSample { x: 540.0, y: 50.0 }, RECT).unwrap();
        assert!((p.x - 0.6).abs() < 1e-6);
    }

    #[test]
    fn unmeasured_container_drops_the_sample() {
        let mut engine = MotionEngine::new(SpringParams::default());
        let zero = ContainerRect::default();
        assert!(track(&mut engine, PointerSample { x: 10.0, y: 10.0 }, Some(zero)).is_none());
        assert!(track(&mut engine, PointerSample { x: 10.0, y: 10.0 }, None).is_none());
        let nan = ContainerRect {
            width: f32::NAN,
            ..RECT
        };
        assert!(track(&mut engine, PointerSample { x: 10.0, y: 10.0 }, Some(nan)).is_none());
        assert_eq!(engine.target(Axis::X), 0.0);
        assert_eq!(engine.target(Axis::Y), 0.0);
    }

    #[test]
    fn tracked_sample_becomes_spring_target() {
        let mut engine = MotionEngine::new(SpringParams::default());
        track(&mut engine, PointerSample { x: 500.0, y: 50.0 }, Some(RECT));
        assert_eq!(engine.target(Axis::X), 0.5);
        assert_eq!(engine.target(Axis::Y), -0.5);
        // targets only; values move on tick
        assert_eq!(engine.value(Axis::X), 0.0);
    }
}
