use std::time::Duration;

use crate::layer::LayerVisualState;
use crate::spring::{Spring, SpringParams};

/// Springs carrying one layer's rendered visuals toward its derived target.
#[derive(Clone, Debug)]
pub struct LayerAnimator {
    depth: Spring,
    opacity: Spring,
    scale: Spring,
}

impl LayerAnimator {
    /// Starts at rest on `initial`.
    pub fn new(initial: LayerVisualState, params: SpringParams) -> Self {
        Self {
            depth: Spring::new(initial.depth_offset, params),
            opacity: Spring::new(initial.opacity, params),
            scale: Spring::new(initial.scale, params),
        }
    }

    pub fn retarget(&mut self, target: LayerVisualState) {
        self.depth.set_target(target.depth_offset);
        self.opacity.set_target(target.opacity);
        self.scale.set_target(target.scale);
    }

    pub fn tick(&mut self, dt: Duration) {
        self.depth.tick(dt);
        self.opacity.tick(dt);
        self.scale.tick(dt);
    }

    pub fn current(&self) -> LayerVisualState {
        LayerVisualState {
            depth_offset: self.depth.value(),
            opacity: self.opacity.value().clamp(0.0, 1.0),
            scale: self.scale.value(),
        }
    }

    pub fn is_settled(&self, epsilon: f32) -> bool {
        self.depth.is_settled(epsilon)
            && self.opacity.is_settled(epsilon)
            && self.scale.is_settled(epsilon)
    }
}
