//! The mounted component: pointer tracking, springs, explode state and layer
//! animation behind one `tick` per frame.
//!
//! Event handlers only record input (spring targets, explode state); all
//! integration happens in [`IsoStack::tick`], so a frame always integrates
//! against the most recent pointer target.

use std::time::Duration;

use glam::Vec2;

use crate::animator::LayerAnimator;
use crate::compositor::{Compositor, ExplodeState};
use crate::config::StackConfig;
use crate::constants::{BADGE_LABEL_COLLAPSED, BADGE_LABEL_EXPLODED, BADGE_TRAVEL, FRAME_DT_MAX_SEC};
use crate::focus::FocusReader;
use crate::layer::{ActiveLayer, LayerId, LayerVisualState};
use crate::pointer::{self, ContainerRect, NormalizedPointer, PointerSample};
use crate::spring::{Axis, MotionEngine};
use crate::tilt::{map_tilt, TiltAngles};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LayerFrame {
    pub id: LayerId,
    pub visual: LayerVisualState,
}

/// Floating status label that follows the raw pointer.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Badge {
    pub label: &'static str,
    pub offset: Vec2,
}

/// Everything a renderer needs for one frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StackFrame {
    pub tilt: TiltAngles,
    pub explode: ExplodeState,
    pub layers: [LayerFrame; 3],
    pub connectors_visible: bool,
    pub badge: Badge,
    pub active: ActiveLayer,
}

/// Caps a host frame delta so a stalled tab resumes smoothly.
#[inline]
pub fn clamp_frame_dt(dt: Duration) -> Duration {
    dt.min(Duration::from_secs_f32(FRAME_DT_MAX_SEC))
}

pub struct IsoStack {
    motion: MotionEngine,
    compositor: Compositor,
    focus: FocusReader,
    layers: [LayerAnimator; 3],
    pointer: NormalizedPointer,
}

impl IsoStack {
    /// `focus` is owned by the parent; the stack only reads it.
    pub fn new(config: StackConfig, focus: FocusReader) -> Self {
        let compositor = Compositor::new(config);
        let spring = compositor.config().spring;
        let initial = compositor.visuals(focus.get());
        Self {
            motion: MotionEngine::new(spring),
            layers: initial.map(|v| LayerAnimator::new(v, spring)),
            compositor,
            focus,
            pointer: Vec2::ZERO,
        }
    }

    /// Returns false when the sample was dropped (container not measurable).
    pub fn on_pointer_move(&mut self, sample: PointerSample, rect: Option<ContainerRect>) -> bool {
        match pointer::track(&mut self.motion, sample, rect) {
            Some(p) => {
                self.pointer = p;
                true
            }
            None => false,
        }
    }

    pub fn on_pointer_enter(&mut self) -> bool {
        self.compositor.pointer_enter()
    }

    pub fn on_pointer_leave(&mut self) -> bool {
        self.compositor.pointer_leave()
    }

    pub fn explode_state(&self) -> ExplodeState {
        self.compositor.state()
    }

    pub fn config(&self) -> &StackConfig {
        self.compositor.config()
    }

    /// Latest raw normalized pointer (unsmoothed).
    pub fn pointer(&self) -> NormalizedPointer {
        self.pointer
    }

    pub fn tilt(&self) -> TiltAngles {
        map_tilt(
            self.motion.value(Axis::X),
            self.motion.value(Axis::Y),
            &self.config().tilt,
        )
    }

    /// Derived (not animated) visuals for the current state and focus.
    pub fn target_visuals(&self) -> [LayerVisualState; 3] {
        self.compositor.visuals(self.focus.get())
    }

    /// Advance one animation frame and return the resulting snapshot.
    pub fn tick(&mut self, dt: Duration) -> StackFrame {
        let dt = clamp_frame_dt(dt);
        self.motion.tick(dt);
        let targets = self.target_visuals();
        for (animator, target) in self.layers.iter_mut().zip(targets) {
            animator.retarget(target);
            animator.tick(dt);
        }
        self.frame()
    }

    /// Snapshot of the current state without integrating.
    pub fn frame(&self) -> StackFrame {
        let explode = self.compositor.state();
        StackFrame {
            tilt: self.tilt(),
            explode,
            layers: std::array::from_fn(|i| LayerFrame {
                id: LayerId::ALL[i],
                visual: self.layers[i].current(),
            }),
            connectors_visible: self.compositor.connectors_visible(),
            badge: Badge {
                label: if explode.is_exploded() {
                    BADGE_LABEL_EXPLODED
                } else {
                    BADGE_LABEL_COLLAPSED
                },
                offset: self.pointer * BADGE_TRAVEL,
            },
            active: self.focus.get(),
        }
    }

    pub fn is_settled(&self, epsilon: f32) -> bool {
        self.motion.is_settled(epsilon) && self.layers.iter().all(|l| l.is_settled(epsilon))
    }
}
