//! Damped spring integration.
//!
//! Each spring attracts a scalar `value` toward a `target`:
//!
//!   a = k * (target - value) - d * velocity
//!   velocity += a * dt
//!   value += velocity * dt
//!
//! Integration is semi-implicit Euler. A frame is clamped to
//! [`FRAME_DT_MAX_SEC`] and split into equal sub-steps no longer than
//! [`SPRING_MAX_STEP_SEC`] and short enough that
//! `h * (sqrt(k) + d) <= SPRING_STEP_RATE`, which keeps stiff or heavily
//! damped springs inside the stable region of the integrator.

use std::time::Duration;

use crate::constants::{
    FRAME_DT_MAX_SEC, SPRING_DAMPING, SPRING_MAX_STEP_SEC, SPRING_MAX_SUBSTEPS, SPRING_STEP_RATE,
    SPRING_STIFFNESS,
};

/// Stiffness and damping shared by every spring in the stack.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SpringParams {
    pub stiffness: f32,
    pub damping: f32,
}

impl Default for SpringParams {
    fn default() -> Self {
        Self {
            stiffness: SPRING_STIFFNESS,
            damping: SPRING_DAMPING,
        }
    }
}

impl SpringParams {
    /// Damping at which the spring stops overshooting.
    pub fn critical_damping(&self) -> f32 {
        2.0 * self.stiffness.max(0.0).sqrt()
    }

    /// `sqrt(k) + d`: how fast the spring reacts, in 1/s.
    pub fn rate(&self) -> f32 {
        self.stiffness.max(0.0).sqrt() + self.damping.max(0.0)
    }

    /// Longest sub-step the integrator may take with these params.
    pub fn max_step_sec(&self) -> f32 {
        let rate = self.rate();
        if rate > 0.0 {
            SPRING_MAX_STEP_SEC.min(SPRING_STEP_RATE / rate)
        } else {
            SPRING_MAX_STEP_SEC
        }
    }
}

/// Position and velocity of one spring.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct SpringState {
    pub value: f32,
    pub velocity: f32,
}

impl SpringState {
    pub fn at(value: f32) -> Self {
        Self {
            value,
            velocity: 0.0,
        }
    }

    /// One integration step of `dt_sec` toward `target`.
    #[inline]
    pub fn step(self, target: f32, params: SpringParams, dt_sec: f32) -> Self {
        let accel = params.stiffness * (target - self.value) - params.damping * self.velocity;
        let velocity = self.velocity + accel * dt_sec;
        Self {
            value: self.value + velocity * dt_sec,
            velocity,
        }
    }

    /// Advance by a whole frame, subdividing long frames.
    ///
    /// `dt_sec` is clamped to [`FRAME_DT_MAX_SEC`] and the sub-step count is
    /// capped at [`SPRING_MAX_SUBSTEPS`].
    pub fn advance(self, target: f32, params: SpringParams, dt_sec: f32) -> Self {
        if !dt_sec.is_finite() || dt_sec <= 0.0 {
            return self;
        }
        let dt_sec = dt_sec.min(FRAME_DT_MAX_SEC);
        let steps = (dt_sec / params.max_step_sec())
            .ceil()
            .clamp(1.0, SPRING_MAX_SUBSTEPS as f32) as u32;
        let h = dt_sec / steps as f32;
        (0..steps).fold(self, |s, _| s.step(target, params, h))
    }
}

/// A single spring: integration state plus the target it is chasing.
///
/// Consumers only ever push targets; `value` changes through [`Spring::tick`].
#[derive(Clone, Debug)]
pub struct Spring {
    state: SpringState,
    target: f32,
    params: SpringParams,
}

impl Spring {
    pub fn new(initial: f32, params: SpringParams) -> Self {
        Self {
            state: SpringState::at(initial),
            target: initial,
            params,
        }
    }

    #[inline]
    pub fn set_target(&mut self, target: f32) {
        self.target = target;
    }

    #[inline]
    pub fn target(&self) -> f32 {
        self.target
    }

    #[inline]
    pub fn value(&self) -> f32 {
        self.state.value
    }

    #[inline]
    pub fn state(&self) -> SpringState {
        self.state
    }

    pub fn tick(&mut self, dt: Duration) {
        self.state = self.state.advance(self.target, self.params, dt.as_secs_f32());
    }

    /// True once both the displacement and the velocity are under `epsilon`.
    pub fn is_settled(&self, epsilon: f32) -> bool {
        (self.target - self.state.value).abs() < epsilon && self.state.velocity.abs() < epsilon
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
}

/// Two independent springs smoothing the normalized pointer position.
#[derive(Clone, Debug)]
pub struct MotionEngine {
    x: Spring,
    y: Spring,
}

impl MotionEngine {
    pub fn new(params: SpringParams) -> Self {
        Self {
            x: Spring::new(0.0, params),
            y: Spring::new(0.0, params),
        }
    }

    pub fn set_target(&mut self, axis: Axis, value: f32) {
        self.spring_mut(axis).set_target(value);
    }

    pub fn value(&self, axis: Axis) -> f32 {
        self.spring(axis).value()
    }

    pub fn target(&self, axis: Axis) -> f32 {
        self.spring(axis).target()
    }

    pub fn state(&self, axis: Axis) -> SpringState {
        self.spring(axis).state()
    }

    /// Integrate both axes; runs every frame whether or not a new target arrived.
    pub fn tick(&mut self, dt: Duration) {
        self.x.tick(dt);
        self.y.tick(dt);
    }

    pub fn is_settled(&self, epsilon: f32) -> bool {
        self.x.is_settled(epsilon) && self.y.is_settled(epsilon)
    }

    fn spring(&self, axis: Axis) -> &Spring {
        match axis {
            Axis::X => &self.x,
            Axis::Y => &self.y,
        }
    }

    fn spring_mut(&mut self, axis: Axis) -> &mut Spring {
        match axis {
            Axis::X => &mut self.x,
            Axis::Y => &mut self.y,
        }
    }
}
