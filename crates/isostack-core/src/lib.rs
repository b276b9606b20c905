//! Platform-independent core of the isostack layer compositor.
//!
//! Nothing in this crate touches the DOM; the web front-end feeds it pointer
//! samples and frame deltas and renders the resulting [`StackFrame`]s.

pub mod animator;
pub mod compositor;
pub mod config;
pub mod constants;
pub mod focus;
pub mod layer;
pub mod pointer;
pub mod spring;
pub mod stack;
pub mod tilt;
pub mod transform;

pub use compositor::{derive_visual, Compositor, Connector, ExplodeState};
pub use config::{ConfigError, StackConfig};
pub use focus::{FocusBridge, FocusReader};
pub use layer::{ActiveLayer, LabelSpec, LayerId, LayerVisualState, UnknownLayer, DEFAULT_LABELS};
pub use pointer::{ContainerRect, NormalizedPointer, PointerSample};
pub use spring::{Axis, MotionEngine, Spring, SpringParams, SpringState};
pub use stack::{Badge, IsoStack, LayerFrame, StackFrame};
pub use tilt::{map_tilt, AngleRange, TiltAngles, TiltRanges};
