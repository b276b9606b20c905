//! 4x4 transforms for the stack group and its layers.
//!
//! Matrices follow CSS conventions (column vectors, `rotateX(a) rotateY(b)`
//! composes as `Rx * Ry`), so `to_cols_array` can be written out verbatim as
//! a `matrix3d`.

use glam::{Mat4, Vec3};

use crate::layer::LayerVisualState;
use crate::tilt::TiltAngles;

/// Rigid rotation of the whole stack.
pub fn group_transform(tilt: TiltAngles) -> Mat4 {
    Mat4::from_rotation_x(tilt.rotate_x.to_radians())
        * Mat4::from_rotation_y(tilt.rotate_y.to_radians())
}

/// Depth push and in-plane scale of a single layer, applied inside the group.
pub fn layer_transform(visual: LayerVisualState) -> Mat4 {
    Mat4::from_translation(Vec3::new(0.0, 0.0, visual.depth_offset))
        * Mat4::from_scale(Vec3::new(visual.scale, visual.scale, 1.0))
}

/// Full model transform of a layer: tilt first, then the layer's own offset.
pub fn composed_transform(tilt: TiltAngles, visual: LayerVisualState) -> Mat4 {
    group_transform(tilt) * layer_transform(visual)
}
