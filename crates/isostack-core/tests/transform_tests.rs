// Group tilt and per-layer offsets compose independently.

use glam::{Mat4, Vec3, Vec4};
use isostack_core::transform::{composed_transform, group_transform, layer_transform};
use isostack_core::{LayerVisualState, TiltAngles};

const FLAT: LayerVisualState = LayerVisualState {
    depth_offset: 0.0,
    opacity: 1.0,
    scale: 1.0,
};

#[test]
fn zero_tilt_is_identity() {
    let m = group_transform(TiltAngles::default());
    assert!(m.abs_diff_eq(Mat4::IDENTITY, 1e-6));
}

#[test]
fn layer_transform_pushes_along_z_and_scales_in_plane() {
    let v = LayerVisualState {
        depth_offset: -140.0,
        scale: 1.05,
        ..FLAT
    };
    let p = layer_transform(v) * Vec4::new(100.0, 50.0, 0.0, 1.0);
    assert!((p.x - 105.0).abs() < 1e-4);
    assert!((p.y - 52.5).abs() < 1e-4);
    assert!((p.z + 140.0).abs() < 1e-4);
}

#[test]
fn tilt_is_a_rigid_rotation_of_the_whole_stack() {
    let tilt = TiltAngles {
        rotate_x: 20.0,
        rotate_y: -20.0,
    };
    let g = group_transform(tilt);
    // rotations preserve length and have unit determinant
    assert!((g.determinant() - 1.0).abs() < 1e-5);
    let v = g.transform_vector3(Vec3::new(3.0, 4.0, 0.0));
    assert!((v.length() - 5.0).abs() < 1e-4);

    // distance between two layers is unchanged by tilt
    let a = LayerVisualState {
        depth_offset: -140.0,
        ..FLAT
    };
    let b = LayerVisualState {
        depth_offset: 140.0,
        ..FLAT
    };
    let pa = composed_transform(tilt, a).transform_point3(Vec3::ZERO);
    let pb = composed_transform(tilt, b).transform_point3(Vec3::ZERO);
    assert!((pa.distance(pb) - 280.0).abs() < 1e-3);
}

#[test]
fn rotation_order_matches_css() {
    // CSS `rotateX(a) rotateY(b)` multiplies left to right
    let tilt = TiltAngles {
        rotate_x: 25.0,
        rotate_y: -15.0,
    };
    let expected =
        Mat4::from_rotation_x(25f32.to_radians()) * Mat4::from_rotation_y(-15f32.to_radians());
    assert!(group_transform(tilt).abs_diff_eq(expected, 1e-6));
}
