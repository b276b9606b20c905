// Tilt mapping bounds, monotonicity and custom ranges.

use isostack_core::{map_tilt, AngleRange, TiltRanges};

fn grid() -> impl Iterator<Item = f32> {
    (0..=40).map(|i| -0.5 + i as f32 / 40.0)
}

#[test]
fn default_output_stays_within_ranges() {
    let ranges = TiltRanges::default();
    for nx in grid() {
        for ny in grid() {
            let t = map_tilt(nx, ny, &ranges);
            assert!((15.0..=25.0).contains(&t.rotate_x), "rotate_x {}", t.rotate_x);
            assert!((-25.0..=-15.0).contains(&t.rotate_y), "rotate_y {}", t.rotate_y);
        }
    }
}

#[test]
fn endpoints_and_midpoint() {
    let ranges = TiltRanges::default();
    let top_left = map_tilt(-0.5, -0.5, &ranges);
    assert_eq!(top_left.rotate_x, 25.0);
    assert_eq!(top_left.rotate_y, -25.0);
    let bottom_right = map_tilt(0.5, 0.5, &ranges);
    assert_eq!(bottom_right.rotate_x, 15.0);
    assert_eq!(bottom_right.rotate_y, -15.0);
    let centre = map_tilt(0.0, 0.0, &ranges);
    assert!((centre.rotate_x - 20.0).abs() < 1e-5);
    assert!((centre.rotate_y + 20.0).abs() < 1e-5);
}

#[test]
fn mapping_is_monotonic_per_axis() {
    let ranges = TiltRanges::default();
    let xs: Vec<f32> = grid().map(|n| map_tilt(n, 0.0, &ranges).rotate_y).collect();
    assert!(xs.windows(2).all(|w| w[1] >= w[0]), "rotate_y should rise with x");
    let ys: Vec<f32> = grid().map(|n| map_tilt(0.0, n, &ranges).rotate_x).collect();
    assert!(ys.windows(2).all(|w| w[1] <= w[0]), "rotate_x should fall with y");
}

#[test]
fn axes_do_not_cross_talk() {
    let ranges = TiltRanges::default();
    let a = map_tilt(-0.3, 0.1, &ranges);
    let b = map_tilt(0.4, 0.1, &ranges);
    assert_eq!(a.rotate_x, b.rotate_x);
}

#[test]
fn inputs_outside_the_interval_saturate() {
    let ranges = TiltRanges::default();
    let t = map_tilt(3.0, -3.0, &ranges);
    assert_eq!(t.rotate_y, -15.0);
    assert_eq!(t.rotate_x, 25.0);
}

#[test]
fn custom_ranges_are_respected() {
    let ranges = TiltRanges {
        rotate_x: AngleRange::new(-10.0, 10.0),
        rotate_y: AngleRange::new(0.0, 0.0),
    };
    let t = map_tilt(0.25, 0.25, &ranges);
    assert!((t.rotate_x - 5.0).abs() < 1e-5);
    assert_eq!(t.rotate_y, 0.0);
    assert_eq!(ranges.rotate_x.min(), -10.0);
    assert_eq!(ranges.rotate_x.max(), 10.0);
}
