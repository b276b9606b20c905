use glam::{Mat4, Vec2};
use isostack_core::constants::CONNECTOR_FADE_MS;
use isostack_core::transform::{group_transform, layer_transform};
use isostack_core::{Connector, LayerVisualState, TiltAngles};

// CSS serialization of stack transforms. Kept free of DOM types so it can be
// exercised on the host.

/// Compact number formatting: four decimals, trailing zeros dropped, no `-0`.
pub fn num(v: f32) -> String {
    if !v.is_finite() {
        return "0".to_string();
    }
    let s = format!("{:.4}", v);
    let s = s.trim_end_matches('0').trim_end_matches('.');
    match s {
        "-0" | "" => "0".to_string(),
        _ => s.to_string(),
    }
}

#[inline]
pub fn px(v: f32) -> String {
    format!("{}px", num(v))
}

/// `matrix3d(...)` in column-major order, which is what CSS expects.
pub fn matrix3d(m: &Mat4) -> String {
    let cols = m.to_cols_array();
    let parts: Vec<String> = cols.iter().map(|v| num(*v)).collect();
    format!("matrix3d({})", parts.join(", "))
}

pub fn group_transform_css(tilt: TiltAngles) -> String {
    matrix3d(&group_transform(tilt))
}

pub fn layer_transform_css(visual: LayerVisualState) -> String {
    matrix3d(&layer_transform(visual))
}

pub fn opacity_css(opacity: f32) -> String {
    num(opacity.clamp(0.0, 1.0))
}

pub fn badge_transform_css(offset: Vec2) -> String {
    format!("translate({}, {})", px(offset.x), px(offset.y))
}

/// Static style properties for one connector line. Connectors start hidden
/// and fade through [`connector_opacity_css`].
pub fn connector_css(c: &Connector) -> [(&'static str, String); 6] {
    [
        ("left", px(c.left)),
        ("top", px(c.top)),
        ("height", px(c.length)),
        (
            "transform",
            format!("translateZ({}) translateY({})", px(c.offset_z), px(c.offset_y)),
        ),
        ("opacity", connector_opacity_css(c, false)),
        ("transition", format!("opacity {}ms ease-out", CONNECTOR_FADE_MS)),
    ]
}

pub fn connector_opacity_css(c: &Connector, visible: bool) -> String {
    opacity_css(if visible { c.opacity } else { 0.0 })
}
