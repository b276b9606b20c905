use isostack_core::{ContainerRect, PointerSample};
use web_sys as web;

// ---------------- Pointer helpers ----------------
#[inline]
pub fn pointer_sample(ev: &web::MouseEvent) -> PointerSample {
    PointerSample {
        x: ev.client_x() as f32,
        y: ev.client_y() as f32,
    }
}

/// Current bounding rect, or `None` while the container is detached.
#[inline]
pub fn container_rect(el: &web::Element) -> Option<ContainerRect> {
    if !el.is_connected() {
        return None;
    }
    let rect = el.get_bounding_client_rect();
    Some(ContainerRect {
        left: rect.left() as f32,
        top: rect.top() as f32,
        width: rect.width() as f32,
        height: rect.height() as f32,
    })
}
