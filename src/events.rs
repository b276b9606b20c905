use crate::input;
use crate::labels::LabelControl;
use isostack_core::{FocusBridge, IsoStack};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

type Handler = Closure<dyn FnMut(web::Event)>;

/// Event listeners owned by a mounted stack. Dropping the guard removes every
/// listener, so no closure outlives the component.
#[derive(Default)]
pub struct Listeners {
    entries: Vec<(web::EventTarget, &'static str, Handler)>,
}

impl Listeners {
    pub fn listen(
        &mut self,
        target: &web::EventTarget,
        event: &'static str,
        handler: impl FnMut(web::Event) + 'static,
    ) -> anyhow::Result<()> {
        let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(web::Event)>);
        target
            .add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())
            .map_err(|e| anyhow::anyhow!("add {} listener: {:?}", event, e))?;
        self.entries.push((target.clone(), event, closure));
        Ok(())
    }
}

impl Drop for Listeners {
    fn drop(&mut self) {
        for (target, event, closure) in self.entries.drain(..) {
            _ = target.remove_event_listener_with_callback(event, closure.as_ref().unchecked_ref());
        }
    }
}

/// Pointer move/enter/leave over the stack container.
pub fn wire_container(
    listeners: &mut Listeners,
    container: &web::HtmlElement,
    stack: Rc<RefCell<IsoStack>>,
) -> anyhow::Result<()> {
    let move_stack = stack.clone();
    let rect_source = container.clone();
    listeners.listen(container, "pointermove", move |ev: web::Event| {
        let Some(ev) = ev.dyn_ref::<web::MouseEvent>() else {
            return;
        };
        // Read the rect per event: the container may scroll or resize.
        let rect = input::container_rect(&rect_source);
        move_stack
            .borrow_mut()
            .on_pointer_move(input::pointer_sample(ev), rect);
    })?;

    let enter_stack = stack.clone();
    listeners.listen(container, "pointerenter", move |_ev: web::Event| {
        enter_stack.borrow_mut().on_pointer_enter();
    })?;

    listeners.listen(container, "pointerleave", move |_ev: web::Event| {
        stack.borrow_mut().on_pointer_leave();
    })?;
    Ok(())
}

/// Hover on each label drives the focus bridge.
pub fn wire_labels(
    listeners: &mut Listeners,
    labels: &[LabelControl],
    focus: &FocusBridge,
) -> anyhow::Result<()> {
    for label in labels {
        let layer = label.layer;
        let enter = focus.clone();
        listeners.listen(&label.el, "pointerenter", move |_ev: web::Event| {
            enter.on_hover_enter(layer);
        })?;
        let leave = focus.clone();
        listeners.listen(&label.el, "pointerleave", move |_ev: web::Event| {
            leave.on_hover_leave(layer);
        })?;
    }
    Ok(())
}
