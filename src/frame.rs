use crate::view::StackView;
use instant::Instant;
use isostack_core::{FocusReader, IsoStack};
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct FrameContext {
    pub stack: Rc<RefCell<IsoStack>>,
    pub view: StackView,
    pub focus: FocusReader,
    pub last_instant: Instant,
}

impl FrameContext {
    pub fn new(stack: Rc<RefCell<IsoStack>>, view: StackView, focus: FocusReader) -> Self {
        Self {
            stack,
            view,
            focus,
            last_instant: Instant::now(),
        }
    }

    pub fn frame(&mut self) {
        let now = Instant::now();
        let dt = now - self.last_instant;
        self.last_instant = now;

        let snapshot = self.stack.borrow_mut().tick(dt);
        self.view.apply(&snapshot, &self.focus);
    }
}

type Tick = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

/// Live `requestAnimationFrame` subscription. Dropping it cancels the pending
/// frame and releases the self-referencing tick closure.
pub struct FrameLoop {
    tick: Tick,
    pending: Rc<Cell<Option<i32>>>,
}

impl Drop for FrameLoop {
    fn drop(&mut self) {
        if let (Some(id), Some(w)) = (self.pending.take(), web::window()) {
            _ = w.cancel_animation_frame(id);
        }
        self.tick.borrow_mut().take();
        log::debug!("[frame] loop stopped");
    }
}

fn request(tick: &Tick, pending: &Cell<Option<i32>>) -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let slot = tick.borrow();
    let Some(cb) = slot.as_ref() else {
        // loop was stopped
        return Ok(());
    };
    let id = window
        .request_animation_frame(cb.as_ref().unchecked_ref())
        .map_err(|e| anyhow::anyhow!("requestAnimationFrame: {:?}", e))?;
    pending.set(Some(id));
    Ok(())
}

pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext>>) -> anyhow::Result<FrameLoop> {
    let tick: Tick = Rc::new(RefCell::new(None));
    let pending = Rc::new(Cell::new(None));

    let tick_clone = tick.clone();
    let pending_clone = pending.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        pending_clone.set(None);
        frame_ctx.borrow_mut().frame();
        if let Err(e) = request(&tick_clone, &pending_clone) {
            log::error!("frame loop halted: {:?}", e);
        }
    }) as Box<dyn FnMut()>));

    // Build the guard before the first request so an error still tears down.
    let frame_loop = FrameLoop { tick, pending };
    request(&frame_loop.tick, &frame_loop.pending)?;
    Ok(frame_loop)
}
