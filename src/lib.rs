#![cfg(target_arch = "wasm32")]
use crate::constants::{CONFIG_ATTR_PREFIX, CONTAINER_ID};
use isostack_core::{FocusBridge, IsoStack, LayerId, StackConfig};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys as web;

mod config;
mod constants;
mod dom;
mod events;
mod frame;
mod input;
mod labels;
mod style;
mod view;

/// Resources of the mounted stack. Field order is drop order: the frame loop
/// stops before the listeners go away.
struct Mounted {
    _frame_loop: frame::FrameLoop,
    _listeners: events::Listeners,
    focus: FocusBridge,
}

thread_local! {
    static MOUNTED: RefCell<Option<Mounted>> = const { RefCell::new(None) };
}

fn read_config(container: &web::Element) -> StackConfig {
    let attrs = dom::attributes_with_prefix(container, CONFIG_ATTR_PREFIX);
    let pairs = attrs.iter().filter_map(|(name, value)| {
        Some((config::config_key(name, CONFIG_ATTR_PREFIX)?, value.as_str()))
    });
    let (cfg, errors) = config::from_overrides(pairs);
    for e in &errors {
        log::warn!("[config] {}", e);
    }
    cfg
}

fn mount_stack(container_id: &str) -> anyhow::Result<()> {
    // Remounting replaces the previous instance.
    MOUNTED.with(|m| m.borrow_mut().take());

    let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;
    let container: web::HtmlElement = document
        .get_element_by_id(container_id)
        .ok_or_else(|| anyhow::anyhow!("missing #{}", container_id))?
        .dyn_into::<web::HtmlElement>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;

    let config = read_config(&container);
    let focus = FocusBridge::new();
    let stack = Rc::new(RefCell::new(IsoStack::new(config, focus.reader())));

    let labels = labels::collect(&document);
    let view = view::StackView::locate(container.clone(), labels.clone())?;
    view.prepare();

    // Any `?` below drops what was acquired so far, unsubscribing it.
    let mut listeners = events::Listeners::default();
    events::wire_container(&mut listeners, &container, stack.clone())?;
    events::wire_labels(&mut listeners, &labels, &focus)?;

    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext::new(
        stack,
        view,
        focus.reader(),
    )));
    let frame_loop = frame::start_loop(frame_ctx)?;

    log::info!("[mount] #{} with {} labels", container_id, labels.len());
    MOUNTED.with(|m| {
        *m.borrow_mut() = Some(Mounted {
            _frame_loop: frame_loop,
            _listeners: listeners,
            focus,
        })
    });
    Ok(())
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("isostack-web starting");

    let has_container = dom::window_document()
        .and_then(|d| d.get_element_by_id(CONTAINER_ID))
        .is_some();
    if has_container {
        if let Err(e) = mount_stack(CONTAINER_ID) {
            log::error!("mount error: {:?}", e);
        }
    }
    Ok(())
}

/// Mount onto the element with id `container_id`, replacing any mounted stack.
#[wasm_bindgen]
pub fn mount(container_id: &str) -> Result<(), JsValue> {
    mount_stack(container_id).map_err(|e| JsValue::from_str(&format!("{:#}", e)))
}

/// Tear down the mounted stack: cancels the frame loop and removes listeners.
#[wasm_bindgen]
pub fn unmount() {
    if MOUNTED.with(|m| m.borrow_mut().take()).is_some() {
        log::info!("[mount] unmounted");
    }
}

/// Focus a layer from host code (`"code"`, `"blueprint"`, `"ui"`, or null).
#[wasm_bindgen]
pub fn set_active_layer(layer: Option<String>) -> Result<(), JsValue> {
    let layer = layer
        .map(|name| name.parse::<LayerId>())
        .transpose()
        .map_err(|e| JsValue::from_str(&e.to_string()))?;
    MOUNTED.with(|m| {
        if let Some(mounted) = m.borrow().as_ref() {
            mounted.focus.set_active(layer);
        }
    });
    Ok(())
}
