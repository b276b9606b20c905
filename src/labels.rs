use crate::constants::{
    ACTIVE_ATTR, ACTIVE_CLASS, FOCUS_LAYER_ATTR, ICON_ATTR, LABEL_CLASS, LABEL_HOST_ID,
    LABEL_SELECTOR,
};
use crate::dom;
use isostack_core::{LabelSpec, LayerId, DEFAULT_LABELS};
use web_sys as web;

/// A hoverable control bound to one layer.
#[derive(Clone)]
pub struct LabelControl {
    pub layer: LayerId,
    pub el: web::HtmlElement,
}

fn build_label(document: &web::Document, spec: &LabelSpec) -> Option<web::Element> {
    let button = document.create_element("button").ok()?;
    _ = button.set_attribute("type", "button");
    _ = button.set_attribute(FOCUS_LAYER_ATTR, spec.layer.as_str());
    _ = button.set_attribute(ICON_ATTR, spec.icon);
    _ = button.class_list().add_1(LABEL_CLASS);

    let title = document.create_element("span").ok()?;
    _ = title.set_attribute("data-label-title", "");
    title.set_text_content(Some(spec.title));
    let description = document.create_element("span").ok()?;
    _ = description.set_attribute("data-label-description", "");
    description.set_text_content(Some(spec.description));

    _ = button.append_child(&title);
    _ = button.append_child(&description);
    Some(button)
}

/// Fill an empty `#stack-labels` host with the default labels.
fn populate_host(document: &web::Document) {
    let Some(host) = document.get_element_by_id(LABEL_HOST_ID) else {
        return;
    };
    if host.child_element_count() > 0 {
        return;
    }
    for spec in &DEFAULT_LABELS {
        if let Some(el) = build_label(document, spec) {
            _ = host.append_child(&el);
        }
    }
    log::info!("[labels] built {} default labels", DEFAULT_LABELS.len());
}

/// Every `[data-focus-layer]` control on the page.
pub fn collect(document: &web::Document) -> Vec<LabelControl> {
    populate_host(document);
    dom::query_all(document, LABEL_SELECTOR)
        .into_iter()
        .filter_map(|el| {
            let name = el.get_attribute(FOCUS_LAYER_ATTR)?;
            match name.parse::<LayerId>() {
                Ok(layer) => Some(LabelControl { layer, el }),
                Err(e) => {
                    log::warn!("[labels] skipping control: {}", e);
                    None
                }
            }
        })
        .collect()
}

pub fn set_highlight(label: &LabelControl, active: bool) {
    dom::set_flag(&label.el, ACTIVE_ATTR, active);
    _ = label.el.class_list().toggle_with_force(ACTIVE_CLASS, active);
}
