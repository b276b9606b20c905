use crate::constants::{BADGE_SELECTOR, CONNECTOR_SELECTOR, EXPLODED_ATTR, GROUP_SELECTOR, LAYER_ATTR};
use crate::dom;
use crate::labels::{self, LabelControl};
use crate::style;
use isostack_core::compositor::connectors;
use isostack_core::constants::{CONTAINER_HEIGHT, PERSPECTIVE, STACK_HEIGHT, STACK_WIDTH};
use isostack_core::{ExplodeState, FocusReader, LayerId, StackFrame};
use web_sys as web;

/// Element handles for one mounted stack plus the bits of last-frame state
/// needed to avoid rewriting unchanged attributes.
pub struct StackView {
    container: web::HtmlElement,
    group: web::HtmlElement,
    layers: [Option<web::HtmlElement>; 3],
    connectors: Vec<web::HtmlElement>,
    badge: Option<web::HtmlElement>,
    labels: Vec<LabelControl>,
    last_explode: Option<ExplodeState>,
    last_focus_generation: Option<u64>,
}

impl StackView {
    pub fn locate(container: web::HtmlElement, labels: Vec<LabelControl>) -> anyhow::Result<Self> {
        let group = dom::query(&container, GROUP_SELECTOR)
            .ok_or_else(|| anyhow::anyhow!("missing {} inside stack container", GROUP_SELECTOR))?;
        let layers = LayerId::ALL.map(|layer| {
            let selector = format!("[{}=\"{}\"]", LAYER_ATTR, layer);
            let el = dom::query(&group, &selector);
            if el.is_none() {
                log::warn!("[view] no element for layer {}", layer);
            }
            el
        });
        let connectors = dom::query_all_in(&container, CONNECTOR_SELECTOR);
        let badge = dom::query(&container, BADGE_SELECTOR);
        Ok(Self {
            container,
            group,
            layers,
            connectors,
            badge,
            labels,
            last_explode: None,
            last_focus_generation: None,
        })
    }

    /// Layout that never changes while mounted.
    pub fn prepare(&self) {
        dom::set_style(&self.container, "height", &style::px(CONTAINER_HEIGHT));
        dom::set_style(&self.container, "perspective", &style::px(PERSPECTIVE));
        dom::set_style(&self.group, "width", &style::px(STACK_WIDTH));
        dom::set_style(&self.group, "height", &style::px(STACK_HEIGHT));
        dom::set_style(&self.group, "transform-style", "preserve-3d");
        for el in self.layers.iter().flatten() {
            dom::set_style(el, "position", "absolute");
            dom::set_style(el, "inset", "0");
        }
        for (el, geometry) in self.connectors.iter().zip(connectors()) {
            dom::set_style(el, "position", "absolute");
            for (property, value) in style::connector_css(&geometry) {
                dom::set_style(el, property, &value);
            }
        }
    }

    pub fn apply(&mut self, frame: &StackFrame, focus: &FocusReader) {
        dom::set_style(&self.group, "transform", &style::group_transform_css(frame.tilt));
        for (el, layer) in self.layers.iter().zip(&frame.layers) {
            if let Some(el) = el {
                dom::set_style(el, "transform", &style::layer_transform_css(layer.visual));
                dom::set_style(el, "opacity", &style::opacity_css(layer.visual.opacity));
            }
        }

        if let Some(badge) = &self.badge {
            dom::set_style(badge, "transform", &style::badge_transform_css(frame.badge.offset));
        }

        if self.last_explode != Some(frame.explode) {
            self.last_explode = Some(frame.explode);
            self.apply_explode(frame);
        }

        let generation = focus.generation();
        if self.last_focus_generation != Some(generation) {
            self.last_focus_generation = Some(generation);
            for label in &self.labels {
                labels::set_highlight(label, focus.is_active(label.layer));
            }
        }
    }

    fn apply_explode(&self, frame: &StackFrame) {
        dom::set_flag(&self.container, EXPLODED_ATTR, frame.connectors_visible);
        for (el, geometry) in self.connectors.iter().zip(connectors()) {
            let opacity = style::connector_opacity_css(&geometry, frame.connectors_visible);
            dom::set_style(el, "opacity", &opacity);
        }
        if let Some(badge) = &self.badge {
            badge.set_text_content(Some(frame.badge.label));
        }
    }
}
