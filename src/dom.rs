use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

/// First element under `root` matching `selector`, as an `HtmlElement`.
pub fn query(root: &web::Element, selector: &str) -> Option<web::HtmlElement> {
    root.query_selector(selector)
        .ok()
        .flatten()
        .and_then(|el| el.dyn_into::<web::HtmlElement>().ok())
}

pub fn query_all(document: &web::Document, selector: &str) -> Vec<web::HtmlElement> {
    document
        .query_selector_all(selector)
        .map(html_elements)
        .unwrap_or_default()
}

pub fn query_all_in(root: &web::Element, selector: &str) -> Vec<web::HtmlElement> {
    root.query_selector_all(selector)
        .map(html_elements)
        .unwrap_or_default()
}

fn html_elements(list: web::NodeList) -> Vec<web::HtmlElement> {
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|n| n.dyn_into::<web::HtmlElement>().ok())
        .collect()
}

#[inline]
pub fn set_style(el: &web::HtmlElement, property: &str, value: &str) {
    _ = el.style().set_property(property, value);
}

pub fn set_flag(el: &web::Element, attr: &str, on: bool) {
    _ = el.set_attribute(attr, if on { "true" } else { "false" });
}

/// `(name, value)` of every attribute on `el` whose name starts with `prefix`.
pub fn attributes_with_prefix(el: &web::Element, prefix: &str) -> Vec<(String, String)> {
    let names: js_sys::Array = el.get_attribute_names();
    names
        .iter()
        .filter_map(|name| name.as_string())
        .filter(|name| name.starts_with(prefix))
        .filter_map(|name| {
            let value = el.get_attribute(&name)?;
            Some((name, value))
        })
        .collect()
}
