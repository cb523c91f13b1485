//! Web platform glue: materializes [`VNode`] trees into real DOM nodes and
//! implements the [`Platform`] surface on top of `web_sys`.

use std::rc::Rc;

use js_sys::Function;
use wasm_bindgen::{prelude::Closure, JsCast, JsValue};
use web_sys::{
    console, Document, Element as WsElement, Event, HtmlElement, HtmlFormElement,
    HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement, Node as WsNode, Window,
};

use crate::{
    platform::{Platform, TimerHandle},
    state::Theme,
    view::{DomEvent, Element, EventDetail, Listener, VNode},
};

/// Build a [`web_sys::Node`] subtree from a declarative description. Requires
/// a reference to [`Document`] in order to call the relevant node creation
/// methods on it.
pub fn create_node(document: &Document, vnode: &VNode) -> Result<WsNode, JsValue> {
    match vnode {
        VNode::Text(content) => Ok(document.create_text_node(content).into()),
        VNode::Element(element) => create_element(document, element),
    }
}

fn create_element(document: &Document, element: &Element) -> Result<WsNode, JsValue> {
    let node = document.create_element(element.tag())?;

    for (name, value) in element.attributes() {
        node.set_attribute(name, value)?;
    }

    // Styles are applied property-by-property on the inline style map rather
    // than being flattened into a `style` attribute.
    if let Some(html) = node.dyn_ref::<HtmlElement>() {
        let style = html.style();
        for (property, value) in element.styles() {
            style.set_property(property, value)?;
        }
    }

    for (event, listener) in element.listeners() {
        node.add_event_listener_with_callback(event.name(), &event_closure(event, listener))?;
    }

    for child in element.child_nodes() {
        node.append_child(&create_node(document, child)?)?;
    }

    Ok(node.into())
}

/// Wrap a listener in a JS closure that extracts the interesting parts of the
/// raw event before calling back into view code.
fn event_closure(event: DomEvent, listener: &Listener) -> Function {
    let listener = Rc::clone(listener);

    Closure::<dyn Fn(Event)>::new(move |raw: Event| {
        let detail = match event {
            DomEvent::Click => EventDetail::empty(),
            DomEvent::Change => EventDetail {
                value: target_value(&raw),
                ..EventDetail::empty()
            },
            DomEvent::Submit => {
                raw.prevent_default();
                form_detail(&raw)
            }
        };

        listener(&detail);
    })
    .into_js_value()
    .unchecked_into()
}

/// Current value of the input, select, or textarea that fired the event.
fn target_value(event: &Event) -> Option<String> {
    let target = event.target()?;

    if let Some(input) = target.dyn_ref::<HtmlInputElement>() {
        Some(input.value())
    } else if let Some(select) = target.dyn_ref::<HtmlSelectElement>() {
        Some(select.value())
    } else if let Some(textarea) = target.dyn_ref::<HtmlTextAreaElement>() {
        Some(textarea.value())
    } else {
        None
    }
}

/// Collect the named field values of the submitted form.
fn form_detail(event: &Event) -> EventDetail {
    let mut detail = EventDetail::empty();

    let Some(form) = event
        .target()
        .and_then(|target| target.dyn_into::<HtmlFormElement>().ok())
    else {
        return detail;
    };

    let elements = form.elements();
    for index in 0..elements.length() {
        let Some(element) = elements.item(index) else {
            continue;
        };

        if let Some(input) = element.dyn_ref::<HtmlInputElement>() {
            if !input.name().is_empty() {
                detail.fields.insert(input.name(), input.value());
            }
        } else if let Some(select) = element.dyn_ref::<HtmlSelectElement>() {
            if !select.name().is_empty() {
                detail.fields.insert(select.name(), select.value());
            }
        } else if let Some(textarea) = element.dyn_ref::<HtmlTextAreaElement>() {
            if !textarea.name().is_empty() {
                detail.fields.insert(textarea.name(), textarea.value());
            }
        }
    }

    detail
}

/// [`Platform`] implementation over the browser. Owns the attachment point
/// that every render replaces wholesale.
pub struct WebPlatform {
    window: Window,
    document: Document,
    root: WsElement,
}

impl WebPlatform {
    /// Look up the window, document, and `#app` attachment point.
    pub fn new() -> Result<Self, JsValue> {
        let window = web_sys::window().ok_or_else(|| JsValue::from_str("no global `window`"))?;
        let document = window
            .document()
            .ok_or_else(|| JsValue::from_str("window has no document"))?;
        let root = document
            .get_element_by_id("app")
            .ok_or_else(|| JsValue::from_str("missing #app mount point"))?;

        Ok(Self {
            window,
            document,
            root,
        })
    }
}

impl Platform for WebPlatform {
    fn mount(&self, tree: &VNode) {
        // Drop the previous subtree in its entirety before mounting.
        self.root.set_text_content(None);

        match create_node(&self.document, tree) {
            Ok(node) => {
                self.root
                    .append_child(&node)
                    .expect("to mount the rendered tree");
            }
            Err(error) => console::error_2(&"render failed".into(), &error),
        }
    }

    fn set_theme(&self, theme: Theme) {
        if let Some(element) = self.document.document_element() {
            element
                .set_attribute("data-theme", theme.as_str())
                .expect("to set theme attribute");
        }
    }

    fn scroll_to_origin(&self) {
        self.window.scroll_to_with_x_and_y(0.0, 0.0);
    }

    fn schedule(&self, delay_ms: u32, callback: Box<dyn FnOnce()>) -> TimerHandle {
        let closure = Closure::once(move || callback());

        let id = self
            .window
            .set_timeout_with_callback_and_timeout_and_arguments_0(
                closure.as_ref().unchecked_ref(),
                delay_ms as i32,
            )
            .expect("to schedule timeout");

        // The canceller owns the closure, keeping the callback alive for as
        // long as the handle exists.
        let window = self.window.clone();
        TimerHandle::new(move || {
            window.clear_timeout_with_handle(id);
            drop(closure);
        })
    }
}
