//! DOM Builder
//!
//! Fluent construction of plain `web_sys` elements.
//! Every configuration method takes `&self` and hands the same handle back,
//! so a chain ends with `append_to` or `build` without moving the builder.

use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, HtmlElement, HtmlInputElement, HtmlTextAreaElement, Node};

/// CSS `visibility` values accepted by [`ElementBuilder::visible`]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Visibility {
    Visible,
    Hidden,
}

impl Visibility {
    pub fn as_str(self) -> &'static str {
        match self {
            Visibility::Visible => "visible",
            Visibility::Hidden => "hidden",
        }
    }
}

/// Element factory bound to one document
#[derive(Clone, Debug)]
pub struct Builder {
    document: Document,
}

impl Builder {
    pub fn new(document: Document) -> Self {
        Self { document }
    }

    /// Factory for the current window's document, if there is one
    pub fn from_window() -> Option<Self> {
        web_sys::window()
            .and_then(|win| win.document())
            .map(Self::new)
    }

    /// Create a detached element with the given tag name
    pub fn create(&self, tag: &str) -> Result<ElementBuilder, JsValue> {
        let element = self.document.create_element(tag)?;
        Ok(ElementBuilder { element })
    }
}

/// Chainable handle around a single element
#[derive(Clone, Debug)]
pub struct ElementBuilder {
    element: Element,
}

impl ElementBuilder {
    pub fn text(&self, text: &str) -> &Self {
        self.element.set_text_content(Some(text));
        self
    }

    /// Set the `for` attribute (label association)
    pub fn label_for(&self, target_id: &str) -> &Self {
        self.attr("for", target_id)
    }

    pub fn aria_label(&self, label: &str) -> &Self {
        self.attr("aria-label", label)
    }

    pub fn visible(&self, visibility: Visibility) -> &Self {
        if let Some(html) = self.element.dyn_ref::<HtmlElement>() {
            let _ = html.style().set_property("visibility", visibility.as_str());
        }
        self
    }

    pub fn name(&self, name: &str) -> &Self {
        self.attr("name", name)
    }

    /// Current value of an input or textarea; other elements report their `value` attribute
    pub fn value(&self) -> String {
        if let Some(input) = self.element.dyn_ref::<HtmlInputElement>() {
            input.value()
        } else if let Some(area) = self.element.dyn_ref::<HtmlTextAreaElement>() {
            area.value()
        } else {
            self.element.get_attribute("value").unwrap_or_default()
        }
    }

    pub fn set_value(&self, value: &str) -> &Self {
        if let Some(input) = self.element.dyn_ref::<HtmlInputElement>() {
            input.set_value(value);
        } else if let Some(area) = self.element.dyn_ref::<HtmlTextAreaElement>() {
            area.set_value(value);
        } else {
            let _ = self.element.set_attribute("value", value);
        }
        self
    }

    pub fn append_to(&self, parent: &Node) -> &Self {
        let _ = parent.append_child(&self.element);
        self
    }

    pub fn placeholder(&self, placeholder: &str) -> &Self {
        self.attr("placeholder", placeholder)
    }

    pub fn input_type(&self, kind: &str) -> &Self {
        self.attr("type", kind)
    }

    /// Add class tokens from one or more space-delimited strings
    ///
    /// `classes(["px-6 py-4", "", "whitespace-nowrap"])` adds three tokens.
    pub fn classes<I, S>(&self, groups: I) -> &Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let list = self.element.class_list();
        for token in class_tokens(groups) {
            let _ = list.add_1(&token);
        }
        self
    }

    pub fn id(&self, id: &str) -> &Self {
        self.element.set_id(id);
        self
    }

    /// Set a `data-*` attribute
    pub fn data(&self, key: &str, value: &str) -> &Self {
        self.attr(&format!("data-{}", key), value)
    }

    /// Register a click handler.
    ///
    /// The closure is leaked and lives as long as the page. Elements that are
    /// rebuilt on every render should rely on a delegated listener instead.
    pub fn on_click<F>(&self, handler: F) -> &Self
    where
        F: FnMut(web_sys::MouseEvent) + 'static,
    {
        let cb = Closure::<dyn FnMut(web_sys::MouseEvent)>::new(handler);
        let _ = self
            .element
            .add_event_listener_with_callback("click", cb.as_ref().unchecked_ref());
        cb.forget();
        self
    }

    /// Hand out the underlying element
    pub fn build(&self) -> Element {
        self.element.clone()
    }

    fn attr(&self, name: &str, value: &str) -> &Self {
        let _ = self.element.set_attribute(name, value);
        self
    }
}

/// Split class groups on whitespace, dropping blank tokens
pub fn class_tokens<I, S>(groups: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    groups
        .into_iter()
        .flat_map(|group| {
            group
                .as_ref()
                .split_whitespace()
                .map(str::to_string)
                .collect::<Vec<_>>()
        })
        .collect()
}
