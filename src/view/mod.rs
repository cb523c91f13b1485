use std::{collections::BTreeMap, fmt, rc::Rc};

/// Event kinds a view can bind a listener to. These are behavioural bindings,
/// registered as listeners on the rendered node rather than written out as
/// attributes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DomEvent {
    Click,
    Change,
    Submit,
}

impl DomEvent {
    /// Name of the corresponding DOM event.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Click => "click",
            Self::Change => "change",
            Self::Submit => "submit",
        }
    }
}

/// Payload handed to a listener. The platform extracts whatever the listener
/// could want from the raw event before invoking it, so listeners never touch
/// the DOM themselves.
#[derive(Clone, Debug, Default)]
pub struct EventDetail {
    /// Current value of the input or select that fired a change event.
    pub value: Option<String>,

    /// Named field values of the form that fired a submit event.
    pub fields: BTreeMap<String, String>,
}

impl EventDetail {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn with_value<S>(value: S) -> Self
    where
        S: Into<String>,
    {
        Self {
            value: Some(value.into()),
            fields: BTreeMap::new(),
        }
    }

    pub fn with_fields<I, K, V>(fields: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            value: None,
            fields: fields
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }

    /// Look up a named form field, defaulting to the empty string as a raw
    /// DOM read would.
    pub fn field(&self, name: &str) -> &str {
        self.fields.get(name).map(String::as_str).unwrap_or("")
    }
}

/// Shared handle to a listener, so a built tree can be cloned without
/// re-creating closures.
pub type Listener = Rc<dyn Fn(&EventDetail)>;

/// A freshly built subtree. Building never aliases nodes from a previous
/// render, which is what makes discarding and replacing the whole mounted
/// tree safe.
#[derive(Clone)]
pub enum VNode {
    Element(Element),
    Text(String),
}

impl VNode {
    pub fn text<S>(content: S) -> Self
    where
        S: Into<String>,
    {
        Self::Text(content.into())
    }

    /// The element tag, if this is an element node.
    pub fn tag(&self) -> Option<&str> {
        match self {
            Self::Element(element) => Some(element.tag()),
            Self::Text(_) => None,
        }
    }

    /// The text content, if this is a text node.
    pub fn text_content(&self) -> Option<&str> {
        match self {
            Self::Element(_) => None,
            Self::Text(content) => Some(content),
        }
    }

    pub fn as_element(&self) -> Option<&Element> {
        match self {
            Self::Element(element) => Some(element),
            Self::Text(_) => None,
        }
    }
}

impl fmt::Debug for VNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Element(element) => element.fmt(f),
            Self::Text(content) => write!(f, "Text({content:?})"),
        }
    }
}

impl From<Element> for VNode {
    fn from(element: Element) -> Self {
        Self::Element(element)
    }
}

/// A single child argument. Mirrors the loose child list the page views are
/// written against: plain text, a node, a list of nodes (flattened one
/// level), or nothing at all.
pub enum Child {
    Text(String),
    Node(VNode),
    List(Vec<VNode>),
    /// Contributes no output node. Produced by `Option::None`, standing in
    /// for the non-node entries the views are allowed to pass.
    Skip,
}

impl From<&str> for Child {
    fn from(text: &str) -> Self {
        Self::Text(text.to_string())
    }
}

impl From<String> for Child {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

impl From<VNode> for Child {
    fn from(node: VNode) -> Self {
        Self::Node(node)
    }
}

impl From<Element> for Child {
    fn from(element: Element) -> Self {
        Self::Node(element.into())
    }
}

impl From<Vec<VNode>> for Child {
    fn from(nodes: Vec<VNode>) -> Self {
        Self::List(nodes)
    }
}

impl From<Vec<Element>> for Child {
    fn from(elements: Vec<Element>) -> Self {
        Self::List(elements.into_iter().map(VNode::from).collect())
    }
}

impl<T> From<Option<T>> for Child
where
    T: Into<Child>,
{
    fn from(child: Option<T>) -> Self {
        match child {
            Some(child) => child.into(),
            None => Self::Skip,
        }
    }
}

/// Declarative description of an element, together with everything required
/// to materialize it: literal attributes, a structured style map, and
/// listener bindings.
#[derive(Clone)]
pub struct Element {
    tag: String,
    attributes: Vec<(String, String)>,
    styles: Vec<(String, String)>,
    listeners: Vec<(DomEvent, Listener)>,
    children: Vec<VNode>,
}

impl Element {
    pub fn new<S>(tag: S) -> Self
    where
        S: Into<String>,
    {
        Self {
            tag: tag.into(),
            attributes: Vec::new(),
            styles: Vec::new(),
            listeners: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Set a literal attribute on the element.
    pub fn attr<N, V>(mut self, name: N, value: V) -> Self
    where
        N: Into<String>,
        V: Into<String>,
    {
        self.attributes.push((name.into(), value.into()));
        self
    }

    /// Shorthand for the `class` attribute.
    pub fn class<S>(self, value: S) -> Self
    where
        S: Into<String>,
    {
        self.attr("class", value)
    }

    /// Set a single style property. Styles are kept as a structured map and
    /// applied property-by-property, never serialized into a `style` string.
    pub fn style<N, V>(mut self, property: N, value: V) -> Self
    where
        N: Into<String>,
        V: Into<String>,
    {
        self.styles.push((property.into(), value.into()));
        self
    }

    /// Bind a listener for the given event kind.
    pub fn on<F>(mut self, event: DomEvent, listener: F) -> Self
    where
        F: 'static + Fn(&EventDetail),
    {
        self.listeners.push((event, Rc::new(listener)));
        self
    }

    /// Append a child. Accepts text, nodes, node lists (flattened one level),
    /// and `Option::None` (skipped).
    pub fn child<C>(mut self, child: C) -> Self
    where
        C: Into<Child>,
    {
        match child.into() {
            Child::Text(text) => self.children.push(VNode::Text(text)),
            Child::Node(node) => self.children.push(node),
            Child::List(nodes) => self.children.extend(nodes),
            Child::Skip => {}
        }

        self
    }

    /// Append every node produced by the iterator.
    pub fn children<I, C>(mut self, children: I) -> Self
    where
        I: IntoIterator<Item = C>,
        C: Into<Child>,
    {
        for child in children {
            self = self.child(child);
        }

        self
    }

    /// Shorthand for appending a text child.
    pub fn text<S>(self, content: S) -> Self
    where
        S: Into<String>,
    {
        self.child(VNode::text(content))
    }

    pub fn tag(&self) -> &str {
        &self.tag
    }

    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(attr, _)| attr == name)
            .map(|(_, value)| value.as_str())
    }

    pub fn attributes(&self) -> impl Iterator<Item = (&str, &str)> + '_ {
        self.attributes
            .iter()
            .map(|(name, value)| (name.as_str(), value.as_str()))
    }

    pub fn styles(&self) -> impl Iterator<Item = (&str, &str)> + '_ {
        self.styles
            .iter()
            .map(|(property, value)| (property.as_str(), value.as_str()))
    }

    pub fn listeners(&self) -> impl Iterator<Item = (DomEvent, &Listener)> + '_ {
        self.listeners
            .iter()
            .map(|(event, listener)| (*event, listener))
    }

    pub fn child_nodes(&self) -> &[VNode] {
        &self.children
    }

    /// Whether the space-separated `class` attribute contains `name`.
    pub fn has_class(&self, name: &str) -> bool {
        self.attribute("class")
            .map(|classes| classes.split_whitespace().any(|class| class == name))
            .unwrap_or(false)
    }

    /// Fire every bound listener for `event`, in binding order. Primarily a
    /// seam for driving views without a DOM.
    pub fn emit(&self, event: DomEvent, detail: &EventDetail) {
        for (bound, listener) in &self.listeners {
            if *bound == event {
                listener(detail);
            }
        }
    }
}

impl fmt::Debug for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Element")
            .field("tag", &self.tag)
            .field("attributes", &self.attributes)
            .field("styles", &self.styles)
            .field("listeners", &self.listeners.len())
            .field("children", &self.children)
            .finish()
    }
}

/// Build an element from a full declarative description in one call.
pub fn build<I, C>(tag: &str, attributes: &[(&str, &str)], children: I) -> VNode
where
    I: IntoIterator<Item = C>,
    C: Into<Child>,
{
    attributes
        .iter()
        .fold(Element::new(tag), |element, (name, value)| {
            element.attr(*name, *value)
        })
        .children(children)
        .into()
}

#[cfg(test)]
mod tests {
    use std::{cell::Cell, rc::Rc};

    use super::*;

    #[test]
    fn text_child_becomes_a_single_text_node() {
        let node = build("p", &[], ["text"]);

        let element = node.as_element().expect("element node");
        assert_eq!(element.tag(), "p");
        assert_eq!(element.child_nodes().len(), 1);
        assert_eq!(element.child_nodes()[0].text_content(), Some("text"));
    }

    #[test]
    fn node_lists_are_flattened_in_order() {
        let a = VNode::from(Element::new("span").text("a"));
        let b = VNode::from(Element::new("span").text("b"));

        let node = build("div", &[], [vec![a, b]]);

        let children = node.as_element().expect("element node").child_nodes();
        assert_eq!(children.len(), 2);
        assert_eq!(
            children[0].as_element().unwrap().child_nodes()[0].text_content(),
            Some("a")
        );
        assert_eq!(
            children[1].as_element().unwrap().child_nodes()[0].text_content(),
            Some("b")
        );
    }

    #[test]
    fn skipped_entries_contribute_no_node() {
        let node = Element::new("div")
            .child(None::<VNode>)
            .child("kept")
            .child(None::<Element>);

        assert_eq!(node.child_nodes().len(), 1);
        assert_eq!(node.child_nodes()[0].text_content(), Some("kept"));
    }

    #[test]
    fn attributes_and_styles_are_recorded_separately() {
        let element = Element::new("button")
            .class("btn btn-primary")
            .attr("type", "submit")
            .style("max-width", "400px");

        assert!(element.has_class("btn-primary"));
        assert_eq!(element.attribute("type"), Some("submit"));
        assert_eq!(element.styles().collect::<Vec<_>>(), vec![(
            "max-width",
            "400px"
        )]);
        assert_eq!(element.attribute("style"), None);
    }

    #[test]
    fn listeners_fire_with_the_supplied_detail() {
        let clicks = Rc::new(Cell::new(0));

        let element = Element::new("button").on(DomEvent::Click, {
            let clicks = Rc::clone(&clicks);
            move |_| clicks.set(clicks.get() + 1)
        });

        element.emit(DomEvent::Click, &EventDetail::empty());
        element.emit(DomEvent::Change, &EventDetail::empty());

        assert_eq!(clicks.get(), 1);
    }

    #[test]
    fn building_clones_nothing_from_prior_trees() {
        let first = Element::new("p").text("one");
        let second = Element::new("p").text("two");

        // Ownership makes aliasing impossible; both trees remain intact.
        assert_eq!(first.child_nodes()[0].text_content(), Some("one"));
        assert_eq!(second.child_nodes()[0].text_content(), Some("two"));
    }
}
