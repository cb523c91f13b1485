//! Page views rendered against a stub-backed store, with listener bindings
//! driven directly through the declarative tree.

use std::{
    cell::{Cell, RefCell},
    collections::VecDeque,
    rc::Rc,
};

use actorai_web::{
    pages::PageContext,
    platform::{Platform, TimerHandle},
    resolver::resolve,
    state::{DemoTab, PageId, Theme},
    store::Store,
    view::{DomEvent, Element, EventDetail, VNode},
};

struct SilentPlatform {
    scrolls: Cell<usize>,
    timers: RefCell<VecDeque<Box<dyn FnOnce()>>>,
}

impl SilentPlatform {
    fn new() -> Rc<Self> {
        Rc::new(Self {
            scrolls: Cell::new(0),
            timers: RefCell::new(VecDeque::new()),
        })
    }
}

impl Platform for SilentPlatform {
    fn mount(&self, _tree: &VNode) {}

    fn set_theme(&self, _theme: Theme) {}

    fn scroll_to_origin(&self) {
        self.scrolls.set(self.scrolls.get() + 1);
    }

    fn schedule(&self, _delay_ms: u32, callback: Box<dyn FnOnce()>) -> TimerHandle {
        self.timers.borrow_mut().push_back(callback);
        TimerHandle::uncancellable()
    }
}

fn store() -> Rc<Store> {
    Store::new(SilentPlatform::new() as Rc<dyn Platform>)
}

fn render(store: &Rc<Store>) -> VNode {
    let context = PageContext::new(Rc::clone(store));
    resolve(store.state().current_page)(&context)
}

fn find_by_class<'t>(node: &'t VNode, class: &str) -> Option<&'t Element> {
    let element = node.as_element()?;

    if element.has_class(class) {
        return Some(element);
    }

    element
        .child_nodes()
        .iter()
        .find_map(|child| find_by_class(child, class))
}

fn find_by_tag<'t>(node: &'t VNode, tag: &str) -> Option<&'t Element> {
    let element = node.as_element()?;

    if element.tag() == tag {
        return Some(element);
    }

    element
        .child_nodes()
        .iter()
        .find_map(|child| find_by_tag(child, tag))
}

fn contains_text(node: &VNode, needle: &str) -> bool {
    match node {
        VNode::Text(content) => content.contains(needle),
        VNode::Element(element) => element
            .child_nodes()
            .iter()
            .any(|child| contains_text(child, needle)),
    }
}

#[test]
fn every_page_renders_without_a_session() {
    let store = store();

    for page in [
        PageId::Home,
        PageId::Demo,
        PageId::Login,
        PageId::Register,
        PageId::Dashboard,
        PageId::Scripts,
        PageId::ScriptAnalysis,
        PageId::Rehearsal,
        PageId::Recordings,
        PageId::RecordingAnalysis,
        PageId::Analytics,
    ] {
        store.navigate_to(page);
        let tree = render(&store);
        assert!(tree.as_element().is_some(), "{page:?} produced no element");
    }
}

#[test]
fn workspace_pages_prompt_for_login_without_a_session() {
    let store = store();

    for page in [
        PageId::Dashboard,
        PageId::Scripts,
        PageId::Recordings,
        PageId::Analytics,
    ] {
        store.navigate_to(page);
        let tree = render(&store);
        assert!(
            contains_text(&tree, "You are not logged in"),
            "{page:?} did not guard against a missing user"
        );
    }
}

#[test]
fn dashboard_greets_the_signed_in_user() {
    let store = store();
    store.register("Aya", "aya@example.com", "x");

    let tree = render(&store);
    assert!(contains_text(&tree, "Welcome back, Aya"));
    assert!(find_by_class(&tree, "sidebar").is_some());
}

#[test]
fn submitting_the_login_form_signs_in_and_redirects() {
    let store = store();
    store.navigate_to(PageId::Login);

    let tree = render(&store);
    let form = find_by_tag(&tree, "form").expect("a login form");

    form.emit(
        DomEvent::Submit,
        &EventDetail::with_fields([("email", "actor@example.com"), ("password", "x")]),
    );

    let state = store.state();
    assert_eq!(state.current_page, PageId::Dashboard);
    assert_eq!(
        state.user.as_ref().expect("a signed-in user").email,
        "actor@example.com"
    );
}

#[test]
fn clicking_a_demo_tab_switches_the_active_tab() {
    let store = store();
    store.navigate_to(PageId::Demo);

    let tree = render(&store);
    let tabs = find_by_class(&tree, "tabs").expect("a tab group");

    let partner = tabs
        .child_nodes()
        .iter()
        .filter_map(VNode::as_element)
        .find(|button| button.attribute("data-tab") == Some("partner"))
        .expect("a partner tab");

    partner.emit(DomEvent::Click, &EventDetail::empty());
    assert_eq!(store.state().demo.active_tab, DemoTab::Partner);

    // The next render marks the clicked tab active.
    let tree = render(&store);
    let tabs = find_by_class(&tree, "tabs").expect("a tab group");
    let active = tabs
        .child_nodes()
        .iter()
        .filter_map(VNode::as_element)
        .find(|button| button.has_class("active"))
        .expect("an active tab");
    assert_eq!(active.attribute("data-tab"), Some("partner"));
}

#[test]
fn changing_the_methodology_select_updates_the_store() {
    let store = store();
    store.navigate_to(PageId::Demo);

    let tree = render(&store);
    let select = find_by_tag(&tree, "select").expect("a methodology select");

    select.emit(DomEvent::Change, &EventDetail::with_value("meisner"));
    assert_eq!(store.state().demo.methodology, "meisner");
}

#[test]
fn the_navbar_reflects_the_session() {
    let store = store();

    let tree = render(&store);
    assert!(contains_text(&tree, "Log in"));
    assert!(!contains_text(&tree, "Log out"));

    store.login("actor@example.com", "pw");
    let tree = render(&store);
    assert!(contains_text(&tree, "Log out"));
}
