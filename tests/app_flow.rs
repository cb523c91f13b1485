//! End-to-end flows driven through the store, controller, and page views,
//! with the platform surface replaced by a recording stub.

use std::{
    cell::{Cell, RefCell},
    collections::VecDeque,
    rc::Rc,
};

use actorai_web::{
    controller::RootController,
    platform::{Platform, TimerHandle},
    state::{DemoTab, PageId, Theme},
    store::Store,
    view::{Element, VNode},
};

/// Platform stand-in that records every call and queues scheduled callbacks
/// so tests can fire them deterministically.
#[derive(Default)]
struct StubPlatform {
    mounts: RefCell<Vec<VNode>>,
    themes: RefCell<Vec<Theme>>,
    scrolls: Cell<usize>,
    timers: RefCell<VecDeque<(u32, Box<dyn FnOnce()>)>>,
}

impl StubPlatform {
    fn mount_count(&self) -> usize {
        self.mounts.borrow().len()
    }

    fn last_mount(&self) -> VNode {
        self.mounts.borrow().last().cloned().expect("a mounted tree")
    }

    fn pending_timers(&self) -> usize {
        self.timers.borrow().len()
    }

    /// Run the oldest queued callback, if any. Callbacks may queue more.
    fn fire_next(&self) -> bool {
        let next = self.timers.borrow_mut().pop_front();

        match next {
            Some((_, callback)) => {
                callback();
                true
            }
            None => false,
        }
    }
}

impl Platform for StubPlatform {
    fn mount(&self, tree: &VNode) {
        self.mounts.borrow_mut().push(tree.clone());
    }

    fn set_theme(&self, theme: Theme) {
        self.themes.borrow_mut().push(theme);
    }

    fn scroll_to_origin(&self) {
        self.scrolls.set(self.scrolls.get() + 1);
    }

    fn schedule(&self, delay_ms: u32, callback: Box<dyn FnOnce()>) -> TimerHandle {
        self.timers.borrow_mut().push_back((delay_ms, callback));
        TimerHandle::uncancellable()
    }
}

fn setup() -> (Rc<StubPlatform>, Rc<Store>) {
    let platform = Rc::new(StubPlatform::default());
    let store = Store::new(Rc::clone(&platform) as Rc<dyn Platform>);

    (platform, store)
}

/// Depth-first search for the first element carrying `class`.
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

#[test]
fn navigation_updates_page_and_notifies_once_per_call() {
    let (platform, store) = setup();

    let notifications = Rc::new(Cell::new(0));
    store.subscribe({
        let notifications = Rc::clone(&notifications);
        move || notifications.set(notifications.get() + 1)
    });

    store.navigate_to(PageId::Demo);
    assert_eq!(store.state().current_page, PageId::Demo);
    assert_eq!(notifications.get(), 1);

    // Unknown identifiers fold to home instead of failing.
    store.navigate_to(PageId::parse("does-not-exist"));
    assert_eq!(store.state().current_page, PageId::Home);
    assert_eq!(notifications.get(), 2);

    // Each navigation scrolled the viewport back to the origin.
    assert_eq!(platform.scrolls.get(), 2);
}

#[test]
fn subscribers_are_notified_in_registration_order() {
    let (_platform, store) = setup();

    let order = Rc::new(RefCell::new(Vec::new()));
    for name in ["first", "second", "third"] {
        store.subscribe({
            let order = Rc::clone(&order);
            move || order.borrow_mut().push(name)
        });
    }

    store.navigate_to(PageId::Demo);
    store.toggle_theme();

    assert_eq!(*order.borrow(), vec![
        "first", "second", "third", "first", "second", "third",
    ]);
}

#[test]
fn login_accepts_any_password_and_lands_on_the_dashboard() {
    let (_platform, store) = setup();

    store.login("actor@example.com", "");

    let state = store.state();
    let user = state.user.as_ref().expect("a signed-in user");
    assert_eq!(user.email, "actor@example.com");
    assert_eq!(state.current_page, PageId::Dashboard);
}

#[test]
fn register_keeps_the_supplied_identity() {
    let (_platform, store) = setup();

    store.register("Aya", "aya@example.com", "x");

    let state = store.state();
    let user = state.user.as_ref().expect("a signed-in user");
    assert_eq!(user.name, "Aya");
    assert_eq!(user.email, "aya@example.com");
    assert_eq!(state.current_page, PageId::Dashboard);
}

#[test]
fn logout_clears_the_session_and_returns_home() {
    let (_platform, store) = setup();

    store.login("actor@example.com", "hunter2");
    store.logout();

    let state = store.state();
    assert!(state.user.is_none());
    assert_eq!(state.current_page, PageId::Home);
}

#[test]
fn toggling_the_theme_twice_returns_to_the_original() {
    let (platform, store) = setup();

    assert_eq!(store.state().theme, Theme::Light);

    store.toggle_theme();
    assert_eq!(store.state().theme, Theme::Dark);

    store.toggle_theme();
    assert_eq!(store.state().theme, Theme::Light);

    // Both flips were pushed to the platform theme attribute.
    assert_eq!(*platform.themes.borrow(), vec![Theme::Dark, Theme::Light]);
}

#[test]
fn every_notification_triggers_a_full_rebuild() {
    let (platform, store) = setup();
    RootController::mount(Rc::clone(&store), Rc::clone(&platform) as Rc<dyn Platform>);

    // Initial render.
    assert_eq!(platform.mount_count(), 1);

    store.navigate_to(PageId::Demo);
    assert_eq!(platform.mount_count(), 2);

    store.toggle_theme();
    assert_eq!(platform.mount_count(), 3);
}

#[test]
fn demo_page_renders_three_tabs_with_analysis_active() {
    let (platform, store) = setup();
    RootController::mount(Rc::clone(&store), Rc::clone(&platform) as Rc<dyn Platform>);

    store.navigate_to(PageId::Demo);

    let tree = platform.last_mount();
    let tabs = find_by_class(&tree, "tabs").expect("a tab group");

    let buttons = tabs
        .child_nodes()
        .iter()
        .filter_map(VNode::as_element)
        .filter(|element| element.has_class("tab"))
        .collect::<Vec<_>>();

    assert_eq!(buttons.len(), 3);
    assert!(buttons[0].has_class("active"));
    assert_eq!(buttons[0].attribute("data-tab"), Some("analysis"));
    assert!(!buttons[1].has_class("active"));
    assert!(!buttons[2].has_class("active"));
}

#[test]
fn unknown_pages_render_the_home_view() {
    let (platform, store) = setup();
    RootController::mount(Rc::clone(&store), Rc::clone(&platform) as Rc<dyn Platform>);

    store.navigate_to(PageId::parse("totally-unknown"));

    let tree = platform.last_mount();
    assert!(find_by_class(&tree, "hero").is_some());
}

#[test]
fn script_analysis_arrives_only_when_the_timer_fires() {
    let (platform, store) = setup();

    store.navigate_to(PageId::Demo);
    store.analyze_demo_script();

    assert!(store.state().demo.analyzing);
    assert!(store.state().demo.analysis.is_none());
    assert_eq!(platform.pending_timers(), 1);

    assert!(platform.fire_next());

    assert!(!store.state().demo.analyzing);
    assert!(store.state().demo.analysis.is_some());
}

#[test]
fn rehearsal_simulation_plays_out_across_timers() {
    let (platform, store) = setup();

    store.navigate_to(PageId::Demo);
    store.start_demo_rehearsal();

    assert!(store.state().demo.rehearsing);
    assert_eq!(store.state().demo.messages.len(), 1);

    // Partner reply arrives, still typing.
    assert!(platform.fire_next());
    assert_eq!(store.state().demo.messages.len(), 2);
    assert!(store.state().demo.messages[1].typing);

    // Typing settles.
    assert!(platform.fire_next());
    assert!(!store.state().demo.messages[1].typing);

    // Actor follow-up lands.
    assert!(platform.fire_next());
    assert_eq!(store.state().demo.messages.len(), 3);
    assert!(!platform.fire_next());
}

#[test]
fn navigating_resets_the_demo_page_state() {
    let (_platform, store) = setup();

    store.navigate_to(PageId::Demo);
    store.select_demo_tab(DemoTab::Partner);
    assert_eq!(store.state().demo.active_tab, DemoTab::Partner);

    store.navigate_to(PageId::Demo);
    assert_eq!(store.state().demo.active_tab, DemoTab::Analysis);
}

#[test]
fn pending_timers_survive_navigation() {
    let (platform, store) = setup();

    store.navigate_to(PageId::Demo);
    store.analyze_demo_script();
    store.navigate_to(PageId::Home);

    // Nothing cancels the simulation when the user navigates away; the
    // callback still runs against the (reset) demo state.
    assert_eq!(platform.pending_timers(), 1);
    assert!(platform.fire_next());
    assert!(store.state().demo.analysis.is_some());
}
