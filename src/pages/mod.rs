pub mod analytics;
mod chrome;
pub mod dashboard;
pub mod demo;
pub mod home;
pub mod login;
pub mod recording_analysis;
pub mod recordings;
pub mod register;
pub mod rehearsal;
pub mod script_analysis;
pub mod scripts;

use std::{
    cell::Ref,
    rc::Rc,
};

use crate::{
    navigator::Navigator,
    state::{AppState, DemoTab},
    store::Store,
};

/// Everything a page view may depend on: read access to the current state,
/// and the two mutation façades. Views never see the store type itself, which
/// keeps the view → store dependency one-way and lets tests drive views
/// against a stub-backed store.
pub struct PageContext {
    store: Rc<Store>,
    navigator: Navigator,
}

impl PageContext {
    pub fn new(store: Rc<Store>) -> Self {
        Self {
            navigator: Navigator::new(Rc::clone(&store)),
            store,
        }
    }

    /// Read access to the state for the duration of this render. The borrow
    /// must not be held across a mutation.
    pub fn state(&self) -> Ref<'_, AppState> {
        self.store.state()
    }

    pub fn navigator(&self) -> Navigator {
        self.navigator.clone()
    }

    pub fn actions(&self) -> Actions {
        Actions {
            store: Rc::clone(&self.store),
        }
    }
}

/// Non-navigation mutations available to view handlers. Like [`Navigator`],
/// a deliberately narrow capability over the store.
#[derive(Clone)]
pub struct Actions {
    store: Rc<Store>,
}

impl Actions {
    pub fn toggle_theme(&self) {
        self.store.toggle_theme();
    }

    pub fn login(&self, email: &str, password: &str) {
        self.store.login(email, password);
    }

    pub fn register(&self, name: &str, email: &str, password: &str) {
        self.store.register(name, email, password);
    }

    pub fn logout(&self) {
        self.store.logout();
    }

    pub fn select_demo_tab(&self, tab: DemoTab) {
        self.store.select_demo_tab(tab);
    }

    pub fn set_demo_script(&self, text: &str) {
        self.store.set_demo_script(text);
    }

    pub fn use_sample_script(&self) {
        self.store.use_sample_script();
    }

    pub fn select_methodology(&self, id: &str) {
        self.store.select_methodology(id);
    }

    pub fn analyze_script(&self) {
        self.store.analyze_demo_script();
    }

    pub fn start_rehearsal(&self) {
        self.store.start_demo_rehearsal();
    }
}
