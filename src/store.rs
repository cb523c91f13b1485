use std::{
    cell::{Ref, RefCell},
    rc::{Rc, Weak},
};

use crate::{
    platform::{Platform, TimerHandle},
    state::{AppState, ChatMessage, DemoState, DemoTab, PageId, SceneAnalysis, User, sample_script},
};

/// Callback invoked after every state mutation. Registered once, never
/// removed; there is no unsubscribe operation.
pub type Subscriber = Rc<dyn Fn()>;

/// Owner of all application state. Mutating methods update the state, notify
/// every subscriber synchronously in registration order, and delegate any
/// platform side effects (scrolling, theme attribute, timers) to the
/// [`Platform`] handed in at construction.
///
/// The store is an explicitly constructed instance shared as `Rc<Store>`;
/// nothing reads it through a global.
pub struct Store {
    state: RefCell<AppState>,
    subscribers: RefCell<Vec<Subscriber>>,
    platform: Rc<dyn Platform>,

    /// Weak reference back to this instance, so scheduled callbacks can reach
    /// the store without keeping it alive.
    self_ref: RefCell<Weak<Store>>,

    /// Handles for every scheduled simulation step. Retained so the pending
    /// callbacks stay alive; nothing cancels them when the user navigates
    /// away mid-simulation.
    pending_timers: RefCell<Vec<TimerHandle>>,
}

impl Store {
    /// Create a store over the seeded startup state.
    pub fn new(platform: Rc<dyn Platform>) -> Rc<Self> {
        let store = Rc::new(Self {
            state: RefCell::new(AppState::seeded()),
            subscribers: RefCell::new(Vec::new()),
            platform,
            self_ref: RefCell::new(Weak::new()),
            pending_timers: RefCell::new(Vec::new()),
        });

        *store.self_ref.borrow_mut() = Rc::downgrade(&store);

        store
    }

    /// Shared borrow of the current state. Callers must not hold the borrow
    /// across a mutating call.
    pub fn state(&self) -> Ref<'_, AppState> {
        self.state.borrow()
    }

    /// Register a subscriber. No de-duplication is performed.
    pub fn subscribe<F>(&self, subscriber: F)
    where
        F: 'static + Fn(),
    {
        self.subscribers
            .borrow_mut()
            .push(Rc::new(subscriber) as Subscriber);
    }

    /// Invoke every subscriber registered at the time of the call, in
    /// registration order. A panicking subscriber propagates to the caller of
    /// the mutation that triggered the notification.
    pub fn notify_all(&self) {
        // Snapshot so a subscriber registering another subscriber does not
        // invalidate the iteration.
        let subscribers = self.subscribers.borrow().clone();

        for subscriber in subscribers {
            subscriber();
        }
    }

    /// Switch the current page, notify, and scroll the viewport back to the
    /// top. Demo-page state is rebuilt from scratch on every navigation.
    pub fn navigate_to(&self, page: PageId) {
        {
            let mut state = self.state.borrow_mut();
            state.current_page = page;
            state.demo = DemoState::default();
        }

        self.notify_all();
        self.platform.scroll_to_origin();
    }

    /// Flip between light and dark, apply the theme attribute, and notify.
    pub fn toggle_theme(&self) {
        let theme = {
            let mut state = self.state.borrow_mut();
            state.theme = state.theme.flipped();
            state.theme
        };

        self.platform.set_theme(theme);
        self.notify_all();
    }

    /// Simulated login: the password is accepted unchecked and the user is a
    /// fixed placeholder identity carrying the supplied email.
    pub fn login(&self, email: &str, _password: &str) {
        self.state.borrow_mut().user = Some(User {
            id: "1".into(),
            name: "Sarah Mitchell".into(),
            email: email.into(),
        });

        self.navigate_to(PageId::Dashboard);
    }

    /// Simulated registration, same shape as [`Store::login`] but keeping the
    /// supplied name.
    pub fn register(&self, name: &str, email: &str, _password: &str) {
        self.state.borrow_mut().user = Some(User {
            id: "1".into(),
            name: name.into(),
            email: email.into(),
        });

        self.navigate_to(PageId::Dashboard);
    }

    pub fn logout(&self) {
        self.state.borrow_mut().user = None;
        self.navigate_to(PageId::Home);
    }

    // ---- Demo page operations ----

    pub fn select_demo_tab(&self, tab: DemoTab) {
        self.state.borrow_mut().demo.active_tab = tab;
        self.notify_all();
    }

    pub fn set_demo_script(&self, text: &str) {
        self.state.borrow_mut().demo.script_text = text.into();
        self.notify_all();
    }

    pub fn use_sample_script(&self) {
        self.set_demo_script(sample_script());
    }

    pub fn select_methodology(&self, id: &str) {
        self.state.borrow_mut().demo.methodology = id.into();
        self.notify_all();
    }

    /// Kick off the simulated analysis pass: the spinner shows immediately,
    /// and the canned results land after a fixed delay.
    pub fn analyze_demo_script(&self) {
        self.state.borrow_mut().demo.analyzing = true;
        self.notify_all();

        self.schedule(2000, |store| {
            let mut state = store.state.borrow_mut();
            state.demo.analyzing = false;
            state.demo.analysis = Some(SceneAnalysis::sample());
            drop(state);

            store.notify_all();
        });
    }

    /// Run the scripted rehearsal exchange: the opening line appears at once,
    /// then the partner reply (typing, then settled), then the actor's
    /// follow-up, each step on its own timer.
    pub fn start_demo_rehearsal(&self) {
        {
            let mut state = self.state.borrow_mut();
            state.demo.rehearsing = true;
            state.demo.messages = vec![ChatMessage::actor(
                "But soft, what light through yonder window breaks? \
                 It is the east, and Juliet is the sun.",
            )];
        }
        self.notify_all();

        self.schedule(1500, |store| {
            store.state.borrow_mut().demo.messages.push(ChatMessage::partner(
                "O Romeo, Romeo, wherefore art thou Romeo? \
                 Deny thy father and refuse thy name.",
            ));
            store.notify_all();

            store.schedule(1000, |store| {
                if let Some(last) = store.state.borrow_mut().demo.messages.last_mut() {
                    last.typing = false;
                }
                store.notify_all();

                store.schedule(1500, |store| {
                    store.state.borrow_mut().demo.messages.push(ChatMessage::actor(
                        "Shall I hear more, or shall I speak at this?",
                    ));
                    store.notify_all();
                });
            });
        });
    }

    /// Schedule a deferred mutation against this store, retaining the handle.
    /// The callback holds only a weak reference, so a torn-down store simply
    /// drops the step.
    fn schedule<F>(&self, delay_ms: u32, step: F)
    where
        F: 'static + FnOnce(&Store),
    {
        let store = self.self_ref.borrow().clone();

        let handle = self.platform.schedule(
            delay_ms,
            Box::new(move || {
                if let Some(store) = store.upgrade() {
                    step(&store);
                }
            }),
        );

        self.pending_timers.borrow_mut().push(handle);
    }
}
