use std::{cell::Cell, rc::Rc};

use crate::{pages::PageContext, platform::Platform, resolver::resolve, store::Store};

/// Render lifecycle of the controller. Renders run synchronously, so the
/// controller is back in `Idle` by the time any mutation can be observed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Phase {
    Idle,
    Rendering,
}

/// Subscribes to the store and re-renders on every notification by throwing
/// away the previously mounted tree and building the current page from
/// scratch. No diffing, no partial updates: the full rebuild keeps the
/// mounted output trivially consistent with the state that produced it.
pub struct RootController {
    store: Rc<Store>,
    platform: Rc<dyn Platform>,
    phase: Cell<Phase>,
}

impl RootController {
    /// Attach a controller to the store and perform the initial render.
    ///
    /// The subscription closure keeps the controller alive for the lifetime
    /// of the store, which in this application is the lifetime of the page.
    pub fn mount(store: Rc<Store>, platform: Rc<dyn Platform>) -> Rc<Self> {
        let controller = Rc::new(Self {
            store: Rc::clone(&store),
            platform,
            phase: Cell::new(Phase::Idle),
        });

        store.subscribe({
            let controller = Rc::clone(&controller);
            move || controller.render()
        });

        controller.render();

        controller
    }

    fn render(&self) {
        // Views are pure, so a notification cannot arrive mid-render; the
        // guard only protects against a misbehaving subscriber re-entering.
        if self.phase.get() == Phase::Rendering {
            return;
        }

        self.phase.set(Phase::Rendering);

        let page = self.store.state().current_page;
        let context = PageContext::new(Rc::clone(&self.store));
        let tree = resolve(page)(&context);

        self.platform.mount(&tree);

        self.phase.set(Phase::Idle);
    }
}
