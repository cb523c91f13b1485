use std::rc::Rc;

use crate::{state::PageId, store::Store};

/// The navigation capability handed to views. A deliberate seam over the
/// store so view code depends on "can change page" rather than on the store's
/// full mutation surface.
#[derive(Clone)]
pub struct Navigator {
    store: Rc<Store>,
}

impl Navigator {
    pub fn new(store: Rc<Store>) -> Self {
        Self { store }
    }

    pub fn navigate(&self, page: PageId) {
        self.store.navigate_to(page);
    }
}
