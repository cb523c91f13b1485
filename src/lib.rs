pub mod controller;
pub mod dom;
pub mod navigator;
pub mod pages;
pub mod platform;
pub mod resolver;
pub mod state;
pub mod store;
pub mod view;

use std::rc::Rc;

use wasm_bindgen::prelude::*;

use crate::{controller::RootController, dom::WebPlatform, platform::Platform, store::Store};

#[wasm_bindgen(start)]
pub fn main() -> Result<(), JsValue> {
    // Configure the panic hook to log to console.error
    std::panic::set_hook(Box::new(console_error_panic_hook::hook));

    let platform = Rc::new(WebPlatform::new()?) as Rc<dyn Platform>;
    let store = Store::new(Rc::clone(&platform));

    // The store's subscription holds the controller, and the controller holds
    // the store; the resulting cycle is the application's lifetime.
    RootController::mount(store, platform);

    Ok(())
}
