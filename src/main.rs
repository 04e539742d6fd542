//! Calorie Tracker Frontend Entry Point

mod app;
mod chart;
mod components;
mod config;
mod context;
mod error;
mod logging;
mod models;
mod sort;
mod storage;
mod store;
mod validation;

use std::any::Any;
use std::cell::RefCell;

use app::App;
use config::TrackerConfig;
use leptos::prelude::*;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

thread_local! {
    /// Handle of the mounted app; dropping it unmounts and runs every cleanup
    static MOUNTED: RefCell<Option<Box<dyn Any>>> = const { RefCell::new(None) };
}

fn main() {
    console_error_panic_hook::set_once();

    let Some(document) = web_sys::window().and_then(|win| win.document()) else {
        return;
    };

    let defaults = TrackerConfig::default();
    let container = document
        .get_element_by_id(&defaults.container_id)
        .and_then(|el| el.dyn_into::<web_sys::HtmlElement>().ok());

    let config = match &container {
        Some(el) => defaults.with_overrides(|name| el.get_attribute(name)),
        None => defaults,
    };
    logging::init(config.log_level);

    let parent = match container {
        Some(el) => {
            log::info!(target: "APP", "Mounting into #{}", config.container_id);
            el
        }
        None => {
            log::warn!(target: "APP", "#{} not found, mounting to body", config.container_id);
            match document.body() {
                Some(body) => body,
                None => {
                    log::error!(target: "APP", "Document has no body");
                    return;
                }
            }
        }
    };

    let handle = leptos::mount::mount_to(parent, move || view! { <App config=config /> });
    MOUNTED.with(|slot| *slot.borrow_mut() = Some(Box::new(handle)));

    if let Err(e) = unmount_on_pagehide() {
        log::error!(target: "APP", "Cannot listen for pagehide: {:?}", e);
    }
}

/// Drop the mount handle when the page goes away so the records are flushed
/// and the chart is destroyed
fn unmount_on_pagehide() -> Result<(), JsValue> {
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
    let closure = Closure::<dyn FnMut(web_sys::Event)>::new(move |_| {
        if let Some(handle) = MOUNTED.with(|slot| slot.borrow_mut().take()) {
            drop(handle);
        }
    });
    window.add_event_listener_with_callback("pagehide", closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}
