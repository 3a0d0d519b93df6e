#![cfg(target_arch = "wasm32")]
use std::cell::RefCell;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod constants;
mod core;
mod dom;
mod events;
mod frame;
mod input;
mod render;
mod site;

thread_local! {
    static SITE: RefCell<Option<site::Site>> = const { RefCell::new(None) };
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("motion-site starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    let site = site::mount(&window, &document);
    SITE.with(|slot| {
        if slot.borrow_mut().replace(site).is_some() {
            log::warn!("[site] remounted; previous instance released");
        }
    });
    Ok(())
}

/// Release every listener and stop the animation loop.
#[wasm_bindgen]
pub fn teardown() {
    let released = SITE.with(|slot| slot.borrow_mut().take());
    if released.is_some() {
        log::info!("[site] torn down");
    }
    drop(released);
}
