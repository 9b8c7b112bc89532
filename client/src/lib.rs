//! # client
//!
//! Leptos + WASM frontend for the Gold Stable token: wallet connection, the
//! approve-then-mint Token Panel, the mint/redeem Contract Panel with oracle
//! price, and the NFT Gallery.
//!
//! Panel logic lives in `actions` and `state` and runs against the `chain`
//! crate's reader/writer traits, so it is tested without a browser. `net`
//! supplies the browser implementations (host RPC proxy, injected wallet).

pub mod actions;
pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: hydrate the server-rendered page.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
