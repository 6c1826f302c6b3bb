//! Tierlistify Frontend Entry Point

mod app;
mod components;
mod context;
mod draft;
mod logging;
mod models;
mod reassign;
mod repository;
mod search;
mod share;
mod storage;
mod templates;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    mount_to_body(App);
}
