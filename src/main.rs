#![allow(warnings)]
//! Habit Tracker Frontend Entry Point

mod models;
mod source;
mod chart;
mod context;
mod store;
mod theme;
mod components;
mod app;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    mount_to_body(App);
}
