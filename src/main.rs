//! Range Admin Frontend Entry Point

mod api;
mod app;
mod components;
mod context;
mod controller;
mod models;
mod pages;
mod pagination;
mod query;
mod routes;
mod store;
mod url_state;
mod validate;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    mount_to_body(App);
}
