// src/main.rs — Mergington activities signup (Rust + Yew + WASM)
mod api;
mod app;
mod config;
mod error;
mod model;
mod outcome;
mod roster;
mod signup_form;
mod status;
mod view;

use gloo::console::log;

use crate::app::{App, AppProps};
use crate::config::AppConfig;

fn main() {
    let config = AppConfig::from_build_env();
    log!(format!("activity roster starting, api base: {:?}", config.api_base));
    yew::Renderer::<App>::with_props(AppProps { config }).render();
}
