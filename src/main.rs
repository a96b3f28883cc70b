mod api;
mod app;
mod components;
mod config;
mod error;
mod format;
mod forms;
mod listing;
mod load_state;
mod models;
mod pages;
mod routes;
mod session;

fn main() {
    wasm_logger::init(wasm_logger::Config::default());
    yew::Renderer::<app::App>::new().render();
}
