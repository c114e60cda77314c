use dioxus::prelude::*;

mod api;
mod app;
mod components;
mod shared;
mod usage;
mod utils;

#[cfg(feature = "server")]
mod backend;

pub const TAILWIND_CSS: Asset = asset!("/assets/tailwind.css");

fn main() {
    #[cfg(feature = "server")]
    {
        use dioxus::logger::tracing::info;
        use dotenvy::dotenv;

        dotenv().ok();
        backend::init_tracing();
        info!(
            "[usage_api] upstream usage endpoint at {}",
            backend::usage_api::base_url()
        );
    }
    dioxus::launch(app::App);
}
