use log::{info, Level};
use yew::prelude::*;

mod config;
mod enquiry;
mod pricing;
mod components {
    pub mod toast;
}
mod pages {
    pub mod calculator;
    pub mod common;
    pub mod enquiry_form;
    pub mod landing;
}

use pages::landing::Landing;

#[function_component]
fn App() -> Html {
    html! {
        <Landing />
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    if let Err(e) = console_log::init_with_level(Level::Info) {
        web_sys::console::error_1(&format!("error initializing log: {}", e).into());
    }

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
