use yew::prelude::*;
use yew_router::prelude::*;

mod components;
mod config;
mod contexts;
mod hooks;
mod i18n;
mod pages;
mod router;
mod services;
mod types;
mod utils;

use contexts::ToastProvider;
use i18n::I18nProvider;
use router::{switch, Route};

#[function_component(App)]
fn app() -> Html {
    html! {
        <I18nProvider>
            <ToastProvider>
                <BrowserRouter>
                    <Switch<Route> render={switch} />
                </BrowserRouter>
            </ToastProvider>
        </I18nProvider>
    }
}

#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn main() {
    wasm_logger::init(wasm_logger::Config::default());
    log::info!("PetConnect starting...");
    yew::Renderer::<App>::new().render();
}
