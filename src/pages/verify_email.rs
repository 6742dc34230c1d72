use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::contexts::use_toast;
use crate::i18n::use_translation;
use crate::router::Route;
use crate::services::auth::AuthService;
use crate::utils::validation::is_valid_email;

#[function_component(VerifyEmail)]
pub fn verify_email() -> Html {
    let location = use_location().unwrap();
    let toast = use_toast();
    let i18n = use_translation();

    // Email carried over from the auth screen, if any.
    let prefilled = location.state::<String>().map(|rc| (*rc).clone());

    let sending = use_state(|| false);
    let email_input = use_node_ref();

    let on_resend = {
        let email_input = email_input.clone();
        let sending = sending.clone();
        let toast = toast.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let email = email_input.cast::<HtmlInputElement>().unwrap().value();

            if email.is_empty() {
                toast.error(i18n.t("verify_error_no_email"));
                return;
            }
            if !is_valid_email(&email) {
                toast.error(i18n.t("auth_invalid_email"));
                return;
            }

            let sending = sending.clone();
            let toast = toast.clone();
            sending.set(true);
            spawn_local(async move {
                match AuthService::resend_confirmation(&email).await {
                    Ok(()) => toast.success(i18n.t("verify_resend_success_title")),
                    Err(error) => {
                        log::error!("resend confirmation failed: {error}");
                        toast.error_with_detail(
                            i18n.t("verify_resend_error_title"),
                            error.to_string(),
                        );
                    }
                }
                sending.set(false);
            });
        })
    };

    html! {
        <div class="min-h-screen bg-gradient-to-br from-orange-50 via-white to-amber-50 flex items-center justify-center p-4">
            <div class="w-full max-w-md">
                <Link<Route> to={Route::Auth} classes="inline-flex items-center gap-2 mb-8 text-gray-500 hover:text-gray-800">
                    {"← "}{i18n.t("verify_back_to_auth")}
                </Link<Route>>

                <div class="bg-white border-2 rounded-xl shadow-xl p-6 text-center">
                    <div class="text-4xl mb-3">{"📬"}</div>
                    <h1 class="text-2xl font-bold mb-2">{i18n.t("verify_title")}</h1>
                    <p class="text-gray-500 mb-6">{i18n.t("verify_description")}</p>

                    <form onsubmit={on_resend} class="space-y-4 text-left">
                        <div>
                            <label for="verify-email" class="block text-sm font-medium mb-1">
                                {i18n.t("verify_email_label")}
                            </label>
                            <input
                                ref={email_input.clone()}
                                id="verify-email"
                                type="email"
                                value={prefilled.unwrap_or_default()}
                                placeholder="seu@email.com"
                                class="w-full px-3 py-2 border rounded-md focus:outline-none focus:ring-2 focus:ring-orange-400"
                            />
                        </div>
                        <button
                            type="submit"
                            disabled={*sending}
                            class="w-full bg-orange-500 hover:bg-orange-600 disabled:bg-orange-300 text-white font-bold py-2 px-4 rounded-md"
                        >
                            if *sending { {i18n.t("verify_resend_loading")} } else { {i18n.t("verify_resend_button")} }
                        </button>
                    </form>

                    <p class="text-sm text-gray-500 mt-6">{i18n.t("verify_hint")}</p>
                    <Link<Route> to={Route::Auth} classes="inline-block mt-3 text-orange-600 hover:underline text-sm">
                        {i18n.t("verify_already_confirmed")}
                    </Link<Route>>
                </div>
            </div>
        </div>
    }
}
